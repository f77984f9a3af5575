use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Console writer whose contents can be inspected after the converter
/// has taken ownership of it.
#[derive(Clone, Default)]
pub struct Console(Arc<Mutex<Vec<u8>>>);

impl Console {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("console lock").clone();
        String::from_utf8(bytes).expect("console output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("console lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
