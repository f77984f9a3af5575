//! Integrations with the Omicron Vernissage software suite.

pub mod cmd;
