//! Library components of the `qsheet` terminal browser.

pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
