//! Command line options and disk-backed image loading for the desktop app.

pub mod args;
pub mod source;

pub use args::*;
pub use source::*;
