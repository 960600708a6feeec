//! Shared terminal utilities.
//!
//! Box drawing, the strength meter, and ANSI helpers.

mod output;

pub use output::*;
