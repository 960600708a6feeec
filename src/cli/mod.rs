//! Command line front end. Owns all terminal and file I/O around the
//! generator core.

mod context;
mod display;
mod flags;
mod prompts;

use clap::Parser;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use prompts::quiet;

/// Parse arguments and run. Returns the process exit code.
pub fn run() -> i32 {
    let flags = CliFlags::parse();
    log::debug!("flags: {flags:?}");

    match Context::new(flags).run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
