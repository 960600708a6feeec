//! Rendering of previews, passwords, and history.

use std::io::{self, Write};

use zeroize::Zeroizing;

use super::quiet;
use crate::pass::{ConfigurationError, GenerationOptions, Preview};
use crate::rand;
use crate::terminal::{box_bottom, box_line, box_meter, box_top};

const PLACEHOLDER: &str = "—";
const HINT: &str = "Entropy is the log₂ of the search space. Higher is stronger.";

/// Labels shown for a preview, or placeholders when the options are invalid.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewLines {
    pub entropy: String,
    pub charset: String,
    pub strength: String,
    pub meter_percent: u8,
    pub hint: String,
}

impl PreviewLines {
    pub fn new(preview: &Result<Preview, ConfigurationError>) -> Self {
        match preview {
            Ok(p) => Self {
                entropy: format!("Entropy: {:.1} bits", p.entropy_bits),
                charset: format!("Charset: {} chars", p.charset_size),
                strength: format!("Strength: {}", p.strength),
                meter_percent: p.strength.meter_percent(),
                hint: HINT.to_string(),
            },
            Err(e) => Self {
                entropy: format!("Entropy: {PLACEHOLDER}"),
                charset: format!("Charset: {PLACEHOLDER}"),
                strength: format!("Strength: {PLACEHOLDER}"),
                meter_percent: 0,
                hint: e.to_string(),
            },
        }
    }
}

pub fn print_preview(opts: &GenerationOptions, preview: &Result<Preview, ConfigurationError>) {
    let lines = PreviewLines::new(preview);

    box_top(&format!("Length {}", opts.length));
    box_line(&format!("{} • {}", lines.entropy, lines.charset));
    box_line(&format!(
        "{} • Source: {}",
        lines.strength,
        rand::entropy_source()
    ));
    box_meter(lines.meter_percent);
    box_line(&lines.hint);
    box_bottom();
}

/// Passwords go to stdout, one per line.
pub fn print_passwords(passwords: &[Zeroizing<String>]) -> io::Result<()> {
    write_passwords(&mut io::stdout().lock(), passwords)
}

fn write_passwords<W: Write>(out: &mut W, passwords: &[Zeroizing<String>]) -> io::Result<()> {
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn print_history(entries: &[String]) {
    if quiet::enabled() {
        for entry in entries {
            println!("{entry}");
        }
        return;
    }

    box_top("History");
    if entries.is_empty() {
        box_line("No saved passwords yet.");
    }
    for (i, entry) in entries.iter().enumerate() {
        box_line(&format!("{:>3}  {}", i + 1, entry));
    }
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClass, GenerationOptions};

    #[test]
    fn preview_lines_for_valid_options() {
        let opts = GenerationOptions {
            classes: [CharClass::Lower, CharClass::Upper, CharClass::Digit]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let lines = PreviewLines::new(&Preview::new(&opts));
        assert_eq!(lines.entropy, "Entropy: 95.3 bits");
        assert_eq!(lines.charset, "Charset: 62 chars");
        assert_eq!(lines.strength, "Strength: Excellent");
        assert_eq!(lines.meter_percent, 100);
        assert_eq!(lines.hint, HINT);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn passwords_are_written_one_per_line() {
        let passwords = [Zeroizing::new("abc".to_string()), Zeroizing::new("xyz".to_string())];
        let mut out = Vec::new();
        write_passwords(&mut out, &passwords).unwrap();
        assert_eq!(out, b"abc\nxyz\n");
    }

    #[test]
    fn failed_password_write_is_reported() {
        let passwords = [Zeroizing::new("abc".to_string())];
        let err = write_passwords(&mut FullDisk, &passwords).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn preview_lines_reset_on_error() {
        let lines = PreviewLines::new(&Err(ConfigurationError::AllFilteredOut));
        assert_eq!(lines.entropy, "Entropy: —");
        assert_eq!(lines.charset, "Charset: —");
        assert_eq!(lines.strength, "Strength: —");
        assert_eq!(lines.meter_percent, 0);
        assert_eq!(
            lines.hint,
            "All selected sets were filtered out. Relax exclusions."
        );
    }
}
