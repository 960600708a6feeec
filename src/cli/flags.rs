use clap::Parser;

use crate::pass::parse_length;

#[derive(Debug, Default, Parser)]
#[command(
    name = "vaultforge",
    version,
    about = "Random password generator with entropy estimate and local history"
)]
pub struct CliFlags {
    /// Password length, clamped to 6..=64
    #[arg(short, long, value_parser = length_arg)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Use lowercase letters
    #[arg(long)]
    pub lower: bool,
    /// Use uppercase letters
    #[arg(long)]
    pub upper: bool,
    /// Use digits
    #[arg(long)]
    pub digits: bool,
    /// Use symbols
    #[arg(long)]
    pub symbols: bool,

    #[arg(long, conflicts_with = "lower")]
    pub no_lower: bool,
    #[arg(long, conflicts_with = "upper")]
    pub no_upper: bool,
    #[arg(long, conflicts_with = "digits")]
    pub no_digits: bool,
    #[arg(long, conflicts_with = "symbols")]
    pub no_symbols: bool,

    /// Replace the symbol alphabet (printable characters only)
    #[arg(long, value_name = "CHARS", value_parser = special_arg)]
    pub special: Option<String>,

    /// Leave out {}[]()/'"`~,;:.<>\
    #[arg(long)]
    pub no_ambiguous: bool,
    /// Leave out look-alikes such as i, l, 1, o, 0
    #[arg(long)]
    pub no_similar: bool,
    /// Never use a character twice
    #[arg(long)]
    pub no_repeat: bool,
    /// At least one character from every selected set
    #[arg(long)]
    pub require_each: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long)]
    pub defaults: bool,

    /// Store the current options as defaults
    #[arg(long)]
    pub set_defaults: bool,

    /// Show entropy and strength without generating
    #[arg(long)]
    pub preview: bool,

    /// Save generated passwords to history
    #[arg(short, long)]
    pub save: bool,

    /// Copy the last password to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// List saved passwords
    #[arg(long, conflicts_with_all = ["delete", "clear_history"])]
    pub history: bool,

    /// Delete a saved password by its number in --history
    #[arg(long, value_name = "N")]
    pub delete: Option<usize>,

    /// Delete all saved passwords
    #[arg(long)]
    pub clear_history: bool,

    /// Print passwords only
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    pub fn has_class_selection(&self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }

    pub fn is_history_command(&self) -> bool {
        self.history || self.delete.is_some() || self.clear_history
    }
}

fn length_arg(s: &str) -> Result<usize, String> {
    Ok(parse_length(s))
}

fn special_arg(s: &str) -> Result<String, String> {
    match s.chars().find(|c| c.is_control() || c.is_whitespace()) {
        Some(c) => Err(format!("{:?} is not a printable symbol", c)),
        None => Ok(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("vaultforge").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn length_is_lenient_and_clamped() {
        assert_eq!(parse(&["-l", "20"]).length, Some(20));
        assert_eq!(parse(&["--length", "3"]).length, Some(6));
        assert_eq!(parse(&["-l", "huge"]).length, Some(16));
    }

    #[test]
    fn class_flags() {
        let flags = parse(&["--lower", "--digits"]);
        assert!(flags.has_class_selection());
        assert!(!parse(&["--no-upper"]).has_class_selection());
    }

    #[test]
    fn enabling_and_disabling_a_class_conflicts() {
        let res = CliFlags::try_parse_from(["vaultforge", "--lower", "--no-lower"]);
        assert!(res.is_err());
    }

    #[test]
    fn special_rejects_whitespace_and_control_characters() {
        assert_eq!(parse(&["--special", "#$,|"]).special.as_deref(), Some("#$,|"));
        for bad in ["ab\ncd", "a b", "x\ty", "\u{1b}[2J", "\r"] {
            let res = CliFlags::try_parse_from(["vaultforge", "--special", bad]);
            assert!(res.is_err(), "{bad:?}");
        }
    }

    #[test]
    fn defaults_flag_parses() {
        assert!(parse(&["-d"]).defaults);
        assert!(parse(&["--defaults"]).defaults);
        assert!(!parse(&[]).defaults);
    }

    #[test]
    fn history_commands() {
        assert!(parse(&["--history"]).is_history_command());
        assert_eq!(parse(&["--delete", "3"]).delete, Some(3));
        assert!(parse(&["--clear-history"]).is_history_command());
        assert!(!parse(&["-s", "-b"]).is_history_command());
    }
}
