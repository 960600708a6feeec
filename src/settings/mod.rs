//! Saved generation defaults.

mod file;

use std::env;
use std::path::{Path, PathBuf};

use crate::pass::{CharClass, GenerationOptions, charset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub no_ambiguous: bool,
    pub no_similar: bool,
    pub no_repeat: bool,
    pub require_each: bool,
    pub number_of_passwords: usize,
    pub special_chars: String,
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn to_options(&self) -> GenerationOptions {
        let classes = [
            (CharClass::Lower, self.lowercase),
            (CharClass::Upper, self.uppercase),
            (CharClass::Digit, self.digits),
            (CharClass::Symbol, self.symbols),
        ]
        .into_iter()
        .filter_map(|(class, on)| on.then_some(class))
        .collect();

        GenerationOptions {
            length: self.pass_length,
            classes,
            symbols: self.special_chars.clone(),
            exclude_ambiguous: self.no_ambiguous,
            exclude_similar: self.no_similar,
            no_repeat: self.no_repeat,
            require_each: self.require_each,
        }
        .with_length(self.pass_length)
    }

    /// Take over everything the generator cares about from `opts`.
    pub fn apply_options(&mut self, opts: &GenerationOptions) {
        self.pass_length = opts.length;
        self.lowercase = opts.classes.contains(&CharClass::Lower);
        self.uppercase = opts.classes.contains(&CharClass::Upper);
        self.digits = opts.classes.contains(&CharClass::Digit);
        self.symbols = opts.classes.contains(&CharClass::Symbol);
        self.no_ambiguous = opts.exclude_ambiguous;
        self.no_similar = opts.exclude_similar;
        self.no_repeat = opts.no_repeat;
        self.require_each = opts.require_each;
        self.special_chars = opts.symbols.clone();
    }
}

impl Default for Settings {
    fn default() -> Self {
        let opts = GenerationOptions::default();
        Self {
            pass_length: opts.length,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            no_ambiguous: false,
            no_similar: false,
            no_repeat: false,
            require_each: false,
            number_of_passwords: 1,
            special_chars: charset::SYMBOLS.to_string(),
        }
    }
}

/// Directory holding settings and history. `VAULTFORGE_CONFIG_DIR` wins over
/// `$HOME/.config/vaultforge`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("VAULTFORGE_CONFIG_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("vaultforge")
}

#[inline]
pub fn default_path() -> PathBuf {
    config_dir().join("settings")
}
