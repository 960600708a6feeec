//! CLI context - bundles settings, flags, history, and clipboard state.

use std::io;
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, display, prompts, quiet};
use crate::history::{FileHistory, HistoryStore};
use crate::pass::{self, CharClass, GenerationOptions, Preview};
use crate::rand::OsRng;
use crate::settings::{self, Settings};

/// Early exit carrying the process exit code.
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context<H: HistoryStore = FileHistory> {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub flags: CliFlags,
    pub history: H,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings_path = settings::default_path();
        let settings = if flags.defaults {
            Settings::default()
        } else {
            Settings::load_from(&settings_path).unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Self {
            settings,
            settings_path,
            flags,
            history: FileHistory::open_default(),
        }
    }
}

impl<H: HistoryStore> Context<H> {
    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        quiet::set(self.flags.quiet);
        self.handle_history_commands()?;

        let opts = build_options(&self.flags, &self.settings);
        self.show_preview(&opts)?;
        self.handle_set_defaults(&opts);

        if self.flags.preview {
            return Ok(());
        }

        let passwords = self.generate(&opts)?;
        self.save_to_history(&passwords);
        self.copy_to_clipboard(&passwords);
        Ok(())
    }

    fn handle_history_commands(&mut self) -> Result<(), Done> {
        if !self.flags.is_history_command() {
            return Ok(());
        }

        if self.flags.history {
            display::print_history(&self.history.load());
        } else if let Some(n) = self.flags.delete {
            let removed = match n.checked_sub(1) {
                Some(index) => self.history.remove(index),
                None => Ok(None),
            };
            match removed {
                Ok(Some(_)) => prompts::info(&format!("Deleted entry {n}")),
                Ok(None) => {
                    prompts::error(&format!("No saved password number {n}"));
                    return Err(Done(1));
                }
                Err(e) => {
                    prompts::error(&format!("Failed to update history: {e}"));
                    return Err(Done(1));
                }
            }
        } else if self.flags.clear_history {
            if let Err(e) = self.history.clear() {
                prompts::error(&format!("Failed to clear history: {e}"));
                return Err(Done(1));
            }
            prompts::info("History cleared");
        }

        Err(Done(0))
    }

    /// Only called once the options passed validation.
    fn handle_set_defaults(&mut self, opts: &GenerationOptions) {
        if !self.flags.set_defaults {
            return;
        }

        let mut updated = self.settings.clone();
        updated.apply_options(opts);
        if let Some(n) = self.flags.number {
            updated.number_of_passwords = n.max(1);
        }
        match updated.save_to(&self.settings_path) {
            Ok(()) => {
                self.settings = updated;
                prompts::info("Defaults saved");
            }
            Err(e) => prompts::warn(&format!("Failed to save defaults: {}", e)),
        }
    }

    fn show_preview(&self, opts: &GenerationOptions) -> Result<(), Done> {
        let preview = Preview::new(opts);
        if !quiet::enabled() {
            display::print_preview(opts, &preview);
        }
        if let Err(e) = preview {
            prompts::error(&e.to_string());
            return Err(Done(1));
        }
        Ok(())
    }

    /// Generate and print passwords.
    fn generate(&self, opts: &GenerationOptions) -> Result<Vec<Zeroizing<String>>, Done> {
        let count = self
            .flags
            .number
            .unwrap_or(self.settings.number_of_passwords)
            .max(1);

        let passwords = (0..count)
            .map(|_| pass::generate(opts, &mut OsRng).map(Zeroizing::new))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                prompts::error(&e.to_string());
                Done(1)
            })?;

        check_output(display::print_passwords(&passwords))?;
        Ok(passwords)
    }

    fn save_to_history(&mut self, passwords: &[Zeroizing<String>]) {
        if !self.flags.save {
            return;
        }

        // Oldest first so the last generated ends up on top.
        for pass in passwords {
            if let Err(e) = self.history.append(pass) {
                prompts::warn(&format!("Failed to save to history: {e}"));
                return;
            }
        }
        prompts::saved_to_history(passwords.len());
    }

    fn copy_to_clipboard(&self, passwords: &[Zeroizing<String>]) {
        if !self.flags.clipboard {
            return;
        }
        let Some(last) = passwords.last() else {
            return;
        };

        let result = ClipboardContext::new().and_then(|mut ctx| {
            ctx.set_contents(last.as_str().to_owned())?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            Ok(())
        });

        match result {
            Ok(()) => prompts::clipboard_copied(),
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
    }
}

/// A closed pipe is not an error; anything else means the passwords were lost.
fn check_output(result: io::Result<()>) -> Result<(), Done> {
    match result {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            prompts::error(&format!("Failed to write passwords: {e}"));
            Err(Done(1))
        }
        _ => Ok(()),
    }
}

/// Merge flags over saved settings into generation options.
///
/// Explicit `--lower/--upper/--digits/--symbols` replace the saved class
/// selection; `--no-*` class flags remove from whatever is selected.
/// Modifier flags only ever switch a modifier on.
pub fn build_options(flags: &CliFlags, settings: &Settings) -> GenerationOptions {
    let mut opts = settings.to_options();

    if flags.has_class_selection() {
        opts.classes = [
            (CharClass::Lower, flags.lower),
            (CharClass::Upper, flags.upper),
            (CharClass::Digit, flags.digits),
            (CharClass::Symbol, flags.symbols),
        ]
        .into_iter()
        .filter_map(|(class, on)| on.then_some(class))
        .collect();
    }

    for (class, off) in [
        (CharClass::Lower, flags.no_lower),
        (CharClass::Upper, flags.no_upper),
        (CharClass::Digit, flags.no_digits),
        (CharClass::Symbol, flags.no_symbols),
    ] {
        if off {
            opts.classes.remove(&class);
        }
    }

    if let Some(length) = flags.length {
        opts = opts.with_length(length);
    }
    if let Some(ref special) = flags.special {
        opts.symbols = special.clone();
    }

    opts.exclude_ambiguous |= flags.no_ambiguous;
    opts.exclude_similar |= flags.no_similar;
    opts.no_repeat |= flags.no_repeat;
    opts.require_each |= flags.require_each;
    opts
}
