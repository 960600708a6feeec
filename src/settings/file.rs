//! Settings file persistence.
//!
//! One comma separated line. `|` escapes a literal `,` or `|` inside the
//! special character list.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELD_COUNT: usize = 11;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    // The whole record lives on one line.
    if settings.special_chars.chars().any(char::is_control) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "special characters must not contain control characters",
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let special_chars_str = settings
        .special_chars
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<Vec<String>>()
        .join("");

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.no_ambiguous,
        settings.no_similar,
        settings.no_repeat,
        settings.require_each,
        settings.number_of_passwords,
        special_chars_str,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);

    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELD_COUNT {
        log::warn!(
            "settings at {} have {} fields, expected {FIELD_COUNT}; resetting",
            path.display(),
            parts.len()
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    let defaults = Settings::default();
    settings.pass_length = parts[0].parse().unwrap_or(defaults.pass_length);
    settings.lowercase = parts[1].parse().unwrap_or(defaults.lowercase);
    settings.uppercase = parts[2].parse().unwrap_or(defaults.uppercase);
    settings.digits = parts[3].parse().unwrap_or(defaults.digits);
    settings.symbols = parts[4].parse().unwrap_or(defaults.symbols);
    settings.no_ambiguous = parts[5].parse().unwrap_or(defaults.no_ambiguous);
    settings.no_similar = parts[6].parse().unwrap_or(defaults.no_similar);
    settings.no_repeat = parts[7].parse().unwrap_or(defaults.no_repeat);
    settings.require_each = parts[8].parse().unwrap_or(defaults.require_each);
    settings.number_of_passwords = parts[9].parse().unwrap_or(defaults.number_of_passwords);
    settings.special_chars = parts[10].clone();

    Ok(())
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
