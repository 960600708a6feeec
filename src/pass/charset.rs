//! Character set building for password generation.

use super::{CharClass, ConfigurationError, GenerationOptions};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*+-=_?~|";

/// Glyphs that are easy to mistype or that break quoting in shells and URLs.
pub const AMBIGUOUS: &str = "{}[]()/'\"`~,;:.<>\\";

/// Glyphs that look alike in many fonts.
pub const SIMILAR: &str = "il1Lo0O";

/// Filtered characters of one enabled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub class: CharClass,
    pub chars: Vec<char>,
}

/// Build the filtered pool of every enabled class, in canonical class order.
///
/// Classes whose pool ends up empty are left out of the result. Fails when no
/// class is enabled, or when every enabled class was filtered to nothing.
pub fn build_pools(opts: &GenerationOptions) -> Result<Vec<Pool>, ConfigurationError> {
    if opts.classes.is_empty() {
        return Err(ConfigurationError::NoClassSelected);
    }

    let pools: Vec<Pool> = CharClass::ALL
        .into_iter()
        .filter(|class| opts.classes.contains(class))
        .map(|class| Pool {
            class,
            chars: filter(alphabet(class, opts), opts),
        })
        .filter(|pool| !pool.chars.is_empty())
        .collect();

    if pools.is_empty() {
        return Err(ConfigurationError::AllFilteredOut);
    }

    log::debug!(
        "built {} pool(s): {:?}",
        pools.len(),
        pools
            .iter()
            .map(|p| (p.class, p.chars.len()))
            .collect::<Vec<_>>()
    );

    Ok(pools)
}

/// Flatten pools into one alphabet. Position order is kept; a character shared
/// by two pools appears twice.
pub fn union(pools: &[Pool]) -> Vec<char> {
    pools.iter().flat_map(|p| p.chars.iter().copied()).collect()
}

/// Number of distinct characters across all pools.
pub fn distinct_size(pools: &[Pool]) -> usize {
    let mut seen: Vec<char> = union(pools);
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

fn alphabet(class: CharClass, opts: &GenerationOptions) -> &str {
    match class {
        CharClass::Lower => LOWERCASE,
        CharClass::Upper => UPPERCASE,
        CharClass::Digit => DIGITS,
        CharClass::Symbol => &opts.symbols,
    }
}

fn filter(alphabet: &str, opts: &GenerationOptions) -> Vec<char> {
    alphabet
        .chars()
        .filter(|c| !(opts.exclude_ambiguous && AMBIGUOUS.contains(*c)))
        .filter(|c| !(opts.exclude_similar && SIMILAR.contains(*c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(classes: &[CharClass]) -> GenerationOptions {
        GenerationOptions {
            classes: classes.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn pools_follow_canonical_order() {
        let opts = only(&[CharClass::Symbol, CharClass::Digit, CharClass::Lower]);
        let classes: Vec<CharClass> = build_pools(&opts)
            .unwrap()
            .into_iter()
            .map(|p| p.class)
            .collect();
        assert_eq!(
            classes,
            vec![CharClass::Lower, CharClass::Digit, CharClass::Symbol]
        );
    }

    #[test]
    fn filtering_keeps_survivor_order() {
        let opts = GenerationOptions {
            exclude_similar: true,
            ..only(&[CharClass::Lower, CharClass::Digit])
        };
        let pools = build_pools(&opts).unwrap();
        assert_eq!(
            pools[0].chars.iter().collect::<String>(),
            "abcdefghjkmnpqrstuvwxyz"
        );
        assert_eq!(pools[1].chars.iter().collect::<String>(), "23456789");
    }

    #[test]
    fn ambiguous_filter_drops_tilde_from_symbols() {
        let opts = GenerationOptions {
            exclude_ambiguous: true,
            ..only(&[CharClass::Symbol])
        };
        let pools = build_pools(&opts).unwrap();
        assert_eq!(pools[0].chars.iter().collect::<String>(), "!@#$%^&*+-=_?|");
    }

    #[test]
    fn no_class_is_an_error() {
        let err = build_pools(&only(&[])).unwrap_err();
        assert_eq!(err, ConfigurationError::NoClassSelected);
        assert!(err.to_string().contains("Select at least one"));
    }

    #[test]
    fn everything_filtered_is_an_error() {
        let opts = GenerationOptions {
            symbols: "()[]{}".into(),
            exclude_ambiguous: true,
            ..only(&[CharClass::Symbol])
        };
        let err = build_pools(&opts).unwrap_err();
        assert_eq!(err, ConfigurationError::AllFilteredOut);
        assert!(err.to_string().contains("filtered out"));
    }

    #[test]
    fn empty_pool_is_dropped_but_others_survive() {
        let opts = GenerationOptions {
            symbols: "<>".into(),
            exclude_ambiguous: true,
            ..only(&[CharClass::Digit, CharClass::Symbol])
        };
        let pools = build_pools(&opts).unwrap();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].class, CharClass::Digit);
    }

    #[test]
    fn distinct_size_counts_each_character_once() {
        let size = |opts: &GenerationOptions| distinct_size(&build_pools(opts).unwrap());
        assert_eq!(size(&GenerationOptions::default()), 26 + 26 + 10 + 15);
        assert_eq!(size(&only(&[CharClass::Lower, CharClass::Upper])), 52);

        let overlapping = GenerationOptions {
            symbols: "aab!".into(),
            ..only(&[CharClass::Lower, CharClass::Symbol])
        };
        assert_eq!(union(&build_pools(&overlapping).unwrap()).len(), 30);
        assert_eq!(size(&overlapping), 27);
    }
}
