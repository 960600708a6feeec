//! Entropy estimate and strength rating.
//!
//! The estimate is `length * log2(charset)`. It ignores `require_each` and
//! `no_repeat`, both of which shrink the real search space, so it reads a
//! little high for those options.

use super::{ConfigurationError, GenerationOptions, charset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Okay,
    Strong,
    Excellent,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Okay => "Okay",
            Strength::Strong => "Strong",
            Strength::Excellent => "Excellent",
        }
    }

    /// Fill of the strength meter, in percent.
    pub fn meter_percent(self) -> u8 {
        match self {
            Strength::Weak => 25,
            Strength::Okay => 45,
            Strength::Strong => 70,
            Strength::Excellent => 100,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn bits_per_char(charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    (charset_size as f64).log2()
}

/// Calculate password entropy in bits.
pub fn estimate_entropy(bits_per_char: f64, length: usize) -> f64 {
    bits_per_char * length as f64
}

pub fn classify_strength(bits: f64) -> Strength {
    if bits < 40.0 {
        Strength::Weak
    } else if bits < 60.0 {
        Strength::Okay
    } else if bits < 80.0 {
        Strength::Strong
    } else {
        Strength::Excellent
    }
}

/// What the options are worth before anything is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub entropy_bits: f64,
    pub charset_size: usize,
    pub strength: Strength,
}

impl Preview {
    pub fn new(opts: &GenerationOptions) -> Result<Self, ConfigurationError> {
        let pools = charset::build_pools(opts)?;
        let charset_size = charset::distinct_size(&pools);
        let entropy_bits = estimate_entropy(bits_per_char(charset_size), opts.length);

        Ok(Self {
            entropy_bits,
            charset_size,
            strength: classify_strength(entropy_bits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.05
    }

    #[test]
    fn alphanumeric_sixteen_is_excellent() {
        let bits = estimate_entropy(bits_per_char(62), 16);
        assert!(close(bits, 95.3), "{bits}");
        assert_eq!(classify_strength(bits), Strength::Excellent);
    }

    #[test]
    fn lowercase_six_is_weak() {
        let bits = estimate_entropy(bits_per_char(26), 6);
        assert!(close(bits, 28.2), "{bits}");
        assert_eq!(classify_strength(bits), Strength::Weak);
    }

    #[test]
    fn thresholds_are_half_open() {
        assert_eq!(classify_strength(0.0), Strength::Weak);
        assert_eq!(classify_strength(39.99), Strength::Weak);
        assert_eq!(classify_strength(40.0), Strength::Okay);
        assert_eq!(classify_strength(59.99), Strength::Okay);
        assert_eq!(classify_strength(60.0), Strength::Strong);
        assert_eq!(classify_strength(79.99), Strength::Strong);
        assert_eq!(classify_strength(80.0), Strength::Excellent);
        assert_eq!(classify_strength(500.0), Strength::Excellent);
    }

    #[test]
    fn meter_percentages() {
        let pct: Vec<u8> = [
            Strength::Weak,
            Strength::Okay,
            Strength::Strong,
            Strength::Excellent,
        ]
        .into_iter()
        .map(Strength::meter_percent)
        .collect();
        assert_eq!(pct, vec![25, 45, 70, 100]);
        assert_eq!(Strength::Okay.to_string(), "Okay");
    }

    #[test]
    fn empty_charset_has_no_entropy() {
        assert_eq!(bits_per_char(0), 0.0);
        assert_eq!(bits_per_char(1), 0.0);
    }

    #[test]
    fn preview_reports_filtered_charset() {
        let opts = GenerationOptions {
            classes: [CharClass::Lower, CharClass::Upper, CharClass::Digit]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let preview = Preview::new(&opts).unwrap();
        assert_eq!(preview.charset_size, 62);
        assert_eq!(preview.strength, Strength::Excellent);

        let filtered = GenerationOptions {
            exclude_similar: true,
            ..opts
        };
        assert_eq!(Preview::new(&filtered).unwrap().charset_size, 55);
    }

    #[test]
    fn preview_ignores_no_repeat_feasibility() {
        let opts = GenerationOptions {
            classes: [CharClass::Digit].into_iter().collect(),
            no_repeat: true,
            ..Default::default()
        };
        let preview = Preview::new(&opts).unwrap();
        assert_eq!(preview.charset_size, 10);
    }

    #[test]
    fn preview_propagates_configuration_errors() {
        let opts = GenerationOptions {
            classes: Default::default(),
            ..Default::default()
        };
        assert_eq!(
            Preview::new(&opts).unwrap_err(),
            ConfigurationError::NoClassSelected
        );
    }
}
