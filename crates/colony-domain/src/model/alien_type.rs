//! AlienType - The caste of an alien
//!
//! AlienType is a Value Object - two types with the same variant are equal.
//! Only the caste decides whether an alien may reproduce.

use std::str::FromStr;

/// The three castes of alien
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlienType {
    /// May bear up to two children over its lifetime
    Alpha,
    /// Cannot reproduce
    Beta,
    /// Cannot reproduce
    Gamma,
}

impl AlienType {
    /// Upper-case label used in rendering and on the wire
    pub fn label(&self) -> &'static str {
        match self {
            AlienType::Alpha => "ALPHA",
            AlienType::Beta => "BETA",
            AlienType::Gamma => "GAMMA",
        }
    }

    pub fn can_reproduce(&self) -> bool {
        matches!(self, AlienType::Alpha)
    }

    /// Get all types (useful for iteration)
    pub fn all() -> &'static [AlienType] {
        &[AlienType::Alpha, AlienType::Beta, AlienType::Gamma]
    }
}

impl core::fmt::Display for AlienType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returned when a string names no known [`AlienType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlienTypeError {
    pub value: String,
}

impl core::fmt::Display for ParseAlienTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unknown alien type: {}. Expected ALPHA, BETA or GAMMA",
            self.value
        )
    }
}

impl std::error::Error for ParseAlienTypeError {}

impl FromStr for AlienType {
    type Err = ParseAlienTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AlienType::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAlienTypeError {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_alpha_reproduces() {
        assert!(AlienType::Alpha.can_reproduce());
        assert!(!AlienType::Beta.can_reproduce());
        assert!(!AlienType::Gamma.can_reproduce());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ALPHA".parse::<AlienType>(), Ok(AlienType::Alpha));
        assert_eq!("beta".parse::<AlienType>(), Ok(AlienType::Beta));
        assert_eq!(" Gamma ".parse::<AlienType>(), Ok(AlienType::Gamma));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "DELTA".parse::<AlienType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown alien type: DELTA. Expected ALPHA, BETA or GAMMA"
        );
    }
}
