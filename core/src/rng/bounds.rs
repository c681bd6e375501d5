//! Bound-inclusion policy for ranged integer sampling
//!
//! A ranged sample is described by a `[min, max]` pair plus an [`Inclusion`]
//! saying which of the two endpoints is actually reachable. Internally every
//! policy is reduced to a half-open `[lo, hi)` range; at the integer extremes
//! that reduction would overflow, so requests touching `MIN`/`MAX` are first
//! degraded by [`Inclusion::effective`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing an inclusion policy from configuration text
#[derive(Debug, Error, PartialEq)]
pub enum InclusionError {
    #[error("unknown bound inclusion option: {0:?} (expected both, lower, upper or none)")]
    Unknown(String),
}

/// Which endpoints of a `[min, max]` pair a ranged sample can return
///
/// # Example
/// ```
/// use gamekit_random::{Inclusion, RandomSource};
///
/// let mut rng = RandomSource::with_seed(7);
/// // Both endpoints reachable: a fair die
/// let roll = rng.i32_range(1, 6, Inclusion::Both);
/// assert!((1..=6).contains(&roll));
/// // Neither endpoint reachable
/// let inner = rng.i32_range(0, 5, Inclusion::None);
/// assert!((1..=4).contains(&inner));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inclusion {
    /// Both `min` and `max` are reachable
    Both,
    /// Only `min` is reachable (`max` excluded)
    Lower,
    /// Only `max` is reachable (`min` excluded)
    Upper,
    /// Neither endpoint is reachable
    None,
}

impl Inclusion {
    /// Degrade the requested inclusion at the integer extremes
    ///
    /// Sampling reduces every policy to a half-open range, which needs
    /// `max + 1` to include the upper bound. When `max` sits at the type
    /// maximum that increment would overflow, so inclusion of that endpoint
    /// is dropped; the mirrored rule applies at the type minimum. The two
    /// corrections compose, so a full-range `Both` request degrades to
    /// `None`.
    ///
    /// Pure function; deterministic given its inputs.
    ///
    /// # Example
    /// ```
    /// use gamekit_random::Inclusion;
    ///
    /// assert_eq!(Inclusion::Both.effective(false, true), Inclusion::Lower);
    /// assert_eq!(Inclusion::Both.effective(true, true), Inclusion::None);
    /// assert_eq!(Inclusion::Lower.effective(false, false), Inclusion::Lower);
    /// ```
    pub fn effective(self, min_at_floor: bool, max_at_ceiling: bool) -> Inclusion {
        let mut corrected = self;
        if max_at_ceiling {
            corrected = match corrected {
                Inclusion::Upper => Inclusion::None,
                Inclusion::Both => Inclusion::Lower,
                other => other,
            };
        }
        if min_at_floor {
            corrected = match corrected {
                Inclusion::Lower => Inclusion::None,
                Inclusion::Both => Inclusion::Upper,
                other => other,
            };
        }
        corrected
    }

    /// Map an already-corrected policy over `min < max` to a half-open pair
    ///
    /// Callers must pass bounds for which [`Inclusion::effective`] has
    /// already run; otherwise `max + 1` can overflow at the type maximum.
    pub(crate) fn half_open(self, min: i64, max: i64) -> (i64, i64) {
        match self {
            Inclusion::Both => (min, max + 1),
            Inclusion::Lower => (min, max),
            Inclusion::Upper => (min + 1, max + 1),
            Inclusion::None => (min + 1, max),
        }
    }
}

impl FromStr for Inclusion {
    type Err = InclusionError;

    /// Parse an inclusion policy from configuration text (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" => Ok(Inclusion::Both),
            "lower" => Ok(Inclusion::Lower),
            "upper" => Ok(Inclusion::Upper),
            "none" => Ok(Inclusion::None),
            _ => Err(InclusionError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_identity_away_from_extremes() {
        for option in [
            Inclusion::Both,
            Inclusion::Lower,
            Inclusion::Upper,
            Inclusion::None,
        ] {
            assert_eq!(option.effective(false, false), option);
        }
    }

    #[test]
    fn test_effective_degrades_at_ceiling() {
        assert_eq!(Inclusion::Both.effective(false, true), Inclusion::Lower);
        assert_eq!(Inclusion::Upper.effective(false, true), Inclusion::None);
        assert_eq!(Inclusion::Lower.effective(false, true), Inclusion::Lower);
        assert_eq!(Inclusion::None.effective(false, true), Inclusion::None);
    }

    #[test]
    fn test_effective_degrades_at_floor() {
        assert_eq!(Inclusion::Both.effective(true, false), Inclusion::Upper);
        assert_eq!(Inclusion::Lower.effective(true, false), Inclusion::None);
        assert_eq!(Inclusion::Upper.effective(true, false), Inclusion::Upper);
        assert_eq!(Inclusion::None.effective(true, false), Inclusion::None);
    }

    #[test]
    fn test_effective_corrections_compose() {
        // Full-range request: neither endpoint stays reachable
        assert_eq!(Inclusion::Both.effective(true, true), Inclusion::None);
        assert_eq!(Inclusion::Lower.effective(true, true), Inclusion::None);
        assert_eq!(Inclusion::Upper.effective(true, true), Inclusion::None);
        assert_eq!(Inclusion::None.effective(true, true), Inclusion::None);
    }

    #[test]
    fn test_half_open_mapping() {
        assert_eq!(Inclusion::Both.half_open(2, 5), (2, 6));
        assert_eq!(Inclusion::Lower.half_open(2, 5), (2, 5));
        assert_eq!(Inclusion::Upper.half_open(2, 5), (3, 6));
        assert_eq!(Inclusion::None.half_open(2, 5), (3, 5));
    }

    #[test]
    fn test_parse_from_config_text() {
        assert_eq!("both".parse::<Inclusion>(), Ok(Inclusion::Both));
        assert_eq!("Lower".parse::<Inclusion>(), Ok(Inclusion::Lower));
        assert_eq!("UPPER".parse::<Inclusion>(), Ok(Inclusion::Upper));
        assert_eq!("none".parse::<Inclusion>(), Ok(Inclusion::None));
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = "exclusive".parse::<Inclusion>().unwrap_err();
        assert_eq!(err, InclusionError::Unknown("exclusive".to_string()));
    }
}
