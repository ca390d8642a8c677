//! Member domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical backend-assigned member identifier.
///
/// Always a positive integer. The authentication session carries its own
/// identifier in a potentially different namespace (an account id rather
/// than a member id), so `MemberId` values are only produced through
/// validated parsing — never by trusting a raw field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// Wraps a known-positive identifier.
    ///
    /// Returns `None` for zero; use [`MemberId::from_value`] for untrusted
    /// input.
    pub fn new(id: u64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Parses a loosely-typed JSON value into a member id.
    ///
    /// Accepts integer numbers, whole-valued floats, and numeric strings.
    /// Anything non-finite, non-integral, or not strictly greater than zero
    /// is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::new(u)
                } else if let Some(f) = n.as_f64() {
                    Self::from_f64(f)
                } else {
                    None
                }
            }
            Value::String(s) => {
                let s = s.trim();
                if let Ok(u) = s.parse::<u64>() {
                    Self::new(u)
                } else {
                    s.parse::<f64>().ok().and_then(Self::from_f64)
                }
            }
            _ => None,
        }
    }

    fn from_f64(f: f64) -> Option<Self> {
        if f.is_finite() && f > 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
            Self::new(f as u64)
        } else {
            None
        }
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member search result shape as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    /// Canonical member identifier; `None` when the backend sent something
    /// that fails positive-integer validation
    pub member_id: Option<MemberId>,
    /// Login username
    pub username: String,
    /// Display name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_positive_integers() {
        assert_eq!(MemberId::from_value(&json!(42)), MemberId::new(42));
        assert_eq!(MemberId::from_value(&json!("99")), MemberId::new(99));
        assert_eq!(MemberId::from_value(&json!(7.0)), MemberId::new(7));
        assert_eq!(MemberId::from_value(&json!(" 13 ")), MemberId::new(13));
    }

    #[test]
    fn test_from_value_rejects_non_positive_and_non_integral() {
        assert_eq!(MemberId::from_value(&json!(0)), None);
        assert_eq!(MemberId::from_value(&json!(-5)), None);
        assert_eq!(MemberId::from_value(&json!(1.5)), None);
        assert_eq!(MemberId::from_value(&json!("zero")), None);
        assert_eq!(MemberId::from_value(&json!("")), None);
        assert_eq!(MemberId::from_value(&json!(null)), None);
        assert_eq!(MemberId::from_value(&json!({"id": 3})), None);
    }

    #[test]
    fn test_display_matches_raw_value() {
        let id = MemberId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.get(), 42);
    }
}
