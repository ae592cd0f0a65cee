/// Error types for the TR-55 model.
///
/// One closed enum covers every way a simulation call can fail. Errors are
/// terminal for the call that produced them: each tile/day computation is
/// independent and deterministic, so the caller re-invokes with corrected
/// input rather than recovering mid-computation.
use thiserror::Error;

use crate::tile::LandUse;

/// Result alias used throughout the crate.
pub type Tr55Result<T> = Result<T, Tr55Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Tr55Error {
    /// A requested key has no entry in its reference table. Never
    /// defaulted: missing data is always surfaced as this error.
    #[error("no entry for `{key}` in the {table} table")]
    Lookup { table: &'static str, key: String },

    /// The tile census input is structurally malformed.
    #[error("malformed tile census: {reason}")]
    Census { reason: String },

    /// A numeric input is degenerate for the requested computation,
    /// e.g. a curve number outside (0, 100] in the retention equation.
    #[error("degenerate {quantity} {value} is outside the usable range")]
    Domain { quantity: &'static str, value: f64 },

    /// The small-storm regression has no coefficients for this land use.
    #[error("land use `{0}` has no small-storm runoff coefficients")]
    UnsupportedLandUse(LandUse),
}

impl Tr55Error {
    /// Missing key in a named reference table.
    pub fn lookup(table: &'static str, key: impl ToString) -> Self {
        Self::Lookup {
            table,
            key: key.to_string(),
        }
    }

    /// Malformed census input.
    pub fn census(reason: impl Into<String>) -> Self {
        Self::Census {
            reason: reason.into(),
        }
    }

    /// Degenerate numeric input.
    pub fn domain(quantity: &'static str, value: f64) -> Self {
        Self::Domain { quantity, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_names_table_and_key() {
        let err = Tr55Error::lookup("curve number", "a:GreenRoof");
        assert!(err.to_string().contains("curve number"));
        assert!(err.to_string().contains("a:GreenRoof"));
    }

    #[test]
    fn census_carries_reason() {
        let err = Tr55Error::census("missing `result.cell_count`");
        assert!(err.to_string().contains("result.cell_count"));
    }

    #[test]
    fn domain_carries_value() {
        let err = Tr55Error::domain("curve number", 0.0);
        assert!(err.to_string().contains("curve number"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn unsupported_land_use_names_it() {
        let err = Tr55Error::UnsupportedLandUse(LandUse::MixedForest);
        assert!(err.to_string().contains("MixedForest"));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            Tr55Error::lookup("soil type", "x"),
            Tr55Error::lookup("soil type", "x")
        );
        assert_ne!(
            Tr55Error::lookup("soil type", "x"),
            Tr55Error::lookup("land use", "x")
        );
    }
}
