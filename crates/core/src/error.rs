//! Error types shared by every `pixel-text` crate.

use alloc::string::{String, ToString};
use core::fmt::Display;

/// Errors raised by layout and decoration operations.
///
/// Every variant describes an invalid argument. A glyph missing from a font
/// is not an error: lookups return [`None`] and the character is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A spacing, padding or width value was below zero.
    #[error("{name} must be a non-negative integer, got {value}")]
    NegativeValue { name: &'static str, value: String },

    /// A value was non-negative but does not fit in a `usize`.
    #[error("{name} is out of range")]
    ValueOutOfRange { name: &'static str },

    /// Padding was given with a number of values that has no meaning.
    #[error("padding takes 0, 1, 2 or 4 values, got {count}")]
    AmbiguousPadding { count: usize },

    /// A tail direction was not a valid edge/lean compass code.
    #[error("invalid compass code {0:?}, expected an edge and an orthogonal lean such as \"SE\"")]
    InvalidCompass(String),

    /// A tail would extend past the edge it is attached to.
    #[error("offset too large: {offset} + {size} exceeds {bound}")]
    OffsetTooLarge {
        offset: usize,
        size: usize,
        bound: usize,
    },

    /// The edge a tail attaches to has no solid border line at the cut.
    #[error("no border line to attach a tail to")]
    MissingBorder,

    /// A decoration was requested before anything was rendered.
    #[error("no pixel map has been rendered yet")]
    NoPixelMap,

    /// A border was requested around a grid with no rows.
    #[error("cannot draw a border around an empty grid")]
    EmptyGrid,

    /// Rows passed to [`crate::PixelGrid::from_rows`] were ragged or held
    /// symbols other than `0` and `1`.
    #[error("malformed pixel grid: {0}")]
    MalformedGrid(&'static str),
}

/// Result type for `pixel-text` operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Validate that an integer is non-negative and convert it to `usize`.
///
/// `name` identifies the parameter in the error message.
pub fn non_negative<T>(name: &'static str, value: T) -> Result<usize>
where
    T: TryInto<usize> + PartialOrd + Default + Display + Copy,
{
    if value < T::default() {
        return Err(Error::NegativeValue {
            name,
            value: value.to_string(),
        });
    }

    value
        .try_into()
        .map_err(|_| Error::ValueOutOfRange { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(non_negative("tracking", 0i32), Ok(0));
        assert_eq!(non_negative("tracking", 7u8), Ok(7));
        assert_eq!(non_negative("tracking", 12usize), Ok(12));
    }

    #[test]
    fn rejects_negative() {
        let err = non_negative("leading", -1i64).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeValue {
                name: "leading",
                value: "-1".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "leading must be a non-negative integer, got -1"
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_overflow() {
        assert_eq!(
            non_negative("width", u128::MAX),
            Err(Error::ValueOutOfRange { name: "width" })
        );
    }
}
