//! This module aggregates the error types that can emerge from the core
//! data model: malformed tags, value casts to the wrong representation,
//! and failures while turning bytes into a typed value.
use crate::value::ValueType;
use crate::Tag;
use snafu::Snafu;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// The main data type for errors in this crate.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Raised when the obtained data element was not the one expected.
    #[snafu(display("Unexpected DICOM tag {}", tag))]
    UnexpectedTag {
        /// the tag found
        tag: Tag,
    },

    /// Raised when the obtained length is inconsistent with its value.
    #[snafu(display("Inconsistent data value length in data element"))]
    UnexpectedDataValueLength,

    /// Error related to an invalid value read.
    #[snafu(display("Invalid value read: {}", source))]
    ReadValue {
        /// the underlying cause
        source: InvalidValueReadError,
    },

    /// A failed attempt to cast a value to an inappropriate format.
    #[snafu(display("Failed value cast: {}", source))]
    CastValue {
        /// the underlying cause
        source: CastValueError,
    },

    /// A failed attempt to convert a value into a different representation.
    #[snafu(display("Failed value conversion: {}", source))]
    ConvertValue {
        /// the underlying cause
        source: ConvertValueError,
    },
}

impl From<InvalidValueReadError> for Error {
    fn from(source: InvalidValueReadError) -> Self {
        Error::ReadValue { source }
    }
}

impl From<CastValueError> for Error {
    fn from(source: CastValueError) -> Self {
        Error::CastValue { source }
    }
}

impl From<ConvertValueError> for Error {
    fn from(source: ConvertValueError) -> Self {
        Error::ConvertValue { source }
    }
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Triggered when an attempt to parse or decode a value fails.
#[derive(Debug, Snafu, PartialEq, Clone)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// The value cannot be read as a primitive value.
    #[snafu(display("attempted to retrieve complex value as primitive"))]
    NonPrimitiveType,

    /// The value's effective length cannot be resolved (undefined length
    /// on a value that is not a sequence or encapsulated pixel data).
    #[snafu(display("value length could not be resolved"))]
    UnresolvedValueLength,

    /// The value does not have the expected format.
    #[snafu(display("invalid token: expected {} but got {:?}", expected, got))]
    InvalidToken {
        /// the byte obtained
        got: u8,
        /// a description of what was expected instead
        expected: &'static str,
    },

    /// The value does not have the expected length.
    #[snafu(display("invalid length: expected {} but got {}", expected, got))]
    InvalidLength {
        /// the length obtained
        got: usize,
        /// a description of what was expected instead
        expected: &'static str,
    },

    /// Invalid date or time component.
    #[snafu(display("invalid date/time component: expected {} but got {}", expected, got))]
    ParseDateTime {
        /// the value obtained
        got: u32,
        /// a description of what was expected instead
        expected: &'static str,
    },

    /// Invalid or ambiguous combination of date with time.
    #[snafu(display("invalid or ambiguous combination of date with time"))]
    DateTimeZone,

    /// Failed to parse text as a floating point number.
    #[snafu(display("failed to parse text value as a floating point number: {}", source))]
    ParseFloat {
        /// the underlying cause
        source: ParseFloatError,
    },

    /// Failed to parse text as an integer.
    #[snafu(display("failed to parse text value as an integer: {}", source))]
    ParseInteger {
        /// the underlying cause
        source: ParseIntError,
    },

    /// An attempt of reading more than the number of bytes declared in the
    /// element's length was made.
    #[snafu(display("unexpected end of element"))]
    UnexpectedEndOfElement,

    /// A range conversion was attempted on a value that did not contain
    /// exactly two elements.
    #[snafu(display("expected exactly two values to build a range, found {}", len))]
    TwoValuesForRange {
        /// the number of values found
        len: usize,
    },

    /// A date, time or date-time range could not be parsed from text.
    #[snafu(display("could not parse range from text"))]
    InvalidRange,

    /// A catch-all for lower-level date/time parse failures whose original
    /// error type does not map onto one of the variants above.
    #[snafu(display("{}", message))]
    Other {
        /// a rendering of the underlying cause
        message: String,
    },
}

/// An error type for an attempt to access a value in an inappropriate
/// format.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {:?}", requested, got))]
pub struct CastValueError {
    /// The value format requested.
    pub requested: &'static str,
    /// The value's actual representation.
    pub got: ValueType,
}

/// An error type for a failed attempt to convert a value
/// into a different representation, such as a date or a number.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertValueError {
    /// The target format requested.
    pub requested: &'static str,
    /// The value's original representation.
    pub original: ValueType,
    /// The error that occurred while parsing the value, if applicable.
    pub cause: Option<InvalidValueReadError>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not convert value of type {:?} to {}",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
