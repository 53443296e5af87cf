//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::DicomValueType;
use crate::error::{CastValueError, ConvertValueError, InvalidValueReadError};
use crate::header::{HasLength, Length, Tag};
use chrono::{Datelike, FixedOffset, Timelike};
use itertools::Itertools;
use num_traits::NumCast;
use safe_transmute::to_bytes::transmute_to_bytes;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::str::FromStr;

// Re-exported from chrono
pub use chrono::{DateTime, NaiveDate, NaiveTime};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// See the macro [`dicom_value!`] for a more intuitive means
/// of constructing these values.
/// Alternatively, `From` conversions into `PrimitiveValue` exist
/// for single element types,
/// including numeric types, `String`, and `&str`.
///
/// # Example
///
/// ```
/// # use dicom_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Str("Smith^John".to_string()));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
/// [`dicom_value!`]: ../macro.dicom_value.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-lengthed values.
    Empty,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    /// Can also be used for IS, SS, DS, DA, DT and TM when decoding
    /// with format preservation.
    Strs(C<String>),

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// The value is a sequence of unsigned 16-bit integers.
    /// Used for OB and UN.
    U8(C<u8>),

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 168-bit integers.
    /// Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD and FD, DS.
    F64(C<f64>),

    /// A sequence of dates.
    /// Used for the DA representation.
    Date(C<NaiveDate>),

    /// A sequence of date-time values.
    /// Used for the DT representation.
    DateTime(C<DateTime<FixedOffset>>),

    /// A sequence of time values.
    /// Used for the TM representation.
    Time(C<NaiveTime>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);

impl_from_for_primitive!(Tag, Tags);
impl_from_for_primitive!(NaiveDate, Date);
impl_from_for_primitive!(NaiveTime, Time);
impl_from_for_primitive!(DateTime<FixedOffset>, DateTime);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

impl PrimitiveValue {
    /// Create a single unsigned 16-bit value.
    pub fn new_u16(value: u16) -> Self {
        PrimitiveValue::U16(C::from_elem(value, 1))
    }

    /// Create a single unsigned 32-bit value.
    pub fn new_u32(value: u32) -> Self {
        PrimitiveValue::U32(C::from_elem(value, 1))
    }

    /// Create a single I32 value.
    pub fn new_i32(value: u32) -> Self {
        PrimitiveValue::U32(C::from_elem(value, 1))
    }

    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
            Date(c) => c.len() as u32,
            DateTime(c) => c.len() as u32,
            Time(c) => c.len() as u32,
        }
    }

    /// Convert the primitive value into a string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as is.
    /// In the case of `Strs`, the strings are first joined together
    /// with a backslash (`'\\'`).
    /// All other type variants are first converted to a string,
    /// then joined together with a backslash.
    ///
    /// **Note:**
    /// As the process of reading a DICOM value
    /// may not always preserve its original nature,
    /// it is not guaranteed that `to_str()` returns a string with
    /// the exact same byte sequence as the one originally found
    /// at the source of the value,
    /// even for the string variants,
    /// As
    /// Therefore, this method is not reliable
    /// for compliant DICOM serialization.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dicom_core::dicom_value;
    /// # use dicom_core::value::{C, PrimitiveValue};
    /// # use smallvec::smallvec;
    /// # use chrono::NaiveDate;
    /// assert_eq!(
    ///     dicom_value!(Str, "Smith^John").to_str(),
    ///     "Smith^John",
    /// );
    /// assert_eq!(
    ///     dicom_value!(Date, NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()).to_str(),
    ///     "20141012",
    /// );
    /// assert_eq!(
    ///     dicom_value!(Strs, [
    ///         "DERIVED",
    ///         "PRIMARY",
    ///         "WHOLE BODY",
    ///         "EMISSION",
    ///     ])
    ///     .to_str(),
    ///     "DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION",
    /// );
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(values) => Cow::from(values.as_str()),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    Cow::from(&values[0])
                } else {
                    Cow::from(values.iter().join("\\"))
                }
            }
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Retrieve this DICOM value as raw bytes.
    ///
    /// Binary numeric values are returned with a reintepretation
    /// of the holding vector's occupied data block as bytes,
    /// without copying,
    /// under the platform's native byte order.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as their respective bytes in UTF-8.
    /// In the case of `Strs`, the strings are first joined together
    /// with a backslash (`'\\'`).
    /// Other type variants are first converted to a string,
    /// joined together with a backslash,
    /// then turned into a byte vector.
    /// For value which are inherently textual as per the standard,
    /// this is equivalent to calling `as_bytes()` after [`to_str()`].
    ///
    /// **Note:**
    /// As the process of reading a DICOM value
    /// may not always preserve its original nature,
    /// it is not guaranteed that `to_bytes()` returns the same byte sequence
    /// as the one originally found at the source of the value.
    /// Therefore, this method is not reliable
    /// for compliant DICOM serialization.
    ///
    /// [`to_str()`]: #method.to_str
    ///
    /// # Examples
    ///
    /// `U8` provides a straight, zero-copy slice of bytes.
    ///
    /// ```
    /// # use dicom_core::value::{C, PrimitiveValue};
    /// # use smallvec::smallvec;
    ///
    /// assert_eq!(
    ///     PrimitiveValue::U8(smallvec![
    ///         1, 2, 5,
    ///     ]).to_bytes(),
    ///     &[1, 2, 5][..],
    /// );
    /// ```
    ///
    /// Other values are converted to text first.
    ///
    /// ```
    /// # use dicom_core::dicom_value;
    /// # use dicom_core::value::{C, PrimitiveValue};
    /// # use smallvec::smallvec;
    /// # use chrono::NaiveDate;
    /// assert_eq!(
    ///     PrimitiveValue::from("Smith^John").to_bytes(),
    ///     &b"Smith^John"[..],
    /// );
    /// assert_eq!(
    ///     PrimitiveValue::from(NaiveDate::from_ymd_opt(2014, 10, 12).unwrap())
    ///     .to_bytes(),
    ///     &b"20141012"[..],
    /// );
    /// assert_eq!(
    ///     dicom_value!(Strs, [
    ///         "DERIVED",
    ///         "PRIMARY",
    ///         "WHOLE BODY",
    ///         "EMISSION",
    ///     ])
    ///     .to_bytes(),
    ///     &b"DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION"[..],
    /// );
    /// ```
    pub fn to_bytes(&self) -> Cow<[u8]> {
        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::U8(values) => Cow::from(&values[..]),
            PrimitiveValue::U16(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I16(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::U32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::U64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::F32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::F64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::Str(values) => Cow::from(values.as_bytes()),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    // no need to copy if it's a single string
                    Cow::from(values[0].as_bytes())
                } else {
                    Cow::from(values.iter().join("\\").into_bytes())
                }
            }
            prim => match prim.to_str() {
                Cow::Borrowed(string) => Cow::Borrowed(string.as_bytes()),
                Cow::Owned(string) => Cow::Owned(string.into_bytes()),
            },
        }
    }

    /// Retrieve a single DICOM date from this value.
    ///
    /// If the value is already represented as a date, it is returned as is.
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a date, potentially failing if the
    /// string does not represent a valid date.
    /// If the value is a sequence of U8 bytes, the bytes are
    /// first interpreted as an ASCII character string.
    /// Otherwise, the operation fails.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_core::value::{C, PrimitiveValue};
    /// # use smallvec::smallvec;
    /// # use chrono::NaiveDate;
    ///
    /// assert_eq!(
    ///     PrimitiveValue::Date(smallvec![
    ///         NaiveDate::from_ymd_opt(2014, 10, 12).unwrap(),
    ///     ])
    ///     .to_date(),
    ///     Ok(NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()),
    /// );
    ///
    /// assert_eq!(
    ///     PrimitiveValue::Strs(smallvec![
    ///         "20141012".to_string(),
    ///     ])
    ///     .to_date(),
    ///     Ok(NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()),
    /// );
    /// ```
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        match self {
            PrimitiveValue::Date(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => super::deserialize::parse_date(s.as_bytes())
                .map(|(date, _rest)| date)
                .map_err(|err| self.convert_err("Date", err)),
            PrimitiveValue::Strs(s) => {
                super::deserialize::parse_date(s.first().map(|s| s.as_bytes()).unwrap_or(&[]))
                    .map(|(date, _rest)| date)
                    .map_err(|err| self.convert_err("Date", err))
            }
            PrimitiveValue::U8(bytes) => super::deserialize::parse_date(bytes)
                .map(|(date, _rest)| date)
                .map_err(|err| self.convert_err("Date", err)),
            _ => Err(ConvertValueError {
                requested: "Date",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a sequence of DICOM dates from this value.
    pub fn to_multi_date(&self) -> Result<Vec<NaiveDate>, ConvertValueError> {
        match self {
            PrimitiveValue::Date(v) => Ok(v.iter().cloned().collect()),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_date(s.as_bytes())
                        .map(|(d, _)| d)
                        .map_err(|err| self.convert_err("Date", err))
                })
                .collect(),
            PrimitiveValue::Str(s) => super::deserialize::parse_date(s.as_bytes())
                .map(|(d, _)| vec![d])
                .map_err(|err| self.convert_err("Date", err)),
            _ => Err(ConvertValueError {
                requested: "Date",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a single DICOM time from this value.
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        match self {
            PrimitiveValue::Time(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => super::deserialize::parse_time(s.as_bytes())
                .map(|(t, _)| t)
                .map_err(|err| self.convert_err("Time", err)),
            PrimitiveValue::Strs(s) => {
                super::deserialize::parse_time(s.first().map(|s| s.as_bytes()).unwrap_or(&[]))
                    .map(|(t, _)| t)
                    .map_err(|err| self.convert_err("Time", err))
            }
            PrimitiveValue::U8(bytes) => super::deserialize::parse_time(bytes)
                .map(|(t, _)| t)
                .map_err(|err| self.convert_err("Time", err)),
            _ => Err(ConvertValueError {
                requested: "Time",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a sequence of DICOM times from this value.
    pub fn to_multi_time(&self) -> Result<Vec<NaiveTime>, ConvertValueError> {
        match self {
            PrimitiveValue::Time(v) => Ok(v.iter().cloned().collect()),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_time(s.as_bytes())
                        .map(|(t, _)| t)
                        .map_err(|err| self.convert_err("Time", err))
                })
                .collect(),
            PrimitiveValue::Str(s) => super::deserialize::parse_time(s.as_bytes())
                .map(|(t, _)| vec![t])
                .map_err(|err| self.convert_err("Time", err)),
            _ => Err(ConvertValueError {
                requested: "Time",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a single DICOM date-time from this value.
    pub fn to_datetime(
        &self,
        default_offset: FixedOffset,
    ) -> Result<DateTime<FixedOffset>, ConvertValueError> {
        match self {
            PrimitiveValue::DateTime(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => super::deserialize::parse_datetime(s.as_bytes(), default_offset)
                .map_err(|err| self.convert_err("DateTime", err)),
            PrimitiveValue::Strs(s) => super::deserialize::parse_datetime(
                s.first().map(|s| s.as_bytes()).unwrap_or(&[]),
                default_offset,
            )
            .map_err(|err| self.convert_err("DateTime", err)),
            PrimitiveValue::U8(bytes) => {
                super::deserialize::parse_datetime(bytes, default_offset)
                    .map_err(|err| self.convert_err("DateTime", err))
            }
            _ => Err(ConvertValueError {
                requested: "DateTime",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a sequence of DICOM date-times from this value.
    pub fn to_multi_datetime(
        &self,
        default_offset: FixedOffset,
    ) -> Result<Vec<DateTime<FixedOffset>>, ConvertValueError> {
        match self {
            PrimitiveValue::DateTime(v) => Ok(v.iter().cloned().collect()),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_datetime(s.as_bytes(), default_offset)
                        .map_err(|err| self.convert_err("DateTime", err))
                })
                .collect(),
            PrimitiveValue::Str(s) => {
                super::deserialize::parse_datetime(s.as_bytes(), default_offset)
                    .map(|dt| vec![dt])
                    .map_err(|err| self.convert_err("DateTime", err))
            }
            _ => Err(ConvertValueError {
                requested: "DateTime",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a date range out of exactly two date values.
    pub fn to_date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ConvertValueError> {
        match self {
            PrimitiveValue::Date(v) if v.len() == 2 => {
                let (a, b) = (v[0], v[1]);
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::Date(v) => Err(ConvertValueError {
                requested: "Date range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Strs(v) if v.len() == 2 => {
                let a = super::deserialize::parse_date(v[0].as_bytes())
                    .map(|(d, _)| d)
                    .map_err(|err| self.convert_err("Date range", err))?;
                let b = super::deserialize::parse_date(v[1].as_bytes())
                    .map(|(d, _)| d)
                    .map_err(|err| self.convert_err("Date range", err))?;
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::Strs(v) => Err(ConvertValueError {
                requested: "Date range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Str(_) | PrimitiveValue::U8(_) => {
                let bytes = self.to_bytes();
                super::deserialize::parse_date_range(&bytes)
                    .map_err(|_| ConvertValueError {
                        requested: "Date range",
                        original: self.value_type(),
                        cause: Some(InvalidValueReadError::InvalidRange),
                    })
            }
            _ => Err(ConvertValueError {
                requested: "Date range",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a time range out of exactly two time values.
    pub fn to_time_range(&self) -> Result<(Option<NaiveTime>, Option<NaiveTime>), ConvertValueError> {
        match self {
            PrimitiveValue::Time(v) if v.len() == 2 => {
                let (a, b) = (v[0], v[1]);
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::Time(v) => Err(ConvertValueError {
                requested: "Time range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Strs(v) if v.len() == 2 => {
                let a = super::deserialize::parse_time(v[0].as_bytes())
                    .map(|(t, _)| t)
                    .map_err(|err| self.convert_err("Time range", err))?;
                let b = super::deserialize::parse_time(v[1].as_bytes())
                    .map(|(t, _)| t)
                    .map_err(|err| self.convert_err("Time range", err))?;
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::Strs(v) => Err(ConvertValueError {
                requested: "Time range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Str(_) | PrimitiveValue::U8(_) => {
                let bytes = self.to_bytes();
                super::deserialize::parse_time_range(&bytes).map_err(|_| ConvertValueError {
                    requested: "Time range",
                    original: self.value_type(),
                    cause: Some(InvalidValueReadError::InvalidRange),
                })
            }
            _ => Err(ConvertValueError {
                requested: "Time range",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a date-time range out of exactly two date-time values.
    pub fn to_datetime_range(
        &self,
        default_offset: FixedOffset,
    ) -> Result<(Option<DateTime<FixedOffset>>, Option<DateTime<FixedOffset>>), ConvertValueError> {
        match self {
            PrimitiveValue::DateTime(v) if v.len() == 2 => {
                let (a, b) = (v[0], v[1]);
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::DateTime(v) => Err(ConvertValueError {
                requested: "Date-time range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Strs(v) if v.len() == 2 => {
                let a = super::deserialize::parse_datetime(v[0].as_bytes(), default_offset)
                    .map_err(|err| self.convert_err("Date-time range", err))?;
                let b = super::deserialize::parse_datetime(v[1].as_bytes(), default_offset)
                    .map_err(|err| self.convert_err("Date-time range", err))?;
                Ok((Some(a.min(b)), Some(a.max(b))))
            }
            PrimitiveValue::Strs(v) => Err(ConvertValueError {
                requested: "Date-time range",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::TwoValuesForRange { len: v.len() }),
            }),
            PrimitiveValue::Str(_) | PrimitiveValue::U8(_) => {
                let bytes = self.to_bytes();
                super::deserialize::parse_datetime_range(&bytes, default_offset).map_err(|_| {
                    ConvertValueError {
                        requested: "Date-time range",
                        original: self.value_type(),
                        cause: Some(InvalidValueReadError::InvalidRange),
                    }
                })
            }
            _ => Err(ConvertValueError {
                requested: "Date-time range",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Convert the full primitive value into a clean string,
    /// trimming outer whitespace conventionally used to pad odd-length values.
    pub fn to_clean_str(&self) -> Cow<str> {
        match self.to_str() {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(|c| c == ' ' || c == '\0')),
            Cow::Owned(s) => Cow::Owned(s.trim_matches(|c| c == ' ' || c == '\0').to_string()),
        }
    }

    /// Convert the full primitive value into a sequence of strings.
    pub fn to_multi_str(&self) -> Cow<[String]> {
        match self {
            PrimitiveValue::Strs(c) => Cow::Borrowed(&c[..]),
            PrimitiveValue::Str(s) => Cow::Owned(vec![s.clone()]),
            prim => Cow::Owned(vec![prim.to_str().into_owned()]),
        }
    }

    /// Retrieve and convert the primitive value into an age.
    ///
    /// Applicable to values with the AS value representation, which are
    /// held as plain strings (e.g. `"032Y"`).
    pub fn to_age(&self) -> Result<crate::value::Age, ConvertValueError> {
        let text = self.to_clean_str();
        crate::value::Age::from_dicom_str(&text).map_err(|err| ConvertValueError {
            requested: "Age",
            original: self.value_type(),
            cause: Some(err),
        })
    }

    /// Retrieve and convert the full primitive value into a sequence of ages.
    pub fn to_multi_age(&self) -> Result<Vec<crate::value::Age>, ConvertValueError> {
        self.to_multi_str()
            .iter()
            .map(|s| {
                crate::value::Age::from_dicom_str(s.trim_matches(|c| c == ' ' || c == '\0')).map_err(
                    |err| ConvertValueError {
                        requested: "Age",
                        original: self.value_type(),
                        cause: Some(err),
                    },
                )
            })
            .collect()
    }

    /// Retrieve and convert the primitive value into an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: Clone + NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        use self::PrimitiveValue::*;
        match self {
            U8(c) => c.first().and_then(|v| T::from(*v)),
            U16(c) => c.first().and_then(|v| T::from(*v)),
            I16(c) => c.first().and_then(|v| T::from(*v)),
            U32(c) => c.first().and_then(|v| T::from(*v)),
            I32(c) => c.first().and_then(|v| T::from(*v)),
            U64(c) => c.first().and_then(|v| T::from(*v)),
            I64(c) => c.first().and_then(|v| T::from(*v)),
            Str(s) => return s.trim().parse::<T>().map_err(|err| ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::ParseInteger { source: err }),
            }),
            Strs(s) => {
                return s
                    .first()
                    .map(|s| s.as_str())
                    .unwrap_or("")
                    .trim()
                    .parse::<T>()
                    .map_err(|err| ConvertValueError {
                        requested: "integer",
                        original: self.value_type(),
                        cause: Some(InvalidValueReadError::ParseInteger { source: err }),
                    })
            }
            _ => None,
        }
        .ok_or(ConvertValueError {
            requested: "integer",
            original: self.value_type(),
            cause: None,
        })
    }

    /// Retrieve and convert the primitive value into a sequence of integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: Clone + NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        use self::PrimitiveValue::*;
        macro_rules! cast_all {
            ($c: expr) => {
                $c.iter()
                    .map(|v| T::from(*v))
                    .collect::<Option<Vec<T>>>()
                    .ok_or(ConvertValueError {
                        requested: "integer",
                        original: self.value_type(),
                        cause: None,
                    })
            };
        }
        match self {
            U8(c) => cast_all!(c),
            U16(c) => cast_all!(c),
            I16(c) => cast_all!(c),
            U32(c) => cast_all!(c),
            I32(c) => cast_all!(c),
            U64(c) => cast_all!(c),
            I64(c) => cast_all!(c),
            Strs(s) => s
                .iter()
                .map(|s| {
                    s.trim().parse::<T>().map_err(|err| ConvertValueError {
                        requested: "integer",
                        original: self.value_type(),
                        cause: Some(InvalidValueReadError::ParseInteger { source: err }),
                    })
                })
                .collect(),
            Str(s) => s
                .trim()
                .parse::<T>()
                .map(|v| vec![v])
                .map_err(|err| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(InvalidValueReadError::ParseInteger { source: err }),
                }),
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a 32-bit float.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        self.to_float_generic(|s| s.trim().parse::<f32>(), |v| NumCast::from(v))
    }

    /// Retrieve and convert the primitive value into a sequence of 32-bit floats.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        self.to_multi_float_generic(|s| s.trim().parse::<f32>(), |v| NumCast::from(v))
    }

    /// Retrieve and convert the primitive value into a 64-bit float.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.to_float_generic(|s| s.trim().parse::<f64>(), |v| NumCast::from(v))
    }

    /// Retrieve and convert the primitive value into a sequence of 64-bit floats.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.to_multi_float_generic(|s| s.trim().parse::<f64>(), |v| NumCast::from(v))
    }

    fn to_float_generic<T: Clone>(
        &self,
        parse: impl Fn(&str) -> std::result::Result<T, std::num::ParseFloatError>,
        cast: impl Fn(f64) -> Option<T>,
    ) -> Result<T, ConvertValueError> {
        use self::PrimitiveValue::*;
        let numeric = match self {
            F32(c) => c.first().and_then(|v| cast(*v as f64)),
            F64(c) => c.first().and_then(|v| cast(*v)),
            U8(c) => c.first().and_then(|v| cast(*v as f64)),
            U16(c) => c.first().and_then(|v| cast(*v as f64)),
            I16(c) => c.first().and_then(|v| cast(*v as f64)),
            U32(c) => c.first().and_then(|v| cast(*v as f64)),
            I32(c) => c.first().and_then(|v| cast(*v as f64)),
            U64(c) => c.first().and_then(|v| cast(*v as f64)),
            I64(c) => c.first().and_then(|v| cast(*v as f64)),
            _ => None,
        };
        if let Some(v) = numeric {
            return Ok(v);
        }
        match self {
            Str(s) => parse(s.trim()).map_err(|err| ConvertValueError {
                requested: "float",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::ParseFloat { source: err }),
            }),
            Strs(s) => parse(s.first().map(|s| s.as_str()).unwrap_or("").trim()).map_err(|err| {
                ConvertValueError {
                    requested: "float",
                    original: self.value_type(),
                    cause: Some(InvalidValueReadError::ParseFloat { source: err }),
                }
            }),
            _ => Err(ConvertValueError {
                requested: "float",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    fn to_multi_float_generic<T: Clone>(
        &self,
        parse: impl Fn(&str) -> std::result::Result<T, std::num::ParseFloatError>,
        cast: impl Fn(f64) -> Option<T>,
    ) -> Result<Vec<T>, ConvertValueError> {
        use self::PrimitiveValue::*;
        macro_rules! cast_all {
            ($c: expr) => {
                $c.iter()
                    .map(|v| cast(*v as f64))
                    .collect::<Option<Vec<T>>>()
                    .ok_or(ConvertValueError {
                        requested: "float",
                        original: self.value_type(),
                        cause: None,
                    })
            };
        }
        match self {
            F32(c) => cast_all!(c),
            F64(c) => cast_all!(c),
            U8(c) => cast_all!(c),
            U16(c) => cast_all!(c),
            I16(c) => cast_all!(c),
            U32(c) => cast_all!(c),
            I32(c) => cast_all!(c),
            U64(c) => cast_all!(c),
            I64(c) => cast_all!(c),
            Strs(s) => s
                .iter()
                .map(|s| {
                    parse(s.trim()).map_err(|err| ConvertValueError {
                        requested: "float",
                        original: self.value_type(),
                        cause: Some(InvalidValueReadError::ParseFloat { source: err }),
                    })
                })
                .collect(),
            Str(s) => parse(s.trim()).map(|v| vec![v]).map_err(|err| ConvertValueError {
                requested: "float",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::ParseFloat { source: err }),
            }),
            _ => Err(ConvertValueError {
                requested: "float",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Map a `deserialize` parse failure onto a value conversion error.
    fn convert_err(
        &self,
        requested: &'static str,
        err: super::deserialize::Error,
    ) -> ConvertValueError {
        ConvertValueError {
            requested,
            original: self.value_type(),
            cause: Some(convert_deserialize_err(err)),
        }
    }

    /// Get a single string value. If it contains multiple strings,
    /// only the first one is returned.
    pub fn string(&self) -> Result<&str, CastValueError> {
        use self::PrimitiveValue::*;
        match self {
            Strs(c) => Ok(c.first().map(String::as_str).unwrap_or("")),
            Str(s) => Ok(s),
            _ => Err(CastValueError {
                requested: "string",
                got: self.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values
    /// if the variant is either `Str` or `Strs`.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        use self::PrimitiveValue::*;
        match self {
            Strs(c) => Ok(&c[..]),
            Str(_) => Err(CastValueError {
                requested: "strings",
                got: self.value_type(),
            }),
            _ => Err(CastValueError {
                requested: "strings",
                got: self.value_type(),
            }),
        }
    }
}

/// A utility macro for implementing both the single-value and
/// multi-value accessors of a given primitive value variant.
macro_rules! impl_primitive_getter {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        impl PrimitiveValue {
            #[doc = "Get a single value of the requested type, taking only the first element if multi-valued."]
            pub fn $name_single(&self) -> Result<$ret, CastValueError> {
                match self {
                    PrimitiveValue::$variant(c) => {
                        c.first().cloned().ok_or(CastValueError {
                            requested: stringify!($name_single),
                            got: self.value_type(),
                        })
                    }
                    _ => Err(CastValueError {
                        requested: stringify!($name_single),
                        got: self.value_type(),
                    }),
                }
            }

            #[doc = "Get a sequence of values of the requested type without copying."]
            pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
                match self {
                    PrimitiveValue::$variant(c) => Ok(&c[..]),
                    _ => Err(CastValueError {
                        requested: stringify!($name_multi),
                        got: self.value_type(),
                    }),
                }
            }
        }
    };
}

impl_primitive_getter!(tag, tags, Tags, Tag);
impl_primitive_getter!(date, dates, Date, NaiveDate);
impl_primitive_getter!(time, times, Time, NaiveTime);
impl_primitive_getter!(datetime, datetimes, DateTime, DateTime<FixedOffset>);
impl_primitive_getter!(uint8, uint8_slice, U8, u8);
impl_primitive_getter!(uint16, uint16_slice, U16, u16);
impl_primitive_getter!(int16, int16_slice, I16, i16);
impl_primitive_getter!(uint32, uint32_slice, U32, u32);
impl_primitive_getter!(int32, int32_slice, I32, i32);
impl_primitive_getter!(int64, int64_slice, I64, i64);
impl_primitive_getter!(uint64, uint64_slice, U64, u64);
impl_primitive_getter!(float32, float32_slice, F32, f32);
impl_primitive_getter!(float64, float64_slice, F64, f64);

impl PrimitiveValue {

    /// Determine the minimum number of bytes that this value would need to
    /// occupy in a DICOM file, without compression and without the header.
    /// As mandated by the standard, it is always even.
    /// The calculated number does not need to match the size of the original
    /// byte stream.
    pub fn calculate_byte_len(&self) -> usize {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            U8(c) => c.len(),
            I16(c) => c.len() * 2,
            U16(c) => c.len() * 2,
            U32(c) => c.len() * 4,
            I32(c) => c.len() * 4,
            U64(c) => c.len() * 8,
            I64(c) => c.len() * 8,
            F32(c) => c.len() * 4,
            F64(c) => c.len() * 8,
            Tags(c) => c.len() * 4,
            Date(c) => c.len() * 8,
            Str(s) => s.as_bytes().len(),
            Strs(c) if c.is_empty() => 0,
            Strs(c) => {
                c.iter()
                    .map(|s| ((s.as_bytes().len() + 1) & !1) + 1)
                    .sum::<usize>()
                    - 1
            }
            Time(c) if c.is_empty() => 0,
            Time(c) => {
                c.iter()
                    .map(|t| ((PrimitiveValue::tm_byte_len(*t) + 1) & !1) + 1)
                    .sum::<usize>()
                    - 1
            }
            DateTime(c) if c.is_empty() => 0,
            DateTime(c) => {
                c.iter()
                    .map(|dt| ((PrimitiveValue::dt_byte_len(*dt) + 1) & !1) + 1)
                    .sum::<usize>()
                    - 1
            }
        }
    }

    fn tm_byte_len(time: NaiveTime) -> usize {
        match (time.hour(), time.minute(), time.second(), time.nanosecond()) {
            (_, 0, 0, 0) => 2,
            (_, _, 0, 0) => 4,
            (_, _, _, 0) => 6,
            (_, _, _, nano) => {
                let mut frac = nano / 1000; // nano to microseconds
                let mut trailing_zeros = 0;
                while frac % 10 == 0 {
                    frac /= 10;
                    trailing_zeros += 1;
                }
                7 + 6 - trailing_zeros
            }
        }
    }

    fn dt_byte_len(datetime: DateTime<FixedOffset>) -> usize {
        // !!! the current local definition of datetime is inaccurate, because
        // it cannot distinguish unspecified components from their defaults
        // (e.g. 201812 should be different from 20181201). This will have to
        // be changed at some point.
        (match (datetime.month(), datetime.day()) {
            (1, 1) => 0,
            (_, 1) => 2,
            _ => 4,
        }) + 8
            + PrimitiveValue::tm_byte_len(datetime.time())
            + if datetime.offset() == &FixedOffset::east_opt(0).unwrap() {
                0
            } else {
                5
            }
    }
}

/// Map a parse failure from the `deserialize` module onto the coarser
/// `InvalidValueReadError` used by value conversions.
fn convert_deserialize_err(err: super::deserialize::Error) -> InvalidValueReadError {
    use super::deserialize::Error as E;
    match err {
        E::UnexpectedEndOfElement { .. } => InvalidValueReadError::UnexpectedEndOfElement,
        E::InvalidDateTimeZone { .. } => InvalidValueReadError::DateTimeZone,
        E::UnexpectedAfterDateToken { value, .. } => InvalidValueReadError::InvalidToken {
            got: value,
            expected: "'.', '+', or '-'",
        },
        E::InvalidNumberLength { len, .. } => InvalidValueReadError::InvalidLength {
            got: len,
            expected: "between 1 and 9",
        },
        E::InvalidNumberToken { value, .. } => InvalidValueReadError::InvalidToken {
            got: value,
            expected: "digit in '0'..='9'",
        },
        E::InvalidTimeZoneSignToken { value, .. } => InvalidValueReadError::InvalidToken {
            got: value,
            expected: "'+' or '-'",
        },
        other => InvalidValueReadError::Other {
            message: other.to_string(),
        },
    }
}

/// The output of this method is equivalent to calling the method `to_str`
impl std::fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        /// Auxilliary function for turning a sequence of values
        /// into a backslash-delimited string.
        fn seq_to_str<I>(iter: I) -> String
        where
            I: IntoIterator,
            I::Item: std::fmt::Display,
        {
            iter.into_iter().map(|x| x.to_string()).join("\\")
        }

        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Str(value) => f.write_str(value),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    f.write_str(&values[0])
                } else {
                    f.write_str(&seq_to_str(values))
                }
            }
            PrimitiveValue::Date(values) => f.write_str(
                &values
                    .into_iter()
                    .map(|date| date.format("%Y%m%d").to_string())
                    .join("\\"),
            ),
            PrimitiveValue::Time(values) => f.write_str(
                &values
                    .into_iter()
                    .map(|date| date.format("%H%M%S%.6f").to_string())
                    .join("\\"),
            ),
            PrimitiveValue::DateTime(values) => f.write_str(
                &values
                    .into_iter()
                    .map(|date| date.format("%Y%m%d%H%M%S%.6f%z").to_string())
                    .join("\\"),
            ),
            PrimitiveValue::U8(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::Tags(values) => f.write_str(&seq_to_str(values)),
        }
    }
}

impl HasLength for PrimitiveValue {
    fn length(&self) -> Length {
        Length::defined(self.calculate_byte_len() as u32)
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the `Item` and `PixelSequence` entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,

    /// An item. Used for elements in a SQ, regardless of content.
    Item,

    /// An item. Used for the values of encapsulated pixel data.
    PixelSequence,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    /// Can also be used for IS, SS, DS, DA, DT and TM when decoding
    /// with format preservation.
    Strs,

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str,

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags,

    /// The value is a sequence of unsigned 16-bit integers.
    /// Used for OB and UN.
    U8,

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16,

    /// A sequence of unsigned 168-bit integers.
    /// Used for US and OW.
    U16,

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32,

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32,

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64,

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64,

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32,

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD, FD and DS.
    F64,

    /// A sequence of dates.
    /// Used for the DA representation.
    Date,

    /// A sequence of date-time values.
    /// Used for the DT representation.
    DateTime,

    /// A sequence of time values.
    /// Used for the TM representation.
    Time,
}

impl DicomValueType for PrimitiveValue {
    fn value_type(&self) -> ValueType {
        match *self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Date(_) => ValueType::Date,
            PrimitiveValue::DateTime(_) => ValueType::DateTime,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::Time(_) => ValueType::Time,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::U8(_) => ValueType::U8,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Str(_) => 1,
            PrimitiveValue::Date(b) => b.len(),
            PrimitiveValue::DateTime(b) => b.len(),
            PrimitiveValue::F32(b) => b.len(),
            PrimitiveValue::F64(b) => b.len(),
            PrimitiveValue::I16(b) => b.len(),
            PrimitiveValue::I32(b) => b.len(),
            PrimitiveValue::I64(b) => b.len(),
            PrimitiveValue::Strs(b) => b.len(),
            PrimitiveValue::Tags(b) => b.len(),
            PrimitiveValue::Time(b) => b.len(),
            PrimitiveValue::U16(b) => b.len(),
            PrimitiveValue::U32(b) => b.len(),
            PrimitiveValue::U64(b) => b.len(),
            PrimitiveValue::U8(b) => b.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dicom_value;
    use crate::value::PrimitiveValue;
    use chrono::NaiveDate;
    use smallvec::smallvec;

    #[test]
    fn primitive_value_to_str() {
        assert_eq!(PrimitiveValue::Empty.to_str(), "");

        // does not copy on a single string
        let value = PrimitiveValue::Str("Smith^John".to_string());
        let string = value.to_str();
        assert_eq!(string, "Smith^John",);
        match string {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected string to be borrowed, but was owned"),
        }

        assert_eq!(
            PrimitiveValue::Date(smallvec![NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()]).to_str(),
            "20141012",
        );
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY", "WHOLE BODY", "EMISSION"]).to_str(),
            "DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION",
        );

        // sequence of numbers
        let value = PrimitiveValue::from(vec![10, 11, 12]);
        assert_eq!(value.to_str(), "10\\11\\12",);
    }

    #[test]
    fn primitive_value_to_bytes() {
        assert_eq!(PrimitiveValue::Empty.to_bytes(), &[][..]);

        if cfg!(target_endian = "little") {
            assert_eq!(
                PrimitiveValue::U16(smallvec![1, 2, 0x0601,]).to_bytes(),
                &[0x01, 0x00, 0x02, 0x00, 0x01, 0x06][..],
            );
        } else {
            assert_eq!(
                PrimitiveValue::U16(smallvec![0x0001, 0x0002, 0x0601,]).to_bytes(),
                &[0x00, 0x01, 0x00, 0x02, 0x06, 0x01][..],
            );
        }

        // does not copy on a single string
        let value = PrimitiveValue::from("Smith^John");
        let bytes = value.to_bytes();
        assert_eq!(bytes, &b"Smith^John"[..],);
        match bytes {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected bytes to be borrowed, but are owned"),
        }

        assert_eq!(
            PrimitiveValue::Date(smallvec![NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()]).to_bytes(),
            &b"20141012"[..],
        );
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY", "WHOLE BODY", "EMISSION",]).to_bytes(),
            &b"DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION"[..],
        );

        // does not copy on bytes
        let value = PrimitiveValue::from(vec![0x99; 16]);
        let bytes = value.to_bytes();
        assert_eq!(bytes, &[0x99; 16][..],);
        match bytes {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected bytes to be borrowed, but are owned"),
        }
    }

    #[test]
    fn primitive_value_to_date() {
        // trivial conversion
        assert_eq!(
            PrimitiveValue::Date(smallvec![NaiveDate::from_ymd_opt(2014, 10, 12).unwrap()])
                .to_date()
                .unwrap(),
            NaiveDate::from_ymd_opt(2014, 10, 12).unwrap(),
        );
        // from text (Str)
        assert_eq!(
            dicom_value!(Str, "20141012").to_date().unwrap(),
            NaiveDate::from_ymd_opt(2014, 10, 12).unwrap(),
        );
        // from text (Strs)
        assert_eq!(
            dicom_value!(Strs, ["20141012"]).to_date().unwrap(),
            NaiveDate::from_ymd_opt(2014, 10, 12).unwrap(),
        );
        // from bytes (Bytes fake variant)
        assert_eq!(
            dicom_value!(Bytes, b"20141012").to_date().unwrap(),
            NaiveDate::from_ymd_opt(2014, 10, 12).unwrap(),
        );
        // not a date
        assert!(PrimitiveValue::Str("Smith^John".to_string())
            .to_date()
            .is_err());
    }
}
