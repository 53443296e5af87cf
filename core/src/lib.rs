#![crate_type = "lib"]
#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
#![recursion_limit = "60"]

//! This is the core DICOM library, containing the data types, traits
//! and constants that describe the tagged binary container format at
//! the heart of the DICOM standard: tags, value representations,
//! lengths, typed element values and the attribute dictionary
//! abstraction used to resolve them.
//!
//! Higher-level concerns -- decoding bytes into elements, building
//! and traversing whole data sets, or writing them back out -- live
//! in `dicom-encoding` and `dicom-parser`. This crate only describes
//! what an element *is*.

pub use chrono;

pub mod dictionary;
pub mod error;
pub mod header;
pub mod ops;
pub mod prelude;
pub mod uid;
pub mod value;
pub mod vr_table;

mod util;

pub use dictionary::DataDictionary;
pub use error::{Error, Result};
pub use header::{DataElement, DataElementHeader, Header, Length, Tag, VR};
pub use value::{PrimitiveValue, Value as DicomValue};

/// Constructs a [`PrimitiveValue`] from a literal list of elements,
/// inferring the appropriate variant from the type of its arguments.
///
/// # Example
///
/// ```
/// # use dicom_core::dicom_value;
/// # use dicom_core::PrimitiveValue;
/// let value = dicom_value!(Strs, ["DERIVED", "SECONDARY"]);
/// assert_eq!(value.multiplicity(), 2);
/// ```
#[macro_export]
macro_rules! dicom_value {
    ($variant: ident, [$($elem: expr),* $(,)*]) => {
        $crate::PrimitiveValue::$variant(
            ::smallvec::smallvec![$($elem),*]
        )
    };
    ($variant: ident, $elem: expr) => {
        $crate::PrimitiveValue::$variant(
            ::smallvec::smallvec![$elem]
        )
    };
}
