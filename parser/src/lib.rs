//! This crate provides interfaces and data structures for reading and writing
//! data in accordance to the DICOM standard, at different layers of
//! abstraction.
//! For the time being, all APIs are based on synchronous I/O.
#![recursion_limit = "72"]

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate smallvec;
extern crate dicom_core;
extern crate dicom_dictionary_std;

pub mod dataset;
pub mod error;
pub mod printer;
pub mod stateful;

mod util;

pub use dataset::DataSetReader;
pub use error::{Error, Result};
pub use stateful::decode::{StatefulDecode, StatefulDecoder};
pub use stateful::encode::StatefulEncoder;
