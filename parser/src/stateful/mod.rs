//! Stateful encoding and decoding of DICOM data, tracking the transfer
//! syntax and specific character set currently in effect.

pub mod decode;
pub mod encode;
