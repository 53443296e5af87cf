//! Built-in transfer syntax specifiers.
//!
//! Only the transfer syntaxes that this implementation is able to
//! recognize and parse a data set of are fully supported (`Codec::None`).
//! The JPEG family and RLE Lossless are registered as stubs: data sets in
//! these transfer syntaxes can still be traversed and their pixel data
//! fragments extracted, but decoding the fragments themselves is left to
//! an external codec supplied through the pixel data adapter hooks.

use dicom_encoding::{
    submit_transfer_syntax, transfer_syntax::AdapterFreeTransferSyntax as Ts, Codec, Endianness,
};

/// Implicit VR Little Endian
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

/// construct a transfer syntax descriptor for a transfer syntax whose
/// pixel data codec is not implemented by this crate. Data sets in this
/// transfer syntax can still be parsed, and pixel data can still be
/// retrieved in its encapsulated form.
pub(crate) const fn create_ts_stub(uid: &'static str, name: &'static str) -> Ts {
    Ts::new_ele(uid, name, Codec::EncapsulatedPixelData(None, None))
}

/// RLE Lossless
pub const RLE_LOSSLESS: Ts = create_ts_stub("1.2.840.10008.1.2.5", "RLE Lossless");

/// JPEG Baseline (Process 1)
pub const JPEG_BASELINE: Ts = create_ts_stub("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");

/// JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.51",
    "JPEG Extended (Process 2 & 4)",
);

/// JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);

/// JPEG-LS Lossless
pub const JPEG_LS_LOSSLESS: Ts = create_ts_stub("1.2.840.10008.1.2.4.80", "JPEG-LS Lossless");

/// JPEG-LS Lossy (Near-Lossless)
pub const JPEG_LS_LOSSY_NEAR_LOSSLESS: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless)",
);

/// JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_LOSSLESS_ONLY: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// JPEG 2000 Image Compression
pub const JPEG_2000: Ts = create_ts_stub("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression");

submit_transfer_syntax!(IMPLICIT_VR_LITTLE_ENDIAN);
submit_transfer_syntax!(EXPLICIT_VR_LITTLE_ENDIAN);
submit_transfer_syntax!(EXPLICIT_VR_BIG_ENDIAN);
submit_transfer_syntax!(RLE_LOSSLESS);
submit_transfer_syntax!(JPEG_BASELINE);
submit_transfer_syntax!(JPEG_EXTENDED);
submit_transfer_syntax!(JPEG_LOSSLESS_NON_HIERARCHICAL);
submit_transfer_syntax!(JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION);
submit_transfer_syntax!(JPEG_LS_LOSSLESS);
submit_transfer_syntax!(JPEG_LS_LOSSY_NEAR_LOSSLESS);
submit_transfer_syntax!(JPEG_2000_LOSSLESS_ONLY);
submit_transfer_syntax!(JPEG_2000);
