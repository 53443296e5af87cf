//! Named constants for well-known UIDs referred to by value elsewhere
//! in this workspace: transfer syntaxes and a couple of SOP classes
//! used in examples and tests.
//!
//! This mirrors the generated `uids` module of the full UID registry,
//! trimmed down to the values this workspace actually spells out by
//! name.

/// Implicit VR Little Endian
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Explicit VR Big Endian (retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// JPEG Extended (Process 2 & 4), restricted to 12-bit samples
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// RLE Lossless
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// JPIP Referenced Deflate
pub const JPIP_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.95";
/// JPIP HTJ2K Referenced Deflate
pub const JPIPHTJ2K_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.103";
/// Nuclear Medicine Image Storage (SOP Class)
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// Enhanced MR Image Storage (SOP Class)
pub const ENHANCED_MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.1";
