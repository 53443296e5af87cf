//! This crate contains the DICOM transfer syntax registry,
//! an index of transfer syntaxes known to this implementation.
//!
//! Transfer syntaxes determine the byte order and value representation
//! rules used to decode and encode a data set. Registering the
//! fully-supported ones (implicit VR little endian, explicit VR little
//! endian, explicit VR big endian) is enough for a data set to be
//! traversed. The rest are registered as stubs: a consumer can still
//! detect the transfer syntax, walk the data set and retrieve pixel
//! data fragments in their encapsulated form, but decoding those
//! fragments requires an external pixel data adapter
//! (see [`dicom_encoding::adapters`]).
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

use dicom_encoding::transfer_syntax::TransferSyntax;
use dicom_encoding::TransferSyntaxIndex;
use std::collections::HashMap;

pub mod entries;

pub use dicom_encoding::Codec;

/// A data structure containing the transfer syntaxes supported by this
/// implementation. This is the main `struct` to use when one intends to
/// retrieve a transfer syntax descriptor by UID.
#[derive(Debug)]
pub struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl TransferSyntaxRegistryImpl {
    fn get(&self, uid_trim: &str) -> Option<&TransferSyntax> {
        self.m.get(uid_trim)
    }

    /// Register the given transfer syntax descriptor.
    /// Returns `false` if the UID already exists with a fully supported
    /// implementation (in which case the request is ignored),
    /// and `true` otherwise.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.get(ts.uid()) {
            Some(registered) if registered.is_fully_supported() => {
                tracing::warn!(
                    "Attempting to replace transfer syntax {} which is already fully supported",
                    ts.uid(),
                );
                false
            }
            _ => {
                self.m.insert(ts.uid(), ts);
                true
            }
        }
    }

    fn iter(&'static self) -> impl Iterator<Item = &'static TransferSyntax> {
        self.m.values()
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl {
            m: HashMap::with_capacity(16),
        };

        registry.register(entries::IMPLICIT_VR_LITTLE_ENDIAN.erased());
        registry.register(entries::EXPLICIT_VR_LITTLE_ENDIAN.erased());
        registry.register(entries::EXPLICIT_VR_BIG_ENDIAN.erased());
        registry.register(entries::RLE_LOSSLESS.erased());
        registry.register(entries::JPEG_BASELINE.erased());
        registry.register(entries::JPEG_EXTENDED.erased());
        registry.register(entries::JPEG_LOSSLESS_NON_HIERARCHICAL.erased());
        registry.register(entries::JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION.erased());
        registry.register(entries::JPEG_LS_LOSSLESS.erased());
        registry.register(entries::JPEG_LS_LOSSY_NEAR_LOSSLESS.erased());
        registry.register(entries::JPEG_2000_LOSSLESS_ONLY.erased());
        registry.register(entries::JPEG_2000.erased());

        #[cfg(feature = "inventory-registry")]
        for factory in
            dicom_encoding::inventory::iter::<dicom_encoding::transfer_syntax::TransferSyntaxFactory>
        {
            registry.register((factory.0)());
        }

        registry
    };
}

/// Gain access to the transfer syntax registry.
pub(crate) fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}

/// Data type for the DICOM transfer syntax registry.
///
/// This is the type to use when looking up a transfer syntax by UID
/// to parse or write a DICOM data set.
///
/// # Example
///
/// ```
/// use dicom_transfer_syntax_registry::TransferSyntaxRegistry;
/// use dicom_encoding::TransferSyntaxIndex;
///
/// let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1");
/// assert!(ts.is_some());
/// assert_eq!(ts.unwrap().name(), "Explicit VR Little Endian");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        // a transfer syntax UID might come with additional trailing
        // null or space characters, remove them
        let uid_trim = uid.trim_end_matches(|c: char| c.is_whitespace() || c == '\0');
        get_registry().get(uid_trim)
    }
}

impl TransferSyntaxRegistry {
    /// Obtain an iterator over all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &'static TransferSyntax> {
        get_registry().iter()
    }
}

/// Retrieve the default transfer syntax, Implicit VR Little Endian.
pub fn default() -> &'static TransferSyntax {
    get_registry()
        .get(entries::IMPLICIT_VR_LITTLE_ENDIAN.uid())
        .expect("implicit VR little endian should always be registered")
}
