//! This crate implements the standard DICOM attribute dictionary.
//!
//! The dictionary is consulted only to resolve a tag to a human
//! readable alias (and back), for display purposes. It plays no part in
//! parsing a data set: a data element's actual value representation is
//! always the one recorded in the stream (explicit VR) or inferred from
//! the small built-in VR table used by the decoders (implicit VR).
//!
//! Consequently, this crate does not attempt to carry the thousands of
//! attributes of the full PS3.6 registry. It hosts a small, commonly
//! seen subset, indexed the same way the full dictionary would be:
//! by name and by tag, behind a lazily initialized singleton.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod entries;
pub mod tags;
pub mod uids;

use dicom_core::dictionary::{DataDictionary, DictionaryEntry, DictionaryEntryRef};
use dicom_core::header::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(StandardDataDictionaryRegistry::new);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// One does not generally have to call this directly:
/// the unit type [`StandardDataDictionary`] already provides
/// a lazily loaded singleton implementing [`DataDictionary`].
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data structure actually containing the standard dictionary.
///
/// Made opaque via the unit type [`StandardDataDictionary`].
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_name: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> Self {
        let mut by_name = HashMap::with_capacity(entries::ENTRIES.len());
        let mut by_tag = HashMap::with_capacity(entries::ENTRIES.len());
        for entry in entries::ENTRIES {
            by_name.insert(entry.alias, entry);
            by_tag.insert(entry.tag, entry);
        }
        StandardDataDictionaryRegistry { by_name, by_tag }
    }

    fn get_by_name(&self, name: &str) -> Option<&'static DictionaryEntryRef<'static>> {
        self.by_name.get(name).copied()
    }

    fn get_by_tag(&self, tag: Tag) -> Option<&'static DictionaryEntryRef<'static>> {
        self.by_tag.get(&tag).copied()
    }
}

/// A data element dictionary which consults the small built-in
/// attribute table above, behind a lazily initialized singleton.
///
/// This is the dictionary type used by default throughout the
/// workspace whenever an attribute alias or name is needed for
/// display, such as when printing a data set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardDataDictionary;

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Standard Data Dictionary")
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn get_by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().get_by_name(name)
    }

    fn get_by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().get_by_tag(tag)
    }
}
