//! This module contains the concept of a DICOM data dictionary: the
//! means to resolve a tag to its value representation and back to an
//! alias, without committing this crate to carrying the full standard
//! attribute registry (out of scope here -- see [`stub`] for a
//! dictionary that knows nothing and the workspace's `vr_table` for the
//! small built-in table actually used while parsing).

pub mod stub;

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// Type trait for a dictionary of DICOM attributes. Attribute
/// dictionaries provide the means to convert a tag to an alias and
/// vice versa, as well as a form of retrieving additional information
/// about the attribute.
///
/// The methods herein have no generic parameters, so as to enable
/// being used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or
    /// "SOPInstanceUID"). Aliases are usually case sensitive and not
    /// separated by spaces.
    fn get_by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn get_by_tag(&self, tag: Tag) -> Option<&Self::Entry>;
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntryBuf {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually UpperCamelCase
    pub alias: String,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DictionaryEntry for DictionaryEntryBuf {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias.as_str()
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually UpperCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DictionaryEntry for DictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_buf_exposes_its_fields_through_the_trait() {
        let entry = DictionaryEntryBuf {
            tag: Tag(0x0010, 0x0010),
            alias: "PatientName".to_string(),
            vr: VR::PN,
        };
        assert_eq!(entry.tag(), Tag(0x0010, 0x0010));
        assert_eq!(entry.alias(), "PatientName");
        assert_eq!(entry.vr(), VR::PN);
    }
}
