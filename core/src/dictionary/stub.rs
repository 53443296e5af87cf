//! A dictionary that resolves nothing, for contexts that need a
//! `DataDictionary` implementation but have no attribute metadata to
//! offer (e.g. doctests, or a caller that works purely off of
//! well-known tags handled through `vr_table`).

use super::{DataDictionary, DictionaryEntryRef};
use crate::header::Tag;

/// An empty attribute dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn get_by_name(&self, _name: &str) -> Option<&Self::Entry> {
        None
    }

    fn get_by_tag(&self, _tag: Tag) -> Option<&Self::Entry> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_dictionary_knows_nothing() {
        let dict = StubDataDictionary;
        assert_eq!(dict.get_by_name("PatientName"), None);
        assert_eq!(dict.get_by_tag(Tag(0x0010, 0x0010)), None);
    }
}
