//! UID remapping for anonymization.
//!
//! The Basic Attribute Confidentiality Profile requires that UIDs
//! be replaced consistently: the same source UID must always produce
//! the same replacement within a single anonymization pass, and
//! different anonymization passes sharing the table must agree on
//! previously seen mappings.

use rand::Rng;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// A persistent table mapping original UIDs to their anonymized
/// replacements.
///
/// A single table must be owned by one anonymization pass at a time;
/// the type is intentionally not `Sync`-friendly, consistent with the
/// single-threaded cooperative model used throughout this library.
#[derive(Debug, Default, Clone)]
pub struct UidRemapTable {
    table: HashMap<String, String>,
}

impl UidRemapTable {
    /// Create an empty remap table.
    pub fn new() -> Self {
        UidRemapTable {
            table: HashMap::new(),
        }
    }

    /// Look up or create a replacement for the given UID.
    ///
    /// Trailing NUL padding in `original` is stripped before the
    /// lookup, so that the same logical UID maps consistently
    /// regardless of how it was originally padded.
    pub fn remap(&mut self, original: &str) -> String {
        let key = original.trim_end_matches('\0');
        if let Some(replacement) = self.table.get(key) {
            return replacement.clone();
        }
        let replacement = generate_uid();
        self.table.insert(key.to_string(), replacement.clone());
        replacement
    }

    /// Number of UIDs remapped so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no UID has been remapped yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Generate a fresh pseudo-random UID under the `2.25` UUID-derived
/// root, per DICOM PS3.5 Annex B: `2.25.<random 14-digit number>.<ms
/// since epoch>`.
pub fn generate_uid() -> String {
    let mut rng = rand::thread_rng();
    // 14 decimal digits, first digit non-zero so the length stays stable
    let first_digit = rng.gen_range(1..=9u64);
    let rest: u64 = rng.gen_range(0..10_000_000_000_000u64);
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    format!("2.25.{}{:013}.{}", first_digit, rest, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaps_are_stable_within_the_same_table() {
        let mut table = UidRemapTable::new();
        let a = table.remap("1.2.3.4");
        let b = table.remap("1.2.3.4");
        assert_eq!(a, b);
    }

    #[test]
    fn remaps_ignore_trailing_nul_padding() {
        let mut table = UidRemapTable::new();
        let a = table.remap("1.2.3.4");
        let b = table.remap("1.2.3.4\0");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_uids_get_distinct_replacements() {
        let mut table = UidRemapTable::new();
        let a = table.remap("1.2.3.4");
        let b = table.remap("1.2.3.5");
        assert_ne!(a, b);
    }

    #[test]
    fn generated_uids_start_with_the_dicom_root() {
        let uid = generate_uid();
        assert!(uid.starts_with("2.25."));
    }
}
