//! Helpers for working with DICOM unique identifiers (UI value representation).
//!
//! A UID is encoded as an ASCII string of dot-separated numeric components,
//! padded with a single trailing `NUL` (`\0`) byte when its length is odd.
//! This module only concerns itself with that low-level textual shape;
//! well-known UID values (transfer syntaxes, SOP classes) are out of scope.

/// Trim the trailing padding (`NUL` or space) that a UID value may carry
/// in order to occupy an even number of bytes on the wire.
pub fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(['\0', ' '])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_nul_padding() {
        assert_eq!(trim_uid("1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
    }

    #[test]
    fn leaves_unpadded_uid_untouched() {
        assert_eq!(trim_uid("1.2.840.10008.1.2"), "1.2.840.10008.1.2");
    }
}
