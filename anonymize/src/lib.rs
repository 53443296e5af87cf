//! Rule-driven anonymization of DICOM objects.
//!
//! This crate implements a representative subset of the Basic
//! Attribute Confidentiality Profile (DICOM PS3.15 Annex E) on top of
//! [`dicom_core::ops`], the attribute operation API shared by every
//! DICOM object type in this workspace.
//!
//! Anonymization produces a new object: the source object's element
//! map is shallow-copied, each profile rule is applied in turn, and
//! (unless [`AnonymizationOptions::keep_private_tags`] is set) every
//! private (odd-group) tag is then purged. Anonymization is pure given
//! its inputs plus the shared [`UidRemapTable`]; running two
//! anonymization passes that share a table concurrently is not
//! supported — the caller must serialize access.
//!
//! ```
//! use dicom_anonymize::{anonymize, AnonymizationOptions, UidRemapTable};
//! use dicom_object::InMemDicomObject;
//!
//! # fn example(obj: InMemDicomObject) {
//! let options = AnonymizationOptions::default();
//! let mut uid_table = UidRemapTable::new();
//! let anonymized = anonymize(&obj, &options, &mut uid_table);
//! # let _ = anonymized;
//! # }
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod rules;
pub mod uid;

pub use rules::{Rule, RuleAction, BASIC_PROFILE};
pub use uid::{generate_uid, UidRemapTable};

use dicom_core::dictionary::DataDictionary;
use dicom_core::ops::{ApplyOp, AttributeAction, AttributeOp};
use dicom_core::Tag;
use dicom_object::mem::InMemDicomObject;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Debug;

/// Configuration for an anonymization pass.
#[derive(Debug, Clone)]
pub struct AnonymizationOptions {
    /// The literal used to replace values subject to the `Dummy` action.
    pub dummy_prefix: Cow<'static, str>,
    /// Whether to leave private (odd-group) tags in place.
    ///
    /// By default, every private tag is removed after the built-in
    /// profile has been applied, since private attributes are not
    /// covered by the confidentiality profile and may carry
    /// vendor-specific identifying information.
    pub keep_private_tags: bool,
    /// Per-tag overrides that supersede the built-in profile.
    ///
    /// An override for a tag outside the built-in profile introduces
    /// a new rule; an override for a tag within it replaces the
    /// built-in action.
    pub overrides: HashMap<Tag, RuleAction>,
}

impl Default for AnonymizationOptions {
    fn default() -> Self {
        AnonymizationOptions {
            dummy_prefix: Cow::Borrowed("ANON"),
            keep_private_tags: false,
            overrides: HashMap::new(),
        }
    }
}

impl AnonymizationOptions {
    /// Create a new set of options with the default profile behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dummy literal used for the `Dummy` action.
    pub fn with_dummy_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.dummy_prefix = prefix.into();
        self
    }

    /// Control whether private tags survive the pass.
    pub fn with_keep_private_tags(mut self, keep: bool) -> Self {
        self.keep_private_tags = keep;
        self
    }

    /// Add or replace the rule for a specific tag.
    pub fn with_override(mut self, tag: Tag, action: RuleAction) -> Self {
        self.overrides.insert(tag, action);
        self
    }
}

/// Anonymize `obj` according to `options`, consulting and updating
/// `uid_table` for every UID remapped along the way.
///
/// Returns a new object; `obj` is left untouched.
pub fn anonymize<D>(
    obj: &InMemDicomObject<D>,
    options: &AnonymizationOptions,
    uid_table: &mut UidRemapTable,
) -> InMemDicomObject<D>
where
    D: DataDictionary + Clone + Debug,
{
    let mut out = obj.clone();

    for rule in BASIC_PROFILE {
        let action = options
            .overrides
            .get(&rule.tag)
            .copied()
            .unwrap_or(rule.action);
        apply_rule(&mut out, rule.tag, action, options, uid_table);
    }

    // overrides for tags outside the built-in profile introduce new rules
    for (&tag, &action) in &options.overrides {
        if rules::lookup(tag).is_none() {
            apply_rule(&mut out, tag, action, options, uid_table);
        }
    }

    if !options.keep_private_tags {
        let private_tags: Vec<Tag> = out.tags().filter(|tag| tag.group() % 2 == 1).collect();
        for tag in private_tags {
            out.remove_element(tag);
        }
    }

    out
}

fn apply_rule<D>(
    obj: &mut InMemDicomObject<D>,
    tag: Tag,
    action: RuleAction,
    options: &AnonymizationOptions,
    uid_table: &mut UidRemapTable,
) where
    D: DataDictionary + Clone + Debug,
{
    if action == RuleAction::Keep {
        return;
    }

    let Ok(element) = obj.element(tag) else {
        return;
    };

    let op = match action {
        RuleAction::Keep => return,
        RuleAction::Remove => AttributeOp::new(tag, AttributeAction::Remove),
        RuleAction::Zero => AttributeOp::new(tag, AttributeAction::Empty),
        RuleAction::Dummy => AttributeOp::new(
            tag,
            AttributeAction::SetStr(Cow::Owned(options.dummy_prefix.to_string())),
        ),
        RuleAction::UidRemap => {
            let original = element
                .value()
                .to_str()
                .map(|s| s.into_owned())
                .unwrap_or_default();
            let replacement = uid_table.remap(original.trim_end_matches('\0'));
            AttributeOp::new(tag, AttributeAction::SetStr(Cow::Owned(replacement)))
        }
    };

    if let Err(e) = obj.apply(op) {
        // per the failure semantics of anonymization, a single tag
        // failing to apply is non-fatal: it is left in its previous state.
        tracing::warn!("could not anonymize tag {}: {}", tag, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::header::DataElement;
    use dicom_core::{PrimitiveValue, VR};
    use dicom_object::InMemDicomObject;

    fn sample_object() -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            PrimitiveValue::from("Doe^John").into(),
        ));
        obj.put(DataElement::new(
            Tag(0x0010, 0x0030),
            VR::DA,
            PrimitiveValue::from("19700101").into(),
        ));
        obj.put(DataElement::new(
            Tag(0x0020, 0x000D),
            VR::UI,
            PrimitiveValue::from("1.2.3.4").into(),
        ));
        obj.put(DataElement::new(
            Tag(0x0009, 0x0010),
            VR::LO,
            PrimitiveValue::from("PRIVATE CREATOR").into(),
        ));
        obj.put(DataElement::new(
            Tag(0x0010, 0x0040),
            VR::CS,
            PrimitiveValue::from("M").into(),
        ));
        obj
    }

    #[test]
    fn dummies_the_patient_name() {
        let obj = sample_object();
        let options = AnonymizationOptions::default();
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        let name = out.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.value().to_str().unwrap(), "ANON");
    }

    #[test]
    fn zeroes_the_birth_date() {
        let obj = sample_object();
        let options = AnonymizationOptions::default();
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        let dob = out.element(Tag(0x0010, 0x0030)).unwrap();
        assert_eq!(dob.value().to_str().unwrap(), "");
    }

    #[test]
    fn remaps_study_instance_uid_consistently() {
        let obj = sample_object();
        let options = AnonymizationOptions::default();
        let mut uid_table = UidRemapTable::new();
        let out1 = anonymize(&obj, &options, &mut uid_table);
        let out2 = anonymize(&obj, &options, &mut uid_table);

        let uid1 = out1.element(Tag(0x0020, 0x000D)).unwrap().value().to_str().unwrap();
        let uid2 = out2.element(Tag(0x0020, 0x000D)).unwrap().value().to_str().unwrap();
        assert_eq!(uid1, uid2);
        assert_ne!(uid1, "1.2.3.4");
    }

    #[test]
    fn purges_private_tags_by_default() {
        let obj = sample_object();
        let options = AnonymizationOptions::default();
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        assert!(out.element(Tag(0x0009, 0x0010)).is_err());
    }

    #[test]
    fn keeps_private_tags_when_requested() {
        let obj = sample_object();
        let options = AnonymizationOptions::default().with_keep_private_tags(true);
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        assert!(out.element(Tag(0x0009, 0x0010)).is_ok());
    }

    #[test]
    fn keeps_non_identifying_attributes() {
        let obj = sample_object();
        let options = AnonymizationOptions::default();
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        let sex = out.element(Tag(0x0010, 0x0040)).unwrap();
        assert_eq!(sex.value().to_str().unwrap(), "M");
    }

    #[test]
    fn override_can_remove_an_attribute_outside_the_profile() {
        let obj = sample_object();
        let options = AnonymizationOptions::default()
            .with_override(Tag(0x0010, 0x0040), RuleAction::Remove);
        let mut uid_table = UidRemapTable::new();
        let out = anonymize(&obj, &options, &mut uid_table);

        assert!(out.element(Tag(0x0010, 0x0040)).is_err());
    }
}
