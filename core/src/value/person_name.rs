//! Handling of DICOM values with the PN (person name) value representation.
//!
//! A PN value is composed of up to three name groups separated by `=`:
//! an alphabetic representation, an ideographic representation and a
//! phonetic representation. Each group is itself `^`-separated into up
//! to five components: family name, given name, middle name, prefix
//! and suffix.
use std::fmt::{Display, Formatter};

/// A single `^`-separated group of name components, as found within
/// one of the (up to three) `=`-separated groups of a PN value.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PersonNameGroup<'a> {
    family: Option<&'a str>,
    given: Option<&'a str>,
    middle: Option<&'a str>,
    prefix: Option<&'a str>,
    suffix: Option<&'a str>,
}

impl Display for PersonNameGroup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let components: &[Option<&str>] =
            &[self.prefix, self.given, self.middle, self.family, self.suffix];

        let mut c_iter = components.iter().flatten().peekable();

        while let Some(component) = c_iter.next() {
            if c_iter.peek().is_some() {
                write!(f, "{} ", component)?
            } else {
                write!(f, "{}", component)?
            }
        }
        Ok(())
    }
}

impl<'a> PersonNameGroup<'a> {
    /// Retrieve the family name component.
    pub fn family(&self) -> Option<&str> {
        self.family
    }
    /// Retrieve the given name component.
    pub fn given(&self) -> Option<&str> {
        self.given
    }
    /// Retrieve the middle name component.
    pub fn middle(&self) -> Option<&str> {
        self.middle
    }
    /// Retrieve the name prefix component.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix
    }
    /// Retrieve the name suffix component.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix
    }

    /// Whether this group has no components at all.
    pub fn is_empty(&self) -> bool {
        self.family.is_none()
            && self.given.is_none()
            && self.middle.is_none()
            && self.prefix.is_none()
            && self.suffix.is_none()
    }

    /// Convert the group into its DICOM textual form, components
    /// interspersed with a `'^'` separator. Leading null components
    /// produce a separator, trailing ones do not.
    pub fn to_dicom_string(&self) -> String {
        let mut name = String::new();

        let components: &[Option<&str>] =
            &[self.family, self.given, self.middle, self.prefix, self.suffix];

        let mut it = components.iter().rev().peekable();
        while it.next_if(|component| component.is_none()).is_some() {}

        let mut it = it.rev().peekable();
        while let Some(option) = it.next() {
            if let Some(component) = option {
                name.push_str(component);
            }
            if it.peek().is_some() {
                name.push('^');
            }
        }

        name
    }

    /// Parse a single `^`-separated group from its DICOM textual form.
    pub fn from_slice(slice: &'a str) -> PersonNameGroup<'a> {
        let mut parts = slice.split('^');

        macro_rules! get_component {
            () => {
                parts
                    .next()
                    .and_then(|s| if s.is_empty() { None } else { Some(s) })
            };
        }

        PersonNameGroup {
            family: get_component!(),
            given: get_component!(),
            middle: get_component!(),
            prefix: get_component!(),
            suffix: get_component!(),
        }
    }

    /// Retrieve a builder for a name group.
    pub fn builder() -> PersonNameGroupBuilder<'a> {
        PersonNameGroupBuilder::new()
    }
}

/// A builder to construct a [`PersonNameGroup`] from its components.
#[derive(Debug, Default, Copy, Clone)]
pub struct PersonNameGroupBuilder<'a> {
    group: PersonNameGroup<'a>,
}

impl<'a> PersonNameGroupBuilder<'a> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update the family name component.
    pub fn with_family(mut self, family_name: &'a str) -> Self {
        self.group.family = Some(family_name);
        self
    }

    /// Insert or update the given name component.
    pub fn with_given(mut self, given_name: &'a str) -> Self {
        self.group.given = Some(given_name);
        self
    }

    /// Insert or update the middle name component.
    pub fn with_middle(mut self, middle_name: &'a str) -> Self {
        self.group.middle = Some(middle_name);
        self
    }

    /// Insert or update the prefix component.
    pub fn with_prefix(mut self, name_prefix: &'a str) -> Self {
        self.group.prefix = Some(name_prefix);
        self
    }

    /// Insert or update the suffix component.
    pub fn with_suffix(mut self, name_suffix: &'a str) -> Self {
        self.group.suffix = Some(name_suffix);
        self
    }

    /// Build the name group with the accumulated components.
    pub fn build(&self) -> PersonNameGroup<'a> {
        self.group
    }
}

/// A DICOM _Person Name_ (PN value representation), as per PS3.5 sect 6.2.
///
/// A person name carries up to three representations of the same
/// name: an alphabetic one (most commonly the only one present), an
/// ideographic one and a phonetic one. Each is itself a [`PersonNameGroup`]
/// of up to five components.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PersonName<'a> {
    alphabetic: PersonNameGroup<'a>,
    ideographic: Option<PersonNameGroup<'a>>,
    phonetic: Option<PersonNameGroup<'a>>,
}

impl Display for PersonName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.alphabetic, f)
    }
}

impl<'a> PersonName<'a> {
    /// Retrieve the alphabetic representation of the name.
    ///
    /// This is the representation present in virtually every PN value.
    pub fn alphabetic(&self) -> &PersonNameGroup<'a> {
        &self.alphabetic
    }

    /// Retrieve the ideographic representation of the name, if present.
    pub fn ideographic(&self) -> Option<&PersonNameGroup<'a>> {
        self.ideographic.as_ref()
    }

    /// Retrieve the phonetic representation of the name, if present.
    pub fn phonetic(&self) -> Option<&PersonNameGroup<'a>> {
        self.phonetic.as_ref()
    }

    /// Convert the person name into its DICOM textual form: up to three
    /// `=`-separated groups, trailing empty groups omitted.
    pub fn to_dicom_string(&self) -> String {
        let groups = [
            Some(self.alphabetic),
            self.ideographic,
            self.phonetic,
        ];

        let mut it = groups.iter().rev().peekable();
        while it.next_if(|g| g.map(|g| g.is_empty()).unwrap_or(true)).is_some() {}

        let mut it = it.rev().peekable();
        let mut out = String::new();
        while let Some(group) = it.next() {
            if let Some(group) = group {
                out.push_str(&group.to_dicom_string());
            }
            if it.peek().is_some() {
                out.push('=');
            }
        }
        out
    }

    /// Parse a person name from its DICOM textual form.
    pub fn from_slice(slice: &'a str) -> PersonName<'a> {
        let mut groups = slice.splitn(3, '=');

        let alphabetic = groups.next().map(PersonNameGroup::from_slice).unwrap_or_default();
        let ideographic = groups
            .next()
            .filter(|s| !s.is_empty())
            .map(PersonNameGroup::from_slice);
        let phonetic = groups
            .next()
            .filter(|s| !s.is_empty())
            .map(PersonNameGroup::from_slice);

        PersonName {
            alphabetic,
            ideographic,
            phonetic,
        }
    }

    /// Build a person name out of just its alphabetic group, the
    /// common case where no ideographic or phonetic representation
    /// is given.
    pub fn from_alphabetic(group: PersonNameGroup<'a>) -> Self {
        PersonName {
            alphabetic: group,
            ideographic: None,
            phonetic: None,
        }
    }

    /// Retrieve a builder for a person name.
    pub fn builder() -> PersonNameBuilder<'a> {
        PersonNameBuilder::new()
    }
}

/// A builder to construct a [`PersonName`] from its alphabetic, ideographic
/// and phonetic representations.
#[derive(Debug, Default, Copy, Clone)]
pub struct PersonNameBuilder<'a> {
    name: PersonName<'a>,
}

impl<'a> PersonNameBuilder<'a> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabetic representation.
    pub fn with_alphabetic(mut self, group: PersonNameGroup<'a>) -> Self {
        self.name.alphabetic = group;
        self
    }

    /// Set the ideographic representation.
    pub fn with_ideographic(mut self, group: PersonNameGroup<'a>) -> Self {
        self.name.ideographic = Some(group);
        self
    }

    /// Set the phonetic representation.
    pub fn with_phonetic(mut self, group: PersonNameGroup<'a>) -> Self {
        self.name.phonetic = Some(group);
        self
    }

    /// Build the person name with the accumulated representations.
    pub fn build(&self) -> PersonName<'a> {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_to_dicom_string() {
        let g = PersonNameGroup::builder().with_given("John").with_family("Adams").build();
        assert_eq!(g.to_dicom_string(), "Adams^John");

        let g = PersonNameGroup::builder().with_prefix("Rev.").build();
        assert_eq!(g.to_dicom_string(), "^^^Rev.");

        let g = PersonNameGroup::builder()
            .with_family("Adams")
            .with_given("John")
            .with_middle("Robert")
            .with_prefix("Rev.")
            .with_suffix("B.A. M.Div.")
            .build();
        assert_eq!(g.to_dicom_string(), "Adams^John^Robert^Rev.^B.A. M.Div.");
    }

    #[test]
    fn group_to_string() {
        let g = PersonNameGroup::builder().with_given("John").with_family("Adams").build();
        assert_eq!(g.to_string(), "John Adams");
    }

    #[test]
    fn group_from_slice() {
        assert_eq!(
            PersonNameGroup::from_slice("Adams^John^Robert^Rev.^B.A. M.Div."),
            PersonNameGroup {
                family: Some("Adams"),
                given: Some("John"),
                middle: Some("Robert"),
                prefix: Some("Rev."),
                suffix: Some("B.A. M.Div."),
            }
        );
        assert_eq!(
            PersonNameGroup::from_slice("^^Robert"),
            PersonNameGroup {
                family: None,
                given: None,
                middle: Some("Robert"),
                prefix: None,
                suffix: None,
            }
        );
    }

    #[test]
    fn single_group_name_round_trips() {
        let name = PersonName::from_slice("DOE^INFANT");
        assert_eq!(name.alphabetic().family(), Some("DOE"));
        assert_eq!(name.alphabetic().given(), Some("INFANT"));
        assert!(name.ideographic().is_none());
        assert!(name.phonetic().is_none());
        assert_eq!(name.to_dicom_string(), "DOE^INFANT");
    }

    #[test]
    fn three_group_name_round_trips() {
        // Yamada Tarou with ideographic and phonetic representations.
        let raw = "Yamada^Tarou=山田^太郎=やまだ^たろう";
        let name = PersonName::from_slice(raw);
        assert_eq!(name.alphabetic().family(), Some("Yamada"));
        assert_eq!(name.alphabetic().given(), Some("Tarou"));
        assert_eq!(name.ideographic().unwrap().family(), Some("山田"));
        assert_eq!(name.ideographic().unwrap().given(), Some("太郎"));
        assert_eq!(name.phonetic().unwrap().family(), Some("やまだ"));
        assert_eq!(name.phonetic().unwrap().given(), Some("たろう"));
        assert_eq!(name.to_dicom_string(), raw);
    }

    #[test]
    fn trailing_empty_groups_are_omitted() {
        let name = PersonName::from_alphabetic(
            PersonNameGroup::builder().with_family("Adams").build(),
        );
        assert_eq!(name.to_dicom_string(), "Adams");
    }
}
