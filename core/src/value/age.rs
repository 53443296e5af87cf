//! Handling of DICOM values with the AS (age string) value representation.
use crate::error::InvalidValueReadError;
use std::fmt::{Display, Formatter};

/// The unit a DICOM age value is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AgeUnit {
    /// Days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
}

impl AgeUnit {
    fn from_code(c: u8) -> Option<Self> {
        match c {
            b'D' => Some(AgeUnit::Days),
            b'W' => Some(AgeUnit::Weeks),
            b'M' => Some(AgeUnit::Months),
            b'Y' => Some(AgeUnit::Years),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            AgeUnit::Days => b'D',
            AgeUnit::Weeks => b'W',
            AgeUnit::Months => b'M',
            AgeUnit::Years => b'Y',
        }
    }

    /// An approximate number of days in this unit, used to compare or
    /// order age values expressed in different units.
    pub fn approx_days(self) -> u32 {
        match self {
            AgeUnit::Days => 1,
            AgeUnit::Weeks => 7,
            AgeUnit::Months => 30,
            AgeUnit::Years => 365,
        }
    }
}

/// A DICOM _Age_ (AS value representation), holding a 3-digit value and
/// one of the units `D`, `W`, `M`, `Y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Age {
    /// The numeric component, in the range 0..=999.
    pub value: u16,
    /// The unit the value is expressed in.
    pub unit: AgeUnit,
}

impl Age {
    /// Construct an age value.
    pub fn new(value: u16, unit: AgeUnit) -> Self {
        Age { value, unit }
    }

    /// An approximate age in days, for ordering/comparison purposes only.
    pub fn approx_days(&self) -> u32 {
        self.value as u32 * self.unit.approx_days()
    }

    /// Parse an age value out of its DICOM textual form (`nnnD`, `nnnW`,
    /// `nnnM` or `nnnY`).
    pub fn from_dicom_str(s: &str) -> Result<Age, InvalidValueReadError> {
        let s = s.trim();
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(InvalidValueReadError::InvalidLength {
                got: bytes.len(),
                expected: "4 characters: 3 digits and a unit",
            });
        }
        let unit = AgeUnit::from_code(bytes[3]).ok_or(InvalidValueReadError::InvalidToken {
            got: bytes[3],
            expected: "'D', 'W', 'M' or 'Y'",
        })?;
        let value: u16 = s[0..3]
            .parse()
            .map_err(|_| InvalidValueReadError::InvalidToken {
                got: bytes[0],
                expected: "digit in '0'..='9'",
            })?;
        Ok(Age { value, unit })
    }

    /// Render the age value into its DICOM textual form (e.g. `"032Y"`).
    pub fn to_dicom_string(&self) -> String {
        format!("{:03}{}", self.value, self.unit.code() as char)
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dicom_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_years() {
        let age = Age::from_dicom_str("032Y").unwrap();
        assert_eq!(age, Age::new(32, AgeUnit::Years));
        assert_eq!(age.to_dicom_string(), "032Y");
    }

    #[test]
    fn parses_days() {
        let age = Age::from_dicom_str("007D").unwrap();
        assert_eq!(age, Age::new(7, AgeUnit::Days));
    }

    #[test]
    fn rejects_bad_unit() {
        assert!(Age::from_dicom_str("032X").is_err());
    }

    #[test]
    fn rejects_bad_length() {
        assert!(Age::from_dicom_str("32Y").is_err());
    }

    #[test]
    fn approx_days_orders_across_units() {
        let a = Age::new(2, AgeUnit::Years);
        let b = Age::new(18, AgeUnit::Months);
        assert!(a.approx_days() > b.approx_days());
    }
}
