use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const SEPARATOR: &str = ", ";

/// Headquarters location in `"<City/Region>, <Country>"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Headquarters {
    raw: String,
    split_at: usize,
}

impl Headquarters {
    /// Parse a location, requiring exactly one `", "` separator with text on both sides.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedHeadquarters {
            value: input.to_owned(),
        };

        if input.matches(SEPARATOR).count() != 1 {
            return Err(malformed());
        }

        let (region, country) = input.rsplit_once(SEPARATOR).ok_or_else(malformed)?;
        if region.trim().is_empty() || country.trim().is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            raw: input.to_owned(),
            split_at: region.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// City or region component, before the separator.
    pub fn region(&self) -> &str {
        &self.raw[..self.split_at]
    }

    /// Country component, after the separator.
    pub fn country(&self) -> &str {
        &self.raw[self.split_at + SEPARATOR.len()..]
    }
}

impl Display for Headquarters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Headquarters {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Headquarters {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Headquarters> for String {
    fn from(value: Headquarters) -> Self {
        value.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_region_and_country() {
        let hq = Headquarters::parse("British Columbia, CA").expect("must parse");
        assert_eq!(hq.region(), "British Columbia");
        assert_eq!(hq.country(), "CA");
    }

    #[test]
    fn keeps_non_ascii_components() {
        let hq = Headquarters::parse("Liège, Belgium").expect("must parse");
        assert_eq!(hq.region(), "Liège");
        assert_eq!(hq.country(), "Belgium");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = Headquarters::parse("Tokyo Japan").expect_err("must fail");
        assert!(matches!(err, ValidationError::MalformedHeadquarters { .. }));
    }

    #[test]
    fn rejects_second_separator() {
        let err = Headquarters::parse("Austin, Texas, USA").expect_err("must fail");
        assert!(matches!(err, ValidationError::MalformedHeadquarters { .. }));
    }

    #[test]
    fn rejects_empty_country() {
        assert!(Headquarters::parse("Omer, ").is_err());
    }
}
