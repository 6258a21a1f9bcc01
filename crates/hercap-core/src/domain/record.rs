use serde::{Deserialize, Serialize};

use crate::{Headquarters, UtcDateTime, ValidationError};

/// Earliest founding year accepted for a record.
pub const MIN_FOUNDED_YEAR: i32 = 1800;

/// One company's attribute set. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCompanyRecord")]
pub struct CompanyRecord {
    pub name: String,
    pub market_cap_billions_usd: f64,
    pub founded_year: i32,
    pub employee_count: u64,
    pub headquarters: Headquarters,
    /// Listing exchange; empty when the company is not on a tracked exchange.
    pub exchange: String,
}

#[derive(Deserialize)]
struct RawCompanyRecord {
    name: String,
    market_cap_billions_usd: f64,
    founded_year: i32,
    employee_count: u64,
    headquarters: String,
    exchange: String,
}

impl TryFrom<RawCompanyRecord> for CompanyRecord {
    type Error = ValidationError;

    fn try_from(raw: RawCompanyRecord) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.market_cap_billions_usd,
            raw.founded_year,
            raw.employee_count,
            &raw.headquarters,
            raw.exchange,
        )
    }
}

impl CompanyRecord {
    pub fn new(
        name: impl Into<String>,
        market_cap_billions_usd: f64,
        founded_year: i32,
        employee_count: u64,
        headquarters: &str,
        exchange: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        validate_non_negative("market_cap_billions_usd", market_cap_billions_usd)?;
        validate_founded_year(founded_year)?;

        Ok(Self {
            name,
            market_cap_billions_usd,
            founded_year,
            employee_count,
            headquarters: Headquarters::parse(headquarters)?,
            exchange: exchange.into(),
        })
    }

    pub fn country(&self) -> &str {
        self.headquarters.country()
    }

    pub fn is_listed(&self) -> bool {
        !self.exchange.is_empty()
    }
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

fn validate_founded_year(year: i32) -> Result<(), ValidationError> {
    let max = UtcDateTime::now().into_inner().year();
    if !(MIN_FOUNDED_YEAR..=max).contains(&year) {
        return Err(ValidationError::FoundedYearOutOfRange {
            year,
            min: MIN_FOUNDED_YEAR,
            max,
        });
    }
    Ok(())
}
