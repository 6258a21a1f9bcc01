//! Filter engine: derives a [`FilteredView`] from a record slice and [`FilterCriteria`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::validate_non_negative;
use crate::{CompanyRecord, RecordStore, ValidationError};

/// Inclusive market-cap bounds in billions of USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMarketCapRange")]
pub struct MarketCapRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawMarketCapRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawMarketCapRange> for MarketCapRange {
    type Error = ValidationError;

    fn try_from(raw: RawMarketCapRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl MarketCapRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        validate_non_negative("market_cap_range.min", min)?;
        validate_non_negative("market_cap_range.max", max)?;
        if min > max {
            return Err(ValidationError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Choices offered to the user, derived from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub exchanges: Vec<String>,
    pub market_cap_bounds: MarketCapRange,
}

impl FilterOptions {
    pub fn from_store(store: &RecordStore) -> Self {
        let (min, max) = store.market_cap_bounds().unwrap_or((0.0, 0.0));
        Self {
            countries: store.distinct_countries().into_iter().map(String::from).collect(),
            exchanges: store.distinct_exchanges().into_iter().map(String::from).collect(),
            market_cap_bounds: MarketCapRange { min, max },
        }
    }
}

/// Current filter selection. Has no identity beyond its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub countries: BTreeSet<String>,
    pub exchanges: BTreeSet<String>,
    pub market_cap_range: MarketCapRange,
}

impl FilterCriteria {
    pub fn new<C, E>(countries: C, exchanges: E, market_cap_range: MarketCapRange) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            exchanges: exchanges.into_iter().map(Into::into).collect(),
            market_cap_range,
        }
    }

    /// Everything selected over the full range: the dashboard's initial state.
    pub fn select_all(options: &FilterOptions) -> Self {
        Self::new(
            options.countries.iter().cloned(),
            options.exchanges.iter().cloned(),
            options.market_cap_bounds,
        )
    }

    pub fn with_countries<I>(mut self, countries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exchanges<I>(mut self, exchanges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_market_cap_range(mut self, range: MarketCapRange) -> Self {
        self.market_cap_range = range;
        self
    }

    pub fn matches(&self, record: &CompanyRecord) -> bool {
        self.countries.contains(record.country())
            && self.exchanges.contains(record.exchange.as_str())
            && self.market_cap_range.contains(record.market_cap_billions_usd)
    }
}

/// Ordered subsequence of a record slice that satisfies some criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    records: Vec<&'a CompanyRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn from_records(records: Vec<&'a CompanyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a CompanyRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CompanyRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stable filter: keeps every record matching `criteria`, in input order.
pub fn apply<'a>(records: &'a [CompanyRecord], criteria: &FilterCriteria) -> FilteredView<'a> {
    let view = FilteredView {
        records: records.iter().filter(|r| criteria.matches(r)).collect(),
    };
    debug!(input = records.len(), kept = view.len(), "filter applied");
    view
}
