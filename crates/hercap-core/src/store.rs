//! Compiled-in company dataset.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::{CompanyRecord, MalformedRecordError, ValidationError};

/// Name of the built-in dataset, reported in envelope metadata.
pub const DATASET_NAME: &str = "womens-health-companies";

/// Unvalidated row as written in source.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord {
    pub name: &'static str,
    pub market_cap_billions_usd: f64,
    pub founded_year: i32,
    pub employee_count: u64,
    pub headquarters: &'static str,
    pub exchange: &'static str,
}

const fn raw(
    name: &'static str,
    market_cap_billions_usd: f64,
    founded_year: i32,
    employee_count: u64,
    headquarters: &'static str,
    exchange: &'static str,
) -> RawRecord {
    RawRecord {
        name,
        market_cap_billions_usd,
        founded_year,
        employee_count,
        headquarters,
        exchange,
    }
}

pub const BUILTIN_RECORDS: [RawRecord; 20] = [
    raw("AbbVie", 319.84, 2013, 50_000, "Illinois, USA", "NYSE"),
    raw("Abbott Laboratories", 207.08, 1888, 113_000, "Illinois, USA", "NYSE"),
    raw("Fuji Pharma Co. Ltd.", 0.2819, 1965, 1_600, "Tokyo, Japan", "TYO"),
    raw("Veru Inc.", 0.406, 1971, 190, "Florida, USA", "NASDAQ"),
    raw("Pulsenmore Ltd.", 0.175, 2014, 50, "Omer, Israel", "TASE"),
    raw("Daré Bioscience Inc.", 0.185, 2004, 40, "California, USA", "NASDAQ"),
    raw("Femasys Inc.", 0.203, 2004, 40, "Georgia, USA", "NASDAQ"),
    raw("Aspira Women's Health", 0.247, 1993, 100, "Texas, USA", "NASDAQ"),
    raw("Palatin Technologies Inc.", 0.275, 1986, 20, "New Jersey, USA", "NYSE"),
    raw("Mithra Pharmaceuticals", 0.289, 1999, 500, "Liège, Belgium", "EBR"),
    raw("The Cooper Companies", 20.3, 1958, 15_000, "California, USA", "NASDAQ"),
    raw("Hologic Inc.", 19.44, 1985, 6_940, "Massachusetts, USA", "NASDAQ"),
    raw("Creative Medical Technology", 0.302, 1998, 10, "Arizona, USA", "NASDAQ"),
    raw("Minerva Surgical", 0.357, 2008, 240, "California, USA", "NASDAQ"),
    raw("Organon & Co.", 40.1, 2021, 9_000, "New Jersey, USA", "NYSE"),
    raw("INVO Bioscience", 2.69, 2007, 20, "Florida, USA", ""),
    raw("Agile Therapeutics", 2.03, 1997, 20, "New Jersey, USA", "NASDAQ"),
    raw("Bonzun", 0.339, 2012, 50, "Stockholm, Sweden", "STO"),
    raw("Evofem Biosciences Inc.", 0.128, 2007, 40, "California, USA", "OTCMKTS"),
    raw("Callitas Therapeutics", 0.0033, 2003, 0, "British Columbia, CA", "OTCMKTS"),
];

/// Ordered, immutable sequence of validated company records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<CompanyRecord>,
}

impl RecordStore {
    /// Load the compiled-in dataset.
    ///
    /// # Errors
    /// Returns [`MalformedRecordError`] naming the first record that breaks an
    /// invariant. With the shipped dataset this indicates a programming error.
    pub fn builtin() -> Result<Self, MalformedRecordError> {
        Self::from_raw(&BUILTIN_RECORDS)
    }

    pub fn from_raw(rows: &[RawRecord]) -> Result<Self, MalformedRecordError> {
        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                CompanyRecord::new(
                    row.name,
                    row.market_cap_billions_usd,
                    row.founded_year,
                    row.employee_count,
                    row.headquarters,
                    row.exchange,
                )
                .map_err(|source| MalformedRecordError {
                    index,
                    name: row.name.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Build a store from already-validated records, enforcing unique names.
    pub fn from_records(records: Vec<CompanyRecord>) -> Result<Self, MalformedRecordError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(record.name.as_str()) {
                return Err(MalformedRecordError {
                    index,
                    name: record.name.clone(),
                    source: ValidationError::DuplicateName {
                        name: record.name.clone(),
                    },
                });
            }
        }

        debug!(records = records.len(), "record store loaded");
        Ok(Self { records })
    }

    pub fn all_records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn distinct_countries(&self) -> BTreeSet<&str> {
        self.records.iter().map(CompanyRecord::country).collect()
    }

    /// Exchanges in the store, including `""` for unlisted companies.
    pub fn distinct_exchanges(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.exchange.as_str()).collect()
    }

    /// Smallest and largest market cap, `None` for an empty store.
    pub fn market_cap_bounds(&self) -> Option<(f64, f64)> {
        let mut caps = self.records.iter().map(|r| r.market_cap_billions_usd);
        let first = caps.next()?;
        Some(caps.fold((first, first), |(lo, hi), cap| (lo.min(cap), hi.max(cap))))
    }
}
