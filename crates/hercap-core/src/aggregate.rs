//! Summary statistics over a [`FilteredView`].
//!
//! Every extremum, mode and average fails with [`EmptyViewError`] on an empty
//! view. Ties resolve to the first qualifying record in view order.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::{CompanyRecord, EmptyViewError, FilteredView};

/// Read-only snapshot of aggregates for one non-empty view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSummary<'a> {
    pub record_count: usize,
    pub total_market_cap: f64,
    pub average_market_cap: f64,
    pub median_founded_year: f64,
    pub distinct_country_count: usize,
    pub oldest: &'a CompanyRecord,
    pub newest: &'a CompanyRecord,
    pub largest_employer: &'a CompanyRecord,
    pub modal_exchange: &'a str,
}

pub fn summarize<'a>(view: &FilteredView<'a>) -> Result<InsightSummary<'a>, EmptyViewError> {
    let summary = InsightSummary {
        record_count: view.len(),
        total_market_cap: total_market_cap(view),
        average_market_cap: average_market_cap(view)?,
        median_founded_year: median_founded_year(view)?,
        distinct_country_count: distinct_country_count(view),
        oldest: oldest_record(view)?,
        newest: newest_record(view)?,
        largest_employer: largest_employer(view)?,
        modal_exchange: modal_exchange(view)?,
    };
    debug!(records = summary.record_count, "view summarized");
    Ok(summary)
}

/// Sum of market caps; `0.0` for an empty view.
pub fn total_market_cap(view: &FilteredView<'_>) -> f64 {
    view.iter().map(|r| r.market_cap_billions_usd).sum()
}

pub fn average_market_cap(view: &FilteredView<'_>) -> Result<f64, EmptyViewError> {
    if view.is_empty() {
        return Err(EmptyViewError);
    }
    Ok(total_market_cap(view) / view.len() as f64)
}

/// Median founding year; the mean of the two middle years for even counts.
pub fn median_founded_year(view: &FilteredView<'_>) -> Result<f64, EmptyViewError> {
    let mut years: Vec<i32> = view.iter().map(|r| r.founded_year).collect();
    if years.is_empty() {
        return Err(EmptyViewError);
    }
    years.sort_unstable();

    let mid = years.len() / 2;
    let median = if years.len() % 2 == 0 {
        (f64::from(years[mid - 1]) + f64::from(years[mid])) / 2.0
    } else {
        f64::from(years[mid])
    };
    Ok(median)
}

pub fn distinct_country_count(view: &FilteredView<'_>) -> usize {
    view.iter().map(CompanyRecord::country).collect::<BTreeSet<_>>().len()
}

pub fn oldest_record<'a>(view: &FilteredView<'a>) -> Result<&'a CompanyRecord, EmptyViewError> {
    first_extreme(view, |r| r.founded_year, |candidate: i32, best: i32| candidate < best)
}

pub fn newest_record<'a>(view: &FilteredView<'a>) -> Result<&'a CompanyRecord, EmptyViewError> {
    first_extreme(view, |r| r.founded_year, |candidate: i32, best: i32| candidate > best)
}

pub fn largest_employer<'a>(
    view: &FilteredView<'a>,
) -> Result<&'a CompanyRecord, EmptyViewError> {
    first_extreme(view, |r| r.employee_count, |candidate: u64, best: u64| {
        candidate > best
    })
}

/// Most frequent exchange; ties go to the value that appeared first.
pub fn modal_exchange<'a>(view: &FilteredView<'a>) -> Result<&'a str, EmptyViewError> {
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for record in view.iter() {
        let exchange = record.exchange.as_str();
        let count = counts.entry(exchange).or_insert(0);
        if *count == 0 {
            order.push(exchange);
        }
        *count += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for exchange in order {
        let count = counts[exchange];
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((exchange, count));
        }
    }
    best.map(|(exchange, _)| exchange).ok_or(EmptyViewError)
}

/// Only a strictly better key replaces the current pick, so the first wins ties.
fn first_extreme<'a, K, F, B>(
    view: &FilteredView<'a>,
    key: F,
    better: B,
) -> Result<&'a CompanyRecord, EmptyViewError>
where
    K: Copy,
    F: Fn(&CompanyRecord) -> K,
    B: Fn(K, K) -> bool,
{
    let mut records = view.iter();
    let mut best = records.next().ok_or(EmptyViewError)?;
    for record in records {
        if better(key(record), key(best)) {
            best = record;
        }
    }
    Ok(best)
}
