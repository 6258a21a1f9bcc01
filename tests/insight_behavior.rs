//! Behavior-driven tests for summary statistics and insight text
//!
//! These tests verify WHAT a user learns about a selection: the aggregates,
//! how ties resolve, and how an empty selection is reported.

use hercap_core::aggregate::{
    average_market_cap, largest_employer, median_founded_year, modal_exchange, newest_record,
    oldest_record, total_market_cap,
};
use hercap_core::{
    apply, summarize, EmptyViewError, FilterCriteria, FilterOptions, InsightPanel,
    MarketCapRange, RecordStore,
};

fn store() -> RecordStore {
    RecordStore::builtin().expect("builtin dataset is valid")
}

fn all_selected(store: &RecordStore) -> FilterCriteria {
    FilterCriteria::select_all(&FilterOptions::from_store(store))
}

// =============================================================================
// Insights: Full dataset
// =============================================================================

#[test]
fn full_selection_reports_the_known_extremes() {
    // Given: Every country and exchange over $0B to $1000B
    let store = store();
    let criteria = all_selected(&store)
        .with_market_cap_range(MarketCapRange::new(0.0, 1000.0).expect("range"));
    let view = apply(store.all_records(), &criteria);

    // When: The view is summarized
    let summary = summarize(&view).expect("non-empty view");

    // Then: The headline facts match the dataset
    assert_eq!(summary.record_count, 20);
    assert_eq!(summary.oldest.name, "Abbott Laboratories");
    assert_eq!(summary.oldest.founded_year, 1888);
    assert_eq!(summary.newest.name, "Organon & Co.");
    assert_eq!(summary.newest.founded_year, 2021);
    assert_eq!(summary.largest_employer.name, "Abbott Laboratories");
    assert_eq!(summary.largest_employer.employee_count, 113_000);
    assert_eq!(summary.modal_exchange, "NASDAQ");
    assert_eq!(
        view.iter().filter(|r| r.exchange == "NASDAQ").count(),
        9
    );
    assert_eq!(summary.distinct_country_count, 6);
    assert_eq!(summary.median_founded_year, 2001.0);
    assert!((summary.total_market_cap - 614.6712).abs() < 1e-9);
}

#[test]
fn full_selection_renders_formatted_metrics_and_findings() {
    let store = store();
    let view = apply(store.all_records(), &all_selected(&store));

    let InsightPanel::Ready {
        metrics,
        insights,
        findings,
        ..
    } = InsightPanel::from_view(&view)
    else {
        panic!("full view must summarize");
    };

    let values: Vec<_> = metrics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, ["$615B", "$30,734M", "2001.0", "20"]);
    assert_eq!(insights[3], "There are 20 companies from 6 countries.");
    assert_eq!(
        findings,
        [
            "Oldest Company: Abbott Laboratories (1888)",
            "Newest Company: Organon & Co. (2021)",
            "Largest Employer: Abbott Laboratories (113,000 employees)",
            "Most Common Exchange: NASDAQ",
        ]
    );
}

#[test]
fn sum_equals_count_times_average_for_every_non_empty_view() {
    let store = store();
    let options = FilterOptions::from_store(&store);

    for country in &options.countries {
        for exchange in &options.exchanges {
            let criteria = all_selected(&store)
                .with_countries([country.clone()])
                .with_exchanges([exchange.clone()]);
            let view = apply(store.all_records(), &criteria);
            if view.is_empty() {
                continue;
            }

            let average = average_market_cap(&view).expect("non-empty");
            let total = total_market_cap(&view);
            assert!((total - view.len() as f64 * average).abs() < 1e-9);
        }
    }
}

// =============================================================================
// Insights: Sub-selections and ties
// =============================================================================

#[test]
fn small_caps_have_their_own_oldest_newest_and_largest_employer() {
    // Given: Companies under $1B
    let store = store();
    let criteria =
        all_selected(&store).with_market_cap_range(MarketCapRange::new(0.0, 1.0).expect("range"));
    let view = apply(store.all_records(), &criteria);

    // When: The view is summarized
    let summary = summarize(&view).expect("non-empty view");

    // Then: Statistics reflect only the small caps
    assert_eq!(summary.record_count, 13);
    assert_eq!(summary.oldest.name, "Fuji Pharma Co. Ltd.");
    assert_eq!(summary.newest.name, "Pulsenmore Ltd.");
    assert_eq!(summary.largest_employer.name, "Fuji Pharma Co. Ltd.");
    assert_eq!(summary.modal_exchange, "NASDAQ");
    assert_eq!(summary.median_founded_year, 2003.0);
}

#[test]
fn tied_companies_resolve_to_the_first_in_dataset_order() {
    // Given: Daré and Femasys, both founded 2004 with 40 employees
    let store = store();
    let criteria = all_selected(&store)
        .with_exchanges(["NASDAQ"])
        .with_market_cap_range(MarketCapRange::new(0.18, 0.21).expect("range"));
    let view = apply(store.all_records(), &criteria);
    assert_eq!(view.len(), 2);

    // Then: Every extremum picks Daré, which comes first
    assert_eq!(oldest_record(&view).expect("oldest").name, "Daré Bioscience Inc.");
    assert_eq!(newest_record(&view).expect("newest").name, "Daré Bioscience Inc.");
    assert_eq!(
        largest_employer(&view).expect("largest").name,
        "Daré Bioscience Inc."
    );
    assert_eq!(median_founded_year(&view), Ok(2004.0));
}

#[test]
fn exchange_mode_tie_resolves_to_first_seen_value() {
    // Given: Japan (TYO) and Israel (TASE), one company each
    let store = store();
    let criteria = all_selected(&store).with_countries(["Japan", "Israel"]);
    let view = apply(store.all_records(), &criteria);

    // Then: TYO wins because Fuji Pharma precedes Pulsenmore
    assert_eq!(modal_exchange(&view), Ok("TYO"));
}

// =============================================================================
// Insights: Empty selection
// =============================================================================

#[test]
fn empty_country_selection_makes_every_aggregate_signal_absence() {
    // Given: No countries selected
    let store = store();
    let criteria = all_selected(&store).with_countries(Vec::<String>::new());
    let view = apply(store.all_records(), &criteria);
    assert!(view.is_empty());

    // Then: Each statistic reports EmptyViewError instead of a sentinel
    assert_eq!(average_market_cap(&view), Err(EmptyViewError));
    assert_eq!(median_founded_year(&view), Err(EmptyViewError));
    assert!(oldest_record(&view).is_err());
    assert!(newest_record(&view).is_err());
    assert!(largest_employer(&view).is_err());
    assert_eq!(modal_exchange(&view), Err(EmptyViewError));
    assert!(matches!(summarize(&view), Err(EmptyViewError)));

    // And: The presenter shows a neutral no-data state
    assert!(matches!(
        InsightPanel::from_view(&view),
        InsightPanel::NoData { .. }
    ));
}
