//! Behavior-driven tests for dashboard user journeys
//!
//! These tests walk through what a user does with the dashboard: start with
//! everything selected, narrow the selection, and read each tab.

use hercap_core::{Dashboard, InsightPanel, MarketCapRange, DASHBOARD_TITLE, NO_DATA_MESSAGE};

// =============================================================================
// Journey: First load
// =============================================================================

#[test]
fn user_opening_the_dashboard_sees_every_company() {
    // Given: A freshly loaded dashboard
    let dashboard = Dashboard::builtin().expect("dashboard");
    assert_eq!(DASHBOARD_TITLE, "Women's Health Companies");

    // When: The default selection is rendered
    let snapshot = dashboard.refresh(&dashboard.default_criteria());

    // Then: All twenty companies feed every tab
    assert_eq!(snapshot.view.len(), 20);
    assert_eq!(snapshot.table.len(), 20);
    assert_eq!(snapshot.bar_chart.points.len(), 20);
    assert_eq!(snapshot.scatter_chart.points.len(), 20);
    assert!(snapshot.warnings.is_empty());

    // And: The slider defaults span the smallest and largest market cap
    let bounds = dashboard.options().market_cap_bounds;
    assert_eq!((bounds.min(), bounds.max()), (0.0033, 319.84));
}

#[test]
fn charts_receive_correctly_shaped_series() {
    let dashboard = Dashboard::builtin().expect("dashboard");
    let snapshot = dashboard.refresh(&dashboard.default_criteria());

    // Bar series ascends by market cap
    let bar = &snapshot.bar_chart;
    assert_eq!(bar.title, "Companies by Market Cap");
    assert!(bar
        .points
        .windows(2)
        .all(|pair| pair[0].market_cap_billions_usd <= pair[1].market_cap_billions_usd));
    assert_eq!(bar.points.last().map(|p| p.company.as_str()), Some("AbbVie"));

    // Scatter series keeps dataset order with employees as the size channel
    let scatter = &snapshot.scatter_chart;
    assert_eq!(scatter.title, "Founded Year vs Market Cap");
    assert_eq!(scatter.size_field, "Employees");
    assert_eq!(scatter.points[1].company, "Abbott Laboratories");
    assert_eq!(scatter.points[1].founded_year, 1888);
    assert_eq!(scatter.points[1].employee_count, 113_000);
}

// =============================================================================
// Journey: Narrowing the selection
// =============================================================================

#[test]
fn user_narrowing_to_us_large_caps_gets_matching_insights() {
    // Given: US companies above $10B
    let dashboard = Dashboard::builtin().expect("dashboard");
    let criteria = dashboard
        .default_criteria()
        .with_countries(["USA"])
        .with_market_cap_range(MarketCapRange::new(10.0, 319.84).expect("range"));

    // When: The dashboard recomputes
    let snapshot = dashboard.refresh(&criteria);

    // Then: Only the five large US companies remain
    let summary = snapshot.panel.summary().expect("non-empty view");
    assert_eq!(summary.record_count, 5);
    assert_eq!(summary.distinct_country_count, 1);
    assert_eq!(summary.oldest.name, "Abbott Laboratories");
    assert_eq!(summary.newest.name, "Organon & Co.");
    assert_eq!(summary.modal_exchange, "NYSE");
}

#[test]
fn user_clearing_every_exchange_sees_a_no_data_state_not_a_crash() {
    // Given: The exchange multi-select emptied
    let dashboard = Dashboard::builtin().expect("dashboard");
    let criteria = dashboard
        .default_criteria()
        .with_exchanges(Vec::<String>::new());

    // When: The dashboard recomputes
    let snapshot = dashboard.refresh(&criteria);

    // Then: The insight panel is neutral and the export is header-only
    assert_eq!(
        snapshot.panel,
        InsightPanel::NoData {
            message: NO_DATA_MESSAGE
        }
    );
    assert!(snapshot.table.is_empty());
    assert!(snapshot.bar_chart.points.is_empty());
    assert_eq!(snapshot.export_csv().expect("export").lines().count(), 1);
    assert_eq!(
        snapshot.warnings,
        ["no companies match the current filters"]
    );
}

#[test]
fn snapshot_serializes_for_machine_consumers() {
    let dashboard = Dashboard::builtin().expect("dashboard");
    let criteria = dashboard.default_criteria().with_countries(["Sweden"]);
    let snapshot = dashboard.refresh(&criteria);

    let json = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(json["panel"]["status"], "ready");
    assert_eq!(json["view"][0]["name"], "Bonzun");
    assert_eq!(json["view"][0]["headquarters"], "Stockholm, Sweden");
    assert_eq!(json["panel"]["summary"]["modal_exchange"], "STO");
}
