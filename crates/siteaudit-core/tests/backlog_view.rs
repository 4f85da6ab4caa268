//! Integration test: the report screen flow end to end.
//!
//! Validates a typed site address, builds the backlog view from the demo
//! fixture, and checks which export buttons a role/plan pair gets.

use siteaudit_core::capability::{gate, CapabilityTable, Feature, Plan, Role};
use siteaudit_core::config::AppConfig;
use siteaudit_core::fixtures;
use siteaudit_core::issues::{
    filter_issues, sort_issues, CategoryFilter, Category, FilterState, Priority, PriorityCounts,
    SortKey,
};
use siteaudit_core::url_model;

#[test]
fn p0_p1_filter_then_impact_sort() {
    let fixture = fixtures::demo_issues();
    let counts = PriorityCounts::from_issues(&fixture);
    assert_eq!((counts.p0, counts.p1, counts.p2, counts.p3), (2, 2, 2, 1));

    let state = FilterState {
        priorities: [Priority::P0, Priority::P1].into_iter().collect(),
        category: CategoryFilter::All,
        query: String::new(),
        ..FilterState::default()
    };
    let kept = filter_issues(&fixture, &state);
    assert_eq!(kept.len(), 4);
    assert!(kept
        .iter()
        .all(|i| matches!(i.priority, Priority::P0 | Priority::P1)));

    let sorted = sort_issues(kept, SortKey::Impact);
    let impacts: Vec<u8> = sorted.iter().map(|i| i.impact).collect();
    assert_eq!(impacts, [10, 9, 7, 6]);
}

#[test]
fn filter_state_view_combines_filter_and_sort() {
    let fixture = fixtures::demo_issues();
    let mut state = FilterState {
        category: CategoryFilter::Only(Category::Content),
        sort: SortKey::Impact,
        ..FilterState::default()
    };
    let ids: Vec<&str> = state.view(&fixture).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["2", "4"]);

    state.toggle_priority(Priority::P1);
    let ids: Vec<&str> = state.view(&fixture).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["4"]);

    state.reset();
    assert_eq!(state.view(&fixture).len(), fixture.len());
}

#[test]
fn source_collection_is_untouched() {
    let fixture = fixtures::demo_issues();
    let before = fixture.clone();
    let state = FilterState {
        sort: SortKey::Category,
        ..FilterState::default()
    };
    let _ = state.view(&fixture);
    assert_eq!(fixture, before);
}

#[test]
fn landing_form_accepts_short_and_idn_addresses() {
    for raw in ["ya.ru", "https://example.com", "8.8.8.8", "пример.рф"] {
        assert!(url_model::validate(raw), "{raw} should be valid");
    }
    for raw in ["not_a_url", "", "ya."] {
        assert!(!url_model::validate(raw), "{raw:?} should be invalid");
    }

    let checked = url_model::check("пример.рф");
    assert!(checked.canonical.contains("xn--"));
    assert_eq!(
        url_model::canonicalize(&checked.canonical),
        checked.canonical
    );
}

#[test]
fn export_buttons_follow_plan_and_config() {
    assert!(gate(Feature::ExportCsv, Role::Agency, Plan::Agency));
    assert!(!gate(Feature::ExportCsv, Role::Owner, Plan::Pro));

    let mut cfg = AppConfig::default();
    cfg.features.export_pdf = false;
    let table = CapabilityTable::with_flags(&cfg.features);
    assert!(!table.allows(Feature::ExportPdf, Role::Owner, Plan::Pro));
    assert!(table.allows(Feature::ExportCsv, Role::Owner, Plan::Agency));
}
