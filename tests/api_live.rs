//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use geocmp_rs::api::IndicatorSource;
use geocmp_rs::{Client, DateSpec, Scope};

#[test]
fn fetch_small_range() {
    let cli = Client::default();
    let records = cli
        .fetch_indicators(
            &["DEU".into()],
            &["SP.POP.TOTL".into()],
            Some(DateSpec::Range {
                start: 2019,
                end: 2020,
            }),
        )
        .unwrap();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.entity_code == "DEU"));
    assert!(records.iter().all(|r| r.year >= 2019 && r.year <= 2020));
}

#[test]
fn fetch_two_indicators_merged() {
    let cli = Client::default();
    let records = cli
        .fetch_indicators(
            &["DEU".into()],
            &["SP.POP.TOTL".into(), "NY.GDP.MKTP.CD".into()],
            Some(DateSpec::Year(2020)),
        )
        .unwrap();
    assert!(records.iter().any(|r| r.indicator_id == "SP.POP.TOTL"));
    assert!(records.iter().any(|r| r.indicator_id == "NY.GDP.MKTP.CD"));
}

#[test]
fn country_list_excludes_aggregates() {
    let cli = Client::default();
    let countries = cli.list_countries().unwrap();
    assert!(countries.len() > 150);
    assert!(countries.iter().all(|c| c.scope == Scope::Countries));
    // Sorted by name and aggregate-free.
    assert!(!countries.iter().any(|c| c.name == "European Union"));
    assert!(countries.windows(2).all(|w| w[0].name <= w[1].name));
}
