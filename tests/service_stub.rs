use geocmp_rs::api::IndicatorSource;
use geocmp_rs::error::{FetchError, Result};
use geocmp_rs::models::{DateSpec, Entity, IndicatorRecord, Scope};
use geocmp_rs::service::{DataService, ServiceConfig};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stub source returning canned GDP-per-capita rows. Call counters are
/// shared so tests can inspect them after the service takes ownership.
#[derive(Default)]
struct StubSource {
    fetch_calls: Arc<AtomicUsize>,
    list_calls: Arc<AtomicUsize>,
    fail_all: bool,
}

fn gdp(entity_code: &str, entity_name: &str, value: f64) -> IndicatorRecord {
    IndicatorRecord {
        indicator_id: "NY.GDP.PCAP.CD".into(),
        indicator_name: "GDP per capita (current US$)".into(),
        entity_code: entity_code.into(),
        entity_name: entity_name.into(),
        year: 2020,
        value: Some(value),
    }
}

impl IndicatorSource for StubSource {
    fn fetch_indicators(
        &self,
        entities: &[String],
        _indicators: &[String],
        _date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(FetchError::DataUnavailable {
                entity: entities.join(";"),
                indicator: "NY.GDP.PCAP.CD".into(),
            });
        }
        let mut out = Vec::new();
        for e in entities {
            match e.as_str() {
                "USA" | "US" => out.push(gdp("USA", "United States", 63000.0)),
                "CHN" => out.push(gdp("CHN", "China", 10500.0)),
                _ => {}
            }
        }
        Ok(out)
    }

    fn list_countries(&self) -> Result<Vec<Entity>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(FetchError::Network("connection refused".into()));
        }
        Ok(vec![
            Entity::new("CHN", "China", Scope::Countries),
            Entity::new("USA", "United States", Scope::Countries),
        ])
    }
}

fn service(fail_all: bool) -> (DataService<StubSource>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let stub = StubSource {
        fail_all,
        ..Default::default()
    };
    let fetch_calls = stub.fetch_calls.clone();
    let list_calls = stub.list_calls.clone();
    (
        DataService::new(stub, ServiceConfig::default()),
        fetch_calls,
        list_calls,
    )
}

#[test]
fn fetch_two_entities_one_indicator_exact_rows() {
    let (svc, _, _) = service(false);
    let records = svc
        .fetch_indicators(
            &["USA".into(), "CHN".into()],
            &["NY.GDP.PCAP.CD".into()],
            Some(DateSpec::Range {
                start: 2020,
                end: 2020,
            }),
        )
        .unwrap();

    assert_eq!(records.len(), 2);
    let usa = records.iter().find(|r| r.entity_code == "USA").unwrap();
    let chn = records.iter().find(|r| r.entity_code == "CHN").unwrap();
    assert_eq!(usa.year, 2020);
    assert_eq!(usa.value, Some(63000.0));
    assert_eq!(chn.year, 2020);
    assert_eq!(chn.value, Some(10500.0));
}

#[test]
fn repeat_request_within_ttl_makes_no_source_calls() {
    let (svc, fetch_calls, _) = service(false);
    let date = Some(DateSpec::Range {
        start: 2020,
        end: 2020,
    });
    let first = svc
        .fetch_indicators(
            &["USA".into(), "CHN".into()],
            &["NY.GDP.PCAP.CD".into()],
            date,
        )
        .unwrap();
    // Same request with the entity order flipped: must hit the same key.
    let second = svc
        .fetch_indicators(
            &["CHN".into(), "USA".into()],
            &["NY.GDP.PCAP.CD".into()],
            date,
        )
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(fetch_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_entity_set_is_rejected_before_any_call() {
    let (svc, fetch_calls, _) = service(false);
    let res = svc.fetch_indicators(&[], &["NY.GDP.PCAP.CD".into()], None);
    assert!(matches!(res, Err(FetchError::InvalidRequest(_))));
    assert_eq!(fetch_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn country_list_is_cached() {
    let (svc, _, list_calls) = service(false);
    let first = svc.list_entities(Scope::Countries);
    let second = svc.list_entities(Scope::Countries);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(list_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn country_list_degrades_to_builtin_table() {
    let (svc, _, list_calls) = service(true);
    let list = svc.list_entities(Scope::Countries);
    assert!(list_calls.load(Ordering::SeqCst) >= 1);
    // Built-in table kicks in.
    assert!(list.len() >= 50);
    assert!(list.iter().any(|e| e.name == "United States"));
}

#[test]
fn sub_national_scopes_skip_the_source() {
    let (svc, _, list_calls) = service(false);
    let states = svc.list_entities(Scope::UsStates);
    assert_eq!(states.len(), 50);
    assert_eq!(list_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn latest_values_reduce_to_one_row_per_pair() {
    let (svc, _, _) = service(false);
    let latest = svc
        .latest_values(
            &["USA".into(), "CHN".into()],
            &["NY.GDP.PCAP.CD".into()],
            None,
        )
        .unwrap();
    assert_eq!(latest.len(), 2);
}

#[test]
fn state_estimates_scale_parent_country() {
    let (svc, _, _) = service(false);
    let ny = Entity::new("NY", "New York", Scope::UsStates);
    let est = svc
        .fetch_state_estimates(&ny, &["NY.GDP.PCAP.CD".into()], None)
        .unwrap();
    assert_eq!(est.len(), 1);
    assert_eq!(est[0].entity_code, "NY");
    // 63000 * 1.35 for a GDP indicator in New York.
    assert!((est[0].value.unwrap() - 85050.0).abs() < 1e-6);
}

#[test]
fn state_estimates_reject_country_entities() {
    let (svc, _, _) = service(false);
    let usa = Entity::new("USA", "United States", Scope::Countries);
    let res = svc.fetch_state_estimates(&usa, &["NY.GDP.PCAP.CD".into()], None);
    assert!(matches!(res, Err(FetchError::InvalidRequest(_))));
}
