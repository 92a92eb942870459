use geocmp_rs::models::{DateSpec, Entry, IndicatorRecord, Meta, Scope};

#[test]
fn meta_per_page_accepts_string_or_number() {
    // per_page as string
    let m: Meta =
        serde_json::from_str(r#"{"page":1,"pages":2,"per_page":"1000","total":2000}"#).unwrap();
    assert_eq!(m.per_page, 1000);
    // per_page as number
    let m: Meta =
        serde_json::from_str(r#"{"page":1,"pages":2,"per_page":500,"total":2000}"#).unwrap();
    assert_eq!(m.per_page, 500);
}

#[test]
fn record_from_entry_parses_year_and_names() {
    let e: Entry = serde_json::from_str(
        r#"
    {
      "indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
      "country":{"id":"DE","value":"Germany"},
      "countryiso3code":"DEU",
      "date":"2020",
      "value":83100000,
      "unit":"",
      "obs_status":null,
      "decimal":0
    }"#,
    )
    .unwrap();
    let r = IndicatorRecord::from(e);
    assert_eq!(r.year, 2020);
    assert_eq!(r.indicator_id, "SP.POP.TOTL");
    assert_eq!(r.indicator_name, "Population, total");
    assert_eq!(r.entity_code, "DEU");
    assert_eq!(r.entity_name, "Germany");
    assert_eq!(r.value, Some(83_100_000.0));
}

#[test]
fn date_spec_query_params() {
    assert_eq!(DateSpec::Year(2020).to_query_param(), "2020");
    assert_eq!(
        DateSpec::Range {
            start: 2015,
            end: 2020
        }
        .to_query_param(),
        "2015:2020"
    );
}

#[test]
fn date_spec_parse_and_validate() {
    assert_eq!(DateSpec::parse("2020"), Some(DateSpec::Year(2020)));
    assert_eq!(
        DateSpec::parse("2015:2020"),
        Some(DateSpec::Range {
            start: 2015,
            end: 2020
        })
    );
    assert_eq!(DateSpec::parse("not-a-year"), None);
    assert!(DateSpec::Year(2020).is_valid());
    assert!(
        !DateSpec::Range {
            start: 2021,
            end: 2019
        }
        .is_valid()
    );
}

#[test]
fn scope_parents() {
    assert_eq!(Scope::Countries.parent_country(), None);
    assert_eq!(Scope::UsStates.parent_country(), Some("US"));
    assert_eq!(Scope::IndiaStates.parent_country(), Some("IN"));
    assert_eq!(Scope::CanadaProvinces.parent_country(), Some("CA"));
}
