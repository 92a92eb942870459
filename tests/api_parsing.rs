use geocmp_rs::models::{CountryRow, Entity, Entry, IndicatorRecord, Meta, Scope};

#[test]
fn parse_sample_observation_json() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":"2","total":2},
      [
        {
          "indicator":{"id":"NY.GDP.PCAP.CD","value":"GDP per capita (current US$)"},
          "country":{"id":"US","value":"United States"},
          "countryiso3code":"USA",
          "date":"2020",
          "value":63000,
          "unit":"",
          "obs_status":null,
          "decimal":0
        },
        {
          "indicator":{"id":"NY.GDP.PCAP.CD","value":"GDP per capita (current US$)"},
          "country":{"id":"CN","value":"China"},
          "countryiso3code":"CHN",
          "date":"2020",
          "value":10500,
          "unit":"",
          "obs_status":null,
          "decimal":0
        }
      ]
    ]
    "#;

    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let arr = v.as_array().unwrap();
    let meta: Meta = serde_json::from_value(arr[0].clone()).unwrap();
    assert_eq!(meta.page, 1);
    assert_eq!(meta.pages, 1);
    assert_eq!(meta.per_page, 2);
    assert_eq!(meta.total, 2);

    let entries: Vec<Entry> = serde_json::from_value(arr[1].clone()).unwrap();
    assert_eq!(entries.len(), 2);
    let records: Vec<IndicatorRecord> = entries.into_iter().map(IndicatorRecord::from).collect();
    assert_eq!(records[0].entity_code, "USA");
    assert_eq!(records[0].year, 2020);
    assert_eq!(records[0].value, Some(63_000.0));
    assert_eq!(records[1].entity_code, "CHN");
    assert_eq!(records[1].value, Some(10_500.0));
}

#[test]
fn null_value_maps_to_none() {
    let entry: Entry = serde_json::from_str(
        r#"
        {
          "indicator":{"id":"SE.PRM.NENR","value":"School enrollment, primary (% net)"},
          "country":{"id":"ET","value":"Ethiopia"},
          "countryiso3code":"ETH",
          "date":"2021",
          "value":null,
          "unit":"",
          "obs_status":null,
          "decimal":1
        }"#,
    )
    .unwrap();
    let r = IndicatorRecord::from(entry);
    assert_eq!(r.value, None);
    assert_eq!(r.entity_code, "ETH");
}

#[test]
fn aggregate_without_iso3_falls_back_to_short_id() {
    let entry: Entry = serde_json::from_str(
        r#"
        {
          "indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
          "country":{"id":"EU","value":"European Union"},
          "countryiso3code":"",
          "date":"2020",
          "value":447000000,
          "unit":"",
          "obs_status":null,
          "decimal":0
        }"#,
    )
    .unwrap();
    let r = IndicatorRecord::from(entry);
    assert_eq!(r.entity_code, "EU");
}

#[test]
fn country_rows_filter_aggregates() {
    let rows: Vec<CountryRow> = serde_json::from_str(
        r#"
        [
          {
            "id":"USA","iso2Code":"US","name":"United States",
            "capitalCity":"Washington D.C.",
            "region":{"id":"NAC","value":"North America"},
            "incomeLevel":{"id":"HIC","value":"High income"}
          },
          {
            "id":"EUU","iso2Code":"EU","name":"European Union",
            "capitalCity":"",
            "region":{"id":"NA","value":"Aggregates"},
            "incomeLevel":{"id":"NA","value":"Aggregates"}
          }
        ]"#,
    )
    .unwrap();
    let countries: Vec<Entity> = rows
        .into_iter()
        .filter(CountryRow::is_country)
        .map(Entity::from)
        .collect();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].code, "USA");
    assert_eq!(countries[0].scope, Scope::Countries);
}
