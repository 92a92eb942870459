use serde::{Deserialize, Serialize};

/// How to specify dates in API queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateSpec {
    /// Single year like 2020
    Year(i32),
    /// Inclusive range like 2000..=2020
    Range { start: i32, end: i32 },
}

impl DateSpec {
    pub fn to_query_param(&self) -> String {
        match *self {
            DateSpec::Year(y) => y.to_string(),
            DateSpec::Range { start, end } => format!("{}:{}", start, end),
        }
    }

    /// Parse "YYYY" or "YYYY:YYYY".
    pub fn parse(s: &str) -> Option<DateSpec> {
        match s.split_once(':') {
            None => s.trim().parse().ok().map(DateSpec::Year),
            Some((a, b)) => {
                let start = a.trim().parse().ok()?;
                let end = b.trim().parse().ok()?;
                Some(DateSpec::Range { start, end })
            }
        }
    }

    /// True unless this is a range with start after end.
    pub fn is_valid(&self) -> bool {
        match *self {
            DateSpec::Year(_) => true,
            DateSpec::Range { start, end } => start <= end,
        }
    }
}

/// Metadata section returned by the API (position 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl<'de> Visitor<'de> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as u32)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for u32"));
            }
            Ok(v as u32)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeName {
    pub id: String,
    pub value: String,
}

/// Raw observation from the data endpoint (position 1 array).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub indicator: CodeName,
    pub country: CodeName,
    pub countryiso3code: String,
    pub date: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    #[serde(rename = "obs_status")]
    pub obs_status: Option<String>,
    pub decimal: Option<i32>,
}

/// Tidy observation used by this crate (one row = one (entity, indicator, year)).
///
/// Immutable once parsed; `value` is `None` when the source reports no data
/// for that year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorRecord {
    pub indicator_id: String,
    pub indicator_name: String,
    pub entity_code: String,
    pub entity_name: String,
    pub year: i32,
    pub value: Option<f64>,
}

impl From<Entry> for IndicatorRecord {
    fn from(e: Entry) -> Self {
        let year = e.date.parse::<i32>().unwrap_or(0);
        // Aggregates sometimes ship an empty iso3; fall back to the short id.
        let entity_code = if e.countryiso3code.trim().is_empty() {
            e.country.id
        } else {
            e.countryiso3code
        };
        Self {
            indicator_id: e.indicator.id,
            indicator_name: e.indicator.value,
            entity_code,
            entity_name: e.country.value,
            year,
            value: e.value,
        }
    }
}

/// Scope a selectable entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    Countries,
    UsStates,
    IndiaStates,
    AustraliaStates,
    CanadaProvinces,
}

impl Scope {
    /// Country code the sub-national scopes roll up to.
    pub fn parent_country(&self) -> Option<&'static str> {
        match self {
            Scope::Countries => None,
            Scope::UsStates => Some("US"),
            Scope::IndiaStates => Some("IN"),
            Scope::AustraliaStates => Some("AU"),
            Scope::CanadaProvinces => Some("CA"),
        }
    }
}

/// A country or sub-national region. Loaded once at startup from the API or
/// the built-in fallback tables; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub code: String,
    pub name: String,
    pub scope: Scope,
}

impl Entity {
    pub fn new(code: &str, name: &str, scope: Scope) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            scope,
        }
    }
}

/// Raw row from the `/country` endpoint. Only the fields needed to tell
/// real countries from aggregates are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRow {
    pub id: String,
    #[serde(rename = "iso2Code")]
    pub iso2_code: String,
    pub name: String,
    #[serde(rename = "capitalCity")]
    pub capital_city: Option<String>,
    pub region: Option<CodeName>,
    #[serde(rename = "incomeLevel")]
    pub income_level: Option<CodeName>,
}

impl CountryRow {
    /// The `/country` endpoint mixes aggregates (regions, income groups) in
    /// with actual countries; aggregates have no capital city and carry
    /// "NA" region/income ids.
    pub fn is_country(&self) -> bool {
        let has_capital = self
            .capital_city
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());
        let region_ok = self.region.as_ref().is_some_and(|r| r.id != "NA");
        let income_ok = self.income_level.as_ref().is_some_and(|i| i.id != "NA");
        has_capital && region_ok && income_ok
    }
}

impl From<CountryRow> for Entity {
    fn from(row: CountryRow) -> Self {
        Entity {
            code: row.id,
            name: row.name,
            scope: Scope::Countries,
        }
    }
}

/// Grouping key used in stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub indicator_id: String,
    pub entity_code: String,
}
