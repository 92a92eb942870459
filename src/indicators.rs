//! Curated indicator catalog: display name, World Bank code, and a short
//! description where one exists. Lookup helpers map either direction.

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDef {
    pub code: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

const CATALOG: &[IndicatorDef] = &[
    IndicatorDef {
        code: "NY.GDP.PCAP.CD",
        name: "GDP per capita (current US$)",
        description: Some(
            "Gross domestic product divided by midyear population, in current US dollars",
        ),
    },
    IndicatorDef {
        code: "NY.GDP.MKTP.KD.ZG",
        name: "GDP growth (annual %)",
        description: Some("Annual percentage growth rate of GDP at market prices"),
    },
    IndicatorDef {
        code: "SP.POP.TOTL",
        name: "Population, total",
        description: Some("Total population based on the de facto definition"),
    },
    IndicatorDef {
        code: "SP.POP.GROW",
        name: "Population growth (annual %)",
        description: Some("Annual population growth rate for year t"),
    },
    IndicatorDef {
        code: "SP.DYN.LE00.IN",
        name: "Life expectancy at birth, total (years)",
        description: Some(
            "Number of years a newborn infant would live if prevailing patterns of mortality continue",
        ),
    },
    IndicatorDef {
        code: "FP.CPI.TOTL.ZG",
        name: "Inflation, consumer prices (annual %)",
        description: Some("Annual percentage change in consumer price index"),
    },
    IndicatorDef {
        code: "SL.UEM.TOTL.ZS",
        name: "Unemployment, total (% of total labor force)",
        description: Some(
            "Share of the labor force that is without work but available and seeking employment",
        ),
    },
    IndicatorDef {
        code: "SE.PRM.NENR",
        name: "School enrollment, primary (% net)",
        description: Some("Net enrollment rate in primary education"),
    },
    IndicatorDef {
        code: "SH.XPD.CHEX.GD.ZS",
        name: "Health expenditure, total (% of GDP)",
        description: Some("Current health expenditure as percentage of GDP"),
    },
    IndicatorDef {
        code: "SP.URB.TOTL.IN.ZS",
        name: "Urban population (% of total population)",
        description: Some("People living in urban areas as percentage of total population"),
    },
    IndicatorDef {
        code: "EN.ATM.CO2E.PC",
        name: "CO2 emissions (metric tons per capita)",
        description: Some("Carbon dioxide emissions per capita"),
    },
    IndicatorDef {
        code: "IT.NET.USER.ZS",
        name: "Internet users (per 100 people)",
        description: Some("Individuals who have used the Internet in the last 3 months"),
    },
    IndicatorDef {
        code: "NE.TRD.GNFS.ZS",
        name: "Trade (% of GDP)",
        description: None,
    },
    IndicatorDef {
        code: "SE.XPD.TOTL.GD.ZS",
        name: "Government expenditure on education, total (% of GDP)",
        description: None,
    },
    IndicatorDef {
        code: "MS.MIL.XPND.GD.ZS",
        name: "Military expenditure (% of GDP)",
        description: None,
    },
    IndicatorDef {
        code: "SE.ADT.LITR.ZS",
        name: "Literacy rate, adult total (% of people ages 15 and above)",
        description: None,
    },
    IndicatorDef {
        code: "SP.DYN.IMRT.IN",
        name: "Mortality rate, infant (per 1,000 live births)",
        description: None,
    },
    IndicatorDef {
        code: "SH.MED.BEDS.ZS",
        name: "Hospital beds (per 1,000 people)",
        description: None,
    },
    IndicatorDef {
        code: "GB.XPD.RSDV.GD.ZS",
        name: "Research and development expenditure (% of GDP)",
        description: None,
    },
    IndicatorDef {
        code: "IP.JRN.ARTC.SC",
        name: "Scientific and technical journal articles",
        description: None,
    },
    IndicatorDef {
        code: "SP.POP.DPND",
        name: "Age dependency ratio (% of working-age population)",
        description: None,
    },
];

/// The full curated catalog, in presentation order.
pub fn catalog() -> &'static [IndicatorDef] {
    CATALOG
}

/// World Bank code for a display name (exact match, whitespace-trimmed).
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CATALOG.iter().find(|d| d.name == name).map(|d| d.code)
}

/// Catalog entry for a World Bank code.
pub fn by_code(code: &str) -> Option<&'static IndicatorDef> {
    let code = code.trim();
    CATALOG.iter().find(|d| d.code == code)
}

/// Short description for a display name, when the catalog has one.
pub fn describe(name: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|d| d.name == name.trim())
        .and_then(|d| d.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = CATALOG.iter().map(|d| d.code).collect();
        codes.sort();
        let n = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), n);
    }

    #[test]
    fn lookups_round_trip() {
        assert_eq!(
            code_for_name("GDP per capita (current US$)"),
            Some("NY.GDP.PCAP.CD")
        );
        let def = by_code("SP.POP.TOTL").unwrap();
        assert_eq!(def.name, "Population, total");
        assert!(describe("Population, total").is_some());
        assert!(code_for_name("nope").is_none());
    }
}
