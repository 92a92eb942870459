//! Built-in entity tables, served when the network is unreachable and for
//! sub-national scopes the upstream API does not cover. Pure data; no I/O.

use crate::models::{Entity, Scope};

/// Major economies with their ISO2 codes, used when `/country` cannot be
/// reached.
const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CN", "China"),
    ("JP", "Japan"),
    ("DE", "Germany"),
    ("IN", "India"),
    ("GB", "United Kingdom"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("RU", "Russia"),
    ("KR", "South Korea"),
    ("AU", "Australia"),
    ("ES", "Spain"),
    ("MX", "Mexico"),
    ("ID", "Indonesia"),
    ("NL", "Netherlands"),
    ("SA", "Saudi Arabia"),
    ("TR", "Turkey"),
    ("BE", "Belgium"),
    ("AR", "Argentina"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("AT", "Austria"),
    ("NG", "Nigeria"),
    ("NO", "Norway"),
    ("EG", "Egypt"),
    ("ZA", "South Africa"),
    ("PL", "Poland"),
    ("TH", "Thailand"),
    ("CL", "Chile"),
    ("FI", "Finland"),
    ("RO", "Romania"),
    ("CZ", "Czech Republic"),
    ("NZ", "New Zealand"),
    ("VN", "Vietnam"),
    ("PE", "Peru"),
    ("GR", "Greece"),
    ("PT", "Portugal"),
    ("DK", "Denmark"),
    ("SG", "Singapore"),
    ("MY", "Malaysia"),
    ("PH", "Philippines"),
    ("BD", "Bangladesh"),
    ("UA", "Ukraine"),
    ("MA", "Morocco"),
    ("KE", "Kenya"),
    ("ET", "Ethiopia"),
    ("GH", "Ghana"),
    ("AO", "Angola"),
    ("TZ", "Tanzania"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
];

const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

const INDIA_STATES: &[(&str, &str)] = &[
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CT", "Chhattisgarh"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HR", "Haryana"),
    ("HP", "Himachal Pradesh"),
    ("JH", "Jharkhand"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("MP", "Madhya Pradesh"),
    ("MH", "Maharashtra"),
    ("MN", "Manipur"),
    ("ML", "Meghalaya"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OR", "Odisha"),
    ("PB", "Punjab"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TN", "Tamil Nadu"),
    ("TG", "Telangana"),
    ("TR", "Tripura"),
    ("UP", "Uttar Pradesh"),
    ("UT", "Uttarakhand"),
    ("WB", "West Bengal"),
];

const AUSTRALIA_STATES: &[(&str, &str)] = &[
    ("NSW", "New South Wales"),
    ("VIC", "Victoria"),
    ("QLD", "Queensland"),
    ("WA", "Western Australia"),
    ("SA", "South Australia"),
    ("TAS", "Tasmania"),
    ("NT", "Northern Territory"),
    ("ACT", "Australian Capital Territory"),
];

const CANADA_PROVINCES: &[(&str, &str)] = &[
    ("AB", "Alberta"),
    ("BC", "British Columbia"),
    ("MB", "Manitoba"),
    ("NB", "New Brunswick"),
    ("NL", "Newfoundland and Labrador"),
    ("NT", "Northwest Territories"),
    ("NS", "Nova Scotia"),
    ("NU", "Nunavut"),
    ("ON", "Ontario"),
    ("PE", "Prince Edward Island"),
    ("QC", "Quebec"),
    ("SK", "Saskatchewan"),
    ("YT", "Yukon"),
];

fn table(scope: Scope) -> &'static [(&'static str, &'static str)] {
    match scope {
        Scope::Countries => COUNTRIES,
        Scope::UsStates => US_STATES,
        Scope::IndiaStates => INDIA_STATES,
        Scope::AustraliaStates => AUSTRALIA_STATES,
        Scope::CanadaProvinces => CANADA_PROVINCES,
    }
}

/// Entities for a scope, sorted by display name. Always succeeds.
pub fn list_entities(scope: Scope) -> Vec<Entity> {
    let mut out: Vec<Entity> = table(scope)
        .iter()
        .map(|(code, name)| Entity::new(code, name, scope))
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// Case-insensitive lookup by display name within a scope.
pub fn find_by_name(scope: Scope, name: &str) -> Option<Entity> {
    table(scope)
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(code, n)| Entity::new(code, n, scope))
}
