//! Countries of the top-songs markets.
//!
//! The dataset stores ISO 3166-1 alpha-2 codes, while the map plots alpha-3
//! codes. Full English names are accepted as well.

/// One market country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
}

const fn country(iso2: &'static str, iso3: &'static str, name: &'static str) -> Country {
    Country { iso2, iso3, name }
}

pub const COUNTRIES: &[Country] = &[
    country("AE", "ARE", "United Arab Emirates"),
    country("AR", "ARG", "Argentina"),
    country("AT", "AUT", "Austria"),
    country("AU", "AUS", "Australia"),
    country("BE", "BEL", "Belgium"),
    country("BG", "BGR", "Bulgaria"),
    country("BO", "BOL", "Bolivia"),
    country("BR", "BRA", "Brazil"),
    country("BY", "BLR", "Belarus"),
    country("CA", "CAN", "Canada"),
    country("CH", "CHE", "Switzerland"),
    country("CL", "CHL", "Chile"),
    country("CO", "COL", "Colombia"),
    country("CR", "CRI", "Costa Rica"),
    country("CZ", "CZE", "Czechia"),
    country("DE", "DEU", "Germany"),
    country("DK", "DNK", "Denmark"),
    country("DO", "DOM", "Dominican Republic"),
    country("EC", "ECU", "Ecuador"),
    country("EE", "EST", "Estonia"),
    country("EG", "EGY", "Egypt"),
    country("ES", "ESP", "Spain"),
    country("FI", "FIN", "Finland"),
    country("FR", "FRA", "France"),
    country("GB", "GBR", "United Kingdom"),
    country("GR", "GRC", "Greece"),
    country("GT", "GTM", "Guatemala"),
    country("HK", "HKG", "Hong Kong"),
    country("HN", "HND", "Honduras"),
    country("HU", "HUN", "Hungary"),
    country("ID", "IDN", "Indonesia"),
    country("IE", "IRL", "Ireland"),
    country("IL", "ISR", "Israel"),
    country("IN", "IND", "India"),
    country("IS", "ISL", "Iceland"),
    country("IT", "ITA", "Italy"),
    country("JP", "JPN", "Japan"),
    country("KR", "KOR", "South Korea"),
    country("KZ", "KAZ", "Kazakhstan"),
    country("LT", "LTU", "Lithuania"),
    country("LU", "LUX", "Luxembourg"),
    country("LV", "LVA", "Latvia"),
    country("MA", "MAR", "Morocco"),
    country("MX", "MEX", "Mexico"),
    country("MY", "MYS", "Malaysia"),
    country("NG", "NGA", "Nigeria"),
    country("NI", "NIC", "Nicaragua"),
    country("NL", "NLD", "Netherlands"),
    country("NO", "NOR", "Norway"),
    country("NZ", "NZL", "New Zealand"),
    country("PA", "PAN", "Panama"),
    country("PE", "PER", "Peru"),
    country("PH", "PHL", "Philippines"),
    country("PK", "PAK", "Pakistan"),
    country("PL", "POL", "Poland"),
    country("PT", "PRT", "Portugal"),
    country("PY", "PRY", "Paraguay"),
    country("RO", "ROU", "Romania"),
    country("SA", "SAU", "Saudi Arabia"),
    country("SE", "SWE", "Sweden"),
    country("SG", "SGP", "Singapore"),
    country("SK", "SVK", "Slovakia"),
    country("SV", "SLV", "El Salvador"),
    country("TH", "THA", "Thailand"),
    country("TR", "TUR", "Turkey"),
    country("TW", "TWN", "Taiwan"),
    country("UA", "UKR", "Ukraine"),
    country("US", "USA", "United States"),
    country("UY", "URY", "Uruguay"),
    country("VE", "VEN", "Venezuela"),
    country("VN", "VNM", "Vietnam"),
    country("ZA", "ZAF", "South Africa"),
];

impl Country {
    /// Finds a country by alpha-2 code, alpha-3 code or English name,
    /// ignoring case and surrounding whitespace.
    pub fn lookup(value: &str) -> Option<&'static Country> {
        let value = value.trim();
        COUNTRIES.iter().find(|c| {
            c.iso2.eq_ignore_ascii_case(value)
                || c.iso3.eq_ignore_ascii_case(value)
                || c.name.eq_ignore_ascii_case(value)
        })
    }
}
