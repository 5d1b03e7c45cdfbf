// Static expected values for the registration and profile scenarios.

use super::BirthDate;

/// A pre-existing account the login step uses, independent of the freshly
/// registered user.
#[derive(Debug, Clone, Copy)]
pub struct StaticAccount {
    pub email: &'static str,
    pub password: &'static str,
}

pub const STATIC_ACCOUNT: StaticAccount = StaticAccount {
    email: "max1794max@gmail.com",
    password: "123qwe!@#QWE",
};

/// Country the site must auto-detect for a Toronto-geolocated session
pub const EXPECTED_COUNTRY: &str = "Canada";
/// Currency the site must pre-select for that country
pub const EXPECTED_CURRENCY: &str = "CAD";
/// Province picked in the profile flow
pub const EXPECTED_PROVINCE: &str = "Ontario";

/// Birth date used when the profile flow fills the date inputs itself
pub fn profile_birth_date() -> BirthDate {
    BirthDate {
        day: "15".to_string(),
        month: "06".to_string(),
        year: "1990".to_string(),
    }
}

pub const CANADIAN_PROVINCES: &[&str] = &[
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Northwest Territories",
    "Nova Scotia",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];
