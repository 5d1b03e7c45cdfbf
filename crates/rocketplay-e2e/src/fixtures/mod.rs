//! Test fixtures: synthetic user records and static expected values.

mod generator;
mod test_data;

pub use generator::{BirthDate, Gender, RandomDataGenerator, UserData};
pub use test_data::{
    profile_birth_date, StaticAccount, CANADIAN_PROVINCES, EXPECTED_COUNTRY, EXPECTED_CURRENCY,
    EXPECTED_PROVINCE, STATIC_ACCOUNT,
};
