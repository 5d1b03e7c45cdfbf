// Random user data for test isolation.
//
// Every run registers with a freshly generated record so reruns never collide
// on an already-taken email. Records are immutable once created and discarded
// at process exit.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use rand::{distributions::Alphanumeric, Rng};

/// Minimum age the site accepts at registration
pub const MIN_AGE: u32 = 19;
/// Upper bound keeps generated users plausible
pub const MAX_AGE: u32 = 65;

const PASSWORD_RANDOM_LEN: usize = 10;
// Guarantees the symbol/digit/uppercase part of the password policy no matter
// what the random prefix contains.
const PASSWORD_SUFFIX: &str = "!A1";

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.ca"];

/// Birth date split the way the profile form's inputs want it: zero-padded
/// day and month, four-digit year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl BirthDate {
    fn from_naive(date: NaiveDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year: date.year().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// One synthetic registration record, created fresh per test run.
#[derive(Debug, Clone)]
pub struct UserData {
    pub email: String,
    pub password: String,
    pub username: String,
    pub birth_date: BirthDate,
    pub gender: Gender,
}

pub struct RandomDataGenerator;

impl RandomDataGenerator {
    /// A syntactically valid, lowercase email address.
    pub fn generate_email() -> String {
        let mut rng = rand::thread_rng();
        let local: String = std::iter::once(rng.gen_range(b'a'..=b'z') as char)
            .chain(
                (&mut rng)
                    .sample_iter(&Alphanumeric)
                    .take(9)
                    .map(|c| (c as char).to_ascii_lowercase()),
            )
            .collect();
        let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
        format!("{local}@{domain}")
    }

    /// Random alphanumerics plus a fixed suffix satisfying the site's
    /// symbol/digit/uppercase password policy.
    pub fn generate_password() -> String {
        let random: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(PASSWORD_RANDOM_LEN)
            .map(char::from)
            .collect();
        format!("{random}{PASSWORD_SUFFIX}")
    }

    /// Alphanumeric-only username.
    pub fn generate_username() -> String {
        let mut rng = rand::thread_rng();
        std::iter::once(rng.gen_range(b'a'..=b'z') as char)
            .chain((&mut rng).sample_iter(&Alphanumeric).take(9).map(char::from))
            .collect()
    }

    /// A birth date whose age today falls within `[min_age, max_age]`.
    pub fn generate_birth_date(min_age: u32, max_age: u32) -> NaiveDate {
        let today = Utc::now().date_naive();
        // Earliest allowed: one day past turning (max_age + 1).
        let earliest = today
            .checked_sub_months(Months::new((max_age + 1) * 12))
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .unwrap_or(today);
        let latest = today
            .checked_sub_months(Months::new(min_age * 12))
            .unwrap_or(today);
        let span = (latest - earliest).num_days().max(0) as u64;
        let offset = rand::thread_rng().gen_range(0..=span);
        earliest + Days::new(offset)
    }

    pub fn format_birth_date(date: NaiveDate) -> BirthDate {
        BirthDate::from_naive(date)
    }

    /// A complete fresh user record.
    pub fn generate_user_data() -> UserData {
        let birth = Self::generate_birth_date(MIN_AGE, MAX_AGE);
        UserData {
            email: Self::generate_email(),
            password: Self::generate_password(),
            username: Self::generate_username(),
            birth_date: Self::format_birth_date(birth),
            gender: Gender::Male,
        }
    }
}
