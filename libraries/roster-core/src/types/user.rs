/// User domain type
use serde::{Deserialize, Serialize};

/// A user record as published by the directory endpoint
///
/// Records are immutable once fetched; the list only ever filters and
/// reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: i64,

    /// Full display name, the field searches and sorts operate on
    pub name: String,

    pub username: String,

    pub email: String,

    pub address: Address,

    pub phone: String,

    pub website: String,

    pub company: Company,
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,

    /// Coordinates, when the endpoint provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Address {
    /// Single-line form: `street, suite, city, zipcode`
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

/// Geographic coordinates, kept as the strings the endpoint sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,

    #[serde(
        default,
        rename = "catchPhrase",
        skip_serializing_if = "Option::is_none"
    )]
    pub catch_phrase: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

impl UserRecord {
    /// Lowercased name used for matching and ordering
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}
