//! Record Data Types
//!
//! `Record` is what the service filters, sorts and returns. `Rows`/`Row` mirror the
//! on-disk XML layout and exist only to be converted into records at load time.

use serde::{Deserialize, Serialize};

/// A single user record as served over the wire.
///
/// Keys are PascalCase (`Id`, `Name`, `Age`, `About`, `Gender`) on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub id: i64,
    /// First name immediately followed by last name, no separator.
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

/// Root element of the XML dataset.
#[derive(Debug, Deserialize)]
pub struct Rows {
    #[serde(rename = "row", default)]
    pub rows: Vec<Row>,
}

/// One `<row>` of the XML dataset. Elements not listed here are ignored.
#[derive(Debug, Deserialize)]
pub struct Row {
    pub id: i64,
    pub age: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub gender: String,
}

impl From<Row> for Record {
    fn from(row: Row) -> Self {
        Self {
            id: row.id,
            name: format!("{}{}", row.first_name, row.last_name),
            age: row.age,
            about: row.about,
            gender: row.gender,
        }
    }
}
