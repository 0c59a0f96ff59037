use serde::{Deserialize, Serialize};

/// Display name used when a directory row carries none.
pub const FALLBACK_NAME: &str = "Sin nombre";

/// One raw row as the contact store returns it. The directory keeps one row
/// per phone number, so the same `id` can repeat across rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    pub id: String,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
}

impl ContactRow {
    pub fn new(id: &str, display_name: Option<&str>, phone_number: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    /// Effective display name, with the fallback applied.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(FALLBACK_NAME)
    }
}

/// A contact as the list screen shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    // Kept in the model for detail views; no current flow fills it.
    pub email: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        let name = match row.display_name {
            Some(name) => name,
            None => FALLBACK_NAME.to_string(),
        };
        Self {
            id: row.id,
            name,
            phone_number: row.phone_number,
            email: None,
        }
    }
}
