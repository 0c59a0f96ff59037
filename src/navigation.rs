use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// The three screens of the navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Contacts,
    Detail(Detail),
}

/// Payload handed to the detail screen for the selected contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub contact_id: String,
    pub name: String,
    pub phone_number: Option<String>,
}

impl From<&Contact> for Detail {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id.clone(),
            name: contact.name.clone(),
            phone_number: contact.phone_number.clone(),
        }
    }
}
