// User model types

use serde::{Deserialize, Serialize};

/// Profile value identifying horse owners
pub const PROFILE_OWNER: &str = "PROPIETARIO";

/// Full user record as listed on the users screen
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub identification_type: String,
    pub identification: String,
    pub enrolled: bool,
    pub email: String,
    pub birthday: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub senasa_id: Option<String>,
    pub veterinarian_college_id: Option<String>,
    pub accept_notifications: Option<bool>,
    pub profile: Option<String>,
}

impl UserInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    pub fn is_owner(&self) -> bool {
        self.profile.as_deref() == Some(PROFILE_OWNER)
    }
}

/// Compact user reference embedded in other records
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinUserInfo {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub identification: String,
    pub email: String,
    pub profile: String,
    pub deleted: bool,
}

/// Payload for creating a user
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUser {
    pub name: String,
    pub last_name: String,
    pub identification_type: String,
    pub identification: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Partial update of a user; absent fields are left untouched by the backend
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_notifications: Option<bool>,
}
