// Stable model types

use serde::{Deserialize, Serialize};

use super::user::MinUserInfo;

/// Establishment type embedded in a stable
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StableTypeRef {
    pub id: i64,
    pub name: String,
    pub option_value: String,
}

/// Stable record as listed on the stables screen
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StableInfo {
    pub id: i64,
    pub name: String,
    pub alias: String,
    pub phone_number: String,
    pub identification_type: String,
    pub identification: String,
    pub renspa: String,
    #[serde(rename = "type")]
    pub type_: Option<StableTypeRef>,
    pub country: String,
    pub province: String,
    pub city: String,
    pub address: String,
    pub owner: Option<MinUserInfo>,
    pub picture: Option<String>,
    pub deleted: bool,
}

/// Option of the stable type selector
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StableType {
    pub id: i64,
    pub name: String,
    pub label: String,
}

/// Payload for creating or editing a stable
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStable {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renspa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radicated_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}
