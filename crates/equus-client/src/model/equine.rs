// Equine model types

use serde::{Deserialize, Serialize};

/// Equine record as listed on the equines screen
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquineInfo {
    pub id: i64,
    pub name: String,
    pub chip: String,
    pub bio_id: Option<String>,
    pub breed_biotype_name: String,
    pub sex: String,
    pub owner_name: String,
    pub is_iris_enrolled: bool,
    pub health_book_status: Option<String>,
    pub deleted: bool,
}

/// Compact equine reference embedded in travels and health books
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquineMinInfo {
    pub id: i64,
    pub name: String,
    pub chip: String,
    pub bio_id: Option<String>,
    pub is_iris_enrolled: Option<bool>,
    pub health_book_id: Option<i64>,
    pub health_book_identification: Option<String>,
    pub health_book_status: Option<String>,
    pub deleted: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Payload for creating or editing an equine
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEquine {
    pub name: String,
    pub chip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_biotype_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_id: Option<i64>,
}
