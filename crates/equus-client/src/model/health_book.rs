// Health book model types

use serde::{Deserialize, Serialize};

use super::equine::EquineMinInfo;
use super::user::MinUserInfo;

/// Row of the health books list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthBookMinInfo {
    pub id: i64,
    pub identification: String,
    pub state: String,
    pub equine_id: i64,
    pub equine_name: String,
    pub deleted: bool,
    pub updated_at: Option<String>,
}

/// Health book detail shown in the expandable row
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthBookInfo {
    pub id: i64,
    pub senasa_id: String,
    pub state: String,
    pub approved_at: Option<String>,
    pub deleted: bool,
    pub updated_at: Option<String>,
    pub extraction_info_list: Vec<BloodExtractionInfo>,
    pub vaccine_application_info_list: Vec<VaccineApplicationInfo>,
    pub equine_min_info: Option<EquineMinInfo>,
    pub approval_veterinarian: Option<MinUserInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BloodExtractionInfo {
    pub id: i64,
    pub health_book_id: i64,
    pub extraction_date: String,
    pub veterinarian_name: String,
    pub veterinarian_last_name: String,
    pub veterinarian_identification: String,
    pub deleted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaccineApplicationInfo {
    pub id: i64,
    pub vaccine_commercial_name: String,
    pub application_date: String,
    pub vaccine_drug: String,
    #[serde(rename = "vaccineGTIN")]
    pub vaccine_gtin: String,
    pub vaccine_manufacturer: String,
    pub vaccine_country: String,
    pub vaccine_lot_number: String,
    pub vaccine_fabrication_date: String,
    pub vaccine_expiration_date: String,
    pub vaccine_application_number: i32,
    pub veterinarian_name: String,
    pub veterinarian_last_name: String,
    pub veterinarian_identification: String,
    pub deleted: bool,
}

/// Payload for opening a health book for an equine
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHealthBook {
    pub equine_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senasa_id: Option<String>,
}
