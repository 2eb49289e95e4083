// Travel model types

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::MinUserInfo;

/// Lifecycle state of a travel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Done,
    Canceled,
}

/// Colour family of a status badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Yellow,
    Blue,
    Orange,
    Green,
    Red,
}

impl TravelStatus {
    pub const ALL: [TravelStatus; 5] = [
        TravelStatus::Pending,
        TravelStatus::Confirmed,
        TravelStatus::InProgress,
        TravelStatus::Done,
        TravelStatus::Canceled,
    ];

    /// Wire value, as sent in the `status` filter
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStatus::Pending => "PENDING",
            TravelStatus::Confirmed => "CONFIRMED",
            TravelStatus::InProgress => "IN_PROGRESS",
            TravelStatus::Done => "DONE",
            TravelStatus::Canceled => "CANCELED",
        }
    }

    /// Label shown in the status badge
    pub fn label(&self) -> &'static str {
        match self {
            TravelStatus::Pending => "Pendiente",
            TravelStatus::Confirmed => "Confirmado",
            TravelStatus::InProgress => "En Progreso",
            TravelStatus::Done => "Completado",
            TravelStatus::Canceled => "Cancelado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            TravelStatus::Pending => BadgeTone::Yellow,
            TravelStatus::Confirmed => BadgeTone::Blue,
            TravelStatus::InProgress => BadgeTone::Orange,
            TravelStatus::Done => BadgeTone::Green,
            TravelStatus::Canceled => BadgeTone::Red,
        }
    }

    /// Whether the travel can still be cancelled or confirmed
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            TravelStatus::Pending | TravelStatus::Confirmed | TravelStatus::InProgress
        )
    }
}

impl fmt::Display for TravelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TravelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown travel status '{}'", s))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationInfo {
    pub id: i64,
    pub alias: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub address: String,
    pub stable_name: String,
    pub stable_renspa: String,
    pub event_name: String,
    pub deleted: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Equine carried on a travel
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelEquine {
    pub id: i64,
    pub name: String,
    pub chip: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelInfo {
    pub id: i64,
    pub reference: String,
    pub origin: LocationInfo,
    pub destination: LocationInfo,
    pub travel_status: TravelStatus,
    pub start_at: String,
    pub ends_at: String,
    pub creator: Option<MinUserInfo>,
    pub deleted: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub equines: Vec<TravelEquine>,
    pub motivo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLocation {
    pub alias: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTravel {
    pub reference: String,
    pub origin: AddLocation,
    pub destination: AddLocation,
    pub start_at: String,
    pub ends_at: String,
    pub creator_id: i64,
    pub equine_ids: Vec<i64>,
}

/// Edit payload; the end date and creator are fixed once a travel exists
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTravel {
    pub reference: String,
    pub origin: AddLocation,
    pub destination: AddLocation,
    pub start_at: String,
    pub equine_ids: Vec<i64>,
}

impl From<&TravelInfo> for EditTravel {
    fn from(travel: &TravelInfo) -> Self {
        let location = |l: &LocationInfo| AddLocation {
            alias: l.alias.clone(),
            country: l.country.clone(),
            province: l.province.clone(),
            city: l.city.clone(),
            address: l.address.clone(),
            stable_id: None,
            event_id: None,
        };

        Self {
            reference: travel.reference.clone(),
            origin: location(&travel.origin),
            destination: location(&travel.destination),
            start_at: travel.start_at.clone(),
            equine_ids: travel.equines.iter().map(|e| e.id).collect(),
        }
    }
}

/// Server-side filters of the travel list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TravelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equine_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl TravelFilters {
    pub fn is_empty(&self) -> bool {
        self == &TravelFilters::default()
    }
}
