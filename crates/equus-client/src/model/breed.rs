// Breed (biotype) model types

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreedBiotypeInfo {
    pub id: i64,
    pub name: String,
}

/// Create/update payload for a breed
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedForm {
    pub name: String,
}
