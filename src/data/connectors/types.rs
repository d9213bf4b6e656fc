use crate::types::{Preference, NA_SENTINEL};
use serde::{Deserialize, Serialize};

/// Request as handed over by the upstream collaborator (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRequest {
    pub month: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub doctor_names: Vec<String>,
    #[serde(default)]
    pub doctor_preference: PreferenceMatrix,
    /// 0/1 per day; derived from the calendar when empty
    #[serde(default)]
    pub weekend_positions: Vec<u8>,
    #[serde(default)]
    pub total_shifts: Vec<u32>,
    #[serde(default)]
    pub min_shifts: Vec<u32>,
    #[serde(default)]
    pub max_shifts: Vec<u32>,
}

/// Either a full D x days matrix or the bare "NA" marker sent when no doctors exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceMatrix {
    Matrix(Vec<Vec<Preference>>),
    Sentinel(String),
}

impl Default for PreferenceMatrix {
    fn default() -> Self {
        PreferenceMatrix::Matrix(Vec::new())
    }
}

impl PreferenceMatrix {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, PreferenceMatrix::Sentinel(s) if s == NA_SENTINEL)
    }
}
