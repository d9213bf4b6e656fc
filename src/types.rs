use serde::{Deserialize, Serialize};

/// Marker used upstream for roster slots and preference cells that hold no real doctor.
pub const NA_SENTINEL: &str = "NA";

/// Availability of one doctor on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPreference", into = "RawPreference")]
pub enum Preference {
    Available,   // 1
    Unavailable, // 0, declared day off
    NotApplicable,
}

impl Preference {
    pub fn is_unavailable(self) -> bool {
        matches!(self, Preference::Unavailable)
    }
}

/// Wire form: `0`, `1` or `"NA"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPreference {
    Flag(u8),
    Sentinel(String),
}

impl TryFrom<RawPreference> for Preference {
    type Error = String;

    fn try_from(raw: RawPreference) -> Result<Self, Self::Error> {
        match raw {
            RawPreference::Flag(1) => Ok(Preference::Available),
            RawPreference::Flag(0) => Ok(Preference::Unavailable),
            RawPreference::Flag(other) => Err(format!("preference flag must be 0 or 1, got {}", other)),
            RawPreference::Sentinel(s) if s == NA_SENTINEL => Ok(Preference::NotApplicable),
            RawPreference::Sentinel(s) => Err(format!("unknown preference marker '{}'", s)),
        }
    }
}

impl From<Preference> for RawPreference {
    fn from(pref: Preference) -> Self {
        match pref {
            Preference::Available => RawPreference::Flag(1),
            Preference::Unavailable => RawPreference::Flag(0),
            Preference::NotApplicable => RawPreference::Sentinel(NA_SENTINEL.to_string()),
        }
    }
}

/// One roster slot, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub index: usize,
    pub name: String,
    pub preferences: Vec<Preference>,
}

impl Doctor {
    /// A slot with no real doctor behind it
    pub fn is_placeholder(&self) -> bool {
        self.name == NA_SENTINEL
            || (!self.preferences.is_empty()
                && self
                    .preferences
                    .iter()
                    .all(|p| *p == Preference::NotApplicable))
    }
}

/// Per-doctor day vectors, one row per roster slot, values 0/1
pub type DoctorRows = Vec<Vec<u8>>;

/// Days-major assignment matrix: `matrix[day][doctor]` is 0/1
pub type Assignment = Vec<Vec<u8>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_wire_format() {
        let prefs: Vec<Preference> = serde_json::from_str(r#"[1, 0, "NA"]"#).unwrap();
        assert_eq!(
            prefs,
            vec![
                Preference::Available,
                Preference::Unavailable,
                Preference::NotApplicable
            ]
        );

        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"[1,0,"NA"]"#);
    }

    #[test]
    fn test_preference_rejects_unknown_values() {
        assert!(serde_json::from_str::<Preference>("2").is_err());
        assert!(serde_json::from_str::<Preference>(r#""OFF""#).is_err());
    }

    #[test]
    fn test_placeholder_detection() {
        let real = Doctor {
            index: 0,
            name: "Papadopoulos".to_string(),
            preferences: vec![Preference::Available, Preference::Unavailable],
        };
        let by_name = Doctor {
            index: 1,
            name: NA_SENTINEL.to_string(),
            preferences: vec![],
        };
        let by_row = Doctor {
            index: 2,
            name: "slot".to_string(),
            preferences: vec![Preference::NotApplicable; 3],
        };

        assert!(!real.is_placeholder());
        assert!(by_name.is_placeholder());
        assert!(by_row.is_placeholder());
    }
}
