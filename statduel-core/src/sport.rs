use serde::{Deserialize, Serialize};

/// Domain a comparison runs in.
///
/// Basketball statistics are seasonal (one record per season and type);
/// MMA statistics are a single career snapshot per fighter.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Mma,
}

impl Sport {
    /// Noun used for one side of a comparison ("Player 1", "Fighter 2").
    pub fn entity_noun(self) -> &'static str {
        match self {
            Sport::Basketball => "Player",
            Sport::Mma => "Fighter",
        }
    }

    /// Placeholder display name used when a name lookup comes back empty.
    pub fn placeholder_name(self, athlete_id: u64) -> String {
        format!("{} {athlete_id}", self.entity_noun())
    }

    pub fn insufficient_data_message(self) -> &'static str {
        match self {
            Sport::Basketball => {
                "Unable to compare: One or both players have no available statistics."
            }
            Sport::Mma => "Unable to compare: One or both fighters have no available statistics.",
        }
    }
}
