use serde::{Deserialize, Serialize};

/// Two-part prompt sent to a completion service.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PromptPair {
    system: String,
    user: String,
}

impl PromptPair {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Structured outcome of comparing two athletes.
///
/// `analysis` always carries text: the verbatim completion, a sentinel error
/// string, or the insufficient-data message. The labeled fields are filled only
/// when their label was found in the completion.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete2_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_vs_one_prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete1_strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete2_strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    pub analysis: String,
}

impl ComparisonResult {
    /// Result carrying only an explanatory message, every structured field unset.
    pub fn message_only(analysis: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            ..Self::default()
        }
    }

    pub fn has_structured_fields(&self) -> bool {
        self.overall_winner.is_some()
            || self.one_vs_one_prediction.is_some()
            || self.athlete1_strengths.is_some()
            || self.athlete2_strengths.is_some()
            || self.conclusion.is_some()
    }
}
