use statduel_core::{ComparisonResult, Sport};

/// Structured field of a `ComparisonResult` that a label fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultField {
    OverallWinner,
    OneVsOne,
    Athlete1Strengths,
    Athlete2Strengths,
    Conclusion,
}

impl ResultField {
    pub fn slot(self, result: &mut ComparisonResult) -> &mut Option<String> {
        match self {
            ResultField::OverallWinner => &mut result.overall_winner,
            ResultField::OneVsOne => &mut result.one_vs_one_prediction,
            ResultField::Athlete1Strengths => &mut result.athlete1_strengths,
            ResultField::Athlete2Strengths => &mut result.athlete2_strengths,
            ResultField::Conclusion => &mut result.conclusion,
        }
    }
}

/// One line of the output-format contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelEntry {
    /// Marker at the start of a line, without the trailing colon.
    pub label: &'static str,
    pub field: ResultField,
    /// Placeholder shown after the label in the format contract.
    pub hint: &'static str,
}

pub const BASKETBALL_LABELS: [LabelEntry; 5] = [
    LabelEntry {
        label: "OVERALL_WINNER",
        field: ResultField::OverallWinner,
        hint: "[Player 1 or Player 2]",
    },
    LabelEntry {
        label: "ONE_VS_ONE",
        field: ResultField::OneVsOne,
        hint: "[Detailed prediction]",
    },
    LabelEntry {
        label: "PLAYER1_STRENGTHS",
        field: ResultField::Athlete1Strengths,
        hint: "[List of strengths]",
    },
    LabelEntry {
        label: "PLAYER2_STRENGTHS",
        field: ResultField::Athlete2Strengths,
        hint: "[List of strengths]",
    },
    LabelEntry {
        label: "CONCLUSION",
        field: ResultField::Conclusion,
        hint: "[Final analysis]",
    },
];

pub const MMA_LABELS: [LabelEntry; 5] = [
    LabelEntry {
        label: "OVERALL_WINNER",
        field: ResultField::OverallWinner,
        hint: "[Fighter 1 or Fighter 2]",
    },
    LabelEntry {
        label: "ONE_VS_ONE",
        field: ResultField::OneVsOne,
        hint: "[Detailed fight prediction]",
    },
    LabelEntry {
        label: "FIGHTER1_STRENGTHS",
        field: ResultField::Athlete1Strengths,
        hint: "[List of strengths]",
    },
    LabelEntry {
        label: "FIGHTER2_STRENGTHS",
        field: ResultField::Athlete2Strengths,
        hint: "[List of strengths]",
    },
    LabelEntry {
        label: "CONCLUSION",
        field: ResultField::Conclusion,
        hint: "[Final analysis]",
    },
];

pub fn labels_for(sport: Sport) -> &'static [LabelEntry] {
    match sport {
        Sport::Basketball => &BASKETBALL_LABELS,
        Sport::Mma => &MMA_LABELS,
    }
}

/// `LABEL: hint` lines in table order, without a trailing newline.
pub(crate) fn format_contract(labels: &[LabelEntry]) -> String {
    labels
        .iter()
        .map(|entry| format!("{}: {}", entry.label, entry.hint))
        .collect::<Vec<_>>()
        .join("\n")
}
