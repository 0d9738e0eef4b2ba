use serde::{Deserialize, Serialize};

/// How a proposed line compares to the player's season average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAssessment {
    TooHigh,
    TooLow,
    Accurate,
}

impl LineAssessment {
    /// Exact comparison against the unrounded average.
    pub fn classify(line: f64, average: f64) -> Self {
        if line > average {
            LineAssessment::TooHigh
        } else if line < average {
            LineAssessment::TooLow
        } else {
            LineAssessment::Accurate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineAssessment::TooHigh => "too_high",
            LineAssessment::TooLow => "too_low",
            LineAssessment::Accurate => "accurate",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LineAssessment::TooHigh => "Line is too high.",
            LineAssessment::TooLow => "Line is too low.",
            LineAssessment::Accurate => "Line is accurate.",
        }
    }
}

impl std::fmt::Display for LineAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
