//! Competency dimensions measured by the assessment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the fixed competency axes being measured.
///
/// The set is closed: dimensions are not extensible at runtime, and the
/// declaration order below is the canonical order used for stable
/// tie-breaking when ranking scores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Dimension {
    /// Psychological metrics: resilience and adaptability
    Psy,
    /// Critical thinking: analysis and decision-making
    CT,
    /// Leadership: influence and vision
    LD,
    /// Cognitive skills: mental agility
    Cog,
    /// Team roles: collaboration
    TR,
}

impl Dimension {
    /// All dimensions in canonical declaration order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Psy,
        Dimension::CT,
        Dimension::LD,
        Dimension::Cog,
        Dimension::TR,
    ];

    /// Short code used in serialized output and weight tables.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Psy => "Psy",
            Self::CT => "CT",
            Self::LD => "LD",
            Self::Cog => "Cog",
            Self::TR => "TR",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Psy => "Psychological Metrics",
            Self::CT => "Critical Thinking",
            Self::LD => "Leadership",
            Self::Cog => "Cognitive Skills",
            Self::TR => "Team Roles",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Psy" => Ok(Self::Psy),
            "CT" => Ok(Self::CT),
            "LD" => Ok(Self::LD),
            "Cog" => Ok(Self::Cog),
            "TR" => Ok(Self::TR),
            other => Err(format!("unknown dimension code: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(dim.code().parse::<Dimension>().unwrap(), dim);
        }
    }

    #[test]
    fn canonical_order_is_stable() {
        let codes: Vec<_> = Dimension::ALL.iter().map(Dimension::code).collect();
        assert_eq!(codes, ["Psy", "CT", "LD", "Cog", "TR"]);
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Dimension::Psy).unwrap();
        assert_eq!(json, "\"Psy\"");
    }
}
