//! Indicator definitions: identity, scoring rule, applicability.

use crate::model::{FieldRef, RoundingPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable indicator identifiers V1…V35.
///
/// The set is closed at registry-definition time. Serialized by variant name
/// (`"V8"`), which is also the form used in override maps and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[allow(clippy::upper_case_acronyms)]
pub enum IndicatorId {
    V1, V2, V3, V4, V5, V6, V7, V8, V9, V10,
    V11, V12, V13, V14, V15, V16, V17, V18, V19, V20,
    V21, V22, V23, V24, V25, V26, V27, V28, V29, V30,
    V31, V32, V33, V34, V35,
}

impl IndicatorId {
    pub const COUNT: usize = 35;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "V1", Self::V2 => "V2", Self::V3 => "V3", Self::V4 => "V4",
            Self::V5 => "V5", Self::V6 => "V6", Self::V7 => "V7", Self::V8 => "V8",
            Self::V9 => "V9", Self::V10 => "V10", Self::V11 => "V11", Self::V12 => "V12",
            Self::V13 => "V13", Self::V14 => "V14", Self::V15 => "V15", Self::V16 => "V16",
            Self::V17 => "V17", Self::V18 => "V18", Self::V19 => "V19", Self::V20 => "V20",
            Self::V21 => "V21", Self::V22 => "V22", Self::V23 => "V23", Self::V24 => "V24",
            Self::V25 => "V25", Self::V26 => "V26", Self::V27 => "V27", Self::V28 => "V28",
            Self::V29 => "V29", Self::V30 => "V30", Self::V31 => "V31", Self::V32 => "V32",
            Self::V33 => "V33", Self::V34 => "V34", Self::V35 => "V35",
        }
    }
}

impl std::fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-group relevance. An indicator marked not-relevant for a group never
/// contributes to that group's aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GroupApplicability {
    pub g1: bool,
    pub g2: bool,
    pub g3: bool,
}

impl GroupApplicability {
    pub const ALL: Self = Self { g1: true, g2: true, g3: true };
    /// Surface-source detail variables do not inform well recharge.
    pub const EXCEPT_G2: Self = Self { g1: true, g2: false, g3: true };

    pub fn applies_to(&self, group: crate::model::Group) -> bool {
        match group {
            crate::model::Group::G1 => self.g1,
            crate::model::Group::G2 => self.g2,
            crate::model::Group::G3 => self.g3,
        }
    }
}

/// Normalized-token lookup table mapping a categorical value to an explicit
/// per-group score triple.
#[derive(Debug)]
pub struct GroupTable {
    pub rows: &'static [(&'static str, [u8; 3])],
}

impl GroupTable {
    /// Resolve a normalized token to its score triple.
    pub fn lookup(&self, token: &str) -> Option<[u8; 3]> {
        self.rows
            .iter()
            .find(|(key, _)| *key == token)
            .map(|(_, scores)| *scores)
    }
}

/// How an indicator's raw inputs map to a 0–4 score.
#[derive(Debug)]
pub enum ScoringRule {
    /// Enumerated field: 3 when filled with anything informative, else 0.
    Categorical,
    /// Numeric field: 3 when present and parseable, else 0
    /// (`invalid_number` flag when present but unparseable).
    Numeric,
    /// Free text: 0 empty, 1 under 10 chars, 2 under 40 chars, 3 otherwise.
    FreeText,
    /// Group-differentiated lookup of the normalized token.
    GroupTable(&'static GroupTable),
    /// Model-presence composite: score scales with how many of the declared
    /// inputs are informative.
    CompositePresence,
    /// Study flag + follow-up category. A "no" waives the follow-up; a "si"
    /// makes the category field count.
    ConditionalStudy,
}

/// A registered indicator. Created at registry-definition time, never
/// mutated, only evaluated against a case record.
#[derive(Debug)]
pub struct Indicator {
    pub id: IndicatorId,
    /// Form question as shown to the user
    pub label: &'static str,
    /// Backing case fields, canonical keys. The first entry is the primary
    /// input used for evidence and single-field rules.
    pub inputs: &'static [FieldRef],
    pub rule: ScoringRule,
    pub applicability: GroupApplicability,
    /// Per-group triple collapse policy, fixed per indicator.
    pub rounding: RoundingPolicy,
    /// Inputs that must be informative for the tier-2 completeness bar.
    pub min_inputs: usize,
}

impl Indicator {
    pub fn primary_input(&self) -> &FieldRef {
        &self.inputs[0]
    }
}
