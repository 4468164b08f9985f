//! User score overrides and their resolution chain.

use crate::model::GroupScores;
use crate::registry::IndicatorId;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Indicators whose engine score can never be overridden. See DESIGN.md
/// open question 3 for the membership.
pub const OVERRIDE_LOCKED: [IndicatorId; 2] = [IndicatorId::V8, IndicatorId::V16];

/// Score overrides supplied by the external layer, layered on top of
/// engine-computed scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScoreOverrides {
    /// Scalar 0–4 override applied to all groups.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub manual: IndexMap<IndicatorId, u8>,
    /// Per-group override, consulted only in custom-influence mode.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom: IndexMap<IndicatorId, GroupScores>,
    /// Whether custom per-group overrides participate at all.
    #[serde(default)]
    pub custom_influence_enabled: bool,
}

impl ScoreOverrides {
    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.custom.is_empty()
    }
}

/// Resolve the effective per-group score for an indicator.
///
/// The chain, in order: locked indicators keep the engine score; an enabled
/// custom per-group override wins next; a manual scalar override applies to
/// all groups; otherwise the engine score stands. All aggregation call
/// sites resolve through this function.
pub fn resolve_score(
    id: IndicatorId,
    engine: GroupScores,
    overrides: &ScoreOverrides,
) -> GroupScores {
    if OVERRIDE_LOCKED.contains(&id) {
        return engine;
    }
    if overrides.custom_influence_enabled {
        if let Some(custom) = overrides.custom.get(&id) {
            return *custom;
        }
    }
    if let Some(&manual) = overrides.manual.get(&id) {
        return GroupScores::uniform(manual.min(4));
    }
    engine
}
