//! The five aggregation criteria and their indicator partition.

use super::indicator::IndicatorId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The fixed criteria C1…C5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CriterionId {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl CriterionId {
    pub const ALL: [CriterionId; 5] = [
        CriterionId::C1,
        CriterionId::C2,
        CriterionId::C3,
        CriterionId::C4,
        CriterionId::C5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C4 => "C4",
            Self::C5 => "C5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::C1 => "Objetivo de la recarga",
            Self::C2 => "Condiciones hidrogeológicas",
            Self::C3 => "Fuente y calidad del agua",
            Self::C4 => "Factibilidad técnica",
            Self::C5 => "Aspectos socio-ambientales",
        }
    }

    /// Ordered member indicators. The five lists exactly and disjointly
    /// partition V1…V35 (enforced by test).
    pub fn members(&self) -> &'static [IndicatorId] {
        use IndicatorId::*;
        match self {
            Self::C1 => &[V23, V24, V25],
            Self::C2 => &[
                V1, V2, V3, V4, V5, V6, V7, V8, V9, V10, V11, V12, V13, V20, V21, V22, V29,
                V30,
            ],
            Self::C3 => &[V14, V15, V16, V17, V18, V19, V26, V27, V28],
            Self::C4 => &[V31, V32, V33],
            Self::C5 => &[V34, V35],
        }
    }

    /// The criterion an indicator belongs to.
    pub fn of(indicator: IndicatorId) -> CriterionId {
        for criterion in Self::ALL {
            if criterion.members().contains(&indicator) {
                return criterion;
            }
        }
        unreachable!("indicator {indicator} is not in any criterion")
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All criteria in declaration order.
pub const CRITERIA: [CriterionId; 5] = CriterionId::ALL;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_criteria_partition_is_exact_and_disjoint() {
        let mut seen = HashSet::new();
        for criterion in CriterionId::ALL {
            for id in criterion.members() {
                assert!(seen.insert(*id), "{id} appears in more than one criterion");
            }
        }
        assert_eq!(seen.len(), IndicatorId::COUNT);
    }

    #[test]
    fn test_criterion_of() {
        assert_eq!(CriterionId::of(IndicatorId::V8), CriterionId::C2);
        assert_eq!(CriterionId::of(IndicatorId::V14), CriterionId::C3);
        assert_eq!(CriterionId::of(IndicatorId::V23), CriterionId::C1);
        assert_eq!(CriterionId::of(IndicatorId::V35), CriterionId::C5);
    }
}
