//! AHP pairwise-comparison weight derivation.
//!
//! Implements the column-normalize-then-row-average approximation to the
//! principal eigenvector, with Saaty's consistency ratio. The matrix is
//! assumed well-formed (square, positive, reciprocal, unit diagonal);
//! violating that is a caller error and shows up as NaN, not a panic.

use crate::registry::CriterionId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of criteria, fixed by the decision scheme.
const N: usize = 5;

/// Saaty random-index table, indexed by matrix order.
pub const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

/// CR at or below this is conventionally acceptable. Advisory only.
pub const CR_ACCEPTABLE: f64 = 0.10;

/// A 5×5 reciprocal pairwise-comparison matrix over C1…C5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PairwiseMatrix(pub [[f64; N]; N]);

impl PairwiseMatrix {
    /// The indifferent matrix (all ones): uniform weights, CR = 0.
    pub fn uniform() -> Self {
        Self([[1.0; N]; N])
    }

    /// Check the AHP preconditions. Offered for the input boundary;
    /// [`derive_weights`] itself never calls this.
    pub fn validate(&self) -> Result<(), String> {
        for (i, row) in self.0.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(format!(
                        "entry [{i}][{j}] must be a positive number, got {value}"
                    ));
                }
                if i == j && (value - 1.0).abs() > 1e-9 {
                    return Err(format!("diagonal entry [{i}][{i}] must be 1, got {value}"));
                }
                let reciprocal = self.0[j][i];
                if (value * reciprocal - 1.0).abs() > 1e-6 {
                    return Err(format!(
                        "entries [{i}][{j}] and [{j}][{i}] are not reciprocal ({value} vs {reciprocal})"
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for PairwiseMatrix {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Derived priority weights and consistency diagnostics.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
pub struct AhpOutcome {
    /// Normalized priority vector over C1…C5 (sums to 1).
    pub weights: [f64; N],
    /// Principal eigenvalue estimate.
    pub lambda_max: f64,
    /// Consistency index: (λmax − n) / (n − 1).
    pub ci: f64,
    /// Consistency ratio: CI / RI(n).
    pub cr: f64,
}

impl AhpOutcome {
    /// Whether the judgments pass the conventional CR ≤ 0.10 bar.
    pub fn is_consistent(&self) -> bool {
        self.cr <= CR_ACCEPTABLE
    }

    /// Weight of a criterion.
    pub fn weight_of(&self, criterion: CriterionId) -> f64 {
        let idx = CriterionId::ALL
            .iter()
            .position(|c| *c == criterion)
            .unwrap_or_else(|| unreachable!("criterion {criterion} outside C1..C5"));
        self.weights[idx]
    }
}

/// Derive priority weights from a pairwise matrix.
///
/// Deterministic: no randomness, no iteration-order dependence; calling
/// twice on the same matrix yields identical output.
pub fn derive_weights(matrix: &PairwiseMatrix) -> AhpOutcome {
    let a = &matrix.0;

    // Column sums, then column-normalized row averages.
    let mut col_sums = [0.0_f64; N];
    for row in a {
        for (j, &value) in row.iter().enumerate() {
            col_sums[j] += value;
        }
    }

    let mut weights = [0.0_f64; N];
    for (i, row) in a.iter().enumerate() {
        let mut acc = 0.0;
        for (j, &value) in row.iter().enumerate() {
            acc += value / col_sums[j];
        }
        weights[i] = acc / N as f64;
    }

    // λmax from the weighted-sum vector.
    let mut lambda_max = 0.0;
    for (i, row) in a.iter().enumerate() {
        let weighted_sum: f64 = row.iter().zip(&weights).map(|(v, w)| v * w).sum();
        lambda_max += weighted_sum / weights[i];
    }
    lambda_max /= N as f64;

    let ci = (lambda_max - N as f64) / (N as f64 - 1.0);
    let cr = ci / RANDOM_INDEX[N];

    AhpOutcome {
        weights,
        lambda_max,
        ci,
        cr,
    }
}
