//! Weighted random selection of the next card.

use crate::error::QuizError;
use rand::Rng;

/// Pick an index with probability proportional to its weight.
///
/// Zero-weight entries are never returned. A zero total is reported as
/// `WeightSumMismatch` with `mastered` equal to the number of entries; the
/// session replaces it with its own count.
pub fn sample_index<R: Rng + ?Sized>(weights: &[u8], rng: &mut R) -> Result<usize, QuizError> {
    let total: u32 = weights.iter().map(|&w| u32::from(w)).sum();
    if total == 0 {
        return Err(QuizError::WeightSumMismatch {
            mastered: weights.len(),
            total: weights.len(),
        });
    }

    let draw = rng.random::<f64>() * f64::from(total);
    Ok(walk(weights, draw))
}

/// Return the first index whose running weight exceeds `draw`.
fn walk(weights: &[u8], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        cumulative += f64::from(weight);
        if weight > 0 && cumulative > draw {
            return index;
        }
    }

    // Only reachable through rounding at the upper boundary.
    weights.iter().rposition(|&w| w > 0).unwrap_or(0)
}
