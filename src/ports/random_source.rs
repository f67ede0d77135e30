//! Random Source Port - Coin flips for rating perturbation.
//!
//! Stability analysis nudges every rating up or down by a fixed magnitude.
//! The direction of each nudge comes from this port, so production code can
//! draw from an OS-seeded generator while tests inject a seeded or scripted
//! source.

/// Direction of a single perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Returns `magnitude` with this sign applied.
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }
}

/// Port for drawing perturbation directions.
///
/// # Contract
///
/// Implementations must:
/// - Return `Plus` and `Minus` with equal probability for production use
/// - Produce a fresh, independent draw on every call
pub trait RandomSource {
    /// Draws the direction of the next perturbation.
    fn next_sign(&mut self) -> Sign;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_apply() {
        assert_eq!(Sign::Plus.apply(0.25), 0.25);
        assert_eq!(Sign::Minus.apply(0.25), -0.25);
    }
}
