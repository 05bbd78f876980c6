//! TOPSIS configuration and tie policies.

/// How alternatives with identical rounded scores are ranked.
///
/// Higher scores always receive lower rank numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiePolicy {
    /// Standard competition ranking (`1224`): tied entries share the best
    /// rank of their group and the next rank skips by the group size.
    #[default]
    Competition,

    /// Dense ranking (`1223`): tied entries share a rank and the next
    /// distinct score takes the following integer.
    Dense,
}

/// Configuration for [`TopsisEngine`](super::TopsisEngine).
///
/// All process-wide knobs live here and are passed explicitly; the engine
/// reads no ambient state.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::{TiePolicy, TopsisConfig};
///
/// let config = TopsisConfig::default()
///     .with_precision(4)
///     .with_tie_policy(TiePolicy::Dense);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisConfig {
    /// Decimal digits kept in reported scores. Ranking uses the rounded
    /// score.
    pub precision: u32,

    /// Rank assignment for tied scores.
    pub tie_policy: TiePolicy,

    /// Score assigned when an alternative coincides with both the ideal
    /// best and the ideal worst point (the `0 / 0` case).
    pub degenerate_score: f64,
}

/// Largest supported precision; beyond this `10^p` loses integer exactness.
pub const MAX_PRECISION: u32 = 15;

impl Default for TopsisConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            tie_policy: TiePolicy::Competition,
            degenerate_score: 0.5,
        }
    }
}

impl TopsisConfig {
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    pub fn with_degenerate_score(mut self, score: f64) -> Self {
        self.degenerate_score = score;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            ));
        }
        if !(0.0..=1.0).contains(&self.degenerate_score) {
            return Err(format!(
                "degenerate_score must be in [0, 1], got {}",
                self.degenerate_score
            ));
        }
        Ok(())
    }

    /// Rounds a score to the configured precision.
    pub fn round(&self, score: f64) -> f64 {
        let factor = 10f64.powi(self.precision.min(MAX_PRECISION) as i32);
        (score * factor).round() / factor
    }
}
