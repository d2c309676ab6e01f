//! Data quality score service

use crate::domain::quality::QualityCheck;
use crate::error::QualityError;
use crate::view::quality::ScoreView;

/// Highest score the demo will display
pub const MAX_SCORE: u32 = 100;

/// Sum of weights, clamped to `MAX_SCORE`
pub fn aggregate_score<I>(weights: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    weights
        .into_iter()
        .fold(0u32, u32::saturating_add)
        .min(MAX_SCORE)
}

/// Score ring sweep in whole degrees
pub fn ring_angle(score: u32) -> u32 {
    let fraction = f64::from(score.min(MAX_SCORE)) / f64::from(MAX_SCORE);
    (fraction * 360.0).round() as u32
}

/// Checkbox state of the quality demo
#[derive(Debug, Clone)]
pub struct QualityScore {
    checks: Vec<QualityCheck>,
    checked: Vec<bool>,
}

impl QualityScore {
    /// Creates the demo with every option unchecked
    pub fn new(checks: Vec<QualityCheck>) -> Self {
        let checked = vec![false; checks.len()];
        Self { checks, checked }
    }

    pub fn checks(&self) -> &[QualityCheck] {
        &self.checks
    }

    /// Returns whether the option with this id is checked
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.position(id).map(|index| self.checked[index])
    }

    /// Sets one option and recomputes the score
    pub fn toggle(&mut self, id: &str, checked: bool) -> Result<ScoreView, QualityError> {
        let index = self
            .position(id)
            .ok_or_else(|| QualityError::UnknownCheck(id.to_string()))?;
        self.checked[index] = checked;
        Ok(self.recompute())
    }

    /// Score for the currently checked options
    pub fn recompute(&self) -> ScoreView {
        let checked: Vec<&QualityCheck> = self
            .checks
            .iter()
            .zip(&self.checked)
            .filter(|(_, on)| **on)
            .map(|(check, _)| check)
            .collect();

        let score = aggregate_score(checked.iter().map(|c| c.weight));

        ScoreView {
            score,
            ring_angle_deg: ring_angle(score),
            checked: checked.iter().map(|c| c.id.clone()).collect(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.checks.iter().position(|c| c.id == id)
    }
}
