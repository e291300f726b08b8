use statrs::statistics::Statistics;

use crate::prelude::*;

/// Single-feature linear regression fitted by ordinary least squares.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(anyhow!("expected equal lengths, got {} and {}", x.len(), y.len()));
        }
        if x.len() < 2 {
            return Err(anyhow!("at least two samples are required, got {}", x.len()));
        }

        let variance = x.iter().variance();
        if variance == 0.0 {
            return Err(anyhow!("the feature is constant"));
        }
        let slope = x.iter().covariance(y.iter()) / variance;
        let intercept = y.iter().mean() - slope * x.iter().mean();
        Ok(Self { slope, intercept })
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
