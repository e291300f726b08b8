//! Hourly crowd prediction.

use chrono::{Local, Timelike};

pub use self::level::CrowdLevel;
pub use self::regression::Regression;
use crate::prelude::*;

mod level;
mod regression;

/// Observed `(hour, crowd percent)` pairs the model is fitted on.
pub const TRAINING_SAMPLES: [TrainingSample; 6] = [
    TrainingSample::new(6, 15),
    TrainingSample::new(9, 30),
    TrainingSample::new(12, 60),
    TrainingSample::new(15, 75),
    TrainingSample::new(18, 85),
    TrainingSample::new(21, 40),
];

#[derive(Copy, Clone, Debug)]
pub struct TrainingSample {
    pub hour: u32,
    pub crowd_percent: u32,
}

impl TrainingSample {
    pub const fn new(hour: u32, crowd_percent: u32) -> Self {
        Self { hour, crowd_percent }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PredictionSource {
    #[default]
    Computed,

    /// The regression could not be evaluated and the fixed default was used instead.
    Fallback,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Prediction {
    /// Crowd percentage, always within `0..=100`.
    pub value: u8,

    pub level: CrowdLevel,
    pub source: PredictionSource,
}

impl Prediction {
    pub const FALLBACK_VALUE: u8 = 50;

    pub const fn computed(value: u8) -> Self {
        Self {
            value,
            level: CrowdLevel::from_value(value),
            source: PredictionSource::Computed,
        }
    }

    pub const fn fallback() -> Self {
        Self {
            value: Self::FALLBACK_VALUE,
            level: CrowdLevel::from_value(Self::FALLBACK_VALUE),
            source: PredictionSource::Fallback,
        }
    }
}

/// Current local hour, used when the visitor does not specify one.
pub fn local_hour() -> u32 {
    Local::now().hour()
}

/// Fitted crowd model.
///
/// Built once at startup and shared read-only between the requests.
#[derive(Copy, Clone, Debug)]
pub struct Predictor {
    regression: Regression,
    clock: fn() -> u32,
}

impl Predictor {
    /// Fits the model over [`TRAINING_SAMPLES`].
    pub fn fit() -> Result<Self> {
        let (x, y): (Vec<f64>, Vec<f64>) = TRAINING_SAMPLES
            .iter()
            .map(|sample| (f64::from(sample.hour), f64::from(sample.crowd_percent)))
            .unzip();
        let regression = Regression::fit(&x, &y).context("failed to fit the crowd model")?;
        Ok(Self {
            regression,
            clock: local_hour,
        })
    }

    /// Replaces the source of the current hour.
    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> u32) -> Self {
        self.clock = clock;
        self
    }

    pub const fn regression(&self) -> &Regression {
        &self.regression
    }

    /// Predicts the crowd for the hour, or for the current hour when none is given.
    ///
    /// Never fails: anything that cannot be evaluated degrades to [`Prediction::fallback`].
    pub fn predict(&self, hour: Option<u32>) -> Prediction {
        let hour = hour.unwrap_or_else(self.clock);
        match self.evaluate(hour) {
            Ok(value) => Prediction::computed(value),
            Err(error) => {
                warn!(hour, "falling back to the default crowd value: {:#}", error);
                Prediction::fallback()
            }
        }
    }

    fn evaluate(&self, hour: u32) -> Result<u8> {
        if hour > 23 {
            return Err(anyhow!("{} is not a valid hour", hour));
        }
        let raw = self.regression.predict(f64::from(hour));
        if !raw.is_finite() {
            return Err(anyhow!("the model returned {}", raw));
        }
        Ok(raw.trunc().clamp(0.0, 100.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn noon() -> u32 {
        12
    }

    #[test]
    fn fit_ok() -> Result {
        let regression = *Predictor::fit()?.regression();
        assert!((regression.slope - 2.904_761_904_761_905).abs() < 1e-9);
        assert!((regression.intercept - 11.619_047_619_047_62).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn predict_known_hours_ok() -> Result {
        let predictor = Predictor::fit()?;
        assert_eq!(predictor.predict(Some(0)), Prediction::computed(11));
        assert_eq!(predictor.predict(Some(6)), Prediction::computed(29));
        assert_eq!(predictor.predict(Some(12)), Prediction::computed(46));
        assert_eq!(predictor.predict(Some(20)), Prediction::computed(69));
        assert_eq!(predictor.predict(Some(21)), Prediction::computed(72));
        assert_eq!(predictor.predict(Some(23)), Prediction::computed(78));
        Ok(())
    }

    #[test]
    fn predict_noon_is_medium() -> Result {
        let prediction = Predictor::fit()?.predict(Some(12));
        assert_eq!(prediction.level, CrowdLevel::Medium);
        assert_eq!(prediction.source, PredictionSource::Computed);
        Ok(())
    }

    #[test]
    fn predict_uses_clock_when_hour_missing() -> Result {
        let predictor = Predictor::fit()?.with_clock(noon);
        assert_eq!(predictor.predict(None), predictor.predict(Some(12)));
        Ok(())
    }

    #[test]
    fn predict_invalid_hour_falls_back() -> Result {
        let prediction = Predictor::fit()?.predict(Some(24));
        assert_eq!(prediction.value, 50);
        assert_eq!(prediction.level, CrowdLevel::Medium);
        assert_eq!(prediction.source, PredictionSource::Fallback);
        Ok(())
    }

    #[test]
    fn predict_non_finite_falls_back() -> Result {
        let mut predictor = Predictor::fit()?;
        predictor.regression.slope = f64::NAN;
        assert_eq!(predictor.predict(Some(10)), Prediction::fallback());
        Ok(())
    }

    #[test]
    fn predict_clamps_ok() -> Result {
        let mut predictor = Predictor::fit()?;
        predictor.regression.intercept = -500.0;
        assert_eq!(predictor.predict(Some(1)).value, 0);
        predictor.regression.intercept = 500.0;
        assert_eq!(predictor.predict(Some(1)).value, 100);
        Ok(())
    }

    #[test]
    fn default_prediction_is_idle() {
        let prediction = Prediction::default();
        assert_eq!(prediction.value, 0);
        assert_eq!(prediction.level, CrowdLevel::Low);
    }

    proptest! {
        #[test]
        fn value_is_clamped(hour in 0_u32..24) {
            let prediction = Predictor::fit().unwrap().predict(Some(hour));
            prop_assert!(prediction.value <= 100);
            prop_assert_eq!(prediction.source, PredictionSource::Computed);
        }

        #[test]
        fn level_matches_thresholds(hour in any::<u32>()) {
            let prediction = Predictor::fit().unwrap().predict(Some(hour));
            let expected = match prediction.value {
                0..=39 => CrowdLevel::Low,
                40..=69 => CrowdLevel::Medium,
                _ => CrowdLevel::High,
            };
            prop_assert_eq!(prediction.level, expected);
        }
    }
}
