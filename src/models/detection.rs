//! Signal detection domain models.

use serde::{Deserialize, Serialize};

/// Measurement values attached to a signal detection hypothesis.
///
/// Each field is independently optional. Rectilinearity and emergence angle
/// additionally carry an in-band `-1.0` error code from upstream processing;
/// formatting maps that code to the unknown sentinel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMeasurements {
    pub channel_name: Option<String>,
    pub phase: Option<String>,
    pub phase_confidence: Option<f64>,
    pub arrival_time_secs: Option<f64>,
    pub arrival_time_std_dev_secs: Option<f64>,
    pub azimuth_degrees: Option<f64>,
    pub azimuth_std_dev_degrees: Option<f64>,
    pub slowness_sec_per_degree: Option<f64>,
    pub slowness_std_dev_sec_per_degree: Option<f64>,
    pub amplitude: Option<f64>,
    pub period_secs: Option<f64>,
    pub snr: Option<f64>,
    pub rectilinearity: Option<f64>,
    pub emergence_angle_degrees: Option<f64>,
    pub short_period_first_motion: Option<String>,
    pub long_period_first_motion: Option<String>,
}

/// One interpretation of a signal detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDetectionHypothesis {
    pub id: String,
    pub rejected: bool,
    #[serde(default)]
    pub feature_measurements: FeatureMeasurements,
}

/// A signal detection with its hypothesis history, oldest to newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDetection {
    pub id: String,
    pub station_name: String,
    #[serde(default)]
    pub hypotheses: Vec<SignalDetectionHypothesis>,
}

impl SignalDetection {
    /// The most recent non-rejected hypothesis, falling back to the original
    /// parent hypothesis when every entry has been rejected.
    pub fn current_hypothesis(&self) -> Option<&SignalDetectionHypothesis> {
        self.hypotheses
            .iter()
            .rev()
            .find(|h| !h.rejected)
            .or_else(|| self.hypotheses.first())
    }
}
