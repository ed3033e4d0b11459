use crate::error::AppError;
use crate::pipeline::extractor::TrackerSettings;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub model_path: String,
    pub request_buffer_size: usize,
    pub tracker: TrackerSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            model_path: "models/gesture_model.json".to_string(),
            request_buffer_size: 32,
            tracker: TrackerSettings::default(),
        }
    }
}

impl Configuration {
    /// Layers an optional `gesture.toml` and `GESTURE_*` environment
    /// variables over the defaults.
    pub fn load() -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("gesture").required(false))
            .add_source(config::Environment::with_prefix("GESTURE").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_tracker_parameters() {
        let configuration = Configuration::default();
        assert_eq!(configuration.tracker.max_hands, 1);
        assert!(!configuration.tracker.static_mode);
        assert_eq!(configuration.tracker.min_detection_confidence, 0.5);
        assert_eq!(configuration.tracker.min_tracking_confidence, 0.5);
        assert_eq!(configuration.model_path, "models/gesture_model.json");
    }
}
