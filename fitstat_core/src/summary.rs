//! Workout summary record and its text template.

use serde::Serialize;
use std::fmt;

/// Computed results for one workout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryMessage {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl SummaryMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Render the fixed one-line summary
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
