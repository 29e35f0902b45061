//! Core input types for fitstat.
//!
//! This module defines the boundary types:
//! - Workout codes as they appear in sensor packages
//! - Raw readings (code plus positional numeric fields)

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Codes
// ============================================================================

/// Short workout-type code carried by a sensor package
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    /// All known codes, in dispatch-table order
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::Walking,
    ];

    /// The wire form of this code
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::Walking => "WLK",
        }
    }

    /// Number of positional fields the variant's constructor takes
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::Walking => 4,
            WorkoutCode::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::Walking),
            other => Err(Error::UnrecognizedWorkoutCode(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Raw Readings
// ============================================================================

/// One sensor package: a workout code and its positional fields.
///
/// The code stays a plain string here so that unknown codes are rejected by
/// the dispatcher rather than by deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub workout_code: String,
    pub fields: Vec<f64>,
}

impl RawReading {
    pub fn new(workout_code: impl Into<String>, fields: Vec<f64>) -> Self {
        Self {
            workout_code: workout_code.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("SWM".parse::<WorkoutCode>().unwrap(), WorkoutCode::Swimming);
        assert_eq!("RUN".parse::<WorkoutCode>().unwrap(), WorkoutCode::Running);
        assert_eq!("WLK".parse::<WorkoutCode>().unwrap(), WorkoutCode::Walking);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        match "run".parse::<WorkoutCode>() {
            Err(Error::UnrecognizedWorkoutCode(code)) => assert_eq!(code, "run"),
            other => panic!("Expected UnrecognizedWorkoutCode, got {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_wire_form() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.to_string().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(WorkoutCode::Running.arity(), 3);
        assert_eq!(WorkoutCode::Walking.arity(), 4);
        assert_eq!(WorkoutCode::Swimming.arity(), 5);
    }

    #[test]
    fn test_reading_from_json() {
        let json = r#"{"workout_code": "RUN", "fields": [15000, 1, 75]}"#;
        let reading: RawReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading, RawReading::new("RUN", vec![15000.0, 1.0, 75.0]));
    }
}
