//! Dispatch from sensor packages to workout variants.
//!
//! The short code is parsed into a [`WorkoutCode`] before anything else, so an
//! unknown code never reaches construction.

use crate::summary::SummaryMessage;
use crate::workout::{
    action_count_from_field, RunningWorkout, SwimmingWorkout, WalkingWorkout, Workout,
};
use crate::{Error, RawReading, Result, WorkoutCode};

/// Build the workout variant selected by `code` from positional `fields`
pub fn create_workout(code: &str, fields: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code.parse()?;
    build_workout(code, fields)
}

/// Build a workout from an already-parsed code
pub fn build_workout(code: WorkoutCode, fields: &[f64]) -> Result<Workout> {
    if fields.len() != code.arity() {
        return Err(Error::ArityMismatch {
            code: code.as_str().to_string(),
            expected: code.arity(),
            actual: fields.len(),
        });
    }

    let action_count = action_count_from_field(fields[0])?;
    let (duration_hours, weight_kg) = (fields[1], fields[2]);

    let workout: Workout = match code {
        WorkoutCode::Running => {
            RunningWorkout::new(action_count, duration_hours, weight_kg)?.into()
        }
        WorkoutCode::Walking => {
            WalkingWorkout::new(action_count, duration_hours, weight_kg, fields[3])?.into()
        }
        WorkoutCode::Swimming => SwimmingWorkout::new(
            action_count,
            duration_hours,
            weight_kg,
            fields[3],
            fields[4],
        )?
        .into(),
    };

    tracing::debug!("Built {} from {} fields", code, fields.len());
    Ok(workout)
}

/// Process one reading end to end
pub fn summarize(reading: &RawReading) -> Result<SummaryMessage> {
    let workout = create_workout(&reading.workout_code, &reading.fields)?;
    Ok(workout.build_summary())
}
