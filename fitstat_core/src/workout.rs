//! Workout variants and their calculation formulas.
//!
//! Every variant shares the same raw inputs (action count, duration, weight)
//! and the same default distance/speed formulas. Calorie computation is a
//! required method with no default, so there is no "abstract" workout that can
//! be constructed.

use crate::summary::SummaryMessage;
use crate::{Error, Result, WorkoutCode};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Step length used by land-based workouts, in metres
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

// ============================================================================
// Shared inputs
// ============================================================================

/// Raw inputs common to every workout
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutBase {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutBase {
    /// Validate and build the shared inputs.
    ///
    /// Zero duration is rejected here so that speed never divides by zero.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        ensure_finite("duration_hours", duration_hours)?;
        ensure_finite("weight_kg", weight_kg)?;
        if duration_hours == 0.0 {
            return Err(Error::DivisionByZero {
                field: "duration_hours",
            });
        }
        if duration_hours < 0.0 {
            return Err(Error::InvalidField {
                field: "duration_hours",
                value: duration_hours,
                reason: "must be positive",
            });
        }

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn duration_minutes(&self) -> f64 {
        self.duration_hours * MIN_IN_HOUR
    }
}

/// Convert a positional sensor field into a step/stroke count
pub fn action_count_from_field(value: f64) -> Result<u64> {
    ensure_finite("action_count", value)?;
    if value < 0.0 {
        return Err(Error::InvalidField {
            field: "action_count",
            value,
            reason: "must not be negative",
        });
    }
    if value.fract() != 0.0 {
        return Err(Error::InvalidField {
            field: "action_count",
            value,
            reason: "must be a whole number",
        });
    }
    if value > u64::MAX as f64 {
        return Err(Error::InvalidField {
            field: "action_count",
            value,
            reason: "is out of range",
        });
    }
    Ok(value as u64)
}

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidField {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

// ============================================================================
// Training capability
// ============================================================================

/// Calculations every workout variant provides
pub trait Training {
    /// Human-facing variant name used in summaries
    const NAME: &'static str;

    /// Length of one step or stroke, in metres
    const STEP_LENGTH_M: f64 = DEFAULT_STEP_LENGTH_M;

    fn base(&self) -> &WorkoutBase;

    /// Distance covered, in kilometres
    fn distance_km(&self) -> f64 {
        self.base().action_count() as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Average speed over the whole duration, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours()
    }

    /// Energy spent, in kilocalories
    fn spent_calories(&self) -> f64;

    /// Compute distance, speed and calories (in that order) into a summary
    fn build_summary(&self) -> SummaryMessage {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories = self.spent_calories();

        SummaryMessage::new(
            Self::NAME,
            self.base().duration_hours(),
            distance_km,
            mean_speed_kmh,
            calories,
        )
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RunningWorkout {
    base: WorkoutBase,
}

impl RunningWorkout {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_OFFSET: f64 = 20.0;

    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl Training for RunningWorkout {
    const NAME: &'static str = "RunningWorkout";

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::SPEED_OFFSET)
            * self.base.weight_kg()
            / M_IN_KM
            * self.base.duration_minutes()
    }
}

// ============================================================================
// Walking
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct WalkingWorkout {
    base: WorkoutBase,
    height_m: f64,
}

impl WalkingWorkout {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_m: f64,
    ) -> Result<Self> {
        let base = WorkoutBase::new(action_count, duration_hours, weight_kg)?;
        ensure_finite("height_m", height_m)?;
        if height_m == 0.0 {
            return Err(Error::DivisionByZero { field: "height_m" });
        }
        Ok(Self { base, height_m })
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }
}

impl Training for WalkingWorkout {
    const NAME: &'static str = "WalkingWorkout";

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight_kg();
        // Floor of the real-valued quotient, not of truncated operands.
        let speed_ratio = (self.mean_speed_kmh().powi(2) / self.height_m).floor();

        (Self::WEIGHT_MULTIPLIER * weight + speed_ratio * Self::SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_minutes()
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SwimmingWorkout {
    base: WorkoutBase,
    pool_length_m: f64,
    pool_laps: f64,
}

impl SwimmingWorkout {
    pub const SPEED_OFFSET: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Result<Self> {
        let base = WorkoutBase::new(action_count, duration_hours, weight_kg)?;
        ensure_finite("pool_length_m", pool_length_m)?;
        ensure_finite("pool_laps", pool_laps)?;
        Ok(Self {
            base,
            pool_length_m,
            pool_laps,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> f64 {
        self.pool_laps
    }
}

impl Training for SwimmingWorkout {
    const NAME: &'static str = "SwimmingWorkout";
    const STEP_LENGTH_M: f64 = 1.38;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    /// Derived from pool geometry; the stroke count plays no part.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.base.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_OFFSET) * Self::WEIGHT_MULTIPLIER * self.base.weight_kg()
    }
}

// ============================================================================
// Closed set of variants
// ============================================================================

/// Any supported workout
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(RunningWorkout),
    Walking(WalkingWorkout),
    Swimming(SwimmingWorkout),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Running,
            Workout::Walking(_) => WorkoutCode::Walking,
            Workout::Swimming(_) => WorkoutCode::Swimming,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running(_) => RunningWorkout::NAME,
            Workout::Walking(_) => WalkingWorkout::NAME,
            Workout::Swimming(_) => SwimmingWorkout::NAME,
        }
    }

    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(w) => w.base(),
            Workout::Walking(w) => w.base(),
            Workout::Swimming(w) => w.base(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::Walking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::Walking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::Walking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn build_summary(&self) -> SummaryMessage {
        match self {
            Workout::Running(w) => w.build_summary(),
            Workout::Walking(w) => w.build_summary(),
            Workout::Swimming(w) => w.build_summary(),
        }
    }
}

impl From<RunningWorkout> for Workout {
    fn from(w: RunningWorkout) -> Self {
        Workout::Running(w)
    }
}

impl From<WalkingWorkout> for Workout {
    fn from(w: WalkingWorkout) -> Self {
        Workout::Walking(w)
    }
}

impl From<SwimmingWorkout> for Workout {
    fn from(w: SwimmingWorkout) -> Self {
        Workout::Swimming(w)
    }
}
