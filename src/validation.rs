// src/validation.rs
//! Field validation for the workout and profile forms.
//!
//! Validators are pure: they look at a candidate record and return every
//! problem they find, keyed by the field that should display it. An empty
//! [`ValidationErrors`] means the record may be saved.

use std::collections::BTreeMap;
use std::fmt;

use crate::profile::UserProfile;
use crate::workout::WorkoutLog;

pub const MSG_WORKOUT_TYPE: &str = "Please select a workout type.";
pub const MSG_TITLE: &str = "Please enter a workout title.";
pub const MSG_DURATION: &str = "Please enter a valid duration.";
pub const MSG_EXERCISE_NAME: &str = "Exercise name required.";
pub const MSG_POSITIVE: &str = "Must be positive.";
pub const MSG_AGE: &str = "Age must be 0–120.";
pub const MSG_WEIGHT: &str = "Weight must be positive.";

pub const MAX_AGE: f64 = 120.0;

/// Identifies the form field an error belongs to.
///
/// Exercise keys carry the row index, not the exercise id, so an error
/// follows whatever row is displayed at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    WorkoutType,
    CustomTitle,
    Duration,
    ExerciseName(usize),
    ExerciseSets(usize),
    ExerciseReps(usize),
    ExerciseWeight(usize),
    Age,
    Weight,
    Bench,
    Squat,
    Deadlift,
    Treadmill,
    Stairs,
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkoutType => write!(f, "workoutType"),
            Self::CustomTitle => write!(f, "customTitle"),
            Self::Duration => write!(f, "duration"),
            Self::ExerciseName(i) => write!(f, "ex_name_{i}"),
            Self::ExerciseSets(i) => write!(f, "ex_sets_{i}"),
            Self::ExerciseReps(i) => write!(f, "ex_reps_{i}"),
            Self::ExerciseWeight(i) => write!(f, "ex_weight_{i}"),
            Self::Age => write!(f, "age"),
            Self::Weight => write!(f, "weight"),
            Self::Bench => write!(f, "bench"),
            Self::Squat => write!(f, "squat"),
            Self::Deadlift => write!(f, "deadlift"),
            Self::Treadmill => write!(f, "treadmill"),
            Self::Stairs => write!(f, "stairs"),
        }
    }
}

/// Ordered map of field → human readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// True when the raw input has something other than whitespace in it.
pub fn is_present(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// Parses a form input as a finite number. Blank or malformed input is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns the value if the input holds a number greater than zero.
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| *v > 0.0)
}

// Optional field: blank is fine, anything else must be a positive number.
fn optional_positive_ok(raw: &str) -> bool {
    !is_present(raw) || parse_positive(raw).is_some()
}

/// Checks a workout candidate. Exercise errors are keyed by row index.
pub fn validate_workout(workout: &WorkoutLog) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !is_present(&workout.workout_type) {
        errors.insert(FieldKey::WorkoutType, MSG_WORKOUT_TYPE);
    }
    if !is_present(&workout.custom_title) {
        errors.insert(FieldKey::CustomTitle, MSG_TITLE);
    }
    if parse_positive(&workout.duration_minutes).is_none() {
        errors.insert(FieldKey::Duration, MSG_DURATION);
    }

    for (i, exercise) in workout.exercises.iter().enumerate() {
        if !is_present(&exercise.name) {
            errors.insert(FieldKey::ExerciseName(i), MSG_EXERCISE_NAME);
        }
        if !optional_positive_ok(&exercise.sets) {
            errors.insert(FieldKey::ExerciseSets(i), MSG_POSITIVE);
        }
        if !optional_positive_ok(&exercise.reps) {
            errors.insert(FieldKey::ExerciseReps(i), MSG_POSITIVE);
        }
        if !optional_positive_ok(&exercise.weight) {
            errors.insert(FieldKey::ExerciseWeight(i), MSG_POSITIVE);
        }
    }

    errors
}

/// Checks a profile candidate. Every field is optional.
pub fn validate_profile(profile: &UserProfile) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_present(&profile.age) {
        let in_range = parse_number(&profile.age).is_some_and(|age| (0.0..=MAX_AGE).contains(&age));
        if !in_range {
            errors.insert(FieldKey::Age, MSG_AGE);
        }
    }
    if !optional_positive_ok(&profile.weight) {
        errors.insert(FieldKey::Weight, MSG_WEIGHT);
    }

    let stats = [
        (FieldKey::Bench, &profile.prs.bench),
        (FieldKey::Squat, &profile.prs.squat),
        (FieldKey::Deadlift, &profile.prs.deadlift),
        (FieldKey::Treadmill, &profile.cardio.treadmill_distance),
        (FieldKey::Stairs, &profile.cardio.stair_master_flights),
    ];
    for (key, raw) in stats {
        if !optional_positive_ok(raw) {
            errors.insert(key, MSG_POSITIVE);
        }
    }

    errors
}
