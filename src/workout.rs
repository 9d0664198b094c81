// src/workout.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Format of `WorkoutLog::date`, e.g. "Oct 16, 2026".
pub const WORKOUT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Preset workout categories, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum WorkoutType {
    Push,
    Pull,
    Legs,
    #[strum(serialize = "Upper Body")]
    UpperBody,
    #[strum(serialize = "Full Body")]
    FullBody,
    Cardio,
    Arms,
    #[strum(serialize = "Back & Bis")]
    BackAndBis,
    #[strum(serialize = "Chest & Tris")]
    ChestAndTris,
    /// Lets the user type their own category.
    Other,
}

/// What the workout-type picker currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkoutTypeChoice {
    #[default]
    Unselected,
    Preset(WorkoutType),
    Other(String),
}

impl WorkoutTypeChoice {
    /// The value stored on the finalized log. Blank when nothing usable is chosen.
    pub fn label(&self) -> String {
        match self {
            Self::Unselected => String::new(),
            Self::Preset(t) => t.to_string(),
            Self::Other(text) => text.clone(),
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl Exercise {
    /// A blank row with a fresh id.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            sets: String::new(),
            reps: String::new(),
            weight: String::new(),
        }
    }

    pub fn set(&mut self, field: ExerciseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ExerciseField::Name => self.name = value,
            ExerciseField::Sets => self.sets = value,
            ExerciseField::Reps => self.reps = value,
            ExerciseField::Weight => self.weight = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Name,
    Sets,
    Reps,
    Weight,
}

/// Ordered exercise rows addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseList {
    items: Vec<Exercise>,
}

impl ExerciseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank row and returns its id.
    pub fn add(&mut self) -> Uuid {
        let exercise = Exercise::empty();
        let id = exercise.id;
        self.items.push(exercise);
        id
    }

    /// Sets one field on the row with `id`. Returns false if no such row exists.
    pub fn update(&mut self, id: Uuid, field: ExerciseField, value: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|ex| ex.id == id) {
            Some(exercise) => {
                exercise.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Drops the row with `id`. Returns false if no such row exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|ex| ex.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&Exercise> {
        self.items.iter().find(|ex| ex.id == id)
    }

    pub fn as_slice(&self) -> &[Exercise] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// A workout as entered on the log screen. Numeric fields keep the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub date: String,
    pub workout_type: String,
    pub custom_title: String,
    pub duration_minutes: String,
    pub exercises: Vec<Exercise>,
    pub note: String,
}
