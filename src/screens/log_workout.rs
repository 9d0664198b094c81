// src/screens/log_workout.rs
use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::ScreenState;
use crate::feedback::SavedFeedback;
use crate::sink::{LogSink, Submission, SubmissionSink};
use crate::validation::{validate_workout, ValidationErrors};
use crate::workout::{
    Exercise, ExerciseField, ExerciseList, WorkoutLog, WorkoutType, WorkoutTypeChoice,
    WORKOUT_DATE_FORMAT,
};

/// Form state behind the "Log Workout" page.
#[derive(Debug)]
pub struct LogWorkoutScreen<S: SubmissionSink = LogSink> {
    workout_type: WorkoutTypeChoice,
    pub custom_title: String,
    pub duration_minutes: String,
    pub note: String,
    exercises: ExerciseList,
    errors: ValidationErrors,
    feedback: SavedFeedback,
    sink: S,
}

impl LogWorkoutScreen<LogSink> {
    pub fn new(feedback_delay: Duration) -> Self {
        Self::with_sink(feedback_delay, LogSink)
    }
}

impl<S: SubmissionSink> LogWorkoutScreen<S> {
    pub fn with_sink(feedback_delay: Duration, sink: S) -> Self {
        Self {
            workout_type: WorkoutTypeChoice::Unselected,
            custom_title: String::new(),
            duration_minutes: String::new(),
            note: String::new(),
            exercises: ExerciseList::new(),
            errors: ValidationErrors::new(),
            feedback: SavedFeedback::new(feedback_delay),
            sink,
        }
    }

    // --- Workout type ---

    /// Picking Other opens an empty free-text type; any preset closes it.
    pub fn select_type(&mut self, workout_type: WorkoutType) {
        self.workout_type = match workout_type {
            WorkoutType::Other => WorkoutTypeChoice::Other(String::new()),
            preset => WorkoutTypeChoice::Preset(preset),
        };
    }

    /// Edits the free-text type. Ignored unless Other is selected.
    pub fn set_custom_type(&mut self, text: impl Into<String>) {
        if let WorkoutTypeChoice::Other(current) = &mut self.workout_type {
            *current = text.into();
        }
    }

    pub fn workout_type(&self) -> &WorkoutTypeChoice {
        &self.workout_type
    }

    // --- Exercises ---

    pub fn add_exercise(&mut self) -> Uuid {
        self.exercises.add()
    }

    pub fn update_exercise(&mut self, id: Uuid, field: ExerciseField, value: impl Into<String>) {
        if !self.exercises.update(id, field, value) {
            log::debug!("Ignoring update for unknown exercise {id}");
        }
    }

    pub fn remove_exercise(&mut self, id: Uuid) {
        self.exercises.remove(id);
    }

    pub fn exercises(&self) -> &[Exercise] {
        self.exercises.as_slice()
    }

    // --- Status ---

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> ScreenState {
        if self.feedback.is_visible() {
            ScreenState::Saved
        } else {
            ScreenState::Editing
        }
    }

    pub fn feedback(&self) -> &SavedFeedback {
        &self.feedback
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The record a save would produce right now, without id or date.
    pub fn draft(&self) -> WorkoutLog {
        WorkoutLog {
            id: String::new(),
            date: String::new(),
            workout_type: self.workout_type.label(),
            custom_title: self.custom_title.clone(),
            duration_minutes: self.duration_minutes.clone(),
            exercises: self.exercises.as_slice().to_vec(),
            note: self.note.clone(),
        }
    }

    /// Saves using the wall clock.
    ///
    /// # Errors
    /// Returns the validation errors when the workout is incomplete.
    pub fn save(&mut self) -> Result<WorkoutLog, ValidationErrors> {
        self.save_at(Instant::now(), Local::now().date_naive())
    }

    /// Validates, submits, and raises the saved flag.
    ///
    /// # Errors
    /// Returns the validation errors when the workout is incomplete; the
    /// screen keeps them and stays in `Editing`.
    pub fn save_at(&mut self, now: Instant, today: NaiveDate) -> Result<WorkoutLog, ValidationErrors> {
        let full = WorkoutLog {
            id: Uuid::new_v4().to_string(),
            date: today.format(WORKOUT_DATE_FORMAT).to_string(),
            ..self.draft()
        };

        self.errors = validate_workout(&full);
        if !self.errors.is_empty() {
            log::debug!("Workout save blocked by {} error(s)", self.errors.len());
            return Err(self.errors.clone());
        }

        self.sink.submit(&Submission::Workout(full.clone()));
        self.feedback.show(now);
        Ok(full)
    }

    /// Drops the saved flag once its delay has passed. Returns true if it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.poll(now)
    }

    /// Back to a blank form.
    pub fn reset(&mut self) {
        self.workout_type = WorkoutTypeChoice::Unselected;
        self.custom_title.clear();
        self.duration_minutes.clear();
        self.note.clear();
        self.exercises.clear();
        self.errors.clear();
        self.feedback.cancel();
    }

    /// Tears the screen down, returning the sink.
    pub fn unmount(mut self) -> S {
        self.feedback.cancel();
        self.sink
    }
}
