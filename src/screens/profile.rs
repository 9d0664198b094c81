// src/screens/profile.rs
use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};

use super::ScreenState;
use crate::feedback::SavedFeedback;
use crate::media::{LocalPreviewStore, PreviewStore, PreviewUrl, VideoFile, VideoSlot};
use crate::memory::{generate_memory, MemoryError, MemoryItem};
use crate::profile::{CardioField, DistanceUnit, Lift, UserProfile, WeightUnit};
use crate::sink::{LogSink, Submission, SubmissionSink};
use crate::validation::{validate_profile, ValidationErrors};

/// Form state behind the personal profile page.
#[derive(Debug)]
pub struct ProfileScreen<S: SubmissionSink = LogSink, P: PreviewStore = LocalPreviewStore> {
    profile: UserProfile,
    errors: ValidationErrors,
    feedback: SavedFeedback,
    memories_enabled: bool,
    memories: Vec<MemoryItem>,
    no_stats: bool,
    video: VideoSlot<P>,
    sink: S,
    // Units a reset returns to
    default_weight_unit: WeightUnit,
    default_distance_unit: DistanceUnit,
}

impl ProfileScreen<LogSink, LocalPreviewStore> {
    pub fn new(feedback_delay: Duration) -> Self {
        Self::with_parts(
            feedback_delay,
            WeightUnit::default(),
            DistanceUnit::default(),
            LogSink,
            LocalPreviewStore::new(),
        )
    }
}

impl<S: SubmissionSink, P: PreviewStore> ProfileScreen<S, P> {
    pub fn with_parts(
        feedback_delay: Duration,
        weight_unit: WeightUnit,
        distance_unit: DistanceUnit,
        sink: S,
        previews: P,
    ) -> Self {
        Self {
            profile: UserProfile::with_units(weight_unit, distance_unit),
            errors: ValidationErrors::new(),
            feedback: SavedFeedback::new(feedback_delay),
            memories_enabled: false,
            memories: Vec::new(),
            no_stats: false,
            video: VideoSlot::new(previews),
            sink,
            default_weight_unit: weight_unit,
            default_distance_unit: distance_unit,
        }
    }

    // --- Field edits ---

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.profile.name = value.into();
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.profile.age = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.profile.weight = value.into();
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.profile.weight_unit = unit;
    }

    pub fn set_pr(&mut self, lift: Lift, value: impl Into<String>) {
        self.profile.set_pr(lift, value);
    }

    pub fn set_cardio(&mut self, field: CardioField, value: impl Into<String>) {
        self.profile.set_cardio(field, value);
    }

    pub fn set_treadmill_unit(&mut self, unit: DistanceUnit) {
        self.profile.cardio.treadmill_unit = unit;
    }

    pub fn set_favorite_gym(&mut self, value: impl Into<String>) {
        self.profile.favorite_gym = value.into();
    }

    pub fn set_social_link(&mut self, value: impl Into<String>) {
        self.profile.social_link = value.into();
    }

    // --- Save cycle ---

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

    /// # Errors
    /// Returns the validation errors when a field is out of range.
    pub fn save(&mut self) -> Result<UserProfile, ValidationErrors> {
        self.save_at(Instant::now())
    }

    /// Validates, submits, and (re)arms the saved flag.
    ///
    /// # Errors
    /// Returns the validation errors when a field is out of range; the
    /// screen keeps them and stays in `Editing`.
    pub fn save_at(&mut self, now: Instant) -> Result<UserProfile, ValidationErrors> {
        self.errors = validate_profile(&self.profile);
        if !self.errors.is_empty() {
            log::debug!("Profile save blocked by {} error(s)", self.errors.len());
            return Err(self.errors.clone());
        }

        self.sink.submit(&Submission::Profile(self.profile.clone()));
        self.feedback.show(now);
        Ok(self.profile.clone())
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.poll(now)
    }

    // --- Video ---

    /// Replaces any held preview with one for `file`.
    pub fn attach_video(&mut self, file: &VideoFile) -> PreviewUrl {
        self.video.attach(file).clone()
    }

    pub fn remove_video(&mut self) {
        self.video.release();
    }

    pub fn video(&self) -> Option<&PreviewUrl> {
        self.video.current()
    }

    pub fn previews(&self) -> &P {
        self.video.store()
    }

    // --- Memories ---

    pub fn memories_enabled(&self) -> bool {
        self.memories_enabled
    }

    pub fn toggle_memories(&mut self) {
        self.memories_enabled = !self.memories_enabled;
    }

    /// Most recent first.
    pub fn memories(&self) -> &[MemoryItem] {
        &self.memories
    }

    /// True after a generate attempt found nothing to remember.
    pub fn no_stats_warning(&self) -> bool {
        self.no_stats
    }

    /// # Errors
    /// See [`ProfileScreen::generate_memory_on`].
    pub fn generate_memory(&mut self) -> Result<&MemoryItem, MemoryError> {
        self.generate_memory_on(Local::now().date_naive())
    }

    /// Snapshots the current stats into a new memory at the top of the list.
    ///
    /// # Errors
    /// [`MemoryError::Disabled`] while memories are toggled off;
    /// [`MemoryError::NoStats`] when no stat is filled in, which also raises
    /// the no-stats warning.
    pub fn generate_memory_on(&mut self, today: NaiveDate) -> Result<&MemoryItem, MemoryError> {
        if !self.memories_enabled {
            return Err(MemoryError::Disabled);
        }
        match generate_memory(&self.profile, today) {
            Ok(item) => {
                self.no_stats = false;
                self.memories.insert(0, item);
                Ok(&self.memories[0])
            }
            Err(e) => {
                log::warn!("Memory not generated: {e}");
                self.no_stats = matches!(e, MemoryError::NoStats);
                Err(e)
            }
        }
    }

    // --- Teardown ---

    /// Back to a blank profile. Releases the held video preview.
    pub fn reset(&mut self) {
        self.profile = UserProfile::with_units(self.default_weight_unit, self.default_distance_unit);
        self.errors.clear();
        self.feedback.cancel();
        self.memories.clear();
        self.no_stats = false;
        self.memories_enabled = false;
        self.video.release();
    }

    /// Cancels the pending feedback and releases the video preview.
    pub fn unmount(mut self) {
        self.feedback.cancel();
        self.video.release();
    }
}
