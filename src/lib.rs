// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
pub mod auth;
mod config;
pub mod feedback;
pub mod media;
pub mod memory;
pub mod profile;
pub mod screens;
pub mod sink;
pub mod social;
pub mod validation;
pub mod workout;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util, load_config as load_config_util, parse_color,
    save_config as save_config_util, Config, Error as ConfigError, StandardColor, Theme,
    DEFAULT_SAVED_FEEDBACK_MS,
};

pub use auth::{AuthError, AuthProvider, Credentials, InMemoryAuth, LoginScreen, Session};
pub use media::{LocalPreviewStore, MediaError, PreviewStore, PreviewUrl, VideoFile};
pub use memory::{generate_memory, MemoryError, MemoryItem};
pub use profile::{CardioField, DistanceUnit, Lift, UserProfile, WeightUnit};
pub use screens::{LogWorkoutScreen, ProfileScreen, ScreenState};
pub use sink::{LogSink, RecordingSink, Submission, SubmissionSink};
pub use validation::{validate_profile, validate_workout, FieldKey, ValidationErrors};
pub use workout::{Exercise, ExerciseField, ExerciseList, WorkoutLog, WorkoutType, WorkoutTypeChoice};

pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if the config path cannot be determined or the file cannot be loaded.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        Self::with_config_path(config_path)
    }

    /// Loads (or creates) the config at an explicit path.
    /// # Errors
    /// Returns `anyhow::Error` if the file cannot be read, parsed or created.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self> {
        let config = config::load_config(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        Ok(Self {
            config,
            config_path,
        })
    }

    #[must_use]
    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// # Errors
    /// Returns `anyhow::Error` if the config file cannot be written.
    pub fn save_config(&self) -> Result<()> {
        config::save_config(&self.config_path, &self.config)
            .with_context(|| format!("Failed to save config to {:?}", self.config_path))
    }

    /// Sets the default units for new profile screens and persists them.
    /// # Errors
    /// Returns `anyhow::Error` if the config file cannot be written.
    pub fn set_units(&mut self, weight: Option<WeightUnit>, distance: Option<DistanceUnit>) -> Result<()> {
        if let Some(unit) = weight {
            self.config.weight_unit = unit;
        }
        if let Some(unit) = distance {
            self.config.distance_unit = unit;
        }
        self.save_config()
    }

    pub fn log_workout_screen(&self) -> LogWorkoutScreen {
        LogWorkoutScreen::new(self.config.saved_feedback_delay())
    }

    /// Same as [`AppService::log_workout_screen`] but with a caller-chosen sink.
    pub fn log_workout_screen_with<S: SubmissionSink>(&self, sink: S) -> LogWorkoutScreen<S> {
        LogWorkoutScreen::with_sink(self.config.saved_feedback_delay(), sink)
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        self.profile_screen_with(LogSink, LocalPreviewStore::new())
    }

    pub fn profile_screen_with<S: SubmissionSink, P: PreviewStore>(
        &self,
        sink: S,
        previews: P,
    ) -> ProfileScreen<S, P> {
        ProfileScreen::with_parts(
            self.config.saved_feedback_delay(),
            self.config.weight_unit,
            self.config.distance_unit,
            sink,
            previews,
        )
    }
}
