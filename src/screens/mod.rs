// src/screens/mod.rs
mod log_workout;
mod profile;

pub use log_workout::LogWorkoutScreen;
pub use profile::ProfileScreen;

/// Where a form screen sits in its save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Editing,
    /// A save just succeeded and the confirmation is up.
    Saved,
}
