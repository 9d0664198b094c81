// src/sink.rs
use serde::Serialize;

use crate::profile::UserProfile;
use crate::workout::WorkoutLog;

/// A finalized record leaving a screen after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Submission {
    Workout(WorkoutLog),
    Profile(UserProfile),
}

impl Submission {
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Workout(_) => "Workout logged",
            Self::Profile(_) => "Profile saved",
        }
    }
}

/// Where saved records go.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission);
}

/// Writes each submission as JSON through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(json) => log::info!("[PumpPal] {}: {json}", submission.describe()),
            Err(e) => log::error!("[PumpPal] Failed to serialize submission: {e}"),
        }
    }
}

/// Keeps every submission in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub submissions: Vec<Submission>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, submission: &Submission) {
        self.submissions.push(submission.clone());
    }
}
