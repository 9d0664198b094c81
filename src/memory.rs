// src/memory.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::profile::{Lift, UserProfile};
use crate::validation::parse_positive;

pub const MEMORY_TITLE: &str = "🏆 Snapshot Memory";
/// Format of `MemoryItem::created_at`, e.g. "10/16/2026".
pub const MEMORY_DATE_FORMAT: &str = "%-m/%-d/%Y";
const FRAGMENT_SEPARATOR: &str = " · ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Add stats to generate a memory.")]
    NoStats,
    #[error("Memories are turned off.")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryItem {
    pub id: Uuid,
    pub created_at: String,
    pub title: String,
    pub message: String,
}

/// True when at least one PR or cardio field holds a positive number.
pub fn has_stats(profile: &UserProfile) -> bool {
    stat_inputs(profile)
        .into_iter()
        .any(|raw| parse_positive(raw).is_some())
}

fn stat_inputs(profile: &UserProfile) -> [&str; 5] {
    [
        profile.prs.bench.as_str(),
        profile.prs.squat.as_str(),
        profile.prs.deadlift.as_str(),
        profile.cardio.treadmill_distance.as_str(),
        profile.cardio.stair_master_flights.as_str(),
    ]
}

/// Describes each populated stat, lifts first, then cardio.
pub fn stat_fragments(profile: &UserProfile) -> Vec<String> {
    let mut fragments = Vec::new();

    for lift in [Lift::Bench, Lift::Squat, Lift::Deadlift] {
        let raw = profile.prs.get(lift);
        if parse_positive(raw).is_some() {
            fragments.push(format!("{lift} {} {}", raw.trim(), profile.weight_unit));
        }
    }

    let treadmill = &profile.cardio.treadmill_distance;
    if parse_positive(treadmill).is_some() {
        fragments.push(format!(
            "{} {} on treadmill",
            treadmill.trim(),
            profile.cardio.treadmill_unit
        ));
    }
    let flights = &profile.cardio.stair_master_flights;
    if parse_positive(flights).is_some() {
        fragments.push(format!("{} StairMaster flights", flights.trim()));
    }

    fragments
}

/// Builds a snapshot memory of the profile's stats, dated `today`.
///
/// # Errors
/// Returns [`MemoryError::NoStats`] when no stat field holds a positive number.
pub fn generate_memory(profile: &UserProfile, today: NaiveDate) -> Result<MemoryItem, MemoryError> {
    if !has_stats(profile) {
        return Err(MemoryError::NoStats);
    }
    let fragments = stat_fragments(profile);
    Ok(MemoryItem {
        id: Uuid::new_v4(),
        created_at: today.format(MEMORY_DATE_FORMAT).to_string(),
        title: MEMORY_TITLE.to_string(),
        message: format!("On this day: {}.", fragments.join(FRAGMENT_SEPARATOR)),
    })
}
