// src/profile.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Km,
}

/// The three tracked barbell lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Lift {
    Bench,
    Squat,
    Deadlift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardioField {
    TreadmillDistance,
    StairMasterFlights,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalRecords {
    pub bench: String,
    pub squat: String,
    pub deadlift: String,
}

impl PersonalRecords {
    pub fn get(&self, lift: Lift) -> &str {
        match lift {
            Lift::Bench => &self.bench,
            Lift::Squat => &self.squat,
            Lift::Deadlift => &self.deadlift,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cardio {
    pub treadmill_distance: String,
    pub treadmill_unit: DistanceUnit,
    pub stair_master_flights: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub prs: PersonalRecords,
    pub cardio: Cardio,
    pub favorite_gym: String,
    pub social_link: String,
}

impl UserProfile {
    /// An empty profile using the given display units.
    pub fn with_units(weight_unit: WeightUnit, treadmill_unit: DistanceUnit) -> Self {
        Self {
            weight_unit,
            cardio: Cardio {
                treadmill_unit,
                ..Cardio::default()
            },
            ..Self::default()
        }
    }

    pub fn set_pr(&mut self, lift: Lift, value: impl Into<String>) {
        let value = value.into();
        match lift {
            Lift::Bench => self.prs.bench = value,
            Lift::Squat => self.prs.squat = value,
            Lift::Deadlift => self.prs.deadlift = value,
        }
    }

    pub fn set_cardio(&mut self, field: CardioField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CardioField::TreadmillDistance => self.cardio.treadmill_distance = value,
            CardioField::StairMasterFlights => self.cardio.stair_master_flights = value,
        }
    }
}
