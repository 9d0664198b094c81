// src/cli.rs
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pumppal_lib::{DistanceUnit, WeightUnit};

#[derive(Parser, Debug)]
#[command(author, version, about = "PumpPal: log workouts and build your lifting profile", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print tables as CSV instead
    #[arg(long, global = true)]
    pub export_csv: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and log a workout
    LogWorkout {
        /// Workout type (e.g. "Push", "Upper Body", "Other")
        #[arg(short = 't', long = "type")]
        workout_type: Option<String>,
        /// Free-text type, used when the type is "Other"
        #[arg(long)]
        custom_type: Option<String>,
        /// Workout title (e.g. "Heavy Push Day")
        #[arg(long)]
        title: Option<String>,
        /// Duration in minutes
        #[arg(short, long)]
        duration: Option<String>,
        /// Exercise as "name,sets,reps,weight"; trailing fields may be left out
        #[arg(short, long = "exercise", value_name = "EXERCISE")]
        exercises: Vec<String>,
        /// How did it go?
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Validate and save a profile, optionally generating a memory
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<String>,
        /// Bodyweight
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        weight_unit: Option<WeightUnit>,
        #[arg(long)]
        bench: Option<String>,
        #[arg(long)]
        squat: Option<String>,
        #[arg(long)]
        deadlift: Option<String>,
        /// Treadmill distance
        #[arg(long)]
        treadmill: Option<String>,
        #[arg(long)]
        treadmill_unit: Option<DistanceUnit>,
        /// StairMaster flights
        #[arg(long)]
        stairs: Option<String>,
        #[arg(long)]
        gym: Option<String>,
        #[arg(long)]
        social: Option<String>,
        /// Highlight reel (mp4 / mov / webm)
        #[arg(long)]
        video: Option<std::path::PathBuf>,
        /// Generate a snapshot memory from the stats
        #[arg(long)]
        memory: bool,
    },
    /// List the preset workout types
    WorkoutTypes,
    /// Set the default units for new profiles
    SetUnits {
        #[arg(long)]
        weight: Option<WeightUnit>,
        #[arg(long)]
        distance: Option<DistanceUnit>,
    },
    /// Show the path to the config file
    ConfigPath,
    /// Generate shell completion script
    GenerateCompletion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
