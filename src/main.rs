//src/main.rs
mod cli;

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{stdout, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;

use pumppal_lib::{
    AppService, CardioField, ExerciseField, Lift, LogWorkoutScreen, MemoryItem,
    UserProfile, ValidationErrors, VideoFile, WorkoutLog, WorkoutType,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli_args = cli::parse_args();
    let export_csv = cli_args.export_csv;

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command();
        let bin_name = cmd.get_name().to_string();
        eprintln!("Generating completion script for {shell}...");
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
        return Ok(());
    }

    let mut service = AppService::initialize().context("Failed to initialize application service")?;
    let header_color = service.config.header_color();

    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::LogWorkout {
            workout_type,
            custom_type,
            title,
            duration,
            exercises,
            note,
        } => {
            let mut screen = service.log_workout_screen();
            fill_workout_screen(&mut screen, workout_type, custom_type, title, duration, &exercises, note)?;

            match screen.save() {
                Ok(workout) => {
                    if export_csv {
                        print_workout_csv(&workout)?;
                    } else {
                        println!("✓ Workout logged! ({}, {})", workout.custom_title.trim(), workout.date);
                        print_workout_table(&workout, header_color);
                    }
                }
                Err(errors) => {
                    print_error_table(&errors);
                    bail!("Workout not logged: {} field(s) need attention.", errors.len());
                }
            }
        }
        cli::Commands::Profile {
            name,
            age,
            weight,
            weight_unit,
            bench,
            squat,
            deadlift,
            treadmill,
            treadmill_unit,
            stairs,
            gym,
            social,
            video,
            memory,
        } => {
            let mut screen = service.profile_screen();
            if let Some(v) = name { screen.set_name(v); }
            if let Some(v) = age { screen.set_age(v); }
            if let Some(v) = weight { screen.set_weight(v); }
            if let Some(u) = weight_unit { screen.set_weight_unit(u); }
            if let Some(v) = bench { screen.set_pr(Lift::Bench, v); }
            if let Some(v) = squat { screen.set_pr(Lift::Squat, v); }
            if let Some(v) = deadlift { screen.set_pr(Lift::Deadlift, v); }
            if let Some(v) = treadmill { screen.set_cardio(CardioField::TreadmillDistance, v); }
            if let Some(u) = treadmill_unit { screen.set_treadmill_unit(u); }
            if let Some(v) = stairs { screen.set_cardio(CardioField::StairMasterFlights, v); }
            if let Some(v) = gym { screen.set_favorite_gym(v); }
            if let Some(v) = social { screen.set_social_link(v); }
            if let Some(path) = video {
                let file = VideoFile::from_path(&path)?;
                let url = screen.attach_video(&file);
                println!("Highlight reel attached: {url} ({})", file.format.mime_type());
            }

            match screen.save() {
                Ok(profile) => {
                    println!("✓ Profile saved!");
                    print_profile_table(&profile, header_color);
                }
                Err(errors) => {
                    print_error_table(&errors);
                    bail!("Profile not saved: {} field(s) need attention.", errors.len());
                }
            }

            if memory {
                screen.toggle_memories();
                match screen.generate_memory() {
                    Ok(item) => print_memory(item),
                    Err(e) => println!("{e}"),
                }
            }
            screen.unmount();
        }
        cli::Commands::WorkoutTypes => {
            for workout_type in WorkoutType::iter() {
                println!("{workout_type}");
            }
        }
        cli::Commands::SetUnits { weight, distance } => {
            if weight.is_none() && distance.is_none() {
                bail!("Nothing to change. Pass --weight and/or --distance.");
            }
            service.set_units(weight, distance)?;
            println!(
                "Default units: weight {}, distance {}. Config updated: {:?}",
                service.config.weight_unit,
                service.config.distance_unit,
                service.get_config_path()
            );
        }
        cli::Commands::ConfigPath => {
            println!("{}", service.get_config_path().display());
        }
    }

    Ok(())
}

fn fill_workout_screen(
    screen: &mut LogWorkoutScreen,
    workout_type: Option<String>,
    custom_type: Option<String>,
    title: Option<String>,
    duration: Option<String>,
    exercises: &[String],
    note: Option<String>,
) -> Result<()> {
    if let Some(type_str) = workout_type {
        let parsed = WorkoutType::from_str(type_str.trim()).with_context(|| {
            format!("Unknown workout type '{type_str}'. Run 'workout-types' to see the list, or use 'Other'.")
        })?;
        screen.select_type(parsed);
    }
    if let Some(text) = custom_type {
        if !screen.workout_type().is_other() {
            bail!("--custom-type only applies when the type is 'Other'.");
        }
        screen.set_custom_type(text);
    }
    if let Some(t) = title {
        screen.custom_title = t;
    }
    if let Some(d) = duration {
        screen.duration_minutes = d;
    }
    if let Some(n) = note {
        screen.note = n;
    }

    for spec in exercises {
        let values = split_exercise_spec(spec)?;
        let id = screen.add_exercise();
        for (field, value) in values {
            screen.update_exercise(id, field, value);
        }
    }
    Ok(())
}

/// Pairs "name,sets,reps,weight" with its fields. Trailing fields may be left out.
fn split_exercise_spec(spec: &str) -> Result<Vec<(ExerciseField, &str)>> {
    const FIELDS: [ExerciseField; 4] = [
        ExerciseField::Name,
        ExerciseField::Sets,
        ExerciseField::Reps,
        ExerciseField::Weight,
    ];
    let values: Vec<&str> = spec.split(',').map(str::trim).collect();
    if values.len() > FIELDS.len() {
        bail!("Exercise '{spec}' has {} fields; expected at most name,sets,reps,weight.", values.len());
    }
    Ok(FIELDS.into_iter().zip(values).collect())
}

fn print_error_table(errors: &ValidationErrors) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").fg(Color::Red),
            Cell::new("Problem").fg(Color::Red),
        ]);
    for (key, message) in errors.iter() {
        table.add_row(vec![Cell::new(key), Cell::new(message)]);
    }
    eprintln!("{table}");
}

fn print_workout_table(workout: &WorkoutLog, header_color: Color) {
    println!(
        "{} · {} min{}",
        workout.workout_type,
        workout.duration_minutes.trim(),
        if workout.note.trim().is_empty() { String::new() } else { format!(" · {}", workout.note.trim()) }
    );
    if workout.exercises.is_empty() {
        println!("No exercises added.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(header_color),
            Cell::new("Exercise").fg(header_color),
            Cell::new("Sets").fg(header_color),
            Cell::new("Reps").fg(header_color),
            Cell::new("Weight").fg(header_color),
        ]);
    for (i, ex) in workout.exercises.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&ex.name).add_attribute(Attribute::Bold),
            Cell::new(dash_if_blank(&ex.sets)),
            Cell::new(dash_if_blank(&ex.reps)),
            Cell::new(dash_if_blank(&ex.weight)),
        ]);
    }
    println!("{table}");
}

fn print_workout_csv(workout: &WorkoutLog) -> Result<()> {
    write_workout_csv(workout, stdout())
}

/// One row per exercise; a workout without exercises still gets one row.
fn write_workout_csv<W: Write>(workout: &WorkoutLog, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Date", "Type", "Title", "Duration", "Exercise", "Sets", "Reps", "Weight"])?;
    let head = [
        workout.date.as_str(),
        workout.workout_type.as_str(),
        workout.custom_title.trim(),
        workout.duration_minutes.trim(),
    ];
    if workout.exercises.is_empty() {
        writer.write_record(head.into_iter().chain(["", "", "", ""]))?;
    }
    for ex in &workout.exercises {
        writer.write_record(head.into_iter().chain([
            ex.name.trim(),
            ex.sets.trim(),
            ex.reps.trim(),
            ex.weight.trim(),
        ]))?;
    }
    writer.flush()?;
    Ok(())
}

fn print_profile_table(profile: &UserProfile, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").fg(header_color),
            Cell::new("Value").fg(header_color),
        ]);
    let unit = profile.weight_unit.to_string();
    let rows = [
        ("Name", dash_if_blank(&profile.name)),
        ("Age", dash_if_blank(&profile.age)),
        ("Weight", with_unit(&profile.weight, &unit)),
        ("Bench", with_unit(&profile.prs.bench, &unit)),
        ("Squat", with_unit(&profile.prs.squat, &unit)),
        ("Deadlift", with_unit(&profile.prs.deadlift, &unit)),
        (
            "Treadmill",
            with_unit(&profile.cardio.treadmill_distance, &profile.cardio.treadmill_unit.to_string()),
        ),
        ("StairMaster", with_unit(&profile.cardio.stair_master_flights, "flights")),
        ("Favorite Gym", dash_if_blank(&profile.favorite_gym)),
        ("Socials", dash_if_blank(&profile.social_link)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
}

fn print_memory(item: &MemoryItem) {
    println!("{}", item.title);
    println!("{}", item.created_at);
    println!("{}", item.message);
}

fn dash_if_blank(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { "-".to_string() } else { trimmed.to_string() }
}

fn with_unit(value: &str, unit: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { "-".to_string() } else { format!("{trimmed} {unit}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumppal_lib::Exercise;

    fn leg_day() -> WorkoutLog {
        WorkoutLog {
            date: "Oct 16, 2026".to_string(),
            workout_type: "Legs".to_string(),
            custom_title: "Leg Day".to_string(),
            duration_minutes: "50".to_string(),
            ..Default::default()
        }
    }

    fn csv_lines(workout: &WorkoutLog) -> Vec<String> {
        let mut buf = Vec::new();
        write_workout_csv(workout, &mut buf).unwrap();
        String::from_utf8(buf).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_exercise_spec_allows_missing_trailing_fields() {
        let values = split_exercise_spec("Row, 3").unwrap();
        assert_eq!(values, vec![(ExerciseField::Name, "Row"), (ExerciseField::Sets, "3")]);

        let full = split_exercise_spec("Row,3,10,95").unwrap();
        assert_eq!(full.len(), 4);
        assert_eq!(full[3], (ExerciseField::Weight, "95"));
    }

    #[test]
    fn test_exercise_spec_rejects_extra_fields() {
        let err = split_exercise_spec("Row,3,10,95,extra").unwrap_err();
        assert!(err.to_string().contains("5 fields"));
    }

    #[test]
    fn test_csv_keeps_workout_without_exercises() {
        let lines = csv_lines(&leg_day());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"Oct 16, 2026\",Legs,Leg Day,50,,,,");
    }

    #[test]
    fn test_csv_writes_one_row_per_exercise() {
        let mut workout = leg_day();
        let mut squat = Exercise::empty();
        squat.name = "Squat".to_string();
        squat.sets = "5".to_string();
        squat.reps = "5".to_string();
        squat.weight = "225".to_string();
        workout.exercises = vec![squat, Exercise::empty()];

        let lines = csv_lines(&workout);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\"Oct 16, 2026\",Legs,Leg Day,50,Squat,5,5,225");
        assert_eq!(lines[2], "\"Oct 16, 2026\",Legs,Leg Day,50,,,,");
    }
}
