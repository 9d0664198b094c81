use anyhow::Result;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use pumppal_lib::auth::{sign_out_quietly, LoginMode};
use pumppal_lib::memory::{has_stats, stat_fragments, MEMORY_TITLE};
use pumppal_lib::social::{
    exercise_line, format_followers, initials_from_email, preview_exercises, username_from_email,
    CompletedExercise, Feed, FollowState, Post,
};
use pumppal_lib::validation::{MSG_AGE, MSG_DURATION, MSG_EXERCISE_NAME, MSG_POSITIVE, MSG_TITLE, MSG_WORKOUT_TYPE};
use pumppal_lib::{
    generate_memory, validate_profile, validate_workout, AppService, AuthError, AuthProvider,
    CardioField, Config, ConfigError, Credentials, DistanceUnit, Exercise, ExerciseField,
    ExerciseList, FieldKey, InMemoryAuth, Lift, LocalPreviewStore, LoginScreen, LogWorkoutScreen,
    MediaError, MemoryError, ProfileScreen, RecordingSink, ScreenState, Session, Submission,
    UserProfile, VideoFile, WeightUnit, WorkoutLog, WorkoutType, WorkoutTypeChoice,
};

const DELAY: Duration = Duration::from_millis(2500);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn create_workout_screen() -> LogWorkoutScreen<RecordingSink> {
    LogWorkoutScreen::with_sink(DELAY, RecordingSink::default())
}

fn create_profile_screen() -> (ProfileScreen<RecordingSink>, LocalPreviewStore) {
    let previews = LocalPreviewStore::new();
    let screen = ProfileScreen::with_parts(
        DELAY,
        WeightUnit::Lbs,
        DistanceUnit::Miles,
        RecordingSink::default(),
        previews.clone(),
    );
    (screen, previews)
}

// Fills the screen with the "Heavy Push Day" example.
fn fill_push_day(screen: &mut LogWorkoutScreen<RecordingSink>) {
    screen.select_type(WorkoutType::Push);
    screen.custom_title = "Heavy Push Day".to_string();
    screen.duration_minutes = "60".to_string();
    let id = screen.add_exercise();
    screen.update_exercise(id, ExerciseField::Name, "Bench Press");
    screen.update_exercise(id, ExerciseField::Sets, "4");
    screen.update_exercise(id, ExerciseField::Reps, "8");
    screen.update_exercise(id, ExerciseField::Weight, "135");
}

fn workout_with(workout_type: &str, title: &str, duration: &str) -> WorkoutLog {
    WorkoutLog {
        workout_type: workout_type.to_string(),
        custom_title: title.to_string(),
        duration_minutes: duration.to_string(),
        ..Default::default()
    }
}

// --- Validator ---

#[test]
fn test_workout_requires_type_title_and_duration() {
    let errors = validate_workout(&WorkoutLog::default());
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(FieldKey::WorkoutType), Some(MSG_WORKOUT_TYPE));
    assert_eq!(errors.get(FieldKey::CustomTitle), Some(MSG_TITLE));
    assert_eq!(errors.get(FieldKey::Duration), Some(MSG_DURATION));

    assert!(validate_workout(&workout_with("Push", "Day", "45")).is_empty());
}

#[test]
fn test_workout_title_is_trimmed() {
    let errors = validate_workout(&workout_with("Legs", "   ", "30"));
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(FieldKey::CustomTitle));
}

#[test]
fn test_duration_must_be_positive_number() {
    for bad in ["0", "-5", "abc", "", "  ", "NaN", "inf"] {
        let errors = validate_workout(&workout_with("Pull", "Rows", bad));
        assert!(errors.contains(FieldKey::Duration), "duration {bad:?} should be rejected");
    }
    for good in ["1", "42.5", " 60 "] {
        let errors = validate_workout(&workout_with("Pull", "Rows", good));
        assert!(errors.is_empty(), "duration {good:?} should pass");
    }
}

#[test]
fn test_exercise_errors_keyed_by_index() {
    let mut workout = workout_with("Arms", "Arm day", "40");
    let mut curl = Exercise::empty();
    curl.name = "Curl".to_string();
    let mut blank = Exercise::empty();
    blank.sets = "0".to_string();
    blank.reps = "x".to_string();
    blank.weight = "-10".to_string();
    workout.exercises = vec![curl, blank];

    let errors = validate_workout(&workout);
    assert!(!errors.contains(FieldKey::ExerciseName(0)));
    assert_eq!(errors.get(FieldKey::ExerciseName(1)), Some(MSG_EXERCISE_NAME));
    assert_eq!(errors.get(FieldKey::ExerciseSets(1)), Some(MSG_POSITIVE));
    assert_eq!(errors.get(FieldKey::ExerciseReps(1)), Some(MSG_POSITIVE));
    assert_eq!(errors.get(FieldKey::ExerciseWeight(1)), Some(MSG_POSITIVE));
    assert_eq!(errors.len(), 4);
}

#[test]
fn test_field_keys_render_like_form_ids() {
    assert_eq!(FieldKey::WorkoutType.to_string(), "workoutType");
    assert_eq!(FieldKey::CustomTitle.to_string(), "customTitle");
    assert_eq!(FieldKey::Duration.to_string(), "duration");
    assert_eq!(FieldKey::ExerciseName(3).to_string(), "ex_name_3");
    assert_eq!(FieldKey::ExerciseWeight(0).to_string(), "ex_weight_0");
    assert_eq!(FieldKey::Treadmill.to_string(), "treadmill");
    assert_eq!(FieldKey::Stairs.to_string(), "stairs");
}

#[test]
fn test_profile_all_empty_is_valid() {
    assert!(validate_profile(&UserProfile::default()).is_empty());
}

#[test]
fn test_profile_age_bounds() {
    let mut profile = UserProfile::default();
    for (age, ok) in [("0", true), ("120", true), ("35", true), ("121", false), ("-1", false), ("old", false)] {
        profile.age = age.to_string();
        let errors = validate_profile(&profile);
        assert_eq!(errors.is_empty(), ok, "age {age:?}");
        if !ok {
            assert_eq!(errors.get(FieldKey::Age), Some(MSG_AGE));
        }
    }
}

#[test]
fn test_profile_stats_must_be_positive() {
    let mut profile = UserProfile::default();
    profile.weight = "0".to_string();
    profile.set_pr(Lift::Bench, "-225");
    profile.set_pr(Lift::Squat, "315");
    profile.set_pr(Lift::Deadlift, "heavy");
    profile.set_cardio(CardioField::TreadmillDistance, "0");
    profile.set_cardio(CardioField::StairMasterFlights, "20");

    let errors = validate_profile(&profile);
    let keys: Vec<FieldKey> = errors.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![FieldKey::Weight, FieldKey::Bench, FieldKey::Deadlift, FieldKey::Treadmill]
    );
}

// --- List editor ---

#[test]
fn test_remove_keeps_relative_order() {
    let mut list = ExerciseList::new();
    let ids: Vec<_> = (0..5).map(|_| list.add()).collect();
    for (i, id) in ids.iter().enumerate() {
        list.update(*id, ExerciseField::Name, format!("Exercise {i}"));
    }

    assert!(list.remove(ids[2]));
    assert_eq!(list.len(), 4);
    assert!(list.get(ids[2]).is_none());
    let remaining: Vec<_> = list.as_slice().iter().map(|ex| ex.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[1], ids[3], ids[4]]);
}

#[test]
fn test_unknown_id_is_noop() {
    let mut list = ExerciseList::new();
    let id = list.add();
    let stranger = Exercise::empty().id;

    assert!(!list.update(stranger, ExerciseField::Name, "Squat"));
    assert!(!list.remove(stranger));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(id).unwrap().name, "");
}

#[test]
fn test_update_touches_only_named_field() {
    let mut list = ExerciseList::new();
    let first = list.add();
    let second = list.add();
    list.update(second, ExerciseField::Reps, "12");

    assert_eq!(list.get(second).unwrap().reps, "12");
    assert_eq!(list.get(second).unwrap().sets, "");
    assert_eq!(list.get(first).unwrap().reps, "");
    assert_ne!(first, second);
}

// --- Log workout screen ---

#[test]
fn test_save_example_workout() -> Result<()> {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    let now = Instant::now();

    let saved = screen.save_at(now, today())?;
    assert_eq!(saved.workout_type, "Push");
    assert_eq!(saved.date, "Oct 16, 2026");
    assert!(!saved.id.is_empty());
    assert_eq!(saved.exercises.len(), 1);
    assert!(screen.errors().is_empty());
    assert_eq!(screen.state(), ScreenState::Saved);

    let submissions = &screen.sink().submissions;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0], Submission::Workout(saved));
    Ok(())
}

#[test]
fn test_invalid_save_blocks_and_keeps_editing() {
    let mut screen = create_workout_screen();
    screen.custom_title = "No type".to_string();

    let errors = screen.save_at(Instant::now(), today()).unwrap_err();
    assert!(errors.contains(FieldKey::WorkoutType));
    assert!(errors.contains(FieldKey::Duration));
    assert_eq!(screen.errors(), &errors);
    assert_eq!(screen.state(), ScreenState::Editing);
    assert!(screen.sink().submissions.is_empty());
}

#[test]
fn test_fixing_exercise_name_clears_its_error() {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    let second = screen.add_exercise();

    let errors = screen.save_at(Instant::now(), today()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(FieldKey::ExerciseName(1)));

    screen.update_exercise(second, ExerciseField::Name, "Dips");
    assert!(screen.save_at(Instant::now(), today()).is_ok());
    assert!(!screen.errors().contains(FieldKey::ExerciseName(1)));
}

#[test]
fn test_other_type_uses_free_text() {
    let mut screen = create_workout_screen();
    screen.custom_title = "Snatch work".to_string();
    screen.duration_minutes = "75".to_string();

    screen.select_type(WorkoutType::Other);
    assert_eq!(screen.workout_type(), &WorkoutTypeChoice::Other(String::new()));
    let errors = screen.save_at(Instant::now(), today()).unwrap_err();
    assert!(errors.contains(FieldKey::WorkoutType));

    screen.set_custom_type("Olympic Lifting");
    let saved = screen.save_at(Instant::now(), today()).unwrap();
    assert_eq!(saved.workout_type, "Olympic Lifting");

    // A preset closes the free-text entry again
    screen.select_type(WorkoutType::Legs);
    screen.set_custom_type("ignored");
    assert_eq!(screen.workout_type(), &WorkoutTypeChoice::Preset(WorkoutType::Legs));
}

#[test]
fn test_saved_flag_clears_after_delay() {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    let start = Instant::now();
    screen.save_at(start, today()).unwrap();

    assert!(!screen.tick(start + Duration::from_millis(2499)));
    assert_eq!(screen.state(), ScreenState::Saved);
    assert!(screen.tick(start + DELAY));
    assert_eq!(screen.state(), ScreenState::Editing);
    assert!(!screen.tick(start + DELAY * 2));
}

#[test]
fn test_second_save_reschedules_feedback() {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    let start = Instant::now();
    screen.save_at(start, today()).unwrap();
    let later = start + Duration::from_secs(2);
    screen.save_at(later, today()).unwrap();

    assert_eq!(screen.feedback().deadline(), Some(later + DELAY));
    assert!(!screen.tick(start + DELAY));
    assert_eq!(screen.state(), ScreenState::Saved);
    assert!(screen.tick(later + DELAY));
}

#[test]
fn test_reset_returns_to_blank_form() {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    screen.note = "Felt strong".to_string();
    screen.save_at(Instant::now(), today()).unwrap();
    screen.select_type(WorkoutType::Other);

    screen.reset();
    assert_eq!(screen.workout_type(), &WorkoutTypeChoice::Unselected);
    assert!(screen.custom_title.is_empty());
    assert!(screen.duration_minutes.is_empty());
    assert!(screen.note.is_empty());
    assert!(screen.exercises().is_empty());
    assert!(screen.errors().is_empty());
    assert_eq!(screen.state(), ScreenState::Editing);
    assert!(screen.feedback().deadline().is_none());
}

#[test]
fn test_unmount_cancels_feedback() {
    let mut screen = create_workout_screen();
    fill_push_day(&mut screen);
    screen.save_at(Instant::now(), today()).unwrap();
    let sink = screen.unmount();
    assert_eq!(sink.submissions.len(), 1);
}

// --- Profile screen & memories ---

#[test]
fn test_memory_refused_without_stats() {
    let (mut screen, _) = create_profile_screen();
    screen.toggle_memories();
    screen.set_name("Sam");
    screen.set_weight("180");

    let result = screen.generate_memory_on(today());
    assert_eq!(result.unwrap_err(), MemoryError::NoStats);
    assert!(screen.no_stats_warning());
    assert!(screen.memories().is_empty());
}

#[test]
fn test_memory_includes_only_populated_stats() -> Result<()> {
    let mut profile = UserProfile::default();
    profile.set_pr(Lift::Bench, "225");
    let item = generate_memory(&profile, today())?;

    assert!(item.message.contains("Bench 225"));
    assert!(!item.message.contains("Squat"));
    assert_eq!(item.message, "On this day: Bench 225 lbs.");
    assert_eq!(item.title, MEMORY_TITLE);
    assert_eq!(item.created_at, "10/16/2026");
    Ok(())
}

#[test]
fn test_memory_fragment_order_and_units() {
    let mut profile = UserProfile::with_units(WeightUnit::Kg, DistanceUnit::Km);
    profile.set_pr(Lift::Deadlift, "200");
    profile.set_pr(Lift::Squat, "160");
    profile.set_cardio(CardioField::TreadmillDistance, "5");
    profile.set_cardio(CardioField::StairMasterFlights, "30");

    assert!(has_stats(&profile));
    assert_eq!(
        stat_fragments(&profile),
        vec![
            "Squat 160 kg".to_string(),
            "Deadlift 200 kg".to_string(),
            "5 km on treadmill".to_string(),
            "30 StairMaster flights".to_string(),
        ]
    );
    let item = generate_memory(&profile, today()).unwrap();
    assert_eq!(
        item.message,
        "On this day: Squat 160 kg · Deadlift 200 kg · 5 km on treadmill · 30 StairMaster flights."
    );
}

#[test]
fn test_memories_prepend_newest_first() -> Result<()> {
    let (mut screen, _) = create_profile_screen();
    screen.toggle_memories();
    screen.set_pr(Lift::Bench, "200");
    let first = screen.generate_memory_on(today())?.id;
    screen.set_pr(Lift::Bench, "225");
    let second = screen.generate_memory_on(today())?.id;

    let ids: Vec<_> = screen.memories().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(screen.memories()[0].message.contains("Bench 225"));
    Ok(())
}

#[test]
fn test_memory_disabled_when_toggle_off() {
    let (mut screen, _) = create_profile_screen();
    screen.set_pr(Lift::Squat, "315");
    assert_eq!(screen.generate_memory_on(today()).unwrap_err(), MemoryError::Disabled);
    assert!(!screen.no_stats_warning());
    assert!(screen.memories().is_empty());
}

#[test]
fn test_profile_save_submits_and_validates() {
    let (mut screen, _) = create_profile_screen();
    screen.set_age("130");
    let errors = screen.save_at(Instant::now()).unwrap_err();
    assert!(errors.contains(FieldKey::Age));
    assert_eq!(screen.state(), ScreenState::Editing);

    screen.set_age("29");
    screen.set_favorite_gym("Gold's Gym, Venice");
    let saved = screen.save_at(Instant::now()).unwrap();
    assert_eq!(saved.favorite_gym, "Gold's Gym, Venice");
    assert!(screen.errors().is_empty());
    assert_eq!(screen.state(), ScreenState::Saved);
    assert_eq!(screen.sink().submissions, vec![Submission::Profile(saved)]);
}

#[test]
fn test_video_replacement_revokes_previous() -> Result<()> {
    let (mut screen, previews) = create_profile_screen();
    let first = screen.attach_video(&VideoFile::from_path("leg-day.mp4")?);
    let second = screen.attach_video(&VideoFile::from_path("pr.MOV")?);

    assert!(!previews.is_live(&first));
    assert!(previews.is_live(&second));
    assert_eq!(previews.live_count(), 1);

    screen.remove_video();
    assert!(screen.video().is_none());
    assert_eq!(previews.live_count(), 0);
    Ok(())
}

#[test]
fn test_unsupported_video_rejected() {
    let err = VideoFile::from_path("notes.txt").unwrap_err();
    assert!(matches!(err, MediaError::UnsupportedFormat(_)));
    assert!(VideoFile::from_path("clip").is_err());
    assert_eq!(VideoFile::from_path("clip.webm").unwrap().format.mime_type(), "video/webm");
}

#[test]
fn test_profile_reset_clears_everything() -> Result<()> {
    let (mut screen, previews) = create_profile_screen();
    screen.set_name("Sam");
    screen.set_weight_unit(WeightUnit::Kg);
    screen.set_pr(Lift::Bench, "100");
    screen.toggle_memories();
    screen.generate_memory_on(today())?;
    screen.attach_video(&VideoFile::from_path("reel.webm")?);
    screen.save_at(Instant::now()).unwrap();

    screen.reset();
    assert_eq!(screen.profile(), &UserProfile::with_units(WeightUnit::Lbs, DistanceUnit::Miles));
    assert!(screen.errors().is_empty());
    assert!(screen.memories().is_empty());
    assert!(!screen.memories_enabled());
    assert!(!screen.no_stats_warning());
    assert!(screen.video().is_none());
    assert_eq!(screen.state(), ScreenState::Editing);
    assert_eq!(previews.live_count(), 0);
    Ok(())
}

#[test]
fn test_dropping_profile_screen_releases_video() -> Result<()> {
    let (mut screen, previews) = create_profile_screen();
    screen.attach_video(&VideoFile::from_path("reel.mp4")?);
    assert_eq!(previews.live_count(), 1);
    drop(screen);
    assert_eq!(previews.live_count(), 0);
    Ok(())
}

// --- Auth ---

#[test]
fn test_sign_up_then_sign_in() -> Result<()> {
    let mut auth = InMemoryAuth::new();
    let created = auth.sign_up(&Credentials::new("Lifter@Example.com", "hunter22"))?;
    assert_eq!(created.email, "lifter@example.com");

    auth.sign_out()?;
    assert!(auth.current_session().is_none());

    let session = auth.sign_in(&Credentials::new("lifter@example.com", "hunter22"))?;
    assert_eq!(session.uid, created.uid);
    assert_eq!(auth.current_session(), Some(session));
    Ok(())
}

#[test]
fn test_sign_up_rejections() -> Result<()> {
    let mut auth = InMemoryAuth::new();
    assert!(matches!(
        auth.sign_up(&Credentials::new("not-an-email", "hunter22")),
        Err(AuthError::InvalidEmail(_))
    ));
    assert_eq!(
        auth.sign_up(&Credentials::new("a@b.co", "123")),
        Err(AuthError::WeakPassword)
    );
    auth.sign_up(&Credentials::new("a@b.co", "123456"))?;
    assert!(matches!(
        auth.sign_up(&Credentials::new("A@B.co", "abcdef")),
        Err(AuthError::EmailInUse(_))
    ));
    assert_eq!(
        auth.sign_in(&Credentials::new("a@b.co", "wrong!")),
        Err(AuthError::InvalidCredentials)
    );
    Ok(())
}

#[test]
fn test_session_listener_sees_changes() -> Result<()> {
    let mut auth = InMemoryAuth::new();
    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let log = Rc::clone(&seen);
    let sub = auth.on_session_change(Box::new(move |session: Option<&Session>| {
        log.borrow_mut().push(session.map(|s| s.email.clone()));
    }));

    auth.sign_up(&Credentials::new("coach@gym.io", "deadlift"))?;
    assert!(sign_out_quietly(&mut auth));
    auth.unsubscribe(sub);
    auth.sign_in(&Credentials::new("coach@gym.io", "deadlift"))?;

    assert_eq!(
        *seen.borrow(),
        vec![None, Some("coach@gym.io".to_string()), None]
    );
    Ok(())
}

#[test]
fn test_login_screen_surfaces_error_text() {
    let mut auth = InMemoryAuth::new();
    let mut login = LoginScreen::new();
    login.email = "new@pumppal.app".to_string();
    login.password = "squats!".to_string();

    assert!(login.submit(&mut auth).is_none());
    assert_eq!(login.error(), Some("Invalid email or password."));

    login.toggle_mode();
    assert_eq!(login.mode(), LoginMode::SignUp);
    let session = login.submit(&mut auth);
    assert!(session.is_some());
    assert!(login.error().is_none());
}

// --- Social helpers ---

fn post(id: u64, likes: u32, liked: bool) -> Post {
    Post {
        id,
        username: "alex_lifts".to_string(),
        user_initials: "AL".to_string(),
        time_ago: "2h ago".to_string(),
        image: None,
        caption: "Crushed leg day!".to_string(),
        muscle_groups: vec!["Legs".to_string()],
        likes,
        comments: 0,
        liked,
    }
}

#[test]
fn test_toggle_like_moves_count() {
    let mut feed = Feed::new(vec![post(1, 24, false), post(2, 42, true)]);
    assert!(feed.toggle_like(1));
    assert!(feed.toggle_like(2));
    assert!(!feed.toggle_like(99));

    assert_eq!((feed.posts[0].likes, feed.posts[0].liked), (25, true));
    assert_eq!((feed.posts[1].likes, feed.posts[1].liked), (41, false));
}

#[test]
fn test_follow_toggle() {
    let mut follow = FollowState::default();
    follow.toggle();
    assert_eq!(follow, FollowState { following: true, followers: 1 });
    follow.toggle();
    assert_eq!(follow, FollowState { following: false, followers: 0 });
}

#[test]
fn test_profile_display_helpers() {
    assert_eq!(format_followers(950), "950");
    assert_eq!(format_followers(1000), "1K");
    assert_eq!(format_followers(1200), "1.2K");
    assert_eq!(format_followers(1250), "1.3K");
    assert_eq!(format_followers(2250), "2.3K");
    assert_eq!(format_followers(1049), "1K");
    assert_eq!(format_followers(10_500), "10.5K");
    assert_eq!(initials_from_email(Some("jen@fit.com")), "JE");
    assert_eq!(initials_from_email(None), "U");
    assert_eq!(username_from_email(Some("jen@fit.com")), "jen");
    assert_eq!(username_from_email(None), "User");
}

#[test]
fn test_workout_card_lines() {
    let bench = CompletedExercise { name: "Bench".to_string(), sets: 4, reps: 8, weight: 135.0 };
    let pullups = CompletedExercise { name: "Pull-ups".to_string(), sets: 3, reps: 12, weight: 0.0 };
    assert_eq!(exercise_line(&bench, WeightUnit::Lbs), "4×8 @ 135lbs");
    assert_eq!(exercise_line(&pullups, WeightUnit::Kg), "3×12 BW");

    let all = vec![bench.clone(), pullups, bench];
    let (shown, hidden) = preview_exercises(&all, false);
    assert_eq!((shown.len(), hidden), (2, 1));
    let (shown, hidden) = preview_exercises(&all, true);
    assert_eq!((shown.len(), hidden), (3, 0));
}

// --- Config / service ---

#[test]
fn test_config_created_with_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    let service = AppService::with_config_path(path.clone())?;

    assert!(path.exists());
    assert_eq!(service.config, Config::default());
    assert_eq!(service.config.saved_feedback_delay(), DELAY);
    Ok(())
}

#[test]
fn test_set_units_persists_and_configures_screens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    let mut service = AppService::with_config_path(path.clone())?;
    service.set_units(Some(WeightUnit::Kg), Some(DistanceUnit::Km))?;

    let reloaded = AppService::with_config_path(path)?;
    assert_eq!(reloaded.config.weight_unit, WeightUnit::Kg);
    assert_eq!(reloaded.config.distance_unit, DistanceUnit::Km);

    let screen = reloaded.profile_screen_with(RecordingSink::default(), LocalPreviewStore::new());
    assert_eq!(screen.profile().weight_unit, WeightUnit::Kg);
    assert_eq!(screen.profile().cardio.treadmill_unit, DistanceUnit::Km);
    Ok(())
}

#[test]
fn test_partial_config_file_uses_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "saved_feedback_ms = 1000\n")?;

    let service = AppService::with_config_path(path)?;
    assert_eq!(service.config.saved_feedback_ms, 1000);
    assert_eq!(service.config.weight_unit, WeightUnit::Lbs);
    assert_eq!(service.config.theme.header_color, "Green");

    let screen = service.log_workout_screen_with(RecordingSink::default());
    assert_eq!(screen.feedback().delay(), Duration::from_millis(1000));
    Ok(())
}

#[test]
fn test_parse_color() {
    assert!(pumppal_lib::parse_color("darkcyan").is_ok());
    assert!(matches!(
        pumppal_lib::parse_color("chartreuse"),
        Err(ConfigError::InvalidColor(_))
    ));
}
