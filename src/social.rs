// src/social.rs
use crate::profile::WeightUnit;

/// Workout cards show this many exercises until expanded.
pub const EXERCISE_PREVIEW_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub user_initials: String,
    pub time_ago: String,
    pub image: Option<String>,
    pub caption: String,
    pub muscle_groups: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub liked: bool,
}

/// The home feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Flips the like on a post and moves its count with it. Unknown ids are ignored.
    pub fn toggle_like(&mut self, post_id: u64) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return false;
        };
        if post.liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.liked = !post.liked;
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowState {
    pub following: bool,
    pub followers: u64,
}

impl FollowState {
    pub fn toggle(&mut self) {
        self.following = !self.following;
        if self.following {
            self.followers += 1;
        } else {
            self.followers = self.followers.saturating_sub(1);
        }
    }
}

/// "950", "1.2K", "2K".
pub fn format_followers(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    // Tenths of a thousand, halves rounded up.
    let tenths = (n + 50) / 100;
    if tenths % 10 == 0 {
        format!("{}K", tenths / 10)
    } else {
        format!("{}.{}K", tenths / 10, tenths % 10)
    }
}

pub fn initials_from_email(email: Option<&str>) -> String {
    match email {
        Some(e) if !e.is_empty() => e.chars().take(2).collect::<String>().to_uppercase(),
        _ => "U".to_string(),
    }
}

pub fn username_from_email(email: Option<&str>) -> String {
    match email {
        Some(e) if !e.is_empty() => e.split('@').next().unwrap_or_default().to_string(),
        _ => "User".to_string(),
    }
}

/// A completed exercise as shown on a profile's workout card.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// "4×8 @ 135lbs", or "3×12 BW" for bodyweight work.
pub fn exercise_line(exercise: &CompletedExercise, unit: WeightUnit) -> String {
    if exercise.weight > 0.0 {
        format!(
            "{}×{} @ {}{unit}",
            exercise.sets, exercise.reps, exercise.weight
        )
    } else {
        format!("{}×{} BW", exercise.sets, exercise.reps)
    }
}

/// The exercises a workout card shows, and how many are hidden.
pub fn preview_exercises(exercises: &[CompletedExercise], expanded: bool) -> (&[CompletedExercise], usize) {
    if expanded || exercises.len() <= EXERCISE_PREVIEW_COUNT {
        (exercises, 0)
    } else {
        (
            &exercises[..EXERCISE_PREVIEW_COUNT],
            exercises.len() - EXERCISE_PREVIEW_COUNT,
        )
    }
}
