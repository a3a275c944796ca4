use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One catch joined with the submitting angler's profile, as fetched for a
/// leaderboard view.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct CatchRow {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub fish_count: i32,
    pub size_cm: Option<f32>,
    pub recorded_at: NaiveDateTime,
}

/// Per-competition toggles selecting which ranking categories are active.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScoringRules {
    pub total_count_enabled: bool,
    pub record_size_enabled: bool,
    pub top_n_biggest: Option<u32>,
}

/// One participant's line in a ranking. `record_size` and `top_n_sum` are
/// absent (never zero) for participants without a single measured catch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeaderboardEntry {
    pub participant_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub total_count: i64,
    pub record_size: Option<f32>,
    pub top_n_sum: Option<f32>,
    pub top_n_detail: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Leaderboards {
    pub by_total_count: Vec<LeaderboardEntry>,
    pub by_record_size: Vec<LeaderboardEntry>,
    pub by_top_n: Vec<LeaderboardEntry>,
}
