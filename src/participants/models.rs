use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// Enrollment joined with the user's profile, as rendered in participant lists.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct ParticipantProfile {
    pub user_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub joined_at: NaiveDateTime,
}
