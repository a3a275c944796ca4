use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One logged catch. `fish_count` can cover several fish caught at once;
/// `size_cm` is present only when an individual fish was measured.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct CatchRecord {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub participant_id: Uuid,
    pub fish_count: i32,
    pub size_cm: Option<f32>,
    pub lure: Option<String>,
    pub photo_url: Option<String>,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCatch {
    pub participant_id: Uuid,
    pub fish_count: i32,
    pub size_cm: Option<f32>,
    pub lure: Option<String>,
    pub photo_url: Option<String>,
    pub recorded_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct CatchWithAngler {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub participant_id: Uuid,
    pub fish_count: i32,
    pub size_cm: Option<f32>,
    pub lure: Option<String>,
    pub photo_url: Option<String>,
    pub recorded_at: NaiveDateTime,

    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// Catches submitted together (same angler, same timestamp), sharing a photo.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaptureSession {
    pub participant_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub recorded_at: NaiveDateTime,
    pub photo_url: Option<String>,
    pub catches: Vec<CatchRecord>,
}
