use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::leaderboard::models::ScoringRules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub total_count_enabled: bool,
    pub record_size_enabled: bool,
    pub top_n_biggest: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCompetition {
    pub name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub total_count_enabled: bool,
    pub record_size_enabled: bool,
    pub top_n_biggest: Option<i32>,
}

impl Competition {
    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            total_count_enabled: self.total_count_enabled,
            record_size_enabled: self.record_size_enabled,
            top_n_biggest: self.top_n_biggest.map(|n| n as u32),
        }
    }

    /// Catches may only be logged while the competition is open.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.starts_at <= at && at <= self.ends_at
    }
}
