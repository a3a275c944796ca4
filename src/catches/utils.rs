use std::collections::HashMap;

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::models::{CaptureSession, CatchRecord, CatchWithAngler, NewCatch};

pub const MIN_FISH_COUNT: i32 = 1;
pub const MAX_FISH_COUNT: i32 = 100;
pub const MAX_SIZE_CM: f32 = 200.0;

/// Write-path validation. The leaderboard aggregation assumes catches already
/// satisfy these bounds.
pub fn validate_new_catch(catch: &NewCatch) -> Result<(), String> {
    if catch.fish_count < MIN_FISH_COUNT || catch.fish_count > MAX_FISH_COUNT {
        return Err(format!(
            "fish_count must be between {} and {}, got {}",
            MIN_FISH_COUNT, MAX_FISH_COUNT, catch.fish_count
        ));
    }

    if let Some(size) = catch.size_cm {
        if !(size > 0.0 && size <= MAX_SIZE_CM) {
            return Err(format!(
                "size_cm must be greater than 0 and at most {}, got {}",
                MAX_SIZE_CM, size
            ));
        }
    }

    Ok(())
}

pub fn group_into_sessions(rows: Vec<CatchWithAngler>) -> Vec<CaptureSession> {
    let mut grouped: HashMap<(Uuid, NaiveDateTime), CaptureSession> = HashMap::new();

    for row in rows {
        let entry = grouped
            .entry((row.participant_id, row.recorded_at))
            .or_insert_with(|| CaptureSession {
                participant_id: row.participant_id,
                display_name: row.display_name.clone(),
                avatar_url: row.avatar_url.clone(),
                recorded_at: row.recorded_at,
                photo_url: None,
                catches: vec![],
            });

        if entry.photo_url.is_none() {
            entry.photo_url = row.photo_url.clone();
        }

        entry.catches.push(CatchRecord {
            id: row.id,
            competition_id: row.competition_id,
            participant_id: row.participant_id,
            fish_count: row.fish_count,
            size_cm: row.size_cm,
            lure: row.lure,
            photo_url: row.photo_url,
            recorded_at: row.recorded_at,
        });
    }

    let mut sessions: Vec<CaptureSession> = grouped.into_values().collect();

    sessions.sort_by(|a, b| {
        b.recorded_at
            .cmp(&a.recorded_at)
            .then(a.participant_id.cmp(&b.participant_id))
    });

    sessions
}
