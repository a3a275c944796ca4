pub mod models;
pub mod utils;

use std::collections::HashMap;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::NaiveDateTime;
use models::{CatchRow, LeaderboardEntry, Leaderboards, ScoringRules};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::competitions::models::Competition;

struct Tally {
    display_name: String,
    avatar_url: Option<String>,
    total_count: i64,
    sizes: Vec<f32>,
    first_recorded_at: NaiveDateTime,
}

/// Groups catches by participant and derives the three rankings: most fish,
/// biggest single fish, and sum of the N biggest fish.
///
/// Every record counts towards `total_count`; only measured catches feed the
/// two size rankings, and a participant without any measured catch is absent
/// from them rather than ranked at zero. Disabled categories come back empty.
/// Ties are broken by the participant's earliest catch, then by participant
/// id, so the output depends neither on input order nor on map iteration
/// order.
pub fn compute_leaderboards(records: &[CatchRow], rules: &ScoringRules) -> Leaderboards {
    let mut tallies: HashMap<Uuid, Tally> = HashMap::new();

    for record in records {
        let tally = tallies
            .entry(record.participant_id)
            .or_insert_with(|| Tally {
                display_name: record.display_name.clone(),
                avatar_url: record.avatar_url.clone(),
                total_count: 0,
                sizes: Vec::new(),
                first_recorded_at: record.recorded_at,
            });

        tally.total_count += record.fish_count as i64;

        if let Some(size) = record.size_cm {
            tally.sizes.push(size);
        }

        if record.recorded_at < tally.first_recorded_at {
            tally.first_recorded_at = record.recorded_at;
        }
    }

    let top_n = rules.top_n_biggest.unwrap_or(0) as usize;
    let mut scored: Vec<(LeaderboardEntry, NaiveDateTime)> = Vec::with_capacity(tallies.len());

    for (participant_id, mut tally) in tallies {
        tally.sizes.sort_by(|a, b| b.total_cmp(a));

        let record_size = tally.sizes.first().copied();
        let top_n_detail: Vec<f32> = tally.sizes.iter().take(top_n).copied().collect();
        let top_n_sum = if top_n_detail.is_empty() {
            None
        } else {
            Some(top_n_detail.iter().sum())
        };

        scored.push((
            LeaderboardEntry {
                participant_id,
                display_name: tally.display_name,
                avatar_url: tally.avatar_url,
                total_count: tally.total_count,
                record_size,
                top_n_sum,
                top_n_detail,
            },
            tally.first_recorded_at,
        ));
    }

    let by_total_count = if rules.total_count_enabled {
        rank_by(&scored, |entry| {
            (entry.total_count > 0).then(|| entry.total_count as f64)
        })
    } else {
        Vec::new()
    };

    let by_record_size = if rules.record_size_enabled {
        rank_by(&scored, |entry| entry.record_size.map(f64::from))
    } else {
        Vec::new()
    };

    let by_top_n = if rules.top_n_biggest.is_some() {
        rank_by(&scored, |entry| entry.top_n_sum.map(f64::from))
    } else {
        Vec::new()
    };

    Leaderboards {
        by_total_count,
        by_record_size,
        by_top_n,
    }
}

fn rank_by<F>(scored: &[(LeaderboardEntry, NaiveDateTime)], metric: F) -> Vec<LeaderboardEntry>
where
    F: Fn(&LeaderboardEntry) -> Option<f64>,
{
    let mut entries: Vec<(&LeaderboardEntry, f64, &NaiveDateTime)> = scored
        .iter()
        .filter_map(|(entry, first)| metric(entry).map(|m| (entry, m, first)))
        .collect();

    entries.sort_by(|(a, a_metric, a_first), (b, b_metric, b_first)| {
        b_metric
            .total_cmp(a_metric)
            .then_with(|| a_first.cmp(b_first))
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });

    entries
        .into_iter()
        .map(|(entry, _, _)| entry.clone())
        .collect()
}

#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/leaderboard",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Rankings for the competition's enabled categories", body = Leaderboards, content_type = "application/json"),
        (status = 404, description = "Competition not found")
    )
)]
#[get("/competitions/{competition_id}/leaderboard")]
pub async fn get_leaderboard(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();

    let competition = sqlx::query_as::<_, Competition>("SELECT * FROM competitions WHERE id = $1")
        .bind(competition_id)
        .fetch_optional(db.get_ref())
        .await;

    let competition = match competition {
        Ok(Some(competition)) => competition,
        Ok(None) => return HttpResponse::NotFound().body("Competition not found"),
        Err(e) => {
            error!("Error fetching competition {}: {}", competition_id, e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let rows = sqlx::query_as::<_, CatchRow>(
        "SELECT c.id, c.participant_id, u.display_name, u.avatar_url, c.fish_count, c.size_cm, c.recorded_at FROM catches c INNER JOIN users u ON c.participant_id = u.id WHERE c.competition_id = $1 ORDER BY c.recorded_at ASC",
    )
    .bind(competition_id)
    .fetch_all(db.get_ref())
    .await;

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                "Error fetching catches for competition {}: {}",
                competition_id, e
            );
            return HttpResponse::InternalServerError().finish();
        }
    };

    let rules = competition.scoring_rules();

    HttpResponse::Ok().json(compute_leaderboards(&rows, &rules))
}
