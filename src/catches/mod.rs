pub mod models;
pub mod utils;

use std::collections::HashSet;

use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use models::{CaptureSession, CatchRecord, CatchWithAngler, NewCatch};
use sqlx::{PgPool, QueryBuilder};
use tracing::error;
use utils::{group_into_sessions, validate_new_catch};
use uuid::Uuid;

use crate::competitions::models::Competition;
use crate::participants::utils::is_enrolled;

#[utoipa::path(
    post,
    path = "/competitions/{competition_id}/catches",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    request_body(content = Vec<NewCatch>, description = "Catches from one capture session", content_type = "application/json"),
    responses(
        (status = 201, description = "Catches logged"),
        (status = 400, description = "Invalid catch fields or competition not open"),
        (status = 403, description = "Angler is not enrolled"),
        (status = 404, description = "Competition not found")
    )
)]
#[post("/competitions/{competition_id}/catches")]
pub async fn post_catches(
    path: web::Path<String>,
    items: web::Json<Vec<NewCatch>>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();
    let new_catches = items.into_inner();

    if new_catches.is_empty() {
        return HttpResponse::BadRequest().body("At least one catch is required");
    }

    for new_catch in &new_catches {
        if let Err(e) = validate_new_catch(new_catch) {
            return HttpResponse::BadRequest().body(e);
        }
    }

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

    let participant_ids: HashSet<Uuid> = new_catches.iter().map(|c| c.participant_id).collect();

    for participant_id in &participant_ids {
        match is_enrolled(db.get_ref(), competition_id, *participant_id).await {
            Ok(true) => {}
            Ok(false) => {
                return HttpResponse::Forbidden().body("Angler is not enrolled in this competition")
            }
            Err(e) => {
                error!("Error checking enrollment for {}: {}", participant_id, e);
                return HttpResponse::InternalServerError().finish();
            }
        }
    }

    // Records submitted without a timestamp share one, forming a session.
    let now = Utc::now().naive_utc();

    let records: Vec<CatchRecord> = new_catches
        .into_iter()
        .map(|c| CatchRecord {
            id: Uuid::new_v4(),
            competition_id,
            participant_id: c.participant_id,
            fish_count: c.fish_count,
            size_cm: c.size_cm,
            lure: c.lure,
            photo_url: c.photo_url,
            recorded_at: c.recorded_at.unwrap_or(now),
        })
        .collect();

    for record in &records {
        if !competition.is_open_at(record.recorded_at) {
            return HttpResponse::BadRequest()
                .body("Catches can only be logged during the competition period");
        }
    }

    let mut builder = QueryBuilder::new(
        "INSERT INTO catches (id, competition_id, participant_id, fish_count, size_cm, lure, photo_url, recorded_at) ",
    );

    builder.push_values(&records, |mut b, record| {
        b.push_bind(record.id)
            .push_bind(record.competition_id)
            .push_bind(record.participant_id)
            .push_bind(record.fish_count)
            .push_bind(record.size_cm)
            .push_bind(&record.lure)
            .push_bind(&record.photo_url)
            .push_bind(record.recorded_at);
    });

    match builder.build().execute(db.get_ref()).await {
        Ok(_) => HttpResponse::Created().finish(),
        Err(e) => {
            error!(
                "Error inserting catches for competition {}: {}",
                competition_id, e
            );
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/catches",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Catches grouped into capture sessions, newest first", body = [CaptureSession])
    )
)]
#[get("/competitions/{competition_id}/catches")]
pub async fn get_catches(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();

    let rows = sqlx::query_as::<_, CatchWithAngler>(
        "SELECT c.*, u.display_name, u.avatar_url FROM catches c INNER JOIN users u ON c.participant_id = u.id WHERE c.competition_id = $1 ORDER BY c.recorded_at DESC",
    )
    .bind(competition_id)
    .fetch_all(db.get_ref())
    .await;

    match rows {
        Ok(rows) => HttpResponse::Ok().json(group_into_sessions(rows)),
        Err(e) => {
            error!(
                "Error fetching catches for competition {}: {}",
                competition_id, e
            );
            HttpResponse::InternalServerError().finish()
        }
    }
}
