pub mod models;

use actix_web::{get, post, web, HttpResponse, Responder};
use models::{Competition, NewCompetition};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/competitions",
    request_body = NewCompetition,
    responses(
        (status = 201, description = "Competition created", body = Competition, content_type = "application/json"),
        (status = 400, description = "Invalid name, period or scoring rules")
    )
)]
#[post("/competitions")]
pub async fn create_competition(
    p: web::Json<NewCompetition>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let payload = p.into_inner();

    if payload.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Competition name must not be empty");
    }

    if payload.ends_at <= payload.starts_at {
        return HttpResponse::BadRequest().body("Competition must end after it starts");
    }

    if let Some(n) = payload.top_n_biggest {
        if n < 1 {
            return HttpResponse::BadRequest().body("top_n_biggest must be at least 1");
        }
    }

    match sqlx::query_as::<_, Competition>(
        "INSERT INTO competitions (id, name, description, created_by, starts_at, ends_at, total_count_enabled, record_size_enabled, top_n_biggest, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(payload.name.trim())
    .bind(&payload.description)
    .bind(payload.created_by)
    .bind(payload.starts_at)
    .bind(payload.ends_at)
    .bind(payload.total_count_enabled)
    .bind(payload.record_size_enabled)
    .bind(payload.top_n_biggest)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(competition) => HttpResponse::Created().json(competition),
        Err(e) => {
            error!("Error creating competition: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/competitions/{competition_id}",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Get competition from path", body = Competition, content_type = "application/json"),
        (status = 404, description = "Competition not found")
    )
)]
#[get("/competitions/{competition_id}")]
pub async fn get_competition(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();

    match sqlx::query_as::<_, Competition>("SELECT c.* FROM competitions c WHERE c.id = $1")
        .bind(competition_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(competition) => HttpResponse::Ok().json(competition),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Competition not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/competitions",
    params(
        ("user_id" = String, description = "User ID")
    ),
    responses(
        (status = 200, description = "Competitions the user participates in, newest first", body = [Competition])
    )
)]
#[get("/users/{user_id}/competitions")]
pub async fn get_user_competitions(
    path: web::Path<String>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let user_id = path.into_inner();

    if Uuid::parse_str(&user_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let user_id = Uuid::parse_str(&user_id).unwrap();

    match sqlx::query_as::<_, Competition>(
        "SELECT c.* FROM competitions c INNER JOIN participants p ON c.id = p.competition_id WHERE p.user_id = $1 ORDER BY c.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db.get_ref())
    .await
    {
        Ok(competitions) => HttpResponse::Ok().json(competitions),
        Err(e) => {
            error!("Error fetching competitions for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
