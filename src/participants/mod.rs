pub mod models;
pub mod utils;

use actix_web::{get, web, HttpResponse, Responder};
use models::ParticipantProfile;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/participants",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Enrolled participants in join order", body = [ParticipantProfile])
    )
)]
#[get("/competitions/{competition_id}/participants")]
pub async fn get_participants(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();

    match sqlx::query_as::<_, ParticipantProfile>(
        "SELECT p.user_id, u.display_name, u.avatar_url, p.joined_at FROM participants p INNER JOIN users u ON p.user_id = u.id WHERE p.competition_id = $1 ORDER BY p.joined_at ASC",
    )
    .bind(competition_id)
    .fetch_all(db.get_ref())
    .await
    {
        Ok(participants) => HttpResponse::Ok().json(participants),
        Err(e) => {
            error!(
                "Error fetching participants for competition {}: {}",
                competition_id, e
            );
            HttpResponse::InternalServerError().finish()
        }
    }
}
