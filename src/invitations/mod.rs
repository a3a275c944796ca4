pub mod models;

use actix_web::{post, web, HttpResponse, Responder};
use models::{AcceptInvitation, Invitation, NewInvitation, STATUS_ACCEPTED, STATUS_PENDING};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::competitions::models::Competition;
use crate::participants::utils::enroll;

#[utoipa::path(
    post,
    path = "/competitions/{competition_id}/invitations",
    params(
        ("competition_id" = String, description = "Competition ID")
    ),
    request_body = NewInvitation,
    responses(
        (status = 201, description = "Invitation recorded for email dispatch", body = Invitation, content_type = "application/json"),
        (status = 200, description = "A pending invitation for this email already exists", body = Invitation, content_type = "application/json"),
        (status = 400, description = "Invalid email format"),
        (status = 404, description = "Competition not found")
    )
)]
#[post("/competitions/{competition_id}/invitations")]
pub async fn create_invitation(
    path: web::Path<String>,
    p: web::Json<NewInvitation>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let competition_id = path.into_inner();

    if Uuid::parse_str(&competition_id).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let competition_id = Uuid::parse_str(&competition_id).unwrap();
    let payload = p.into_inner();

    if !ValidateEmail::validate_email(&payload.email) {
        return HttpResponse::BadRequest().body("Invalid email format");
    }

    let competition = sqlx::query_as::<_, Competition>("SELECT * FROM competitions WHERE id = $1")
        .bind(competition_id)
        .fetch_optional(db.get_ref())
        .await;

    match competition {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("Competition not found"),
        Err(e) => {
            error!("Error fetching competition {}: {}", competition_id, e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let existing = sqlx::query_as::<_, Invitation>(
        "SELECT * FROM invitations WHERE competition_id = $1 AND email = $2 AND status = $3",
    )
    .bind(competition_id)
    .bind(&payload.email)
    .bind(STATUS_PENDING)
    .fetch_optional(db.get_ref())
    .await;

    if let Ok(Some(invitation)) = existing {
        return HttpResponse::Ok().json(invitation);
    }

    match sqlx::query_as::<_, Invitation>(
        "INSERT INTO invitations (id, competition_id, email, token, invited_by, status, created_at) VALUES ($1, $2, $3, $4, $5, $6, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(competition_id)
    .bind(&payload.email)
    .bind(Uuid::new_v4())
    .bind(payload.invited_by)
    .bind(STATUS_PENDING)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(invitation) => HttpResponse::Created().json(invitation),
        Err(e) => {
            error!("Error creating invitation: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    post,
    path = "/invitations/{token}/accept",
    params(
        ("token" = String, description = "Invitation token from the email link")
    ),
    request_body = AcceptInvitation,
    responses(
        (status = 200, description = "Invitation accepted, user enrolled", body = Invitation, content_type = "application/json"),
        (status = 404, description = "Unknown invitation token")
    )
)]
#[post("/invitations/{token}/accept")]
pub async fn accept_invitation(
    path: web::Path<String>,
    p: web::Json<AcceptInvitation>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let token = path.into_inner();

    if Uuid::parse_str(&token).is_err() {
        return HttpResponse::BadRequest().finish();
    }

    let token = Uuid::parse_str(&token).unwrap();
    let payload = p.into_inner();

    let invitation = sqlx::query_as::<_, Invitation>("SELECT * FROM invitations WHERE token = $1")
        .bind(token)
        .fetch_optional(db.get_ref())
        .await;

    let invitation = match invitation {
        Ok(Some(invitation)) => invitation,
        Ok(None) => return HttpResponse::NotFound().body("Invitation not found"),
        Err(e) => {
            error!("Error fetching invitation: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let invitation = if invitation.status == STATUS_ACCEPTED {
        invitation
    } else {
        match sqlx::query_as::<_, Invitation>(
            "UPDATE invitations SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(STATUS_ACCEPTED)
        .bind(invitation.id)
        .fetch_one(db.get_ref())
        .await
        {
            Ok(invitation) => invitation,
            Err(e) => {
                error!("Error accepting invitation {}: {}", invitation.id, e);
                return HttpResponse::InternalServerError().finish();
            }
        }
    };

    if let Err(e) = enroll(db.get_ref(), invitation.competition_id, payload.user_id).await {
        error!(
            "Error enrolling user {} in competition {}: {}",
            payload.user_id, invitation.competition_id, e
        );
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok().json(invitation)
}
