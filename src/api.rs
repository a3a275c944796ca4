use crate::catches::{
    self,
    models::{CaptureSession, CatchRecord, NewCatch},
};
use crate::competitions::{
    self,
    models::{Competition, NewCompetition},
};
use crate::invitations::{
    self,
    models::{AcceptInvitation, Invitation, NewInvitation},
};
use crate::leaderboard::{
    self,
    models::{LeaderboardEntry, Leaderboards, ScoringRules},
};
use crate::participants::{self, models::ParticipantProfile};
use crate::photos::{self, PhotoUploaded};
use crate::users::{
    self,
    models::{CreateUser, User},
};
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        competitions::create_competition,
        competitions::get_competition,
        competitions::get_user_competitions,
        participants::get_participants,
        invitations::create_invitation,
        invitations::accept_invitation,
        catches::post_catches,
        catches::get_catches,
        leaderboard::get_leaderboard,
        photos::upload_photo,
        users::get_user,
        users::create_user,
    ),
    components(schemas(
        Competition,
        NewCompetition,
        ParticipantProfile,
        Invitation,
        NewInvitation,
        AcceptInvitation,
        CatchRecord,
        NewCatch,
        CaptureSession,
        ScoringRules,
        Leaderboards,
        LeaderboardEntry,
        PhotoUploaded,
        User,
        CreateUser,
    )),
    tags(
        (name = "Competitions", description = "Competition management endpoints")
    )
)]
struct ApiDoc;

pub async fn run_api(db_pool: PgPool) -> std::io::Result<()> {
    info!("Starting server...");

    let governor_conf = GovernorConfigBuilder::default()
        .seconds_per_request(2)
        .burst_size(20)
        .finish()
        .unwrap();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add((
                        header::STRICT_TRANSPORT_SECURITY,
                        "max-age=63072000; includeSubDomains; preload",
                    ))
                    .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .add((header::X_FRAME_OPTIONS, "DENY"))
                    .add((header::X_XSS_PROTECTION, "1; mode=block")),
            )
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Governor::new(&governor_conf))
            .app_data(web::Data::new(db_pool.clone()))
            .service(competitions::create_competition)
            .service(competitions::get_competition)
            .service(competitions::get_user_competitions)
            .service(participants::get_participants)
            .service(invitations::create_invitation)
            .service(invitations::accept_invitation)
            .service(catches::post_catches)
            .service(catches::get_catches)
            .service(leaderboard::get_leaderboard)
            .service(photos::upload_photo)
            .service(users::get_user)
            .service(users::create_user)
            .service(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
