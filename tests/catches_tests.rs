#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use chrono::NaiveDateTime;
    use competition_api::catches::{
        get_catches,
        models::{CaptureSession, NewCatch},
        post_catches,
    };
    use competition_api::leaderboard::{get_leaderboard, models::Leaderboards};
    use sqlx::PgPool;
    use uuid::Uuid;

    #[allow(dead_code)]
    async fn setup_db() -> PgPool {
        dotenv::from_filename(".env.test").ok();
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
        PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database")
    }

    /// Seeds a user enrolled in a fresh competition; returns (competition, user).
    #[allow(dead_code)]
    async fn seed_enrolled_angler(db: &PgPool) -> (Uuid, Uuid) {
        let competition_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, auth_id, email, display_name, created_at) VALUES ($1, $2, $3, $4, now())",
        )
        .bind(user_id)
        .bind("seed-auth-id")
        .bind(format!("{}@example.com", user_id))
        .bind("Seed Angler")
        .execute(db)
        .await
        .expect("Failed to seed user");

        sqlx::query(
            "INSERT INTO competitions (id, name, created_by, starts_at, ends_at, total_count_enabled, record_size_enabled, top_n_biggest, created_at) VALUES ($1, $2, $3, $4, $5, true, true, 5, now())",
        )
        .bind(competition_id)
        .bind("Seeded Cup")
        .bind(user_id)
        .bind(
            NaiveDateTime::parse_from_str("2025-06-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
        )
        .bind(
            NaiveDateTime::parse_from_str("2025-06-30 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap(),
        )
        .execute(db)
        .await
        .expect("Failed to seed competition");

        sqlx::query(
            "INSERT INTO participants (competition_id, user_id, joined_at) VALUES ($1, $2, now())",
        )
        .bind(competition_id)
        .bind(user_id)
        .execute(db)
        .await
        .expect("Failed to seed enrollment");

        (competition_id, user_id)
    }

    // #[actix_web::test]
    #[allow(dead_code)]
    async fn test_post_catches_and_read_leaderboard() {
        let db = setup_db().await;
        let (competition_id, user_id) = seed_enrolled_angler(&db).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_catches)
                .service(get_catches)
                .service(get_leaderboard),
        )
        .await;

        let recorded_at =
            NaiveDateTime::parse_from_str("2025-06-05 06:30:00", "%Y-%m-%d %H:%M:%S").unwrap();

        let session = vec![
            NewCatch {
                participant_id: user_id,
                fish_count: 1,
                size_cm: Some(62.5),
                lure: Some("Spinner".to_string()),
                photo_url: Some("/photos/pike.jpg".to_string()),
                recorded_at: Some(recorded_at),
            },
            NewCatch {
                participant_id: user_id,
                fish_count: 2,
                size_cm: None,
                lure: None,
                photo_url: Some("/photos/pike.jpg".to_string()),
                recorded_at: Some(recorded_at),
            },
        ];

        let req = test::TestRequest::post()
            .uri(&format!("/competitions/{}/catches", competition_id))
            .set_json(session)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::get()
            .uri(&format!("/competitions/{}/catches", competition_id))
            .to_request();

        let sessions: Vec<CaptureSession> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].catches.len(), 2);

        let req = test::TestRequest::get()
            .uri(&format!("/competitions/{}/leaderboard", competition_id))
            .to_request();

        let boards: Leaderboards = test::call_and_read_body_json(&app, req).await;
        assert_eq!(boards.by_total_count[0].total_count, 3);
        assert_eq!(boards.by_record_size[0].record_size, Some(62.5));
    }

    // #[actix_web::test]
    #[allow(dead_code)]
    async fn test_post_catches_rejects_out_of_range_count() {
        let db = setup_db().await;
        let (competition_id, user_id) = seed_enrolled_angler(&db).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_catches),
        )
        .await;

        let payload = vec![NewCatch {
            participant_id: user_id,
            fish_count: 101,
            size_cm: None,
            lure: None,
            photo_url: None,
            recorded_at: None,
        }];

        let req = test::TestRequest::post()
            .uri(&format!("/competitions/{}/catches", competition_id))
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    // #[actix_web::test]
    #[allow(dead_code)]
    async fn test_post_catches_rejects_unenrolled_angler() {
        let db = setup_db().await;
        let (competition_id, _) = seed_enrolled_angler(&db).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_catches),
        )
        .await;

        let payload = vec![NewCatch {
            participant_id: Uuid::new_v4(),
            fish_count: 1,
            size_cm: None,
            lure: None,
            photo_url: None,
            recorded_at: None,
        }];

        let req = test::TestRequest::post()
            .uri(&format!("/competitions/{}/catches", competition_id))
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
