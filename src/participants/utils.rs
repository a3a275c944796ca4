use sqlx::PgPool;
use uuid::Uuid;

pub async fn is_enrolled(
    db: &PgPool,
    competition_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM participants WHERE competition_id = $1 AND user_id = $2")
        .bind(competition_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    Ok(row.is_some())
}

/// Idempotent: accepting an invitation twice leaves a single enrollment.
pub async fn enroll(db: &PgPool, competition_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO participants (competition_id, user_id, joined_at) VALUES ($1, $2, now()) ON CONFLICT DO NOTHING",
    )
    .bind(competition_id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
