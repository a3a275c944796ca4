use std::{io, path::Path};

use actix_multipart::Multipart;
use actix_web::{post, HttpResponse, Responder};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PhotoUploaded {
    pub photo_url: String,
}

pub fn photo_dir() -> String {
    std::env::var("PHOTO_DIR").unwrap_or_else(|_| "./uploads".to_string())
}

pub fn public_photo_url(file_name: &str) -> String {
    format!("/photos/{}", file_name)
}

/// Prefixes a UUID so concurrent uploads of the same filename never collide.
pub fn unique_file_name(original: &str) -> String {
    let cleaned = sanitize_filename::sanitize(original);

    if cleaned.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}_{}", Uuid::new_v4(), cleaned)
    }
}

pub async fn save_photo(dir: &str, file_name: &str, data: &[u8]) -> Result<String, io::Error> {
    fs::create_dir_all(dir).await?;

    let path = Path::new(dir).join(file_name);
    let mut file = fs::File::create(&path).await?;
    file.write_all(data).await?;
    file.flush().await?;

    Ok(public_photo_url(file_name))
}

#[utoipa::path(
    post,
    path = "/photos",
    request_body(content = Vec<u8>, description = "Multipart form with one photo field", content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photo stored", body = PhotoUploaded, content_type = "application/json"),
        (status = 400, description = "No photo field in the upload")
    )
)]
#[post("/photos")]
pub async fn upload_photo(mut payload: Multipart) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                error!("Error reading multipart field: {}", e);
                return HttpResponse::BadRequest().finish();
            }
        };

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("photo.jpg")
            .to_string();

        let mut data = BytesMut::new();

        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => {
                    error!("Error reading upload chunk: {}", e);
                    return HttpResponse::InternalServerError().finish();
                }
            }
        }

        let file_name = unique_file_name(&original);

        return match save_photo(&photo_dir(), &file_name, &data).await {
            Ok(photo_url) => HttpResponse::Created().json(PhotoUploaded { photo_url }),
            Err(e) => {
                error!("Error storing photo {}: {}", file_name, e);
                HttpResponse::InternalServerError().finish()
            }
        };
    }

    HttpResponse::BadRequest().body("No photo in upload")
}
