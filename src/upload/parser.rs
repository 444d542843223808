use axum::http::HeaderMap;
use bytes::Bytes;

use crate::error::AppError;

pub const MAX_IMAGES: usize = 5;
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// One image file lifted out of the multipart body, not yet on disk.
pub struct StagedImage {
    pub original_name: String,
    pub bytes: Bytes,
}

/// The decoded submission form.
#[derive(Default)]
pub struct SubmitForm {
    pub name: String,
    pub social_handle: String,
    pub images: Vec<StagedImage>,
}

/// Parse a submission form body using multer.
///
/// Any invalid file (wrong type, over the size cap, too many) rejects the
/// whole request before anything touches disk. Unknown fields are skipped.
pub async fn parse_submit_form(headers: &HeaderMap, body: Bytes) -> Result<SubmitForm, AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected multipart/form-data".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = SubmitForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => {
                form.name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;
            }
            "socialHandle" => {
                form.social_handle = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;
            }
            "images" => {
                if form.images.len() == MAX_IMAGES {
                    return Err(AppError::BadRequest(format!(
                        "At most {MAX_IMAGES} images are allowed"
                    )));
                }

                let original_name = field.file_name().unwrap_or("image").to_string();
                let is_image = field
                    .content_type()
                    .is_some_and(|m| m.type_() == mime::IMAGE);
                if !is_image {
                    return Err(AppError::BadRequest(
                        "Only image files are allowed".to_string(),
                    ));
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;
                if bytes.len() > MAX_IMAGE_BYTES {
                    return Err(AppError::BadRequest(
                        "Each image must be 5MB or smaller".to_string(),
                    ));
                }

                form.images.push(StagedImage {
                    original_name,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok(form)
}
