use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::config::DEFAULT_JOURNAL;
use crate::entity::{Interview, NewsArticle, VideoSource};

use super::error::ApiError;
use super::AppState;

// ============================================================================
// status / login
// ============================================================================

pub async fn status() -> Json<serde_json::Value> {
    Json(json!({
        "status": "online",
        "message": "pressroom server running",
        "timestamp": Utc::now(),
    }))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    email: String,
    password: String,
    journal: String,
}

/// Not a security boundary: any non-empty email/password/selector triple is
/// accepted. The selector only picks the display name shown in the admin UI.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if req.email.trim().is_empty() || req.password.trim().is_empty() || req.journal.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Email, password and journal are required".to_string(),
        ));
    }

    let journal_name = state.config.journal_display_name(&req.journal);
    Ok(Json(json!({
        "success": true,
        "user": {
            "email": req.email,
            "journalName": journal_name,
            "journalId": req.journal,
        },
    })))
}

// ============================================================================
// news
// ============================================================================

pub async fn list_news(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsArticle>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.news.load_sorted()?))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NewsArticle>, ApiError> {
    let store = state.store.lock().await;
    store
        .news
        .find_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("News article not found: {}", id)))
}

pub async fn create_news(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_form(multipart, "image").await?;

    let title = form.required("title")?;
    let committee = form.required("committee")?;
    let excerpt = form.required("excerpt")?;
    let content = form.required("content")?;
    let journal = form.journal_name();

    let image = match &form.file {
        Some(file) => Some(state.uploads.save(&file.filename, &file.bytes)?.url),
        None => None,
    };

    let article = NewsArticle::new(title, committee, excerpt, content, journal, image);

    let store = state.store.lock().await;
    store.news.append(article.clone())?;
    info!(id = %article.id, committee = %article.committee, "news article published");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "News article published",
            "news": article,
        })),
    ))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    if !store.news.remove_by_id(&id)? {
        return Err(ApiError::NotFound(format!("News article not found: {}", id)));
    }
    info!(id = %id, "news article deleted");
    Ok(Json(json!({
        "success": true,
        "message": "News article deleted",
    })))
}

// ============================================================================
// interviews
// ============================================================================

pub async fn list_interviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Interview>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.interviews.load_sorted()?))
}

pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Interview>, ApiError> {
    let store = state.store.lock().await;
    store
        .interviews
        .find_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Interview not found: {}", id)))
}

pub async fn create_interview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_form(multipart, "video").await?;

    let title = form.required("title")?;
    let committee = form.required("committee")?;
    let description = form.required("description")?;
    let journal = form.journal_name();

    let video = match &form.file {
        Some(file) => {
            let saved = state.uploads.save(&file.filename, &file.bytes)?;
            VideoSource::from_upload(saved.url, file.content_type.clone())
        }
        None => match form.optional("youtubeLink") {
            Some(link) => VideoSource::from_link(&link)?,
            None => {
                return Err(ApiError::Validation(
                    "A video upload or a YouTube link is required".to_string(),
                ))
            }
        },
    };

    let interview = Interview::new(title, committee, description, journal, video);

    let store = state.store.lock().await;
    store.interviews.append(interview.clone())?;
    info!(id = %interview.id, committee = %interview.committee, "interview published");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Interview published",
            "interview": interview,
        })),
    ))
}

pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    if !store.interviews.remove_by_id(&id)? {
        return Err(ApiError::NotFound(format!("Interview not found: {}", id)));
    }
    info!(id = %id, "interview deleted");
    Ok(Json(json!({
        "success": true,
        "message": "Interview deleted",
    })))
}

// ============================================================================
// multipart form reading
// ============================================================================

struct FilePart {
    filename: String,
    content_type: String,
    bytes: Bytes,
}

struct FormData {
    fields: HashMap<String, String>,
    file: Option<FilePart>,
}

impl FormData {
    fn required(&self, name: &str) -> Result<String, ApiError> {
        self.optional(name)
            .ok_or_else(|| ApiError::Validation(format!("Missing required field: {}", name)))
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn journal_name(&self) -> String {
        self.optional("journalName")
            .unwrap_or_else(|| DEFAULT_JOURNAL.to_string())
    }
}

/// Drain the multipart stream into text fields plus at most one file, taken
/// from `file_field`. Extra file parts are ignored.
async fn read_form(mut multipart: Multipart, file_field: &str) -> Result<FormData, ApiError> {
    let mut fields = HashMap::new();
    let mut file: Option<FilePart> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);

        match filename {
            Some(filename) if name == file_field => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(malformed)?;
                if file.is_none() {
                    file = Some(FilePart {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {
                let value = field.text().await.map_err(malformed)?;
                fields.insert(name, value);
            }
        }
    }

    Ok(FormData { fields, file })
}

fn malformed(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Validation(format!("Malformed multipart request: {}", err))
}
