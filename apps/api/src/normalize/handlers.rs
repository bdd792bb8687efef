use axum::Json;

use crate::models::resume::ResumeRecord;
use crate::normalize::normalize_resume;
use crate::normalize::raw::RawResume;

/// POST /api/v1/resumes/normalize
/// Returns the canonical resume for loosely-shaped input. Never rejects a
/// JSON object; a `null` body normalizes to the empty resume.
pub async fn handle_normalize(Json(raw): Json<Option<RawResume>>) -> Json<ResumeRecord> {
    Json(normalize_resume(raw.unwrap_or_default()))
}
