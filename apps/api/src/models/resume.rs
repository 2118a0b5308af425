use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::Report;

/// One analyzed résumé submission, as returned to the client.
/// Storage paths are not tracked; persistence belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub feedback: Report,
}
