// Last-updated marker shown in the header.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{ArticlesError, Result};
use crate::firestore::{CollectionQuery, DocumentStore};

use super::types::CREATED_AT_FIELD;

/// Collection holding the marker document.
pub const LAST_UPDATED_COLLECTION: &str = "lastUpdated";

/// Fetch the marker's `createdAt`. With several marker documents the last one wins;
/// with none, returns `None`.
pub async fn fetch_last_updated(documents: &dyn DocumentStore) -> Result<Option<DateTime<Utc>>> {
    let docs = documents
        .list(&CollectionQuery::all(LAST_UPDATED_COLLECTION))
        .await?;

    let Some(doc) = docs.last() else {
        return Ok(None);
    };

    let raw = doc
        .body()
        .remove(CREATED_AT_FIELD)
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| ArticlesError::MalformedRecord {
            collection: LAST_UPDATED_COLLECTION.to_string(),
            id: doc.id().to_string(),
            reason: "missing createdAt timestamp".to_string(),
        })?;

    let created_at = DateTime::parse_from_rfc3339(&raw)
        .map_err(|e| ArticlesError::MalformedRecord {
            collection: LAST_UPDATED_COLLECTION.to_string(),
            id: doc.id().to_string(),
            reason: e.to_string(),
        })?
        .with_timezone(&Utc);

    Ok(Some(created_at))
}

/// Render a date as "Wed Mar 06 2024".
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%a %b %d %Y").to_string()
}

/// Render the marker in the local time zone.
pub fn display_date(dt: &DateTime<Utc>) -> String {
    format_date(&dt.with_timezone(&Local))
}
