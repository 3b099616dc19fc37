//! Media records (novel, comic, anime, movie) and their validation rules.
//!
//! Each record is flat: a required `title`, optional metadata, an optional
//! tag list, and URL-shaped fields. Records are validated field by field
//! with the `validator` derive; [`validate_record`] flattens the result into
//! a sorted list of [`FieldError`]s.
//!
//! URL fields only accept `http`/`https` URLs with a host. No string may
//! carry a NUL character, since PostgreSQL `jsonb` cannot store one.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldError};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Kinds & collections
// ---------------------------------------------------------------------------

/// The four media kinds. Each kind is stored in its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Novel,
    Comic,
    Anime,
    Movie,
}

impl MediaKind {
    /// Collection name in the document store.
    pub fn collection(self) -> &'static str {
        match self {
            MediaKind::Novel => "novel",
            MediaKind::Comic => "comic",
            MediaKind::Anime => "anime",
            MediaKind::Movie => "movie",
        }
    }
}

/// A validated record type that can be stored in a media collection.
pub trait MediaRecord: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    const KIND: MediaKind;
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A text novel. `content` holds the full text when available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Novel {
    /// Missing titles deserialize as empty and are rejected by validation.
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub author: Option<String>,
    pub synopsis: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub cover_url: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A comic; `pages` lists one image URL per page in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Comic {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub author: Option<String>,
    pub synopsis: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub cover_url: Option<String>,
    #[validate(custom(function = "page_urls"))]
    pub pages: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Anime {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub studio: Option<String>,
    pub synopsis: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub cover_url: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub video_url: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub episode: Option<i64>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Movie {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub cover_url: Option<String>,
    #[validate(custom(function = "http_url"))]
    pub video_url: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub duration_min: Option<i64>,
    pub tags: Option<Vec<String>>,
}

impl MediaRecord for Novel {
    const KIND: MediaKind = MediaKind::Novel;
}

impl MediaRecord for Comic {
    const KIND: MediaKind = MediaKind::Comic;
}

impl MediaRecord for Anime {
    const KIND: MediaKind = MediaKind::Anime;
}

impl MediaRecord for Movie {
    const KIND: MediaKind = MediaKind::Movie;
}

// ---------------------------------------------------------------------------
// Persisted wrapper
// ---------------------------------------------------------------------------

/// A record as read back from the store.
///
/// The store identifier is always carried as a string, so serialized items
/// never contain a driver-specific id type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persisted<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a record, collecting every failing field.
pub fn validate_record<T: Validate + Serialize>(record: &T) -> Result<(), CoreError> {
    let mut errors = match record.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors(&errors),
    };
    errors.extend(nul_fields(record));

    if errors.is_empty() {
        return Ok(());
    }
    errors.sort_by(|a, b| a.field.cmp(&b.field));
    Err(CoreError::InvalidFields(errors))
}

/// Whether any string (or object key) inside `value` contains a NUL character.
pub fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, item)| key.contains('\0') || contains_nul(item)),
        _ => false,
    }
}

/// Top-level fields of `record` holding a NUL character anywhere inside.
fn nul_fields<T: Serialize>(record: &T) -> Vec<FieldError> {
    let Ok(Value::Object(fields)) = serde_json::to_value(record) else {
        return Vec::new();
    };
    fields
        .into_iter()
        .filter(|(_, value)| contains_nul(value))
        .map(|(field, _)| FieldError {
            field,
            message: "must not contain NUL characters".to_string(),
        })
        .collect()
}

/// Flatten `validator` errors into field/message pairs sorted by field name.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: describe(e),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("failed `{}` check", error.code))
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("is required and must not be empty"));
        return Err(err);
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

fn http_url(value: &str) -> Result<(), ValidationError> {
    if !is_http_url(value) {
        let mut err = ValidationError::new("url");
        err.message = Some(Cow::Borrowed("must be an http(s) URL with a host"));
        return Err(err);
    }
    Ok(())
}

fn page_urls(pages: &[String]) -> Result<(), ValidationError> {
    if let Some(index) = pages.iter().position(|page| !is_http_url(page)) {
        let mut err = ValidationError::new("url");
        err.message = Some(Cow::Owned(format!(
            "page {} must be an http(s) URL with a host",
            index + 1
        )));
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Title used to detect whether the sample novel has already been seeded.
pub const SAMPLE_NOVEL_TITLE: &str = "Contoh Novel: Bintang Senja";

/// The fixed sample novel inserted by the seeding endpoint.
pub fn sample_novel() -> Novel {
    Novel {
        title: SAMPLE_NOVEL_TITLE.to_string(),
        author: Some("Ayu Laras".to_string()),
        synopsis: Some(
            "Kisah romansa dua sahabat masa kecil yang dipertemukan kembali oleh senja \
             di kota pesisir."
                .to_string(),
        ),
        cover_url: Some("https://picsum.photos/seed/novel-sample/800/1200".to_string()),
        content: Some(
            "Bab 1\n\
             Angin sore berhembus dari arah laut, membawa aroma garam dan kenangan yang lama \
             terkunci.\n\n\
             Bab 2\n\
             Di tepian dermaga, mereka kembali berjumpa saat langit menguning, seperti janji \
             yang tak pernah usai."
                .to_string(),
        ),
        tags: Some(vec![
            "romansa".to_string(),
            "drama".to_string(),
            "indo".to_string(),
        ]),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
