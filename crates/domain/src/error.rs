//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeListError`]
//! via `#[from]` (or an explicit `From` impl for adapter errors).

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HomeListError {
    /// An inbound payload failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The addressed resource does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage engine failed (connectivity, constraint violation, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A JSON body could not be turned into a [`Home`](crate::home::Home) or
/// [`HomePatch`](crate::home::HomePatch).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but is not a string.
    #[error("field `{0}` must be a string")]
    InvalidType(&'static str),

    /// The body is not parseable JSON at all.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),
}

/// Lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
