use axum::{extract::FromRequestParts, http::request::Parts};
use tasktrack_core::domain::common::{entities::app_errors::CoreError, query::ListQuery};

use super::{query_params::list_query_from_pairs, server::api_entities::api_error::ApiError};

/// Extractor for listing endpoints: filter, search, order, scope flags and
/// pagination.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListQueryExtractor(query): ListQueryExtractor,
/// ) -> Result<Response<Paginated<Task>>, ApiError> {
///     // hand `query` to the service
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| CoreError::Validation(format!("malformed query string: {e}")))?;

        Ok(ListQueryExtractor(list_query_from_pairs(&pairs)?))
    }
}
