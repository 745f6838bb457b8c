//! MBTA API response DTOs.
//!
//! These types map directly to the JSON:API envelopes returned by the
//! MBTA V3 API. Only the attributes this service consumes are modeled;
//! the API sends far more.

use serde::Deserialize;

use crate::domain::{Route, RouteId, RouteType, Stop, StopId};
use crate::error::TransitError;

/// Error entry inside a JSON:API envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// HTTP status as a string (e.g. `"403"`).
    pub status: Option<String>,
    /// Short machine-readable code (e.g. `"forbidden."`).
    pub code: Option<String>,
}

/// Response from `GET /routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub data: Vec<RouteResource>,
}

/// A route resource from `GET /routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResource {
    pub id: String,
    pub attributes: RouteAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    pub long_name: String,
    /// Numeric GTFS route type.
    #[serde(rename = "type")]
    pub route_type: i64,
}

/// Response from `GET /stops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopsResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub data: Vec<StopResource>,
}

/// A stop resource from `GET /stops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

/// Surface an API-reported error from a JSON:API envelope, if present.
///
/// The MBTA reports failures inside the body as
/// `{"errors": [{"status": "403", "code": "forbidden."}]}`; the first
/// entry's status becomes the error code and its `code` field the
/// message.
pub(crate) fn envelope_error(errors: &[ApiError]) -> Option<TransitError> {
    let first = errors.first()?;
    let code = first
        .status
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);
    let message = first
        .code
        .clone()
        .unwrap_or_else(|| "Internal Error.".to_string());
    Some(TransitError::Remote { code, message })
}

impl From<RouteResource> for Route {
    fn from(resource: RouteResource) -> Self {
        Route::new(
            RouteId::new(resource.id),
            resource.attributes.long_name,
            RouteType::from_code(resource.attributes.route_type),
        )
    }
}

impl From<StopResource> for Stop {
    fn from(resource: StopResource) -> Self {
        Stop::new(StopId::new(resource.id), resource.attributes.name)
    }
}
