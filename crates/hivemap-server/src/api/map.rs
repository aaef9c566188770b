use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use hivemap_core::geo::GeoPoint;
use hivemap_core::viewport::{frame, Viewport};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Query point for viewport framing. Both coordinates or neither: with
/// no point the country-wide default viewport is returned.
#[derive(Debug, Deserialize)]
pub(super) struct ViewportParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub(super) async fn get_viewport(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ViewportParams>,
) -> Result<Json<ApiResponse<Viewport>>, ApiError> {
    let query = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(ApiError::new(
                req_id.0,
                "validation_error",
                "latitude and longitude must be supplied together",
            ))
        }
    };

    let viewport = frame(query, &state.vendors)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    Ok(Json(ApiResponse {
        data: viewport,
        meta: ResponseMeta::new(req_id.0),
    }))
}
