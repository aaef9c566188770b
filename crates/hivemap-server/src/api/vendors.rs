use axum::{
    extract::{Query, State},
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hivemap_core::geo::GeoPoint;
use hivemap_core::search::{search_within_radius, DEFAULT_RADIUS_KM};
use hivemap_core::vendors::Vendor;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Authoritative server-side bounds on the search radius in kilometers.
/// Clients may filter further on their side, but nothing outside this
/// window is accepted here.
pub(super) const MIN_RADIUS_KM: f64 = 1.0;
pub(super) const MAX_RADIUS_KM: f64 = 100.0;

/// A vendor's public listing fields as returned by the API.
#[derive(Debug, Serialize)]
pub(super) struct VendorItem {
    pub slug: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub price_eur_per_kg: Option<Decimal>,
    pub jar_sizes_g: Vec<u32>,
}

impl VendorItem {
    fn from_vendor(vendor: &Vendor) -> Self {
        Self {
            slug: vendor.slug(),
            name: vendor.name.clone(),
            address: vendor.address.clone(),
            city: vendor.city.clone(),
            postal_code: vendor.postal_code.clone(),
            latitude: vendor.latitude,
            longitude: vendor.longitude,
            email: vendor.email.clone(),
            phone: vendor.phone.clone(),
            website: vendor.website.clone(),
            price_eur_per_kg: vendor.price_eur_per_kg,
            jar_sizes_g: vendor.jar_sizes_g.clone(),
        }
    }
}

/// A search hit: the vendor's public fields plus its distance from the
/// query point.
#[derive(Debug, Serialize)]
pub(super) struct RankedVendorItem {
    #[serde(flatten)]
    pub vendor: VendorItem,
    pub distance_km: f64,
}

pub(super) async fn list_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<VendorItem>>> {
    let data = state.vendors.iter().map(VendorItem::from_vendor).collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: Option<f64>,
}

pub(super) async fn search_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<RankedVendorItem>>>, ApiError> {
    let radius_km = params.radius.unwrap_or(DEFAULT_RADIUS_KM);
    if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km) {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("radius must be between {MIN_RADIUS_KM} and {MAX_RADIUS_KM} km"),
        ));
    }

    let query = GeoPoint {
        latitude: params.latitude,
        longitude: params.longitude,
    };

    let ranked = search_within_radius(query, radius_km, &state.vendors)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let data = ranked
        .into_iter()
        .map(|hit| RankedVendorItem {
            vendor: VendorItem::from_vendor(hit.item),
            distance_km: hit.distance_km,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
