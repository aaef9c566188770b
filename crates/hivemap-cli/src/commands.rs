//! Command handlers for the CLI.
//!
//! These run synchronously against the registry file — there is no server
//! or network involved, so a broken registry or bad coordinates surface
//! directly as a non-zero exit.

use std::path::Path;

use hivemap_core::geo::GeoPoint;
use hivemap_core::search::search_within_radius;
use hivemap_core::vendors::{load_vendors, Vendor};

pub(crate) fn run_validate(path: &Path) -> anyhow::Result<()> {
    let registry = load_vendors(path)?;
    println!(
        "{}: {} vendors, registry is valid",
        path.display(),
        registry.vendors.len()
    );
    Ok(())
}

pub(crate) fn run_search(
    path: &Path,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> anyhow::Result<()> {
    let registry = load_vendors(path)?;
    let query = GeoPoint::new(latitude, longitude)?;
    let hits = search_within_radius(query, radius_km, &registry.vendors)?;

    if hits.is_empty() {
        println!("no vendors within {radius_km} km of ({latitude}, {longitude})");
        return Ok(());
    }

    for hit in &hits {
        println!("{}", format_hit(hit.item, hit.distance_km));
    }
    println!("{} vendors within {radius_km} km", hits.len());
    Ok(())
}

fn format_hit(vendor: &Vendor, distance_km: f64) -> String {
    let price = vendor
        .price_eur_per_kg
        .map_or_else(|| "-".to_string(), |p| format!("{p} EUR/kg"));
    format!(
        "{distance_km:>7.1} km  {}  ({} {})  {price}",
        vendor.name, vendor.postal_code, vendor.city
    )
}
