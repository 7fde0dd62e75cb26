use axum::extract::State;
use axum::response::Html;
use axum::Json;
use tracing::{info, warn};

use crate::geojson::{FeatureCollection, RawFeatureCollection};
use crate::http_client::fetch_json;
use crate::layers::{build_earthquake_layer, build_plates_layer, EarthquakeLayer, PlatesLayer};
use crate::map_context::MapContext;
use crate::page::render_page;
use crate::types::AppState;
use crate::utils::iso_from_ms;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn index() -> Html<String> {
    Html(render_page())
}

pub async fn map_context(State(state): State<AppState>) -> Json<MapContext> {
    Json(state.map.as_ref().clone())
}

pub async fn earthquakes(State(state): State<AppState>) -> Json<EarthquakeLayer> {
    let url = &state.cfg.earthquake_feed_url;
    match fetch_json::<RawFeatureCollection>(&state.http, url).await {
        Ok(raw) => {
            let layer = build_earthquake_layer(&raw);
            if let Some(metadata) = raw.metadata.as_ref() {
                info!(
                    "Earthquake feed '{}' generated {}: {} events, {} drawable",
                    metadata.title.as_deref().unwrap_or("untitled"),
                    metadata
                        .generated
                        .and_then(iso_from_ms)
                        .unwrap_or_else(|| "at unknown time".to_string()),
                    metadata.count.unwrap_or(raw.features.len() as u64),
                    layer.features.len()
                );
            } else {
                info!("Earthquake feed: {} drawable events", layer.features.len());
            }
            Json(layer)
        }
        Err(error) => {
            warn!("Earthquake feed unavailable: {error:#}");
            Json(FeatureCollection::empty())
        }
    }
}

pub async fn plates(State(state): State<AppState>) -> Json<PlatesLayer> {
    let url = &state.cfg.plates_feed_url;
    match fetch_json::<RawFeatureCollection>(&state.http, url).await {
        Ok(raw) => {
            let layer = build_plates_layer(&raw);
            info!("Tectonic plate feed: {} boundaries", layer.features.len());
            Json(layer)
        }
        Err(error) => {
            warn!("Tectonic plate feed unavailable: {error:#}");
            Json(FeatureCollection::empty())
        }
    }
}
