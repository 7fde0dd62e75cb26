use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::feature::EarthquakeFeature;
use crate::geojson::{Feature, FeatureCollection, RawFeatureCollection};
use crate::style::{build_style, plate_style, PlateStyle, StyleDescriptor};
use crate::utils::escape_html;

#[derive(Clone, Debug, Serialize)]
pub struct EarthquakeProperties {
    pub mag: Option<f64>,
    pub depth: Option<f64>,
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub style: StyleDescriptor,
    pub popup: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlateProperties {
    #[serde(flatten)]
    pub source: Map<String, Value>,
    pub style: PlateStyle,
}

pub type EarthquakeLayer = FeatureCollection<EarthquakeProperties>;
pub type PlatesLayer = FeatureCollection<PlateProperties>;

pub fn build_earthquake_layer(raw: &RawFeatureCollection) -> EarthquakeLayer {
    let features: Vec<_> = raw
        .features
        .iter()
        .filter_map(EarthquakeFeature::from_raw)
        .map(|quake| {
            let properties = EarthquakeProperties {
                mag: quake.magnitude,
                depth: quake.depth_km,
                place: quake.place.clone(),
                time: quake.time_ms,
                url: quake.url.clone(),
                style: build_style(&quake),
                popup: popup_html(&quake),
            };
            Feature::new(
                quake.id.clone().map(Value::String),
                quake.geometry(),
                properties,
            )
        })
        .collect();

    let skipped = raw.features.len() - features.len();
    if skipped > 0 {
        debug!("Skipped {skipped} earthquake features without a point position");
    }
    FeatureCollection::new(features)
}

pub fn build_plates_layer(raw: &RawFeatureCollection) -> PlatesLayer {
    let features = raw
        .features
        .iter()
        .filter_map(|feature| {
            let geometry = feature.geometry.clone().filter(|value| !value.is_null())?;
            let mut source = feature.properties.clone().unwrap_or_default();
            source.remove("style");
            let properties = PlateProperties {
                source,
                style: plate_style(),
            };
            Some(Feature::new(feature.id.clone(), geometry, properties))
        })
        .collect();
    FeatureCollection::new(features)
}

pub fn popup_html(quake: &EarthquakeFeature) -> String {
    let magnitude = quake
        .magnitude
        .map_or_else(|| "unknown".to_string(), |value| value.to_string());
    let depth = quake
        .depth_km
        .map_or_else(|| "unknown".to_string(), |value| value.to_string());
    let place = quake
        .place
        .as_deref()
        .map_or_else(|| "unknown".to_string(), escape_html);
    format!("Magnitude: <b>{magnitude}</b><br>Depth: <b>{depth}</b><br>Location: <b>{place}</b>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFeatureCollection {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn zero_magnitude_deep_quake_is_red_with_floor_radius() {
        let layer = build_earthquake_layer(&raw(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": "test1",
                "properties": {"mag": 0, "place": "Test Sea"},
                "geometry": {"type": "Point", "coordinates": [140.0, 35.0, 95]}
            }]
        })));

        assert_eq!(layer.features.len(), 1);
        let properties = &layer.features[0].properties;
        assert_eq!(properties.style.radius, 1.0);
        assert_eq!(properties.style.fill_color, "red");
        assert!(properties.popup.contains("Magnitude: <b>0</b>"));
        assert!(properties.popup.contains("Depth: <b>95</b>"));
        assert!(properties.popup.contains("Location: <b>Test Sea</b>"));
        assert_eq!(layer.features[0].id, Some(json!("test1")));
    }

    #[test]
    fn features_without_geometry_are_dropped() {
        let layer = build_earthquake_layer(&raw(json!({
            "features": [
                {"properties": {"mag": 2.0}},
                {"properties": {"mag": 2.0}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0]}}
            ]
        })));
        assert_eq!(layer.features.len(), 1);
        assert_eq!(layer.features[0].properties.style.radius, 10.0);
    }

    #[test]
    fn popup_escapes_place_and_marks_missing_values() {
        let quake = EarthquakeFeature {
            id: None,
            longitude: 0.0,
            latitude: 0.0,
            depth_km: None,
            magnitude: Some(4.5),
            place: Some("<script>".to_string()),
            time_ms: None,
            url: None,
        };
        assert_eq!(
            popup_html(&quake),
            "Magnitude: <b>4.5</b><br>Depth: <b>unknown</b><br>Location: <b>&lt;script&gt;</b>"
        );
    }

    #[test]
    fn popup_marks_missing_magnitude_and_place() {
        let quake = EarthquakeFeature {
            id: None,
            longitude: 0.0,
            latitude: 0.0,
            depth_km: Some(12.0),
            magnitude: None,
            place: None,
            time_ms: None,
            url: None,
        };
        assert_eq!(
            popup_html(&quake),
            "Magnitude: <b>unknown</b><br>Depth: <b>12</b><br>Location: <b>unknown</b>"
        );
    }

    #[test]
    fn plates_keep_geometry_and_source_properties() {
        let layer = build_plates_layer(&raw(json!({
            "features": [
                {
                    "properties": {"Name": "AF-AN", "PlateA": "AF"},
                    "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [0.0, -54.5]]}
                },
                {"properties": {"Name": "broken"}, "geometry": null}
            ]
        })));

        assert_eq!(layer.features.len(), 1);
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(value["features"][0]["properties"]["Name"], "AF-AN");
        assert_eq!(value["features"][0]["properties"]["style"]["color"], "yellow");
        assert_eq!(value["features"][0]["properties"]["style"]["weight"], 1.0);
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
    }

    #[test]
    fn upstream_style_property_does_not_duplicate_plate_style() {
        let layer = build_plates_layer(&raw(json!({
            "features": [{
                "properties": {"Name": "PA-NA", "style": {"color": "blue"}},
                "geometry": {"type": "LineString", "coordinates": [[-120.0, 35.0], [-121.0, 36.0]]}
            }]
        })));

        let text = serde_json::to_string(&layer).unwrap();
        assert_eq!(text.matches("\"style\"").count(), 1);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["features"][0]["properties"]["Name"], "PA-NA");
        assert_eq!(value["features"][0]["properties"]["style"]["color"], "yellow");
    }
}
