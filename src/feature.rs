use serde_json::{json, Map, Value};

use crate::geojson::RawFeature;

#[derive(Clone, Debug, PartialEq)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: Option<f64>,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub time_ms: Option<i64>,
    pub url: Option<String>,
}

impl EarthquakeFeature {
    pub fn from_raw(raw: &RawFeature) -> Option<Self> {
        let coordinates = raw
            .geometry
            .as_ref()?
            .get("coordinates")?
            .as_array()?;
        let longitude = finite_number(coordinates.first()?)?;
        let latitude = finite_number(coordinates.get(1)?)?;
        let depth_km = coordinates.get(2).and_then(finite_number);

        let empty = Map::new();
        let properties = raw.properties.as_ref().unwrap_or(&empty);

        Some(Self {
            id: raw.id.as_ref().and_then(id_string),
            longitude,
            latitude,
            depth_km,
            magnitude: properties.get("mag").and_then(finite_number),
            place: properties
                .get("place")
                .and_then(Value::as_str)
                .map(str::to_string),
            time_ms: properties.get("time").and_then(Value::as_i64),
            url: properties
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    pub fn geometry(&self) -> Value {
        match self.depth_km {
            Some(depth) => json!({
                "type": "Point",
                "coordinates": [self.longitude, self.latitude, depth],
            }),
            None => json!({
                "type": "Point",
                "coordinates": [self.longitude, self.latitude],
            }),
        }
    }
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| number.is_finite())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
