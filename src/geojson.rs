use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct RawFeatureCollection {
    #[serde(default)]
    pub features: Vec<RawFeature>,
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub generated: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Value,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn new(id: Option<Value>, geometry: Value, properties: P) -> Self {
        Self {
            kind: "Feature",
            id,
            geometry,
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_collection_tolerates_missing_fields() {
        let raw: RawFeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":null}]}"#)
                .unwrap();
        assert_eq!(raw.features.len(), 1);
        assert!(raw.features[0].geometry.is_none());
        assert!(raw.features[0].properties.is_none());
        assert!(raw.metadata.is_none());
    }

    #[test]
    fn empty_collection_serializes_as_geojson() {
        let collection: FeatureCollection<()> = FeatureCollection::empty();
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "FeatureCollection", "features": []})
        );
    }
}
