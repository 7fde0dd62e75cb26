use serde::Serialize;

use crate::classify::{depth_color_for, magnitude_radius_for};
use crate::constants::{
    MARKER_FILL_OPACITY, MARKER_OPACITY, MARKER_STROKE_COLOR, MARKER_WEIGHT, PLATE_LINE_COLOR,
    PLATE_LINE_WEIGHT,
};
use crate::feature::EarthquakeFeature;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub opacity: f64,
    pub fill_opacity: f64,
    pub fill_color: &'static str,
    #[serde(rename = "color")]
    pub stroke_color: &'static str,
    pub radius: f64,
    pub weight: f64,
    pub stroke: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlateStyle {
    pub color: &'static str,
    pub weight: f64,
}

pub fn build_style(feature: &EarthquakeFeature) -> StyleDescriptor {
    StyleDescriptor {
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
        fill_color: depth_color_for(feature.depth_km),
        stroke_color: MARKER_STROKE_COLOR,
        radius: magnitude_radius_for(feature.magnitude),
        weight: MARKER_WEIGHT,
        stroke: true,
    }
}

pub fn plate_style() -> PlateStyle {
    PlateStyle {
        color: PLATE_LINE_COLOR,
        weight: PLATE_LINE_WEIGHT,
    }
}
