use crate::constants::{MAGNITUDE_RADIUS_SCALE, MIN_MARKER_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthBand {
    pub lower_km: f64,
    pub color: &'static str,
}

/// Ascending by `lower_km`. The first band is the catch-all; its bound is
/// only used as a legend label.
pub static DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        lower_km: -10.0,
        color: "green",
    },
    DepthBand {
        lower_km: 10.0,
        color: "#e2ff03",
    },
    DepthBand {
        lower_km: 30.0,
        color: "#ffb303",
    },
    DepthBand {
        lower_km: 50.0,
        color: "#ff7d03",
    },
    DepthBand {
        lower_km: 70.0,
        color: "#fa4002",
    },
    DepthBand {
        lower_km: 90.0,
        color: "red",
    },
];

pub fn depth_band(depth_km: f64) -> &'static DepthBand {
    DEPTH_BANDS[1..]
        .iter()
        .rev()
        .find(|band| depth_km > band.lower_km)
        .unwrap_or(&DEPTH_BANDS[0])
}

pub fn depth_color(depth_km: f64) -> &'static str {
    depth_band(depth_km).color
}

pub fn depth_color_for(depth_km: Option<f64>) -> &'static str {
    depth_color(depth_km.unwrap_or(f64::NAN))
}

/// Negative magnitudes are not clamped and yield a negative radius.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        MIN_MARKER_RADIUS
    } else {
        magnitude * MAGNITUDE_RADIUS_SCALE
    }
}

pub fn magnitude_radius_for(magnitude: Option<f64>) -> f64 {
    magnitude.map_or(MIN_MARKER_RADIUS, magnitude_radius)
}
