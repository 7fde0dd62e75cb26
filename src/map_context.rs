use serde::Serialize;

use crate::config::Config;
use crate::constants::{
    EARTHQUAKES_OVERLAY, LEGEND_POSITION, OPENTOPOMAP_ATTRIBUTION, OSM_ATTRIBUTION,
    STADIA_ATTRIBUTION, TECTONIC_PLATES_OVERLAY,
};
use crate::legend::{legend_entries, render_legend_html, LegendEntry};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basemap {
    pub name: &'static str,
    pub url_template: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<u8>,
    pub max_zoom: u8,
    pub attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Overlay {
    pub name: &'static str,
    pub source: &'static str,
    pub visible: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
    pub html: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapContext {
    pub view: MapView,
    pub basemaps: Vec<Basemap>,
    pub default_basemap: &'static str,
    pub overlays: Vec<Overlay>,
    pub legend: Legend,
}

impl MapContext {
    pub fn new(cfg: &Config) -> Self {
        let entries = legend_entries();
        let html = render_legend_html(&entries);
        Self {
            view: MapView {
                center: [cfg.center_lat, cfg.center_lon],
                zoom: cfg.zoom,
            },
            basemaps: basemaps(),
            default_basemap: "Default",
            overlays: vec![
                Overlay {
                    name: TECTONIC_PLATES_OVERLAY,
                    source: "/api/plates",
                    visible: true,
                },
                Overlay {
                    name: EARTHQUAKES_OVERLAY,
                    source: "/api/earthquakes",
                    visible: true,
                },
            ],
            legend: Legend {
                position: LEGEND_POSITION,
                entries,
                html,
            },
        }
    }
}

pub fn basemaps() -> Vec<Basemap> {
    vec![
        Basemap {
            name: "Default",
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            min_zoom: None,
            max_zoom: 19,
            attribution: OSM_ATTRIBUTION,
            ext: None,
        },
        Basemap {
            name: "GrayScale",
            url_template: "https://tiles.stadiamaps.com/tiles/stamen_toner_lite/{z}/{x}/{y}{r}.{ext}",
            min_zoom: Some(0),
            max_zoom: 20,
            attribution: STADIA_ATTRIBUTION,
            ext: Some("png"),
        },
        Basemap {
            name: "Water Color",
            url_template: "https://tiles.stadiamaps.com/tiles/stamen_watercolor/{z}/{x}/{y}.{ext}",
            min_zoom: Some(1),
            max_zoom: 16,
            attribution: STADIA_ATTRIBUTION,
            ext: Some("jpg"),
        },
        Basemap {
            name: "Topography",
            url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            min_zoom: None,
            max_zoom: 17,
            attribution: OPENTOPOMAP_ATTRIBUTION,
            ext: None,
        },
    ]
}
