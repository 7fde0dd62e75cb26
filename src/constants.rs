pub const USGS_ALL_WEEK_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const PB2002_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/refs/heads/master/GeoJSON/PB2002_boundaries.json";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_CENTER_LAT: f64 = 36.7783;
pub const DEFAULT_CENTER_LON: f64 = -119.4179;
pub const DEFAULT_ZOOM: u8 = 5;

pub const MARKER_OPACITY: f64 = 0.5;
pub const MARKER_FILL_OPACITY: f64 = 0.5;
pub const MARKER_STROKE_COLOR: &str = "#000000";
pub const MARKER_WEIGHT: f64 = 0.5;
pub const MAGNITUDE_RADIUS_SCALE: f64 = 5.0;
pub const MIN_MARKER_RADIUS: f64 = 1.0;

pub const PLATE_LINE_COLOR: &str = "yellow";
pub const PLATE_LINE_WEIGHT: f64 = 1.0;

pub const TECTONIC_PLATES_OVERLAY: &str = "Tectonic Plates";
pub const EARTHQUAKES_OVERLAY: &str = "Earthquake Data";
pub const LEGEND_POSITION: &str = "bottomright";

pub const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const STADIA_ATTRIBUTION: &str = "&copy; <a href=\"https://www.stadiamaps.com/\" target=\"_blank\">Stadia Maps</a> &copy; <a href=\"https://www.stamen.com/\" target=\"_blank\">Stamen Design</a> &copy; <a href=\"https://openmaptiles.org/\" target=\"_blank\">OpenMapTiles</a> &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const OPENTOPOMAP_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";

pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
