use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::map_context::MapContext;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub http: Client,
    pub map: Arc<MapContext>,
}
