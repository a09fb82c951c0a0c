//! Service container shared by every view.
//!
//! DESIGN
//! ======
//! `Services` is built once by the binary and borrowed by views on
//! activation. It holds no cache: every call re-issues its request. The
//! stores sit behind trait objects so views can be exercised against fakes.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::net::boards::BoardsService;
use crate::net::http::HttpApi;
use crate::net::skyobject::{ObjectStore, SkyObjectService};
use crate::net::skywire::{NodeManager, SkyWireService};

#[derive(Clone)]
pub struct Services {
    pub objects: Arc<dyn ObjectStore>,
    pub nodes: Arc<dyn NodeManager>,
    pub boards: BoardsService,
}

impl Services {
    #[must_use]
    pub fn new(objects: Arc<dyn ObjectStore>, nodes: Arc<dyn NodeManager>) -> Self {
        let boards = BoardsService::new(Arc::clone(&objects));
        Self { objects, nodes, boards }
    }

    /// Wire the HTTP-backed services from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let api = HttpApi::new(config)?;
        tracing::debug!(base_url = api.base_url(), style = ?config.path_style, "services configured");
        let objects = Arc::new(SkyObjectService::new(api.clone(), config.path_style));
        let nodes = Arc::new(SkyWireService::new(api));
        Ok(Self::new(objects, nodes))
    }
}
