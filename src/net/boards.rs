//! Boards facade over the object store.

use std::sync::Arc;

use super::skyobject::ObjectStore;
use super::types::Board;
use crate::error::ApiError;

pub const BOARD_SCHEMA: &str = "board";

#[derive(Clone)]
pub struct BoardsService {
    objects: Arc<dyn ObjectStore>,
}

impl BoardsService {
    #[must_use]
    pub fn new(objects: Arc<dyn ObjectStore>) -> Self {
        Self { objects }
    }

    /// All objects of schema `board`.
    ///
    /// # Errors
    ///
    /// Propagates the object store's error unchanged.
    pub async fn get_boards(&self) -> Result<Vec<Board>, ApiError> {
        let items = self.objects.get_object_list(BOARD_SCHEMA).await?;
        Ok(items.into_iter().map(Board).collect())
    }
}
