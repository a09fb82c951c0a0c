//! Boards: every object of schema `board`, with a sync action.

use super::ViewState;
use crate::error::ApiError;
use crate::net::types::Board;
use crate::services::Services;

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardsView {
    pub items: ViewState<Vec<Board>>,
}

impl BoardsView {
    pub async fn load(services: &Services) -> Self {
        let items = ViewState::from_result(services.boards.get_boards().await, "boards");
        Self { items }
    }

    /// Request synchronization of the first listed board.
    ///
    /// Returns the synced id, or `None` when there is no board with an id.
    ///
    /// # Errors
    ///
    /// Propagates the sync request's error.
    pub async fn sync(&self, services: &Services) -> Result<Option<String>, ApiError> {
        let Some(id) = self
            .items
            .ready()
            .and_then(|boards| boards.first())
            .and_then(Board::id)
        else {
            tracing::warn!("no board to sync");
            return Ok(None);
        };

        services.objects.sync_object(id).await?;
        Ok(Some(id.to_owned()))
    }

    #[must_use]
    pub fn render(&self) -> String {
        let body = self.items.render_with(|boards| {
            if boards.is_empty() {
                return "  (no boards)\n".to_owned();
            }
            boards
                .iter()
                .map(|board| match board.id() {
                    Some(id) => format!("  {id}\n"),
                    None => format!("  {}\n", board.0),
                })
                .collect()
        });
        format!("Boards\n{body}")
    }
}
