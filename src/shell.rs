//! Page shell: active route plus the mounted board view
//!
//! The board view exists only while the kanban route is active. Leaving the
//! page unmounts it and its state is gone; coming back mounts a fresh view
//! on the seed board.

use crate::board::BoardState;
use crate::formatting;
use crate::router::Route;
use crate::view::{BoardView, Clock, system_clock};

#[derive(Debug)]
pub struct App {
    route: Route,
    seed: BoardState,
    clock: Clock,
    kanban: Option<BoardView>,
}

impl App {
    pub fn new(seed: BoardState, route: Route) -> Self {
        Self::with_clock(seed, route, system_clock)
    }

    pub fn with_clock(seed: BoardState, route: Route, clock: Clock) -> Self {
        let mut app = Self {
            route: Route::Auth,
            seed,
            clock,
            kanban: None,
        };
        app.navigate(route);
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Switch pages, mounting or unmounting the board view as needed
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Kanban && self.kanban.is_none() {
            tracing::info!("mounting board view");
            self.kanban = Some(BoardView::with_clock(self.seed.clone(), self.clock));
        } else if route != Route::Kanban && self.kanban.take().is_some() {
            tracing::info!("unmounting board view, board state discarded");
        }

        if route != self.route {
            tracing::info!(from = %self.route, to = %route, "navigate");
        }
        self.route = route;
    }

    /// Mounted board view, `None` unless the kanban page is active
    pub fn board_view(&self) -> Option<&BoardView> {
        self.kanban.as_ref()
    }

    pub fn board_view_mut(&mut self) -> Option<&mut BoardView> {
        self.kanban.as_mut()
    }

    /// Render the sidebar and the active page
    pub fn render(&self) -> String {
        formatting::render_page(self.route, self.kanban.as_ref().map(BoardView::state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColumnKey;
    use crate::view::UiEvent;

    #[test]
    fn test_board_mounted_only_on_kanban_route() {
        let mut app = App::new(BoardState::sample(), Route::Auth);
        assert!(app.board_view().is_none());

        app.navigate(Route::Kanban);
        assert!(app.board_view().is_some());

        app.navigate(Route::Calendar);
        assert!(app.board_view().is_none());
        assert_eq!(app.route(), Route::Calendar);
    }

    #[test]
    fn test_leaving_kanban_discards_board_changes() {
        let mut app = App::new(BoardState::sample(), Route::Kanban);
        app.board_view_mut()
            .unwrap()
            .dispatch(UiEvent::DeleteClick {
                column: ColumnKey::todo,
                task_id: "1".to_string(),
            });
        assert_eq!(app.board_view().unwrap().state().task_count(), 5);

        app.navigate(Route::Dashboard);
        app.navigate(Route::Kanban);
        assert_eq!(app.board_view().unwrap().state(), &BoardState::sample());
    }

    #[test]
    fn test_renavigating_to_kanban_keeps_board() {
        let mut app = App::new(BoardState::sample(), Route::Kanban);
        app.board_view_mut()
            .unwrap()
            .dispatch(UiEvent::AddTaskClick {
                column: ColumnKey::done,
            });
        app.navigate(Route::Kanban);
        assert_eq!(app.board_view().unwrap().state().task_count(), 7);
    }

    #[test]
    fn test_render_shows_page_for_route() {
        let app = App::new(BoardState::sample(), Route::Kanban);
        let page = app.render();
        assert!(page.contains("> Task Board (/kanban)"));
        assert!(page.contains("[1] Task 1"));

        let app = App::new(BoardState::sample(), Route::Auth);
        assert!(app.render().contains("# Sign In"));
    }
}
