#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::collections::HashSet;

use ratatui::layout::Rect;

use crate::app::ui::{IssueList, Scroll};
use crate::issues::IssueBoard;
use crate::models::{FeedStatus, Message};

pub(crate) struct AppState {
    pub board: IssueBoard,
    pub issue_list: IssueList,
    pub scroll: Scroll,
    pub last_known_width: usize,
    pub last_known_height: usize,

    pub loading: bool,
    pub feed_status: FeedStatus,

    // Both keyed by group id so they survive reordering.
    expanded: HashSet<String>,
    selected: Option<String>,

    date_format: String,
}

impl AppState {
    pub fn new(board: IssueBoard, date_format: impl Into<String>) -> AppState {
        AppState {
            board,
            issue_list: IssueList::default(),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            loading: true,
            feed_status: FeedStatus::Connecting,
            expanded: HashSet::new(),
            selected: None,
            date_format: date_format.into(),
        }
    }

    pub fn load(&mut self, messages: Vec<Message>) {
        self.board.load(messages);
        self.loading = false;
        self.ensure_selection();
        self.sync_state();
    }

    /// Applies a live row. Returns false when the board dropped it.
    pub fn push(&mut self, message: Message) -> bool {
        if !self.board.push(message) {
            return false;
        }
        self.ensure_selection();
        self.sync_state();
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_deref()
            .and_then(|id| self.board.position(id))
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.contains(group_id)
    }

    pub fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.board.len().saturating_sub(1)),
            None => 0,
        };
        self.select_index(next);
    }

    pub fn select_prev(&mut self) {
        let prev = self.selected_index().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select_index(prev);
    }

    pub fn select_first(&mut self) {
        self.select_index(0);
    }

    pub fn select_last(&mut self) {
        self.select_index(self.board.len().saturating_sub(1));
    }

    /// Expands or collapses the selected issue. Returns the new state, or
    /// None when nothing is selected.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected.clone()?;
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        self.sync_state();
        self.follow_selection();
        Some(expanded)
    }

    pub fn collapse_all(&mut self) {
        if self.expanded.is_empty() {
            return;
        }
        self.expanded.clear();
        self.sync_state();
        self.follow_selection();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_height = rect.height.into();
        self.last_known_width = rect.width.into();
        self.sync_state();
    }

    pub fn sync_state(&mut self) {
        self.issue_list.set_views(
            self.board.views(),
            &self.expanded,
            self.selected.as_deref(),
            self.last_known_width,
            &self.date_format,
        );
        self.scroll
            .set_state(self.issue_list.len(), self.last_known_height);
    }

    fn select_index(&mut self, index: usize) {
        let Some(view) = self.board.views().get(index) else {
            return;
        };
        if self.selected.as_deref() == Some(view.group_id.as_str()) {
            return;
        }
        self.selected = Some(view.group_id.clone());
        self.sync_state();
        self.follow_selection();
    }

    fn ensure_selection(&mut self) {
        if self.selected_index().is_none() {
            self.selected = self.board.views().first().map(|v| v.group_id.clone());
        }
    }

    fn follow_selection(&mut self) {
        let span = self
            .selected_index()
            .and_then(|i| self.issue_list.card_span(i));
        if let Some(span) = span {
            self.scroll.ensure_visible(span.start, span.height);
        }
    }
}
