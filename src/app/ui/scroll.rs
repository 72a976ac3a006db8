#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

#[derive(Debug, Default)]
pub struct Scroll {
    list_len: usize,
    viewport_len: usize,
    pub position: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.set_position(self.position.saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.set_position(self.position.saturating_sub(PAGE_SIZE));
    }

    pub fn down(&mut self) {
        self.set_position(self.position.saturating_add(1));
    }

    pub fn page_down(&mut self) {
        self.set_position(self.position.saturating_add(PAGE_SIZE));
    }

    /// Moves the viewport the least amount needed to show lines
    /// `start..start + height`. The top of the range wins when it does not
    /// fit.
    pub fn ensure_visible(&mut self, start: usize, height: usize) {
        let end = start + height;
        if start < self.position {
            self.set_position(start);
        } else if end > self.position + self.viewport_len {
            let top = end.saturating_sub(self.viewport_len).min(start);
            self.set_position(top);
        }
    }

    pub fn set_state(&mut self, list_len: usize, viewport_len: usize) {
        self.list_len = list_len;
        self.viewport_len = viewport_len;
        let content_len = list_len.saturating_sub(viewport_len).max(1);
        self.scrollbar_state = self.scrollbar_state.content_length(content_len);
        self.set_position(self.position);
    }

    fn max_position(&self) -> usize {
        self.list_len.saturating_sub(self.viewport_len)
    }

    fn set_position(&mut self, position: usize) {
        self.position = position.min(self.max_position());
        self.scrollbar_state = self.scrollbar_state.position(self.position);
    }
}
