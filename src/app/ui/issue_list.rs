use std::collections::HashSet;

use ratatui::{buffer::Buffer, layout::Rect, text::Line};

use crate::issues::IssueView;

use super::issue_card::IssueCard;

/// Line range of one card inside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpan {
    pub start: usize,
    pub height: usize,
}

/// Flattened lines of every card, rebuilt whenever the board, the
/// selection, the expansion set or the width changes.
#[derive(Default)]
pub struct IssueList {
    lines: Vec<Line<'static>>,
    spans: Vec<CardSpan>,
}

impl IssueList {
    pub fn set_views(
        &mut self,
        views: &[IssueView],
        expanded: &HashSet<String>,
        selected: Option<&str>,
        width: usize,
        date_format: &str,
    ) {
        self.lines.clear();
        self.spans.clear();

        for view in views {
            let card = IssueCard::new(view, width, date_format)
                .with_expanded(expanded.contains(&view.group_id))
                .with_selected(selected == Some(view.group_id.as_str()))
                .as_lines();

            self.spans.push(CardSpan {
                start: self.lines.len(),
                height: card.len(),
            });
            self.lines.extend(card);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn card_span(&self, index: usize) -> Option<CardSpan> {
        self.spans.get(index).copied()
    }

    pub fn render(&self, rect: Rect, buf: &mut Buffer, scroll_index: usize) {
        for (i, line) in self
            .lines
            .iter()
            .skip(scroll_index)
            .take(rect.height as usize)
            .enumerate()
        {
            buf.set_line(rect.x, rect.y + i as u16, line, rect.width);
        }
    }
}
