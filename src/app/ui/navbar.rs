use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::models::FeedStatus;

/// Top bar with the dashboard title, the active issue count and the state
/// of the live feed.
pub struct NavBar<'a> {
    title: &'a str,
    issues: usize,
    messages: usize,
    status: FeedStatus,
}

impl<'a> NavBar<'a> {
    pub fn new(title: &'a str) -> NavBar<'a> {
        NavBar {
            title,
            issues: 0,
            messages: 0,
            status: FeedStatus::Connecting,
        }
    }

    pub fn with_counts(mut self, issues: usize, messages: usize) -> Self {
        self.issues = issues;
        self.messages = messages;
        self
    }

    pub fn with_status(mut self, status: FeedStatus) -> Self {
        self.status = status;
        self
    }

    pub fn stats_line(&self) -> Line<'static> {
        let plural = if self.issues == 1 { "" } else { "s" };
        Line::from(vec![
            Span::styled(
                format!("{} active issue{}", self.issues, plural),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" · {} messages", self.messages)).dark_gray(),
        ])
    }

    pub fn status_line(&self) -> Line<'static> {
        let (dot, label) = match self.status {
            FeedStatus::Connecting => (Color::Yellow, "Connecting"),
            FeedStatus::Live => (Color::Green, "Live"),
            FeedStatus::Closed => (Color::Red, "Offline"),
        };
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dot)),
            Span::raw(label),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title, stats, status] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(14),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(self.title.to_string()).bold().light_blue()),
            title,
        );
        frame.render_widget(Paragraph::new(self.stats_line()).centered(), stats);
        frame.render_widget(Paragraph::new(self.status_line()).right_aligned(), status);
    }
}
