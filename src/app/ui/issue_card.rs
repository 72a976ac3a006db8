#[cfg(test)]
#[path = "issue_card_test.rs"]
mod tests;

use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::issues::{IssueView, parse_timestamp};
use crate::models::Message;

use super::utils;

// "│ " + content + " │"
const BORDER_WIDTH: usize = 4;
const INDENT: &str = "  ";
const MIN_CARD_WIDTH: usize = 24;

/// Renders one issue thread as a bordered card. Collapsed cards show the
/// title, the latest text and a summary row; expanded cards also list
/// every message of the thread.
pub struct IssueCard<'a> {
    view: &'a IssueView,
    width: usize,
    expanded: bool,
    selected: bool,
    date_format: &'a str,
}

impl<'a> IssueCard<'a> {
    pub fn new(view: &'a IssueView, width: usize, date_format: &'a str) -> IssueCard<'a> {
        IssueCard {
            view,
            width: width.max(MIN_CARD_WIDTH),
            expanded: false,
            selected: false,
            date_format,
        }
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn inner_width(&self) -> usize {
        self.width - BORDER_WIDTH
    }

    fn border_style(&self) -> Style {
        if self.selected {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.top_line()];

        let latest = self
            .view
            .latest_message()
            .map(|m| m.text())
            .unwrap_or_default();
        if !self.expanded {
            lines.push(self.boxed(vec![Span::raw(utils::truncate(latest, self.inner_width()))]));
        }
        lines.push(self.boxed(self.summary_spans()));

        if self.expanded {
            lines.push(self.boxed(vec![]));
            lines.push(self.boxed(vec![Span::raw("Latest Update").bold().light_yellow()]));
            lines.extend(self.wrapped(latest, INDENT, Style::default()));

            lines.push(self.boxed(vec![]));
            lines.push(self.boxed(vec![
                Span::raw(format!("All Messages ({})", self.view.len()))
                    .bold()
                    .light_yellow(),
            ]));
            for message in &self.view.messages {
                lines.push(self.boxed(self.message_header(message)));
                lines.extend(self.wrapped(message.text(), INDENT, Style::default().gray()));
            }
        }

        lines.push(Line::styled(
            format!("╰{}╯", "─".repeat(self.width - 2)),
            self.border_style(),
        ));
        lines
    }

    fn top_line(&self) -> Line<'static> {
        let border = self.border_style();
        let badge = if self.view.latest_type.is_empty() {
            String::new()
        } else {
            utils::truncate(&format!(" {} ", self.view.latest_type), self.width / 3)
        };

        // "╭─ " + title + " " + fill + badge + "─╮"
        let fixed = 3 + 2 + badge.width();
        let title_width = self.width.saturating_sub(fixed + 2).max(1);
        let marker = if self.selected { "▸ " } else { "" };
        let title = utils::truncate(
            &format!("{}{}", marker, self.view.title),
            title_width,
        );
        let fill = self
            .width
            .saturating_sub(fixed + title.width())
            .max(1);

        let mut spans = vec![
            Span::styled("╭─ ", border),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", "─".repeat(fill.saturating_sub(1))), border),
        ];
        if !badge.is_empty() {
            spans.push(Span::styled(badge, badge_style(&self.view.latest_type)));
        }
        spans.push(Span::styled("─╮", border));
        Line::from(spans)
    }

    fn summary_spans(&self) -> Vec<Span<'static>> {
        let count = self.view.len();
        let plural = if count == 1 { "" } else { "s" };
        let mut parts = vec![format!("{} message{}", count, plural)];
        let updated = utils::format_time(self.view.last_update, self.date_format);
        if !updated.is_empty() {
            parts.push(format!("updated {}", updated));
        }
        parts.push(format!("#{}", self.view.short_id()));
        let text = parts.join(" · ");
        vec![Span::raw(utils::truncate(&text, self.inner_width())).dark_gray()]
    }

    fn message_header(&self, message: &Message) -> Vec<Span<'static>> {
        let author = message.username().unwrap_or("unknown");
        let mut parts = vec![author.to_string()];
        let time = utils::format_time(parse_timestamp(message.ts()).ok(), self.date_format);
        if !time.is_empty() {
            parts.push(time);
        }
        if !message.channel().is_empty() {
            parts.push(format!("#{}", message.channel()));
        }
        let header = parts.join(" · ");
        vec![Span::raw(utils::truncate(&header, self.inner_width())).light_cyan()]
    }

    fn wrapped(&self, text: &str, indent: &str, style: Style) -> Vec<Line<'static>> {
        let max_width = self.inner_width().saturating_sub(indent.width()).max(1);
        let text = text.replace(['\n', '\r'], " ");
        utils::split_to_lines(Span::styled(text, style), max_width)
            .into_iter()
            .map(|line| {
                let mut spans = vec![Span::raw(indent.to_string())];
                spans.extend(line.spans.into_iter().map(|s| {
                    Span::styled(s.content.into_owned(), s.style)
                }));
                self.boxed(spans)
            })
            .collect()
    }

    fn boxed(&self, mut content: Vec<Span<'static>>) -> Line<'static> {
        let border = self.border_style();
        let used = content.iter().map(|s| s.content.width()).sum::<usize>();
        let fill = self.inner_width().saturating_sub(used);
        content.insert(0, Span::styled("│ ", border));
        content.push(Span::raw(" ".repeat(fill)));
        content.push(Span::styled(" │", border));
        Line::from(content)
    }
}

fn badge_style(kind: &str) -> Style {
    let color = match kind.to_lowercase().as_str() {
        "issue" | "bug" | "incident" => Color::Red,
        "question" => Color::Yellow,
        "feature" | "feature_request" | "request" => Color::Magenta,
        "support" | "help" => Color::Cyan,
        _ => Color::Gray,
    };
    Style::default().fg(Color::Black).bg(color)
}
