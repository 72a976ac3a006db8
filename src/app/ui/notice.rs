use std::time;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::config::constants::NOTICE_DURATION;
use crate::models::NoticeMessage;

use super::utils;

struct MessageWrapper {
    value: NoticeMessage,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Stack of toasts drawn in the top right corner until they expire.
pub struct Notice {
    notices: Vec<MessageWrapper>,
    display_duration: time::Duration,
}

impl Notice {
    pub fn add_message(&mut self, msg: NoticeMessage) {
        self.notices.push(MessageWrapper {
            value: msg,
            created_at: chrono::Utc::now(),
        });
    }

    fn sync(&mut self) {
        let now = chrono::Utc::now();
        let ttl = self.display_duration.as_millis() as i64;
        self.notices.retain(|msg| {
            now.signed_duration_since(msg.created_at).num_milliseconds() < ttl
        });
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.sync();
        if self.notices.is_empty() || area.width < 6 || area.height < 3 {
            return;
        }

        let max_width = area.width as usize - 2;
        let max_height = area.height as usize;

        let items = build_list_items(&self.notices, max_width, max_height);
        let height = items.iter().map(|i| i.height()).sum::<usize>() as u16;
        let area = Rect { height, ..area };
        f.render_widget(Clear, area);
        f.render_widget(List::new(items), area);
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            notices: vec![],
            display_duration: NOTICE_DURATION,
        }
    }
}

fn build_list_items<'a>(
    notices: &[MessageWrapper],
    max_width: usize,
    max_height: usize,
) -> Vec<ListItem<'a>> {
    let mut items = vec![];
    let mut current_height = 0;

    for item in notices {
        let (border_color, text_color) = item.value.kind().colors();
        let lines = build_toast(item.value.message(), max_width, border_color, text_color);

        current_height += lines.len();
        if current_height > max_height {
            break;
        }
        items.push(ListItem::new(lines));
    }
    items
}

fn build_toast<'a>(
    message: &str,
    max_width: usize,
    border_color: Color,
    text_color: Color,
) -> Vec<Line<'a>> {
    let inner_width = max_width.saturating_sub(2).max(1);
    let border = Style::default().fg(border_color);
    let text = Style::default().fg(text_color);

    let mut lines = vec![Line::styled(
        format!("╭{}╮", "─".repeat(max_width)),
        border,
    )];
    for line in utils::split_to_lines(message.replace('\n', " "), inner_width) {
        let content = line
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>();
        let content = content.trim_end();
        let fill = " ".repeat(inner_width.saturating_sub(content.width()));
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(format!("{}{}", content, fill), text),
            Span::styled(" │", border),
        ]));
    }
    lines.push(Line::styled(
        format!("╰{}╯", "─".repeat(max_width)),
        border,
    ));
    lines
}
