use std::fmt::Display;

use crossterm::event::KeyCode;
use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Clear, Padding, Row, Table},
};
use ratatui_macros::span;

use crate::models::Event;

pub static KEY_BINDINGS: Lazy<Vec<KeyBinding>> = Lazy::new(build_key_bindings);

#[derive(Default)]
pub struct HelpScreen {
    showing: bool,
}

impl HelpScreen {
    pub fn new() -> HelpScreen {
        HelpScreen::default()
    }

    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn toggle_showing(&mut self) {
        self.showing = !self.showing;
    }

    /// Handles keys while the popup is open. Returns true when the user
    /// asked to quit.
    pub fn handle_key_event(&mut self, event: &Event) -> bool {
        match event {
            Event::KeyboardF1 | Event::KeyboardEsc => self.showing = false,
            Event::Quit => {
                self.showing = false;
                return true;
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" Help ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(vec![
                " ".into(),
                span!(Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD); "Esc"),
                " to close ".into(),
            ]));

        let rows = KEY_BINDINGS
            .iter()
            .map(|b| {
                Row::new(vec![
                    Cell::from(b.key().to_string()).light_green(),
                    Cell::from(b.long_description().to_string()),
                ])
            })
            .collect::<Vec<_>>();

        let table = Table::new(rows, [Constraint::Percentage(35), Constraint::Percentage(65)])
            .block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(table, area);
    }

    pub fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let mut instructions = KEY_BINDINGS
            .iter()
            .filter(|b| !b.short_description().is_empty())
            .flat_map(|b| {
                vec![
                    span!(Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD); b.key().to_string()),
                    " ".into(),
                    span!(Style::default().fg(Color::White); b.short_description().to_string()),
                    " | ".into(),
                ]
            })
            .collect::<Vec<_>>();
        instructions.pop();

        frame.render_widget(Line::from(instructions).light_green(), area);
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(Input::new(KeyCode::F(1)), "Show Help").with_short_desc("Help"),
        KeyBinding::new(Input::new(KeyCode::Up), "Select Previous Issue (k)"),
        KeyBinding::new(Input::new(KeyCode::Down), "Select Next Issue (j)")
            .with_short_desc("Select"),
        KeyBinding::new(Input::new(KeyCode::Enter), "Expand/Collapse Issue (Space)")
            .with_short_desc("Expand"),
        KeyBinding::new(Input::new(KeyCode::Esc), "Collapse All Issues"),
        KeyBinding::new(Input::new(KeyCode::PageUp), "Scroll Page Up (Ctrl+u)"),
        KeyBinding::new(Input::new(KeyCode::PageDown), "Scroll Page Down (Ctrl+d)"),
        KeyBinding::new(Input::new(KeyCode::Home), "Select First Issue"),
        KeyBinding::new(Input::new(KeyCode::End), "Select Last Issue"),
        KeyBinding::new(Input::new(KeyCode::Char('q')), "Quit (Ctrl+c, Ctrl+q)")
            .with_short_desc("Quit"),
    ]
}

pub struct Input {
    key: KeyCode,
}

impl Input {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }
}

pub struct KeyBinding {
    key: Input,
    long_description: String,
    short_description: String,
}

impl KeyBinding {
    fn new(key: Input, description: &str) -> Self {
        Self {
            key,
            long_description: description.to_string(),
            short_description: String::new(),
        }
    }

    fn with_short_desc(mut self, short_description: &str) -> Self {
        self.short_description = short_description.to_string();
        self
    }

    pub fn key(&self) -> &Input {
        &self.key
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self.key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{}", n),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            _ => "Unknown".to_string(),
        };

        write!(f, "{}", key)
    }
}
