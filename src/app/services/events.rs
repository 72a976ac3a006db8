#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time;

/// Merges terminal input, events posted by background tasks and a frame
/// tick into one stream of [`Event`]s.
pub struct EventService {
    crossterm_events: EventStream,
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl EventService {
    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(Event::UiScrollUp),
                MouseEventKind::ScrollDown => Some(Event::UiScrollDown),
                _ => None,
            },
            CrosstermEvent::Key(key_event) => map_key(key_event),
            CrosstermEvent::Resize(_, _) => Some(Event::UiTick),
            _ => None,
        }
    }

    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.event_rx.recv() => event,
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        Self {
            crossterm_events: EventStream::new(),
            event_rx,
            event_tx,
        }
    }
}

pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(Event::UiScrollPageUp),
            KeyCode::Char('d') => Some(Event::UiScrollPageDown),
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Event::KeyboardEsc),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Event::KeyboardF1),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::KeyboardEnter),
        KeyCode::Up | KeyCode::Char('k') => Some(Event::KeyboardUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::KeyboardDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Event::KeyboardHome),
        KeyCode::End | KeyCode::Char('G') => Some(Event::KeyboardEnd),
        KeyCode::PageUp => Some(Event::UiScrollPageUp),
        KeyCode::PageDown => Some(Event::UiScrollPageDown),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}
