use std::io;

use crate::app::app_state::AppState;
use crate::app::ui::{Dim, HelpScreen, NavBar, Notice, utils};
use crate::config::DashboardConfig;
use crate::config::constants::{EMPTY_STATE_MESSAGE, LOADING_MESSAGE};
use crate::info_notice;
use crate::issues::IssueBoard;
use crate::models::{Event, FeedStatus};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::{Backend, CrosstermBackend},
    style::Stylize,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation},
};
use tokio_util::sync::CancellationToken;

use super::services::EventService;

const MIN_WIDTH: u16 = 40;
const NAVBAR_HEIGHT: u16 = 2;

pub struct App<'a> {
    events: &'a mut EventService,

    app_state: AppState,
    help_screen: HelpScreen,
    notice: Notice,

    title: String,
    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        events: &'a mut EventService,
        board: IssueBoard,
        config: &DashboardConfig,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        App {
            events,
            app_state: AppState::new(board, &config.date_format),
            help_screen: HelpScreen::new(),
            notice: Notice::default(),
            title: config.title.clone(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn handle_event(&mut self) -> bool {
        let event = self.events.next().await;

        if event.is_feed_event() {
            self.handle_feed_event(event);
            return false;
        }

        if let Event::Notice(msg) = event {
            self.notice.add_message(msg);
            return false;
        }

        if self.help_screen.showing() && event.is_keyboard_event() {
            return self.help_screen.handle_key_event(&event);
        }

        self.handle_key_event(event)
    }

    fn handle_feed_event(&mut self, event: Event) {
        match event {
            Event::TicketsLoaded(rows) => {
                let count = rows.len();
                self.app_state.load(rows);
                log::info!(
                    "Board has {} issues from {} messages",
                    self.app_state.board.len(),
                    count
                );
            }

            Event::TicketArrived(message) => {
                let group_id = message.group_id().to_string();
                if self.app_state.push(message) {
                    log::debug!("Issue {} updated", group_id);
                }
            }

            Event::FeedStatus(status) => {
                if status == FeedStatus::Live && self.app_state.feed_status != FeedStatus::Live {
                    self.notice.add_message(info_notice!("Live updates connected"));
                }
                self.app_state.feed_status = status;
            }

            _ => {}
        }
    }

    /// Returns true when the app should stop.
    fn handle_key_event(&mut self, event: Event) -> bool {
        match event {
            Event::Quit => return true,

            Event::KeyboardF1 => self.help_screen.toggle_showing(),
            Event::KeyboardUp => self.app_state.select_prev(),
            Event::KeyboardDown => self.app_state.select_next(),
            Event::KeyboardHome => self.app_state.select_first(),
            Event::KeyboardEnd => self.app_state.select_last(),
            Event::KeyboardEnter => {
                self.app_state.toggle_selected();
            }
            Event::KeyboardEsc => self.app_state.collapse_all(),

            Event::UiScrollUp => self.app_state.scroll.up(),
            Event::UiScrollDown => self.app_state.scroll.down(),
            Event::UiScrollPageUp => self.app_state.scroll.page_up(),
            Event::UiScrollPageDown => self.app_state.scroll.page_down(),
            _ => {}
        }
        false
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let current_width = f.area().width;
            if current_width < MIN_WIDTH {
                f.render_widget(
                    Paragraph::new(utils::split_to_lines(
                        format!(
                            "I'm too small, make me bigger! I need at least {} cells (current: {})",
                            MIN_WIDTH, current_width
                        ),
                        current_width.saturating_sub(2).max(1) as usize,
                    ))
                    .alignment(Alignment::Left),
                    f.area(),
                );
                return;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(NAVBAR_HEIGHT),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(f.area());

            NavBar::new(&self.title)
                .with_counts(self.app_state.board.len(), self.app_state.board.message_count())
                .with_status(self.app_state.feed_status)
                .render(f, layout[0]);

            let body = layout[1];
            let list_area = Rect {
                width: body.width.saturating_sub(1),
                ..body
            };
            if list_area.width as usize != self.app_state.last_known_width
                || list_area.height as usize != self.app_state.last_known_height
            {
                self.app_state.set_rect(list_area);
            }

            if self.app_state.loading || self.app_state.board.is_empty() {
                let text = if self.app_state.loading {
                    LOADING_MESSAGE
                } else {
                    EMPTY_STATE_MESSAGE
                };
                let [center] = Layout::vertical([Constraint::Length(1)])
                    .flex(ratatui::layout::Flex::Center)
                    .areas(body);
                f.render_widget(
                    Paragraph::new(text).italic().dark_gray().centered(),
                    center,
                );
            } else {
                self.app_state.issue_list.render(
                    list_area,
                    f.buffer_mut(),
                    self.app_state.scroll.position,
                );

                f.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight)
                        .end_symbol(None)
                        .begin_symbol(None),
                    body.inner(Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut self.app_state.scroll.scrollbar_state,
                );
            }

            self.help_screen.render_help_line(f, layout[2]);

            if self.help_screen.showing() {
                f.dim_bg();
                self.help_screen.render(f, utils::popup_area(f.area(), 50, 50));
            }

            self.notice.render(f, utils::notice_area(f.area(), 30));
        })?;
        Ok(())
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            if self.handle_event().await {
                return Ok(());
            }
        }
    }
}
