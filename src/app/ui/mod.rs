pub mod help;
pub mod issue_card;
pub mod issue_list;
pub mod navbar;
pub mod notice;
pub mod scroll;
pub mod utils;

pub use help::HelpScreen;
pub use issue_card::IssueCard;
pub use issue_list::{CardSpan, IssueList};
pub use navbar::NavBar;
pub use notice::Notice;
pub use scroll::Scroll;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Block,
};

pub trait Dim {
    fn dim_bg(&mut self);
}

impl Dim for ratatui::Frame<'_> {
    fn dim_bg(&mut self) {
        self.render_widget(
            Block::default().style(
                Style::default()
                    .bg(Color::Rgb(0, 0, 0))
                    .add_modifier(Modifier::DIM),
            ),
            self.area(),
        );
    }
}
