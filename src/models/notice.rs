use ratatui::style::Color;

#[macro_export]
macro_rules! info_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Info, $msg)
    };
}

#[macro_export]
macro_rules! warn_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Warning, $msg)
    };
}

#[macro_export]
macro_rules! error_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Error, $msg)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    /// Border and text colors of the toast.
    pub fn colors(&self) -> (Color, Color) {
        match self {
            NoticeKind::Info => (Color::Cyan, Color::LightCyan),
            NoticeKind::Warning => (Color::Yellow, Color::LightYellow),
            NoticeKind::Error => (Color::Red, Color::LightRed),
        }
    }
}

/// A transient message about the feed, shown as a toast.
#[derive(Debug, Clone)]
pub struct NoticeMessage {
    kind: NoticeKind,
    message: String,
}

impl NoticeMessage {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }
}
