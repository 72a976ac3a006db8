use std::time::Duration;

pub const LOG_FILE_PATH: &str = "/tmp/fde-dashboard.log";

pub const DASHBOARD_TITLE: &str = "FDE Slackbot Dashboard";

/// Shown when a group has no usable title.
pub const FALLBACK_TITLE: &str = "General inquiry";

pub const EMPTY_STATE_MESSAGE: &str = "No issues yet, waiting for messages...";

pub const LOADING_MESSAGE: &str = "Loading tickets...";

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const TICKETS_TABLE: &str = "tickets";

pub const TICKETS_SCHEMA: &str = "public";

/// Phoenix closes sockets that stay silent for 60 seconds.
pub const HEARTBEAT_SECS: u64 = 30;

pub const FRAME_DURATION: Duration = Duration::from_millis(100);

pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);
