use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn dashboard_title() -> String {
    DASHBOARD_TITLE.to_string()
}

pub(crate) fn fallback_title() -> String {
    FALLBACK_TITLE.to_string()
}

pub(crate) fn date_format() -> String {
    DATE_FORMAT.to_string()
}

pub(crate) fn tickets_table() -> String {
    TICKETS_TABLE.to_string()
}

pub(crate) fn tickets_schema() -> String {
    TICKETS_SCHEMA.to_string()
}

pub(crate) fn heartbeat_secs() -> u64 {
    HEARTBEAT_SECS
}

pub(crate) fn default_true() -> bool {
    true
}
