//! User output formatter

use chrono::{TimeZone, Utc};

use super::printer::PlainRender;
use crate::mm::users::User;

/// Format a millisecond epoch timestamp, empty when unset
fn format_millis(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}

impl PlainRender for User {
    fn render_plain(&self) -> String {
        format!(
            "id: {}\n\
             username: {}\n\
             nickname: {}\n\
             position: {}\n\
             first_name: {}\n\
             last_name: {}\n\
             email: {}\n\
             auth_service: {}\n\
             created: {}",
            self.id,
            self.username,
            self.nickname,
            self.position,
            self.first_name,
            self.last_name,
            self.email,
            self.auth_service,
            format_millis(self.create_at)
        )
    }
}
