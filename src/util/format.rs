use time::OffsetDateTime;
use time::macros::format_description;

/// Format a character or byte count for log lines (B, KB, MB)
pub fn format_size(count: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let count_f = count as f64;
    if count_f >= MB {
        format!("{:.1} MB", count_f / MB)
    } else if count_f >= KB {
        format!("{:.1} KB", count_f / KB)
    } else {
        format!("{} B", count)
    }
}

/// Format a Unix timestamp as "YYYY-MM-DD HH:MM:SS UTC"; 0 means "never"
pub fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "never".to_string();
    }

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| {
            let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
            dt.format(&format).ok()
        })
        .unwrap_or_else(|| timestamp.to_string())
}

/// Current wall-clock time in seconds since the epoch
pub fn now_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(10 * 1024), "10.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.5 MB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_timestamp(0), "never");
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_timestamp() > 1_577_836_800);
    }
}
