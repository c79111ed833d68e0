//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

/// Left-align `s` in a field `width` characters wide
pub fn pad(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count >= width {
        s.to_string()
    } else {
        let mut out = String::with_capacity(s.len() + width - count);
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', width - count));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Chad", 10), "Chad");
        assert_eq!(truncate("Côte d'Ivoire", 5), "Côte…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("Åland", 7), "Åland  ");
        assert_eq!(pad("Mauritania", 4), "Mauritania");
    }

    #[test]
    fn test_format_time() {
        let dt = Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("valid local time");
        assert_eq!(format_time(&dt), "07:05:01");
    }
}
