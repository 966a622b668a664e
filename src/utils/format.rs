use chrono::{DateTime, FixedOffset};

/// German short date, e.g. `15.02.2022`
pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Cut `text` to at most `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
