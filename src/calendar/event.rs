use chrono::{Days, NaiveDate, NaiveDateTime};

/// Escape line breaks as the two-character sequence `\n` so a value fits on one content line
pub fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\\n").replace('\n', "\\n")
}

/// Render a whole-day, single-day event.
///
/// The time of `start` is ignored and the event ends on the following day.
/// Without a description the `DESCRIPTION` line is left out. The returned
/// block has no trailing line break.
pub fn render_event(
    uid: &str,
    start: NaiveDateTime,
    summary: &str,
    description: Option<&str>,
) -> String {
    let start = start.date();
    // Excel dates stop at 9999-12-31, well inside chrono's range
    let end = start.checked_add_days(Days::new(1)).unwrap_or(start);

    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", escape_text(uid)),
        "TRANSP:TRANSPARENT".to_string(),
        "X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:AUTOMATIC".to_string(),
        format!("DTSTART;VALUE=DATE:{}", format_date(start)),
        format!("DTEND;VALUE=DATE:{}", format_date(end)),
        format!("SUMMARY:{}", escape_text(summary)),
    ];
    if let Some(description) = description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    lines.push("END:VEVENT".to_string());

    lines.join("\n")
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_render_full_event() {
        let event = render_event(
            "2024-Team_Meeting@x.local",
            at(2024, 3, 4, 0),
            "Team Meeting",
            Some("Weekly sync"),
        );
        assert_eq!(
            event,
            "BEGIN:VEVENT\n\
             UID:2024-Team_Meeting@x.local\n\
             TRANSP:TRANSPARENT\n\
             X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:AUTOMATIC\n\
             DTSTART;VALUE=DATE:20240304\n\
             DTEND;VALUE=DATE:20240305\n\
             SUMMARY:Team Meeting\n\
             DESCRIPTION:Weekly sync\n\
             END:VEVENT"
        );
    }

    #[test]
    fn test_render_without_description() {
        let event = render_event("uid", at(2024, 3, 4, 0), "Title", None);
        assert!(!event.contains("DESCRIPTION"));
        assert_eq!(event.lines().count(), 8);
        assert!(event.ends_with("SUMMARY:Title\nEND:VEVENT"));
    }

    #[test]
    fn test_time_of_day_is_dropped() {
        let event = render_event("uid", at(2024, 3, 4, 23), "T", None);
        assert!(event.contains("DTSTART;VALUE=DATE:20240304\n"));
        assert!(event.contains("DTEND;VALUE=DATE:20240305\n"));
    }

    #[test]
    fn test_end_date_crosses_year() {
        let event = render_event("uid", at(2024, 12, 31, 0), "T", None);
        assert!(event.contains("DTSTART;VALUE=DATE:20241231\n"));
        assert!(event.contains("DTEND;VALUE=DATE:20250101\n"));
    }

    #[test]
    fn test_end_date_crosses_month_in_leap_year() {
        let event = render_event("uid", at(2024, 2, 28, 0), "T", None);
        assert!(event.contains("DTEND;VALUE=DATE:20240229\n"));

        let event = render_event("uid", at(2023, 2, 28, 0), "T", None);
        assert!(event.contains("DTEND;VALUE=DATE:20230301\n"));
    }

    #[test]
    fn test_multiline_description_is_escaped() {
        let event = render_event(
            "uid",
            at(2024, 3, 4, 0),
            "T",
            Some("line one\nline two\r\nline three"),
        );
        let description: Vec<&str> = event
            .lines()
            .filter(|line| line.starts_with("DESCRIPTION:"))
            .collect();
        assert_eq!(
            description,
            vec!["DESCRIPTION:line one\\nline two\\nline three"]
        );
        assert_eq!(event.lines().count(), 9);
    }

    #[test]
    fn test_multiline_title_keeps_one_property_per_line() {
        let event = render_event(
            "2024-Club\nMeeting@x.local",
            at(2024, 3, 4, 0),
            "Club\nMeeting",
            None,
        );
        assert!(event.contains("UID:2024-Club\\nMeeting@x.local\n"));
        assert!(event.contains("SUMMARY:Club\\nMeeting\n"));
        assert!(event.lines().all(|line| line.contains(':')));
        assert_eq!(event.lines().count(), 8);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
    }
}
