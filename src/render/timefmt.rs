use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Backend timestamps are RFC 3339, or naive ISO-8601 (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// `dd/mm/yy HH:MM` in `tz`; unparseable input is echoed back.
pub fn format_timestamp(raw: &str, tz: Tz) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(&tz).format("%d/%m/%y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

pub fn relative_time(raw: &str, now: DateTime<Utc>, tz: Tz) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let minutes = (now - ts).num_minutes();
    if minutes < 1 {
        "Ahora mismo".to_string()
    } else if minutes < 60 {
        format!("hace {minutes}m")
    } else if minutes < 1440 {
        format!("hace {}h", minutes / 60)
    } else {
        ts.with_timezone(&tz).format("%d/%m").to_string()
    }
}
