pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// "3h ago" style age for a video's `created_at` timestamp.
pub fn format_time_since(iso_date: &str) -> String {
    time_since(iso_date, chrono::Utc::now())
}

fn time_since(iso_date: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let date = match iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        Ok(d) => d,
        Err(_) => return format_iso8601_date(iso_date),
    };

    let duration = now.signed_duration_since(date);
    let seconds = duration.num_seconds();

    if seconds < 60 {
        return String::from("just now");
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d ago", days);
    }

    date.format("%Y-%m-%d").to_string()
}

/// Derives a presentable name from the local part of an email address:
/// "ravi.kumar@x.edu" becomes "Ravi Kumar".
pub fn format_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Single letter shown in the avatar placeholder.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn time_since_picks_the_largest_unit() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        assert_eq!(time_since("2025-06-15T11:59:30Z", now), "just now");
        assert_eq!(time_since("2025-06-15T11:15:00Z", now), "45m ago");
        assert_eq!(time_since("2025-06-15T07:00:00Z", now), "5h ago");
        assert_eq!(time_since("2025-06-12T12:00:00Z", now), "3d ago");
    }

    #[test]
    fn time_since_falls_back_to_dates_for_old_or_unparsable_input() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        assert_eq!(time_since("2024-01-10T00:00:00Z", now), "2024-01-10");
        assert_eq!(time_since("not a date", now), "not a date");
    }

    #[test]
    fn name_from_email_capitalizes_each_part() {
        assert_eq!(format_name_from_email("ravi.kumar@example.edu"), "Ravi Kumar");
        assert_eq!(format_name_from_email("asha_r-nair@example.edu"), "Asha R Nair");
        assert_eq!(format_name_from_email("solo@example.edu"), "Solo");
        assert_eq!(format_name_from_email("noatsign"), "Noatsign");
    }

    #[test]
    fn avatar_initial_is_uppercased_first_char() {
        assert_eq!(avatar_initial("ravi"), "R");
        assert_eq!(avatar_initial("  Asha"), "A");
        assert_eq!(avatar_initial(""), "?");
    }
}
