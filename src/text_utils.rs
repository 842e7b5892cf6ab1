use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::content::post_date::PostDate;

pub fn format_date(date: &PostDate) -> String {
    date.0.format("%Y-%m-%d").to_string()
}

/// Human readable form used in page headers, e.g. "January 15, 2024"
pub fn format_long_date(date: &PostDate) -> String {
    date.0.format("%B %-d, %Y").to_string()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::MIN)
}

/// Post slug built from its date and title, e.g. `20240229_post_title_of_mine`
pub fn slug_from_title(title: &str, date: &NaiveDate) -> String {
    let ascii = unidecode::unidecode(title);
    let alpha_chars: String = ascii.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '_' || c == '-')
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();

    let mut url = String::new();
    let mut prev_char = None;
    for c in alpha_chars.chars() {
        if c != '_' || prev_char != Some('_') {
            url.push(c);
        }
        prev_char = Some(c);
    }

    format!("{}_{}", date.format("%Y%m%d"), url.trim_matches('_'))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_format_date() {
        let date = PostDate::from_str("2017-09-03").unwrap();
        assert_eq!(format_date(&date), "2017-09-03");
        assert_eq!(format_long_date(&date), "September 3, 2017");
        assert_eq!(start_of_day(date.0).format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_slug_from_title() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(slug_from_title("Post title of mine ábaco - dir2", &date), "20240229_post_title_of_mine_abaco_dir2");
        assert_eq!(slug_from_title("  Hello, World!  ", &date), "20240229_hello_world");
    }
}
