//! Display formatting in the `pt-BR` conventions used across the console.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Local, TimeZone};

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Table numbers are always shown with at least two digits.
pub fn pad_table_number(numero: i64) -> String {
    format!("{numero:02}")
}

/// `dd/mm/yyyy hh:mm` in the browser's local time zone.
pub fn format_date_time(raw: &str) -> String {
    format_in(raw, &Local, "%d/%m/%Y %H:%M")
}

/// `dd/mm/yyyy` in local time.
pub fn format_date(raw: &str) -> String {
    format_in(raw, &Local, "%d/%m/%Y")
}

/// `hh:mm` in local time.
pub fn format_time(raw: &str) -> String {
    format_in(raw, &Local, "%H:%M")
}

/// Render an RFC 3339 timestamp in `tz`; unparseable input is returned as is.
pub fn format_in<Tz: TimeZone>(raw: &str, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(tz).format(pattern).to_string(),
        Err(e) => {
            log::debug!("unparseable timestamp {raw:?}: {e}");
            raw.to_owned()
        }
    }
}
