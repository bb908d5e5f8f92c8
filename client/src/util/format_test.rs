use chrono::{FixedOffset, Utc};

use super::*;

#[test]
fn brl_groups_thousands_and_uses_comma_decimals() {
    assert_eq!(format_brl(1234.56), "R$ 1.234,56");
    assert_eq!(format_brl(1_234_567.0), "R$ 1.234.567,00");
    assert_eq!(format_brl(0.5), "R$ 0,50");
    assert_eq!(format_brl(999.999), "R$ 1.000,00");
}

#[test]
fn brl_marks_negative_amounts() {
    assert_eq!(format_brl(-12.3), "-R$ 12,30");
    assert_eq!(format_brl(-0.001), "R$ 0,00");
}

#[test]
fn table_numbers_are_zero_padded() {
    assert_eq!(pad_table_number(3), "03");
    assert_eq!(pad_table_number(12), "12");
    assert_eq!(pad_table_number(105), "105");
}

#[test]
fn timestamps_render_in_requested_zone() {
    let raw = "2025-03-01T18:05:00.000Z";
    assert_eq!(format_in(raw, &Utc, "%d/%m/%Y %H:%M"), "01/03/2025 18:05");
    let brt = FixedOffset::west_opt(3 * 3600).unwrap();
    assert_eq!(format_in(raw, &brt, "%d/%m/%Y %H:%M"), "01/03/2025 15:05");
    assert_eq!(format_in(raw, &brt, "%H:%M"), "15:05");
}

#[test]
fn unparseable_timestamps_fall_back_to_raw() {
    assert_eq!(format_date_time("ontem"), "ontem");
    assert_eq!(format_date(""), "");
}
