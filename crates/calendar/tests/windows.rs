use chrono::{Datelike, NaiveDate};
use naiad_calendar::{month_sequence, month_start, water_year, water_year_bounds};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn consecutive_water_years_tile_the_calendar() {
    // The day after WY(Y) ends must be the first day of WY(Y+1).
    for wy in 1970..1975 {
        let (_, end) = water_year_bounds(wy, 10).unwrap();
        let (next_start, _) = water_year_bounds(wy + 1, 10).unwrap();
        assert_eq!(end.succ_opt().unwrap(), next_start);
    }
}

#[test]
fn fifty_year_reference_window() {
    let (start, _) = water_year_bounds(1970, 10).unwrap();
    let (_, end) = water_year_bounds(2019, 10).unwrap();
    assert_eq!(start, ymd(1969, 10, 1));
    assert_eq!(end, ymd(2019, 9, 30));
}

#[test]
fn boundary_days_label_correctly() {
    assert_eq!(water_year(1969, 10, 10).unwrap(), 1970); // first day of WY 1970
    assert_eq!(water_year(1970, 9, 10).unwrap(), 1970); // last day of WY 1970
    assert_eq!(water_year(1970, 10, 10).unwrap(), 1971); // first day of WY 1971
}

#[test]
fn month_sequence_spans_water_year_window() {
    let (start, end) = water_year_bounds(1970, 10).unwrap();
    let months = month_sequence(start, end);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].month(), 10);
    assert_eq!(months[11].month(), 9);
    for m in &months {
        assert_eq!(*m, month_start(*m));
    }
}
