//! Month grid for the calendar page.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// `(year, month)` that is `offset` months away from `today`'s month.
pub fn month_for_offset(today: NaiveDate, offset: i32) -> (i32, u32) {
    let index = today.year() * 12 + today.month0() as i32 + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Cells of the month view: `None` pads the weekdays before the 1st
/// (weeks start on Sunday), then the day numbers.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    std::iter::repeat(None)
        .take(leading)
        .chain((1..=days_in_month(year, month)).map(Some))
        .collect()
}

pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_for_offset_rollover() {
        let today = date(2024, 3, 15);
        assert_eq!(month_for_offset(today, 0), (2024, 3));
        assert_eq!(month_for_offset(today, -3), (2023, 12));
        assert_eq!(month_for_offset(today, 10), (2025, 1));
        assert_eq!(month_for_offset(today, -15), (2022, 12));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_month_grid() {
        // 1 марта 2024: пятница
        let grid = month_grid(2024, 3);
        assert_eq!(grid.len(), 5 + 31);
        assert!(grid[..5].iter().all(Option::is_none));
        assert_eq!(grid[5], Some(1));
        assert_eq!(grid.last(), Some(&Some(31)));

        // 1 сентября 2024: воскресенье, без отступа
        assert_eq!(month_grid(2024, 9)[0], Some(1));
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(2024, 3), "March 2024");
        assert_eq!(month_title(2024, 12), "December 2024");
    }
}
