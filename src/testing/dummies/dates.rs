use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn mid_month(year: i32, month: u32) -> NaiveDate {
    date(year, month, 15)
}
