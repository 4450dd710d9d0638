use chrono::{Datelike, Month};

use crate::error::SeasonError;
use crate::seasons::{MONTHS, Season, SeasonConvention, month_from_number};

/// Calendar month of `date`.
#[inline]
pub fn month_of<D: Datelike>(date: &D) -> Month {
    // chrono keeps month0 within 0..12
    MONTHS[date.month0() as usize]
}

/// Meteorological season of `date` under `convention`.
pub fn classify<C, D>(convention: &C, date: &D) -> Season
where
    C: SeasonConvention + ?Sized,
    D: Datelike,
{
    convention.season(month_of(date))
}

/// Meteorological season of a raw 1-based month number.
///
/// Numbers outside `1..=12` are rejected with [`SeasonError::InvalidMonth`].
pub fn classify_month<C>(convention: &C, month: u32) -> Result<Season, SeasonError>
where
    C: SeasonConvention + ?Sized,
{
    Ok(convention.season(month_from_number(month)?))
}
