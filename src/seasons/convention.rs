use std::borrow::Cow;

use chrono::Month;

use crate::error::SeasonError;
use crate::seasons::Season;

/// Calendar months in order, January first.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Converts a 1-based month number into a [`Month`].
pub fn month_from_number(number: u32) -> Result<Month, SeasonError> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(SeasonError::InvalidMonth(number))
}

/// Converts a month counted from zero (0 = January) into a [`Month`].
pub fn month_from_zero_based(index: u32) -> Result<Month, SeasonError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTHS.get(i).copied())
        .ok_or(SeasonError::InvalidMonth(index))
}

/// A naming scheme that maps calendar months onto seasons.
///
/// [`Location`](crate::seasons::Location) covers the built-in conventions.
/// Anything else implementing this trait can be classified and applied the
/// same way, e.g. a [`QuarterTable`] or [`MonthTable`] built at runtime.
pub trait SeasonConvention {
    /// Short symbolic name, e.g. `"north"`.
    fn name(&self) -> &str;

    /// The season active during `month`.
    fn season(&self, month: Month) -> Season;

    /// Distinct seasons of this convention in order of first appearance,
    /// starting from January.
    fn vocabulary(&self) -> Vec<Season> {
        let mut out = Vec::with_capacity(4);
        for month in MONTHS {
            let season = self.season(month);
            if !out.contains(&season) {
                out.push(season);
            }
        }
        out
    }
}

impl<C: SeasonConvention + ?Sized> SeasonConvention for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn season(&self, month: Month) -> Season {
        (**self).season(month)
    }
}

impl<C: SeasonConvention + ?Sized> SeasonConvention for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn season(&self, month: Month) -> Season {
        (**self).season(month)
    }
}

/// Meteorological quarter of a month: DJF = 0, MAM = 1, JJA = 2, SON = 3.
#[inline]
pub fn quarter(month: Month) -> usize {
    match month {
        Month::December | Month::January | Month::February => 0,
        Month::March | Month::April | Month::May => 1,
        Month::June | Month::July | Month::August => 2,
        Month::September | Month::October | Month::November => 3,
    }
}

/// Convention with one season per meteorological quarter.
///
/// `seasons` is indexed by [`quarter`], so the first entry covers
/// December through February.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterTable {
    name: Cow<'static, str>,
    seasons: [Season; 4],
}

impl QuarterTable {
    pub const fn from_static(name: &'static str, seasons: [Season; 4]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            seasons,
        }
    }

    pub fn new<N: Into<String>>(name: N, seasons: [Season; 4]) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            seasons,
        }
    }

    pub fn seasons(&self) -> &[Season; 4] {
        &self.seasons
    }
}

impl SeasonConvention for QuarterTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn season(&self, month: Month) -> Season {
        self.seasons[quarter(month)]
    }
}

/// Convention with an explicit season for every month, January first.
///
/// Used where seasons do not line up with the three-month quarters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    name: Cow<'static, str>,
    seasons: [Season; 12],
}

impl MonthTable {
    pub const fn from_static(name: &'static str, seasons: [Season; 12]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            seasons,
        }
    }

    pub fn new<N: Into<String>>(name: N, seasons: [Season; 12]) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            seasons,
        }
    }
}

impl SeasonConvention for MonthTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn season(&self, month: Month) -> Season {
        self.seasons[month.number_from_month() as usize - 1]
    }
}
