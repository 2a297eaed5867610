//! The wall-clock time an alarm is programmed with.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// A wall-clock time the RTC alarm can be programmed to, with one-second
/// resolution.
///
/// The fields are not validated on construction. The register encoding
/// decides what an out-of-range field turns into (see
/// [`to_bcd8`](super::encoding::to_bcd8)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeAlarmTime {
    pub year: u16,
    /// `1..=12`
    pub month: u8,
    /// `1..=31`
    pub day: u8,
    /// `0..=23`
    pub hour: u8,
    /// `0..=59`
    pub minute: u8,
    /// `0..=59`
    pub second: u8,
}

/// Error type returned when a date/time can't be represented by
/// [`WakeAlarmTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromDateTimeError(());

impl WakeAlarmTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct a `WakeAlarmTime` from a UNIX timestamp, interpreted as UTC.
    /// Returns `None` if the timestamp is out of range.
    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        let dt = DateTime::<Utc>::from_timestamp(secs, 0)?;
        Self::try_from(dt.naive_utc()).ok()
    }

    /// Get the corresponding UNIX timestamp. Returns `None` if the fields
    /// don't form a valid date/time.
    pub fn to_unix_seconds(&self) -> Option<i64> {
        Some(self.to_naive_date_time()?.and_utc().timestamp())
    }

    /// Returns `None` if the fields don't form a valid date/time.
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())?.and_hms_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )
    }
}

impl TryFrom<NaiveDateTime> for WakeAlarmTime {
    type Error = TryFromDateTimeError;

    /// The sub-second part is truncated. Fails if the year is negative or
    /// doesn't fit in `u16`.
    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Ok(Self {
            year: value
                .year()
                .try_into()
                .map_err(|_| TryFromDateTimeError(()))?,
            month: value.month() as u8,
            day: value.day() as u8,
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
        })
    }
}
