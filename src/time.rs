use crate::error::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

/// Signed flight duration in whole minutes.
///
/// Negative values are kept as they are: a wall-clock delta of an overnight
/// flight comes out negative and callers decide what to do with it.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Minutes(pub i64);

impl Minutes {
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<TimeDelta> for Minutes {
    fn from(delta: TimeDelta) -> Self {
        Minutes(delta.num_minutes())
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let total = self.0.unsigned_abs();
        write!(f, "{}{} hours {} minutes", sign, total / 60, total % 60)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationMode {
    /// Use dates when the ticket carries them, times of day otherwise.
    #[default]
    ByFields,
    /// Ignore dates and subtract times of day.
    WallClock,
}

/// Departure and arrival of one ticket in whichever encoding it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    WallClock {
        departure: NaiveTime,
        arrival: NaiveTime,
    },
    Dated {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },
}

impl Timing {
    pub fn from_fields(
        departure_date: Option<&str>,
        departure_time: &str,
        arrival_date: Option<&str>,
        arrival_time: &str,
        mode: DurationMode,
    ) -> Result<Timing, ParseError> {
        match (mode, departure_date, arrival_date) {
            (DurationMode::WallClock, _, _) | (DurationMode::ByFields, None, None) => {
                Ok(Timing::WallClock {
                    departure: parse_time_of_day("departure_time", departure_time)?,
                    arrival: parse_time_of_day("arrival_time", arrival_time)?,
                })
            }
            (DurationMode::ByFields, Some(dep_date), Some(arr_date)) => Ok(Timing::Dated {
                departure: parse_date("departure_date", dep_date)?
                    .and_time(parse_time_of_day("departure_time", departure_time)?),
                arrival: parse_date("arrival_date", arr_date)?
                    .and_time(parse_time_of_day("arrival_time", arrival_time)?),
            }),
            (DurationMode::ByFields, Some(_), None) => Err(ParseError::new(
                "arrival_date",
                "",
                "missing while departure_date is set",
            )),
            (DurationMode::ByFields, None, Some(_)) => Err(ParseError::new(
                "departure_date",
                "",
                "missing while arrival_date is set",
            )),
        }
    }

    pub fn duration(&self) -> Minutes {
        match self {
            Timing::WallClock { departure, arrival } => Minutes::from(*arrival - *departure),
            Timing::Dated { departure, arrival } => Minutes::from(*arrival - *departure),
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `H:mm`: one or two hour digits, exactly two minute digits.
pub fn parse_time_of_day(field: &'static str, value: &str) -> Result<NaiveTime, ParseError> {
    let (hour, minute) = value
        .split_once(':')
        .ok_or_else(|| ParseError::new(field, value, "expected H:mm"))?;
    if !all_digits(hour) || hour.len() > 2 {
        return Err(ParseError::new(field, value, "hour must be 1 or 2 digits"));
    }
    if !all_digits(minute) || minute.len() != 2 {
        return Err(ParseError::new(field, value, "minute must be 2 digits"));
    }
    let hour = hour
        .parse::<u32>()
        .map_err(|_| ParseError::new(field, value, "hour is not a number"))?;
    let minute = minute
        .parse::<u32>()
        .map_err(|_| ParseError::new(field, value, "minute is not a number"))?;
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ParseError::new(field, value, "hour or minute out of range"))
}

/// Parses `dd.MM.yy`. Two-digit years land in 2000-2099.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ParseError> {
    let parts = value.split('.').collect::<Vec<&str>>();
    let [day, month, year] = parts.as_slice() else {
        return Err(ParseError::new(field, value, "expected dd.MM.yy"));
    };
    if [*day, *month, *year].iter().any(|p| !all_digits(p) || p.len() != 2) {
        return Err(ParseError::new(field, value, "expected dd.MM.yy"));
    }
    let number = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| ParseError::new(field, value, "expected dd.MM.yy"))
    };
    let (day, month, year) = (number(*day)?, number(*month)?, number(*year)?);
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
        .ok_or_else(|| ParseError::new(field, value, "no such calendar date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(dep: &str, arr: &str) -> Result<Minutes, ParseError> {
        Timing::from_fields(None, dep, None, arr, DurationMode::ByFields).map(|t| t.duration())
    }

    #[test]
    fn test_display_zero() {
        assert_eq!("0 hours 0 minutes", Minutes(0).to_string());
    }

    #[test]
    fn test_display_splits_hours_and_minutes() {
        assert_eq!("4 hours 30 minutes", Minutes(270).to_string());
        assert_eq!("25 hours 5 minutes", Minutes(1505).to_string());
    }

    #[test]
    fn test_display_negative_uses_magnitude() {
        assert_eq!("-20 hours 0 minutes", Minutes(-1200).to_string());
        assert_eq!("-0 hours 45 minutes", Minutes(-45).to_string());
    }

    #[test]
    fn test_wall_clock_same_day() {
        assert_eq!(Ok(Minutes(270)), wall("10:00", "14:30"));
    }

    #[test]
    fn test_wall_clock_overnight_is_negative() {
        assert_eq!(Ok(Minutes(-1200)), wall("22:00", "02:00"));
    }

    #[test]
    fn test_unpadded_hour() {
        assert_eq!(Ok(Minutes(125)), wall("9:05", "11:10"));
    }

    #[test]
    fn test_dated_spans_midnight() {
        let timing = Timing::from_fields(
            Some("01.06.24"),
            "23:00",
            Some("02.06.24"),
            "1:30",
            DurationMode::ByFields,
        )
        .unwrap();
        assert!(matches!(timing, Timing::Dated { .. }));
        assert_eq!(Minutes(150), timing.duration());
    }

    #[test]
    fn test_dated_across_month_end() {
        let timing = Timing::from_fields(
            Some("31.12.23"),
            "22:15",
            Some("01.01.24"),
            "06:00",
            DurationMode::ByFields,
        )
        .unwrap();
        assert_eq!(Minutes(465), timing.duration());
    }

    #[test]
    fn test_wall_clock_mode_ignores_dates() {
        let timing = Timing::from_fields(
            Some("01.06.24"),
            "23:00",
            Some("02.06.24"),
            "01:30",
            DurationMode::WallClock,
        )
        .unwrap();
        assert!(matches!(timing, Timing::WallClock { .. }));
        assert_eq!(Minutes(-1290), timing.duration());
    }

    #[test]
    fn test_malformed_times() {
        for bad in ["24:00", "9:5", "ab:cd", "930", "123:00", "12:60", ""] {
            let err = parse_time_of_day("departure_time", bad).unwrap_err();
            assert_eq!("departure_time", err.field);
            assert_eq!(bad, err.value);
        }
    }

    #[test]
    fn test_malformed_dates() {
        for bad in ["1.06.24", "01-06-24", "01.06.2024", "31.02.24", "00.01.24", "xx.06.24"] {
            assert!(parse_date("arrival_date", bad).is_err(), "{bad} parsed");
        }
    }

    #[test]
    fn test_two_digit_year_is_this_century() {
        assert_eq!(
            NaiveDate::from_ymd_opt(2018, 5, 12),
            parse_date("departure_date", "12.05.18").ok()
        );
    }

    #[test]
    fn test_lone_date_is_rejected() {
        let err = Timing::from_fields(Some("01.06.24"), "10:00", None, "12:00", DurationMode::ByFields)
            .unwrap_err();
        assert_eq!("arrival_date", err.field);

        let err = Timing::from_fields(None, "10:00", Some("01.06.24"), "12:00", DurationMode::ByFields)
            .unwrap_err();
        assert_eq!("departure_date", err.field);
    }

    #[test]
    fn test_bad_time_inside_dated_ticket() {
        let err = Timing::from_fields(
            Some("01.06.24"),
            "10:00",
            Some("01.06.24"),
            "25:00",
            DurationMode::ByFields,
        )
        .unwrap_err();
        assert_eq!("arrival_time", err.field);
    }
}
