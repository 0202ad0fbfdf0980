//! Weekday and month names and their cron numbers.

/// Day of the week, numbered the cron way (Sunday = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Cron weekday number. Both 0 and 7 are Sunday.
    pub fn from_cron(n: u32) -> Option<Self> {
        match n {
            0 | 7 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Upper-case three-letter abbreviation as written in cron fields.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Sunday => "SUN",
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
        }
    }
}

/// Case-insensitive lookup of a three-letter weekday abbreviation.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    Weekday::ALL
        .into_iter()
        .find(|d| d.abbreviation().eq_ignore_ascii_case(s))
}

/// Month of the year, numbered 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub const ALL: [MonthName; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::January => "JAN",
            Self::February => "FEB",
            Self::March => "MAR",
            Self::April => "APR",
            Self::May => "MAY",
            Self::June => "JUN",
            Self::July => "JUL",
            Self::August => "AUG",
            Self::September => "SEP",
            Self::October => "OCT",
            Self::November => "NOV",
            Self::December => "DEC",
        }
    }
}

/// Case-insensitive lookup of a three-letter month abbreviation.
pub fn parse_month_name(s: &str) -> Option<MonthName> {
    MonthName::ALL
        .into_iter()
        .find(|m| m.abbreviation().eq_ignore_ascii_case(s))
}

/// English weekday name for a cron weekday number.
pub fn day_name(n: u32) -> Option<&'static str> {
    Weekday::from_cron(n).map(Weekday::name)
}

/// English month name for a month number.
pub fn month_name(n: u32) -> Option<&'static str> {
    MonthName::from_number(n).map(MonthName::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunday_is_zero_and_seven() {
        assert_eq!(day_name(0), Some("Sunday"));
        assert_eq!(day_name(7), Some("Sunday"));
        assert_eq!(day_name(8), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_abbreviations_case_insensitive() {
        assert_eq!(parse_weekday("mOn"), Some(Weekday::Monday));
        assert_eq!(parse_weekday("monday"), None);
        assert_eq!(parse_month_name("jan").map(MonthName::number), Some(1));
        assert_eq!(parse_month_name("Dec").map(MonthName::number), Some(12));
    }

    #[test]
    fn test_number_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_cron(day.number()), Some(day));
        }
        for month in MonthName::ALL {
            assert_eq!(MonthName::from_number(month.number()), Some(month));
        }
    }
}
