use std::ops::Index;

#[cfg(feature = "serde")]
use serde::ser::SerializeMap;
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::error::Span;

/// The seven positional slots of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
        Self::Year,
    ];

    /// Position in the seven-slot array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day_of_month",
            Self::Month => "month",
            Self::DayOfWeek => "day_of_week",
            Self::Year => "year",
        }
    }

    /// Prefix used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Second => "Second",
            Self::Minute => "Minute",
            Self::Hour => "Hour",
            Self::DayOfMonth => "DayOfMonth",
            Self::Month => "Month",
            Self::DayOfWeek => "DayOfWeek",
            Self::Year => "Year",
        }
    }
}

/// A cron expression split into its seven slots, before normalization.
///
/// Slots the input did not supply (seconds and year for five-part
/// expressions) hold the empty string and have no span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    pub(crate) input: String,
    pub(crate) parts: [String; 7],
    pub(crate) spans: [Option<Span>; 7],
    pub(crate) arity: usize,
}

impl CronExpression {
    /// The raw text this expression was parsed from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of whitespace-separated parts in the input (5, 6 or 7).
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn get(&self, field: Field) -> &str {
        &self.parts[field.index()]
    }

    /// Location of `field` in the raw input, if the input supplied it.
    pub fn span(&self, field: Field) -> Option<Span> {
        self.spans[field.index()]
    }

    pub fn is_present(&self, field: Field) -> bool {
        self.spans[field.index()].is_some()
    }

    pub fn parts(&self) -> &[String; 7] {
        &self.parts
    }
}

impl Index<Field> for CronExpression {
    type Output = str;

    fn index(&self, field: Field) -> &str {
        self.get(field)
    }
}

/// Canonical seven-slot form consumed by the description generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedExpression {
    parts: [String; 7],
}

impl NormalizedExpression {
    pub fn from_parts(parts: [String; 7]) -> Self {
        Self { parts }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.parts[field.index()]
    }

    pub fn parts(&self) -> &[String; 7] {
        &self.parts
    }

    pub fn into_parts(self) -> [String; 7] {
        self.parts
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Index<Field> for NormalizedExpression {
    type Output = str;

    fn index(&self, field: Field) -> &str {
        self.get(field)
    }
}

#[cfg(feature = "serde")]
impl Serialize for NormalizedExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}
