// Grammar checks for the fields of a cron expression.
//
// Each field kind has one `FieldGrammar` entry: numeric bounds, accepted
// names, step bounds, list limit and the field-specific modifiers. A single
// matcher walks that table, so the six kinds share one code path.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ast::{CronExpression, Field};
use crate::error::DescriptionError;
use crate::names::{parse_month_name, parse_weekday, MonthName, Weekday};

/// Named tokens a field accepts in place of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Names {
    None,
    Weekdays,
    Months,
}

/// Field-specific syntax beyond values, ranges, steps and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `?`: no specific value.
    NoSpecificValue,
    /// `L`, `LW`, `WL`: last day or last weekday of the month.
    LastDayOfMonth,
    /// `nW` or `Wn`: weekday nearest day n.
    NearestWeekday,
    /// `L-n`: n days before the last day of the month.
    LastDayOffset,
    /// `d#k`: the k-th weekday d of the month.
    NthWeekday,
    /// `dL`: the last weekday d of the month.
    LastWeekday,
}

/// Accepted syntax and bounds for one kind of field.
#[derive(Debug)]
pub struct FieldGrammar {
    pub min: u32,
    pub max: u32,
    /// Allowed digit count for plain values.
    pub value_digits: (usize, usize),
    pub step_min: u32,
    pub step_max: u32,
    pub step_digits: (usize, usize),
    /// Maximum number of comma-separated items.
    pub list_limit: usize,
    pub names: Names,
    /// Step base that means "from the first value" (`0/5`, `1/2`).
    pub step_origin: &'static str,
    pub modifiers: &'static [Modifier],
}

static SECOND_MINUTE: FieldGrammar = FieldGrammar {
    min: 0,
    max: 59,
    value_digits: (1, 2),
    step_min: 0,
    step_max: 59,
    step_digits: (1, 2),
    list_limit: 60,
    names: Names::None,
    step_origin: "0",
    modifiers: &[],
};

static HOUR: FieldGrammar = FieldGrammar {
    min: 0,
    max: 23,
    value_digits: (1, 2),
    step_min: 0,
    step_max: 23,
    step_digits: (1, 2),
    list_limit: 24,
    names: Names::None,
    step_origin: "0",
    modifiers: &[],
};

static DAY_OF_MONTH: FieldGrammar = FieldGrammar {
    min: 1,
    max: 31,
    value_digits: (1, 2),
    step_min: 0,
    step_max: 31,
    step_digits: (1, 2),
    list_limit: 31,
    names: Names::None,
    step_origin: "1",
    modifiers: &[
        Modifier::NoSpecificValue,
        Modifier::LastDayOfMonth,
        Modifier::NearestWeekday,
        Modifier::LastDayOffset,
    ],
};

static MONTH: FieldGrammar = FieldGrammar {
    min: 1,
    max: 12,
    value_digits: (1, 2),
    step_min: 0,
    step_max: 12,
    step_digits: (1, 2),
    list_limit: 12,
    names: Names::Months,
    step_origin: "1",
    modifiers: &[],
};

static DAY_OF_WEEK: FieldGrammar = FieldGrammar {
    min: 0,
    max: 7,
    value_digits: (1, 1),
    step_min: 0,
    step_max: 7,
    step_digits: (1, 1),
    list_limit: 7,
    names: Names::Weekdays,
    step_origin: "1",
    modifiers: &[
        Modifier::NoSpecificValue,
        Modifier::NthWeekday,
        Modifier::LastWeekday,
    ],
};

static YEAR: FieldGrammar = FieldGrammar {
    min: 1970,
    max: 2099,
    value_digits: (4, 4),
    step_min: 0,
    step_max: 129,
    step_digits: (1, 3),
    list_limit: 84,
    names: Names::None,
    step_origin: "1",
    modifiers: &[],
};

impl FieldGrammar {
    pub fn for_field(field: Field) -> &'static FieldGrammar {
        match field {
            Field::Second | Field::Minute => &SECOND_MINUTE,
            Field::Hour => &HOUR,
            Field::DayOfMonth => &DAY_OF_MONTH,
            Field::Month => &MONTH,
            Field::DayOfWeek => &DAY_OF_WEEK,
            Field::Year => &YEAR,
        }
    }
}

static LAST_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(L|LW|WL)$").expect("valid pattern"));
static NEAREST_WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:(\d{1,2})W|W(\d{1,2}))$").expect("valid pattern"));
static LAST_DAY_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^L-(\d{1,2})$").expect("valid pattern"));
static NTH_WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d|[a-z]{3})#(\d)$").expect("valid pattern"));
static LAST_WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d|[a-z]{3})L$").expect("valid pattern"));

impl Modifier {
    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::NoSpecificValue => None,
            Self::LastDayOfMonth => Some(&LAST_DAY),
            Self::NearestWeekday => Some(&NEAREST_WEEKDAY),
            Self::LastDayOffset => Some(&LAST_DAY_OFFSET),
            Self::NthWeekday => Some(&NTH_WEEKDAY),
            Self::LastWeekday => Some(&LAST_WEEKDAY),
        }
    }

    /// `None` when `expr` is not written in this modifier's shape.
    fn check(self, matcher: &Matcher<'_>, expr: &str) -> Option<Result<(), DescriptionError>> {
        let Some(pattern) = self.pattern() else {
            return (expr == "?").then_some(Ok(()));
        };
        let caps = pattern.captures(expr)?;
        Some(self.check_captures(matcher, &caps))
    }

    fn check_captures(
        self,
        matcher: &Matcher<'_>,
        caps: &Captures<'_>,
    ) -> Result<(), DescriptionError> {
        match self {
            Self::NoSpecificValue | Self::LastDayOfMonth => Ok(()),
            Self::NearestWeekday => {
                let day = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                matcher.value(day).map(drop)
            }
            Self::LastDayOffset => matcher.value(&caps[1]).map(drop),
            Self::NthWeekday => {
                matcher.value(&caps[1])?;
                let count = &caps[2];
                match count.parse::<u32>() {
                    Ok(1..=5) => Ok(()),
                    _ => Err(DescriptionError::format(format!(
                        "({}) Accepted week value is 1~5 but '{count}' is provided",
                        matcher.label
                    ))),
                }
            }
            Self::LastWeekday => matcher.value(&caps[1]).map(drop),
        }
    }
}

/// Check every field the expression supplied.
///
/// Stops at the first field that does not match its grammar; the error
/// points at that field in the raw input.
pub fn validate(expr: &CronExpression) -> Result<(), DescriptionError> {
    for field in Field::ALL {
        let Some(span) = expr.span(field) else {
            continue;
        };
        validate_field(field, expr.get(field)).map_err(|e| e.with_span(span, expr.input()))?;
    }
    Ok(())
}

/// Check one field's raw text against its grammar.
pub fn validate_field(field: Field, text: &str) -> Result<(), DescriptionError> {
    Matcher {
        label: field.label(),
        grammar: FieldGrammar::for_field(field),
        expr: text,
    }
    .check()
}

struct Matcher<'a> {
    label: &'static str,
    grammar: &'static FieldGrammar,
    expr: &'a str,
}

impl Matcher<'_> {
    fn check(&self) -> Result<(), DescriptionError> {
        if self.expr == "*" {
            return Ok(());
        }
        for modifier in self.grammar.modifiers {
            if let Some(result) = modifier.check(self, self.expr) {
                return result;
            }
        }
        if self.expr.contains(',') {
            return self.check_list();
        }
        self.check_term(self.expr)
    }

    fn check_list(&self) -> Result<(), DescriptionError> {
        let items: Vec<&str> = self.expr.split(',').collect();
        if items.len() > self.grammar.list_limit {
            return Err(DescriptionError::format(format!(
                "({}) Exceeded maximum number({}) of specified value. '{}' is provided",
                self.label,
                self.grammar.list_limit,
                items.len()
            )));
        }
        for item in items {
            if item.contains('/') {
                return Err(self.illegal());
            }
            self.check_value_or_range(item)?;
        }
        Ok(())
    }

    fn check_term(&self, term: &str) -> Result<(), DescriptionError> {
        match term.split_once('/') {
            Some((base, step)) => {
                self.check_step(step)?;
                if base == "*" || base == self.grammar.step_origin {
                    Ok(())
                } else {
                    self.check_value_or_range(base)
                }
            }
            None => self.check_value_or_range(term),
        }
    }

    fn check_step(&self, step: &str) -> Result<(), DescriptionError> {
        let (lo, hi) = self.grammar.step_digits;
        let n = parse_digits(step, lo, hi).ok_or_else(|| self.illegal())?;
        if (self.grammar.step_min..=self.grammar.step_max).contains(&n) {
            Ok(())
        } else {
            Err(DescriptionError::format(format!(
                "({}) Accepted increment value range is {}~{} but '{step}' is provided",
                self.label, self.grammar.step_min, self.grammar.step_max
            )))
        }
    }

    fn check_value_or_range(&self, term: &str) -> Result<(), DescriptionError> {
        let Some((start, end)) = term.split_once('-') else {
            return self.value(term).map(drop);
        };
        let first = self.value(start)?;
        let last = self.value(end)?;
        if first <= last {
            return Ok(());
        }
        let (min, max) = if self.is_name(start) && self.is_name(end) {
            self.named_bounds()
        } else {
            (self.grammar.min.to_string(), self.grammar.max.to_string())
        };
        Err(DescriptionError::format(format!(
            "({}) Invalid range '{start}-{end}'. Accepted range is {min}-{max}",
            self.label
        )))
    }

    /// Numeric value of a single number or name, bounds-checked.
    fn value(&self, token: &str) -> Result<u32, DescriptionError> {
        let (lo, hi) = self.grammar.value_digits;
        if let Some(n) = parse_digits(token, lo, hi) {
            return if (self.grammar.min..=self.grammar.max).contains(&n) {
                Ok(n)
            } else {
                Err(DescriptionError::format(format!(
                    "{} values must be between {} and {} but '{token}' is provided",
                    self.label, self.grammar.min, self.grammar.max
                )))
            };
        }
        self.name_value(token).ok_or_else(|| self.illegal())
    }

    fn name_value(&self, token: &str) -> Option<u32> {
        match self.grammar.names {
            Names::None => None,
            Names::Weekdays => parse_weekday(token).map(Weekday::number),
            Names::Months => parse_month_name(token).map(MonthName::number),
        }
    }

    fn is_name(&self, token: &str) -> bool {
        self.name_value(token).is_some()
    }

    fn named_bounds(&self) -> (String, String) {
        match self.grammar.names {
            Names::Weekdays => (
                Weekday::Sunday.abbreviation().to_string(),
                Weekday::Saturday.abbreviation().to_string(),
            ),
            Names::Months => (
                MonthName::January.abbreviation().to_string(),
                MonthName::December.abbreviation().to_string(),
            ),
            Names::None => (self.grammar.min.to_string(), self.grammar.max.to_string()),
        }
    }

    fn illegal(&self) -> DescriptionError {
        DescriptionError::format(format!(
            "({}) Illegal Expression Format '{}'",
            self.label, self.expr
        ))
    }
}

/// Parse `s` as an unsigned number written with `lo..=hi` ASCII digits.
fn parse_digits(s: &str, lo: usize, hi: usize) -> Option<u32> {
    if (lo..=hi).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Span;
    use crate::parser::parse;

    fn ok(field: Field, text: &str) {
        if let Err(e) = validate_field(field, text) {
            panic!("{field:?} '{text}' should be valid: {e}");
        }
    }

    fn err(field: Field, text: &str) -> String {
        match validate_field(field, text) {
            Ok(()) => panic!("{field:?} '{text}' should be rejected"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_second_and_minute_shapes() {
        for text in ["*", "0", "59", "5-10", "*/15", "0/5", "10/5", "2-59/3", "1,2,3", "1,5-9"] {
            ok(Field::Second, text);
            ok(Field::Minute, text);
        }
    }

    #[test]
    fn test_minute_out_of_range() {
        assert_eq!(
            err(Field::Minute, "60"),
            "Minute values must be between 0 and 59 but '60' is provided"
        );
        assert_eq!(
            err(Field::Minute, "*/60"),
            "(Minute) Accepted increment value range is 0~59 but '60' is provided"
        );
    }

    #[test]
    fn test_illegal_format() {
        assert_eq!(err(Field::Minute, "$"), "(Minute) Illegal Expression Format '$'");
        assert_eq!(err(Field::Minute, "123"), "(Minute) Illegal Expression Format '123'");
        assert!(err(Field::Minute, "1,,2").contains("Illegal"));
        assert!(err(Field::Minute, "-5").contains("Illegal"));
        assert!(err(Field::Minute, "1/2/3").contains("Illegal"));
        assert!(err(Field::Minute, "1,*/5").contains("Illegal"));
        assert!(err(Field::Hour, "MON").contains("Illegal"));
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            err(Field::Hour, "20-10"),
            "(Hour) Invalid range '20-10'. Accepted range is 0-23"
        );
    }

    #[test]
    fn test_reversed_named_range() {
        assert_eq!(
            err(Field::DayOfWeek, "FRI-MON"),
            "(DayOfWeek) Invalid range 'FRI-MON'. Accepted range is SUN-SAT"
        );
        assert_eq!(
            err(Field::Month, "dec-jan"),
            "(Month) Invalid range 'dec-jan'. Accepted range is JAN-DEC"
        );
    }

    #[test]
    fn test_list_limit() {
        let too_many = (0..8).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(
            err(Field::DayOfWeek, &too_many),
            "(DayOfWeek) Exceeded maximum number(7) of specified value. '8' is provided"
        );
    }

    #[test]
    fn test_day_of_month_modifiers() {
        for text in ["?", "L", "LW", "WL", "lw", "15W", "W15", "L-5", "1-15", "1/3", "5,20"] {
            ok(Field::DayOfMonth, text);
        }
        assert!(err(Field::DayOfMonth, "32W").contains("between 1 and 31"));
        assert!(err(Field::DayOfMonth, "0").contains("between 1 and 31"));
        assert!(err(Field::DayOfMonth, "W").contains("Illegal"));
    }

    #[test]
    fn test_month_names() {
        for text in ["JAN", "jan", "Jan-Mar", "JAN,JUN", "3/2", "1-12/3"] {
            ok(Field::Month, text);
        }
        assert!(err(Field::Month, "13").contains("between 1 and 12"));
        assert!(err(Field::Month, "JANUARY").contains("Illegal"));
    }

    #[test]
    fn test_day_of_week_shapes() {
        for text in [
            "?", "0", "7", "MON-FRI", "MoN-fri", "MON#3", "1#5", "4L", "FRIL", "1-5/2",
            "MON-THU,SUN",
        ] {
            ok(Field::DayOfWeek, text);
        }
        assert_eq!(
            err(Field::DayOfWeek, "MON#6"),
            "(DayOfWeek) Accepted week value is 1~5 but '6' is provided"
        );
        assert!(err(Field::DayOfWeek, "8").contains("between 0 and 7"));
        assert!(err(Field::DayOfWeek, "XYZ").contains("Illegal"));
    }

    #[test]
    fn test_year_shapes() {
        for text in ["2013", "2013-2014", "2013,2014", "1/2", "2016/4", "*/129"] {
            ok(Field::Year, text);
        }
        assert!(err(Field::Year, "1969").contains("between 1970 and 2099"));
        assert!(err(Field::Year, "*/130").contains("increment value range is 0~129"));
        assert!(err(Field::Year, "13").contains("Illegal"));
    }

    #[test]
    fn test_validate_skips_absent_fields() {
        let expr = parse("*/5 * * * *").unwrap();
        assert!(validate(&expr).is_ok());
    }

    #[test]
    fn test_validate_points_at_offending_field() {
        let expr = parse("* $ * * *").unwrap();
        let e = validate(&expr).unwrap_err();
        assert!(e.is_format());
        match e {
            DescriptionError::Format { span, message, .. } => {
                assert_eq!(span, Some(Span::new(2, 3)));
                assert_eq!(message, "(Hour) Illegal Expression Format '$'");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
