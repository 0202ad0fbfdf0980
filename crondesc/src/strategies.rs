// Per-field vocabulary for the segment algorithm.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Field;
use crate::error::DescriptionError;
use crate::locale::fill;
use crate::names::{month_name, Weekday};
use crate::segment::{parse_number, Context, SegmentStrategy};

static NEAREST_WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d{1,2})W|W(\d{1,2}))$").expect("valid pattern"));
static LAST_DAY_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L-(\d{1,2})$").expect("valid pattern"));

pub(crate) struct SecondsStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for SecondsStrategy<'_> {
    fn all_description(&self) -> String {
        self.0.t("every second").to_string()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        Ok(token.to_string())
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t("every {0} seconds").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t("seconds {0} through {1} past the minute").to_string()
    }

    fn description_format(&self, expr: &str) -> String {
        if expr == "0" {
            String::new()
        } else {
            self.0.t("at {0} seconds past the minute").to_string()
        }
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct MinutesStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for MinutesStrategy<'_> {
    fn all_description(&self) -> String {
        self.0.t("every minute").to_string()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        Ok(token.to_string())
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t("every {0} minutes").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t("minutes {0} through {1} past the hour").to_string()
    }

    fn description_format(&self, expr: &str) -> String {
        // On the hour with no seconds the time-of-day phrase says it all.
        if expr == "0" && self.0.field(Field::Second).is_empty() {
            String::new()
        } else {
            self.0.t("at {0} minutes past the hour").to_string()
        }
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct HoursStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for HoursStrategy<'_> {
    fn all_description(&self) -> String {
        self.0.t("every hour").to_string()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        self.0.format_time(token, "0", "")
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t("every {0} hours").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t("between {0} and {1}").to_string()
    }

    fn description_format(&self, _expr: &str) -> String {
        self.0.t("at {0}").to_string()
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct DayOfMonthStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for DayOfMonthStrategy<'_> {
    fn recognize(&self, expr: &str) -> Option<Result<String, DescriptionError>> {
        let ctx = self.0;
        match expr {
            "L" => return Some(Ok(ctx.t(", on the last day of the month").to_string())),
            "LW" | "WL" => return Some(Ok(ctx.t(", on the last weekday of the month").to_string())),
            _ => {}
        }
        if let Some(caps) = NEAREST_WEEKDAY.captures(expr) {
            let day = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            return Some(parse_number(day).map(|n| {
                let day = if n == 1 {
                    ctx.t("first weekday").to_string()
                } else {
                    fill(ctx.t("weekday nearest day {0}"), &[&n.to_string()])
                };
                fill(ctx.t(", on the {0} of the month"), &[&day])
            }));
        }
        let caps = LAST_DAY_OFFSET.captures(expr)?;
        Some(Ok(fill(
            ctx.t(", {0} days before the last day of the month"),
            &[&caps[1]],
        )))
    }

    fn all_description(&self) -> String {
        self.0.t(", every day").to_string()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        Ok(token.to_string())
    }

    fn interval_format(&self, step: &str) -> String {
        if step == "1" {
            self.0.t(", every day").to_string()
        } else {
            self.0.t(", every {0} days").to_string()
        }
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t(", between day {0} and {1} of the month").to_string()
    }

    fn description_format(&self, _expr: &str) -> String {
        self.0.t(", on day {0} of the month").to_string()
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct MonthStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for MonthStrategy<'_> {
    fn all_description(&self) -> String {
        String::new()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        let n = parse_number(token)?;
        month_name(n)
            .map(|name| self.0.t(name).to_string())
            .ok_or_else(|| DescriptionError::format(format!("no month numbered {n}")))
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t(", every {0} months").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }

    fn description_format(&self, _expr: &str) -> String {
        self.0.t(", only in {0}").to_string()
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct DayOfWeekStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for DayOfWeekStrategy<'_> {
    fn recognize(&self, expr: &str) -> Option<Result<String, DescriptionError>> {
        // Every day of the week adds nothing to the sentence.
        (expr == "*").then(|| Ok(String::new()))
    }

    fn all_description(&self) -> String {
        self.0.t(", every day").to_string()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        let day = match token.split_once('#') {
            Some((day, _)) => day,
            None => token.trim_end_matches('L'),
        };
        let n = parse_number(day)?;
        Weekday::from_cron(n)
            .map(|d| self.0.t(d.name()).to_string())
            .ok_or_else(|| DescriptionError::format(format!("no weekday numbered {n}")))
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t(", every {0} days of the week").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }

    fn description_format(&self, expr: &str) -> String {
        let ctx = self.0;
        if let Some((_, nth)) = expr.split_once('#') {
            let ordinal = match nth {
                "1" => ctx.t("first"),
                "2" => ctx.t("second"),
                "3" => ctx.t("third"),
                "4" => ctx.t("fourth"),
                "5" => ctx.t("fifth"),
                _ => "",
            };
            format!(
                "{}{}{}",
                ctx.t(", on the "),
                ordinal,
                ctx.t(" {0} of the month")
            )
        } else if expr.contains('L') {
            ctx.t(", on the last {0} of the month").to_string()
        } else {
            ctx.t(", only on {0}").to_string()
        }
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}

pub(crate) struct YearStrategy<'a>(pub(crate) Context<'a>);

impl SegmentStrategy for YearStrategy<'_> {
    fn all_description(&self) -> String {
        String::new()
    }

    fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
        Ok(match token.parse::<u32>() {
            Ok(year) => format!("{year:04}"),
            Err(_) => token.to_string(),
        })
    }

    fn interval_format(&self, _step: &str) -> String {
        self.0.t(", every {0} years").to_string()
    }

    fn between_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }

    fn description_format(&self, _expr: &str) -> String {
        self.0.t(", only in {0}").to_string()
    }

    fn range_format(&self, _expr: &str) -> String {
        self.0.t(", {0} through {1}").to_string()
    }
}
