use std::fmt;
use std::str::FromStr;

use crate::ast::{CronExpression, Field, NormalizedExpression};
use crate::error::DescriptionError;
use crate::locale::{fill, Locale};
use crate::options::{CasingType, Options};
use crate::parser;
use crate::segment::{between_phrase, describe_segment, Context, SegmentStrategy};
use crate::strategies::{
    DayOfMonthStrategy, DayOfWeekStrategy, HoursStrategy, MinutesStrategy, MonthStrategy,
    SecondsStrategy, YearStrategy,
};
use crate::validator;

/// Message shown in place of a description that could not be composed.
pub const GENERIC_ERROR: &str = "An error occurred when generating the expression description. \
     Check the cron expression syntax.";

/// Characters that make a time field more than a single value.
const SPECIAL: [char; 4] = ['/', '-', ',', '*'];

/// Which part of the expression to describe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DescriptionType {
    /// The whole sentence, with verbosity and casing applied.
    #[default]
    Full,
    TimeOfDay,
    Seconds,
    Minutes,
    Hours,
    DayOfWeek,
    Month,
    DayOfMonth,
    Year,
}

impl DescriptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::TimeOfDay => "time_of_day",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::DayOfWeek => "day_of_week",
            Self::Month => "month",
            Self::DayOfMonth => "day_of_month",
            Self::Year => "year",
        }
    }
}

impl FromStr for DescriptionType {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "full" => Ok(Self::Full),
            "time_of_day" => Ok(Self::TimeOfDay),
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            "day_of_week" => Ok(Self::DayOfWeek),
            "month" => Ok(Self::Month),
            "day_of_month" => Ok(Self::DayOfMonth),
            "year" => Ok(Self::Year),
            _ => Err(DescriptionError::wrong_argument(
                "description_type",
                format!("unknown description type '{s}'"),
            )),
        }
    }
}

/// A parsed expression ready to be described under fixed options.
#[derive(Debug, Clone)]
pub struct ExpressionDescriptor {
    expression: CronExpression,
    normalized: NormalizedExpression,
    options: Options,
    locale: Locale,
}

impl ExpressionDescriptor {
    /// Parse and normalize `expression`, and resolve the locale named by
    /// `options`.
    pub fn new(expression: &str, options: Options) -> Result<Self, DescriptionError> {
        let parsed = parser::parse(expression)?;
        let locale = Locale::from_options(&options)?;
        Ok(Self::from_parsed(parsed, options, locale))
    }

    pub fn from_parsed(expression: CronExpression, options: Options, locale: Locale) -> Self {
        let normalized = parser::normalize(&expression, &options);
        Self {
            expression,
            normalized,
            options,
            locale,
        }
    }

    /// Replace the translation context.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn expression(&self) -> &CronExpression {
        &self.expression
    }

    pub fn normalized(&self) -> &NormalizedExpression {
        &self.normalized
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Check the fields against their grammars.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        validator::validate(&self.expression)
    }

    pub fn full_description(&self) -> Result<String, DescriptionError> {
        self.description(DescriptionType::Full)
    }

    /// Describe one part of the expression.
    ///
    /// Failures become a generic format error, or the generic message
    /// itself when `throw_exception_on_parse_error` is off.
    pub fn description(&self, kind: DescriptionType) -> Result<String, DescriptionError> {
        let ctx = self.context();
        let result = match kind {
            DescriptionType::Full => full_description(ctx),
            DescriptionType::TimeOfDay => time_of_day(ctx),
            DescriptionType::Seconds => {
                describe_segment(ctx.field(Field::Second), &SecondsStrategy(ctx), ctx)
            }
            DescriptionType::Minutes => {
                describe_segment(ctx.field(Field::Minute), &MinutesStrategy(ctx), ctx)
            }
            DescriptionType::Hours => {
                describe_segment(ctx.field(Field::Hour), &HoursStrategy(ctx), ctx)
            }
            DescriptionType::DayOfWeek => {
                describe_segment(ctx.field(Field::DayOfWeek), &DayOfWeekStrategy(ctx), ctx)
            }
            DescriptionType::Month => {
                describe_segment(ctx.field(Field::Month), &MonthStrategy(ctx), ctx)
            }
            DescriptionType::DayOfMonth => {
                describe_segment(ctx.field(Field::DayOfMonth), &DayOfMonthStrategy(ctx), ctx)
            }
            DescriptionType::Year => {
                describe_segment(ctx.field(Field::Year), &YearStrategy(ctx), ctx)
            }
        };

        result.or_else(|cause| {
            tracing::warn!(
                expression = self.expression.input(),
                kind = kind.as_str(),
                %cause,
                "could not compose description"
            );
            let message = ctx.t(GENERIC_ERROR);
            if self.options.throw_exception_on_parse_error {
                Err(cause.wrapped(message))
            } else {
                Ok(message.to_string())
            }
        })
    }

    fn context(&self) -> Context<'_> {
        Context {
            expr: &self.normalized,
            options: &self.options,
            locale: &self.locale,
        }
    }
}

impl fmt::Display for ExpressionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.full_description() {
            Ok(description) => f.write_str(&description),
            Err(e) => write!(f, "{e}"),
        }
    }
}

fn full_description(ctx: Context<'_>) -> Result<String, DescriptionError> {
    let time = time_of_day(ctx)?;

    let dom = ctx.field(Field::DayOfMonth);
    let dow = ctx.field(Field::DayOfWeek);
    // A weekday restriction replaces "every day".
    let dom_phrase = if dom == "*" && dow != "*" {
        String::new()
    } else {
        describe_segment(dom, &DayOfMonthStrategy(ctx), ctx)?
    };
    let dow_phrase = describe_segment(dow, &DayOfWeekStrategy(ctx), ctx)?;
    let month = describe_segment(ctx.field(Field::Month), &MonthStrategy(ctx), ctx)?;
    let year = describe_segment(ctx.field(Field::Year), &YearStrategy(ctx), ctx)?;

    let description = format!("{time}{dom_phrase}{dow_phrase}{month}{year}");
    let description = transform_verbosity(description, ctx);
    Ok(apply_casing(&description, ctx.options.casing_type))
}

fn time_of_day(ctx: Context<'_>) -> Result<String, DescriptionError> {
    let seconds = ctx.field(Field::Second);
    let minutes = ctx.field(Field::Minute);
    let hours = ctx.field(Field::Hour);

    if ![seconds, minutes, hours].iter().any(|f| f.contains(SPECIAL)) {
        return Ok(format!(
            "{}{}",
            ctx.t("At "),
            ctx.format_time(hours, minutes, seconds)?
        ));
    }

    if seconds.is_empty() && !hours.contains(SPECIAL) {
        if let Some((start, end)) = plain_range(minutes) {
            return Ok(fill(
                ctx.t("Every minute between {0} and {1}"),
                &[
                    &ctx.format_time(hours, start, "")?,
                    &ctx.format_time(hours, end, "")?,
                ],
            ));
        }
    }

    if seconds.is_empty()
        && hours.contains(',')
        && !hours.contains(['-', '/', '*'])
        && !minutes.contains(SPECIAL)
    {
        let hour_parts: Vec<&str> = hours.split(',').collect();
        let mut description = ctx.t("At").to_string();
        for (i, hour) in hour_parts.iter().enumerate() {
            description.push(' ');
            description.push_str(&ctx.format_time(hour, minutes, "")?);
            if i + 2 < hour_parts.len() {
                description.push(',');
            } else if i + 2 == hour_parts.len() {
                description.push_str(ctx.t(" and"));
            }
        }
        return Ok(description);
    }

    let seconds_phrase = describe_segment(seconds, &SecondsStrategy(ctx), ctx)?;
    let minutes_phrase = describe_segment(minutes, &MinutesStrategy(ctx), ctx)?;
    // A single hour swept by minutes or seconds spans that whole hour.
    let hours_phrase = if is_single_value(hours) && (sweeps(minutes) || sweeps(seconds)) {
        let strategy = HoursStrategy(ctx);
        let whole_hour = format!("{hours}-{hours}");
        between_phrase(&whole_hour, &strategy.between_format(&whole_hour), &strategy)?
    } else {
        describe_segment(hours, &HoursStrategy(ctx), ctx)?
    };

    Ok([seconds_phrase, minutes_phrase, hours_phrase]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `a-b` with no step or list.
fn plain_range(field: &str) -> Option<(&str, &str)> {
    let (start, end) = field.split_once('-')?;
    (!start.contains(SPECIAL) && !end.contains(SPECIAL)).then_some((start, end))
}

fn is_single_value(field: &str) -> bool {
    !field.is_empty() && !field.contains(SPECIAL)
}

fn sweeps(field: &str) -> bool {
    field.contains(['*', '/'])
}

/// Drop "every minute/hour/day" boilerplate unless verbose.
fn transform_verbosity(description: String, ctx: Context<'_>) -> String {
    if ctx.options.verbose {
        return description;
    }
    let mut description = description;
    for id in [", every minute", ", every hour", ", every day"] {
        description = description.replace(ctx.t(id), "");
    }
    if description.ends_with(", ") {
        description.truncate(description.len() - 2);
    } else if description.ends_with(',') {
        description.pop();
    }
    description
}

/// Apply a casing mode to a finished description.
pub fn apply_casing(description: &str, casing: CasingType) -> String {
    match casing {
        CasingType::Sentence => capitalize_first(description),
        CasingType::Title => description
            .split(' ')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" "),
        CasingType::Lower => description.to_lowercase(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
