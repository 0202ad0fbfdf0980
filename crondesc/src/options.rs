use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DescriptionError;

/// Locales whose convention is the 24-hour clock.
const TWENTY_FOUR_HOUR_LOCALES: [&str; 6] = ["ru_RU", "uk_UA", "de_DE", "it_IT", "tr_TR", "cs_CZ"];

/// How the final sentence is capitalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CasingType {
    /// Upper-case the first character only.
    #[default]
    Sentence,
    /// Upper-case the first character of every word.
    Title,
    /// Lower-case everything.
    Lower,
}

impl CasingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sentence => "sentence",
            Self::Title => "title",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for CasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasingType {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sentence" => Ok(Self::Sentence),
            "title" => Ok(Self::Title),
            "lower" => Ok(Self::Lower),
            _ => Err(DescriptionError::wrong_argument(
                "casing_type",
                format!("unknown casing type '{s}', expected sentence, title or lower"),
            )),
        }
    }
}

/// Settings for one description run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub casing_type: CasingType,
    /// Keep "every minute", "every hour" and "every day" phrases.
    pub verbose: bool,
    /// Weekday numbers start at 0 (Sunday). When false, Sunday is 1.
    pub day_of_week_start_index_zero: bool,
    pub use_24hour_time_format: bool,
    /// Return errors instead of rendering their message as the description.
    pub throw_exception_on_parse_error: bool,
    pub locale_code: String,
    /// Directory holding `{locale_code}.json` catalogs.
    pub locale_location: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self::for_locale("en_US")
    }
}

impl Options {
    /// Defaults for `locale_code`, with the clock convention it implies.
    pub fn for_locale(locale_code: impl Into<String>) -> Self {
        let locale_code = locale_code.into();
        Self {
            casing_type: CasingType::Sentence,
            verbose: false,
            day_of_week_start_index_zero: true,
            use_24hour_time_format: uses_24_hour_clock(&locale_code),
            throw_exception_on_parse_error: true,
            locale_code,
            locale_location: None,
        }
    }

    pub fn with_casing(mut self, casing_type: CasingType) -> Self {
        self.casing_type = casing_type;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_24_hour_time(mut self, enabled: bool) -> Self {
        self.use_24hour_time_format = enabled;
        self
    }

    pub fn with_day_of_week_start_index_zero(mut self, zero_based: bool) -> Self {
        self.day_of_week_start_index_zero = zero_based;
        self
    }

    pub fn with_throw_on_error(mut self, throw: bool) -> Self {
        self.throw_exception_on_parse_error = throw;
        self
    }

    /// Override one option by name, as from a `key=value` pair.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), DescriptionError> {
        match name {
            "casing_type" => self.casing_type = value.parse()?,
            "verbose" => self.verbose = parse_flag(name, value)?,
            "day_of_week_start_index_zero" => {
                self.day_of_week_start_index_zero = parse_flag(name, value)?
            }
            "use_24hour_time_format" => self.use_24hour_time_format = parse_flag(name, value)?,
            "throw_exception_on_parse_error" => {
                self.throw_exception_on_parse_error = parse_flag(name, value)?
            }
            "locale_code" => self.locale_code = value.to_string(),
            "locale_location" => {
                self.locale_location = (!value.is_empty()).then(|| PathBuf::from(value))
            }
            _ => {
                return Err(DescriptionError::wrong_argument(
                    name,
                    format!("unknown {name} configuration argument"),
                ))
            }
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, DescriptionError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DescriptionError::wrong_argument(
            name,
            format!("{name} expects a boolean, got '{value}'"),
        )),
    }
}

/// Whether `locale_code` conventionally writes times on a 24-hour clock.
pub fn uses_24_hour_clock(locale_code: &str) -> bool {
    let language = base_language(locale_code);
    TWENTY_FOUR_HOUR_LOCALES
        .iter()
        .any(|code| *code == locale_code || base_language(code) == language)
}

/// `de_DE` and `de-DE` both reduce to `de`.
pub(crate) fn base_language(locale_code: &str) -> &str {
    locale_code
        .split(['_', '-'])
        .next()
        .unwrap_or(locale_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.casing_type, CasingType::Sentence);
        assert!(!opts.verbose);
        assert!(opts.day_of_week_start_index_zero);
        assert!(!opts.use_24hour_time_format);
        assert!(opts.throw_exception_on_parse_error);
        assert_eq!(opts.locale_code, "en_US");
        assert!(opts.locale_location.is_none());
    }

    #[test]
    fn test_locale_infers_clock() {
        assert!(Options::for_locale("de_DE").use_24hour_time_format);
        assert!(Options::for_locale("ru").use_24hour_time_format);
        assert!(Options::for_locale("it-CH").use_24hour_time_format);
        assert!(!Options::for_locale("en_GB").use_24hour_time_format);
    }

    #[test]
    fn test_set_known_option() {
        let mut opts = Options::default();
        opts.set("verbose", "true").unwrap();
        opts.set("casing_type", "Title").unwrap();
        opts.set("locale_location", "/tmp/locales").unwrap();
        assert!(opts.verbose);
        assert_eq!(opts.casing_type, CasingType::Title);
        assert_eq!(opts.locale_location, Some(PathBuf::from("/tmp/locales")));
    }

    #[test]
    fn test_set_unknown_option() {
        let mut opts = Options::default();
        let err = opts.set("colour", "red").unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::WrongArgument { ref name, .. } if name == "colour"
        ));
        assert_eq!(err.to_string(), "unknown colour configuration argument");
    }

    #[test]
    fn test_set_bad_value() {
        let mut opts = Options::default();
        let err = opts.set("verbose", "maybe").unwrap_err();
        assert!(matches!(err, DescriptionError::WrongArgument { .. }));
        assert!(opts.set("casing_type", "shouting").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_options() {
        let opts: Options =
            serde_json::from_str(r#"{"verbose": true, "casing_type": "lower"}"#).unwrap();
        assert!(opts.verbose);
        assert_eq!(opts.casing_type, CasingType::Lower);
        assert!(opts.day_of_week_start_index_zero);
    }
}
