//! Translation context for description text.
//!
//! Message ids are the English phrases themselves, so a [`Locale`] with no
//! catalogs renders English. Lookups walk the catalog chain (specific
//! locale, then base language) and fall back to the id.

use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::DescriptionError;
#[cfg(feature = "serde")]
use crate::options::base_language;
use crate::options::Options;

/// One locale's translated messages, keyed by English message id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.messages.insert(id.into(), text.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A locale code and the catalogs consulted for it, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    chain: Vec<Catalog>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    /// English: every message id is its own translation.
    pub fn english() -> Self {
        Self::new("en_US")
    }

    /// A locale with no catalogs yet.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            chain: Vec::new(),
        }
    }

    /// Append a catalog below the ones already in the chain.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.chain.push(catalog);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Translated text for `id`, or `id` itself when no catalog has it.
    pub fn translate<'a>(&'a self, id: &'a str) -> &'a str {
        self.chain
            .iter()
            .find_map(|c| c.get(id).filter(|text| !text.is_empty()))
            .unwrap_or(id)
    }

    /// Resolve the locale named by `options`.
    pub fn from_options(options: &Options) -> Result<Self, DescriptionError> {
        match &options.locale_location {
            #[cfg(feature = "serde")]
            Some(dir) => Self::load(&options.locale_code, dir),
            #[cfg(not(feature = "serde"))]
            Some(dir) => Err(DescriptionError::wrong_argument(
                "locale_location",
                format!(
                    "cannot load catalogs from {}: built without the serde feature",
                    dir.display()
                ),
            )),
            None => {
                tracing::debug!(
                    code = %options.locale_code,
                    "no locale catalogs configured, using message ids"
                );
                Ok(Self::new(options.locale_code.clone()))
            }
        }
    }

    /// Load `{dir}/{code}.json` and then `{dir}/{language}.json`.
    ///
    /// Missing files are skipped. A file that exists but is not a JSON
    /// object of strings is an error.
    #[cfg(feature = "serde")]
    pub fn load(code: &str, dir: &Path) -> Result<Self, DescriptionError> {
        let mut locale = Self::new(code);
        let language = base_language(code);
        let mut names = vec![code];
        if language != code {
            names.push(language);
        }
        for name in names {
            let path = dir.join(format!("{name}.json"));
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "locale catalog not found");
                    continue;
                }
                Err(e) => {
                    return Err(DescriptionError::locale(
                        path.display().to_string(),
                        e.to_string(),
                    ))
                }
            };
            let catalog: Catalog = serde_json::from_str(&text)
                .map_err(|e| DescriptionError::locale(path.display().to_string(), e.to_string()))?;
            tracing::debug!(
                path = %path.display(),
                entries = catalog.len(),
                "loaded locale catalog"
            );
            locale.chain.push(catalog);
        }
        Ok(locale)
    }
}

/// Substitute `{0}`, `{1}`, … in `template` with `args`.
///
/// Placeholders without a matching argument are left as written.
pub fn fill(template: &str, args: &[&str]) -> String {
    let capacity = template.len() + args.iter().map(|a| a.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match placeholder {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_positional() {
        assert_eq!(fill("{0} through {1}", &["Monday", "Friday"]), "Monday through Friday");
        assert_eq!(fill("every {0} minutes", &["5"]), "every 5 minutes");
    }

    #[test]
    fn test_fill_does_not_rescan_arguments() {
        assert_eq!(fill("{0} and {1}", &["{1}", "x"]), "{1} and x");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("a {2} {x} {", &["b"]), "a {2} {x} {");
    }

    #[test]
    fn test_english_is_identity() {
        let locale = Locale::english();
        assert_eq!(locale.translate("every minute"), "every minute");
    }

    #[test]
    fn test_fallback_chain() {
        let specific: Catalog = [("every minute", "jede Minute"), ("every hour", "")]
            .into_iter()
            .collect();
        let base: Catalog = [("every hour", "jede Stunde"), ("every day", "jeden Tag")]
            .into_iter()
            .collect();
        let locale = Locale::new("de_AT").with_catalog(specific).with_catalog(base);
        assert_eq!(locale.translate("every minute"), "jede Minute");
        // Empty entries defer to the next catalog.
        assert_eq!(locale.translate("every hour"), "jede Stunde");
        assert_eq!(locale.translate("every day"), "jeden Tag");
        assert_eq!(locale.translate("every second"), "every second");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("de.json"), r#"{"every minute": "jede Minute"}"#).unwrap();
        let locale = Locale::load("de_DE", dir.path()).unwrap();
        assert_eq!(locale.code(), "de_DE");
        assert_eq!(locale.translate("every minute"), "jede Minute");
        assert_eq!(locale.translate("every hour"), "every hour");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_rejects_malformed_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fr_FR.json"), "[1, 2]").unwrap();
        let err = Locale::load("fr_FR", dir.path()).unwrap_err();
        assert!(matches!(err, DescriptionError::Locale { .. }));
    }

    #[test]
    fn test_from_options_without_location_is_identity() {
        let locale = Locale::from_options(&Options::for_locale("de_DE")).unwrap();
        assert_eq!(locale.code(), "de_DE");
        assert_eq!(locale.translate("At "), "At ");
    }

    #[cfg(not(feature = "serde"))]
    #[test]
    fn test_from_options_location_requires_serde() {
        let mut options = Options::default();
        options.locale_location = Some(std::path::PathBuf::from("/tmp/locales"));
        let err = Locale::from_options(&options).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::WrongArgument { ref name, .. } if name == "locale_location"
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_missing_directory_is_identity() {
        let locale = Locale::load("xx_YY", Path::new("/nonexistent/crondesc")).unwrap();
        assert_eq!(locale.translate("At "), "At ");
    }
}
