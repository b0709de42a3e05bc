//! Localized payload values.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A value given either once or per locale.
///
/// Payloads spell locales both as `nl-NL` and `nl_NL`; lookups treat the two
/// as the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Localized<T> {
    Plain(T),
    ByLocale(BTreeMap<String, T>),
}

impl<T> Localized<T> {
    /// The value for `locale`, or the plain value.
    pub(crate) fn get(&self, locale: &str) -> Option<&T> {
        match self {
            Localized::Plain(value) => Some(value),
            Localized::ByLocale(values) => values
                .iter()
                .find(|(key, _)| same_locale(key, locale))
                .map(|(_, value)| value),
        }
    }

    /// The value for `locale`, else the first value present.
    pub(crate) fn get_or_first(&self, locale: &str) -> Option<&T> {
        self.get(locale).or_else(|| match self {
            Localized::Plain(value) => Some(value),
            Localized::ByLocale(values) => values.values().next(),
        })
    }
}

impl Localized<String> {
    /// Trimmed, non-blank text for `locale`.
    pub(crate) fn text(&self, locale: &str) -> Option<&str> {
        self.get(locale).map(|s| s.trim()).filter(|s| !s.is_empty())
    }
}

pub(crate) fn same_locale(a: &str, b: &str) -> bool {
    let norm = |c: char| if c == '_' { '-' } else { c.to_ascii_lowercase() };
    a.len() == b.len() && a.chars().map(norm).eq(b.chars().map(norm))
}

/// First non-blank text among the candidates, trimmed.
pub(crate) fn first_text<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
