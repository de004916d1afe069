//! Localized field text.
//!
//! A [`TextStore`] maps the integer values of one field to display text for
//! a single locale and style, and matches text back to values. Stores are
//! built on demand by their rule and cached per locale.

use alloc::{string::String, sync::Arc, vec::Vec};
use core::fmt;
#[cfg(feature = "std")]
use std::sync::{PoisonError, RwLock};

use icu_locale::Locale;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{CalendricalError, CalendricalResult};

/// The maximum number of `(locale, style)` text stores a rule keeps.
#[cfg(feature = "std")]
const MAX_CACHED_STORES: usize = 24;

/// The width of a text representation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// The full text, e.g. `January`.
    #[default]
    Full,
    /// The abbreviated text, e.g. `Jan`.
    Short,
    /// The narrowest text, e.g. `J`.
    Narrow,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Narrow => "narrow",
        }
        .fmt(f)
    }
}

/// The outcome of matching text against a [`TextStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// The input starts with the text of `value`, which is `length` characters long.
    Matched { length: usize, value: i32 },
    /// No text of the store is a prefix of the input.
    NoMatch,
    /// The store cannot match text because two values share the same text.
    Unsupported,
}

impl TextMatch {
    /// Returns the matched value, if any.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<i32> {
        match self {
            Self::Matched { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// An immutable mapping between the values of a field and their text in a
/// single locale.
///
/// If any two values share the same text, matching is disabled for the whole
/// store while value lookups keep working.
///
/// ```rust
/// use calendrical_rs::{text::{TextMatch, TextStore}, Locale};
///
/// let store = TextStore::try_new(
///     Locale::try_from_str("en").unwrap(),
///     [(1, "Mar"), (2, "March")],
/// )
/// .unwrap();
///
/// assert_eq!(store.value_text(2), Some("March"));
/// assert_eq!(
///     store.match_text(false, "March 3"),
///     TextMatch::Matched { length: 5, value: 2 }
/// );
/// assert_eq!(store.match_text(true, "mar"), TextMatch::Matched { length: 3, value: 1 });
/// assert_eq!(store.match_text(false, "May"), TextMatch::NoMatch);
/// ```
#[derive(Debug, Clone)]
pub struct TextStore {
    locale: Locale,
    value_text: FxHashMap<i32, String>,
    text_value: FxHashMap<String, i32>,
    insensitive_text_value: FxHashMap<String, i32>,
    /// Distinct character lengths of the matchable texts, longest first.
    lengths: Vec<usize>,
    matchable: bool,
}

impl TextStore {
    /// Creates a new `TextStore` for `locale` from `(value, text)` pairs.
    ///
    /// Fails if any text is empty or if a value is given more than once.
    pub fn try_new<I, S>(locale: Locale, pairs: I) -> CalendricalResult<Self>
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        let mut value_text = FxHashMap::default();
        let mut text_value = FxHashMap::default();
        let mut matchable = true;

        for (value, text) in pairs {
            let text: String = text.into();
            if text.is_empty() {
                return Err(CalendricalError::missing()
                    .with_message(alloc::format!("the text of value {value} must not be empty")));
            }
            if value_text.contains_key(&value) {
                return Err(CalendricalError::general(alloc::format!(
                    "value {value} was given more than one text"
                )));
            }
            if text_value.insert(text.clone(), value).is_some() {
                matchable = false;
            }
            value_text.insert(value, text);
        }

        if value_text.is_empty() {
            return Err(CalendricalError::missing().with_message("a text store requires text"));
        }

        let mut insensitive_text_value = FxHashMap::default();
        let mut lengths = Vec::new();
        if matchable {
            let mut ambiguous = FxHashSet::default();
            for (text, value) in &text_value {
                lengths.push(text.chars().count());
                for folded in [text.to_uppercase(), text.to_lowercase()] {
                    lengths.push(folded.chars().count());
                    match insensitive_text_value.get(&folded) {
                        Some(existing) if existing != value => {
                            ambiguous.insert(folded);
                        }
                        Some(_) => {}
                        None => {
                            insensitive_text_value.insert(folded, *value);
                        }
                    }
                }
            }
            for text in &ambiguous {
                insensitive_text_value.remove(text);
            }
            lengths.sort_unstable_by(|a, b| b.cmp(a));
            lengths.dedup();
        } else {
            text_value.clear();
        }

        Ok(Self {
            locale,
            value_text,
            text_value,
            insensitive_text_value,
            lengths,
            matchable,
        })
    }

    /// Returns the locale of this store.
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the text of `value`.
    #[inline]
    #[must_use]
    pub fn value_text(&self, value: i32) -> Option<&str> {
        self.value_text.get(&value).map(String::as_str)
    }

    /// Returns the value whose text is exactly `text`.
    #[inline]
    #[must_use]
    pub fn text_value(&self, text: &str) -> Option<i32> {
        self.text_value.get(text).copied()
    }

    /// Returns whether text can be matched back to values.
    #[inline]
    #[must_use]
    pub fn is_matchable(&self) -> bool {
        self.matchable
    }

    /// Matches the longest known text at the start of `input`.
    ///
    /// Text is matched case-sensitively first and, if `ignore_case` is set,
    /// then against the upper-cased and lower-cased forms of each prefix of
    /// `input`. The matched length always counts characters of `input`.
    #[must_use]
    pub fn match_text(&self, ignore_case: bool, input: &str) -> TextMatch {
        if !self.matchable {
            return TextMatch::Unsupported;
        }
        if let Some(found) = self.longest_exact_prefix(input) {
            return found;
        }
        if ignore_case {
            if let Some(found) = self.longest_folded_prefix(input) {
                return found;
            }
        }
        TextMatch::NoMatch
    }

    fn longest_exact_prefix(&self, input: &str) -> Option<TextMatch> {
        let input_length = input.chars().count();
        self.lengths
            .iter()
            .filter(|length| **length <= input_length)
            .find_map(|&length| {
                self.text_value
                    .get(char_prefix(input, length))
                    .map(|&value| TextMatch::Matched { length, value })
            })
    }

    fn longest_folded_prefix(&self, input: &str) -> Option<TextMatch> {
        // Case mapping never shortens text, so no prefix longer than the
        // longest text can match.
        let longest = self.lengths.first().copied()?;
        let input_length = input.chars().count().min(longest);
        (1..=input_length).rev().find_map(|length| {
            let prefix = char_prefix(input, length);
            [prefix.to_uppercase(), prefix.to_lowercase()]
                .iter()
                .find_map(|folded| self.insensitive_text_value.get(folded))
                .map(|&value| TextMatch::Matched { length, value })
        })
    }
}

/// Returns the first `length` characters of `s`.
fn char_prefix(s: &str, length: usize) -> &str {
    s.char_indices().nth(length).map_or(s, |(index, _)| &s[..index])
}

// ==== TextCache ====

#[cfg(feature = "std")]
struct CacheEntry {
    locale: Locale,
    style: TextStyle,
    store: Option<Arc<TextStore>>,
}

/// A bounded cache of the text stores of one rule.
///
/// Entries are evicted oldest first and rebuilt on the next request. A
/// rebuilt store is equal to the evicted one, so callers never depend on
/// store identity.
///
/// Without the `std` feature nothing is cached and every request builds a
/// new store.
pub(crate) struct TextCache {
    #[cfg(feature = "std")]
    entries: RwLock<Vec<CacheEntry>>,
}

impl TextCache {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(feature = "std")]
            entries: RwLock::new(Vec::new()),
        }
    }

    #[cfg(feature = "std")]
    fn lookup(
        entries: &[CacheEntry],
        locale: &Locale,
        style: TextStyle,
    ) -> Option<Option<Arc<TextStore>>> {
        entries
            .iter()
            .find(|entry| entry.style == style && entry.locale == *locale)
            .map(|entry| entry.store.clone())
    }

    /// Returns the cached store for `locale` and `style`, building it with
    /// `build` on a miss. Locales without text are cached as `None`.
    #[cfg(feature = "std")]
    pub(crate) fn get_or_build<F>(
        &self,
        locale: &Locale,
        style: TextStyle,
        build: F,
    ) -> Option<Arc<TextStore>>
    where
        F: FnOnce() -> Option<TextStore>,
    {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(store) = Self::lookup(&entries, locale, style) {
                return store;
            }
        }

        #[cfg(feature = "log")]
        log::debug!("text cache miss for {locale:?} ({style})");

        let store = build().map(Arc::new);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have built the same store in the meantime.
        if let Some(existing) = Self::lookup(&entries, locale, style) {
            return existing;
        }
        if entries.len() >= MAX_CACHED_STORES {
            let _evicted = entries.remove(0);
            #[cfg(feature = "log")]
            log::debug!("text cache evicted {:?} ({})", _evicted.locale, _evicted.style);
        }
        entries.push(CacheEntry {
            locale: locale.clone(),
            style,
            store: store.clone(),
        });
        store
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn get_or_build<F>(
        &self,
        _locale: &Locale,
        _style: TextStyle,
        build: F,
    ) -> Option<Arc<TextStore>>
    where
        F: FnOnce() -> Option<TextStore>,
    {
        build().map(Arc::new)
    }

    #[cfg(all(test, feature = "std"))]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use icu_locale::Locale;

    use super::{TextMatch, TextStore, TextStyle};
    use crate::error::ErrorKind;

    fn en() -> Locale {
        Locale::try_from_str("en").unwrap()
    }

    #[test]
    fn duplicate_text_disables_matching() {
        let store = TextStore::try_new(en(), [(1, "Jan"), (2, "Jan")]).unwrap();
        assert_eq!(store.match_text(false, "Jan"), TextMatch::Unsupported);
        assert_eq!(store.match_text(true, "jan"), TextMatch::Unsupported);
        assert_eq!(store.value_text(1), Some("Jan"));
        assert_eq!(store.value_text(2), Some("Jan"));
        assert_eq!(store.text_value("Jan"), None);
        assert!(!store.is_matchable());
    }

    #[test]
    fn longest_match_wins() {
        let store = TextStore::try_new(en(), [(1, "Jun"), (2, "June"), (3, "Ju")]).unwrap();
        assert_eq!(
            store.match_text(false, "June 5"),
            TextMatch::Matched { length: 4, value: 2 }
        );
        assert_eq!(
            store.match_text(false, "Jun"),
            TextMatch::Matched { length: 3, value: 1 }
        );
        assert_eq!(
            store.match_text(false, "Jul"),
            TextMatch::Matched { length: 2, value: 3 }
        );
        assert_eq!(store.match_text(false, "J"), TextMatch::NoMatch);
        assert_eq!(store.match_text(false, ""), TextMatch::NoMatch);
    }

    #[test]
    fn case_insensitive_matching() {
        let store = TextStore::try_new(en(), [(1, "AM"), (2, "PM")]).unwrap();
        assert_eq!(store.match_text(false, "pm"), TextMatch::NoMatch);
        assert_eq!(
            store.match_text(true, "pm"),
            TextMatch::Matched { length: 2, value: 2 }
        );
        assert_eq!(
            store.match_text(true, "Am!"),
            TextMatch::Matched { length: 2, value: 1 }
        );
        assert_eq!(store.match_text(true, "PM").value(), Some(2));
    }

    #[test]
    fn case_sensitive_match_takes_precedence() {
        let store = TextStore::try_new(en(), [(1, "may"), (2, "MAY")]).unwrap();
        assert_eq!(
            store.match_text(true, "MAY"),
            TextMatch::Matched { length: 3, value: 2 }
        );
        assert_eq!(
            store.match_text(true, "may"),
            TextMatch::Matched { length: 3, value: 1 }
        );
        // The folded forms are ambiguous.
        assert_eq!(store.match_text(true, "May"), TextMatch::NoMatch);
    }

    #[test]
    fn folded_match_length_counts_input_characters() {
        let store = TextStore::try_new(en(), [(1, "STRASSE"), (2, "WEG")]).unwrap();
        assert_eq!(
            store.match_text(true, "straße"),
            TextMatch::Matched { length: 6, value: 1 }
        );
        assert_eq!(
            store.match_text(true, "Straßenbahn"),
            TextMatch::Matched { length: 6, value: 1 }
        );
        assert_eq!(
            store.match_text(true, "strasse 5"),
            TextMatch::Matched { length: 7, value: 1 }
        );
        assert_eq!(store.match_text(false, "straße"), TextMatch::NoMatch);
    }

    #[test]
    fn multibyte_text() {
        let store = TextStore::try_new(en(), [(1, "février"), (2, "fév")]).unwrap();
        assert_eq!(
            store.match_text(false, "février 2012"),
            TextMatch::Matched { length: 7, value: 1 }
        );
        assert_eq!(
            store.match_text(true, "FÉV"),
            TextMatch::Matched { length: 3, value: 2 }
        );
    }

    #[test]
    fn invalid_stores() {
        let err = TextStore::try_new(en(), [(1, "")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Missing);
        assert!(TextStore::try_new(en(), [(1, "a"), (1, "b")]).is_err());
        assert!(TextStore::try_new(en(), Vec::<(i32, String)>::new()).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn cache_builds_once_and_is_bounded() {
        use alloc::sync::Arc;

        use super::{TextCache, MAX_CACHED_STORES};

        let cache = TextCache::new();
        let mut builds = 0;
        let first = cache.get_or_build(&en(), TextStyle::Full, || {
            builds += 1;
            TextStore::try_new(en(), [(1, "a")]).ok()
        });
        let second = cache.get_or_build(&en(), TextStyle::Full, || {
            builds += 1;
            None
        });
        assert_eq!(builds, 1);
        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));

        let absent = cache.get_or_build(&en(), TextStyle::Narrow, || None);
        assert!(absent.is_none());
        assert!(cache
            .get_or_build(&en(), TextStyle::Narrow, || unreachable!())
            .is_none());

        let languages = [
            "de", "fr", "es", "it", "pt", "nl", "sv", "da", "fi", "pl", "cs", "hu", "ro", "el",
            "tr", "ru", "uk", "ja", "ko", "zh", "ar", "he", "hi", "th",
        ];
        for language in languages {
            let locale = Locale::try_from_str(language).unwrap();
            let _ = cache.get_or_build(&locale, TextStyle::Full, || None);
        }
        assert_eq!(cache.len(), MAX_CACHED_STORES);
    }
}
