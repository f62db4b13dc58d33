//! Query parameters and the helpers that shape them before a URL is built.

// Use 3rd party
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Use built-in library
use std::borrow::Cow;
use std::fmt;

/// Everything but alphanumerics and `-_.!~*'()` is escaped in a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A scalar query value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// `false` for `Null`, `false`, `0`, `NaN` and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Null => false,
            ParamValue::Bool(b) => *b,
            ParamValue::Int(n) => *n != 0,
            ParamValue::Float(f) => *f != 0.0 && !f.is_nan(),
            ParamValue::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "null"),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered key/value pairs that end up in a query string.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_owned(), value)),
        }
    }

    /// Merges every pair of `other` into `self`. `None` contributes nothing.
    pub fn spread(mut self, other: Option<Params>) -> Self {
        if let Some(other) = other {
            for (key, value) in other.0 {
                self.insert(&key, value);
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new set holding only the truthy pairs, in their original order.
    ///
    /// A legitimate `0` or `false` is dropped like any unset value.
    pub fn filtered(&self) -> Params {
        Params(
            self.0
                .iter()
                .filter(|(_, value)| value.is_truthy())
                .cloned()
                .collect(),
        )
    }
}

/// Coerces a metadata flag into the `0`/`1` form the Mixcloud API accepts.
///
/// Booleans become `1`/`0`, numbers pass through, anything else is `0`.
pub fn metadata_value(metadata: &ParamValue) -> ParamValue {
    match metadata {
        ParamValue::Bool(b) => ParamValue::Int(i64::from(*b)),
        ParamValue::Int(n) => ParamValue::Int(*n),
        ParamValue::Float(f) => ParamValue::Float(*f),
        _ => ParamValue::Int(0),
    }
}

/// Decodes then re-encodes a user supplied URI as a single URI component.
///
/// Input that does not decode to UTF-8 is encoded as given.
pub fn normalize_uri(uri: &str) -> String {
    let decoded = percent_decode_str(uri)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(uri));
    utf8_percent_encode(&decoded, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_drops_falsy_values() {
        let params = Params::new()
            .with("page", 2)
            .with("zero", 0)
            .with("empty", "")
            .with("null", ParamValue::Null)
            .with("off", false)
            .with("nan", f64::NAN)
            .with("on", true)
            .with("q", "house");

        let filtered = params.filtered();
        let keys: Vec<&str> = filtered.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["page", "on", "q"]);
        assert_eq!(filtered.get("page"), Some(&ParamValue::Int(2)));
        assert_eq!(filtered.get("q"), Some(&ParamValue::Str("house".to_owned())));
    }

    #[test]
    fn filtered_leaves_source_untouched() {
        let params = Params::new().with("callback", "").with("limit", 10);
        let filtered = params.filtered();
        assert_eq!(params.len(), 2);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn spread_none_adds_nothing() {
        let params = Params::new().with("metadata", 1).spread(None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn spread_overwrites_in_place() {
        let params = Params::new()
            .with("type", "likes")
            .with("page", 1)
            .spread(Some(Params::new().with("type", "tracks").with("count", 5)));
        let pairs: Vec<(&str, String)> = params.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(
            pairs,
            vec![
                ("type", "tracks".to_owned()),
                ("page", "1".to_owned()),
                ("count", "5".to_owned())
            ]
        );
    }

    #[test]
    fn option_none_is_null() {
        let value: ParamValue = Option::<u32>::None.into();
        assert_eq!(value, ParamValue::Null);
        assert!(!value.is_truthy());
    }

    #[test]
    fn metadata_coercion() {
        assert_eq!(metadata_value(&true.into()), ParamValue::Int(1));
        assert_eq!(metadata_value(&false.into()), ParamValue::Int(0));
        assert_eq!(metadata_value(&5.into()), ParamValue::Int(5));
        assert_eq!(metadata_value(&"x".into()), ParamValue::Int(0));
        assert_eq!(metadata_value(&ParamValue::Null), ParamValue::Int(0));
    }

    #[test]
    fn float_display_matches_integers() {
        assert_eq!(ParamValue::Float(2.0).to_string(), "2");
        assert_eq!(ParamValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn normalize_uri_is_stable() {
        let once = normalize_uri("http://localhost:3000/callback");
        assert_eq!(once, "http%3A%2F%2Flocalhost%3A3000%2Fcallback");
        assert_eq!(normalize_uri(&once), once);
    }

    #[test]
    fn normalize_uri_keeps_component_safe_marks() {
        assert_eq!(normalize_uri("http://x/a(b)!*'~"), "http%3A%2F%2Fx%2Fa(b)!*'~");
        assert_eq!(normalize_uri("http://x/a%28b%29"), "http%3A%2F%2Fx%2Fa(b)");
    }

    #[test]
    fn normalize_uri_encodes_spaces_and_unicode() {
        assert_eq!(normalize_uri("a b/é"), "a%20b%2F%C3%A9");
    }
}
