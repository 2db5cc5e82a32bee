//! Request URL construction.
//!
//! Options are serialized in insertion order. Sequence values expand into
//! repeated `key[]=value` segments, which is how the service expects list
//! parameters.

use url::form_urlencoded;

#[cfg(test)]
mod tests;

/// Value of a single request option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Emitted as `key=value`.
    Scalar(String),
    /// Emitted as one `key[]=value` segment per element.
    List(Vec<String>),
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Scalar(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Scalar(value.to_string())
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        OptionValue::Scalar(value.clone())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OptionValue {
    fn from(values: &[&str]) -> Self {
        OptionValue::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u8, u16, u32, u64, usize, f64);

/// Ordered set of query options for a single API call.
///
/// Keys are unique. Inserting an existing key replaces its value without
/// moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    entries: Vec<(String, OptionValue)>,
}

impl RequestOptions {
    /// Creates an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an option, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Inserts an option at the front unless the key is already present.
    ///
    /// Returns `true` if the option was inserted.
    pub fn insert_first_if_absent(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.insert(0, (key, value.into()));
        true
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the option keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the options into a query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut segments = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                OptionValue::Scalar(v) => segments.push(format!("{}={}", key, encode(v))),
                OptionValue::List(values) => {
                    for v in values {
                        segments.push(format!("{}[]={}", key, encode(v)));
                    }
                }
            }
        }
        segments.join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for RequestOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = RequestOptions::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RequestOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds the full request URL for an API function.
///
/// The result is always `{base_url}/{api_version}/{endpoint}?{query}`; with no
/// options the URL ends in a bare `?`.
#[must_use]
pub fn build_url(
    base_url: &str,
    api_version: &str,
    endpoint: &str,
    options: &RequestOptions,
) -> String {
    format!(
        "{}/{}/{}?{}",
        base_url,
        api_version,
        endpoint,
        options.to_query_string()
    )
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
