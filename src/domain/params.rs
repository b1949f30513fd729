use std::collections::BTreeMap;

/// Wire parameters for a single send.
///
/// Keys are unique and iterate in ascending byte-wise order. Empty values are
/// dropped on insertion, so a mapping never carries a key without a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<&'static str, String>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value. Empty values are ignored.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Copy every entry of `other` into `self`; `other` wins on collision.
    pub fn overlay(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// Copy the entries of `defaults` whose key is not already present.
    pub fn fill_missing(&mut self, defaults: &Parameters) {
        for (key, value) in &defaults.0 {
            self.0.entry(key).or_insert_with(|| value.clone());
        }
    }

    /// Join as `key=value` pairs with `&`, keys ascending.
    ///
    /// Values are written as stored; free-form values are expected to be
    /// form-encoded by whoever inserted them.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// `application/x-www-form-urlencoded` encoding of a single value.
///
/// Spaces become `+`, non-ASCII characters become percent-escaped UTF-8 bytes.
pub(crate) fn form_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_drops_empty_values() {
        let mut params = Parameters::new();
        params.insert("originator", "");
        params.insert("type", "text");
        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("originator"));
        assert_eq!(params.get("type"), Some("text"));
    }

    #[test]
    fn overlay_prefers_incoming_values() {
        let mut base = Parameters::new();
        base.insert("originator", "client");
        base.insert("charset", "UTF-8");

        let mut incoming = Parameters::new();
        incoming.insert("originator", "message");

        base.overlay(incoming);
        assert_eq!(base.get("originator"), Some("message"));
        assert_eq!(base.get("charset"), Some("UTF-8"));
    }

    #[test]
    fn fill_missing_keeps_existing_values() {
        let mut message = Parameters::new();
        message.insert("originator", "message");

        let mut defaults = Parameters::new();
        defaults.insert("originator", "client");
        defaults.insert("username", "user");

        message.fill_missing(&defaults);
        assert_eq!(message.get("originator"), Some("message"));
        assert_eq!(message.get("username"), Some("user"));
    }

    #[test]
    fn query_string_is_independent_of_insertion_order() {
        let mut forward = Parameters::new();
        forward.insert("allowconcat", "6");
        forward.insert("destination", "0046703112233");
        forward.insert("type", "text");

        let mut backward = Parameters::new();
        backward.insert("type", "text");
        backward.insert("destination", "0046703112233");
        backward.insert("allowconcat", "6");

        assert_eq!(forward.to_query_string(), backward.to_query_string());
        assert_eq!(
            forward.to_query_string(),
            "allowconcat=6&destination=0046703112233&type=text"
        );
    }

    #[test]
    fn empty_mapping_serializes_to_empty_string() {
        assert_eq!(Parameters::new().to_query_string(), "");
    }

    #[test]
    fn form_encode_escapes_spaces_and_non_ascii() {
        assert_eq!(form_encode("test åäö"), "test+%C3%A5%C3%A4%C3%B6");
        assert_eq!(form_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(form_encode("plain"), "plain");
    }
}
