//! Field sets attached to log records

use serde_json::Value;

/// Caller-supplied structured attributes.
///
/// Keys are written verbatim; they are not checked against the keys a
/// backend reserves for the message, level or timestamp.
pub type Fields = serde_json::Map<String, Value>;

/// Build a [`Fields`] map from `key => value` pairs.
///
/// Values may be anything serializable; they keep their natural JSON form.
///
/// ```
/// use logport_domain::fields;
///
/// let fields = fields! { "key" => "value", "attempt" => 3 };
/// assert_eq!(fields["key"], "value");
/// assert_eq!(fields["attempt"], 3);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(
                ::std::string::String::from($key),
                $crate::serde_json::to_value(&$value).unwrap_or_default(),
            );
        )+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields() {
        let fields: Fields = fields! {};
        assert!(fields.is_empty());
    }

    #[test]
    fn test_values_keep_json_types() {
        let fields = fields! {
            "name" => "value",
            "count" => 42,
            "ratio" => 0.5,
            "ok" => true,
            "tags" => vec!["a", "b"],
        };

        assert_eq!(fields["name"], Value::String("value".to_string()));
        assert_eq!(fields["count"], 42);
        assert_eq!(fields["ratio"], 0.5);
        assert_eq!(fields["ok"], true);
        assert_eq!(fields["tags"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_last_write_wins() {
        let fields = fields! { "key" => "first", "key" => "second" };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["key"], "second");
    }
}
