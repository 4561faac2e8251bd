//! Parsed field bodies: a principal value followed by `name[=value]`
//! parameters.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// One parameter of a field body.
///
/// `value` is `None` when the parameter had no `=`. `quoted` records that the
/// raw value was wrapped in double quotes which were stripped (and its
/// interior unescaped).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameValuePair {
    name: String,
    value: Option<String>,
    quoted: bool,
}

impl NameValuePair {
    /// Creates an unquoted parameter.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            quoted: false,
        }
    }

    /// Creates a parameter whose value was a quoted string.
    pub fn quoted(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            quoted: true,
        }
    }

    pub(crate) fn from_parts(name: String, value: Option<String>, quoted: bool) -> Self {
        debug_assert!(!quoted || value.is_some());
        Self {
            name,
            value,
            quoted,
        }
    }

    /// The trimmed parameter name. May be empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value with quotes stripped, if there was an `=`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the value was quoted in the source.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

/// Renders the parameter as it would appear in a header.
///
/// Quoted values are re-escaped so that `"` and `\` survive another parse.
impl fmt::Display for NameValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        let Some(value) = &self.value else {
            return Ok(());
        };
        f.write_str("=")?;
        if !self.quoted {
            return f.write_str(value);
        }
        f.write_str("\"")?;
        for ch in value.chars() {
            if matches!(ch, '"' | '\\') {
                f.write_str("\\")?;
            }
            fmt::Write::write_char(f, ch)?;
        }
        f.write_str("\"")
    }
}

/// The body of a field: the principal value and its parameters in source
/// order.
///
/// Duplicate parameter names are kept as they appear.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawBody {
    value: String,
    params: Vec<NameValuePair>,
}

impl RawBody {
    /// Creates a body from its parts.
    pub fn new(value: impl Into<String>, params: Vec<NameValuePair>) -> Self {
        Self {
            value: value.into(),
            params,
        }
    }

    /// The principal value, e.g. `text/plain`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parameters in source order.
    #[must_use]
    pub fn params(&self) -> &[NameValuePair] {
        &self.params
    }

    /// First parameter whose name matches `name`, ignoring ASCII case.
    ///
    /// Stored names keep their original case.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&NameValuePair> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All parameters matching `name`, ignoring ASCII case, in source order.
    pub fn params_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a NameValuePair> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Splits the body into its principal value and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<NameValuePair>) {
        (self.value, self.params)
    }
}

impl fmt::Display for RawBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        for param in &self.params {
            write!(f, "; {param}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn display_bare_name() {
        assert_eq!(NameValuePair::new("inline", None).to_string(), "inline");
    }

    #[test]
    fn display_token_value() {
        let p = NameValuePair::new("charset", Some("utf-8".into()));
        assert_eq!(p.to_string(), "charset=utf-8");
    }

    #[test]
    fn display_quoted_value_reescapes() {
        let p = NameValuePair::quoted("filename", r#"a"b\c"#);
        assert_eq!(p.to_string(), r#"filename="a\"b\\c""#);
    }

    #[test]
    fn lookup_ignores_ascii_case_but_keeps_stored_case() {
        let body = RawBody::new(
            "text/plain",
            vec![
                NameValuePair::new("Charset", Some("UTF-8".into())),
                NameValuePair::new("charset", Some("latin1".into())),
            ],
        );
        let first = body.param("CHARSET").unwrap();
        assert_eq!(first.name(), "Charset");
        assert_eq!(first.value(), Some("UTF-8"));
        assert_eq!(body.params_named("charset").count(), 2);
        assert!(body.param("format").is_none());
    }

    #[test]
    fn lookup_result_outlives_the_name() {
        let body = RawBody::new(
            "attachment",
            vec![NameValuePair::quoted("filename", "a;b.txt")],
        );
        let found = {
            let key = "FileName".to_ascii_lowercase();
            body.param(&key)
        };
        assert_eq!(found.and_then(NameValuePair::value), Some("a;b.txt"));
    }

    #[test]
    fn display_body() {
        let body = RawBody::new(
            "multipart/mixed",
            vec![
                NameValuePair::quoted("boundary", "x;y"),
                NameValuePair::new("flag", None),
            ],
        );
        assert_eq!(body.to_string(), r#"multipart/mixed; boundary="x;y"; flag"#);
    }
}
