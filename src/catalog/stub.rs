//! Stub value policies
//!
//! When a catalog is missing a canonical key, a stub entry is appended for
//! it. The policy decides the stub's value: nothing, a fixed string, or a
//! value computed from the key, the target language and the canonical
//! translation.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Template used by the command line when no other policy is configured
pub const DEFAULT_STUB_TEMPLATE: &str = "{value} ({language})";

/// Everything a computed policy may use to build a stub value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubRequest<'a> {
    /// Key being added
    pub key: &'a str,
    /// Language of the catalog receiving the stub
    pub language: &'a str,
    /// Value of the key in the canonical catalog
    pub canonical_value: Option<&'a str>,
}

type StubFn = dyn Fn(&StubRequest<'_>) -> String;

/// How stub values are produced
pub enum StubPolicy {
    /// Every stub gets the same value
    Fixed(String),
    /// The value is computed per key
    Computed(Box<StubFn>),
}

impl StubPolicy {
    pub fn fixed(value: impl Into<String>) -> Self {
        Self::Fixed(value.into())
    }

    pub fn computed(f: impl Fn(&StubRequest<'_>) -> String + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    /// Build a policy from a template.
    ///
    /// `{key}`, `{language}` and `{value}` are replaced by the missing key,
    /// the target language and the canonical value (empty when the canonical
    /// entry is untranslated). Other braces are left alone.
    ///
    /// ```
    /// use posync::catalog::{StubPolicy, StubRequest};
    ///
    /// let policy = StubPolicy::template("{value} ({language})");
    /// let request = StubRequest { key: "foo", language: "ru", canonical_value: Some("Foo") };
    /// assert_eq!(policy.resolve(&request), "Foo (ru)");
    /// ```
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::computed(move |request| render_template(&template, request))
    }

    /// Produce the stub value for one missing key
    pub fn resolve(&self, request: &StubRequest<'_>) -> String {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Computed(f) => f(request),
        }
    }
}

impl fmt::Debug for StubPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

fn render_template(template: &str, request: &StubRequest<'_>) -> String {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

    let re = PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\{(key|language|value)\}").expect("Invalid regex pattern"));

    re.replace_all(template, |caps: &regex::Captures<'_>| match &caps[1] {
        "key" => request.key.to_string(),
        "language" => request.language.to_string(),
        _ => request.canonical_value.unwrap_or_default().to_string(),
    })
    .into_owned()
}
