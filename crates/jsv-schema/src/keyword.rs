//! Keyword registry: names, error codes and message templates.

/// Registration of a validation keyword.
///
/// `template` uses positional placeholders: `{0}` is the instance
/// location, `{1}` onwards are the message arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeywordCode {
    pub keyword: &'static str,
    pub error_code: &'static str,
    pub template: &'static str,
}

/// `exclusiveMaximum`: the value must be strictly below the bound.
pub const EXCLUSIVE_MAXIMUM: KeywordCode = KeywordCode {
    keyword: "exclusiveMaximum",
    error_code: "1038",
    template: "{0}: must have an exclusive maximum value of {1}",
};

impl KeywordCode {
    /// Sibling keyword a parent schema may use to override the error code,
    /// e.g. `exclusiveMaximumErrorCode`.
    pub fn error_code_key(&self) -> String {
        format!("{}ErrorCode", self.keyword)
    }

    /// Fill the template.
    pub fn format(&self, at: &str, arguments: &[String]) -> String {
        let mut out = self.template.replace("{0}", at);
        for (i, arg) in arguments.iter().enumerate() {
            out = out.replace(&format!("{{{}}}", i + 1), arg);
        }
        out
    }
}
