//! SPDX license-text markup.
//!
//! Bundled license texts use the SPDX template markup for replaceable
//! blanks and optional clauses:
//!
//! ```text
//! <<var;name=copyright;original=<year> <copyright holders>;match=.+>>
//! <<beginOptional;name=title>>MIT License<<endOptional>>
//! ```
//!
//! [`strip_markup`] produces the "default values, every optional clause
//! included" variant of the text.

use std::sync::OnceLock;

use regex::Regex;

/// The opening delimiter of every markup element.
pub const MARKUP_OPEN: &str = "<<";

fn var_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<<var;name=[^;>]*;original=(.*?);match=.*?>>")
            .expect("var marker pattern is valid")
    })
}

fn optional_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<<beginOptional(?:;[^>]*)?>>|<<endOptional>>")
            .expect("optional marker pattern is valid")
    })
}

/// Replace every variable marker with its original value and drop the
/// optional-clause delimiters, keeping the enclosed text.
pub fn strip_markup(raw: &str) -> String {
    let without_vars = var_marker().replace_all(raw, "${1}");
    optional_marker().replace_all(&without_vars, "").into_owned()
}

/// Whether the text still contains markup delimiters.
pub fn has_markup(text: &str) -> bool {
    text.contains(MARKUP_OPEN)
}
