//! English noun inflection for generated identifiers.
//!
//! The rule set is the classic Rails/ActiveSupport English table: ordered
//! regular-expression rules, an irregular-noun table and a list of
//! uncountable nouns. Rules are stored highest priority first; the first
//! rule that matches rewrites the word and the rest are skipped.
//!
//! [`inflect`] layers the identifier fallbacks on top so that a collection
//! always yields two distinct names, one for a single document and one for a
//! list of documents.

use std::sync::OnceLock;

use regex::Regex;

/// Plural rules, highest priority first: `(pattern, replacement)`.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)^(m|l)ice$", "${1}ice"),
    (r"(?i)^(m|l)ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

/// Singular rules, highest priority first.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)^(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Irregular nouns: `(singular, plural)`.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Nouns whose singular and plural forms are identical.
const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// Suffix appended when a name is already singular.
pub const SINGULAR_SUFFIX: &str = "Item";

struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("inflection rules are valid regular expressions"),
            replacement: replacement.into(),
        }
    }
}

/// Rules rewriting a trailing `from` into `to`, keeping the case of the
/// first letter.
fn irregular_rules(from: &str, to: &str) -> [Rule; 2] {
    let (head, rest) = from.split_at(1);
    let (to_head, to_rest) = to.split_at(1);
    debug_assert_eq!(head, to_head);
    let lower = head.to_ascii_lowercase();
    let upper = head.to_ascii_uppercase();
    let replacement = format!("${{1}}${{2}}{to_rest}");

    [
        // Whole word, or after a non-letter separator.
        Rule::new(
            &format!("(^|[^A-Za-z])([{lower}{upper}])(?i:{rest})$"),
            replacement.clone(),
        ),
        // camelCase boundary.
        Rule::new(&format!("([a-z0-9])({upper})(?i:{rest})$"), replacement),
    ]
}

/// English inflection rule set.
pub struct Inflector {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountable: Regex,
}

impl Inflector {
    /// The shared English rule set, compiled once.
    pub fn english() -> &'static Inflector {
        static ENGLISH: OnceLock<Inflector> = OnceLock::new();
        ENGLISH.get_or_init(Inflector::build)
    }

    fn build() -> Self {
        let mut plurals = Vec::with_capacity(PLURAL_RULES.len() + IRREGULARS.len() * 4);
        let mut singulars = Vec::with_capacity(SINGULAR_RULES.len() + IRREGULARS.len() * 4);

        // Irregulars outrank the regular table. They only apply to a whole
        // word or to the last camelCase / snake_case segment, so `human`
        // is not read as `hu` + `man`.
        for (singular, plural) in IRREGULARS {
            plurals.extend(irregular_rules(singular, plural));
            plurals.extend(irregular_rules(plural, plural));
            singulars.extend(irregular_rules(singular, singular));
            singulars.extend(irregular_rules(plural, singular));
        }

        plurals.extend(PLURAL_RULES.iter().map(|(p, r)| Rule::new(p, *r)));
        singulars.extend(SINGULAR_RULES.iter().map(|(p, r)| Rule::new(p, *r)));

        let uncountable = Regex::new(&format!(r"(?i)\b(?:{})$", UNCOUNTABLES.join("|")))
            .expect("uncountable list is a valid regular expression");

        Self {
            plurals,
            singulars,
            uncountable,
        }
    }

    pub fn pluralize(&self, word: &str) -> String {
        self.apply(word, &self.plurals)
    }

    pub fn singularize(&self, word: &str) -> String {
        self.apply(word, &self.singulars)
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.is_match(word)
    }

    fn apply(&self, word: &str, rules: &[Rule]) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }

        rules
            .iter()
            .find(|rule| rule.pattern.is_match(word))
            .map(|rule| {
                rule.pattern
                    .replace(word, rule.replacement.as_str())
                    .into_owned()
            })
            .unwrap_or_else(|| word.to_string())
    }
}

/// Singular and plural identifiers derived from a collection name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectedName {
    pub singular: String,
    pub plural: String,
}

/// Derive a distinct `(singular, plural)` identifier pair.
///
/// 1. Singularize the name; if that changes nothing (already singular or
///    uncountable) or leaves nothing (`s`), append [`SINGULAR_SUFFIX`] to
///    the name.
/// 2. Pluralize the singular; if that changes nothing fall back to the
///    original name.
pub fn inflect(collection: &str) -> InflectedName {
    let inflector = Inflector::english();

    let mut singular = inflector.singularize(collection);
    if singular.is_empty() || singular == collection {
        singular = format!("{collection}{SINGULAR_SUFFIX}");
    }

    let mut plural = inflector.pluralize(&singular);
    if plural == singular {
        plural = collection.to_string();
    }

    InflectedName { singular, plural }
}
