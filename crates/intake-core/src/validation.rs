//! Application field validation
//!
//! Validation is a pure mapping from a rule table and a payload to one
//! boolean per rule. Rendering the result (inline error text) is the form's
//! job, see `crate::form`.

use crate::payload::{ApplicationPayload, FieldValue};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Browser whitespace as a regex class body: the ECMAScript `\s` set, which
/// includes U+FEFF and excludes U+0085
const JS_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

lazy_static! {
    /// `local@domain.tld` with no whitespace and no extra `@`
    static ref EMAIL_PATTERN: Regex = Regex::new(&format!(
        r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$",
        ws = JS_WHITESPACE_CLASS
    ))
    .unwrap();
}

/// Inline error text for a field that failed its rule
pub const INVALID_FIELD_MESSAGE: &str = "Required or invalid";

/// The thirteen application form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Affiliation,
    Cohort,
    Stage,
    Trl,
    Problem,
    Solution,
    Ip,
    Reg,
    FundingLane,
    Ask,
    Consent,
}

impl Field {
    /// Every control in form order
    pub const ALL: [Field; 13] = [
        Field::Name,
        Field::Email,
        Field::Affiliation,
        Field::Cohort,
        Field::Stage,
        Field::Trl,
        Field::Problem,
        Field::Solution,
        Field::Ip,
        Field::Reg,
        Field::FundingLane,
        Field::Ask,
        Field::Consent,
    ];

    /// Control id, `data-for` value and JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Affiliation => "affiliation",
            Field::Cohort => "cohort",
            Field::Stage => "stage",
            Field::Trl => "trl",
            Field::Problem => "problem",
            Field::Solution => "solution",
            Field::Ip => "ip",
            Field::Reg => "reg",
            Field::FundingLane => "fundingLane",
            Field::Ask => "ask",
            Field::Consent => "consent",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Field::Consent)
    }
}

/// A named predicate over one field value
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub check: fn(FieldValue<'_>) -> bool,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Text value of a field; flags never satisfy a text rule
fn text(value: FieldValue<'_>) -> Option<&str> {
    match value {
        FieldValue::Text(s) => Some(s),
        FieldValue::Flag(_) => None,
    }
}

/// Whitespace as browsers define it for `trim()` and regex `\s`
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `str::trim` with browser whitespace
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Length in UTF-16 code units, matching a JS string's `length`
fn js_length(s: &str) -> usize {
    s.encode_utf16().count()
}

fn trimmed_len_at_least(value: FieldValue<'_>, min: usize) -> bool {
    text(value).is_some_and(|s| js_length(trim_js(s)) >= min)
}

fn check_name(value: FieldValue<'_>) -> bool {
    trimmed_len_at_least(value, 3)
}

fn check_email(value: FieldValue<'_>) -> bool {
    text(value).is_some_and(is_valid_email)
}

fn check_affiliation(value: FieldValue<'_>) -> bool {
    trimmed_len_at_least(value, 2)
}

fn check_present(value: FieldValue<'_>) -> bool {
    trimmed_len_at_least(value, 1)
}

fn check_consent(value: FieldValue<'_>) -> bool {
    // Only the boolean `true` counts, never a truthy string
    value == FieldValue::Flag(true)
}

/// Rule table for the application form
///
/// `problem`, `solution`, `ip`, `reg` and `ask` are free text and have no rule.
pub const APPLICATION_RULES: [FieldRule; 8] = [
    FieldRule { field: Field::Name, check: check_name },
    FieldRule { field: Field::Email, check: check_email },
    FieldRule { field: Field::Affiliation, check: check_affiliation },
    FieldRule { field: Field::Cohort, check: check_present },
    FieldRule { field: Field::Stage, check: check_present },
    FieldRule { field: Field::Trl, check: check_present },
    FieldRule { field: Field::FundingLane, check: check_present },
    FieldRule { field: Field::Consent, check: check_consent },
];

/// Check an address against the `local@domain.tld` pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Per-field validity, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    results: Vec<(Field, bool)>,
}

impl ValidationReport {
    /// True iff every rule passed
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, valid)| *valid)
    }

    /// Result for one field, `None` if no rule covers it
    pub fn get(&self, field: Field) -> Option<bool> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, valid)| *valid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.results.iter().copied()
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|(_, valid)| !valid)
            .map(|(f, _)| *f)
            .collect()
    }

    /// Inline message for a field: empty when valid
    pub fn message(&self, field: Field) -> &'static str {
        match self.get(field) {
            Some(false) => INVALID_FIELD_MESSAGE,
            _ => "",
        }
    }

    /// `{ "name": true, ... }` map for the JS side
    pub fn to_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .results
            .iter()
            .map(|(f, valid)| (f.as_str().to_string(), serde_json::Value::Bool(*valid)))
            .collect();
        serde_json::Value::Object(map).to_string()
    }
}

/// Evaluate every rule against the payload
pub fn validate(rules: &[FieldRule], payload: &ApplicationPayload) -> ValidationReport {
    let results = rules
        .iter()
        .map(|rule| (rule.field, (rule.check)(payload.value(rule.field))))
        .collect();
    ValidationReport { results }
}

/// Evaluate the application rule table
pub fn validate_payload(payload: &ApplicationPayload) -> ValidationReport {
    validate(&APPLICATION_RULES, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn valid_payload() -> ApplicationPayload {
        ApplicationPayload {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            affiliation: "USN".to_string(),
            cohort: "Fall 2025".to_string(),
            stage: "pilot".to_string(),
            trl: "6".to_string(),
            funding_lane: "SBIR".to_string(),
            consent: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn test_email_pattern_quirks_are_kept() {
        // Consecutive dots and one-letter TLDs pass
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("a@b.c"));
        // Quoted locals and double @ do not
        assert!(!is_valid_email("\"a b\"@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com "));
        // Browser whitespace: BOM counts, NEL does not
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn test_every_js_whitespace_breaks_email() {
        let samples = (0u32..=0x3000)
            .chain([0xFEFF])
            .filter_map(char::from_u32)
            .filter(|c| is_js_whitespace(*c));
        for c in samples {
            assert!(!is_valid_email(&format!("a{c}b@c.com")), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_trim_uses_browser_whitespace() {
        assert_eq!(trim_js("\u{FEFF} ab \u{3000}"), "ab");
        assert_eq!(trim_js("\u{85}ab"), "\u{85}ab");

        let mut payload = valid_payload();
        payload.name = "\u{FEFF}ab".to_string();
        assert_eq!(validate_payload(&payload).get(Field::Name), Some(false));
        payload.name = "\u{85}ab".to_string();
        assert_eq!(validate_payload(&payload).get(Field::Name), Some(true));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let mut payload = valid_payload();
        payload.name = "a\u{1F600}".to_string();
        payload.affiliation = "\u{1F600}".to_string();
        let report = validate_payload(&payload);
        assert_eq!(report.get(Field::Name), Some(true));
        assert_eq!(report.get(Field::Affiliation), Some(true));

        payload.name = "\u{E9}\u{E9}".to_string();
        assert_eq!(validate_payload(&payload).get(Field::Name), Some(false));
    }

    #[test]
    fn test_valid_payload_passes() {
        let report = validate_payload(&valid_payload());
        assert!(report.is_valid());
        assert!(report.invalid_fields().is_empty());
        assert_eq!(report.iter().count(), 8);
    }

    #[test]
    fn test_empty_payload_fails_every_rule() {
        let report = validate_payload(&ApplicationPayload::default());
        assert!(!report.is_valid());
        assert_eq!(
            report.invalid_fields(),
            vec![
                Field::Name,
                Field::Email,
                Field::Affiliation,
                Field::Cohort,
                Field::Stage,
                Field::Trl,
                Field::FundingLane,
                Field::Consent,
            ]
        );
    }

    #[test]
    fn test_length_rules_trim_whitespace() {
        let mut payload = valid_payload();
        payload.name = "  ab  ".to_string();
        payload.affiliation = " x ".to_string();
        payload.trl = "   ".to_string();
        let report = validate_payload(&payload);
        assert_eq!(report.get(Field::Name), Some(false));
        assert_eq!(report.get(Field::Affiliation), Some(false));
        assert_eq!(report.get(Field::Trl), Some(false));
        assert_eq!(report.get(Field::Email), Some(true));
    }

    #[test]
    fn test_free_text_fields_have_no_rule() {
        let report = validate_payload(&valid_payload());
        for field in [Field::Problem, Field::Solution, Field::Ip, Field::Reg, Field::Ask] {
            assert_eq!(report.get(field), None);
            assert_eq!(report.message(field), "");
        }
    }

    #[test]
    fn test_consent_requires_boolean_true() {
        assert!(check_consent(FieldValue::Flag(true)));
        assert!(!check_consent(FieldValue::Flag(false)));
        assert!(!check_consent(FieldValue::Text("true")));
    }

    #[test]
    fn test_messages() {
        let mut payload = valid_payload();
        payload.consent = false;
        let report = validate_payload(&payload);
        assert_eq!(report.message(Field::Consent), INVALID_FIELD_MESSAGE);
        assert_eq!(report.message(Field::Name), "");
    }

    #[test]
    fn test_report_json() {
        let mut payload = valid_payload();
        payload.email = "nope".to_string();
        let json: serde_json::Value =
            serde_json::from_str(&validate_payload(&payload).to_json()).unwrap();
        assert_eq!(json["email"], false);
        assert_eq!(json["fundingLane"], true);
        assert!(json.get("ask").is_none());
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [FieldRule { field: Field::Ask, check: check_present }];
        let report = validate(&rules, &ApplicationPayload::default());
        assert_eq!(report.get(Field::Ask), Some(false));
        assert_eq!(report.get(Field::Name), None);
    }

    proptest! {
        /// Overall validity is the AND of the individual predicates
        #[test]
        fn validity_is_conjunction_of_rules(
            name in ".{0,6}",
            email in "[a-z @.]{0,8}",
            affiliation in ".{0,4}",
            cohort in " {0,2}[a-z]{0,2}",
            trl in "[0-9 ]{0,2}",
            consent in any::<bool>(),
        ) {
            let payload = ApplicationPayload {
                name,
                email,
                affiliation,
                cohort,
                stage: "s".to_string(),
                trl,
                funding_lane: "f".to_string(),
                consent,
                ..Default::default()
            };
            let report = validate_payload(&payload);
            let expected = APPLICATION_RULES
                .iter()
                .all(|rule| (rule.check)(payload.value(rule.field)));
            prop_assert_eq!(report.is_valid(), expected);
        }

        /// Whitespace anywhere in an address makes it invalid
        #[test]
        fn email_with_whitespace_is_invalid(
            local in "[a-z]{1,5}",
            domain in "[a-z]{1,5}",
            ws in "[ \t\n]",
        ) {
            let email = format!("{}{}@{}.com", local, ws, domain);
            prop_assert!(!is_valid_email(&email));
        }

        /// Without consent no payload is ever accepted
        #[test]
        fn no_consent_never_valid(name in "[a-z]{3,10}") {
            let mut payload = valid_payload();
            payload.name = name;
            payload.consent = false;
            prop_assert!(!validate_payload(&payload).is_valid());
        }
    }
}
