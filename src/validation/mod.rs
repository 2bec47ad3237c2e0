pub mod booking;
pub mod contact;

use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};
use validator::{ValidateEmail, ValidateLength};

use crate::catalog::ServiceCatalog;
use crate::clock::Clock;

pub use booking::booking_schema;
pub use contact::contact_schema;

/// Everything a rule may consult besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub today: NaiveDate,
    /// Only forms that pick a service need one.
    pub catalog: Option<&'a ServiceCatalog>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            today: clock.today(),
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: &'a ServiceCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

pub type Predicate<T> = fn(&T, &ValidationContext<'_>) -> bool;

struct Rule<T> {
    field: &'static str,
    check: Predicate<T>,
    message: &'static str,
}

/// Ordered field rules. A field may carry several rules; only the first failure is reported.
pub struct Schema<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> Schema<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: &'static str, check: Predicate<T>, message: &'static str) -> Self {
        self.rules.push(Rule {
            field,
            check,
            message,
        });
        self
    }

    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    pub fn validate(&self, value: &T, ctx: &ValidationContext<'_>) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for rule in &self.rules {
            if errors.get(rule.field).is_some() {
                continue;
            }
            if !(rule.check)(value, ctx) {
                errors.insert(rule.field, rule.message);
            }
        }
        errors
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields())
            .finish()
    }
}

/// Field name to first violated message, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message.into(),
            None => self.entries.push((field, message.into())),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Length check on the trimmed value, counted in characters.
pub fn min_chars(value: &str, min: usize) -> bool {
    value.trim().validate_length(Some(min as u64), None, None)
}

/// `validator`'s address check, plus a dotted domain ending in an alphabetic TLD.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if !value.validate_email() {
        return false;
    }
    value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    struct Pair {
        a: String,
        b: String,
    }

    fn pair_schema() -> Schema<Pair> {
        Schema::<Pair>::new()
            .rule("a", |p, _| !p.a.is_empty(), "a is required")
            .rule("a", |p, _| min_chars(&p.a, 3), "a is too short")
            .rule("b", |p, _| is_email(&p.b), "b must be an email")
    }

    fn ctx() -> ValidationContext<'static> {
        ValidationContext::new(&FixedClock::on(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()))
    }

    #[test]
    fn test_first_violation_wins() {
        let errors = pair_schema().validate(
            &Pair {
                a: String::new(),
                b: "nope".to_string(),
            },
            &ctx(),
        );
        assert_eq!(errors.get("a"), Some("a is required"));
        assert_eq!(errors.get("b"), Some("b must be an email"));
        assert_eq!(errors.fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_valid_fields_have_no_entry() {
        let errors = pair_schema().validate(
            &Pair {
                a: "ab".to_string(),
                b: "x@y.io".to_string(),
            },
            &ctx(),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("a"), Some("a is too short"));
        assert_eq!(errors.get("b"), None);
    }

    #[test]
    fn test_schema_fields_in_order() {
        assert_eq!(pair_schema().fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_field_errors_serialize_as_object() {
        let mut errors = FieldErrors::default();
        errors.insert("name", "Name must be at least 2 characters");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"], "Name must be at least 2 characters");
    }

    #[test]
    fn test_min_chars_trims() {
        assert!(min_chars("Al", 2));
        assert!(!min_chars(" A ", 2));
        assert!(min_chars("Zoë", 3));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("jane@x.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@"));
        assert!(!is_email("@x.com"));
        assert!(!is_email("jane@x"));
        assert!(!is_email("ja ne@x.com"));
        assert!(!is_email("jane@@x.com"));
        assert!(!is_email("jane@x..com"));
        assert!(!is_email("jane@x.c0m"));
        assert!(is_email("  jane@x.com "));
    }
}
