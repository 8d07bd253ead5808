use serde_json::Value;
use std::fmt;

/// Why a field failed the structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field is absent.
    Missing,
    /// Field is present but not the expected primitive type.
    WrongType { expected: &'static str },
}

/// One failed constraint, addressed by dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "missing required field `{}`", self.path),
            ViolationKind::WrongType { expected } => {
                write!(f, "field `{}` must be {}", self.path, expected)
            }
        }
    }
}

/// Verdict plus every violation found, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Violation>,
}

/// Check a candidate record against the fixed statement schema.
///
/// Reports every violation, not just the first, but short-circuits per
/// missing parent: a missing `actor` does not also report `actor.name`.
/// Check order is fixed: actor, actor.name, actor.mbox, verb, verb.id,
/// verb.display, object.
pub fn validate(record: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    match record.get("actor") {
        None => errors.push(missing("actor")),
        Some(actor) if !actor.is_object() => errors.push(wrong_type("actor", "an object")),
        Some(actor) => {
            check_string(actor, "actor.name", "name", &mut errors);
            check_string(actor, "actor.mbox", "mbox", &mut errors);
        }
    }

    match record.get("verb") {
        None => errors.push(missing("verb")),
        Some(verb) if !verb.is_object() => errors.push(wrong_type("verb", "an object")),
        Some(verb) => {
            check_string(verb, "verb.id", "id", &mut errors);
            match verb.get("display") {
                None => errors.push(missing("verb.display")),
                Some(d) if !d.is_object() => errors.push(wrong_type("verb.display", "an object")),
                Some(_) => {}
            }
        }
    }

    match record.get("object") {
        None => errors.push(missing("object")),
        Some(obj) if !obj.is_object() => errors.push(wrong_type("object", "an object")),
        Some(_) => {}
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Bulk-ingestion mode: keep only the records that pass, in input order.
/// Returns `(storable, rejected)`; the caller fails the batch only when
/// `storable` is empty.
pub fn partition_storable(records: Vec<Value>) -> (Vec<Value>, Vec<(Value, ValidationReport)>) {
    let mut storable = Vec::new();
    let mut rejected = Vec::new();

    for record in records {
        let report = validate(&record);
        if report.valid {
            storable.push(record);
        } else {
            rejected.push((record, report));
        }
    }

    (storable, rejected)
}

fn check_string(parent: &Value, path: &str, key: &str, errors: &mut Vec<Violation>) {
    match parent.get(key) {
        None => errors.push(missing(path)),
        Some(v) if !v.is_string() => errors.push(wrong_type(path, "text")),
        Some(_) => {}
    }
}

fn missing(path: &str) -> Violation {
    Violation {
        path: path.to_string(),
        kind: ViolationKind::Missing,
    }
}

fn wrong_type(path: &str, expected: &'static str) -> Violation {
    Violation {
        path: path.to_string(),
        kind: ViolationKind::WrongType { expected },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(report: &ValidationReport) -> Vec<&str> {
        report.errors.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn complete_statement_is_valid() {
        let record = json!({
            "actor": { "name": "John", "mbox": "mailto:john@x.com" },
            "verb": {
                "id": "http://adlnet.gov/expapi/verbs/completed",
                "display": { "en-US": "completed" }
            },
            "object": { "objectType": "Activity", "name": "Course" }
        });

        let report = validate(&record);
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn bare_actor_reports_all_missing_fields() {
        let record = json!({ "actor": { "name": "John" } });

        let report = validate(&record);
        assert!(!report.valid);
        assert_eq!(paths(&report), vec!["actor.mbox", "verb", "object"]);
        assert_eq!(report.errors[0].kind, ViolationKind::Missing);
    }

    #[test]
    fn empty_record_reports_three_top_level_fields() {
        let report = validate(&json!({}));
        assert!(!report.valid);
        assert_eq!(paths(&report), vec!["actor", "verb", "object"]);
    }

    #[test]
    fn missing_parent_short_circuits_children() {
        let report = validate(&json!({ "verb": { "id": "http://v", "display": {} } }));
        // No actor.name / actor.mbox entries, only the parent.
        assert_eq!(paths(&report), vec!["actor", "object"]);
    }

    #[test]
    fn wrong_primitive_types_are_reported() {
        let record = json!({
            "actor": { "name": 42, "mbox": "mailto:a@x.com" },
            "verb": { "id": "http://v", "display": "completed" },
            "object": "Course"
        });

        let report = validate(&record);
        assert_eq!(paths(&report), vec!["actor.name", "verb.display", "object"]);
        assert_eq!(
            report.errors[0].kind,
            ViolationKind::WrongType { expected: "text" }
        );
        assert_eq!(
            report.errors[1].kind,
            ViolationKind::WrongType {
                expected: "an object"
            }
        );
    }

    #[test]
    fn non_object_actor_is_one_violation() {
        let report = validate(&json!({
            "actor": "John",
            "verb": { "id": "http://v", "display": {} },
            "object": {}
        }));
        assert_eq!(paths(&report), vec!["actor"]);
    }

    #[test]
    fn validation_is_deterministic() {
        let record = json!({ "actor": { "name": "John" } });
        assert_eq!(validate(&record), validate(&record));
    }

    #[test]
    fn partition_keeps_only_storable_records() {
        let records = vec![
            json!({
                "actor": { "name": "A", "mbox": "mailto:a@x.com" },
                "verb": { "id": "http://v", "display": { "en-US": "did" } },
                "object": {}
            }),
            json!({ "actor": { "name": "B" } }),
            json!({
                "actor": { "name": "C", "mbox": "mailto:c@x.com" },
                "verb": { "id": "http://v", "display": { "en-US": "did" } },
                "object": { "objectType": "Activity" }
            }),
        ];

        let (storable, rejected) = partition_storable(records);
        assert_eq!(storable.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].0["actor"]["name"], "B");
        assert!(!rejected[0].1.valid);
    }

    #[test]
    fn partition_of_all_invalid_keeps_nothing() {
        let (storable, rejected) = partition_storable(vec![json!({}), json!({ "verb": {} })]);
        assert!(storable.is_empty());
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn violation_display_names_the_path() {
        let v = Violation {
            path: "actor.mbox".into(),
            kind: ViolationKind::Missing,
        };
        assert_eq!(v.to_string(), "missing required field `actor.mbox`");
    }
}
