use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// NOTE: Statement Schema Design
//
// - The validator (see validate.rs) operates on raw `serde_json::Value`, not
//   on these structs: its job is to decide whether arbitrary parsed JSON is
//   storable at all. The typed model below is for the paths that *build*
//   statements (interactive mode, template generation) rather than ingest them.
// - `object` stays an open `Value`: the schema only requires that it is an
//   object. Downstream conventions expect `objectType` and `name`, but the
//   validation layer does not enforce them.
// - `extra` maps preserve unknown fields so an export/import round trip does
//   not strip data the schema never looked at.

/// Who acted. `mbox` is conventionally a `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub mbox: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What was done. `display` maps a language tag to localized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    pub id: String,
    pub display: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One xAPI learning-activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub actor: Actor,
    pub verb: Verb,
    pub object: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Holds `score.scaled` among other things; never enforced by the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Statement {
    /// Assemble a statement from the free-text answers the interactive
    /// session collects, in prompt order.
    pub fn from_answers(
        actor_name: &str,
        actor_mbox: &str,
        verb_id: &str,
        verb_display: &str,
        object_type: &str,
        object_name: &str,
    ) -> Self {
        let mut display = Map::new();
        display.insert("en-US".to_string(), Value::String(verb_display.to_string()));

        Statement {
            actor: Actor {
                name: actor_name.to_string(),
                mbox: actor_mbox.to_string(),
                extra: Map::new(),
            },
            verb: Verb {
                id: verb_id.to_string(),
                display,
                extra: Map::new(),
            },
            object: json!({
                "objectType": object_type,
                "name": object_name,
            }),
            timestamp: Some(Utc::now().to_rfc3339()),
            result: None,
            duration: None,
            authority: None,
            extra: Map::new(),
        }
    }

    /// Skeleton statement for `generate-template`; also what the guided
    /// prompts fill in field by field.
    pub fn template() -> Value {
        json!({
            "actor": {
                "name": "Learner Name",
                "mbox": "mailto:learner@example.com"
            },
            "verb": {
                "id": "http://adlnet.gov/expapi/verbs/completed",
                "display": { "en-US": "completed" }
            },
            "object": {
                "objectType": "Activity",
                "name": "Activity Name"
            },
            "timestamp": "2024-01-01T00:00:00Z"
        })
    }
}
