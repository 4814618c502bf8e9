// src/core/flatten.rs
// JSON object → one flat record. Nested objects become dotted keys
// ("homeTeam.name"); arrays keep their compact JSON text; null is an empty cell.
// When a literal dotted key and a nested path land on the same name, the
// first one in source order wins.

use serde_json::{Map, Value};
use tracing::warn;

use crate::store::Record;

pub fn flatten_object(obj: &Map<String, Value>) -> Record {
    let mut out = Record::new();
    flatten_into(&mut out, "", obj);
    out
}

fn flatten_into(out: &mut Record, prefix: &str, obj: &Map<String, Value>) {
    for (key, value) in obj {
        let name = if prefix.is_empty() { key.clone() } else { join!(prefix, ".", key) };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(out, &name, inner),
            other => {
                if out.contains_key(&name) {
                    warn!("field `{name}` appears twice after flattening; keeping the first value");
                } else {
                    out.insert(name, cell(other));
                }
            }
        }
    }
}

/// Render a scalar (or leftover container) as a CSV cell.
pub fn cell(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Object(m) if m.is_empty() => s!(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_get_dotted_keys_in_source_order() {
        let v = json!({
            "id": 1,
            "homeTeam": { "id": 10, "name": "Palmeiras" },
            "score": { "fullTime": { "home": 2, "away": null } },
            "referees": [{ "name": "X" }],
            "stage": "REGULAR_SEASON",
            "odds": {}
        });
        let rec = flatten_object(v.as_object().unwrap());
        let keys: Vec<&str> = rec.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![
            "id", "homeTeam.id", "homeTeam.name", "score.fullTime.home",
            "score.fullTime.away", "referees", "stage", "odds",
        ]);
        assert_eq!(rec["homeTeam.name"], "Palmeiras");
        assert_eq!(rec["score.fullTime.home"], "2");
        assert_eq!(rec["score.fullTime.away"], "");
        assert_eq!(rec["referees"], r#"[{"name":"X"}]"#);
        assert_eq!(rec["odds"], "");
    }

    #[test]
    fn colliding_names_keep_the_first_value() {
        let v = json!({ "a.b": 1, "a": { "b": 2, "c": 3 } });
        let rec = flatten_object(v.as_object().unwrap());
        assert_eq!(rec.len(), 2);
        assert_eq!(rec["a.b"], "1");
        assert_eq!(rec["a.c"], "3");

        let v = json!({ "a": { "b": 2 }, "a.b": 1 });
        assert_eq!(flatten_object(v.as_object().unwrap())["a.b"], "2");
    }
}
