use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

use crate::models::ValueSpec;

const REF_PREFIX: &str = "$refs:";

/// Expand a context/unit specification into the set of literal strings it
/// denotes. `$refs:<name>` markers pull in the named group from `defs`; a
/// name with no definition contributes nothing. Resolving plain literals
/// returns them unchanged, so resolution is idempotent.
pub fn resolve(spec: &ValueSpec, defs: &HashMap<String, Vec<String>>) -> BTreeSet<String> {
    let mut resolved = BTreeSet::new();

    match spec {
        ValueSpec::One(element) => resolve_element(element, defs, &mut resolved),
        ValueSpec::Many(elements) => {
            for element in elements {
                if let Value::String(element) = element {
                    resolve_element(element, defs, &mut resolved);
                }
            }
        }
    }

    resolved
}

fn resolve_element(element: &str, defs: &HashMap<String, Vec<String>>, out: &mut BTreeSet<String>) {
    if expand_marker(element, defs, out) {
        return;
    }

    // Legacy encoding: a whole list serialized as a single string, e.g.
    // `"[\"$refs:Scenarios\", \"Historic\"]"`. Unpacked one level deep;
    // inner plain strings are literals, never re-parsed.
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(element) {
        for item in &items {
            if let Value::String(item) = item
                && !expand_marker(item, defs, out)
            {
                out.insert(item.clone());
            }
        }
        return;
    }

    out.insert(element.to_string());
}

/// Returns true when `element` was a `$refs:` marker, whether or not the
/// name had a definition.
fn expand_marker(
    element: &str,
    defs: &HashMap<String, Vec<String>>,
    out: &mut BTreeSet<String>,
) -> bool {
    match element.strip_prefix(REF_PREFIX) {
        Some(name) => {
            if let Some(literals) = defs.get(name) {
                out.extend(literals.iter().cloned());
            }
            true
        }
        None => false,
    }
}
