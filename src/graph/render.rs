use serde_json::{Map, Value};

use crate::core::package::Package;
use crate::core::validate::SEPARATOR;

/// `name -> dep1 dep2 ...`, or `name ->` when there are no dependencies.
pub fn render_line(name: &str, deps: &[Package]) -> String {
    let mut out = String::from(name);
    out.push(' ');
    out.push_str(SEPARATOR);
    for dep in deps {
        out.push(' ');
        out.push_str(dep.as_str());
    }
    out
}

pub fn render_text(results: &[(String, Vec<Package>)]) -> String {
    let mut out = String::new();
    for (name, deps) in results {
        out.push_str(&render_line(name, deps));
        out.push('\n');
    }
    out
}

/// One JSON object keyed by queried package in query order. A package
/// queried twice keeps its first position.
pub fn render_json(results: &[(String, Vec<Package>)]) -> serde_json::Result<String> {
    let mut doc = Map::new();
    for (name, deps) in results {
        doc.insert(name.clone(), serde_json::to_value(deps)?);
    }
    serde_json::to_string_pretty(&Value::Object(doc))
}
