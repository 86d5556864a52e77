use serde_json::Value;

use super::scalar_text;

/// Print just the headline number from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_paths: [&[&str]; 4] = [
        &["final_rate"],
        &["collateral_value"],
        &["pd", "pd"],
        &["version"],
    ];

    for path in priority_paths {
        let found = path
            .iter()
            .try_fold(result_obj, |node, key| node.get(*key));
        if let Some(val) = found {
            if !val.is_null() {
                println!("{}", scalar_text(val));
                return;
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_text(val));
            return;
        }
    }

    println!("{}", scalar_text(result_obj));
}
