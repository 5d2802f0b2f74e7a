use serde_json::Value;

use super::format_number;

/// Well-known answer fields, in priority order. Dotted keys reach into
/// nested objects.
const PRIORITY_KEYS: [&str; 8] = [
    "total_monthly_payment",
    "summary.monthly_payment",
    "estimated_tax",
    "break_even_months",
    "monthly_savings",
    "margin_percent",
    "margin_call_price",
    "monthly_payment",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if result_obj.is_object() {
        for key in PRIORITY_KEYS {
            let pointer = format!("/{}", key.replace('.', "/"));
            if let Some(val) = result_obj.pointer(&pointer) {
                // break_even_months is null when not applicable; say so rather than skip.
                if val.is_null() && key == "break_even_months" {
                    return "n/a".to_string();
                }
                if !val.is_null() {
                    return format_minimal(key, val);
                }
            }
        }

        if let Some((key, val)) = result_obj.as_object().and_then(|m| m.iter().next()) {
            return format!("{}: {}", key, format_minimal(key, val));
        }
    }

    format_minimal("", result_obj)
}

fn format_minimal(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !key.is_empty() => format_number(key, f),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
