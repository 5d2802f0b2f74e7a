use loan_calc_core::currency::round_currency;
use serde_json::{Map, Value};
use std::io;

/// Write output as CSV to stdout.
///
/// A result carrying a schedule is exported as the schedule itself, one row
/// per month with amounts rounded to cents. Anything else is a two-column
/// field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => match result.get("schedule") {
                Some(Value::Array(rows)) if !rows.is_empty() => write_rows(&mut wtr, rows),
                _ => write_fields(&mut wtr, result),
            },
            _ => write_fields(&mut wtr, map),
        },
        Value::Array(arr) => write_rows(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    write_flattened(wtr, "", map);
}

fn write_flattened<W: io::Write>(wtr: &mut csv::Writer<W>, prefix: &str, map: &Map<String, Value>) {
    for (key, val) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => write_flattened(wtr, &full, inner),
            Value::Array(arr) if arr.iter().any(Value::is_object) => {}
            _ => {
                let _ = wtr.write_record([full.as_str(), &format_csv_value(val)]);
            }
        }
    }
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(*h)
                        .map(|v| format_csv_value(v))
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

/// Plain numbers for spreadsheets: integers as-is, everything else to cents.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{:.2}", round_currency(f)),
            None => n.to_string(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        match value["result"].get("schedule") {
            Some(Value::Array(rows)) => write_rows(&mut wtr, rows),
            _ => write_fields(&mut wtr, value["result"].as_object().unwrap()),
        }
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_schedule_rows_rounded_to_cents() {
        let v = json!({ "result": { "schedule": [
            { "month": 1, "payment": 1199.101050, "remaining_balance": 199800.898949 }
        ]}});
        let out = render(&v);
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), "month,payment,remaining_balance");
        assert_eq!(lines.next().unwrap(), "1,1199.10,199800.90");
    }

    #[test]
    fn test_fields_flattened() {
        let v = json!({ "result": { "summary": { "total_interest": 0.5 }, "break_even_months": null } });
        let out = render(&v);
        assert!(out.contains("summary.total_interest,0.50"));
        assert!(out.contains("break_even_months,\n"));
    }
}
