use serde_json::Value;

/// Presentation-side slicing of an amortization schedule. The engine always
/// produces every month; these views only choose which rows are shown.
#[derive(Debug, Clone, Default)]
pub struct ScheduleView {
    /// Every 12th month, plus the final month of a term that is not whole years.
    pub yearly: bool,
    pub first_months: Option<usize>,
}

impl ScheduleView {
    pub fn is_full(&self) -> bool {
        !self.yearly && self.first_months.is_none()
    }

    pub fn select(&self, rows: &[Value]) -> Vec<Value> {
        let last = rows.len();
        let mut picked: Vec<Value> = if self.yearly {
            rows.iter()
                .enumerate()
                .filter(|(i, _)| (i + 1) % 12 == 0 || i + 1 == last)
                .map(|(_, row)| row.clone())
                .collect()
        } else {
            rows.to_vec()
        };
        if let Some(n) = self.first_months {
            picked.truncate(n);
        }
        picked
    }
}

/// Apply the view to `result.schedule` of a computation envelope, if present.
pub fn apply_view(value: &mut Value, view: &ScheduleView) {
    if view.is_full() {
        return;
    }
    if let Some(Value::Array(rows)) = value.pointer_mut("/result/schedule") {
        let selected = view.select(rows);
        *rows = selected;
    }
}
