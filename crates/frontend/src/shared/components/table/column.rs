//! Column descriptors and raw cell values for the generic data table.

use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

/// Raw value of one cell, before any custom rendering.
///
/// Sorting compares these values, never the rendered output. Dates are
/// carried as ISO-8601 `Text`, which sorts date-correct lexicographically.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Absent or null field. Renders as a placeholder dash and always
    /// sorts to the end, whatever the direction.
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Default cell text when the column has no custom renderer.
    pub fn display(&self) -> String {
        match self {
            CellValue::Missing => "—".to_string(),
            CellValue::Bool(true) => "Yes".to_string(),
            CellValue::Bool(false) => "No".to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Ordering between two raw values.
    ///
    /// Same-typed values compare naturally (strings ordinally,
    /// case-sensitive; NaN compares equal). Mixed types compare equal, so
    /// a heterogeneous column degrades to input order instead of failing.
    /// `Missing` placement is the sorter's job, not handled here.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Missing,
        }
    }
}

pub type CellAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell renderer: `(value, row, index_in_view, start_index)`.
pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T, usize, usize) -> AnyView + Send + Sync>;

/// Describes how one field of a row is labeled, sorted and rendered.
///
/// `key` is the stable identity of the column; it must be unique within
/// one descriptor array (see [`column_key_issues`]).
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub sticky: bool,
    /// Horizontal offset in px for sticky positioning.
    pub left: i32,
    value: CellAccessor<T>,
    render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            sticky: self.sticky,
            left: self.left,
            value: Arc::clone(&self.value),
            render: self.render.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        value: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            sortable: false,
            sticky: false,
            left: 0,
            value: Arc::new(value),
            render: None,
        }
    }

    /// Column with no backing field (row numbers, action buttons). Its raw
    /// value is always `Missing`, so it is not meaningfully sortable.
    pub fn computed(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, |_| CellValue::Missing)
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Pin the column at `left` px while the table scrolls horizontally.
    pub fn sticky(mut self, left: i32) -> Self {
        self.sticky = true;
        self.left = left;
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &T, usize, usize) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn value_of(&self, row: &T) -> CellValue {
        (self.value)(row)
    }

    pub(crate) fn render_cell(&self, row: &T, index_in_view: usize, start_index: usize) -> AnyView {
        let value = self.value_of(row);
        match &self.render {
            Some(render) => render(&value, row, index_in_view, start_index),
            None => view! { <span>{value.display()}</span> }.into_any(),
        }
    }
}

/// Contract violations in a descriptor array: duplicate keys and empty
/// keys/labels. Callers treat these as programming errors; the table
/// asserts on them in debug builds and logs them in release.
pub fn column_key_issues<T>(columns: &[Column<T>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for col in columns {
        if col.key.is_empty() || col.label.is_empty() {
            issues.push(format!("column '{}' has an empty key or label", col.key));
        }
        if !seen.insert(col.key) {
            issues.push(format!("duplicate column key '{}'", col.key));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_renders_placeholder() {
        assert_eq!(CellValue::Missing.display(), "—");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Number(42.5).display(), "42.5");
    }

    #[test]
    fn test_option_accessor_maps_none_to_missing() {
        let architect: Option<String> = None;
        assert!(CellValue::from(architect).is_missing());
        assert_eq!(
            CellValue::from(Some("Priya Shah".to_string())),
            CellValue::Text("Priya Shah".into())
        );
    }

    #[test]
    fn test_mixed_types_compare_equal() {
        let n = CellValue::Number(1.0);
        let t = CellValue::Text("1".into());
        assert_eq!(n.compare(&t), Ordering::Equal);
        assert_eq!(t.compare(&n), Ordering::Equal);
    }

    #[test]
    fn test_nan_compares_equal() {
        let nan = CellValue::Number(f64::NAN);
        assert_eq!(nan.compare(&CellValue::Number(1.0)), Ordering::Equal);
    }

    #[test]
    fn test_ordinal_string_compare_is_case_sensitive() {
        // 'Z' < 'a' in ordinal ordering
        let upper = CellValue::Text("Zed".into());
        let lower = CellValue::Text("amy".into());
        assert_eq!(upper.compare(&lower), Ordering::Less);
    }

    #[test]
    fn test_column_key_issues() {
        let columns: Vec<Column<i32>> = vec![
            Column::new("id", "Id", |v| CellValue::from(*v as f64)),
            Column::new("id", "Id again", |v| CellValue::from(*v as f64)),
            Column::new("", "No key", |_| CellValue::Missing),
        ];
        let issues = column_key_issues(&columns);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("duplicate"));
        assert!(issues[1].contains("empty"));
    }

    #[test]
    fn test_unique_columns_have_no_issues() {
        let columns: Vec<Column<i32>> = vec![
            Column::computed("sno", "S.No"),
            Column::new("value", "Value", |v| CellValue::from(*v as f64)),
        ];
        assert!(column_key_issues(&columns).is_empty());
    }
}
