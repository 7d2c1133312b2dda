//! Sort state and row ordering for the generic data table.

use super::column::{CellValue, Column};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort state of one table instance.
///
/// `column == None` means unsorted: rows appear in input order. This is
/// the only state the component keeps between renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortState {
    pub column: Option<&'static str>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header-click transition: unsorted -> asc -> desc -> asc -> ... on
    /// the same column; a different column starts over ascending. There is
    /// no path back to the unsorted state.
    pub fn toggled(self, key: &'static str) -> SortState {
        if self.column == Some(key) {
            let direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
            SortState {
                column: Some(key),
                direction,
            }
        } else {
            SortState {
                column: Some(key),
                direction: SortDirection::Asc,
            }
        }
    }

    /// Header suffix for the given column key.
    pub fn indicator(&self, key: &str) -> &'static str {
        match self.column {
            Some(active) if active == key => match self.direction {
                SortDirection::Asc => " ↑",
                SortDirection::Desc => " ↓",
            },
            _ => "",
        }
    }
}

/// Row permutation for the current sort state, as indices into `rows`.
///
/// The backing sort is `slice::sort_by`, which Rust guarantees stable, so
/// tied keys keep their input order; descending reverses the comparator,
/// which preserves that property. Missing values are split off before
/// sorting and appended afterwards, so they land at the end for both
/// directions. An unknown or non-sortable sort column yields input order.
pub fn display_order<T>(rows: &[T], columns: &[Column<T>], sort: SortState) -> Vec<usize> {
    let column = sort
        .column
        .and_then(|key| columns.iter().find(|col| col.key == key));
    let column = match column {
        Some(col) if col.sortable => col,
        _ => return (0..rows.len()).collect(),
    };

    let keys: Vec<CellValue> = rows.iter().map(|row| column.value_of(row)).collect();
    let (mut present, missing): (Vec<usize>, Vec<usize>) =
        (0..rows.len()).partition(|&i| !keys[i].is_missing());

    present.sort_by(|&a, &b| {
        let ord = keys[a].compare(&keys[b]);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    present.extend(missing);
    present
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: &'static str,
        name: Option<&'static str>,
        joined: &'static str,
        progress: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "c3", name: Some("Zed"), joined: "2025-02-01", progress: 70.0 },
            Row { id: "c1", name: Some("Amy"), joined: "2024-11-20", progress: 30.0 },
            Row { id: "c2", name: Some("Amy"), joined: "2025-01-05", progress: 90.0 },
        ]
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("id", "Id", |r: &Row| CellValue::from(r.id)),
            Column::new("name", "Name", |r: &Row| {
                CellValue::from(r.name.map(|n| n.to_string()))
            })
            .sortable(),
            Column::new("joined", "Joined", |r: &Row| CellValue::from(r.joined)).sortable(),
            Column::new("progress", "Progress", |r: &Row| CellValue::from(r.progress)).sortable(),
        ]
    }

    fn ids(rows: &[Row], order: &[usize]) -> Vec<&'static str> {
        order.iter().map(|&i| rows[i].id).collect()
    }

    #[test]
    fn test_unsorted_preserves_input_order() {
        let rows = rows();
        let order = display_order(&rows, &columns(), SortState::default());
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_ascending_sort_is_stable() {
        // Two rows named Amy: c1 arrives before c2 and must stay first.
        let rows = rows();
        let sort = SortState::default().toggled("name");
        let order = display_order(&rows, &columns(), sort);
        assert_eq!(ids(&rows, &order), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_descending_keeps_tied_rows_in_input_order() {
        let rows = rows();
        let sort = SortState::default().toggled("name").toggled("name");
        assert_eq!(sort.direction, SortDirection::Desc);
        let order = display_order(&rows, &columns(), sort);
        assert_eq!(ids(&rows, &order), vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_sorting_sorted_input_is_idempotent() {
        let rows = rows();
        let cols = columns();
        let sort = SortState::default().toggled("name");
        let order = display_order(&rows, &cols, sort);
        let sorted: Vec<Row> = order.iter().map(|&i| rows[i].clone()).collect();
        let again = display_order(&sorted, &cols, sort);
        assert_eq!(again, vec![0, 1, 2]);
    }

    #[test]
    fn test_descending_reverses_exactly_without_ties() {
        let rows = rows();
        let cols = columns();
        let asc = display_order(&rows, &cols, SortState::default().toggled("progress"));
        let desc = display_order(
            &rows,
            &cols,
            SortState::default().toggled("progress").toggled("progress"),
        );
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_iso_dates_sort_chronologically() {
        let rows = rows();
        let order = display_order(&rows, &columns(), SortState::default().toggled("joined"));
        assert_eq!(ids(&rows, &order), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_missing_values_sink_for_both_directions() {
        let mut rows = rows();
        rows[0].name = None; // c3 loses its name
        let cols = columns();

        let asc = display_order(&rows, &cols, SortState::default().toggled("name"));
        assert_eq!(ids(&rows, &asc), vec!["c1", "c2", "c3"]);

        let desc = display_order(
            &rows,
            &cols,
            SortState::default().toggled("name").toggled("name"),
        );
        assert_eq!(ids(&rows, &desc), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_unknown_or_unsortable_column_keeps_input_order() {
        let rows = rows();
        let cols = columns();
        let unknown = SortState {
            column: Some("ghost"),
            direction: SortDirection::Asc,
        };
        assert_eq!(display_order(&rows, &cols, unknown), vec![0, 1, 2]);

        // "id" exists but is not flagged sortable
        let unsortable = SortState {
            column: Some("id"),
            direction: SortDirection::Asc,
        };
        assert_eq!(display_order(&rows, &cols, unsortable), vec![0, 1, 2]);
    }

    #[test]
    fn test_mixed_type_column_degrades_to_input_order() {
        #[derive(Clone)]
        struct Odd(u8);
        let rows = vec![Odd(0), Odd(1), Odd(2)];
        let cols = vec![Column::new("v", "V", |r: &Odd| {
            if r.0 == 1 {
                CellValue::Text("one".into())
            } else {
                CellValue::Number(r.0 as f64)
            }
        })
        .sortable()];
        // 0 and 2 compare numerically, the string compares equal to both,
        // and the stable sort leaves everything where it was.
        let order = display_order(&rows, &cols, SortState::default().toggled("v"));
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_toggle_state_machine() {
        let s0 = SortState::default();
        assert_eq!(s0.column, None);

        let s1 = s0.toggled("name");
        assert_eq!(s1.column, Some("name"));
        assert_eq!(s1.direction, SortDirection::Asc);

        let s2 = s1.toggled("name");
        assert_eq!(s2.direction, SortDirection::Desc);

        let s3 = s2.toggled("name");
        assert_eq!(s3.direction, SortDirection::Asc);

        // Switching columns resets to ascending
        let s4 = s2.toggled("joined");
        assert_eq!(s4.column, Some("joined"));
        assert_eq!(s4.direction, SortDirection::Asc);
    }

    #[test]
    fn test_indicator() {
        let sort = SortState::default().toggled("name");
        assert_eq!(sort.indicator("name"), " ↑");
        assert_eq!(sort.indicator("joined"), "");
        assert_eq!(sort.toggled("name").indicator("name"), " ↓");
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<Row> = vec![];
        let order = display_order(&rows, &columns(), SortState::default().toggled("name"));
        assert!(order.is_empty());
    }
}
