//! The sortable table model: columns, rows, and in-place row ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::Error;
use crate::sort::{SortDirection, SortState, SortType};

/// One table cell: display text plus an optional explicit sort key.
///
/// The sort key overrides the display text for comparisons, so a cell can
/// show "Jan 3, 2026" while sorting as "2026-01-03".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_key: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_key: None,
        }
    }

    pub fn with_sort_key(text: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_key: Some(sort_key.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value comparisons see: the explicit sort key if present, otherwise
    /// the trimmed display text.
    pub fn sort_value(&self) -> &str {
        match &self.sort_key {
            Some(key) => key,
            None => self.text.trim(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Column header: title, declared sort type, and a layout width hint for the
/// rendering side (`None` means "take the remaining space").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    title: String,
    #[serde(default)]
    sort_type: SortType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f32>,
}

impl Column {
    pub fn new(title: impl Into<String>, sort_type: SortType) -> Self {
        Self {
            title: title.into(),
            sort_type,
            width: None,
        }
    }

    pub fn text(title: impl Into<String>) -> Self {
        Self::new(title, SortType::Text)
    }

    pub fn number(title: impl Into<String>) -> Self {
        Self::new(title, SortType::Number)
    }

    pub fn date(title: impl Into<String>) -> Self {
        Self::new(title, SortType::Date)
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }
}

/// An ordered run of cells. Rows may be ragged: a row shorter than the column
/// list simply has no cell in the trailing columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A table opted into sort-on-click behavior.
///
/// Sorting only ever permutes `rows`; cells never move between rows, and rows
/// are never added or dropped by a sort. Each model is fully independent, so
/// several tables on one screen never share sort state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
    // Sort state is session-local by design; it does not round-trip through
    // serialization.
    #[serde(skip)]
    sort: SortState,
}

impl TableModel {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            sort: SortState::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Removes and returns the row at `index`, if it exists. The remaining
    /// rows keep their current order.
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Header-click entry point: advances the sort state for `column` and
    /// re-sorts the rows in place.
    ///
    /// An index past the column list is an API error; malformed *data* never
    /// is (unparseable numbers sort as zero, short rows stay put).
    pub fn click_column(&mut self, column: usize) -> Result<SortState, Error> {
        if column >= self.columns.len() {
            return Err(Error::column_out_of_range(column, self.columns.len()));
        }
        let direction = self.sort.click(column);
        self.sort_rows(column, direction);
        Ok(self.sort)
    }

    fn sort_rows(&mut self, column: usize, direction: SortDirection) {
        let sort_type = self.columns[column].sort_type();

        // A row with no cell in this column compares equal to everything,
        // which is not a total order. Pull those rows aside and re-insert
        // them at their original indices afterwards; everything else goes
        // through one stable sort on precomputed keys.
        let mut keyed: Vec<(SortKey, Row)> = Vec::with_capacity(self.rows.len());
        let mut anchored: Vec<(usize, Row)> = Vec::new();
        for (index, row) in self.rows.drain(..).enumerate() {
            match row.cell(column) {
                Some(cell) => keyed.push((SortKey::extract(cell.sort_value(), sort_type), row)),
                None => anchored.push((index, row)),
            }
        }

        keyed.sort_by(|(a, _), (b, _)| direction.applied(a.compare(b)));

        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
        for (index, row) in anchored {
            let index = index.min(self.rows.len());
            self.rows.insert(index, row);
        }
    }
}

/// Precomputed comparison key for one row under one column type.
#[derive(Debug)]
enum SortKey {
    Number(f64),
    /// Date columns compare raw; text columns compare case-folded.
    Lexical(String),
}

impl SortKey {
    fn extract(raw: &str, sort_type: SortType) -> Self {
        match sort_type {
            SortType::Number => Self::Number(parse_number(raw)),
            SortType::Date => Self::Lexical(raw.to_owned()),
            SortType::Text => Self::Lexical(raw.to_lowercase()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            // total_cmp keeps the comparator total even if a "NaN" literal
            // parses through.
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Lexical(a), Self::Lexical(b)) => a.cmp(b),
            // Keys in one sort always come from one column type.
            _ => Ordering::Equal,
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            if !raw.is_empty() {
                log::debug!("non-numeric value {raw:?} in number column sorts as 0");
            }
            0.0
        }
    }
}

#[cfg(test)]
mod table_sort_tests {
    use super::*;

    fn two_column_table(rows: &[(&str, &str)], amount_type: SortType) -> TableModel {
        let mut table = TableModel::new(vec![
            Column::text("Description"),
            Column::new("Amount", amount_type),
        ]);
        for (a, b) in rows {
            table.push_row([*a, *b].into_iter().collect());
        }
        table
    }

    fn column_texts(table: &TableModel, column: usize) -> Vec<&str> {
        table
            .rows()
            .iter()
            .map(|row| row.cell(column).map(Cell::text).unwrap_or(""))
            .collect()
    }

    #[test]
    fn number_column_sorts_numerically_then_flips() {
        // "10" < "2" lexically but 2 < 10 numerically.
        let mut table = two_column_table(&[("b", "2"), ("a", "10")], SortType::Number);

        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["b", "a"]);

        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["a", "b"]);
    }

    #[test]
    fn text_column_sorts_lexically() {
        let mut table = two_column_table(&[("b", "2"), ("a", "10")], SortType::Number);
        table.click_column(0).unwrap();
        assert_eq!(column_texts(&table, 0), ["a", "b"]);
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let mut table = two_column_table(&[("banana", "1"), ("Apple", "2")], SortType::Number);
        table.click_column(0).unwrap();
        assert_eq!(column_texts(&table, 0), ["Apple", "banana"]);
    }

    #[test]
    fn date_column_compares_iso_strings() {
        let mut table = two_column_table(
            &[("rent", "2026-02-01"), ("groceries", "2025-12-31")],
            SortType::Date,
        );
        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["groceries", "rent"]);
    }

    #[test]
    fn explicit_sort_key_beats_display_text() {
        let mut table = TableModel::new(vec![Column::date("Date")]);
        table.push_row(Row::new(vec![Cell::with_sort_key("Feb 1, 2026", "2026-02-01")]));
        table.push_row(Row::new(vec![Cell::with_sort_key("Jan 3, 2026", "2026-01-03")]));

        table.click_column(0).unwrap();
        assert_eq!(column_texts(&table, 0), ["Jan 3, 2026", "Feb 1, 2026"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut table = two_column_table(
            &[("c", "3"), ("a", "1"), ("b", "2"), ("a", "4")],
            SortType::Number,
        );
        table.click_column(0).unwrap();
        let first = column_texts(&table, 1)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        // Same column, same direction, same order.
        table.click_column(0).unwrap();
        table.click_column(0).unwrap();
        assert_eq!(column_texts(&table, 1), first);
    }

    #[test]
    fn descending_keeps_ascending_tie_order() {
        // Two rows tie on the sorted column; the sign-flip contract says they
        // keep their *ascending* relative order when descending, instead of
        // reversing.
        let mut table = two_column_table(
            &[("first", "5"), ("second", "5"), ("small", "1")],
            SortType::Number,
        );

        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["small", "first", "second"]);

        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["first", "second", "small"]);
    }

    #[test]
    fn unique_keys_descending_is_exact_reverse() {
        let mut table = two_column_table(
            &[("x", "3"), ("y", "1"), ("z", "2")],
            SortType::Number,
        );
        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["y", "z", "x"]);
        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["x", "z", "y"]);
    }

    #[test]
    fn unparseable_numbers_sort_as_zero() {
        let mut table = two_column_table(
            &[("junk", "n/a"), ("neg", "-1"), ("pos", "1")],
            SortType::Number,
        );
        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["neg", "junk", "pos"]);
    }

    #[test]
    fn short_row_keeps_its_position() {
        let mut table = TableModel::new(vec![Column::text("Name"), Column::number("Amount")]);
        table.push_row(["c", "3"].into_iter().collect());
        table.push_row(Row::new(vec![Cell::new("ragged")]));
        table.push_row(["a", "1"].into_iter().collect());

        table.click_column(1).unwrap();
        // Rows with a value sort around it; the ragged row stays second.
        assert_eq!(column_texts(&table, 0), ["a", "ragged", "c"]);
        assert_eq!(table.rows().len(), 3);
    }

    #[test]
    fn empty_table_click_is_a_noop() {
        let mut table = TableModel::new(vec![Column::text("Name")]);
        let state = table.click_column(0).unwrap();
        assert_eq!(state.direction_of(0), Some(SortDirection::Ascending));
        assert!(table.is_empty());
    }

    #[test]
    fn single_row_table_sorts_without_moving() {
        let mut table = two_column_table(&[("only", "42")], SortType::Number);
        table.click_column(1).unwrap();
        assert_eq!(column_texts(&table, 0), ["only"]);
    }

    #[test]
    fn out_of_range_column_is_an_error() {
        let mut table = two_column_table(&[("a", "1")], SortType::Number);
        let err = table.click_column(2).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnOutOfRange { index: 2, columns: 2 }
        ));
        // Failed clicks change nothing.
        assert_eq!(table.sort_state().active(), None);
    }

    #[test]
    fn switching_columns_deactivates_previous() {
        let mut table = two_column_table(&[("b", "2"), ("a", "10")], SortType::Number);
        table.click_column(1).unwrap();
        table.click_column(1).unwrap();

        let state = table.click_column(0).unwrap();
        assert_eq!(state.direction_of(1), None);
        assert_eq!(state.direction_of(0), Some(SortDirection::Ascending));
        assert_eq!(column_texts(&table, 0), ["a", "b"]);
    }

    #[test]
    fn sort_value_prefers_key_and_trims_text() {
        assert_eq!(Cell::new("  padded  ").sort_value(), "padded");
        assert_eq!(Cell::with_sort_key("shown", "hidden").sort_value(), "hidden");
    }

    #[test]
    fn table_definition_round_trips_without_sort_state() {
        let mut table = two_column_table(&[("b", "2"), ("a", "10")], SortType::Number);
        table.click_column(1).unwrap();

        let json = serde_json::to_string(&table).unwrap();
        let restored: TableModel = serde_json::from_str(&json).unwrap();

        // Row order travels; the active-column record is session-local.
        assert_eq!(column_texts(&restored, 0), ["b", "a"]);
        assert_eq!(restored.sort_state().active(), None);
    }
}
