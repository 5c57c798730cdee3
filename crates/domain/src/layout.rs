// crates/domain/src/layout.rs
//! Column-major grid layout for the short listing.

/// One display column and the width of its widest name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    names: Vec<String>,
    width: usize,
}

impl Column {
    fn from_names(names: Vec<String>) -> Self {
        let width = names.iter().map(|n| display_width(n)).max().unwrap_or(0);
        Self { names, width }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Max name width in this column; 0 when the column is empty.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.names.get(row).map(String::as_str)
    }
}

/// A present cell in the row-major traversal of a [`ColumnLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub name: &'a str,
    pub width: usize,
}

/// Names distributed column-major over a fixed number of columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    columns: Vec<Column>,
    rows: usize,
}

impl ColumnLayout {
    /// Fills `column_count` columns top to bottom, left to right.
    ///
    /// Column `i` receives source indices `[i * rows, (i + 1) * rows)` where
    /// `rows = ceil(len / column_count)`. Trailing columns may be empty.
    pub fn arrange(names: Vec<String>, column_count: usize) -> Self {
        if column_count == 0 {
            return Self::default();
        }
        let rows = names.len().div_ceil(column_count);
        let mut buckets: Vec<Vec<String>> =
            (0..column_count).map(|_| Vec::with_capacity(rows)).collect();
        for (index, name) in names.into_iter().enumerate() {
            buckets[index / rows].push(name);
        }
        let columns = buckets.into_iter().map(Column::from_names).collect();
        Self { columns, rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn entry_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Present cells of row `row`, left to right. Columns without an entry
    /// at that row are skipped.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.columns
            .iter()
            .filter_map(move |col| col.get(row).map(|name| Cell { name, width: col.width }))
    }

    /// Every row in print order.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<Cell<'_>>> + '_ {
        (0..self.rows).map(move |r| self.row(r).collect())
    }
}

/// Width used for padding; counts characters, not bytes.
#[inline]
pub fn display_width(name: &str) -> usize {
    name.chars().count()
}
