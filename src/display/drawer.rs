//! Drawer summary table
//!
//! The table formatter only sees column headers, per-column alignment and
//! string rows. Box drawing is left to `tabled`.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::DisplayRow;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    fn alignment(self) -> Alignment {
        match self {
            Self::Left => Alignment::left(),
            Self::Center => Alignment::center(),
            Self::Right => Alignment::right(),
        }
    }
}

/// A table column: header text and alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub align: ColumnAlign,
}

/// Columns of the summary table, in order
pub const COLUMNS: [Column; 3] = [
    Column {
        header: "Denomination",
        align: ColumnAlign::Left,
    },
    Column {
        header: "Count",
        align: ColumnAlign::Center,
    },
    Column {
        header: "Value",
        align: ColumnAlign::Right,
    },
];

/// Format rendered drawer rows as an ASCII table
pub fn format_drawer_table(rows: &[DisplayRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(COLUMNS.iter().map(|c| c.header.to_string()));

    for row in rows {
        builder.push_record([
            row.label.clone(),
            row.count.map(|c| c.to_string()).unwrap_or_default(),
            row.value.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    for (index, column) in COLUMNS.iter().enumerate() {
        table.modify(Columns::single(index), column.align.alignment());
    }

    table.to_string()
}
