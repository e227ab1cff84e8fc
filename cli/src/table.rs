// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use unicode_width::UnicodeWidthStr;

pub struct Table<'a, S, T, C> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, T, C> Table<'a, S, T, C>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S, T, C> fmt::Display for Table<'_, S, T, C>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self.columns.iter().map(|c| c.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|c| c.format(row)).collect())
            .collect();
        self.style.write(f, &header, &rows)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
}

pub trait TableStyle {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result;
}

/// Plain text table: a header, a dashed rule, then one padded line per row.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: " " }
    }
}

impl TableStyle for TableStyleBasic {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result {
        let widths = column_widths(header, rows);
        let rule: Vec<Cow<'_, str>> = widths.iter().map(|w| "-".repeat(*w).into()).collect();

        write_row(f, header, &widths, self.separator)?;
        write_row(f, &rule, &widths, self.separator)?;
        for row in rows {
            write_row(f, row, &widths, self.separator)?;
        }
        Ok(())
    }
}

/// JSON array with one object per row, keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                let object = header
                    .iter()
                    .zip(row)
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.as_ref())))
                    .collect::<serde_json::Map<_, _>>();
                serde_json::Value::Object(object)
            })
            .collect();

        let json = serde_json::to_string_pretty(&items).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

fn column_widths(header: &[Cow<'_, str>], rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[Cow<'_, str>],
    widths: &[usize],
    separator: &str,
) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        // last column does not need padding
        if i == last {
            write!(f, "{cell}")?;
            break;
        }

        // unicode_width counts columns, fmt padding counts chars
        let pad = widths[i].saturating_sub(cell.width());
        write!(f, "{cell}{:pad$}{separator}", "")?;
    }
    writeln!(f)
}
