//! CSV loading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sheetwalk_core::{CellValue, Error, MAX_COLS, MAX_ROWS};

use crate::error::MemoryResult;
use crate::host::{MemoryHost, SheetId, WorkbookId};
use crate::options::CsvLoadOptions;

impl MemoryHost {
    /// Load a CSV file into a new sheet of `workbook`
    pub fn load_csv_file<P: AsRef<Path>>(
        &mut self,
        workbook: WorkbookId,
        sheet_name: &str,
        path: P,
        options: &CsvLoadOptions,
    ) -> MemoryResult<SheetId> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), sheet = sheet_name, "loading CSV file");
        let file = File::open(path)?;
        self.load_csv(workbook, sheet_name, file, options)
    }

    /// Load CSV data into a new sheet of `workbook`.
    ///
    /// Records fill the sheet from the top-left corner; ragged records are
    /// accepted. The sheet is only added once the whole input has parsed.
    pub fn load_csv<R: Read>(
        &mut self,
        workbook: WorkbookId,
        sheet_name: &str,
        reader: R,
        options: &CsvLoadOptions,
    ) -> MemoryResult<SheetId> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<Vec<CellValue>> = Vec::new();

        if options.has_header {
            let headers = csv_reader.headers()?;
            push_row(&mut rows, headers.iter().map(text_field).collect())?;
        }

        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        detect_type(field)
                    } else {
                        text_field(field)
                    }
                })
                .collect();
            push_row(&mut rows, row)?;
        }

        // Every position now fits the grid, so filling cannot fail halfway
        let sheet = self.add_sheet(workbook, sheet_name)?;
        for (y, row) in rows.into_iter().enumerate() {
            for (x, value) in row.into_iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                self.set_at(sheet, x as u32, y as u32, value)?;
            }
        }
        tracing::debug!(
            sheet = sheet_name,
            cells = self.populated(sheet)?,
            "CSV loaded"
        );
        Ok(sheet)
    }
}

/// Append a parsed record, rejecting one that would not fit the grid
fn push_row(rows: &mut Vec<Vec<CellValue>>, row: Vec<CellValue>) -> MemoryResult<()> {
    if rows.len() >= MAX_ROWS as usize {
        return Err(Error::invalid(format!(
            "CSV input has more than {} records",
            MAX_ROWS
        ))
        .into());
    }
    if row.len() > MAX_COLS as usize {
        return Err(Error::invalid(format!(
            "CSV record {} has {} fields, the grid holds {}",
            rows.len() + 1,
            row.len(),
            MAX_COLS
        ))
        .into());
    }
    rows.push(row);
    Ok(())
}

/// An empty field leaves the cell unpopulated; anything else is text
fn text_field(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::text(field)
    }
}

/// Detect the type of a field value.
///
/// Surrounding whitespace is ignored for number detection but kept in text.
fn detect_type(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }

    match field.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::text(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_type() {
        assert_eq!(detect_type(""), CellValue::Empty);
        assert_eq!(detect_type("42"), CellValue::Number(42.0));
        assert_eq!(detect_type(" -1.5 "), CellValue::Number(-1.5));
        assert_eq!(detect_type("1e3"), CellValue::Number(1000.0));
        assert_eq!(detect_type("inf"), CellValue::text("inf"));
        assert_eq!(detect_type("NaN"), CellValue::text("NaN"));
        assert_eq!(detect_type(" pear "), CellValue::text(" pear "));
        assert_eq!(detect_type("   "), CellValue::text("   "));
    }
}
