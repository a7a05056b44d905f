//! JSON workbook fixtures
//!
//! ```json
//! {
//!   "workbooks": [
//!     {
//!       "name": "inventory.ods",
//!       "sheets": [
//!         {
//!           "name": "Stock",
//!           "cells": [
//!             { "x": 0, "y": 0, "value": "Item" },
//!             { "x": 1, "y": 0, "value": "Qty", "color": 16711680 }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use sheetwalk_core::{CellValue, Color};

use crate::error::MemoryResult;
use crate::host::MemoryHost;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Fixture {
    #[serde(default)]
    workbooks: Vec<WorkbookFixture>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkbookFixture {
    name: String,
    #[serde(default)]
    sheets: Vec<SheetFixture>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SheetFixture {
    name: String,
    #[serde(default)]
    cells: Vec<CellFixture>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CellFixture {
    x: u32,
    y: u32,
    #[serde(default)]
    value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl MemoryHost {
    /// Build a host from a JSON workbook fixture
    pub fn from_json<R: Read>(reader: R) -> MemoryResult<Self> {
        let fixture: Fixture = serde_json::from_reader(reader)?;
        let mut host = MemoryHost::new();

        for book in fixture.workbooks {
            let workbook = host.add_workbook(book.name);
            for sheet in book.sheets {
                let id = host.add_sheet(workbook, sheet.name)?;
                for cell in sheet.cells {
                    host.set_at(id, cell.x, cell.y, cell.value)?;
                    host.set_color_at(id, cell.x, cell.y, cell.color)?;
                }
            }
        }

        tracing::debug!(workbooks = host.workbooks.len(), "fixture loaded");
        Ok(host)
    }

    /// Build a host from a JSON workbook fixture held in a string
    pub fn from_json_str(json: &str) -> MemoryResult<Self> {
        Self::from_json(json.as_bytes())
    }

    /// Write every workbook as a JSON fixture.
    ///
    /// Cells are written in row-major order so the output is stable.
    pub fn to_json<W: Write>(&self, writer: W) -> MemoryResult<()> {
        let fixture = Fixture {
            workbooks: self
                .workbooks
                .iter()
                .map(|book| WorkbookFixture {
                    name: book.name.clone(),
                    sheets: book
                        .sheets
                        .iter()
                        .map(|sheet| {
                            let mut cells: Vec<CellFixture> = sheet
                                .cells
                                .borrow()
                                .iter()
                                .map(|(&(x, y), entry)| CellFixture {
                                    x,
                                    y,
                                    value: entry.value.clone(),
                                    color: entry.color,
                                })
                                .collect();
                            cells.sort_by_key(|cell| (cell.y, cell.x));
                            SheetFixture {
                                name: sheet.name.clone(),
                                cells,
                            }
                        })
                        .collect(),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(writer, &fixture)?;
        Ok(())
    }
}
