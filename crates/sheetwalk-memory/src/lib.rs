//! # sheetwalk-memory
//!
//! An in-process spreadsheet host for sheetwalk.
//!
//! [`MemoryHost`] implements [`Backend`](sheetwalk_core::Backend) over sparse
//! in-memory grids. It can be built cell by cell, loaded from CSV, or loaded
//! from a JSON workbook fixture, and it counts every host round-trip so
//! callers can check how much traffic an operation causes.
//!
//! ```rust,ignore
//! use sheetwalk_core::Model;
//! use sheetwalk_memory::MemoryHost;
//!
//! let mut host = MemoryHost::new();
//! let book = host.add_workbook("inventory.ods");
//! let sheet = host.add_sheet(book, "Stock")?;
//! host.set(sheet, "A1", "Item")?;
//! host.set(sheet, "B1", "Qty")?;
//!
//! let model = Model::new(host.into_session())?;
//! ```

mod error;
mod fixture;
mod host;
mod loader;
mod options;

pub use error::{MemoryError, MemoryResult};
pub use host::{MemoryHost, SheetId, WorkbookId};
pub use options::CsvLoadOptions;
