//! Prelude module - common imports for sheetwalk users
//!
//! ```rust
//! use sheetwalk::prelude::*;
//! ```

pub use crate::{
    Axis,
    // Host contract
    Backend,
    Cell,
    CellAddress,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    Identifier,
    IdentifierKind,
    Line,
    LineSeries,
    // Main types
    Model,
    Result,
    ScanOptions,
    Session,
    Sheet,
    SheetRef,
};

#[cfg(feature = "memory")]
pub use crate::{CsvLoadOptions, MemoryHost, ModelExt};
