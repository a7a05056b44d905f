//! Entry point over the workbooks of a session

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::backend::{Backend, Session};
use crate::error::{check_index, found, Error, Result};
use crate::sheet::Sheet;
use crate::{MAX_COLS, MAX_ROWS, QUALIFIED_SEPARATOR};

/// Selects a sheet by tab position or by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetRef {
    /// Position across all open workbooks, in host order
    Index(usize),
    /// Sheet name, optionally qualified as `workbook::sheet`
    Name(String),
}

impl From<usize> for SheetRef {
    fn from(index: usize) -> Self {
        SheetRef::Index(index)
    }
}

impl From<&str> for SheetRef {
    fn from(name: &str) -> Self {
        SheetRef::Name(name.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(name: String) -> Self {
        SheetRef::Name(name)
    }
}

/// The open workbooks of a host session.
///
/// Sheets handed out by a model borrow its backend, so the model must
/// outlive them.
#[derive(Debug)]
pub struct Model<B: Backend> {
    session: Session<B>,
}

impl<B: Backend> Model<B> {
    /// Create a model over a session.
    ///
    /// Fails with [`Error::HostUnavailable`] when no workbook is open.
    pub fn new(session: Session<B>) -> Result<Self> {
        if session.workbooks().is_empty() {
            return Err(Error::HostUnavailable(
                "no workbook is open in the session".into(),
            ));
        }
        tracing::debug!(workbooks = session.workbooks().len(), "model created");
        Ok(Self { session })
    }

    /// Get the session
    pub fn session(&self) -> &Session<B> {
        &self.session
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        self.session.backend()
    }

    /// Consume the model, returning its session
    pub fn into_session(self) -> Session<B> {
        self.session
    }

    /// Get a sheet by name with the given reference row and column indices.
    ///
    /// `name` may be qualified as `workbook::sheet`; an unqualified name is
    /// looked up in every workbook in order. Reference indices are validated
    /// before the host is asked for anything.
    pub fn get_sheet(
        &self,
        name: &str,
        reference_row_index: i64,
        reference_column_index: i64,
    ) -> Result<Option<Sheet<'_, B>>> {
        check_index(reference_row_index, MAX_ROWS, "reference row")?;
        check_index(reference_column_index, MAX_COLS, "reference column")?;

        let handle = match self.resolve(name)? {
            Some(handle) => handle,
            None => {
                tracing::debug!(name, "sheet not found");
                return Ok(None);
            }
        };
        tracing::trace!(name, ?handle, "sheet resolved");
        Sheet::with_reference_indices(
            self.backend(),
            handle,
            reference_row_index,
            reference_column_index,
        )
        .map(Some)
    }

    /// Get a sheet by position or by name, with default reference indices.
    ///
    /// A host failure met while walking to the position is returned, never
    /// reported as a missing sheet.
    pub fn sheet(&self, sheet: impl Into<SheetRef>) -> Result<Option<Sheet<'_, B>>> {
        let index = match sheet.into() {
            SheetRef::Name(name) => return self.get_sheet(&name, 0, 0),
            SheetRef::Index(index) => index,
        };
        for (position, sheet) in self.sheets().enumerate() {
            let sheet = sheet?;
            if position == index {
                return Ok(Some(sheet));
            }
        }
        Ok(None)
    }

    /// Return the first candidate that names an existing sheet.
    ///
    /// Candidates are tried in order and the search stops at the first hit.
    pub fn sheet_exists<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Option<String>> {
        for candidate in candidates {
            let candidate = candidate.as_ref();
            if self.resolve(candidate)?.is_some() {
                return Ok(Some(candidate.to_string()));
            }
        }
        Ok(None)
    }

    /// Lazy sequence of every sheet of every workbook
    pub fn sheets(&self) -> Sheets<'_, B> {
        Sheets {
            handles: self.handles(),
        }
    }

    /// Lazy sequence of sheet names.
    ///
    /// Names are qualified as `workbook::sheet` when more than one workbook
    /// is open.
    pub fn sheet_names(&self) -> SheetNames<'_, B> {
        SheetNames {
            qualified: self.session.workbooks().len() > 1,
            handles: self.handles(),
        }
    }

    fn handles(&self) -> Handles<'_, B> {
        Handles {
            backend: self.backend(),
            workbooks: self.session.workbooks().iter(),
            current: None,
            failed: false,
        }
    }

    fn resolve(&self, name: &str) -> Result<Option<B::Sheet>> {
        if let Some((book, sheet)) = name.split_once(QUALIFIED_SEPARATOR) {
            for workbook in self.session.workbooks() {
                if self.backend().workbook_name(workbook)? == book {
                    if let Some(handle) =
                        found(self.backend().resolve_sheet_by_name(workbook, sheet))?
                    {
                        return Ok(Some(handle));
                    }
                }
            }
        }

        // Unqualified, or a sheet whose own name contains the separator
        for workbook in self.session.workbooks() {
            if let Some(handle) = found(self.backend().resolve_sheet_by_name(workbook, name))? {
                return Ok(Some(handle));
            }
        }
        Ok(None)
    }
}

/// Walks the sheet handles of every workbook in order, enumerating each
/// workbook only when the previous one is exhausted.
struct Handles<'m, B: Backend> {
    backend: &'m B,
    workbooks: slice::Iter<'m, B::Workbook>,
    current: Option<(&'m B::Workbook, vec::IntoIter<B::Sheet>)>,
    failed: bool,
}

impl<'m, B: Backend> Iterator for Handles<'m, B> {
    type Item = Result<(&'m B::Workbook, B::Sheet)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((workbook, sheets)) = &mut self.current {
                if let Some(sheet) = sheets.next() {
                    return Some(Ok((*workbook, sheet)));
                }
            }
            let workbook = self.workbooks.next()?;
            match self.backend.enumerate_sheets(workbook) {
                Ok(sheets) => self.current = Some((workbook, sheets.into_iter())),
                Err(e) => {
                    // A failed enumeration ends the walk
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Lazy sequence of sheets, see [`Model::sheets`]
pub struct Sheets<'m, B: Backend> {
    handles: Handles<'m, B>,
}

impl<'m, B: Backend> Iterator for Sheets<'m, B> {
    type Item = Result<Sheet<'m, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        let backend = self.handles.backend;
        Some(
            self.handles
                .next()?
                .map(|(_, handle)| Sheet::new(backend, handle)),
        )
    }
}

impl<'m, B: Backend> FusedIterator for Sheets<'m, B> {}

impl<'m, B: Backend> fmt::Debug for Sheets<'m, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sheets").finish_non_exhaustive()
    }
}

/// Lazy sequence of sheet names, see [`Model::sheet_names`]
pub struct SheetNames<'m, B: Backend> {
    qualified: bool,
    handles: Handles<'m, B>,
}

impl<'m, B: Backend> Iterator for SheetNames<'m, B> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let backend = self.handles.backend;
        let qualified = self.qualified;
        Some(self.handles.next()?.and_then(|(workbook, sheet)| {
            let name = backend.sheet_name(&sheet)?;
            if qualified {
                Ok(format!(
                    "{}{}{}",
                    backend.workbook_name(workbook)?,
                    QUALIFIED_SEPARATOR,
                    name
                ))
            } else {
                Ok(name)
            }
        }))
    }
}

impl<'m, B: Backend> FusedIterator for SheetNames<'m, B> {}

impl<'m, B: Backend> fmt::Debug for SheetNames<'m, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetNames")
            .field("qualified", &self.qualified)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_ref_from() {
        assert_eq!(SheetRef::from(2usize), SheetRef::Index(2));
        assert_eq!(SheetRef::from("Data"), SheetRef::Name("Data".into()));
    }
}
