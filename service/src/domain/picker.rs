//! [`Picker`] of a property to visit.

use super::{interest, property, Interest};

/// Rows of a [`Picker`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Rows {
    /// Rows are being loaded, a placeholder should be shown.
    #[default]
    Pending,

    /// Rows are loaded, possibly none of them.
    Ready(Vec<Interest>),

    /// Rows failed to load.
    Failed(String),
}

/// Single-choice picker of a property among a customer's [`Interest`]s.
///
/// Rows with a sold property are listed but can never be selected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Picker {
    /// Current [`Rows`] of this [`Picker`].
    rows: Rows,

    /// ID of the selected [`Interest`] row, if any.
    selected: Option<interest::Id>,
}

impl Picker {
    /// Returns the current [`Rows`].
    #[must_use]
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Indicates whether the rows are still being loaded.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.rows, Rows::Pending)
    }

    /// Drops the current rows and selection, waiting for new rows.
    pub fn begin_load(&mut self) {
        self.rows = Rows::Pending;
        self.selected = None;
    }

    /// Applies the result of loading rows.
    ///
    /// Ignored unless the rows are [`Rows::Pending`].
    pub fn finish_load(&mut self, result: Result<Vec<Interest>, String>) {
        if !self.is_pending() {
            return;
        }
        self.rows = match result {
            Ok(rows) => Rows::Ready(rows),
            Err(msg) => Rows::Failed(msg),
        };
    }

    /// Selects the row of the provided [`Interest`], replacing the previous
    /// selection.
    ///
    /// Returns `false` and leaves the selection as is if there is no such
    /// row or its property is sold.
    pub fn select_row(&mut self, id: interest::Id) -> bool {
        let selectable = self
            .row(id)
            .is_some_and(Interest::is_selectable);
        if selectable {
            self.selected = Some(id);
        }
        selectable
    }

    /// Returns the ID of the row referencing the provided property, if any.
    #[must_use]
    pub fn row_of(&self, property_id: property::Id) -> Option<interest::Id> {
        self.ready_rows()
            .iter()
            .find(|i| i.property.id == property_id)
            .map(|i| i.id)
    }

    /// Returns the selected [`Interest`] row, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&Interest> {
        self.selected.and_then(|id| self.row(id))
    }

    /// Returns the ID of the selected property, if any.
    #[must_use]
    pub fn selected_property(&self) -> Option<property::Id> {
        self.selected_row().map(|i| i.property.id)
    }

    /// Returns the loaded rows, or none of them if not loaded.
    fn ready_rows(&self) -> &[Interest] {
        match &self.rows {
            Rows::Ready(rows) => rows,
            Rows::Pending | Rows::Failed(_) => &[],
        }
    }

    /// Looks up the row of the provided [`Interest`].
    fn row(&self, id: interest::Id) -> Option<&Interest> {
        self.ready_rows().iter().find(|i| i.id == id)
    }
}
