//! User actions over a flight store.
//!
//! [`FlightDesk`] owns the store it was given and exposes the actions a user
//! can take on the entry form: add, update, delete, read, select and clear.
//! Validation and selection problems are reported before the store is touched.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flight::{FlightForm, FlightRecord, RecordId};
use crate::store::FlightStore;
use crate::validate::Validator;

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed.
    Deleted,
    /// The user declined the confirmation; nothing was removed.
    Cancelled,
}

/// Form actions bound to one store.
#[derive(Debug)]
pub struct FlightDesk<S> {
    store: S,
    validator: Validator,
}

impl<S: FlightStore> FlightDesk<S> {
    /// Create a desk over `store` using the default validation rules.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_validator(store, Validator::default())
    }

    /// Create a desk with a specific validator.
    #[must_use]
    pub fn with_validator(store: S, validator: Validator) -> Self {
        Self { store, validator }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the underlying store back.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate the form and insert it as a new record.
    ///
    /// # Errors
    ///
    /// Returns a validation error (no store call) or a store error.
    pub fn add(&mut self, form: &FlightForm) -> Result<RecordId> {
        let flight = self.validator.validate(form)?;
        let id = self.store.insert(&flight)?;
        info!(%id, flight_no = %flight.flight_no, "Flight record inserted");
        Ok(id)
    }

    /// Replace the selected record with the form's values.
    ///
    /// # Errors
    ///
    /// Returns a selection error if nothing is selected, a validation error,
    /// [`Error::RecordNotFound`] if the record is gone, or a store error.
    pub fn update(&mut self, selected: Option<RecordId>, form: &FlightForm) -> Result<()> {
        let id = selected.ok_or_else(|| Error::no_selection("update"))?;
        let flight = self.validator.validate(form)?;

        if !self.store.update_by_id(id, &flight)? {
            warn!(%id, "Update target no longer exists");
            return Err(Error::record_not_found(id));
        }
        info!(%id, flight_no = %flight.flight_no, "Flight record updated");
        Ok(())
    }

    /// Delete the selected record once `confirm` agrees.
    ///
    /// `confirm` is only asked after a record has been selected.
    ///
    /// # Errors
    ///
    /// Returns a selection error if nothing is selected,
    /// [`Error::RecordNotFound`] if the record is gone, or a store error.
    pub fn delete(
        &mut self,
        selected: Option<RecordId>,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome> {
        let id = selected.ok_or_else(|| Error::no_selection("delete"))?;

        if !confirm() {
            debug!(%id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        if !self.store.delete_by_id(id)? {
            return Err(Error::record_not_found(id));
        }
        info!(%id, "Flight record deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Fetch every record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the records cannot be read.
    pub fn read(&self) -> Result<Vec<FlightRecord>> {
        let records = self.store.find_all()?;
        debug!(count = records.len(), "Fetched flight records");
        Ok(records)
    }

    /// Load a record into a form for editing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] or a store error.
    pub fn select(&self, id: RecordId) -> Result<FlightForm> {
        self.store
            .find_by_id(id)?
            .map(|record| FlightForm::from(&record))
            .ok_or_else(|| Error::record_not_found(id))
    }

    /// A cleared form.
    #[must_use]
    pub fn clear(&self) -> FlightForm {
        FlightForm::default()
    }
}
