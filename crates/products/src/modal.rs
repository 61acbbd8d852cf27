//! Host-agnostic driver for the "create product" dialog.
//!
//! Owns the open/closed state and the draft, and routes user actions to the
//! injected [`ModalHandlers`]. Every closed → open transition starts from a
//! fresh draft with a newly generated product id.

use stockdesk_core::{DomainError, DomainResult};

use crate::field::FormField;
use crate::form::ProductForm;
use crate::handlers::{ModalHandlers, SubmitOutcome, cancel_draft, submit_draft};

pub struct ProductCreationModal<H> {
    handlers: H,
    draft: Option<ProductForm>,
}

impl<H: ModalHandlers> ProductCreationModal<H> {
    /// A closed dialog; nothing is rendered until [`open`](Self::open).
    pub fn new(handlers: H) -> Self {
        Self { handlers, draft: None }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&ProductForm> {
        self.draft.as_ref()
    }

    /// Open the dialog. Reopening an already open dialog keeps its draft.
    pub fn open(&mut self) -> &ProductForm {
        self.draft.get_or_insert_with(|| {
            let draft = ProductForm::new();
            tracing::debug!(product_id = %draft.product_id(), "product dialog opened");
            draft
        })
    }

    /// Drop the draft without notifying anyone (the owner already knows).
    pub fn close(&mut self) {
        if let Some(draft) = self.draft.take() {
            tracing::debug!(product_id = %draft.product_id(), "product dialog closed");
        }
    }

    pub fn change(&mut self, field: FormField, value: impl Into<String>) -> DomainResult<()> {
        self.draft_mut()?.apply_change(field, value);
        Ok(())
    }

    pub fn change_by_name(&mut self, key: &str, value: impl Into<String>) -> DomainResult<()> {
        self.draft_mut()?.set_field(key, value)
    }

    /// Submit the current draft.
    ///
    /// A created record closes the dialog; a rejected one leaves the draft in
    /// place for correction.
    pub fn submit(&mut self) -> DomainResult<SubmitOutcome> {
        let draft = self.draft.as_ref().ok_or_else(closed)?;
        let outcome = submit_draft(draft, &mut self.handlers);
        if outcome.is_created() {
            self.draft = None;
        }
        Ok(outcome)
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.draft.take().is_none() {
            return Err(closed());
        }
        cancel_draft(&mut self.handlers);
        Ok(())
    }

    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    pub fn into_handlers(self) -> H {
        self.handlers
    }

    fn draft_mut(&mut self) -> DomainResult<&mut ProductForm> {
        self.draft.as_mut().ok_or_else(closed)
    }
}

fn closed() -> DomainError {
    DomainError::invariant("product dialog is not open")
}
