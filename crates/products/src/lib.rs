//! Product creation domain module.
//!
//! Holds the draft product a user edits in the "create product" dialog, the
//! validation that turns it into a [`ProductRecord`], and the callback contract
//! used to hand that record to whoever owns persistence. Pure logic: no IO,
//! no rendering.

pub mod field;
pub mod form;
pub mod handlers;
pub mod modal;
pub mod record;

pub use field::{FieldError, FormField};
pub use form::{FormErrors, ProductForm};
pub use handlers::{FnHandlers, ModalHandlers, SubmitOutcome, cancel_draft, submit_draft};
pub use modal::ProductCreationModal;
pub use record::ProductRecord;
