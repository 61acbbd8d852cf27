//! Callback contract between the dialog and the page that owns it.
//!
//! The dialog never persists anything itself: it hands a finished record to
//! `on_create` and asks to be dismissed through `on_close`.

use stockdesk_core::ProductId;

use crate::form::{FormErrors, ProductForm};
use crate::record::ProductRecord;

/// Capabilities the owning page supplies to the dialog.
pub trait ModalHandlers {
    /// Receives ownership of a validated record.
    fn on_create(&mut self, record: ProductRecord);

    /// Asks the owner to dismiss the dialog.
    fn on_close(&mut self);
}

/// Adapts a pair of closures into [`ModalHandlers`].
pub struct FnHandlers<C, F> {
    on_create: C,
    on_close: F,
}

impl<C, F> FnHandlers<C, F>
where
    C: FnMut(ProductRecord),
    F: FnMut(),
{
    pub fn new(on_create: C, on_close: F) -> Self {
        Self { on_create, on_close }
    }
}

impl<C, F> ModalHandlers for FnHandlers<C, F>
where
    C: FnMut(ProductRecord),
    F: FnMut(),
{
    fn on_create(&mut self, record: ProductRecord) {
        (self.on_create)(record)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}

impl<H: ModalHandlers + ?Sized> ModalHandlers for &mut H {
    fn on_create(&mut self, record: ProductRecord) {
        (**self).on_create(record)
    }

    fn on_close(&mut self) {
        (**self).on_close()
    }
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `on_create` then `on_close` were each called once.
    Created(ProductId),
    /// Nothing was called; the draft needs correcting.
    Rejected(FormErrors),
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Validate the draft and, only if it is complete, hand it off and close.
pub fn submit_draft<H: ModalHandlers>(draft: &ProductForm, mut handlers: H) -> SubmitOutcome {
    match draft.validate() {
        Ok(record) => {
            let product_id = record.product_id;
            tracing::info!(product_id = %product_id, name = %record.name, "product created");
            handlers.on_create(record);
            handlers.on_close();
            SubmitOutcome::Created(product_id)
        }
        Err(errors) => {
            tracing::warn!(product_id = %draft.product_id(), %errors, "product submission rejected");
            SubmitOutcome::Rejected(errors)
        }
    }
}

/// Dismiss without creating anything.
pub fn cancel_draft<H: ModalHandlers>(mut handlers: H) {
    tracing::info!("product creation cancelled");
    handlers.on_close();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::field::{FieldError, FormField};

    /// Callback log shared by the handler and controller tests.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Create(ProductRecord),
        Close,
    }

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) calls: Vec<Call>,
    }

    impl Recorder {
        pub(crate) fn creates(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Create(_))).count()
        }

        pub(crate) fn closes(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Close)).count()
        }
    }

    impl ModalHandlers for Recorder {
        fn on_create(&mut self, record: ProductRecord) {
            self.calls.push(Call::Create(record));
        }

        fn on_close(&mut self) {
            self.calls.push(Call::Close);
        }
    }

    fn widget_draft() -> ProductForm {
        let mut draft = ProductForm::new();
        draft.apply_change(FormField::Name, "Widget");
        draft.apply_change(FormField::Price, "19.99");
        draft.apply_change(FormField::StockQuantity, "42");
        draft.apply_change(FormField::Rating, "4");
        draft
    }

    #[test]
    fn valid_submit_creates_then_closes() {
        stockdesk_observability::init_for_tests();
        let draft = widget_draft();
        let mut recorder = Recorder::default();

        let outcome = submit_draft(&draft, &mut recorder);

        assert_eq!(outcome, SubmitOutcome::Created(draft.product_id()));
        assert_eq!(
            recorder.calls,
            vec![
                Call::Create(ProductRecord {
                    product_id: draft.product_id(),
                    name: "Widget".to_string(),
                    price: 19.99,
                    stock_quantity: 42.0,
                    rating: 4.0,
                }),
                Call::Close,
            ]
        );
    }

    #[test]
    fn invalid_submit_calls_nothing() {
        stockdesk_observability::init_for_tests();
        for (field, text) in [
            (FormField::Price, "abc"),
            (FormField::StockQuantity, "NaN"),
            (FormField::Rating, "inf"),
        ] {
            let mut draft = widget_draft();
            draft.apply_change(field, text);
            let mut recorder = Recorder::default();

            match submit_draft(&draft, &mut recorder) {
                SubmitOutcome::Rejected(errors) => {
                    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
                }
                other => panic!("Expected Rejected for {field} = {text:?}, got {other:?}"),
            }
            assert!(recorder.calls.is_empty());
        }
    }

    #[test]
    fn missing_name_blocks_submission() {
        let mut draft = widget_draft();
        draft.apply_change(FormField::Name, "");
        let mut recorder = Recorder::default();

        let outcome = submit_draft(&draft, &mut recorder);

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.get(FormField::Name), Some(FieldError::Required));
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
        assert_eq!(recorder.creates(), 0);
        assert_eq!(recorder.closes(), 0);
    }

    #[test]
    fn cancel_only_closes() {
        let mut recorder = Recorder::default();
        cancel_draft(&mut recorder);
        assert_eq!(recorder.calls, vec![Call::Close]);
    }

    #[test]
    fn closures_work_as_handlers() {
        let mut created = Vec::new();
        let mut closed = 0;

        let outcome = submit_draft(
            &widget_draft(),
            FnHandlers::new(|record: ProductRecord| created.push(record.name), || closed += 1),
        );

        assert!(outcome.is_created());
        assert_eq!(created, vec!["Widget".to_string()]);
        assert_eq!(closed, 1);
    }
}
