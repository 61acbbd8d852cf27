//! "Create New Product" dialog.

use leptos::*;

use stockdesk_products::{
    FnHandlers, FormField, ModalHandlers, ProductForm, ProductRecord, SubmitOutcome, cancel_draft,
    submit_draft,
};

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const INPUT_CLASS: &str = "block w-full mb-2 p-2 border-gray-500 border-2 rounded-md";

/// Renders nothing while `is_open` is false. Each time it opens, the inner
/// dialog mounts again and starts from a fresh draft with a new product id.
#[component]
pub fn CreateProductModal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_create: Callback<ProductRecord>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <ProductDialog on_close=on_close on_create=on_create/>
        </Show>
    }
}

fn callback_handlers(
    on_create: Callback<ProductRecord>,
    on_close: Callback<()>,
) -> impl ModalHandlers {
    FnHandlers::new(
        move |record| on_create.call(record),
        move || on_close.call(()),
    )
}

#[component]
fn ProductDialog(on_close: Callback<()>, on_create: Callback<ProductRecord>) -> impl IntoView {
    let draft = create_rw_signal(ProductForm::new());
    // Field errors stay hidden until the first rejected submit.
    let show_errors = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let outcome = submit_draft(&current, callback_handlers(on_create, on_close));
        if let SubmitOutcome::Rejected(_) = outcome {
            show_errors.set(true);
        }
    };

    let fields = FormField::ALL
        .into_iter()
        .map(|field| {
            let error = move || {
                if !show_errors.get() {
                    return None;
                }
                draft.with(|d| d.field_error(field)).map(|err| {
                    view! { <p class="field-error text-xs text-red-600 mb-2">{err.to_string()}</p> }
                })
            };

            view! {
                <label for=field.as_str() class=LABEL_CLASS>{field.label()}</label>
                <input
                    type=field.input_type()
                    id=field.as_str()
                    name=field.as_str()
                    placeholder=field.placeholder()
                    step=field.is_numeric().then_some("any")
                    class=INPUT_CLASS
                    required=true
                    prop:value=move || draft.with(|d| d.value(field).to_string())
                    on:input=move |ev| {
                        let key = event_target::<web_sys::HtmlInputElement>(&ev).name();
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Err(err) = d.set_field(&key, value) {
                                tracing::warn!(%err, "ignored input from unknown field");
                            }
                        });
                    }
                />
                {error}
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-20">
            <div class="relative top-20 mx-auto p-5 border w-96 shadow-lg rounded-md bg-white">
                <h1 class="text-2xl font-semibold text-gray-700">"Create New Product"</h1>
                <form on:submit=on_submit class="mt-5">
                    {fields}
                    <button
                        type="submit"
                        class="mt-4 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-700"
                    >
                        "Create"
                    </button>
                    <button
                        type="button"
                        class="ml-2 px-4 py-2 bg-gray-500 text-white rounded hover:bg-gray-700"
                        on:click=move |_| cancel_draft(callback_handlers(on_create, on_close))
                    >
                        "Cancel"
                    </button>
                </form>
            </div>
        </div>
    }
}
