//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use stockdesk_products::ProductRecord;

use crate::config::ShellConfig;
use crate::frontend::product_modal::CreateProductModal;
use crate::frontend::shell::Shell;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = ShellConfig::from_build_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid shell configuration, using defaults");
        ShellConfig::default()
    });

    view! {
        <Router>
            <Shell config=config>
                <Routes>
                    <Route path="/" view=ProductsPage/>
                    <Route path="/products" view=ProductsPage/>
                </Routes>
            </Shell>
        </Router>
    }
}

/// Products page: owns whether the creation dialog is open.
#[component]
fn ProductsPage() -> impl IntoView {
    let (is_open, set_open) = create_signal(false);
    let last_created = create_rw_signal(None::<String>);

    // Persisting the record is the data layer's job; the page only acknowledges it.
    let on_create = move |record: ProductRecord| {
        tracing::info!(product_id = %record.product_id, name = %record.name, "product handed to data layer");
        last_created.set(Some(record.name));
    };

    view! {
        <div class="products mx-auto pb-5 w-full">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-xl font-semibold text-gray-700">"Products"</h2>
                <button
                    class="flex items-center bg-blue-500 hover:bg-blue-700 text-gray-200 font-bold py-2 px-4 rounded"
                    on:click=move |_| set_open.set(true)
                >
                    "Create Product"
                </button>
            </div>

            {move || {
                last_created.get().map(|name| {
                    view! { <p class="notice text-sm text-green-700">{format!("Created \"{name}\"")}</p> }
                })
            }}

            <CreateProductModal
                is_open=is_open
                on_close=move |_: ()| set_open.set(false)
                on_create=on_create
            />
        </div>
    }
}
