//! Dashboard frame wrapped around every page.

use leptos::*;
use leptos_router::*;

use crate::config::ShellConfig;

/// Applies document metadata once, then renders the persistent frame.
#[component]
pub fn Shell(config: ShellConfig, children: Children) -> impl IntoView {
    let doc = document();
    doc.set_title(&config.title);
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", &config.lang);
    }
    if let Ok(Some(meta)) = doc.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", &config.description);
    }

    view! {
        <div class="dashboard antialiased flex bg-gray-50 text-gray-900 w-full min-h-screen">
            <aside class="sidebar w-64 p-6 bg-white shadow-md">
                <h1 class="font-extrabold text-2xl">{config.title}</h1>
                <nav class="mt-8 flex flex-col gap-2">
                    <A href="/products">"Products"</A>
                </nav>
            </aside>
            <main class="flex flex-col w-full h-full py-7 px-9 bg-gray-50">
                {children()}
            </main>
        </div>
    }
}
