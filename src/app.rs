use leptos::prelude::*;
use leptos_meta::*;

use crate::components::*;

/// SSR shell: provides the full HTML document structure for server-side rendering.
/// This is called by `leptos_routes_with_context` in initialize.rs.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/noteinvoice.css"/>
        <Title text="Notes"/>
        <div class="container">
            <header class="app-header">
                <h1>"Notes"</h1>
            </header>

            <main class="app-main">
                <Feed/>
            </main>
        </div>
    }
}
