pub mod global_context;
pub mod navbar;
pub mod session;
pub mod top_header;

use leptos::prelude::*;
use navbar::Navbar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              Content                     |
/// +------------------------------------------+
/// |              Navbar                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {center}
            </main>
            <Navbar />
        </div>
    }
}
