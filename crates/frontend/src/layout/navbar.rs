use contracts::enums::{ModuleKind, Page};
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::{icon, module_icon};

/// Bottom navigation: home plus one entry per module
#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();
    let current = move || app.session.with(|s| s.current_module);

    let entries = std::iter::once(ModuleKind::None).chain(ModuleKind::all());

    view! {
        <nav class="main-nav-bar">
            <ul>
                {entries.map(|module| {
                    let icon_name = if module == ModuleKind::None { "home" } else { module_icon(module) };
                    view! {
                        <li
                            class=move || if current() == module { "nav-item nav-item--active" } else { "nav-item" }
                            on:click=move |_| app.navigate(Page::module_home(module))
                        >
                            {icon(icon_name)}
                            <span>{module.display_name()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
