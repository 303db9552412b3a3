//! Fixed header with scroll-spy navigation.

use leptos::*;

use culture_core::content::{NavItem, BRAND, NAV_ITEMS, PRESENTATION_PDF};

use crate::state::{use_scroll_spy, PageState};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = PageState::use_state();
    use_scroll_spy(state);

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="brand">{BRAND}</a>

                <nav class="desktop-nav">
                    <NavLinks state=state class="nav-link"/>
                </nav>

                <a href=PRESENTATION_PDF download="cultura-organizacional.pdf" class="pdf-link">
                    "Baixar Apresentação"
                </a>

                <button
                    class="menu-toggle"
                    aria-label="Abrir menu"
                    on:click=move |_| state.toggle_menu()
                >
                    {move || if state.mobile_menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || state.mobile_menu_open.get()>
                <nav class="mobile-nav">
                    <NavLinks state=state class="mobile-nav-link"/>
                    <a href=PRESENTATION_PDF download="cultura-organizacional.pdf" class="mobile-nav-link">
                        "Baixar Apresentação"
                    </a>
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavLinks(state: PageState, class: &'static str) -> impl IntoView {
    NAV_ITEMS
        .into_iter()
        .map(|item: NavItem| {
            let id = item.section_id();
            view! {
                <a
                    href=item.href
                    class=class
                    class:active=move || state.is_active(id)
                    on:click=move |_| state.select(id)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view()
}
