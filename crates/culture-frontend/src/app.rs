//! Main application component with routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use culture_core::content::{BRAND, SITE_TITLE};

use crate::pages::Home;
use crate::state::{load_site_config, PageState};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_site_config();
    PageState::provide(&config);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/culture-frontend.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content="Cultura Organizacional e Gestão de Projetos"/>

        <Router>
            <Routes>
                <Route path="/" view=Home/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <A href="/">{format!("Voltar para {}", BRAND)}</A>
        </div>
    }
}
