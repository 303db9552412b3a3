use leptos::*;

use culture_core::Color;

/// Card with a soft gradient background and an optional accent border
#[component]
pub fn GradientCard(
    #[prop(optional)] accent: Option<Color>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let style = accent
        .map(|color| format!("border-top: 4px solid {};", color.to_css()))
        .unwrap_or_default();

    view! {
        <div class=format!("gradient-card {}", class) style=style>
            {children()}
        </div>
    }
}
