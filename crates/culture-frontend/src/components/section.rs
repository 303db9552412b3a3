//! Page sections and scroll-triggered fade-ins.

use leptos::*;

use culture_core::{stagger_delay, AnimationConfig, FadeIn};

use crate::state::use_site_config;
use crate::utils::{frame_interval, use_animation_clock, use_in_view};

/// Direction an element slides in from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Opacity only
    Nowhere,
}

impl RevealFrom {
    pub fn fade(self, duration: f64, offset: f64) -> FadeIn {
        match self {
            RevealFrom::Below => FadeIn::up(duration, offset),
            RevealFrom::Left => FadeIn::sideways(duration, -offset),
            RevealFrom::Right => FadeIn::sideways(duration, offset),
            RevealFrom::Nowhere => FadeIn::new(duration),
        }
    }
}

/// Delay of the `index`-th item in a revealed list
pub fn stagger(config: &AnimationConfig, index: usize) -> f64 {
    stagger_delay(0.0, config.stagger_step, index)
}

fn fade_style(
    fade: FadeIn,
    visible: ReadSignal<bool>,
    elapsed: ReadSignal<f64>,
) -> impl Fn() -> String {
    move || {
        if visible.get() {
            fade.sample(elapsed.get()).to_css()
        } else {
            fade.hidden().to_css()
        }
    }
}

/// Fades its children in the first time they scroll into view
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay: f64,
    #[prop(optional)] duration: Option<f64>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let animation = use_site_config().animation;
    let fade = from
        .fade(
            duration.unwrap_or(animation.fade_duration),
            animation.fade_offset,
        )
        .with_delay(delay);

    let node = create_node_ref::<html::Div>();
    let visible = use_in_view(node, animation.section_visibility_threshold);
    let elapsed = use_animation_clock(
        visible.into(),
        Some(fade.end_time()),
        frame_interval(animation.frame_interval_ms),
    );

    view! {
        <div node_ref=node class=class style=fade_style(fade, visible, elapsed)>
            {children()}
        </div>
    }
}

/// Top-level `<section>` that the scroll spy tracks by `id`
#[component]
pub fn SectionWrapper(
    #[prop(into)] id: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let animation = use_site_config().animation;
    let fade = FadeIn::new(animation.section_fade_duration);

    let node = create_node_ref::<html::Section>();
    let visible = use_in_view(node, animation.section_visibility_threshold);
    let elapsed = use_animation_clock(
        visible.into(),
        Some(fade.end_time()),
        frame_interval(animation.frame_interval_ms),
    );

    view! {
        <section
            node_ref=node
            id=id
            class=format!("page-section {}", class)
            style=fade_style(fade, visible, elapsed)
        >
            <div class="container">{children()}</div>
        </section>
    }
}
