//! Numbers that spring up to their value once on screen.

use leptos::*;

use culture_core::content::Stat;
use culture_core::SpringCounter;

use crate::components::{GradientCard, Reveal};
use crate::state::use_site_config;
use crate::utils::{frame_interval, use_animation_clock, use_in_view};

#[component]
pub fn AnimatedCounter(
    value: f64,
    #[prop(optional)] decimals: usize,
    #[prop(into, optional)] suffix: String,
) -> impl IntoView {
    let animation = use_site_config().animation;
    let counter = SpringCounter::new(
        value,
        animation.counter_duration,
        animation.counter_bounce,
        decimals,
    );

    let node = create_node_ref::<html::Span>();
    let visible = use_in_view(node, animation.section_visibility_threshold);
    let elapsed = use_animation_clock(
        visible.into(),
        Some(counter.duration),
        frame_interval(animation.frame_interval_ms),
    );

    view! {
        <span node_ref=node class="animated-counter">
            {move || counter.display_at(elapsed.get())}
            {suffix}
        </span>
    }
}

/// Headline statistic: counter, label and optional source line
#[component]
pub fn StatCounter(stat: Stat, #[prop(optional)] delay: f64) -> impl IntoView {
    view! {
        <Reveal delay=delay class="stat">
            <GradientCard class="stat-card">
                <div class="stat-value">
                    <AnimatedCounter value=stat.value decimals=stat.decimals suffix=stat.suffix/>
                </div>
                <p class="stat-label">{stat.label}</p>
                {(!stat.source.is_empty())
                    .then(|| view! { <p class="stat-source">{format!("Fonte: {}", stat.source)}</p> })}
            </GradientCard>
        </Reveal>
    }
}
