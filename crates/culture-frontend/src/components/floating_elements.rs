use leptos::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use culture_core::generate_particles;

use crate::state::use_site_config;
use crate::utils::{frame_interval, use_animation_clock};

/// Drifting translucent bubbles behind the hero
#[component]
pub fn FloatingElements(#[prop(optional)] count: Option<usize>) -> impl IntoView {
    let animation = use_site_config().animation;

    let mut rng = SmallRng::seed_from_u64(random_seed());
    let particles = generate_particles(&mut rng, count.unwrap_or(animation.particle_count));

    let elapsed = use_animation_clock(
        Signal::derive(|| true),
        None,
        frame_interval(animation.frame_interval_ms),
    );

    view! {
        <div class="floating-elements" aria-hidden="true">
            {particles
                .into_iter()
                .map(|particle| {
                    view! {
                        <div
                            class="floating-particle"
                            style=move || particle.css_at(elapsed.get())
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
