//! Radar chart comparing collaborative and hierarchical cultures.

use leptos::*;
use web_sys::HtmlCanvasElement;

use culture_core::content::CHART_TITLE;
use culture_core::{ChartData, RadarChartRenderer, RenderReport};

use crate::canvas::{CanvasResult, CanvasSurface};
use crate::components::Reveal;
use crate::state::use_site_config;
use crate::utils::{device_pixel_ratio, use_in_view};

/// Draws once, the first time the canvas is at least 10% visible.
/// Later resizes do not redraw.
#[component]
pub fn CultureChart(#[prop(optional)] data: Option<ChartData>) -> impl IntoView {
    let config = use_site_config();
    let renderer = match data {
        Some(data) => RadarChartRenderer::new(data, config.chart.clone()),
        None => RadarChartRenderer::culture_comparison(config.chart.clone()),
    };
    let renderer = store_value(renderer);
    let rendered = store_value(false);

    let canvas_ref = create_node_ref::<html::Canvas>();
    let visible = use_in_view(canvas_ref, config.chart.visibility_threshold);

    create_effect(move |_| {
        if !visible.get() || rendered.get_value() {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        rendered.set_value(true);

        let result = renderer.with_value(|renderer| draw(renderer, &canvas));
        if let Err(e) = result {
            tracing::warn!("radar chart skipped: {}", e);
        }
    });

    view! {
        <Reveal duration=config.animation.chart_fade_duration class="chart-card">
            <h3 class="chart-title">{CHART_TITLE}</h3>
            <div class="chart-frame">
                <canvas node_ref=canvas_ref class="culture-chart" role="img" aria-label=CHART_TITLE></canvas>
            </div>
        </Reveal>
    }
}

fn draw(renderer: &RadarChartRenderer, canvas: &HtmlCanvasElement) -> CanvasResult<Option<RenderReport>> {
    let mut surface = CanvasSurface::from_canvas(canvas.clone())?;
    let size = surface.measure(device_pixel_ratio());
    Ok(renderer.render_best_effort(&mut surface, size))
}

#[cfg(test)]
mod tests {
    use culture_core::AnimationConfig;

    use crate::components::RevealFrom;

    #[test]
    fn test_chart_card_rises_into_place() {
        let animation = AnimationConfig::default();
        let fade = RevealFrom::default().fade(animation.chart_fade_duration, animation.fade_offset);

        assert_eq!(fade.duration, 0.8);
        assert_eq!(fade.hidden().translate_y, 20.0);
        assert_eq!(fade.hidden().opacity, 0.0);
        assert_eq!(fade.sample(fade.end_time()).translate_y, 0.0);
    }
}
