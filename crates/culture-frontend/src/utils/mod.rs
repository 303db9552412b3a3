//! Browser helpers: visibility observers, animation clocks and layout probes.

use std::time::Duration;

use leptos::html::{AnyElement, ElementDescriptor};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use culture_core::{SectionBounds, VisibilityGate};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// One-shot intersection observer around a [`VisibilityGate`]
pub struct ViewObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewObserver {
    /// Watch `element` and call `on_visible` the first time it crosses `threshold`.
    /// The observer disconnects itself after firing.
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_visible: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let mut gate = VisibilityGate::new(threshold);
        let threshold = gate.threshold();

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if gate.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.disconnect();
                        on_visible();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Signal that flips to `true` once the referenced element is first visible.
///
/// Browsers without `IntersectionObserver` report the element as visible
/// straight away so nothing stays hidden.
pub fn use_in_view<T>(target: NodeRef<T>, threshold: f64) -> ReadSignal<bool>
where
    T: ElementDescriptor + Clone + 'static,
{
    let (visible, set_visible) = create_signal(false);
    let observer = store_value(None::<ViewObserver>);

    target.on_load(move |el| {
        let any: HtmlElement<AnyElement> = el.into_any();
        let element: Element = (*any).clone().into();

        match ViewObserver::observe(&element, threshold, move || set_visible.set(true)) {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable, showing element: {:?}", e);
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.disconnect();
            }
        });
    });

    visible
}

/// Seconds since `active` first became true, ticking every `frame`.
///
/// With `stop_after` the clock parks exactly on that value and the interval is
/// cleared; without it the clock runs until the owner is disposed.
pub fn use_animation_clock(
    active: Signal<bool>,
    stop_after: Option<f64>,
    frame: Duration,
) -> ReadSignal<f64> {
    let (elapsed, set_elapsed) = create_signal(0.0);
    let interval = store_value(None::<IntervalHandle>);
    let started = store_value(false);

    create_effect(move |_| {
        if !active.get() || started.get_value() {
            return;
        }
        started.set_value(true);

        let origin = js_sys::Date::now();
        let tick = move || {
            let seconds = (js_sys::Date::now() - origin) / 1000.0;
            match stop_after {
                Some(limit) if seconds >= limit => {
                    set_elapsed.set(limit);
                    interval.update_value(|slot| {
                        if let Some(handle) = slot.take() {
                            handle.clear();
                        }
                    });
                }
                _ => set_elapsed.set(seconds),
            }
        };

        match set_interval_with_handle(tick, frame) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => {
                tracing::warn!("animation clock unavailable: {:?}", e);
                set_elapsed.set(stop_after.unwrap_or_default());
            }
        }
    });

    on_cleanup(move || {
        interval.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    elapsed
}

pub fn frame_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

pub fn device_pixel_ratio() -> f64 {
    window().device_pixel_ratio()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Document-space bounds of every `<section id=..>` on the page
pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| {
            SectionBounds::new(
                el.id(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval_never_zero() {
        assert_eq!(frame_interval(0), Duration::from_millis(1));
        assert_eq!(frame_interval(16), Duration::from_millis(16));
    }
}
