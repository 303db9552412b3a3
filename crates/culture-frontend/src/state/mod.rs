//! Page-level state shared through the Leptos context.

use leptos::*;

use culture_core::content::INITIAL_SECTION;
use culture_core::{ScrollSpy, SectionBounds, SiteConfig};

use crate::utils::{scroll_y, section_bounds};

/// Build-time JSON override for [`SiteConfig`]
const SITE_CONFIG_JSON: Option<&str> = option_env!("CULTURE_SITE_CONFIG");

/// Site configuration with the optional build-time override applied
pub fn load_site_config() -> SiteConfig {
    match SITE_CONFIG_JSON {
        Some(json) => SiteConfig::from_json(json).unwrap_or_else(|e| {
            tracing::warn!("ignoring CULTURE_SITE_CONFIG: {}", e);
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct PageState {
    /// Id of the section highlighted in the navigation
    pub active_section: RwSignal<String>,
    pub mobile_menu_open: RwSignal<bool>,
    spy: StoredValue<ScrollSpy>,
}

impl PageState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            active_section: create_rw_signal(INITIAL_SECTION.to_string()),
            mobile_menu_open: create_rw_signal(false),
            spy: store_value(ScrollSpy::new(
                INITIAL_SECTION,
                config.animation.scroll_probe_offset,
            )),
        }
    }

    pub fn provide(config: &SiteConfig) -> Self {
        let state = Self::new(config);
        provide_context(state);
        state
    }

    pub fn use_state() -> Self {
        use_context::<PageState>().unwrap_or_else(|| Self::new(&use_site_config()))
    }

    /// Navigation click: highlight immediately and close the mobile menu
    pub fn select(&self, id: &str) {
        self.spy.update_value(|spy| spy.select(id));
        self.active_section.set(id.to_string());
        self.mobile_menu_open.set(false);
    }

    /// Follow the scroll position
    pub fn sync_scroll(&self, scroll_y: f64, sections: &[SectionBounds]) {
        let mut changed = None;
        self.spy.update_value(|spy| {
            if spy.update(scroll_y, sections) {
                changed = Some(spy.active().to_string());
            }
        });
        if let Some(id) = changed {
            self.active_section.set(id);
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.with(|active| active == id)
    }

    pub fn toggle_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }
}

/// Keep `active_section` in step with the window scroll position
pub fn use_scroll_spy(state: PageState) {
    let sync = move || state.sync_scroll(scroll_y(), &section_bounds());

    let handle = window_event_listener(ev::scroll, move |_| sync());
    on_cleanup(move || handle.remove());

    request_animation_frame(sync);
}
