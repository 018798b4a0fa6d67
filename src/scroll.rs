use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Last value reported by the viewport plus the tracked section's top offset.
/// Everything derived from scrolling goes through this so the page code never
/// touches `window` directly.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollModel {
    pub scroll_y: f64,
    pub section_top: f64,
}

impl ScrollModel {
    /// Whether the viewport has scrolled at least `threshold` pixels down.
    pub fn scrolled_past(&self, threshold: f64) -> bool {
        self.scroll_y >= threshold
    }

    /// Translation for the hero background. The hero sits at the very top of
    /// the document, so the raw offset is the right input.
    pub fn hero_shift(&self) -> f64 {
        self.scroll_y * config::HERO_PARALLAX_RATE
    }

    /// Translation for the lifestyle background, measured from the section's
    /// own top so the image stays anchored to it when the layout reflows.
    pub fn lifestyle_shift(&self) -> f64 {
        (self.scroll_y - self.section_top) * config::LIFESTYLE_PARALLAX_RATE
    }
}

/// Tracks the window scroll offset and the top offset of the element behind
/// `section_ref`. Registers `scroll` and `resize` listeners on mount and
/// removes both in the effect destructor. Updates state on every event; there
/// is deliberately no throttling at this page size.
#[hook]
pub fn use_scroll_tracker(section_ref: NodeRef) -> ScrollModel {
    let scroll_y = use_state(|| 0.0_f64);
    let section_top = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        let section_top = section_top.clone();
        use_effect_with_deps(
            move |section_ref: &NodeRef| {
                let section_ref = section_ref.clone();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(y) = win.scroll_y() {
                                scroll_y.set(y);
                            }
                        }
                    });

                    let measure = move || {
                        if let Some(section) = section_ref.cast::<HtmlElement>() {
                            section_top.set(f64::from(section.offset_top()));
                        }
                    };
                    let resize_callback = Closure::<dyn Fn()>::new({
                        let measure = measure.clone();
                        move || measure()
                    });

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );

                    // Initial measurement so the parallax is anchored before
                    // the first resize ever fires.
                    measure();

                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                resize_callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            section_ref,
        );
    }

    ScrollModel {
        scroll_y: *scroll_y,
        section_top: *section_top,
    }
}

/// Smooth-scrolls the viewport so the section with `id` lands at the top.
/// Falls through silently when the element is missing.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Smooth-scrolls back to the top of the document.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64) -> ScrollModel {
        ScrollModel {
            scroll_y,
            section_top: 0.0,
        }
    }

    #[test]
    fn navbar_flag_is_set_from_the_threshold_upwards() {
        let t = config::NAV_SCROLL_THRESHOLD_PX;
        assert!(!at(0.0).scrolled_past(t));
        assert!(!at(t - 1.0).scrolled_past(t));
        assert!(at(t).scrolled_past(t));
        assert!(at(t + 1.0).scrolled_past(t));
        assert!(at(10_000.0).scrolled_past(t));
    }

    #[test]
    fn hero_shift_scales_with_the_scroll_offset() {
        assert_eq!(at(0.0).hero_shift(), 0.0);
        assert_eq!(at(200.0).hero_shift(), 200.0 * config::HERO_PARALLAX_RATE);
    }

    #[test]
    fn lifestyle_shift_is_zero_at_the_section_top() {
        let model = ScrollModel {
            scroll_y: 1800.0,
            section_top: 1800.0,
        };
        assert_eq!(model.lifestyle_shift(), 0.0);
    }

    #[test]
    fn lifestyle_shift_stays_anchored_across_reflows() {
        // A resize moves the section but the viewport keeps the same distance
        // to it; the transform must not change.
        let before = ScrollModel {
            scroll_y: 2000.0,
            section_top: 1800.0,
        };
        let after = ScrollModel {
            scroll_y: 2600.0,
            section_top: 2400.0,
        };
        assert_eq!(before.lifestyle_shift(), after.lifestyle_shift());
    }

    #[test]
    fn lifestyle_shift_is_negative_above_the_section() {
        let model = ScrollModel {
            scroll_y: 1000.0,
            section_top: 1800.0,
        };
        assert!(model.lifestyle_shift() < 0.0);
    }
}
