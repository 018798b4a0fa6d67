use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config;

/// One-shot visibility latch. Flips on the first observation that clears the
/// threshold and never reverts, so content cannot animate back out of view
/// when it leaves the viewport again.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feeds one intersection observation. Returns true exactly once, on the
    /// first ratio that reaches the threshold.
    pub fn note(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Extra wait, in milliseconds, before the enter transition starts.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a content block that fades and slides in the first time it becomes
/// visible. The block keeps its place in the layout the whole time; only
/// opacity and transform animate. Observation stops after the first reveal.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let latch = use_mut_ref(|| RevealLatch::new(config::REVEAL_THRESHOLD));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => {
                        let callback = {
                            let visible = visible.clone();
                            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                                move |entries: js_sys::Array, observer: IntersectionObserver| {
                                    for entry in entries.iter() {
                                        let Ok(entry) =
                                            entry.dyn_into::<IntersectionObserverEntry>()
                                        else {
                                            continue;
                                        };
                                        if latch.borrow_mut().note(entry.intersection_ratio()) {
                                            visible.set(true);
                                            observer.unobserve(&entry.target());
                                        }
                                    }
                                },
                            )
                        };

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(_) => {
                                // No observer available: show the content outright.
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => {
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            node.clone(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::RevealLatch;

    #[test]
    fn latches_on_the_first_qualifying_ratio() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.note(0.0));
        assert!(!latch.note(0.05));
        assert!(!latch.is_visible());
        assert!(latch.note(0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn fires_exactly_once() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.note(0.4));
        assert!(!latch.note(0.9));
        assert!(!latch.note(1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn never_reverts_after_the_element_leaves_the_viewport() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.note(0.3));
        assert!(!latch.note(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn ratio_below_threshold_keeps_it_hidden() {
        let mut latch = RevealLatch::new(0.5);
        assert!(!latch.note(0.49));
        assert!(!latch.is_visible());
    }
}
