//! Wrapper component that plays its entrance animation exactly once,
//! the first time it scrolls into view.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::motion::reveal::{enters_viewport, RevealLatch, TRIGGER_FRACTION};

/// Which edge the content slides in from.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    fn class(self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    /// Delay between entering the viewport and playing the animation,
    /// for staggered groups.
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let mut latch = RevealLatch::new();
                    let callback = Closure::wrap(Box::new({
                        let window = window.clone();
                        move || {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|value| value.as_f64())
                                .unwrap_or(0.0);
                            let rect = element.get_bounding_client_rect();
                            let in_view =
                                enters_viewport(rect.top(), rect.bottom(), viewport, TRIGGER_FRACTION);
                            if latch.observe(in_view) {
                                if delay_ms > 0 {
                                    let visible = visible.clone();
                                    Timeout::new(delay_ms, move || visible.set(true)).forget();
                                } else {
                                    visible.set(true);
                                }
                            }
                        }
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    // Elements already on screen latch before any scroll.
                    let _ = callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&JsValue::NULL);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.direction.class(),
                visible.then(|| "reveal-visible"),
                props.class.clone(),
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
