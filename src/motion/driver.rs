//! Browser glue for the scroll pipeline.
//!
//! [`ScrollDriver`] owns every per-frame resource: the wheel interceptor,
//! the native scroll listener, and the self-rescheduling animation-frame
//! loop. One tick always runs smoother update, then the document scroll
//! write, then progress derivation through the spring, then the
//! progress-bar transform write; nothing reads the smoothed offset
//! before that frame's update has produced it.
//!
//! Dropping the driver cancels the pending animation frame (the
//! [`AnimationFrame`] handle is RAII) and removes both listeners, so no
//! callback can run after the hosting view unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent, Window};

use super::smoother::ScrollSmoother;
use super::spring::Spring;

const PROGRESS_BAR_SELECTOR: &str = ".scroll-progress-bar";
/// Pixels per wheel line when the event reports line-based deltas.
const LINE_HEIGHT_PX: f64 = 16.0;
/// A native scroll further than this from our last write is someone
/// else's (scrollbar drag, keyboard, anchor jump) and resyncs the
/// smoother; anything closer is our own write echoing back.
const RESYNC_TOLERANCE_PX: f64 = 1.0;
/// Scroll writes smaller than this are skipped.
const WRITE_EPSILON_PX: f64 = 0.01;

struct DriverState {
    window: Window,
    smoother: RefCell<ScrollSmoother>,
    spring: RefCell<Spring>,
    frame: RefCell<Option<AnimationFrame>>,
    last_applied: Cell<f64>,
    last_tick_ms: Cell<Option<f64>>,
    last_bar_scale: Cell<f64>,
}

impl DriverState {
    fn schedule(self: &Rc<Self>) {
        let state = Rc::clone(self);
        *self.frame.borrow_mut() = Some(request_animation_frame(move |timestamp_ms| {
            state.frame.borrow_mut().take();
            state.tick(timestamp_ms);
            state.schedule();
        }));
    }

    fn tick(&self, now_ms: f64) {
        let now = now_ms / 1000.0;
        let dt = self
            .last_tick_ms
            .get()
            .map(|prev| ((now_ms - prev) / 1000.0).max(0.0))
            .unwrap_or(1.0 / 60.0);
        self.last_tick_ms.set(Some(now_ms));

        let max = max_scroll(&self.window);

        // Smoothing first; everything below reads its output.
        let offset = self.smoother.borrow_mut().update(now);
        if (offset - self.last_applied.get()).abs() > WRITE_EPSILON_PX {
            self.window.scroll_to_with_x_and_y(0.0, offset);
            self.last_applied.set(offset);
        }

        let progress = self.smoother.borrow().progress(max);
        let mut spring = self.spring.borrow_mut();
        spring.set_target(progress);
        let scale = spring.update(dt);
        drop(spring);

        if (scale - self.last_bar_scale.get()).abs() > 1e-4 {
            self.last_bar_scale.set(scale);
            if let Some(document) = self.window.document() {
                if let Ok(Some(bar)) = document.query_selector(PROGRESS_BAR_SELECTOR) {
                    let _ = bar.set_attribute("style", &format!("transform: scaleX({:.4})", scale));
                }
            }
        }
    }

    /// Timestamp for glides started outside the frame loop. At most one
    /// frame stale, which is invisible at a 1.2 s glide window.
    fn now_secs(&self) -> f64 {
        self.last_tick_ms.get().unwrap_or(0.0) / 1000.0
    }
}

/// Handle for the running scroll pipeline. Dropping it tears everything
/// down.
pub struct ScrollDriver {
    state: Rc<DriverState>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    scroll: Closure<dyn FnMut()>,
}

impl ScrollDriver {
    /// Start smoothing on the current window. Returns `None` when there
    /// is no window to drive; the page keeps native scrolling.
    pub fn start() -> Option<Self> {
        let window = web_sys::window()?;

        let initial = window.scroll_y().unwrap_or(0.0);
        let max = max_scroll(&window);
        let mut smoother = ScrollSmoother::new();
        smoother.jump_to(initial, max);
        let mut spring = Spring::default();
        let seed = smoother.progress(max);
        spring.snap_to(seed);
        spring.set_target(seed);

        let state = Rc::new(DriverState {
            window: window.clone(),
            smoother: RefCell::new(smoother),
            spring: RefCell::new(spring),
            frame: RefCell::new(None),
            last_applied: Cell::new(initial),
            last_tick_ms: Cell::new(None),
            last_bar_scale: Cell::new(seed),
        });

        let wheel = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let delta = wheel_delta_px(&event, &state.window);
                let max = max_scroll(&state.window);
                let now = state.now_secs();
                state.smoother.borrow_mut().scroll_by(delta, max, now);
            }) as Box<dyn FnMut(WheelEvent)>)
        };
        // Non-passive, otherwise prevent_default on wheel is ignored.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        let scroll = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move || {
                let Ok(actual) = state.window.scroll_y() else {
                    return;
                };
                if (actual - state.last_applied.get()).abs() > RESYNC_TOLERANCE_PX {
                    let max = max_scroll(&state.window);
                    state.smoother.borrow_mut().jump_to(actual, max);
                    state.last_applied.set(actual);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
            .ok()?;

        state.schedule();

        Some(Self {
            state,
            wheel,
            scroll,
        })
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        // Dropping the handle cancels the pending frame; nothing runs
        // after this point.
        self.state.frame.borrow_mut().take();
        let _ = self.state.window.remove_event_listener_with_callback(
            "wheel",
            self.wheel.as_ref().unchecked_ref(),
        );
        let _ = self.state.window.remove_event_listener_with_callback(
            "scroll",
            self.scroll.as_ref().unchecked_ref(),
        );
    }
}

fn max_scroll(window: &Window) -> f64 {
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    (document_height - viewport_height(window)).max(0.0)
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Normalize a wheel event's vertical delta to pixels.
fn wheel_delta_px(event: &WheelEvent, window: &Window) -> f64 {
    match event.delta_mode() {
        WheelEvent::DOM_DELTA_LINE => event.delta_y() * LINE_HEIGHT_PX,
        WheelEvent::DOM_DELTA_PAGE => event.delta_y() * viewport_height(window),
        _ => event.delta_y(),
    }
}
