use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod content;
mod motion {
    pub mod driver;
    pub mod easing;
    pub mod reveal;
    pub mod smoother;
    pub mod spring;
}
mod components {
    pub mod cards;
    pub mod marquee;
    pub mod progress;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::progress::ScrollProgressBar;
use pages::landing::Landing;

/// Scroll offset past which the nav bar gets its drop shadow.
const NAV_SCROLL_THRESHOLD: i32 = 80;

/// Mobile navigation menu state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    /// Menu-button activation flips the state.
    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Selecting a navigation link closes the menu, whatever it was.
    fn link_selected(self) -> Self {
        MenuState::Closed
    }

    fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_state = use_state(|| MenuState::Closed);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_state = menu_state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_state.set((*menu_state).toggled());
        })
    };

    let close_menu = {
        let menu_state = menu_state.clone();
        Callback::from(move |_: MouseEvent| {
            menu_state.set((*menu_state).link_selected());
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-logo">
                    {"Pixel"}<span class="stroke-text">{"_&_"}</span>{"Co"}
                </div>

                <div class="nav-links">
                    {
                        content::NAV_LINKS.iter().map(|(label, anchor)| html! {
                            <a key={*label} href={*anchor}>{ *label }</a>
                        }).collect::<Html>()
                    }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            {
                if menu_state.is_open() {
                    html! {
                        <div class="mobile-menu">
                            {
                                content::NAV_LINKS.iter().map(|(label, anchor)| html! {
                                    <a
                                        key={*label}
                                        href={*anchor}
                                        onclick={close_menu.clone()}
                                    >
                                        { *label }
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <ScrollProgressBar />
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::MenuState;

    #[test]
    fn menu_button_toggles() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        // Two activations land back where we started.
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn link_selection_closes() {
        assert_eq!(MenuState::Open.link_selected(), MenuState::Closed);
        assert_eq!(MenuState::Closed.link_selected(), MenuState::Closed);
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::Closed.is_open());
        assert!(MenuState::Open.is_open());
    }
}
