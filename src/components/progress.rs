//! Fixed top-of-page scroll progress bar.

use yew::prelude::*;

/// Renders the bar element once; the scroll driver writes its
/// `scaleX` transform every frame, so no state lives here.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    html! {
        <div class="scroll-progress-bar" style="transform: scaleX(0)" aria-hidden="true"></div>
    }
}
