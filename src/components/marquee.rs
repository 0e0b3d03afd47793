//! Repeating text strip between sections.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub text: AttrValue,
    #[prop_or(false)]
    pub reverse: bool,
}

/// Two identical tracks scroll in tandem; as the first leaves the strip
/// the second is already covering it, so the loop has no visible seam.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let items = |key_base: &'static str| {
        (0..10)
            .map(|i| {
                html! {
                    <span key={format!("{}-{}", key_base, i)} class="marquee-item">
                        { format!("{} •", props.text) }
                    </span>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class={classes!("marquee", props.reverse.then(|| "marquee-reverse"))}>
            <div class="marquee-track">{ items("a") }</div>
            <div class="marquee-track marquee-track-follow">{ items("b") }</div>
        </div>
    }
}
