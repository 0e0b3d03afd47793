//! Service and portfolio cards.

use yew::prelude::*;

use super::reveal::{Reveal, RevealDirection};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub glyph: AttrValue,
    pub title: AttrValue,
    pub blurb: AttrValue,
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <Reveal direction={RevealDirection::Up} delay_ms={props.delay_ms}>
            <div class="service-card">
                <div class="service-card-glyph">{ props.glyph.clone() }</div>
                <h3>{ props.title.clone() }</h3>
                <p>{ props.blurb.clone() }</p>
                <div class="service-card-rule"></div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub title: AttrValue,
    pub blurb: AttrValue,
    pub tag: AttrValue,
    /// Position in the grid; alternates the slide-in side.
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let direction = if props.index % 2 == 0 {
        RevealDirection::Left
    } else {
        RevealDirection::Right
    };

    html! {
        <Reveal {direction}>
            <div class="project-card">
                <div class="project-card-cover">
                    <h4>{ props.tag.clone() }</h4>
                </div>
                <div class="project-card-body">
                    <div class="project-card-head">
                        <h3>{ props.title.clone() }</h3>
                        <span class="project-card-arrow">{"↗"}</span>
                    </div>
                    <p>{ props.blurb.clone() }</p>
                    <span class="project-card-tag">{ props.tag.clone() }</span>
                </div>
            </div>
        </Reveal>
    }
}
