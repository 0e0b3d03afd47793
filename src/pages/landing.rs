use log::{info, warn};
use yew::prelude::*;

use crate::components::cards::{ProjectCard, ServiceCard};
use crate::components::marquee::Marquee;
use crate::components::reveal::{Reveal, RevealDirection};
use crate::content;
use crate::motion::driver::ScrollDriver;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The smooth-scroll pipeline lives exactly as long as this page.
    {
        use_effect_with_deps(
            move |_| {
                let driver = ScrollDriver::start();
                if driver.is_none() {
                    warn!("smooth scrolling unavailable, keeping native scroll");
                } else {
                    info!("scroll driver started");
                }
                move || drop(driver)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section id="home" class="section hero">
                <div class="hero-inner hero-enter">
                    <h1 class="hero-title">
                        {"SMASH"}<br/>{"THE "}<span class="stroke-text">{"ORDINARY."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We craft raw, high-contrast digital worlds for tech startups and e-commerce rebels."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="cta-link">
                            <button class="neo-button">{"Ignite Vision"}</button>
                        </a>
                        <a href="#work" class="cta-link">
                            <button class="neo-button neo-button-secondary">{"View Chaos"}</button>
                        </a>
                    </div>
                </div>
            </section>

            <Marquee text={content::MARQUEE_TOP} />

            <section id="about" class="section about">
                <div class="about-grid">
                    <div class="about-box-wrap">
                        <div class="about-box-shadow"></div>
                        <div class="about-box">
                            <h2>{"Born in"}<br/>{"Chaos"}</h2>
                            <p>
                                {"Pixel & Co isn't your average agency. We started as a rebellion \
                                  against bland digital drudgery. We deliver unapologetic digital \
                                  firepower for brands ready to dominate."}
                            </p>
                        </div>
                    </div>
                    <ul class="about-points">
                        {
                            content::ABOUT_POINTS.iter().enumerate().map(|(i, point)| html! {
                                <li key={*point}>
                                    <Reveal
                                        direction={RevealDirection::Right}
                                        delay_ms={(i as u32) * 100}
                                    >
                                        <div class="about-point">
                                            <span class="about-point-mark"></span>
                                            { *point }
                                        </div>
                                    </Reveal>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </section>

            <section id="services" class="section services">
                <div class="services-head">
                    <h2>{"Our "}<span class="services-head-flip">{"Arsenal"}</span></h2>
                    <p>{"Tools to conquer the online arena."}</p>
                </div>
                <div class="services-grid">
                    {
                        content::SERVICES.iter().enumerate().map(|(i, (glyph, title, blurb))| html! {
                            <ServiceCard
                                key={*title}
                                glyph={*glyph}
                                title={*title}
                                blurb={*blurb}
                                delay_ms={(i as u32 + 1) * 100}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <Marquee text={content::MARQUEE_BOTTOM} reverse=true />

            <section id="work" class="section work">
                <h2 class="work-title">{"Disruptive"}<br/>{"Wins"}</h2>
                <div class="work-grid">
                    {
                        content::PROJECTS.iter().enumerate().map(|(i, (title, blurb, tag))| html! {
                            <ProjectCard
                                key={*title}
                                title={*title}
                                blurb={*blurb}
                                tag={*tag}
                                index={i}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="section contact">
                <div class="contact-inner">
                    <h2>{"Ready to Break"}<br/>{"The Mold?"}</h2>
                    <p class="contact-lead">
                        {"Whether it's a wild idea or a full-scale digital takeover, let's make \
                          your brand impossible to ignore."}
                    </p>
                    <form class="contact-form">
                        <div class="contact-row">
                            <input type="text" placeholder="NAME" />
                            <input type="email" placeholder="EMAIL" />
                        </div>
                        <textarea rows="4" placeholder="YOUR REBELLIOUS IDEA"></textarea>
                        <button type="button" class="contact-send">{"Fire Away — Start Chaos"}</button>
                    </form>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-inner">
                    <div class="footer-brand">{"Pixel & Co © 2024"}</div>
                    <div class="footer-socials">
                        {
                            content::SOCIALS.iter().map(|social| html! {
                                <a key={*social} href="#">{ *social }</a>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="footer-location">{"San Francisco // Silicon Valley"}</div>
                </div>
            </footer>

            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        background: #FFD60A;
                        color: #000;
                        font-family: 'Space Grotesk', sans-serif;
                        overflow-x: hidden;
                    }

                    ::selection {
                        background: #000;
                        color: #FFD60A;
                    }

                    .scroll-progress-bar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 8px;
                        background: #000;
                        transform-origin: left;
                        z-index: 100;
                    }

                    /* --- navigation --- */

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-bottom: 4px solid #000;
                        background: rgba(255, 214, 10, 0.95);
                        backdrop-filter: blur(4px);
                    }

                    .top-nav.scrolled {
                        box-shadow: 0 4px 0 0 #000;
                    }

                    .nav-logo {
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 1.6rem;
                        letter-spacing: -0.05em;
                        text-transform: uppercase;
                    }

                    .nav-links {
                        display: none;
                        gap: 2rem;
                    }

                    .nav-links a {
                        color: #000;
                        font-weight: 700;
                        font-size: 1.05rem;
                        text-transform: uppercase;
                        text-decoration: none;
                    }

                    .nav-links a:hover {
                        text-decoration: underline;
                        text-decoration-thickness: 4px;
                        text-underline-offset: 4px;
                    }

                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.6rem;
                        background: #000;
                        border: 2px solid #000;
                        box-shadow: 4px 4px 0 0 #000;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 3px;
                        background: #FFD60A;
                    }

                    .burger-menu:active {
                        transform: translate(2px, 2px);
                        box-shadow: none;
                    }

                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: #FFD60A;
                        border-left: 4px solid #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        animation: menu-slide 0.3s ease-out;
                    }

                    .mobile-menu a {
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 2.5rem;
                        text-transform: uppercase;
                        color: #000;
                        text-decoration: none;
                    }

                    @keyframes menu-slide {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }

                    @media (min-width: 768px) {
                        .top-nav {
                            padding: 1rem 3rem;
                        }
                        .nav-links {
                            display: flex;
                        }
                        .burger-menu,
                        .mobile-menu {
                            display: none;
                        }
                    }

                    /* --- shared --- */

                    .section {
                        padding: 5rem 1rem;
                        border-bottom: 4px solid #000;
                    }

                    .stroke-text {
                        color: #fff;
                        -webkit-text-stroke: 2px #000;
                    }

                    h1, h2, h3, h4 {
                        font-family: 'Archivo Black', sans-serif;
                        text-transform: uppercase;
                        margin: 0;
                    }

                    .neo-button {
                        padding: 0.9rem 1.8rem;
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 1rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        background: #FFD60A;
                        color: #000;
                        border: 2px solid #000;
                        box-shadow: 4px 4px 0 0 #000;
                        cursor: pointer;
                        transition: all 0.2s;
                    }

                    .neo-button:hover {
                        transform: translate(-2px, -2px);
                        box-shadow: 6px 6px 0 0 #000;
                    }

                    .neo-button:active {
                        transform: translate(2px, 2px);
                        box-shadow: none;
                    }

                    .neo-button-secondary {
                        background: #000;
                        color: #FFD60A;
                    }

                    .cta-link {
                        text-decoration: none;
                    }

                    /* --- reveal states --- */

                    .reveal {
                        opacity: 0;
                        transition: opacity 0.5s ease, transform 0.5s ease;
                        will-change: opacity, transform;
                    }

                    .reveal-up {
                        transform: translateY(50px);
                    }

                    .reveal-left {
                        transform: translateX(-50px);
                    }

                    .reveal-right {
                        transform: translateX(50px);
                    }

                    .reveal-visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* --- hero --- */

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding-top: 8rem;
                    }

                    .hero-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                    }

                    .hero-enter {
                        animation: hero-enter 0.8s cubic-bezier(0, 0.55, 0.45, 1) both;
                    }

                    @keyframes hero-enter {
                        from {
                            opacity: 0;
                            transform: translateY(100px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .hero-title {
                        font-size: 4rem;
                        line-height: 0.85;
                        letter-spacing: -0.04em;
                        margin-bottom: 2rem;
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        font-weight: 700;
                        max-width: 42rem;
                        border-left: 4px solid #000;
                        padding-left: 1.5rem;
                        margin: 0 0 3rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    /* --- marquee --- */

                    .marquee {
                        position: relative;
                        display: flex;
                        overflow: hidden;
                        padding: 1.5rem 0;
                        background: #000;
                        color: #FFD60A;
                        border-bottom: 4px solid #000;
                    }

                    .marquee-track {
                        display: flex;
                        gap: 2rem;
                        flex-shrink: 0;
                        white-space: nowrap;
                        animation: marquee-slide 28s linear infinite;
                    }

                    .marquee-track-follow {
                        position: absolute;
                        top: 1.5rem;
                        animation: marquee-follow 28s linear infinite;
                    }

                    .marquee-reverse .marquee-track,
                    .marquee-reverse .marquee-track-follow {
                        animation-direction: reverse;
                    }

                    .marquee-item {
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 2.5rem;
                        text-transform: uppercase;
                        letter-spacing: -0.03em;
                    }

                    @keyframes marquee-slide {
                        from { transform: translateX(0); }
                        to { transform: translateX(-100%); }
                    }

                    @keyframes marquee-follow {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }

                    /* --- about --- */

                    .about {
                        background: #fff;
                    }

                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .about-box-wrap {
                        position: relative;
                    }

                    .about-box-shadow {
                        position: absolute;
                        inset: 0;
                        background: #000;
                        border: 4px solid #000;
                        transform: translate(1rem, 1rem);
                    }

                    .about-box {
                        position: relative;
                        background: #FFD60A;
                        border: 4px solid #000;
                        padding: 2.5rem;
                    }

                    .about-box h2 {
                        font-size: 2.8rem;
                        line-height: 1;
                        margin-bottom: 1.5rem;
                    }

                    .about-box p {
                        font-weight: 500;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .about-points {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .about-point {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 1.1rem;
                        text-transform: uppercase;
                    }

                    .about-point-mark {
                        width: 1rem;
                        height: 1rem;
                        background: #000;
                        flex-shrink: 0;
                    }

                    /* --- services --- */

                    .services-head {
                        max-width: 80rem;
                        margin: 0 auto 4rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }

                    .services-head h2 {
                        font-size: 3rem;
                        line-height: 1;
                    }

                    .services-head-flip {
                        background: #000;
                        color: #fff;
                        padding: 0 0.5rem;
                    }

                    .services-head p {
                        font-weight: 700;
                        margin: 1rem 0 0;
                    }

                    .services-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .service-card {
                        position: relative;
                        background: #fff;
                        border: 4px solid #000;
                        padding: 1.5rem;
                        box-shadow: 8px 8px 0 0 #000;
                        transition: box-shadow 0.3s;
                        overflow: hidden;
                    }

                    .service-card:hover {
                        box-shadow: 12px 12px 0 0 #000;
                    }

                    .service-card-glyph {
                        position: absolute;
                        top: 0;
                        right: 0;
                        padding: 0.5rem 0.8rem;
                        background: #000;
                        color: #FFD60A;
                        font-size: 1.4rem;
                        border-left: 4px solid #000;
                        border-bottom: 4px solid #000;
                    }

                    .service-card h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }

                    .service-card p {
                        line-height: 1.6;
                        margin: 0 0 1.5rem;
                    }

                    .service-card-rule {
                        width: 100%;
                        height: 1rem;
                        background: #000;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.3s;
                    }

                    .service-card:hover .service-card-rule {
                        transform: scaleX(1);
                    }

                    /* --- work --- */

                    .work {
                        background: #fff;
                    }

                    .work-title {
                        font-size: 3rem;
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .work-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .project-card {
                        background: #000;
                        color: #fff;
                        border: 4px solid #000;
                        padding: 0.25rem;
                        box-shadow: 8px 8px 0 0 #000;
                        transition: transform 0.3s;
                    }

                    .project-card:hover {
                        transform: scale(1.02);
                    }

                    .project-card-cover {
                        position: relative;
                        height: 12rem;
                        background: #FFD60A;
                        border: 2px solid #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .project-card-cover h4 {
                        color: #000;
                        font-size: 2.2rem;
                        opacity: 0.2;
                        transform: rotate(-10deg);
                        transition: opacity 0.3s;
                    }

                    .project-card:hover .project-card-cover h4 {
                        opacity: 1;
                    }

                    .project-card-body {
                        padding: 1.5rem;
                    }

                    .project-card-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 1rem;
                    }

                    .project-card-head h3 {
                        font-size: 1.3rem;
                        color: #FFD60A;
                    }

                    .project-card-arrow {
                        color: #FFD60A;
                        font-size: 1.3rem;
                    }

                    .project-card-body p {
                        color: #ccc;
                        font-size: 0.95rem;
                        margin: 0 0 1rem;
                    }

                    .project-card-tag {
                        display: inline-block;
                        padding: 0.2rem 0.8rem;
                        background: #fff;
                        color: #000;
                        font-weight: 700;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        border: 1px solid #fff;
                    }

                    /* --- contact --- */

                    .contact {
                        background: #000;
                        color: #FFD60A;
                    }

                    .contact-inner {
                        max-width: 60rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .contact-inner h2 {
                        font-size: 3rem;
                        margin-bottom: 2rem;
                    }

                    .contact-lead {
                        font-size: 1.2rem;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        color: #999;
                    }

                    .contact-form {
                        max-width: 42rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        text-align: left;
                    }

                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        background: #000;
                        border: 4px solid #FFD60A;
                        padding: 1rem;
                        color: #fff;
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1rem;
                        outline: none;
                        transition: box-shadow 0.2s;
                        resize: vertical;
                    }

                    .contact-form input::placeholder,
                    .contact-form textarea::placeholder {
                        color: rgba(255, 214, 10, 0.5);
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        box-shadow: 8px 8px 0 0 #FFD60A;
                    }

                    .contact-send {
                        width: 100%;
                        padding: 1.5rem;
                        background: #FFD60A;
                        color: #000;
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 1.4rem;
                        text-transform: uppercase;
                        border: 4px solid transparent;
                        box-shadow: 8px 8px 0 0 #fff;
                        cursor: pointer;
                        transition: all 0.2s;
                    }

                    .contact-send:hover {
                        background: #fff;
                        border-color: #FFD60A;
                        box-shadow: none;
                        transform: translate(8px, 8px);
                    }

                    /* --- footer --- */

                    .site-footer {
                        padding: 3rem 1.5rem;
                        background: #FFD60A;
                    }

                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }

                    .footer-brand {
                        font-family: 'Archivo Black', sans-serif;
                        font-size: 1.4rem;
                        text-transform: uppercase;
                    }

                    .footer-socials {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-socials a {
                        color: #000;
                        font-weight: 700;
                        text-transform: uppercase;
                        text-decoration: none;
                        padding: 0 0.3rem;
                    }

                    .footer-socials a:hover {
                        background: #000;
                        color: #FFD60A;
                    }

                    .footer-location {
                        font-weight: 700;
                        font-size: 0.9rem;
                    }

                    /* --- desktop --- */

                    @media (min-width: 768px) {
                        .section {
                            padding: 8rem 3rem;
                        }
                        .hero-title {
                            font-size: 9rem;
                        }
                        .hero-subtitle {
                            font-size: 1.5rem;
                        }
                        .hero-cta-group {
                            flex-direction: row;
                        }
                        .marquee-item {
                            font-size: 3.8rem;
                        }
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 6rem;
                        }
                        .about-box {
                            padding: 3rem;
                        }
                        .about-box h2 {
                            font-size: 3.8rem;
                        }
                        .about-point {
                            font-size: 1.3rem;
                        }
                        .services-head {
                            flex-direction: row;
                            align-items: flex-end;
                        }
                        .services-head h2 {
                            font-size: 4.5rem;
                        }
                        .services-head p {
                            margin: 0;
                        }
                        .services-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .work-title {
                            font-size: 4.5rem;
                        }
                        .work-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .project-card-cover {
                            height: 16rem;
                        }
                        .contact-inner h2 {
                            font-size: 5rem;
                        }
                        .contact-row {
                            grid-template-columns: 1fr 1fr;
                        }
                        .footer-inner {
                            flex-direction: row;
                            justify-content: space-between;
                        }
                    }

                    @media (min-width: 1024px) {
                        .work-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
