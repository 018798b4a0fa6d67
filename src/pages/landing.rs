use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::scroll::{self, use_scroll_tracker};
use crate::Nav;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1517649763962-0c623066013b?q=80&w=2070&auto=format&fit=crop";
const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?q=80&w=2070&auto=format&fit=crop";
const LIFESTYLE_IMAGE: &str =
    "https://images.unsplash.com/photo-1541625602330-2277a4c46182?q=80&w=2070&auto=format&fit=crop";

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🛡",
        "Extreme Resistance",
        "High-durability materials, built for impact, speed and heavy daily use.",
    ),
    (
        "💨",
        "Aerodynamic Design",
        "Sharp lines, a premium look and strong presence on and off the trail.",
    ),
    (
        "🪶",
        "Comfort in Motion",
        "Light and stable, comfortable even through long continuous sessions.",
    ),
    (
        "⛰",
        "Total Versatility",
        "Made for cycling, running, mountaineering, trekking and outdoor adventure.",
    ),
];

const MARQUEE_ITEMS: &[&str] = &[
    "VELTRAXX ELITECYCLE",
    "AERO SERIES",
    "HIGH PERFORMANCE",
    "UNSTOPPABLE",
];

const SWATCHES: &[&str] = &[
    "swatch-lime",
    "swatch-blue",
    "swatch-red",
    "swatch-light",
    "swatch-dark",
];

const BENEFITS: &[&str] = &[
    "From city to mountain",
    "From training to adventure",
    "We ride with you",
];

fn marquee_items() -> Html {
    // Content is doubled so the -50% keyframe wraps without a visible seam.
    MARQUEE_ITEMS
        .iter()
        .chain(MARQUEE_ITEMS.iter())
        .map(|item| {
            html! {
                <>
                    <span class="marquee-item">{ *item }</span>
                    <span class="marquee-item">{"•"}</span>
                </>
            }
        })
        .collect::<Html>()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let lifestyle_ref = use_node_ref();
    let model = use_scroll_tracker(lifestyle_ref.clone());

    let discover = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("features");
    });
    let footer_home = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    });
    let footer_about = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("about");
    });
    let footer_features = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("features");
    });

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing-page">
            <Nav scrolled={model.scrolled_past(config::NAV_SCROLL_THRESHOLD_PX)} />

            <header class="hero">
                <div
                    class="hero-background"
                    style={format!("transform: translateY({}px);", model.hero_shift())}
                >
                    <img src={HERO_IMAGE} alt="Cyclist riding at full speed" />
                </div>
                <div class="hero-scrim"></div>

                <div class="hero-content">
                    <Reveal delay={100}>
                        <div class="hero-badge">{"NEW AERO COLLECTION"}</div>
                    </Reveal>

                    <Reveal delay={200}>
                        <h1 class="hero-title">
                            {"Performance"}<br/>
                            <span class="shimmer">{"Without Limits"}</span>
                        </h1>
                    </Reveal>

                    <Reveal delay={400}>
                        <p class="hero-copy">
                            {"We built the "}<strong>{"AERO"}</strong>
                            {" for people who live in motion. Turn every mile, every trail and every challenge into a defining experience."}
                        </p>
                    </Reveal>

                    <Reveal delay={600}>
                        <div class="hero-cta-group">
                            <a class="hero-cta" href={config::STORE_URL}>
                                {"🛍 BUY NOW"}
                            </a>
                            <button class="hero-secondary" onclick={discover}>
                                {"Discover Details"}
                                <span class="down-arrow">{"↓"}</span>
                            </button>
                        </div>
                    </Reveal>
                </div>

                <div class="scroll-indicator">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </header>

            <div class="marquee-strip">
                <div class="marquee-track">
                    { marquee_items() }
                </div>
            </div>

            <section id="about" class="about">
                <div class="about-glow about-glow-lime"></div>
                <div class="about-glow about-glow-blue"></div>

                <div class="about-grid">
                    <div class="about-media">
                        <Reveal>
                            <div class="about-photo">
                                <img src={ABOUT_IMAGE} alt="AERO sunglasses in use" />
                                <div class="about-chip">
                                    <span class="about-chip-icon">{"⚡"}</span>
                                    <span>{"TECH LOADED"}</span>
                                </div>
                            </div>
                            <div class="stat-card">
                                <div>
                                    <p class="stat-value stat-accent">{"100%"}</p>
                                    <p class="stat-label">{"UV Protection"}</p>
                                </div>
                                <div class="stat-divider"></div>
                                <div>
                                    <p class="stat-value">{"24g"}</p>
                                    <p class="stat-label">{"Ultra Light"}</p>
                                </div>
                            </div>
                        </Reveal>
                    </div>

                    <div class="about-text">
                        <Reveal delay={200}>
                            <h3 class="about-heading">
                                {"ONE PAIR."}<br/>
                                <span class="gradient-heading">{"EVERY ADVENTURE."}</span>
                            </h3>
                        </Reveal>

                        <div class="about-paragraphs">
                            <Reveal delay={300}>
                                <p class="about-lead">
                                    {"Extremely tough. Modern, refined design. Versatility without limits."}
                                </p>
                            </Reveal>
                            <Reveal delay={400}>
                                <p>
                                    {"The "}<strong>{"AERO"}</strong>
                                    {" was built to deliver peak performance in any scenario. One model, designed for many sports and many ways of living."}
                                </p>
                            </Reveal>
                            <Reveal delay={500}>
                                <p class="about-note">
                                    <span class="ping-dot"></span>
                                    {"One design. Many colors. One attitude."}
                                </p>
                            </Reveal>
                        </div>

                        <Reveal delay={600}>
                            <a class="about-link" href={config::STORE_URL}>
                                {"PICK MY MODEL"}
                                <span class="about-link-arrow">{"→"}</span>
                            </a>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="features-header">
                    <Reveal>
                        <h2>{"WHY AERO?"}</h2>
                        <p>{"Because real gear has to keep up with the people who go further."}</p>
                    </Reveal>
                </div>

                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, (icon, title, text))| {
                            html! {
                                <Reveal delay={(index as u32) * 100} class="feature-slot">
                                    <div class="feature-card">
                                        <div class="feature-icon">{ *icon }</div>
                                        <h3>{ *title }</h3>
                                        <p>{ *text }</p>
                                    </div>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }

                    <Reveal delay={400} class="feature-slot colorways-slot">
                        <div class="feature-card colorways-card">
                            <div class="colorways-text">
                                <div class="feature-icon">{"🎨"}</div>
                                <h3>{"Colorways"}</h3>
                                <p>{"Pick the color that matches your style. The performance stays the same."}</p>
                                <div class="swatch-row">
                                    {
                                        SWATCHES.iter().map(|swatch| {
                                            html! { <div class={classes!("swatch", *swatch)}></div> }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                            <div class="colorways-preview">
                                <div class="preview-grid">
                                    <div class="preview-tile"></div>
                                    <div class="preview-tile"></div>
                                    <div class="preview-tile preview-wide"></div>
                                </div>
                                <p class="preview-caption">{"STYLE PREVIEW"}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section id="lifestyle" class="lifestyle" ref={lifestyle_ref}>
                <div class="lifestyle-background">
                    <img
                        src={LIFESTYLE_IMAGE}
                        alt="Mountain cycling at dusk"
                        class="lifestyle-image"
                        style={format!("transform: translateY({}px);", model.lifestyle_shift())}
                    />
                </div>
                <div class="lifestyle-scrim"></div>

                <div class="lifestyle-content">
                    <Reveal>
                        <h2 class="lifestyle-heading">
                            {"Made for"}<br/>
                            <span class="lifestyle-accent">{"those who don't stop"}</span>
                        </h2>
                    </Reveal>

                    <Reveal delay={200}>
                        <p class="lifestyle-copy">
                            {"The route changes, the terrain changes, the weather changes."}<br/>
                            {"The "}<span class="lifestyle-mark">{"AERO"}</span>
                            {" keeps up with all of it without losing performance."}
                        </p>
                    </Reveal>

                    <Reveal delay={400}>
                        <div class="benefits-bar">
                            {
                                BENEFITS.iter().enumerate().map(|(index, benefit)| {
                                    html! {
                                        <>
                                            if index > 0 {
                                                <div class="benefit-divider"></div>
                                            }
                                            <div class="benefit">
                                                <div class="benefit-check">{"✓"}</div>
                                                <span>{ *benefit }</span>
                                            </div>
                                        </>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-glow"></div>

                <div class="footer-hero">
                    <Reveal>
                        <div class="footer-headline">
                            <h2 class="footer-watermark">{"AERO"}</h2>
                            <h3 class="footer-heading">
                                {"Not just another pair of sunglasses."}<br/>
                                <span class="footer-heading-accent">{"It's part of your movement."}</span>
                            </h3>
                        </div>
                    </Reveal>

                    <Reveal delay={200}>
                        <div class="footer-cta-block">
                            <a class="footer-cta" href={config::STORE_URL}>
                                {"GET MY AERO"}
                                <span class="footer-cta-arrow">{"→"}</span>
                            </a>
                            <p class="footer-cta-note">
                                {"Free nationwide shipping • 1-year warranty"}
                            </p>
                        </div>
                    </Reveal>
                </div>

                <div class="footer-grid">
                    <div class="footer-brand">
                        <h4><span class="logo-accent">{"VEL"}</span>{"TRAXX"}</h4>
                        <p>
                            {"High-performance gear for athletes who push past limits. Design, technology and durability."}
                        </p>
                        <div class="social-row">
                            <div class="social-circle">{"IG"}</div>
                            <div class="social-circle">{"FB"}</div>
                            <div class="social-circle">{"YT"}</div>
                        </div>
                    </div>

                    <div class="footer-col">
                        <h4>{"Explore"}</h4>
                        <ul>
                            <li><button class="footer-link" onclick={footer_home}>{"→ Home"}</button></li>
                            <li><button class="footer-link" onclick={footer_about}>{"→ About AERO"}</button></li>
                            <li><button class="footer-link" onclick={footer_features}>{"→ Technology"}</button></li>
                            <li>
                                <a class="footer-link" href={config::STORE_URL}>{"→ Official Store"}</a>
                            </li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Contact"}</h4>
                        <p class="footer-contact">{"support@veltraxx.com"}</p>
                        <p class="footer-contact">{"+1 (555) 019-9432"}</p>
                        <p class="cert-title">{"CERTIFICATIONS"}</p>
                        <div class="cert-row">
                            <div class="cert-tile"></div>
                            <div class="cert-tile"></div>
                            <div class="cert-tile"></div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ format!("© {} Veltraxx EliteCycle. All rights reserved.", year) }</p>
                    <div class="footer-legal">
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"Privacy"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        background: #0a0a0a;
                    }

                    .landing-page {
                        font-family: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
                        background: #0a0a0a;
                        color: #f5f5f5;
                        min-height: 100vh;
                        overflow-x: hidden;
                    }

                    .landing-page ::selection {
                        background: #84cc16;
                        color: #000;
                    }

                    /* Reveal-on-scroll wrapper. Blocks hold their place in the
                       layout; only opacity and transform animate in. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(3rem);
                        transition: opacity 1s cubic-bezier(0.16, 1, 0.3, 1),
                                    transform 1s cubic-bezier(0.16, 1, 0.3, 1);
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    /* ---------- navbar ---------- */

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(23, 23, 23, 0.92);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        border-bottom: 1px solid #262626;
                        padding: 0.75rem 0;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5);
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.15rem;
                        font-size: 1.5rem;
                        font-weight: 800;
                        letter-spacing: -0.05em;
                        cursor: pointer;
                    }

                    .logo-accent {
                        color: #a3e635;
                    }

                    .logo-tag {
                        font-size: 0.6rem;
                        margin-left: 0.6rem;
                        border: 1px solid #404040;
                        border-radius: 4px;
                        padding: 0.15rem 0.4rem;
                        color: #a3a3a3;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        background: rgba(23, 23, 23, 0.5);
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.85rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        color: #f5f5f5;
                        font: inherit;
                        cursor: pointer;
                        position: relative;
                        padding-bottom: 0.2rem;
                        transition: color 0.3s ease;
                    }

                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: 0;
                        width: 0;
                        height: 2px;
                        background: #a3e635;
                        transition: width 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #a3e635;
                    }

                    .nav-link:hover::after {
                        width: 100%;
                    }

                    .nav-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #84cc16;
                        color: #000;
                        padding: 0.5rem 1.5rem;
                        border-radius: 999px;
                        font-weight: 700;
                        text-decoration: none;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .nav-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 20px rgba(132, 204, 22, 0.4);
                    }

                    .nav-cta-arrow {
                        transition: transform 0.3s ease;
                    }

                    .nav-cta:hover .nav-cta-arrow {
                        transform: translateX(4px);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.4rem;
                    }

                    .burger-menu span {
                        display: block;
                        width: 26px;
                        height: 2px;
                        background: #fff;
                    }

                    /* ---------- hero ---------- */

                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 700px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }

                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                        opacity: 0.6;
                        transform: scale(1.1);
                    }

                    .hero-scrim {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: linear-gradient(to top,
                            #0a0a0a,
                            rgba(10, 10, 10, 0.5) 50%,
                            rgba(23, 23, 23, 0.3));
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 1200px;
                        margin-top: 4rem;
                        padding: 0 1.5rem;
                    }

                    .hero-badge {
                        display: inline-block;
                        border: 1px solid rgba(132, 204, 22, 0.3);
                        background: rgba(132, 204, 22, 0.1);
                        backdrop-filter: blur(4px);
                        padding: 0.3rem 1rem;
                        border-radius: 999px;
                        margin-bottom: 1.5rem;
                        color: #a3e635;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        font-size: 0.8rem;
                    }

                    .hero-title {
                        font-size: clamp(3rem, 10vw, 8rem);
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        line-height: 0.9;
                        margin-bottom: 1.5rem;
                    }

                    @keyframes shimmer {
                        0% { background-position: 200% center; }
                        100% { background-position: -200% center; }
                    }

                    .shimmer {
                        background: linear-gradient(to right, #ffffff 20%, #84cc16 50%, #ffffff 80%);
                        background-size: 200% auto;
                        background-clip: text;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: shimmer 4s linear infinite;
                    }

                    .hero-copy {
                        color: #d4d4d4;
                        font-size: 1.2rem;
                        font-weight: 300;
                        line-height: 1.7;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-cta {
                        background: #84cc16;
                        color: #000;
                        padding: 1.25rem 2.5rem;
                        border-radius: 999px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 40px rgba(132, 204, 22, 0.4);
                    }

                    .hero-secondary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1.25rem 2rem;
                        border-radius: 999px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: #f5f5f5;
                        cursor: pointer;
                        backdrop-filter: blur(4px);
                        transition: background 0.3s ease;
                    }

                    .hero-secondary:hover {
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .down-arrow {
                        color: #a3e635;
                        transition: transform 0.3s ease;
                    }

                    .hero-secondary:hover .down-arrow {
                        transform: translateY(4px);
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -25%); }
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-radius: 999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        opacity: 0.5;
                        animation: bounce 1.5s infinite;
                    }

                    .scroll-indicator-dot {
                        width: 6px;
                        height: 6px;
                        background: #a3e635;
                        border-radius: 50%;
                        animation: pulse 2s infinite;
                    }

                    /* ---------- marquee ---------- */

                    @keyframes marquee {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }

                    .marquee-strip {
                        background: #84cc16;
                        padding: 0.75rem 0;
                        overflow: hidden;
                        white-space: nowrap;
                        border-top: 1px solid #a3e635;
                        border-bottom: 1px solid #a3e635;
                        position: relative;
                        z-index: 20;
                        transform: rotate(1deg) scale(1.05);
                        transform-origin: left;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
                    }

                    .marquee-track {
                        display: inline-block;
                        animation: marquee 30s linear infinite;
                    }

                    .marquee-item {
                        color: #000;
                        font-weight: 900;
                        font-size: 1.2rem;
                        margin: 0 2rem;
                        letter-spacing: 0.1em;
                        font-style: italic;
                    }

                    /* ---------- about ---------- */

                    .about {
                        position: relative;
                        padding: 8rem 1.5rem;
                        background: #0a0a0a;
                        overflow: hidden;
                    }

                    .about-glow {
                        position: absolute;
                        width: 500px;
                        height: 500px;
                        border-radius: 50%;
                        filter: blur(120px);
                        pointer-events: none;
                    }

                    .about-glow-lime {
                        top: 0;
                        right: 0;
                        background: rgba(132, 204, 22, 0.05);
                    }

                    .about-glow-blue {
                        bottom: 0;
                        left: 0;
                        background: rgba(59, 130, 246, 0.05);
                    }

                    .about-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 4rem;
                    }

                    .about-media {
                        position: relative;
                        width: 100%;
                    }

                    .about-photo {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid #262626;
                    }

                    .about-photo img {
                        width: 100%;
                        display: block;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .about-photo:hover img {
                        transform: scale(1.05);
                    }

                    .about-chip {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-size: 0.7rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        animation: pulse 2s infinite;
                    }

                    .about-chip-icon {
                        color: #a3e635;
                        font-size: 1.2rem;
                    }

                    .stat-card {
                        position: absolute;
                        bottom: -2.5rem;
                        right: -1rem;
                        display: flex;
                        gap: 1.5rem;
                        background: rgba(23, 23, 23, 0.9);
                        backdrop-filter: blur(16px);
                        border: 1px solid #262626;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        transition: transform 0.3s ease;
                    }

                    .stat-card:hover {
                        transform: translateY(-0.5rem);
                    }

                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }

                    .stat-accent {
                        color: #a3e635;
                    }

                    .stat-label {
                        color: #a3a3a3;
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-top: 0.25rem;
                    }

                    .stat-divider {
                        width: 1px;
                        background: #404040;
                    }

                    .about-text {
                        width: 100%;
                    }

                    .about-heading {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 2rem;
                    }

                    .gradient-heading {
                        background: linear-gradient(to right, #fff, #525252);
                        background-clip: text;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .about-paragraphs {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        color: #a3a3a3;
                        font-size: 1.1rem;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                    }

                    .about-lead {
                        border-left: 4px solid #84cc16;
                        padding: 0.5rem 0 0.5rem 1.5rem;
                        background: linear-gradient(to right, rgba(132, 204, 22, 0.05), transparent);
                    }

                    @keyframes ping {
                        0% { transform: scale(1); opacity: 1; }
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }

                    .about-note {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 500;
                        font-style: italic;
                    }

                    .ping-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #84cc16;
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }

                    .about-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #a3e635;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                        border-bottom: 1px solid transparent;
                        padding-bottom: 0.25rem;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }

                    .about-link:hover {
                        color: #bef264;
                        border-color: #a3e635;
                    }

                    .about-link-arrow {
                        background: rgba(132, 204, 22, 0.2);
                        border-radius: 50%;
                        width: 1.75rem;
                        height: 1.75rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s ease, color 0.3s ease;
                    }

                    .about-link:hover .about-link-arrow {
                        background: #84cc16;
                        color: #000;
                    }

                    /* ---------- features ---------- */

                    .features {
                        position: relative;
                        padding: 8rem 1.5rem;
                        background: #171717;
                        border-top: 1px solid rgba(64, 64, 64, 0.5);
                    }

                    .features-header {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 5rem;
                    }

                    .features-header h2 {
                        font-size: clamp(2rem, 6vw, 3.5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .features-header p {
                        color: #a3a3a3;
                        font-size: 1.25rem;
                    }

                    .features-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .feature-slot,
                    .feature-slot > .feature-card {
                        height: 100%;
                    }

                    .feature-card {
                        background: #0a0a0a;
                        padding: 2.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid #262626;
                        transition: border-color 0.5s ease, transform 0.5s ease, box-shadow 0.5s ease;
                    }

                    .feature-card:hover {
                        border-color: rgba(132, 204, 22, 0.4);
                        transform: translateY(-0.5rem);
                        box-shadow: 0 10px 40px -15px rgba(132, 204, 22, 0.2);
                    }

                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        background: #171717;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin-bottom: 2rem;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s ease, background 0.3s ease;
                    }

                    .feature-card:hover .feature-icon {
                        transform: scale(1.1);
                        background: #84cc16;
                    }

                    .feature-card h3 {
                        font-size: 1.4rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        transition: color 0.3s ease;
                    }

                    .feature-card:hover h3 {
                        color: #a3e635;
                    }

                    .feature-card p {
                        color: #a3a3a3;
                        line-height: 1.7;
                    }

                    .colorways-card {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .colorways-text {
                        flex: 1;
                    }

                    .swatch-row {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }

                    .swatch {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        box-shadow: 0 4px 10px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .swatch:hover {
                        transform: scale(1.25);
                        box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.5);
                    }

                    .swatch-lime { background: #84cc16; }
                    .swatch-blue { background: #2563eb; }
                    .swatch-red { background: #ef4444; }
                    .swatch-light { background: #e5e5e5; }
                    .swatch-dark { background: #262626; }

                    .colorways-preview {
                        width: 100%;
                        opacity: 0.8;
                        transition: opacity 0.3s ease;
                    }

                    .colorways-card:hover .colorways-preview {
                        opacity: 1;
                    }

                    .preview-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.5rem;
                    }

                    .preview-tile {
                        background: rgba(38, 38, 38, 0.5);
                        height: 6rem;
                        border-radius: 0.5rem;
                        animation: pulse 2s infinite;
                    }

                    .preview-wide {
                        grid-column: span 2;
                    }

                    .preview-caption {
                        text-align: center;
                        font-size: 0.7rem;
                        color: #737373;
                        margin-top: 0.5rem;
                        font-family: monospace;
                    }

                    /* ---------- lifestyle ---------- */

                    .lifestyle {
                        position: relative;
                        height: 90vh;
                        padding: 10rem 1.5rem;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }

                    .lifestyle-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: #171717;
                    }

                    /* Oversized and recentered so the parallax transform has
                       scroll room in both directions. */
                    .lifestyle-image {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        height: 150%;
                        top: -25%;
                        object-fit: cover;
                        filter: grayscale(1) brightness(0.4);
                        will-change: transform;
                    }

                    .lifestyle-scrim {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: rgba(10, 10, 10, 0.6);
                    }

                    .lifestyle-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        text-align: center;
                        width: 100%;
                    }

                    .lifestyle-heading {
                        font-size: clamp(2.5rem, 8vw, 5rem);
                        font-weight: 900;
                        text-transform: uppercase;
                        font-style: italic;
                        line-height: 1;
                        margin-bottom: 2rem;
                    }

                    .lifestyle-accent {
                        background: linear-gradient(to right, #a3e635, #059669);
                        background-clip: text;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .lifestyle-copy {
                        font-size: 1.4rem;
                        font-weight: 300;
                        color: #e5e5e5;
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        line-height: 1.7;
                    }

                    .lifestyle-mark {
                        color: #a3e635;
                        font-weight: 700;
                        background: rgba(132, 204, 22, 0.1);
                        padding: 0 0.5rem;
                        border-radius: 0.25rem;
                    }

                    .benefits-bar {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 1.5rem;
                        max-width: 64rem;
                        margin: 0 auto;
                        background: rgba(23, 23, 23, 0.5);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: left;
                    }

                    .benefit {
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                        font-size: 1.2rem;
                        font-weight: 700;
                    }

                    .benefit-check {
                        background: rgba(132, 204, 22, 0.2);
                        color: #a3e635;
                        border-radius: 50%;
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.3rem;
                        flex-shrink: 0;
                    }

                    .benefit-divider {
                        width: 100%;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.1);
                    }

                    /* ---------- footer ---------- */

                    .footer {
                        position: relative;
                        background: #0a0a0a;
                        padding: 8rem 1.5rem 3rem;
                        border-top: 1px solid #171717;
                        overflow: hidden;
                    }

                    .footer-glow {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 100%;
                        max-width: 48rem;
                        height: 100%;
                        background: rgba(132, 204, 22, 0.05);
                        filter: blur(100px);
                        pointer-events: none;
                    }

                    .footer-hero {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto 5rem;
                    }

                    .footer-headline {
                        position: relative;
                        display: inline-block;
                    }

                    .footer-watermark {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        font-size: clamp(7rem, 20vw, 12rem);
                        font-weight: 900;
                        color: #171717;
                        letter-spacing: -0.05em;
                        white-space: nowrap;
                        user-select: none;
                        z-index: 0;
                        line-height: 1;
                    }

                    .footer-heading {
                        position: relative;
                        z-index: 10;
                        font-size: clamp(2rem, 5vw, 3.5rem);
                        font-weight: 700;
                        line-height: 1.2;
                    }

                    .footer-heading-accent {
                        color: #a3e635;
                    }

                    .footer-cta-block {
                        margin-top: 4rem;
                    }

                    .footer-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        background: #fff;
                        color: #000;
                        padding: 1.5rem 3rem;
                        border-radius: 999px;
                        font-weight: 900;
                        font-size: 1.25rem;
                        text-decoration: none;
                        box-shadow: 0 0 30px rgba(255, 255, 255, 0.1);
                        transition: background 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .footer-cta:hover {
                        background: #a3e635;
                        transform: translateY(-0.25rem);
                        box-shadow: 0 0 50px rgba(132, 204, 22, 0.6);
                    }

                    .footer-cta-arrow {
                        transition: transform 0.3s ease;
                    }

                    .footer-cta:hover .footer-cta-arrow {
                        transform: translateX(8px);
                    }

                    .footer-cta-note {
                        margin-top: 1.5rem;
                        color: #737373;
                        font-size: 0.85rem;
                    }

                    .footer-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 4rem auto 0;
                        padding-top: 4rem;
                        border-top: 1px solid #171717;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        text-align: left;
                        font-size: 0.9rem;
                        color: #737373;
                    }

                    .footer-brand h4 {
                        color: #fff;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer-brand p {
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }

                    .social-row {
                        display: flex;
                        gap: 1rem;
                    }

                    .social-circle {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #171717;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }

                    .social-circle:hover {
                        background: #84cc16;
                        color: #000;
                    }

                    .footer-col h4 {
                        color: #fff;
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer-col ul {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #737373;
                        font: inherit;
                        cursor: pointer;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-link:hover {
                        color: #a3e635;
                    }

                    .footer-contact {
                        margin-bottom: 1rem;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .footer-contact:hover {
                        color: #fff;
                    }

                    .cert-title {
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #84cc16;
                        margin: 1rem 0 0.5rem;
                    }

                    .cert-row {
                        display: flex;
                        gap: 0.5rem;
                        opacity: 0.5;
                    }

                    .cert-tile {
                        height: 2rem;
                        width: 3rem;
                        background: #262626;
                        border-radius: 0.25rem;
                    }

                    .footer-bottom {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 4rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid #171717;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.75rem;
                        color: #525252;
                    }

                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-legal a {
                        color: #525252;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-legal a:hover {
                        color: #a3a3a3;
                    }

                    /* ---------- breakpoints ---------- */

                    @media (min-width: 768px) {
                        .hero-cta-group {
                            flex-direction: row;
                        }

                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .benefits-bar {
                            flex-direction: row;
                            gap: 3rem;
                            padding: 3rem;
                        }

                        .benefit-divider {
                            width: 1px;
                            height: 3rem;
                            align-self: center;
                        }

                        .footer-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }

                        .footer-bottom {
                            flex-direction: row;
                            justify-content: space-between;
                        }

                        .colorways-card {
                            flex-direction: row;
                            align-items: center;
                        }

                        .colorways-preview {
                            width: 45%;
                        }
                    }

                    @media (min-width: 1024px) {
                        .features-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }

                        .colorways-slot {
                            grid-column: span 2;
                        }

                        .about-grid {
                            flex-direction: row;
                            gap: 6rem;
                        }

                        .about-media,
                        .about-text {
                            width: 50%;
                        }
                    }

                    @media (max-width: 767px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-links {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0;
                            background: rgba(23, 23, 23, 0.95);
                            backdrop-filter: blur(16px);
                            border-bottom: 1px solid #262626;
                            max-height: 0;
                            overflow: hidden;
                            opacity: 0;
                            transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
                        }

                        .nav-links.mobile-open {
                            max-height: 24rem;
                            opacity: 1;
                            padding: 1.5rem;
                        }

                        .nav-links .nav-link {
                            text-align: left;
                            padding: 0.75rem 0;
                            border-bottom: 1px solid #262626;
                        }

                        .nav-links .nav-cta {
                            justify-content: center;
                            margin-top: 1rem;
                            border-radius: 0.5rem;
                        }

                        .stat-card {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
