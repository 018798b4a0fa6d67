use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod scroll;
mod components {
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Section links share one behavior: smooth-scroll to the target and fold
    // the mobile menu back in.
    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let go_home = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    });

    let menu_class = if *menu_open {
        "nav-links mobile-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={go_home}>
                    <span class="logo-accent">{"VEL"}</span>
                    <span>{"TRAXX"}</span>
                    <span class="logo-tag">{"EliteCycle"}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <button class="nav-link" onclick={go_to("about")}>{"ABOUT"}</button>
                    <button class="nav-link" onclick={go_to("features")}>{"BENEFITS"}</button>
                    <button class="nav-link" onclick={go_to("lifestyle")}>{"LIFESTYLE"}</button>
                    <a
                        class="nav-cta"
                        href={config::STORE_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"BUY NOW"}
                        <span class="nav-cta-arrow">{"→"}</span>
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting AERO site");
    yew::Renderer::<App>::new().render();
}
