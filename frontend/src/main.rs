use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod models;
mod reveal;
mod theme;
mod components {
    pub mod caption_tool;
    pub mod detail_section;
    pub mod hero;
    pub mod visibility;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

/// Scroll offset after which the nav gets its solid background.
const NAV_SCROLL_THRESHOLD: i32 = 50;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#photography", "Photography"),
    ("#videography", "Videography"),
    ("#editing", "Editing"),
    ("#ai-tools", "AI Tools"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.page_y_offset().unwrap_or(0.0);
                        is_scrolled.set(offset as i32 > NAV_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to attach scroll listener: {:?}", e);
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: background-color 0.3s, padding 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(8px);
                        padding: 1rem 0;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            padding: 1.5rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"NEXT IMAGE"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
