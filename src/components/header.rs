use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// True once the user has moved on to the service grid; swaps the CTA
    /// for a welcome chip.
    pub service_view: bool,
    pub on_get_started: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);

    // Glass chrome once the page scrolls past the very top.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(scroll_y > 20.0);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    cleanup();
                }
            },
            (),
        );
    }

    let onclick = {
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_| on_get_started.emit(()))
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("site-header-scrolled"))}>
            <div class="site-header-inner">
                <a href="#" class="brand">
                    <i class="fas fa-staff-snake"></i>
                    <h1>{"MEDIVERSE"}</h1>
                </a>
                { if !props.service_view {
                    html! {
                        <button class="header-cta" {onclick}>{"Get Started"}</button>
                    }
                } else {
                    html! {
                        <div class="header-welcome">
                            <span>{"Welcome to the Future of Healthcare"}</span>
                            <div class="header-avatar">{"U"}</div>
                        </div>
                    }
                } }
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    transition: all 0.3s ease;
                    background: transparent;
                }
                .site-header-scrolled {
                    padding: 0.75rem 0;
                    background: rgba(15, 15, 35, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(59, 130, 246, 0.15);
                }
                .site-header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .brand:hover {
                    transform: scale(1.05);
                }
                .brand i {
                    font-size: 1.8rem;
                    color: #3B82F6;
                }
                .brand h1 {
                    margin: 0;
                    font-size: 1.5rem;
                    letter-spacing: 0.1em;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .header-cta {
                    padding: 0.6rem 1.4rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.06);
                    backdrop-filter: blur(8px);
                    color: white;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .header-cta:hover {
                    background: rgba(59, 130, 246, 0.2);
                    border-color: rgba(59, 130, 246, 0.4);
                    transform: translateY(-1px);
                }
                .header-welcome {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.9rem;
                    color: #cfd6e4;
                }
                .header-avatar {
                    width: 38px;
                    height: 38px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    color: #3B82F6;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(59, 130, 246, 0.3);
                }
                @media (max-width: 768px) {
                    .header-welcome span {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
