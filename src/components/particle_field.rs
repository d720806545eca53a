use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::anim::particles::{self, Particle, LINK_DISTANCE};
use crate::config;

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn scatter() -> Vec<Particle> {
    match viewport_size() {
        Some((width, height)) => particles::generate(
            width,
            height,
            particles::count_for_width(width),
            js_sys::Math::random,
        ),
        None => Vec::new(),
    }
}

/// Full-viewport decorative overlay: a fixed set of drifting points that
/// lean toward the pointer, plus lines between close pairs. The set is
/// regenerated wholesale on resize; pointer tracking is skipped on narrow
/// viewports.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let field = use_state(scatter);
    let pointer = use_state(|| None::<(f64, f64)>);

    {
        let field = field.clone();
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_resize = Closure::<dyn Fn()>::new({
                        let field = field.clone();
                        move || {
                            field.set(scatter());
                        }
                    });
                    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new({
                        let pointer = pointer.clone();
                        move |e: web_sys::MouseEvent| {
                            // Touch layouts get a static field.
                            let narrow = viewport_size()
                                .map(|(w, _)| w < config::MOBILE_BREAKPOINT)
                                .unwrap_or(true);
                            if !narrow {
                                pointer.set(Some((
                                    f64::from(e.client_x()),
                                    f64::from(e.client_y()),
                                )));
                            }
                        }
                    });
                    if let Err(e) = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    ) {
                        gloo_console::error!("failed to attach resize listener", e);
                    }
                    if let Err(e) = window.add_event_listener_with_callback(
                        "mousemove",
                        on_mousemove.as_ref().unchecked_ref(),
                    ) {
                        gloo_console::error!("failed to attach mousemove listener", e);
                    }
                    Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
                            );
                            let _ = window.remove_event_listener_with_callback(
                                "mousemove",
                                on_mousemove.as_ref().unchecked_ref(),
                            );
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

    let links = particles::connections(&field, LINK_DISTANCE);

    html! {
        <div class="particle-field" aria-hidden="true">
            { for field.iter().map(|particle| {
                let (x, y) = particles::displaced(particle, *pointer);
                let influence = match *pointer {
                    Some(p) => particles::influence_at(particle, p),
                    None => 0.0,
                };
                let style = format!(
                    "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
                     background-color: {}; opacity: {:.3}; transform: scale({:.2});",
                    x,
                    y,
                    particle.size,
                    particle.size,
                    particle.color,
                    (particle.opacity + influence * 0.3).min(1.0),
                    1.0 + influence * 0.5,
                );
                html! { <div class="particle" style={style}></div> }
            }) }
            <svg class="particle-links">
                <defs>
                    <linearGradient id="particle-link-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#3B82F6" />
                        <stop offset="100%" stop-color="#8B5CF6" />
                    </linearGradient>
                </defs>
                { for links.iter().map(|link| {
                    let a = &field[link.a];
                    let b = &field[link.b];
                    html! {
                        <line
                            x1={format!("{:.1}", a.x)}
                            y1={format!("{:.1}", a.y)}
                            x2={format!("{:.1}", b.x)}
                            y2={format!("{:.1}", b.y)}
                            stroke="url(#particle-link-gradient)"
                            stroke-width="1"
                            opacity={format!("{:.3}", link.opacity)}
                        />
                    }
                }) }
            </svg>
            <style>
                {r#"
                .particle-field {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .particle {
                    position: absolute;
                    border-radius: 50%;
                    transition: left 0.25s ease-out, top 0.25s ease-out,
                                transform 0.25s ease-out, opacity 0.25s ease-out;
                }
                .particle-links {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }
                "#}
            </style>
        </div>
    }
}
