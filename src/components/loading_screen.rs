use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::anim::progress::LoadingProgress;

const TICK_MS: u32 = 50;
const STEP: u32 = 2;
/// Hold the finished bar on screen briefly before handing off.
const COMPLETE_DELAY_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// Fired exactly once, after progress reaches 100 and the hold delay
    /// elapses. Never fired if the screen unmounts early.
    pub on_complete: Callback<()>,
}

fn status_caption(progress: u32) -> &'static str {
    match progress {
        0..=29 => "Initializing AI Models...",
        30..=59 => "Loading Medical Databases...",
        60..=89 => "Calibrating Diagnostic Systems...",
        _ => "Ready for Healthcare Analysis!",
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let progress = use_state(|| 0u32);

    {
        let progress = progress.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(LoadingProgress::new()));
                let interval_handle: Rc<RefCell<Option<Interval>>> =
                    Rc::new(RefCell::new(None));
                let timeout_handle: Rc<RefCell<Option<Timeout>>> =
                    Rc::new(RefCell::new(None));

                let interval_for_tick = interval_handle.clone();
                let timeout_for_tick = timeout_handle.clone();
                let interval = Interval::new(TICK_MS, move || {
                    let done = tracker.borrow_mut().advance(STEP);
                    progress.set(tracker.borrow().value());
                    if done {
                        // Stop ticking; the completion callback fires once,
                        // after a short hold on the full bar.
                        if let Some(interval) = interval_for_tick.borrow_mut().take() {
                            drop(interval);
                        }
                        let mut pending = timeout_for_tick.borrow_mut();
                        if pending.is_none() {
                            let on_complete = on_complete.clone();
                            *pending = Some(Timeout::new(COMPLETE_DELAY_MS, move || {
                                on_complete.emit(());
                            }));
                        }
                    }
                });
                *interval_handle.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                    if let Some(timeout) = timeout_handle.borrow_mut().take() {
                        drop(timeout);
                    }
                }
            },
            (),
        );
    }

    let percent = *progress;

    html! {
        <div class="loading-screen">
            <div class="loading-ambient">
                { for (0..20).map(|i| {
                    let style = format!(
                        "left: {}%; top: {}%; animation-delay: {}ms;",
                        (i * 37) % 100,
                        (i * 53) % 100,
                        i * 200,
                    );
                    html! { <div class="loading-mote" style={style}></div> }
                }) }
            </div>
            <div class="loading-content">
                <div class="loading-logo">
                    <i class="fas fa-staff-snake"></i>
                    <div class="loading-logo-ring"></div>
                </div>
                <div class="loading-brand">
                    <h1>{"MEDIVERSE"}</h1>
                    <p>{"Initializing AI Healthcare Platform"}</p>
                </div>
                <div class="loading-progress-card">
                    <div class="loading-progress-header">
                        <span>{"Loading"}</span>
                        <span class="loading-progress-value">{format!("{}%", percent)}</span>
                    </div>
                    <div class="loading-progress-track">
                        <div
                            class="loading-progress-fill"
                            style={format!("width: {}%;", percent)}
                        ></div>
                    </div>
                </div>
                <p class="loading-status">{ status_caption(percent) }</p>
            </div>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #0f0f23 0%, #1a1a2e 50%, #16213e 100%);
                }
                .loading-ambient {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .loading-mote {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.25);
                    animation: mote-rise 3s ease-in-out infinite;
                }
                @keyframes mote-rise {
                    0% { transform: translateY(0); opacity: 0; }
                    50% { transform: translateY(-100px); opacity: 1; }
                    100% { transform: translateY(0); opacity: 0; }
                }
                .loading-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }
                .loading-logo {
                    position: relative;
                    width: 110px;
                    height: 110px;
                    margin: 0 auto 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .loading-logo i {
                    font-size: 4rem;
                    color: #3B82F6;
                    animation: logo-pulse 2s ease-in-out infinite;
                }
                @keyframes logo-pulse {
                    0%, 100% { transform: scale(1); filter: drop-shadow(0 0 20px rgba(59, 130, 246, 0.5)); }
                    50% { transform: scale(1.1); filter: drop-shadow(0 0 40px rgba(139, 92, 246, 0.8)); }
                }
                .loading-logo-ring {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 2px solid rgba(59, 130, 246, 0.3);
                    border-top-color: rgba(139, 92, 246, 0.8);
                    animation: ring-spin 8s linear infinite;
                }
                @keyframes ring-spin {
                    to { transform: rotate(360deg); }
                }
                .loading-brand h1 {
                    margin: 0 0 0.5rem;
                    font-size: 2.5rem;
                    letter-spacing: 0.15em;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .loading-brand p {
                    margin: 0 0 2rem;
                    color: #8b93a7;
                    font-size: 1.1rem;
                }
                .loading-progress-card {
                    width: 320px;
                    margin: 0 auto;
                    padding: 1rem 1.25rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    backdrop-filter: blur(8px);
                }
                .loading-progress-header {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.85rem;
                    margin-bottom: 0.6rem;
                    color: #cfd6e4;
                }
                .loading-progress-value {
                    font-family: monospace;
                }
                .loading-progress-track {
                    height: 8px;
                    border-radius: 4px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.08);
                }
                .loading-progress-fill {
                    height: 100%;
                    border-radius: 4px;
                    background: linear-gradient(90deg, #3B82F6, #8B5CF6);
                    transition: width 0.1s ease-out;
                }
                .loading-status {
                    margin-top: 1.5rem;
                    color: #8b93a7;
                    font-size: 0.9rem;
                    min-height: 1.2em;
                }
                "#}
            </style>
        </div>
    }
}
