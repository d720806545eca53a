use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct DashboardModalProps {
    pub on_close: Callback<()>,
}

/// Overlay embedding the externally hosted risk dashboard. The frame is
/// cross-origin, so there is no load event to trust; a spinner covers it
/// for a fixed interval and then hides whether or not the dashboard is
/// actually ready.
#[function_component(DashboardModal)]
pub fn dashboard_modal(props: &DashboardModalProps) -> Html {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::DASHBOARD_REVEAL_MS, move || {
                    ready.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="modal-header">
                    <div class="modal-title">
                        <i class="fas fa-heart-pulse"></i>
                        <div>
                            <h2>{"Heart Attack Prediction Analysis"}</h2>
                            <p>{"Advanced cardiovascular risk assessment powered by AI"}</p>
                        </div>
                    </div>
                    <button class="modal-close" onclick={on_close_click} aria-label="Close">
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>
                <div class="modal-body">
                    { if !*ready {
                        html! {
                            <div class="modal-placeholder">
                                <div class="modal-spinner"></div>
                                <p>{"Loading Heart Prediction Dashboard..."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    } }
                    <iframe
                        title="Heart Attack Prediction Dashboard"
                        class={classes!("modal-frame", ready.then_some("modal-frame-ready"))}
                        src={config::heart_dashboard_embed_url()}
                        allowfullscreen=true
                    />
                </div>
                <div class="modal-footer">
                    <div class="modal-footer-tags">
                        <span><i class="fas fa-chart-column"></i>{" Real-time Analytics"}</span>
                        <span class="modal-footer-dot"></span>
                        <span>{"Secure & Private"}</span>
                        <span class="modal-footer-dot"></span>
                        <span>{"FDA Compliant"}</span>
                    </div>
                    <span class="modal-footer-credit">{"Powered by Microsoft Power BI"}</span>
                </div>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(6px);
                    animation: backdrop-in 0.25s ease-out;
                }
                @keyframes backdrop-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .modal-panel {
                    width: 100%;
                    max-width: 1100px;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    border-radius: 20px;
                    background: rgba(20, 22, 40, 0.95);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: panel-in 0.3s ease-out;
                }
                @keyframes panel-in {
                    from { opacity: 0; transform: scale(0.92); }
                    to { opacity: 1; transform: scale(1); }
                }
                .modal-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .modal-title {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .modal-title > i {
                    font-size: 1.8rem;
                    color: #EF4444;
                    animation: heart-beat 2s ease-in-out infinite;
                }
                @keyframes heart-beat {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.1); }
                }
                .modal-title h2 {
                    margin: 0;
                    font-size: 1.4rem;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .modal-title p {
                    margin: 0.2rem 0 0;
                    font-size: 0.85rem;
                    color: #8b93a7;
                }
                .modal-close {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 10px;
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.06);
                    color: white;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .modal-close:hover {
                    background: rgba(239, 68, 68, 0.2);
                    border-color: rgba(239, 68, 68, 0.4);
                }
                .modal-body {
                    position: relative;
                    flex: 1;
                    padding: 1.5rem;
                    min-height: 0;
                }
                .modal-placeholder {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #8b93a7;
                }
                .modal-spinner {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 3px solid rgba(59, 130, 246, 0.3);
                    border-top-color: #3B82F6;
                    animation: spinner-turn 2s linear infinite;
                }
                @keyframes spinner-turn {
                    to { transform: rotate(360deg); }
                }
                .modal-frame {
                    width: 100%;
                    height: 70vh;
                    border: 0;
                    border-radius: 12px;
                    opacity: 0;
                    transform: scale(0.97);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .modal-frame-ready {
                    opacity: 1;
                    transform: scale(1);
                }
                .modal-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    padding: 1.25rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    font-size: 0.85rem;
                    color: #8b93a7;
                }
                .modal-footer-tags {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .modal-footer-dot {
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: #8b93a7;
                }
                .modal-footer-credit {
                    font-size: 0.75rem;
                }
                @media (max-width: 768px) {
                    .modal-title h2 {
                        font-size: 1.1rem;
                    }
                    .modal-frame {
                        height: 60vh;
                    }
                }
                "#}
            </style>
        </div>
    }
}
