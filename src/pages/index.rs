use yew::prelude::*;

use crate::components::dashboard_modal::DashboardModal;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::loading_screen::LoadingScreen;
use crate::components::particle_field::ParticleField;
use crate::components::services::Services;

/// The page walks forward through these stages and never back; the modal
/// flag lives alongside rather than inside, since the dashboard can be
/// opened and closed freely once the services are showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStage {
    Loading,
    Hero,
    Services,
}

impl ViewStage {
    /// The boot overlay finished.
    pub fn loaded(self) -> Self {
        match self {
            ViewStage::Loading => ViewStage::Hero,
            other => other,
        }
    }

    /// The user asked to see the service grid.
    pub fn entered_services(self) -> Self {
        match self {
            ViewStage::Hero => ViewStage::Services,
            other => other,
        }
    }

    pub fn is_loading(self) -> bool {
        self == ViewStage::Loading
    }

    pub fn in_services(self) -> bool {
        self == ViewStage::Services
    }
}

#[function_component(Index)]
pub fn index() -> Html {
    let stage = use_state(|| ViewStage::Loading);
    let modal_open = use_state(|| false);

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

    let on_loading_complete = {
        let stage = stage.clone();
        Callback::from(move |_| stage.set(stage.loaded()))
    };
    let on_get_started = {
        let stage = stage.clone();
        Callback::from(move |_| stage.set(stage.entered_services()))
    };
    let on_dashboard_click = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let on_modal_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            { if stage.is_loading() {
                html! { <LoadingScreen on_complete={on_loading_complete} /> }
            } else {
                html! { <ParticleField /> }
            } }
            <div class="page-content">
                <Header
                    service_view={stage.in_services()}
                    on_get_started={on_get_started.clone()}
                />
                <main>
                    { if stage.in_services() {
                        html! {
                            <div class="stage-enter" key="services">
                                <Services on_dashboard_click={on_dashboard_click} />
                            </div>
                        }
                    } else {
                        html! {
                            <div class="stage-enter" key="hero">
                                <Hero on_get_started={on_get_started} />
                            </div>
                        }
                    } }
                </main>
                { if *modal_open {
                    html! { <DashboardModal on_close={on_modal_close} /> }
                } else {
                    html! {}
                } }
            </div>
            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow-x: hidden;
                }
                .page-content {
                    position: relative;
                    z-index: 1;
                    animation: content-in 1s ease-out 0.5s backwards;
                }
                @keyframes content-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .stage-enter {
                    animation: stage-in 0.6s ease-out;
                }
                @keyframes stage-in {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ViewStage;

    #[test]
    fn stages_only_move_forward() {
        let stage = ViewStage::Loading;
        let stage = stage.loaded();
        assert_eq!(stage, ViewStage::Hero);
        let stage = stage.entered_services();
        assert_eq!(stage, ViewStage::Services);
        // Completed transitions are absorbing.
        assert_eq!(stage.loaded(), ViewStage::Services);
        assert_eq!(stage.entered_services(), ViewStage::Services);
    }

    #[test]
    fn get_started_is_ignored_while_loading() {
        assert_eq!(ViewStage::Loading.entered_services(), ViewStage::Loading);
    }

    #[test]
    fn loading_completion_is_idempotent() {
        assert_eq!(ViewStage::Hero.loaded(), ViewStage::Hero);
    }
}
