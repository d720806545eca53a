use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::anim::spring::Spring;
use crate::anim::{FRAME_DT, FRAME_MS};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub on_click: Callback<MouseEvent>,
    /// Fraction of the pointer offset the button leans toward.
    #[prop_or(0.3)]
    pub strength: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Button that leans toward the pointer while hovered and springs back on
/// leave. Two independent pointer-follow springs, stepped on the shared
/// frame clock.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0f64, 0.0f64));
    let springs = use_mut_ref(|| (Spring::pointer(0.0), Spring::pointer(0.0)));

    {
        let offset = offset.clone();
        let springs = springs.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(FRAME_MS, move || {
                    let mut springs = springs.borrow_mut();
                    // Nothing to render while both axes are at rest.
                    if springs.0.settled(0.01) && springs.1.settled(0.01) {
                        return;
                    }
                    let x = springs.0.step(FRAME_DT);
                    let y = springs.1.step(FRAME_DT);
                    offset.set((x, y));
                });
                move || drop(interval)
            },
            (),
        );
    }

    let onmousemove = {
        let node = node.clone();
        let springs = springs.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let center_x = rect.left() + rect.width() / 2.0;
                let center_y = rect.top() + rect.height() / 2.0;
                let mut springs = springs.borrow_mut();
                springs.0.set_target((f64::from(e.client_x()) - center_x) * strength);
                springs.1.set_target((f64::from(e.client_y()) - center_y) * strength);
            }
        })
    };

    let onmouseleave = {
        let springs = springs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut springs = springs.borrow_mut();
            springs.0.set_target(0.0);
            springs.1.set_target(0.0);
        })
    };

    let (x, y) = *offset;
    let style = format!("transform: translate({:.1}px, {:.1}px);", x, y);

    html! {
        <button
            ref={node}
            class={classes!("magnetic-button", props.class.clone())}
            style={style}
            onclick={props.on_click.clone()}
            {onmousemove}
            {onmouseleave}
        >
            <span class="magnetic-button-inner">{ for props.children.iter() }</span>
            <style>
                {r#"
                .magnetic-button {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    cursor: pointer;
                    padding: 1rem 2.5rem;
                    border-radius: 12px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: white;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    box-shadow: 0 4px 24px rgba(59, 130, 246, 0.3);
                    transition: box-shadow 0.3s ease;
                }
                .magnetic-button:hover {
                    box-shadow: 0 8px 40px rgba(139, 92, 246, 0.45);
                }
                .magnetic-button:active {
                    transform: scale(0.95);
                }
                .magnetic-button-inner {
                    position: relative;
                    z-index: 1;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                "#}
            </style>
        </button>
    }
}
