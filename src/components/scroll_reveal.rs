use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot viewport visibility for `node`. Flips to true the first time
/// the element intersects the viewport and never goes back; the observer
/// is disconnected as soon as it has fired, or on unmount.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let cleanup: Box<dyn FnOnce()> = if let Some(element) = node.cast::<Element>() {
                    let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                        Rc::new(RefCell::new(None));
                    let observer_for_callback = observer_slot.clone();
                    let on_visible = visible.clone();
                    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(
                        move |entries: js_sys::Array| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if intersecting {
                                on_visible.set(true);
                                // One-shot: the block never hides again, so
                                // stop watching right away.
                                if let Some(observer) =
                                    observer_for_callback.borrow_mut().take()
                                {
                                    observer.disconnect();
                                }
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            *observer_slot.borrow_mut() = Some(observer);
                        }
                        Err(e) => {
                            log::warn!("failed to create intersection observer: {:?}", e);
                            // Without an observer the block would never
                            // reveal; show it instead.
                            visible.set(true);
                        }
                    }
                    Box::new(move || {
                        if let Some(observer) = observer_slot.borrow_mut().take() {
                            observer.disconnect();
                        }
                        drop(callback);
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    cleanup();
                }
            },
            node,
        );
    }
    *visible
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: RevealDirection,
    /// Delay of the reveal transition once the block scrolls into view.
    #[prop_or(0)]
    pub delay_ms: u32,
    /// How far the block starts from its resting position, in px.
    #[prop_or(50.0)]
    pub distance: f64,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), 0.1);

    let hidden_transform = match props.direction {
        RevealDirection::Up => format!("translateY({}px)", props.distance),
        RevealDirection::Down => format!("translateY(-{}px)", props.distance),
        RevealDirection::Left => format!("translateX({}px)", props.distance),
        RevealDirection::Right => format!("translateX(-{}px)", props.distance),
    };
    let style = if revealed {
        format!(
            "opacity: 1; transform: none; transition: opacity 0.6s ease-out, transform 0.6s ease-out; transition-delay: {}ms;",
            props.delay_ms
        )
    } else {
        format!("opacity: 0; transform: {};", hidden_transform)
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
