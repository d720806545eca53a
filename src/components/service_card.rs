use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    /// Font Awesome icon classes, e.g. "fas fa-file-medical".
    pub icon: AttrValue,
    /// Accent class suffix: blue, purple, green or red.
    pub accent: AttrValue,
    /// External app this card links out to. Cards without an href must
    /// provide `on_select` instead.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub on_select: Option<Callback<()>>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let body = html! {
        <div class={classes!("service-card", format!("service-card-{}", props.accent))}>
            <div class="service-card-icon">
                <i class={props.icon.to_string()}></i>
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
            <span class="service-card-action">
                {"Select Service"}
                <i class="fas fa-arrow-up-right-from-square"></i>
            </span>
            <style>
                {r#"
                .service-card {
                    height: 100%;
                    padding: 2rem 1.5rem;
                    border-radius: 20px;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(8px);
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    transition: transform 0.3s ease, border-color 0.3s ease,
                                box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-10px);
                }
                .service-card-icon i {
                    font-size: 2.8rem;
                    transition: transform 0.3s ease;
                }
                .service-card:hover .service-card-icon i {
                    transform: scale(1.1) rotate(-6deg);
                }
                .service-card h3 {
                    margin: 0;
                    font-size: 1.4rem;
                    color: #ffffff;
                }
                .service-card p {
                    margin: 0;
                    flex: 1;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: #8b93a7;
                }
                .service-card-action {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .service-card-blue .service-card-icon i,
                .service-card-blue .service-card-action { color: #3B82F6; }
                .service-card-blue:hover {
                    border-color: rgba(59, 130, 246, 0.5);
                    box-shadow: 0 0 30px rgba(59, 130, 246, 0.2);
                }
                .service-card-purple .service-card-icon i,
                .service-card-purple .service-card-action { color: #8B5CF6; }
                .service-card-purple:hover {
                    border-color: rgba(139, 92, 246, 0.5);
                    box-shadow: 0 0 30px rgba(139, 92, 246, 0.2);
                }
                .service-card-green .service-card-icon i,
                .service-card-green .service-card-action { color: #10B981; }
                .service-card-green:hover {
                    border-color: rgba(16, 185, 129, 0.5);
                    box-shadow: 0 0 30px rgba(16, 185, 129, 0.2);
                }
                .service-card-red .service-card-icon i,
                .service-card-red .service-card-action { color: #EF4444; }
                .service-card-red:hover {
                    border-color: rgba(239, 68, 68, 0.5);
                    box-shadow: 0 0 30px rgba(239, 68, 68, 0.2);
                }
                "#}
            </style>
        </div>
    };

    match (&props.href, &props.on_select) {
        (Some(href), _) => html! {
            <a
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="service-card-link"
            >
                { body }
            </a>
        },
        (None, Some(on_select)) => {
            let on_select = on_select.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(()));
            html! {
                <div class="service-card-link" {onclick}>
                    { body }
                </div>
            }
        }
        (None, None) => body,
    }
}
