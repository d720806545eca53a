use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::service_card::ServiceCard;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    /// The cardiovascular-risk card opens the embedded dashboard instead of
    /// navigating away.
    pub on_dashboard_click: Callback<()>,
}

struct ServiceEntry {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    accent: &'static str,
    href: Option<&'static str>,
}

fn service_entries() -> [ServiceEntry; 4] {
    [
        ServiceEntry {
            title: "AI Report Analysis",
            description: "Upload your medical reports to get an easy-to-understand breakdown \
                          of the results with AI-powered insights.",
            icon: "fas fa-file-medical",
            accent: "blue",
            href: Some(config::report_analysis_url()),
        },
        ServiceEntry {
            title: "AI Image Analysis",
            description: "Get intelligent insights from your medical images like X-rays, MRIs \
                          and CT scans using advanced computer vision.",
            icon: "fas fa-x-ray",
            accent: "purple",
            href: Some(config::image_analysis_url()),
        },
        ServiceEntry {
            title: "Medical Chatbot",
            description: "Ask health-related questions and get instant, reliable information \
                          from our AI assistant trained on medical knowledge.",
            icon: "fas fa-comment-medical",
            accent: "green",
            href: Some(config::chatbot_url()),
        },
        ServiceEntry {
            title: "Heart Attack Prediction",
            description: "Assess your cardiovascular risk by providing key health metrics to \
                          our predictive AI model for personalized insights.",
            icon: "fas fa-heart-pulse",
            accent: "red",
            href: None,
        },
    ]
}

const TRUST_STATS: [(&str, &str, &str); 4] = [
    ("1000+", "Medical Professionals", "fas fa-user-doctor"),
    ("50000+", "Analyses Completed", "fas fa-chart-line"),
    ("25+", "Countries Served", "fas fa-earth-americas"),
    ("99.2%", "Accuracy Rate", "fas fa-bullseye"),
];

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section class="services">
            <div class="services-inner">
                <div class="services-head">
                    <div class="services-badge">
                        <div class="services-badge-dot"></div>
                        <span>{"AI-Powered Medical Services"}</span>
                    </div>
                    <h2>
                        {"Choose Your "}
                        <span class="services-head-gradient">{"Healthcare Journey"}</span>
                    </h2>
                    <p>
                        {"Select an advanced AI service below to begin your personalized health \
                          analysis. Our platform combines cutting-edge technology with medical \
                          expertise for accurate, accessible healthcare insights."}
                    </p>
                </div>
                <div class="services-grid">
                    { for service_entries().into_iter().enumerate().map(|(index, entry)| {
                        let card = if let Some(href) = entry.href {
                            html! {
                                <ServiceCard
                                    title={entry.title}
                                    description={entry.description}
                                    icon={entry.icon}
                                    accent={entry.accent}
                                    href={Some(AttrValue::from(href))}
                                />
                            }
                        } else {
                            html! {
                                <ServiceCard
                                    title={entry.title}
                                    description={entry.description}
                                    icon={entry.icon}
                                    accent={entry.accent}
                                    on_select={Some(props.on_dashboard_click.clone())}
                                />
                            }
                        };
                        html! {
                            <ScrollReveal delay_ms={(index as u32) * 150}>
                                { card }
                            </ScrollReveal>
                        }
                    }) }
                </div>
                <ScrollReveal class={classes!("trust-reveal")} delay_ms={200}>
                    <div class="trust-band">
                        <h3>{"Trusted by Healthcare Professionals Worldwide"}</h3>
                        <div class="trust-grid">
                            { for TRUST_STATS.iter().enumerate().map(|(index, (value, label, icon))| {
                                html! {
                                    <div class="trust-stat">
                                        <i class={*icon}></i>
                                        <AnimatedCounter
                                            value={*value}
                                            label={*label}
                                            delay_ms={(index as u32) * 100}
                                        />
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </ScrollReveal>
            </div>
            <style>
                {r#"
                .services {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 7rem 1.5rem 5rem;
                }
                .services-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    width: 100%;
                }
                .services-head {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .services-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(59, 130, 246, 0.25);
                }
                .services-badge-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #3B82F6;
                    animation: badge-pulse 2s ease-in-out infinite;
                }
                @keyframes badge-pulse {
                    0%, 100% { box-shadow: 0 0 0 0 rgba(59, 130, 246, 0.5); }
                    50% { box-shadow: 0 0 0 6px rgba(59, 130, 246, 0); }
                }
                .services-head h2 {
                    margin: 0 0 1.5rem;
                    font-size: clamp(2rem, 5vw, 3rem);
                }
                .services-head-gradient {
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .services-head p {
                    margin: 0 auto;
                    max-width: 760px;
                    font-size: 1.05rem;
                    line-height: 1.7;
                    color: #8b93a7;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .service-card-link {
                    display: block;
                    height: 100%;
                    text-decoration: none;
                }
                .trust-band {
                    padding: 2.5rem;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(59, 130, 246, 0.15);
                }
                .trust-band h3 {
                    margin: 0 0 2rem;
                    text-align: center;
                    font-size: 1.5rem;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .trust-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                }
                .trust-stat {
                    text-align: center;
                }
                .trust-stat > i {
                    display: block;
                    font-size: 1.8rem;
                    color: #3B82F6;
                    margin-bottom: 1rem;
                }
                @media (max-width: 768px) {
                    .services {
                        padding-top: 6rem;
                    }
                    .services-grid {
                        gap: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
