use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::magnetic_button::MagneticButton;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::typewriter::TypewriterText;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_get_started: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let typewriter_texts = vec![
        "Deciphered by AI".to_string(),
        "Analyzed Instantly".to_string(),
        "Understood Clearly".to_string(),
        "Empowered by Tech".to_string(),
    ];

    let on_click = {
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| on_get_started.emit(()))
    };

    html! {
        <section class="hero">
            <div class="hero-floaters">
                { for (0..6).map(|i| {
                    let style = format!(
                        "left: {}%; top: {}%; animation-delay: {}ms;",
                        15 + i * 15,
                        20 + i * 10,
                        i * 1200,
                    );
                    html! { <div class="hero-floater" style={style}></div> }
                }) }
            </div>
            <div class="hero-inner">
                <div class="hero-badge">
                    <i class="fas fa-wand-magic-sparkles"></i>
                    <span>{"Powered by Advanced AI Technology"}</span>
                </div>
                <h1 class="hero-heading">
                    {"Your Health, "}
                    <br class="hero-break" />
                    <TypewriterText
                        texts={typewriter_texts}
                        speed_ms={80}
                        start_delay_ms={1500}
                        class={classes!("hero-typewriter")}
                    />
                </h1>
                <p class="hero-subtitle">
                    {"Beyond the sterile gleam of the hospital corridor and the steady rhythm \
                      of the monitor, lies the true heart of medicine: the connection between \
                      a doctor and a patient powered by cutting-edge artificial intelligence."}
                </p>
                <MagneticButton on_click={on_click} strength={0.4}>
                    <i class="fas fa-heart-pulse"></i>
                    {"Begin Your Analysis"}
                    <i class="fas fa-chevron-right"></i>
                </MagneticButton>
                <ScrollReveal class={classes!("hero-stats-reveal")} delay_ms={600}>
                    <div class="hero-stats">
                        <AnimatedCounter value="99.9%" label="Accuracy Rate" delay_ms={0} />
                        <AnimatedCounter value="24/7" label="Availability" delay_ms={200} />
                        <AnimatedCounter value="2s" label="Response Time" delay_ms={400} />
                    </div>
                </ScrollReveal>
            </div>
            <div class="hero-scroll-hint">
                <span>{"Scroll to explore"}</span>
                <div class="hero-scroll-track">
                    <div class="hero-scroll-dot"></div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1.5rem 4rem;
                    text-align: center;
                }
                .hero-floaters {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .hero-floater {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.2);
                    animation: floater-drift 8s ease-in-out infinite;
                }
                @keyframes floater-drift {
                    0%, 100% { transform: translate(0, -20px); opacity: 0; }
                    50% { transform: translate(30px, -100px); opacity: 1; }
                }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 980px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(59, 130, 246, 0.25);
                    backdrop-filter: blur(8px);
                }
                .hero-badge i {
                    color: #3B82F6;
                }
                .hero-heading {
                    margin: 0;
                    font-size: clamp(2.5rem, 8vw, 5.5rem);
                    font-weight: 800;
                    letter-spacing: -0.02em;
                    line-height: 1.05;
                }
                .hero-typewriter {
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6, #06B6D4);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    margin: 0;
                    max-width: 760px;
                    font-size: 1.15rem;
                    font-weight: 300;
                    line-height: 1.8;
                    color: #8b93a7;
                }
                .hero-stats-reveal {
                    width: 100%;
                    padding-top: 2rem;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #8b93a7;
                    font-size: 0.85rem;
                    animation: hint-bob 2s ease-in-out infinite;
                }
                @keyframes hint-bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 5px); }
                }
                .hero-scroll-track {
                    width: 24px;
                    height: 40px;
                    border: 2px solid rgba(59, 130, 246, 0.3);
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                }
                .hero-scroll-dot {
                    width: 4px;
                    height: 12px;
                    margin-top: 8px;
                    border-radius: 2px;
                    background: #3B82F6;
                    animation: dot-fall 1.5s ease-in-out infinite;
                }
                @keyframes dot-fall {
                    0% { transform: translateY(0); opacity: 1; }
                    100% { transform: translateY(12px); opacity: 0; }
                }
                @media (max-width: 768px) {
                    .hero-break {
                        display: none;
                    }
                    .hero-stats {
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
