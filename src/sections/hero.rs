use yew::prelude::*;

use crate::components::cta_button::{ButtonSize, ButtonVariant, CtaButton};
use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: Html,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-title">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <Reveal animation="slide-up" class="hero-inner">
                    <h1 id="hero-title">{ props.title.clone() }</h1>
                    <p class="hero-subtitle">{&props.subtitle}</p>
                    <div class="hero-cta-group">
                        <CtaButton
                            text={props.cta_text.clone()}
                            href={props.cta_link.clone()}
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::Large}
                        />
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background-image: url('/images/herogazo.jpeg');
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    padding: 5rem 1.5rem;
                }

                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #fff;
                    line-height: 1.3;
                    margin-bottom: 1.5rem;
                    text-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                }

                .hero-subtitle {
                    font-size: 1.15rem;
                    color: #fff;
                    line-height: 1.8;
                    margin-bottom: 2rem;
                    text-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                }

                .hero-cta-group {
                    display: flex;
                    justify-content: center;
                }

                @media (min-width: 768px) {
                    .hero h1 {
                        font-size: 3.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.3rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
