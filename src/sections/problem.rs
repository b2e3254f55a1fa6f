use yew::prelude::*;

use crate::components::reveal::{Reveal, StaggerReveal};

#[derive(Clone, PartialEq)]
pub struct ProblemItem {
    pub icon_path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ProblemProps {
    pub problems: Vec<ProblemItem>,
    pub social_benefit: String,
}

#[function_component(ProblemSection)]
pub fn problem_section(props: &ProblemProps) -> Html {
    html! {
        <section class="problem-section" aria-labelledby="problem-section-title">
            <div class="section-container">
                <Reveal animation="fade">
                    <h2 id="problem-section-title" class="section-title">
                        {"こんなお悩みありませんか？"}
                    </h2>
                </Reveal>

                <StaggerReveal animation="slide-up" class="problem-grid" item_class="problem-slot">
                    { for props.problems.iter().map(|problem| html! {
                        <div class="problem-card">
                            <div class="problem-icon" aria-hidden="true">
                                <img src={problem.icon_path} alt="" />
                            </div>
                            <div class="problem-text">
                                <h3>{problem.title}</h3>
                                <p>{problem.description}</p>
                            </div>
                        </div>
                    }) }
                </StaggerReveal>

                <Reveal animation="slide-up" delay={0.4}>
                    <div class="benefit-box">
                        <div class="benefit-icon" aria-hidden="true">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
                            </svg>
                        </div>
                        <p>{&props.social_benefit}</p>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .problem-section {
                    background: #fff;
                    padding: 3rem 0;
                }

                .problem-grid {
                    display: flex;
                    flex-direction: column;
                    align-items: stretch;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .problem-slot {
                    flex: 1;
                    min-width: 0;
                    display: flex;
                }

                .problem-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 0.75rem;
                    flex: 1;
                }

                .problem-card:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.1);
                }

                .problem-icon {
                    width: 4rem;
                    height: 4rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .problem-icon img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }

                .problem-text h3 {
                    font-weight: 700;
                    color: #111827;
                    font-size: 1.15rem;
                    margin-bottom: 0.25rem;
                    text-align: left;
                }

                .problem-text p {
                    color: #4b5563;
                    line-height: 1.7;
                    text-align: left;
                }

                .benefit-box {
                    background: linear-gradient(135deg, #edf8ff, rgba(55, 145, 226, 0.05));
                    border: 2px solid rgba(55, 145, 226, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .benefit-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    color: #3791e2;
                }

                .benefit-icon svg {
                    width: 100%;
                    height: 100%;
                }

                .benefit-box p {
                    color: #374151;
                    line-height: 1.8;
                }

                @media (min-width: 640px) {
                    .problem-grid {
                        flex-direction: row;
                    }

                    .problem-card {
                        flex-direction: column;
                        align-items: center;
                    }

                    .problem-icon {
                        width: 7rem;
                        height: 7rem;
                        margin-bottom: 0.5rem;
                    }

                    .problem-text h3 {
                        text-align: center;
                        margin-bottom: 0.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
