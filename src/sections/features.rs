use yew::prelude::*;

use crate::components::reveal::{Reveal, StaggerReveal};

#[derive(Clone, PartialEq)]
pub struct Feature {
    pub icon_src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub training_company: &'static str,
    pub existing_lms: &'static str,
    pub skillon: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub features: Vec<Feature>,
    pub comparison: Vec<ComparisonRow>,
}

#[function_component(FeaturesSection)]
pub fn features_section(props: &FeaturesProps) -> Html {
    html! {
        <section class="features-section" aria-labelledby="features-section-title">
            <div class="section-container">
                <Reveal animation="fade">
                    <h2 id="features-section-title" class="section-title">
                        {"SkillONの主な特徴"}
                    </h2>
                </Reveal>

                <StaggerReveal animation="slide-up" class="features-grid" item_class="feature-slot">
                    { for props.features.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon" aria-hidden="true">
                                <img src={feature.icon_src} alt="" />
                            </div>
                            <div class="feature-text">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </StaggerReveal>

                <Reveal animation="slide-up" delay={0.4}>
                    <div class="comparison-panel">
                        <h3>{"他社との違い"}</h3>
                        <div class="comparison-scroll">
                            <table class="comparison-table">
                                <thead>
                                    <tr>
                                        <th>{"項目"}</th>
                                        <th>{"研修動画制作会社"}</th>
                                        <th>{"既存LMS"}</th>
                                        <th class="skillon-head">{"SkillON"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.comparison.iter().enumerate().map(|(index, row)| {
                                        let row_class = if index % 2 == 0 { "row-even" } else { "row-odd" };
                                        html! {
                                            <tr class={row_class}>
                                                <td class="row-label">{row.feature}</td>
                                                <td>{row.training_company}</td>
                                                <td>{row.existing_lms}</td>
                                                <td class="skillon-cell">{row.skillon}</td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .features-section {
                    background: #fff;
                    padding: 3rem 0;
                }

                .features-grid {
                    display: flex;
                    flex-direction: column;
                    align-items: stretch;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .feature-slot {
                    flex: 1;
                    min-width: 0;
                    display: flex;
                }

                .feature-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 0.75rem;
                    flex: 1;
                }

                .feature-card:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.1);
                    transform: translateY(-8px);
                }

                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .feature-icon img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }

                .feature-text h3 {
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.25rem;
                    text-align: left;
                }

                .feature-text p {
                    color: #4b5563;
                    line-height: 1.7;
                    font-size: 0.9rem;
                    text-align: left;
                }

                .comparison-panel {
                    background: #edf8ff;
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .comparison-panel h3 {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #3791e2;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .comparison-scroll {
                    overflow-x: auto;
                }

                .comparison-table {
                    min-width: 100%;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    overflow: hidden;
                    border-collapse: collapse;
                    font-size: 0.8rem;
                }

                .comparison-table th {
                    background: #3791e2;
                    color: #fff;
                    padding: 0.75rem 1rem;
                    text-align: center;
                    font-weight: 600;
                    white-space: nowrap;
                }

                .comparison-table th.skillon-head {
                    background: #f97d0b;
                }

                .comparison-table td {
                    padding: 0.75rem 1rem;
                    text-align: center;
                    color: #374151;
                    border-bottom: 1px solid #e5e7eb;
                }

                .comparison-table td.row-label {
                    font-weight: 600;
                    color: #111827;
                    white-space: nowrap;
                }

                .comparison-table td.skillon-cell {
                    background: #fff5e6;
                    color: #111827;
                    font-weight: 600;
                }

                .comparison-table tr.row-even {
                    background: #f9fafb;
                }

                .comparison-table tr.row-odd {
                    background: #fff;
                }

                @media (min-width: 640px) {
                    .features-grid {
                        flex-direction: row;
                    }

                    .feature-card {
                        flex-direction: column;
                        align-items: center;
                    }

                    .feature-icon {
                        width: 7rem;
                        height: 7rem;
                        margin-bottom: 0.5rem;
                    }

                    .feature-text h3 {
                        text-align: center;
                        margin-bottom: 0.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
