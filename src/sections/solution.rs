use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SolutionProps {
    pub concept: String,
    pub highlights: Vec<&'static str>,
    pub before_video_url: Option<&'static str>,
    pub after_video_url: Option<&'static str>,
}

fn video_frame(url: Option<&'static str>, label: &'static str) -> Html {
    match url {
        Some(url) => html! {
            <iframe
                src={url}
                title={label}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen={true}
            />
        },
        None => html! {
            <div class="video-placeholder">{label}</div>
        },
    }
}

#[function_component(SolutionSection)]
pub fn solution_section(props: &SolutionProps) -> Html {
    html! {
        <section class="solution-section" aria-labelledby="solution-section-title">
            <div class="section-container">
                <Reveal animation="fade">
                    <h2 id="solution-section-title" class="section-title">
                        {"その悩み、SkillONで解決できます！"}
                    </h2>
                </Reveal>

                <Reveal animation="slide-up">
                    <div class="solution-body">
                        <p class="solution-concept">{&props.concept}</p>
                        <div class="highlights-row">
                            { for props.highlights.iter().enumerate().map(|(index, highlight)| html! {
                                <div class="highlight-chip">
                                    <span class="highlight-number" aria-hidden="true">{index + 1}</span>
                                    <span class="highlight-text">{*highlight}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>

                <Reveal animation="fade" delay={0.3}>
                    <div class="video-compare">
                        <p class="video-compare-lead">{"スマホで撮影するだけで自動的に研修動画を生成"}</p>
                        <div class="video-compare-row">
                            <div class="video-column">
                                <span class="video-badge video-badge-before">{"撮影した動画"}</span>
                                <div class="video-frame">
                                    { video_frame(props.before_video_url, "撮影した動画") }
                                </div>
                            </div>
                            <div class="video-arrow" aria-hidden="true">{"▶︎"}</div>
                            <div class="video-column">
                                <span class="video-badge video-badge-after">{"研修動画"}</span>
                                <div class="video-frame">
                                    { video_frame(props.after_video_url, "研修動画") }
                                </div>
                            </div>
                        </div>
                        <p class="video-compare-note">
                            {"教材作成の時間を"}
                            <span class="video-compare-stat">{"90%削減"}</span>
                        </p>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .solution-section {
                    background: #edf8ff;
                    padding: 3rem 0;
                }

                .solution-body {
                    max-width: 56rem;
                    margin: 0 auto 1.5rem;
                }

                .solution-concept {
                    color: #374151;
                    line-height: 1.9;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .highlights-row {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: flex-start;
                    justify-content: center;
                }

                .highlight-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.35rem;
                }

                .highlight-number {
                    flex-shrink: 0;
                    width: 16px;
                    height: 16px;
                    background: #3791e2;
                    border-radius: 50%;
                    color: #fff;
                    font-size: 9px;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .highlight-text {
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #1f2937;
                    line-height: 1.4;
                }

                .video-compare {
                    margin-top: 1.5rem;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    max-width: 72rem;
                    margin-left: auto;
                    margin-right: auto;
                }

                .video-compare-lead {
                    text-align: center;
                    font-weight: 700;
                    color: #3791e2;
                    margin-bottom: 1.5rem;
                }

                .video-compare-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .video-column {
                    flex: 1;
                    min-width: 0;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                }

                .video-badge {
                    align-self: center;
                    margin-bottom: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                }

                .video-badge-before {
                    background: #f3f4f6;
                    color: #374151;
                }

                .video-badge-after {
                    background: #3791e2;
                    color: #fff;
                }

                .video-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    background: #e5e7eb;
                    border-radius: 12px;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
                    overflow: hidden;
                }

                .video-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                .video-placeholder {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                }

                .video-arrow {
                    color: #f97d0b;
                    font-size: 1.5rem;
                    font-weight: 700;
                    transform: rotate(90deg);
                    margin: 0.5rem 0;
                }

                .video-compare-note {
                    text-align: center;
                    margin-top: 1.5rem;
                    color: #111827;
                }

                .video-compare-stat {
                    font-weight: 700;
                    color: #f97d0b;
                }

                @media (min-width: 640px) {
                    .highlights-row {
                        flex-direction: row;
                        align-items: flex-start;
                    }

                    .video-compare-row {
                        flex-direction: row;
                    }

                    .video-arrow {
                        transform: rotate(0deg);
                        margin: 0 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
