use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};

#[derive(Clone, PartialEq)]
pub struct Achievement {
    pub program_name: &'static str,
    pub year: &'static str,
    pub logo_src: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
struct LogoProps {
    achievement: Achievement,
}

/// Logo image with a fallback badge when the asset fails to load.
#[function_component(AchievementLogo)]
fn achievement_logo(props: &LogoProps) -> Html {
    let image_failed = use_state(|| false);

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let inner = if *image_failed {
        html! {
            <svg class="achievement-fallback" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                    d="M12 15a7 7 0 100-14 7 7 0 000 14zm0 0v8m0 0l-3-3m3 3l3-3" />
            </svg>
        }
    } else {
        html! {
            <img
                src={props.achievement.logo_src}
                alt={props.achievement.program_name}
                loading="lazy"
                {onerror}
            />
        }
    };

    match props.achievement.link {
        Some(link) => html! {
            <a
                class="achievement-logo"
                href={link}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("{}のウェブサイトを開く", props.achievement.program_name)}
            >
                { inner }
            </a>
        },
        None => html! {
            <div class="achievement-logo" role="img" aria-label={format!("{}のロゴ", props.achievement.program_name)}>
                { inner }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AchievementsProps {
    pub achievements: Vec<Achievement>,
}

#[function_component(AchievementsSection)]
pub fn achievements_section(props: &AchievementsProps) -> Html {
    html! {
        <section class="achievements-section" aria-labelledby="achievements-section-title">
            <div class="section-container">
                <Reveal animation="fade">
                    <h2 id="achievements-section-title" class="section-title">
                        {"実績・採択プログラム"}
                    </h2>
                </Reveal>

                <div class="achievements-list">
                    { for props.achievements.iter().enumerate().map(|(index, achievement)| html! {
                        <Reveal animation="fade" delay={stagger_delay(index)} key={achievement.program_name}>
                            <div class="achievement-card">
                                <AchievementLogo achievement={achievement.clone()} />
                                <div class="achievement-year">
                                    <span>{achievement.year}</span>
                                </div>
                                <p class="achievement-name">{achievement.program_name}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .achievements-section {
                    background: #edf8ff;
                    padding: 3rem 1rem;
                }

                .achievements-list {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .achievement-card {
                    background: #fff;
                    border-radius: 8px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                    display: flex;
                    flex-direction: column;
                    max-width: 28rem;
                }

                .achievement-card:hover {
                    box-shadow: 0 14px 28px rgba(0, 0, 0, 0.14);
                    transform: translateY(-4px);
                }

                .achievement-logo {
                    width: 100%;
                    height: 6rem;
                    margin: 0 auto 0.5rem;
                    background: #f3f4f6;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                a.achievement-logo {
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                a.achievement-logo:hover {
                    background: #e5e7eb;
                }

                .achievement-logo img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 0.5rem;
                }

                .achievement-fallback {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: #f97d0b;
                }

                .achievement-year {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 0.5rem;
                }

                .achievement-year span {
                    background: #3791e2;
                    color: #fff;
                    font-size: 0.7rem;
                    font-weight: 600;
                    padding: 0.15rem 0.75rem;
                    border-radius: 999px;
                }

                .achievement-name {
                    font-size: 0.85rem;
                    font-weight: 700;
                    color: #111827;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}
