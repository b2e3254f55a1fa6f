use yew::prelude::*;

use crate::components::cta_button::{ButtonSize, ButtonVariant, CtaButton};
use crate::components::reveal::Reveal;

#[derive(Clone, PartialEq)]
pub struct PartnerInfo {
    pub target: Vec<&'static str>,
    pub fields: Vec<&'static str>,
    pub schedule: &'static str,
    pub conditions: Vec<&'static str>,
}

fn info_icon(name: &str) -> Html {
    let path = match name {
        "target" => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        "fields" => "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        "schedule" => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        _ => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    html! {
        <svg class="info-box-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path.to_string()} />
        </svg>
    }
}

fn info_box(icon: &'static str, title: &'static str, items: Vec<&'static str>, last: bool) -> Html {
    html! {
        <div class={classes!("info-box", (!last).then_some("info-box-divided"))}>
            <div class="info-box-header">
                { info_icon(icon) }
                <h3>{title}</h3>
            </div>
            <ul role="list">
                { for items.iter().map(|item| html! {
                    <li>
                        <span class="info-bullet" aria-hidden="true">{"•"}</span>
                        <span>{*item}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnerProps {
    pub info: PartnerInfo,
}

#[function_component(PartnerSection)]
pub fn partner_section(props: &PartnerProps) -> Html {
    let info = &props.info;

    html! {
        <section class="partner-section" aria-labelledby="partner-section-title">
            <div class="partner-container">
                <Reveal animation="fade">
                    <h2 id="partner-section-title" class="section-title">
                        {"共創パートナー募集"}
                    </h2>
                </Reveal>

                <Reveal animation="fade" delay={0.2}>
                    <div class="partner-panel">
                        { info_box("target", "募集対象", info.target.clone(), false) }
                        { info_box("fields", "募集分野", info.fields.clone(), false) }
                        { info_box("schedule", "PoC時期・スケジュール", vec![info.schedule], false) }
                        { info_box("conditions", "参加条件", info.conditions.clone(), true) }
                    </div>
                </Reveal>

                <Reveal animation="fade" delay={0.8}>
                    <div class="partner-cta">
                        <CtaButton
                            text={"まずは担当者と話す".to_string()}
                            href={"#cta".to_string()}
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::Small}
                        />
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .partner-section {
                    background: #edf8ff;
                    padding: 3rem 1rem;
                }

                .partner-container {
                    max-width: 100%;
                    margin: 0 auto;
                }

                @media (min-width: 640px) {
                    .partner-container {
                        max-width: 640px;
                    }
                }

                .partner-panel {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    margin-bottom: 2.5rem;
                }

                .info-box-divided {
                    padding-bottom: 1rem;
                    border-bottom: 1px solid #e5e7eb;
                    margin-bottom: 1rem;
                }

                .info-box-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 0.75rem;
                }

                .info-box-icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #3791e2;
                    margin-right: 0.75rem;
                    flex-shrink: 0;
                }

                .info-box h3 {
                    font-size: 0.95rem;
                    font-weight: 600;
                    color: #111827;
                }

                .info-box ul {
                    list-style: none;
                    margin-left: 2rem;
                    padding: 0;
                }

                .info-box li {
                    font-size: 0.85rem;
                    color: #374151;
                    display: flex;
                    align-items: flex-start;
                    padding: 0.15rem 0;
                }

                .info-bullet {
                    color: #f97d0b;
                    margin-right: 0.5rem;
                    flex-shrink: 0;
                    line-height: 1.2;
                    margin-top: 0.2rem;
                }

                .partner-cta {
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}
