use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon" aria-hidden="true">
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                    </svg>
                </span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faqs: Vec<FaqEntry>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    html! {
        <section class="faq-section" aria-labelledby="faq-section-title">
            <div class="faq-container">
                <Reveal animation="fade">
                    <h2 id="faq-section-title" class="section-title">
                        {"よくある質問"}
                    </h2>
                </Reveal>

                <div class="faq-list">
                    { for props.faqs.iter().enumerate().map(|(index, entry)| html! {
                        <Reveal animation="fade" delay={stagger_delay(index)} key={entry.question}>
                            <FaqItem entry={entry.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    background: #edf8ff;
                    padding: 3rem 1rem;
                }

                .faq-container {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-list > div + div {
                    margin-top: 0.75rem;
                }

                .faq-item {
                    background: #fff;
                    border-left: 4px solid #3791e2;
                    border-radius: 12px;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .faq-item:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.12);
                }

                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 0.95rem;
                    font-weight: 600;
                    color: #111827;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    min-height: 44px;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: #f9fafb;
                }

                .question-text {
                    padding-right: 1rem;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    width: 1rem;
                    height: 1rem;
                    color: #6b7280;
                    transition: transform 0.3s ease;
                }

                .toggle-icon svg {
                    width: 100%;
                    height: 100%;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out;
                    background: linear-gradient(135deg, rgba(237, 248, 255, 0.3), #fff);
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0.5rem 1.5rem 1rem;
                }

                .faq-answer p {
                    color: #374151;
                    font-size: 0.9rem;
                    line-height: 1.8;
                }
                "#}
            </style>
        </section>
    }
}
