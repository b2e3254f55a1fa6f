use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

/// Composes the `mailto:` URL the form hands off to. Subject and body are
/// percent-encoded so the platform mail client receives the line breaks
/// intact.
pub fn build_mailto(recipient: &str, name: &str, company: &str, email: &str, message: &str) -> String {
    let subject_raw = format!("【お問合せ】{} - {}様より", company, name);
    let subject = urlencoding::encode(&subject_raw);
    let body_raw = format!(
        "お名前: {}\n会社名: {}\nメールアドレス: {}\n\nお問合せ内容:\n{}",
        name, company, email, message
    );
    let body = urlencoding::encode(&body_raw);
    format!("mailto:{}?subject={}&body={}", recipient, subject, body)
}

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let name = use_state(String::new);
    let company = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let company = company.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mailto = build_mailto(config::CONTACT_EMAIL, &name, &company, &email, &message);
            info!("Handing contact form off to the mail client");

            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&mailto);
            }

            status.set(Some("メールソフトを起動しています…".to_string()));
            let status = status.clone();
            let timeout = Timeout::new(4_000, move || {
                status.set(None);
            });
            timeout.forget();
        })
    };

    html! {
        <section id="cta" class="cta-section" aria-labelledby="cta-section-title">
            <div class="cta-container">
                <Reveal animation="fade">
                    <h2 id="cta-section-title" class="section-title">
                        {"お問合せ"}
                    </h2>
                </Reveal>

                <Reveal animation="fade" delay={0.2}>
                    <form class="contact-form" {onsubmit} aria-label="お問合せフォーム">
                        {
                            if let Some(status_message) = (*status).as_ref() {
                                html! { <p class="form-status">{status_message}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="form-field">
                            <label for="name">{"お名前 "}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="text"
                                id="name"
                                placeholder="山田 太郎"
                                required=true
                                value={(*name).clone()}
                                onchange={let name = name.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field">
                            <label for="company">{"会社名 "}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="text"
                                id="company"
                                placeholder="株式会社〇〇"
                                required=true
                                value={(*company).clone()}
                                onchange={let company = company.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    company.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">{"メールアドレス "}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="email"
                                id="email"
                                placeholder="example@company.com"
                                required=true
                                value={(*email).clone()}
                                onchange={let email = email.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field">
                            <label for="message">{"お問合せ内容 "}<span class="required-mark">{"*"}</span></label>
                            <textarea
                                id="message"
                                rows="3"
                                placeholder="お問合せ内容をご記入ください"
                                required=true
                                value={(*message).clone()}
                                onchange={let message = message.clone(); move |e: Event| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-submit">
                            <button type="submit" aria-label="お問合せを送信">{"送信する"}</button>
                        </div>
                    </form>
                </Reveal>
            </div>
            <style>
                {r#"
                .cta-section {
                    background: #fff;
                    padding: 3rem 1rem;
                }

                .cta-container {
                    max-width: 100%;
                    margin: 0 auto;
                }

                @media (min-width: 640px) {
                    .cta-container {
                        max-width: 640px;
                    }
                }

                .contact-form {
                    background: linear-gradient(135deg, rgba(237, 248, 255, 0.3), #fff);
                    border: 2px solid rgba(55, 145, 226, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.1);
                }

                .form-status {
                    color: #3791e2;
                    font-weight: 600;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .form-field {
                    margin-bottom: 1rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.4rem;
                }

                .required-mark {
                    color: #ef4444;
                }

                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    box-sizing: border-box;
                }

                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #3791e2;
                }

                .form-field textarea {
                    resize: none;
                }

                .form-submit {
                    display: flex;
                    justify-content: center;
                }

                .form-submit button {
                    background: #f97d0b;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 2.5rem;
                    min-height: 36px;
                    cursor: pointer;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.12);
                    transition: background 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
                }

                .form-submit button:hover {
                    background: #e06d00;
                    transform: scale(1.02);
                    box-shadow: 0 8px 18px rgba(0, 0, 0, 0.16);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_targets_the_contact_address() {
        let url = build_mailto(config::CONTACT_EMAIL, "山田 太郎", "株式会社テスト", "taro@example.com", "資料請求");
        assert!(url.starts_with(&format!("mailto:{}?subject=", config::CONTACT_EMAIL)));
    }

    #[test]
    fn mailto_subject_names_company_and_sender() {
        let url = build_mailto("contact@example.com", "山田", "テスト社", "a@b.c", "hi");
        let subject = urlencoding::encode("【お問合せ】テスト社 - 山田様より");
        assert!(url.contains(&format!("subject={}", subject)));
    }

    #[test]
    fn mailto_body_carries_all_fields_with_encoded_line_breaks() {
        let url = build_mailto("contact@example.com", "山田", "テスト社", "a@b.c", "二行目も\nあります");
        assert!(!url.contains('\n'));
        assert!(url.contains("%0A"));
        assert!(url.contains(&urlencoding::encode("山田").into_owned()));
        assert!(url.contains(&urlencoding::encode("テスト社").into_owned()));
        assert!(url.contains("a%40b.c"));
        assert!(url.contains(&urlencoding::encode("あります").into_owned()));
    }
}
