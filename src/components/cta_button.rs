use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub text: String,
    pub href: String,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Primary => "cta-button-primary",
        ButtonVariant::Secondary => "cta-button-secondary",
    };
    let size_class = match props.size {
        ButtonSize::Small => "cta-button-sm",
        ButtonSize::Medium => "cta-button-md",
        ButtonSize::Large => "cta-button-lg",
    };

    html! {
        <a class={classes!("cta-button", variant_class, size_class)} href={props.href.clone()}>
            {&props.text}
        </a>
    }
}
