use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" role="contentinfo">
            <p>{"@2025 Knowvel Inc."}</p>
            <style>
                {r#"
                .site-footer {
                    background: #1a1a1a;
                    color: #6b7280;
                    padding: 1rem;
                    text-align: center;
                    font-size: 0.6rem;
                }
                "#}
            </style>
        </footer>
    }
}
