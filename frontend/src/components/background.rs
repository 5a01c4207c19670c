use yew::prelude::*;

/// Fixed decorative gradient behind the whole page.
#[function_component(BackgroundGradient)]
pub fn background_gradient() -> Html {
    html! {
        <div class="background-gradient" aria-hidden="true">
            <style>
                {r#"
                    .background-gradient {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(ellipse 60% 45% at 50% 0%, rgba(99, 102, 241, 0.35), transparent 70%),
                            radial-gradient(ellipse 40% 35% at 85% 30%, rgba(11, 197, 114, 0.18), transparent 70%),
                            radial-gradient(ellipse 45% 40% at 10% 60%, rgba(138, 116, 252, 0.15), transparent 70%),
                            #0f0e13;
                    }
                    html.light .background-gradient {
                        background:
                            radial-gradient(ellipse 60% 45% at 50% 0%, rgba(99, 102, 241, 0.18), transparent 70%),
                            radial-gradient(ellipse 40% 35% at 85% 30%, rgba(11, 197, 114, 0.12), transparent 70%),
                            #f7f7fb;
                    }
                    @media (min-width: 768px) {
                        .background-gradient {
                            top: -100px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
