use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DiagonalCircularButtonProps {
    pub children: Children,
    pub icon: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

/// Call-to-action button whose icon slides out diagonally while hovered.
#[function_component(DiagonalCircularButton)]
pub fn diagonal_circular_button(props: &DiagonalCircularButtonProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(onclick) = onclick.as_ref() {
                onclick.emit(());
            }
        })
    };

    html! {
        <button
            class={classes!("diagonal-button", props.class.clone())}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <style>
                {r#"
                    .diagonal-button {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        border: none;
                        border-radius: 8px;
                        padding: 12px 24px;
                        font-size: 14px;
                        font-weight: 500;
                        color: #fff;
                        background: #6366f1;
                        cursor: pointer;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.2);
                        transition: background 0.3s ease;
                    }
                    .diagonal-button:hover {
                        background: #8a74fc;
                    }
                    .diagonal-button.full-width {
                        width: 100%;
                        justify-content: center;
                    }
                    .diagonal-icon {
                        position: relative;
                        width: 20px;
                        height: 20px;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .diagonal-icon > span {
                        position: absolute;
                        display: flex;
                    }
                    .diagonal-icon > span.diagonal-circle {
                        animation: diagonalCircle 0.6s ease-in-out;
                    }
                    @keyframes diagonalCircle {
                        0% { transform: translate(0, 0); opacity: 1; }
                        45% { transform: translate(120%, -120%); opacity: 0; }
                        55% { transform: translate(-120%, 120%); opacity: 0; }
                        100% { transform: translate(0, 0); opacity: 1; }
                    }
                "#}
            </style>
            <span>{ for props.children.iter() }</span>
            <span class="diagonal-icon">
                <span class={classes!((*hovered).then(|| "diagonal-circle"))}>
                    { props.icon.clone() }
                </span>
            </span>
        </button>
    }
}

/// Up-right arrow used by the call-to-action buttons.
pub fn arrow_up_right_icon() -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M7 17 17 7" />
            <path d="M7 7h10v10" />
        </svg>
    }
}
