use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{ATTENTION_DELAY_MS, VIBRATE_INTERVAL_MS};
use crate::hooks::{use_attention, use_outside_interaction, use_theme};
use crate::state::attention::AttentionTiming;

const AVATAR_URL: &str = "https://images.unsplash.com/photo-1557315360-6a350ab4eccd?fm=jpg&q=60&w=3000&ixlib=rb-4.0.3";

#[derive(Properties, PartialEq)]
pub struct ProfileSidebarProps {
    /// Milliseconds before the collapsed bar starts to shake.
    #[prop_or(ATTENTION_DELAY_MS)]
    pub delay: u32,
    /// Milliseconds between two shakes.
    #[prop_or(VIBRATE_INTERVAL_MS)]
    pub vibrate_interval: u32,
}

#[function_component(ProfileSidebar)]
pub fn profile_sidebar(props: &ProfileSidebarProps) -> Html {
    let attention = use_attention(AttentionTiming {
        delay_ms: props.delay,
        vibrate_interval_ms: props.vibrate_interval,
    });
    let snapshot = attention.snapshot;
    let popup_ref = use_node_ref();
    let (theme, toggle_theme) = use_theme();

    use_outside_interaction(
        snapshot.is_expanded(),
        vec![popup_ref.clone()],
        attention.collapse.clone(),
        None,
    );

    let expand = attention.expand.reform(|_: MouseEvent| ());
    let collapse = attention.collapse.reform(|_: MouseEvent| ());
    let toggle_theme = toggle_theme.reform(|_: MouseEvent| ());

    html! {
        <>
            <style>
                {r#"
                    .attention-bar {
                        position: fixed;
                        right: 20px;
                        top: 80px;
                        z-index: 40;
                    }
                    .attention-bar.vibrating {
                        animation: vibrate 0.5s ease-in-out;
                    }
                    .attention-handle {
                        cursor: pointer;
                        padding: 8px 4px;
                        border-radius: 6px 0 0 6px;
                        border: 1px solid rgba(34, 197, 94, 0.2);
                        border-right: none;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        transition: transform 0.2s ease;
                    }
                    .attention-handle:hover {
                        transform: translateX(-2px);
                    }
                    .attention-handle > div {
                        width: 4px;
                        height: 48px;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom, #b1fdcf, #0bc572);
                    }
                    .profile-panel {
                        position: fixed;
                        right: 20px;
                        top: 80px;
                        z-index: 40;
                        width: 256px;
                        padding: 16px;
                        border-radius: 12px;
                        border: 1px solid rgba(55, 65, 81, 0.3);
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                        animation: panelIn 0.35s cubic-bezier(0.2, 1.1, 0.4, 1);
                    }
                    .profile-panel-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 16px;
                    }
                    .profile-panel h5,
                    .profile-panel h6 {
                        margin: 0;
                        color: #fff;
                        font-size: 14px;
                        font-weight: 500;
                    }
                    .profile-close {
                        padding: 4px;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: #9ca3af;
                        cursor: pointer;
                    }
                    .profile-close:hover {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .profile-card {
                        padding: 12px;
                        margin-bottom: 16px;
                        border-radius: 8px;
                        background: rgba(255, 255, 255, 0.05);
                        transition: background 0.2s ease;
                    }
                    .profile-card:last-child {
                        margin-bottom: 0;
                    }
                    .profile-card:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .profile-identity {
                        display: flex;
                        gap: 12px;
                        align-items: center;
                    }
                    .profile-identity img {
                        width: 32px;
                        height: 32px;
                        border-radius: 9999px;
                        object-fit: cover;
                    }
                    .profile-role {
                        margin: 0;
                        color: #9ca3af;
                        font-size: 12px;
                    }
                    .mode-title {
                        margin: 0 0 8px;
                        color: #fff;
                        font-size: 14px;
                        font-weight: 500;
                    }
                    .mode-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #d1d5db;
                        font-size: 12px;
                    }
                    .theme-switch {
                        position: relative;
                        width: 32px;
                        height: 16px;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(34, 197, 94, 0.3);
                        cursor: pointer;
                    }
                    .theme-switch-knob {
                        position: absolute;
                        left: 2px;
                        top: 2px;
                        width: 12px;
                        height: 12px;
                        border-radius: 9999px;
                        background: #4ade80;
                        transition: transform 0.2s ease;
                    }
                    .theme-switch-knob.light {
                        transform: translateX(16px);
                    }
                    @keyframes vibrate {
                        0%, 100% { transform: translateX(0); }
                        25% { transform: translateX(-3px); }
                        50% { transform: translateX(3px); }
                        75% { transform: translateX(-3px); }
                    }
                    @keyframes panelIn {
                        from { opacity: 0; transform: translateX(100px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>

            if !snapshot.is_expanded() {
                // Keyed on the pulse count so every pulse replays the shake.
                <div
                    key={snapshot.pulse.to_string()}
                    class={classes!("attention-bar", snapshot.is_vibrating().then(|| "vibrating"))}
                >
                    <div class="attention-handle" onclick={expand}>
                        <div></div>
                    </div>
                </div>
            } else {
                <div ref={popup_ref} class="profile-panel">
                    <div class="profile-panel-header">
                        <h5>{"Profile"}</h5>
                        <button class="profile-close" aria-label="Close profile" onclick={collapse}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" fill="currentColor" viewBox="0 0 16 16">
                                <path d="M2.146 2.854a.5.5 0 1 1 .708-.708L8 7.293l5.146-5.147a.5.5 0 0 1 .708.708L8.707 8l5.147 5.146a.5.5 0 0 1-.708.708L8 8.707l-5.146 5.147a.5.5 0 0 1-.708-.708L7.293 8 2.146 2.854Z" />
                            </svg>
                        </button>
                    </div>

                    <div class="profile-card">
                        <div class="profile-identity">
                            <img src={AVATAR_URL} alt="Profile picture" />
                            <div>
                                <h6>{"Marian Akter Suchi"}</h6>
                                <p class="profile-role">{"Designer"}</p>
                            </div>
                        </div>
                    </div>

                    <div class="profile-card">
                        <p class="mode-title">{"Mode"}</p>
                        <div class="mode-row">
                            <span>{ theme.label() }</span>
                            <button
                                class="theme-switch"
                                aria-label="Toggle theme"
                                aria-pressed={theme.is_dark().to_string()}
                                onclick={toggle_theme}
                            >
                                <div class={classes!("theme-switch-knob", (!theme.is_dark()).then(|| "light"))}></div>
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
