use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{arrow_up_right_icon, DiagonalCircularButton};
use crate::config::DESKTOP_BREAKPOINT_PX;
use crate::hooks::{use_outside_interaction, use_scrolled};
use crate::state::menu::{BarMode, NavAction, NavItem, NavState};

/// Fixed top bar: logo, links, call-to-action, and a hamburger menu on mobile.
///
/// The bar narrows onto a glass panel once the page is scrolled. The mobile
/// menu closes on a second press of the hamburger, a press outside the menu,
/// the viewport growing to desktop width, or picking a link.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);
    let scrolled = use_scrolled();
    let mode = BarMode::from_scrolled(scrolled);
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();
    let menu_open = nav.menu.is_open();

    {
        let dispatcher = nav.dispatcher();
        use_outside_interaction(
            menu_open,
            vec![menu_ref.clone(), button_ref.clone()],
            Callback::from(move |_: ()| dispatcher.dispatch(NavAction::Close)),
            Some(DESKTOP_BREAKPOINT_PX),
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::Toggle);
        })
    };

    let close_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Close))
    };

    let close_from_cta = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::Close))
    };

    let select = |item: NavItem| {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Select(item)))
    };

    html! {
        <div class="navbar-shell">
            <style>
                {r#"
                    .navbar-shell {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 16px;
                    }
                    .navbar-row {
                        display: flex;
                        justify-content: center;
                        width: 100%;
                    }
                    .navbar {
                        position: relative;
                        overflow: hidden;
                        max-width: 100%;
                        animation: navbarEnter 0.5s ease-out both;
                        transition: width 0.5s cubic-bezier(0.34, 1.2, 0.64, 1);
                    }
                    .navbar-glass,
                    .navbar-glass-mobile {
                        position: absolute;
                        inset: 0;
                        background: #2e2a405c;
                        backdrop-filter: blur(12px);
                    }
                    .navbar-glass {
                        border-radius: 9999px;
                        opacity: 0;
                        transition: opacity 0.4s ease;
                    }
                    .navbar-glass.visible {
                        opacity: 1;
                    }
                    .navbar-glass-mobile {
                        display: none;
                        border-radius: 12px;
                    }
                    .navbar-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 6px 32px;
                    }
                    .navbar-logo {
                        margin: 0;
                        font-size: 24px;
                        font-weight: 700;
                        color: #fff;
                        animation: logoPulse 1.2s ease-in-out 0.7s;
                    }
                    .navbar-logo .accent,
                    .navbar-link.active,
                    .mobile-menu-item.active {
                        color: #6366f1;
                    }
                    .navbar-links {
                        position: relative;
                        border-radius: 9999px;
                        padding: 1px;
                    }
                    .navbar-links-pill {
                        position: absolute;
                        inset: 0;
                        background: #2e2a405c;
                        backdrop-filter: blur(12px);
                        border-radius: 12px;
                        opacity: 0;
                        transform: scale(0.95);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .navbar-links-pill.visible {
                        opacity: 0.8;
                        transform: scale(1);
                    }
                    .navbar-links ul {
                        position: relative;
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        gap: 32px;
                        margin: 0;
                        padding: 12px 40px;
                        list-style: none;
                    }
                    .navbar-link {
                        font-size: 14px;
                        font-weight: 500;
                        color: #fff;
                        cursor: pointer;
                        animation: fadeDown 0.3s ease-out both;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .navbar-link:hover {
                        color: #6366f1;
                        transform: scale(1.01);
                    }
                    .navbar-cta {
                        animation: ctaBob 1.5s ease-in-out 1s;
                    }
                    .navbar-toggle {
                        display: none;
                        align-items: center;
                        justify-content: center;
                        padding: 8px;
                        border: none;
                        border-radius: 12px;
                        background: transparent;
                        color: #fff;
                        cursor: pointer;
                        z-index: 50;
                    }
                    .navbar-toggle:active {
                        transform: scale(0.95);
                    }
                    .navbar-toggle svg {
                        animation: iconSpin 0.2s ease-out;
                    }
                    .mobile-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(15, 14, 19, 0.9);
                        backdrop-filter: blur(4px);
                        animation: fadeIn 0.3s ease-out;
                    }
                    .mobile-menu {
                        position: fixed;
                        top: 64px;
                        right: 16px;
                        z-index: 40;
                        width: 256px;
                        padding: 16px 20px;
                        border-radius: 12px;
                        border: 1px solid #48407080;
                        background: #2e2a405c;
                        backdrop-filter: blur(12px);
                        transform-origin: top right;
                        animation: menuOpen 0.3s ease-out;
                    }
                    .mobile-menu ul {
                        display: flex;
                        flex-direction: column;
                        gap: 20px;
                        margin: 0 0 24px;
                        padding: 0;
                        list-style: none;
                    }
                    .mobile-menu-item {
                        position: relative;
                        padding-left: 16px;
                        font-size: 18px;
                        font-weight: 500;
                        color: #fff;
                        cursor: pointer;
                        animation: fadeRight 0.3s ease-out both;
                    }
                    .active-indicator {
                        position: absolute;
                        left: -21px;
                        top: 10%;
                        width: 2px;
                        height: 80%;
                        background: #6366f1;
                        animation: fadeIn 0.2s ease-out;
                    }
                    @media (max-width: 767px) {
                        .navbar-glass,
                        .navbar-links,
                        .navbar-cta {
                            display: none;
                        }
                        .navbar-glass-mobile,
                        .navbar-toggle {
                            display: flex;
                        }
                        .navbar-content {
                            padding: 6px 20px;
                        }
                    }
                    @media (min-width: 768px) {
                        .mobile-backdrop,
                        .mobile-menu {
                            display: none;
                        }
                    }
                    @keyframes navbarEnter {
                        from { opacity: 0; transform: translateY(-15px) scale(0.97); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                    @keyframes logoPulse {
                        50% { transform: scale(1.03); }
                    }
                    @keyframes ctaBob {
                        50% { transform: translateY(-3px); }
                    }
                    @keyframes fadeDown {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeRight {
                        from { opacity: 0; transform: translateX(-10px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes iconSpin {
                        from { opacity: 0; transform: rotate(-90deg); }
                        to { opacity: 1; transform: rotate(0); }
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-20px) scaleY(0); }
                        to { opacity: 1; transform: translateY(0) scaleY(1); }
                    }
                "#}
            </style>
            <div class="navbar-row">
                <nav
                    class={classes!("navbar", mode.class())}
                    style={format!("width: {}px;", mode.width_px())}
                >
                    <div class={classes!("navbar-glass", mode.shows_glass_panel().then(|| "visible"))}></div>
                    <div class="navbar-glass-mobile"></div>

                    <div class="navbar-content">
                        <h3 class="navbar-logo">
                            {"Ne"}<span class="accent">{"un"}</span>{"o"}
                        </h3>

                        <div class="navbar-links">
                            <div class={classes!("navbar-links-pill", mode.shows_link_pill().then(|| "visible"))}></div>
                            <ul>
                                { for NavItem::ALL.iter().enumerate().map(|(index, item)| html! {
                                    <li
                                        key={item.label()}
                                        class={classes!("navbar-link", (nav.active == *item).then(|| "active"))}
                                        style={format!("animation-delay: {:.2}s;", 0.2 + index as f64 * 0.06)}
                                        onclick={select(*item)}
                                    >
                                        { item.label() }
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="navbar-cta">
                            <DiagonalCircularButton icon={arrow_up_right_icon()}>
                                {"Get started"}
                            </DiagonalCircularButton>
                        </div>

                        <button
                            ref={button_ref}
                            class="navbar-toggle"
                            onclick={toggle_menu}
                            aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                        >
                            if menu_open {
                                { close_icon() }
                            } else {
                                { menu_icon() }
                            }
                        </button>
                    </div>
                </nav>
            </div>

            if menu_open {
                <div class="mobile-backdrop" onclick={close_menu}></div>
                <div ref={menu_ref} class="mobile-menu">
                    <ul>
                        { for NavItem::ALL.iter().enumerate().map(|(index, item)| html! {
                            <li
                                key={item.label()}
                                class={classes!("mobile-menu-item", (nav.active == *item).then(|| "active"))}
                                style={format!("animation-delay: {:.2}s;", 0.1 + index as f64 * 0.05)}
                                onclick={select(*item)}
                            >
                                if nav.active == *item {
                                    <div class="active-indicator"></div>
                                }
                                { item.label() }
                            </li>
                        }) }
                    </ul>
                    <DiagonalCircularButton
                        icon={arrow_up_right_icon()}
                        class={classes!("full-width")}
                        onclick={close_from_cta}
                    >
                        {"Get started"}
                    </DiagonalCircularButton>
                </div>
            }
        </div>
    }
}

fn menu_icon() -> Html {
    html! {
        <svg key="menu" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <line x1="4" y1="6" x2="20" y2="6" />
            <line x1="4" y1="12" x2="20" y2="12" />
            <line x1="4" y1="18" x2="20" y2="18" />
        </svg>
    }
}

fn close_icon() -> Html {
    html! {
        <svg key="close" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}
