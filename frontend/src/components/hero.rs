use yew::prelude::*;

pub const HERO_IMAGE: &str = "/assets/hero-image.svg";

/// Headline, brand blurb, call-to-action and the dashboard preview.
///
/// The staggered entrance is plain CSS animation with per-element delays.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        padding: 128px 16px 0;
                        overflow: hidden;
                    }
                    .hero-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        animation: heroFade 0.6s ease-out both;
                    }
                    .hero-title {
                        margin: 0;
                        text-align: center;
                        color: var(--text, #fff);
                        animation: heroRise 0.7s ease-out 0.2s both;
                    }
                    .hero-title span {
                        display: block;
                    }
                    .hero-title .lead {
                        font-size: 36px;
                        animation: heroFade 0.5s ease-out 0.3s both;
                    }
                    .hero-title .highlight {
                        display: inline-block;
                        margin: 8px 0;
                        font-size: 56px;
                        font-weight: 600;
                        background: linear-gradient(to right, #b1fdcf, #0bc572);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: heroPop 0.7s cubic-bezier(0.3, 1.4, 0.5, 1) 0.5s both;
                    }
                    .hero-title .tail {
                        font-size: 56px;
                        font-weight: 600;
                        animation: heroFade 0.5s ease-out 0.7s both;
                    }
                    .hero-copy {
                        max-width: 60ch;
                        margin: 32px auto 0;
                        text-align: center;
                        font-size: 16px;
                        animation: heroRise 0.6s ease-out 0.9s both;
                    }
                    .hero-brand {
                        font-weight: 600;
                        animation: brandShift 1.5s ease-in-out 1.1s infinite alternate;
                    }
                    .hero-blurb {
                        color: var(--text-secondary, #a1a1aa);
                        font-weight: 200;
                        letter-spacing: -0.05em;
                    }
                    .hero-cta-row {
                        display: flex;
                        justify-content: center;
                        margin-top: 32px;
                        animation: heroRise 0.6s ease-out 1.2s both;
                    }
                    .hero-cta {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        overflow: hidden;
                        padding: 12px 24px;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(to right, #017340, #0bc572);
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta:active {
                        transform: scale(0.98);
                    }
                    .hero-cta svg {
                        animation: arrowNudge 0.5s ease-in-out infinite alternate;
                    }
                    .hero-preview {
                        position: relative;
                        margin-top: 48px;
                        animation: heroRise 0.8s cubic-bezier(0.3, 1.2, 0.5, 1) 0.7s both;
                    }
                    .hero-preview-glow {
                        position: absolute;
                        inset: -4px;
                        border-radius: 8px;
                        background: linear-gradient(to right, #01734050, #b1fdcf50);
                        filter: blur(12px);
                        animation: glowBreath 3s ease-in-out infinite alternate;
                    }
                    .hero-preview-frame {
                        position: relative;
                        max-width: 896px;
                        margin: 0 auto;
                        transition: transform 0.4s ease;
                    }
                    .hero-preview-frame:hover {
                        transform: scale(1.02);
                    }
                    .hero-preview-frame img {
                        display: block;
                        width: 636px;
                        max-width: 100%;
                        margin: 0 auto;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    @media (min-width: 768px) {
                        .hero-title .lead { font-size: 48px; }
                        .hero-title .highlight,
                        .hero-title .tail { font-size: 72px; }
                        .hero-copy { margin-top: 40px; font-size: 18px; }
                        .hero-preview { margin-top: 64px; }
                    }
                    @keyframes heroFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes heroPop {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes brandShift {
                        from { color: #b1fdcf; }
                        to { color: #01c671; }
                    }
                    @keyframes arrowNudge {
                        from { transform: translateX(-5px); }
                        to { transform: translateX(0); }
                    }
                    @keyframes glowBreath {
                        from { opacity: 0.3; }
                        to { opacity: 0.6; }
                    }
                "#}
            </style>
            <div class="hero-container">
                <h1 class="hero-title">
                    <span class="lead">{"Your Smart,"}</span>
                    <span class="highlight">{"Personalized"}</span>
                    <span class="tail">{"Dashboard"}</span>
                </h1>

                <p class="hero-copy">
                    <span class="hero-brand">{"Neuno"}</span>{" "}
                    <span class="hero-blurb">
                        {"brings everything you need, from weather and tasks to news and your calendar, into a refined, AI-enhanced space that intuitively adapts to your life."}
                    </span>
                </p>

                <div class="hero-cta-row">
                    <button class="hero-cta">
                        <span>{"Get Started"}</span>
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M5 12h14" />
                            <path d="m12 5 7 7-7 7" />
                        </svg>
                    </button>
                </div>

                <div class="hero-preview">
                    <div class="hero-preview-glow"></div>
                    <div class="hero-preview-frame">
                        <img src={HERO_IMAGE} loading="lazy" alt="Hero Image" />
                    </div>
                </div>
            </div>
        </section>
    }
}
