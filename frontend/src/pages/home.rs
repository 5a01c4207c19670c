use yew::prelude::*;

use crate::components::{
    background::BackgroundGradient,
    hero::Hero,
    navbar::Navbar,
    profile_sidebar::ProfileSidebar,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #fff;
                        background: #0f0e13;
                    }
                    html.light body {
                        color: #18181b;
                        background: #f7f7fb;
                    }
                    .landing-main {
                        position: relative;
                        z-index: 10;
                        min-height: 200vh;
                    }
                "#}
            </style>
            <BackgroundGradient />
            <Navbar />
            <main class="landing-main">
                <Hero />
            </main>
            <ProfileSidebar />
        </>
    }
}
