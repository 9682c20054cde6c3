//! Home page: hero, about, projects, and contact sections.
//!
//! Each section carries an id matching a navbar link, which is what drives
//! active-link highlighting and anchor scrolling.

use leptos::prelude::*;

use crate::components::navbar::handle_anchor_click;
use crate::state::menu::MenuState;
use crate::util::scroll;

/// Home page with the four in-page sections.
#[component]
pub fn HomePage() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let smooth = scroll::on_home_page();

    view! {
        <main>
            <section id="home" class="hero">
                <h1 class="hero__title">"Hi, I'm a software developer."</h1>
                <p class="hero__subtitle">
                    "I build network services, developer tools, and the occasional web thing."
                </p>
                <div class="hero__actions">
                    <a
                        href="#projects"
                        class="btn btn--primary"
                        on:click=move |event| handle_anchor_click(&event, "#projects", menu, smooth)
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="btn"
                        on:click=move |event| handle_anchor_click(&event, "#contact", menu, smooth)
                    >
                        "Get in Touch"
                    </a>
                </div>
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <p>
                    "I spend most of my time on backend and systems work, with a soft spot "
                    "for small, fast tools. This site is a static page with a handful of "
                    "progressive behaviors layered on top."
                </p>
            </section>

            <section id="projects" class="projects">
                <h2>"Projects"</h2>
                <div class="projects__grid">
                    <article class="project-card">
                        <h3>"collab-whiteboard"</h3>
                        <p>"Real-time shared whiteboard with presence and chat."</p>
                    </article>
                    <article class="project-card">
                        <h3>"tracewalk"</h3>
                        <p>"CLI for replaying and diffing recorded service traces."</p>
                    </article>
                    <article class="project-card">
                        <h3>"shelfdb"</h3>
                        <p>"Tiny embedded key-value store with snapshot isolation."</p>
                    </article>
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p>
                    "Want to work together? "
                    <a href="mailto:hello@example.dev">"hello@example.dev"</a>
                </p>
            </section>
        </main>
    }
}
