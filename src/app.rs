mod about;
mod background;
mod competitive;
mod contact_form;
mod experience;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

use about::About;
use background::{BackgroundAnimation, ScrollProgress};
use competitive::CompetitiveProgramming;
use contact_form::Contact;
use experience::Experience;
use hero::Hero;
use nav::Navigation;
use projects::Projects;
use skills::Skills;

/// Read/toggle handle for the active palette, provided at the app root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans theme-cyberpunk">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The stored preference is read once on hydration; the server always
    // renders the default palette.
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    provide_context(ThemeContext { theme, set_theme });

    // Keep the body class in sync so stylesheet rules follow the palette.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(body) = document().body() {
            body.set_class_name(&format!("font-sans {}", theme().body_class()));
        }
    });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Absar Ali - {title}") />

        <Router>
            <div class="min-h-screen bg-black">
                <BackgroundAnimation />
                <ScrollProgress />
                <Navigation />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Skills />
        <CompetitiveProgramming />
        <Projects />
        <Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-white/40 text-sm relative z-10">
            <p>"© 2025 Absar Ali"</p>
            <p class="mt-1">{format!("Site built {}", env!("BUILD_TIME"))}</p>
        </footer>
    }
}
