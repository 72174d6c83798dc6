use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_window_scroll;

use super::ThemeContext;

static NAV_ITEMS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#cp", "Competitive Programming"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);

    // The bar picks up a backdrop once the page is scrolled past the hero
    // fold threshold.
    #[cfg(feature = "hydrate")]
    let scrolled = {
        let (_, y) = use_window_scroll();
        Signal::derive(move || y() > 50.0)
    };
    #[cfg(not(feature = "hydrate"))]
    let scrolled = Signal::derive(|| false);

    let bar_class = move || {
        let palette = ctx.theme.get().palette();
        if scrolled() {
            format!(
                "fixed top-0 w-full z-40 transition-all duration-300 bg-black/95 backdrop-blur-md border-b {}",
                palette.border
            )
        } else {
            "fixed top-0 w-full z-40 transition-all duration-300".to_string()
        }
    };
    let link_class = move || {
        let palette = ctx.theme.get().palette();
        format!(
            "text-white/80 {} transition-colors duration-200 relative group",
            palette.hover
        )
    };
    let icon_button_class = move || {
        let palette = ctx.theme.get().palette();
        format!(
            "{} {} {} border {} p-2 rounded-md transition-colors duration-200",
            palette.primary, palette.hover, palette.hover_bg, palette.border
        )
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between py-4">
                    <a
                        href="#top"
                        class=move || {
                            format!(
                                "text-2xl font-bold bg-gradient-to-r {} bg-clip-text text-transparent",
                                ctx.theme.get().palette().heading_gradient,
                            )
                        }
                    >
                        "Absar Ali"
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a href=*href class=link_class>
                                        {*label}
                                        <span class=move || {
                                            format!(
                                                "absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r {} group-hover:w-full transition-all duration-300",
                                                ctx.theme.get().palette().button_gradient,
                                            )
                                        }></span>
                                    </a>
                                }
                            })
                            .collect_view()}

                        <div class="flex items-center space-x-4 ml-8">
                            <button
                                class=icon_button_class
                                aria-label="Switch theme"
                                on:click=move |_| ctx.toggle()
                            >
                                {move || ctx.theme.get().toggle_glyph()}
                            </button>
                            <a
                                href="https://github.com/Absar-ao4"
                                target="_blank"
                                rel="noopener noreferrer"
                                class=icon_button_class
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://www.linkedin.com/in/watching-absar-ali/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class=icon_button_class
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a href="#contact" class=icon_button_class aria-label="Contact section">
                                "✉"
                            </a>
                        </div>
                    </div>

                    // Mobile menu button
                    <button
                        class=move || format!("md:hidden {}", icon_button_class())
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile links
                <Show when=menu_open>
                    <div class=move || {
                        format!(
                            "md:hidden bg-black/95 backdrop-blur-md border-t {}",
                            ctx.theme.get().palette().border,
                        )
                    }>
                        <div class="px-2 pt-2 pb-3 space-y-1">
                            {NAV_ITEMS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class=move || {
                                                format!(
                                                    "block w-full text-left px-3 py-2 text-white/80 {} transition-colors duration-200",
                                                    ctx.theme.get().palette().hover,
                                                )
                                            }
                                            on:click=move |_| set_menu_open(false)
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
