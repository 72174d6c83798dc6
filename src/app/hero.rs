use leptos::prelude::*;

use crate::theme::Theme;

use super::ThemeContext;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <section
            id="top"
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-black"
        >
            <HeroRings />

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 relative">
                    "Hi, I'm "
                    <span class="relative inline-block">
                        <span class=move || {
                            format!(
                                "bg-gradient-to-r {} bg-clip-text text-transparent",
                                ctx.theme.get().palette().heading_gradient,
                            )
                        }>"Absar Ali"</span>
                        // Glitch slice only fits the cyberpunk preset
                        <Show when=move || ctx.theme.get() == Theme::Cyberpunk>
                            <span
                                class="glitch-slice absolute inset-0 bg-gradient-to-r from-red-400 via-yellow-400 to-green-400 bg-clip-text text-transparent"
                                aria-hidden="true"
                            >
                                "Absar Ali"
                            </span>
                        </Show>
                    </span>
                    <span
                        class=move || {
                            format!(
                                "absolute -top-2 -right-2 spin-pulse {}",
                                ctx.theme.get().palette().primary,
                            )
                        }
                        aria-hidden="true"
                    >
                        {move || ctx.theme.get().toggle_glyph()}
                    </span>
                </h1>

                <p class="text-xl md:text-2xl text-white/80 mb-8 max-w-3xl mx-auto">
                    "21-year-old "
                    <span
                        class=move || {
                            format!("{} font-semibold glow-text", ctx.theme.get().palette().primary)
                        }
                        style=move || {
                            format!("--glow-color: {}", ctx.theme.get().palette().glow_color)
                        }
                    >
                        "Competitive Programmer"
                    </span>
                    " & "
                    <span
                        class=move || {
                            format!(
                                "{} font-semibold glow-text",
                                ctx.theme.get().palette().secondary,
                            )
                        }
                        style=move || {
                            format!("--glow-color: {}", ctx.theme.get().palette().secondary_glow)
                        }
                    >
                        "Full-Stack Developer"
                    </span>
                    " passionate about solving complex problems and building innovative solutions."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                    <a
                        href="#projects"
                        class=move || {
                            format!(
                                "bg-gradient-to-r {} text-black font-bold px-8 py-3 rounded-md border-2 border-current shadow-lg hover:scale-105 transition-transform duration-200",
                                ctx.theme.get().palette().button_gradient,
                            )
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class=move || {
                            format!(
                                "border-2 border-current {} px-8 py-3 rounded-md bg-transparent backdrop-blur-sm font-bold hover:scale-105 transition-transform duration-200",
                                ctx.theme.get().palette().secondary,
                            )
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    {move || {
                        ctx.theme
                            .get()
                            .palette()
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class=format!(
                                        "bg-black/80 backdrop-blur-sm rounded-lg p-6 border-2 border-white/10 {} shadow-xl hover:scale-105 transition-transform duration-300",
                                        stat.glow,
                                    )>
                                        <h3 class=format!(
                                            "text-2xl font-bold {} mb-2",
                                            stat.color,
                                        )>{stat.number}</h3>
                                        <p class="text-white/80">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div
                    class=move || {
                        format!(
                            "absolute -bottom-16 left-1/2 -translate-x-1/2 bob {}",
                            ctx.theme.get().palette().primary,
                        )
                    }
                    aria-hidden="true"
                >
                    "↓"
                </div>
            </div>
        </section>
    }
}

/// Concentric rotating rings behind the headline; size steps per ring.
#[component]
fn HeroRings() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <div class="absolute inset-0" aria-hidden="true">
            {(0..3)
                .map(|i| {
                    let size = 200 + i * 100;
                    let offset = size / 2;
                    view! {
                        <div
                            class=move || {
                                format!(
                                    "absolute rounded-full border-2 hero-ring hero-ring-{i} {}",
                                    ctx.theme.get().palette().ring_border,
                                )
                            }
                            style=format!(
                                "width: {size}px; height: {size}px; left: 50%; top: 50%; margin-left: -{offset}px; margin-top: -{offset}px;",
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
