use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_window_scroll;

use super::ThemeContext;

/// Decorative animated backdrop: a slow-panning grid plus blurred orbs.
/// Pure CSS animation, no per-frame work.
#[component]
pub fn BackgroundAnimation() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let grid_class = move || {
        if ctx.theme.get() == crate::theme::Theme::Starwars {
            "bg-grid bg-grid-starwars"
        } else {
            "bg-grid bg-grid-cyberpunk"
        }
    };

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class=grid_class></div>
            <div class="bg-orb bg-orb-drift-a top-1/4 -left-20 w-40 h-40 bg-cyan-500/5"></div>
            <div class="bg-orb bg-orb-drift-b bottom-1/4 -right-20 w-60 h-60 bg-purple-500/5"></div>
            <div class="bg-orb bg-orb-drift-a top-2/3 left-1/3 w-52 h-52 bg-pink-500/5"></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
const PROGRESS_RING_CIRCUMFERENCE: f64 = 125.66;

#[cfg(feature = "hydrate")]
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let progress = Memo::new(move |_| {
        let page_height = document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let scrollable = (page_height - viewport).max(1.0);
        (y() / scrollable).clamp(0.0, 1.0)
    });
    let percent = move || format!("{}%", (progress() * 100.0).round() as i32);

    view! {
        <div
            class="fixed top-0 left-0 h-1 bg-gradient-to-r from-cyan-400 via-purple-500 to-pink-500 z-50"
            style=move || format!("width: {}%", progress() * 100.0)
        ></div>
        <Show when=move || y() > 50.0>
            <div class="fixed top-6 right-6 z-50 bg-black/80 backdrop-blur-md border border-cyan-500/30 rounded-full p-3">
                <div class="relative w-12 h-12">
                    <svg class="w-12 h-12 -rotate-90" viewBox="0 0 48 48">
                        <circle
                            cx="24"
                            cy="24"
                            r="20"
                            fill="none"
                            stroke="rgba(56, 189, 248, 0.2)"
                            stroke-width="3"
                        />
                        <circle
                            cx="24"
                            cy="24"
                            r="20"
                            fill="none"
                            stroke="url(#progressGradient)"
                            stroke-width="3"
                            stroke-linecap="round"
                            style=move || {
                                format!(
                                    "stroke-dasharray: {} {PROGRESS_RING_CIRCUMFERENCE};",
                                    progress() * PROGRESS_RING_CIRCUMFERENCE,
                                )
                            }
                        />
                        <defs>
                            <linearGradient id="progressGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color="#06b6d4" />
                                <stop offset="50%" stop-color="#8b5cf6" />
                                <stop offset="100%" stop-color="#ec4899" />
                            </linearGradient>
                        </defs>
                    </svg>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <span class="text-xs font-semibold text-cyan-400">{percent}</span>
                    </div>
                </div>
            </div>
        </Show>
    }
}

// Progress tracking needs the browser; the server renders an empty bar.
#[cfg(not(feature = "hydrate"))]
#[component]
pub fn ScrollProgress() -> impl IntoView {
    view! {
        <div class="fixed top-0 left-0 h-1 bg-gradient-to-r from-cyan-400 via-purple-500 to-pink-500 z-50 w-0"></div>
    }
}
