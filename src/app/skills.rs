use leptos::prelude::*;

use super::reveal::Reveal;

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
    badge_class: &'static str,
    glow: &'static str,
}

static CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "App Development",
        skills: &["Kotlin", "Jetpack Compose", "Firebase", "Retrofit API", "Figma"],
        badge_class: "bg-purple-500/20 text-purple-300 border-purple-500/30",
        glow: "shadow-purple-500/25",
    },
    SkillCategory {
        title: "Tools & Technologies",
        skills: &["Git", "Docker", "AWS", "Vercel", "Linux", "VS Code"],
        badge_class: "bg-yellow-500/20 text-yellow-300 border-yellow-500/30",
        glow: "shadow-yellow-500/25",
    },
    SkillCategory {
        title: "Competitive Programming",
        skills: &[
            "Data Structures",
            "Algorithms",
            "Dynamic Programming",
            "Graph Theory",
            "Number Theory",
            "Combinatorics",
        ],
        badge_class: "bg-red-500/20 text-red-300 border-red-500/30",
        glow: "shadow-red-500/25",
    },
];

// Decorative glyphs floating behind the cards; positions are fixed rather
// than randomized so server and client render the same markup.
static FLOATING_SYMBOLS: [(&str, &str); 6] = [
    ("</>", "left: 8%; top: 15%;"),
    ("{}", "left: 82%; top: 10%;"),
    ("[]", "left: 20%; top: 75%;"),
    ("()", "left: 70%; top: 65%;"),
    ("&&", "left: 45%; top: 25%;"),
    ("||", "left: 55%; top: 85%;"),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                {FLOATING_SYMBOLS
                    .iter()
                    .enumerate()
                    .map(|(i, (symbol, position))| {
                        view! {
                            <div
                                class=format!(
                                    "absolute text-6xl font-mono text-cyan-400/10 float-slow float-slow-{i}",
                                )
                                style=*position
                            >
                                {*symbol}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Skills & Technologies"
                    </h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "A comprehensive toolkit built through years of competitive programming and full-stack development."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 100>
                                    <div class=format!(
                                        "bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg transition-all duration-300 group {} hover:shadow-lg",
                                        category.glow,
                                    )>
                                        <div class="p-6 pb-3">
                                            <h3 class="text-white text-xl font-semibold group-hover:text-cyan-400 transition-colors duration-300">
                                                {category.title}
                                            </h3>
                                        </div>
                                        <div class="p-6 pt-0">
                                            <div class="flex flex-wrap gap-2">
                                                {category
                                                    .skills
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class=format!(
                                                                "px-2.5 py-0.5 rounded-full text-xs font-semibold border {} hover:scale-105 transition-transform duration-200 cursor-pointer",
                                                                category.badge_class,
                                                            )>{*skill}</span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
