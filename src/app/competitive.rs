use leptos::prelude::*;

use super::reveal::Reveal;

struct Platform {
    name: &'static str,
    rating: &'static str,
    problems: &'static str,
    rank: &'static str,
    color: &'static str,
    border: &'static str,
}

static PLATFORMS: [Platform; 2] = [
    Platform {
        name: "Codeforces",
        rating: "1100+",
        problems: "350+",
        rank: "newbie",
        color: "text-blue-400",
        border: "border-blue-500/30",
    },
    Platform {
        name: "CodeChef",
        rating: "1450+",
        problems: "60+",
        rank: "2 Star",
        color: "text-yellow-400",
        border: "border-yellow-500/30",
    },
];

struct Achievement {
    title: &'static str,
    description: &'static str,
    glyph: &'static str,
    color: &'static str,
}

static ACHIEVEMENTS: [Achievement; 2] = [
    Achievement {
        title: "CodeChef starters",
        description: "Top 1000 finish multiple times",
        glyph: "🎯",
        color: "text-green-400",
    },
    Achievement {
        title: "Codeforces Round",
        description: "Consistent performance in contests",
        glyph: "⏱",
        color: "text-blue-400",
    },
];

#[component]
pub fn CompetitiveProgramming() -> impl IntoView {
    view! {
        <section id="cp" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Competitive Programming"
                    </h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "Sharpening problem-solving skills through algorithmic challenges and programming contests."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Reveal delay_ms=100>
                        <h3 class="text-2xl font-bold text-white mb-8">"Platform Statistics"</h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                            {PLATFORMS
                                .iter()
                                .map(|platform| {
                                    view! {
                                        <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg transition-all duration-300 group hover:shadow-lg hover:shadow-cyan-500/20">
                                            <div class="p-6 pb-3">
                                                <h4 class=format!(
                                                    "text-lg font-semibold {} group-hover:text-cyan-400 transition-colors duration-300",
                                                    platform.color,
                                                )>{platform.name}</h4>
                                            </div>
                                            <div class="p-6 pt-0 space-y-2">
                                                <div class="flex justify-between">
                                                    <span class="text-white/60">"Rating:"</span>
                                                    <span class="text-white font-semibold">
                                                        {platform.rating}
                                                    </span>
                                                </div>
                                                <div class="flex justify-between">
                                                    <span class="text-white/60">"Problems:"</span>
                                                    <span class="text-white font-semibold">
                                                        {platform.problems}
                                                    </span>
                                                </div>
                                                <div class="pt-2">
                                                    <span class=format!(
                                                        "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold border {} {}",
                                                        platform.color,
                                                        platform.border,
                                                    )>{platform.rank}</span>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <h3 class="text-2xl font-bold text-white mb-8">"Key Achievements"</h3>
                        <div class="space-y-6">
                            {ACHIEVEMENTS
                                .iter()
                                .map(|achievement| {
                                    view! {
                                        <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg transition-all duration-300 group hover:shadow-lg hover:shadow-cyan-500/20">
                                            <div class="p-6">
                                                <div class="flex items-start space-x-4">
                                                    <div class=format!(
                                                        "p-2 rounded-lg bg-gray-800/50 text-xl {}",
                                                        achievement.color,
                                                    )>{achievement.glyph}</div>
                                                    <div class="flex-1">
                                                        <h4 class="text-lg font-semibold text-white mb-1 group-hover:text-cyan-400 transition-colors duration-300">
                                                            {achievement.title}
                                                        </h4>
                                                        <p class="text-white/60">{achievement.description}</p>
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
