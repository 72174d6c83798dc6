use leptos::prelude::*;

use super::reveal::Reveal;

static BIO_PARAGRAPHS: [&str; 3] = [
    "As a passionate app developer, I've been building real-world Android applications for over 3 years, specializing in Kotlin, Firebase, and Jetpack Compose. I love creating intuitive and scalable apps that focus on both performance and user experience. My development journey includes everything from crafting clean UI/UX designs to implementing full-stack features. I'm also actively involved in my college tech society and work with the IoT Lab team on interdisciplinary projects that blend design, hardware, and software.",
    "Alongside development, I have a strong background in competitive programming. It's where my journey in tech began — solving algorithmic challenges, participating in contests, and sharpening my problem-solving skills. CP taught me to think critically, which now plays a key role in how I approach app architecture and optimization.",
    "When I'm not coding, you can find me participating in programming contests, contributing to open-source projects, or exploring new technologies and frameworks.",
];

struct Highlight {
    glyph: &'static str,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
    bg: &'static str,
    border: &'static str,
}

static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        glyph: "</>",
        title: "Clean Code",
        desc: "Writing maintainable and efficient code",
        color: "text-cyan-400",
        bg: "bg-cyan-500/10",
        border: "border-cyan-500/30",
    },
    Highlight {
        glyph: "🏆",
        title: "Competitive",
        desc: "Strong algorithmic problem-solving skills",
        color: "text-yellow-400",
        bg: "bg-yellow-500/10",
        border: "border-yellow-500/30",
    },
    Highlight {
        glyph: "💡",
        title: "Innovation",
        desc: "Always exploring new technologies",
        color: "text-purple-400",
        bg: "bg-purple-500/10",
        border: "border-purple-500/30",
    },
    Highlight {
        glyph: "🤝",
        title: "Collaboration",
        desc: "Team player with great communication",
        color: "text-green-400",
        bg: "bg-green-500/10",
        border: "border-green-500/30",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 sm:px-6 lg:px-8 relative bg-black">
            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">"About Me"</h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "I'm a passionate developer and competitive programmer who loves turning complex problems into elegant solutions."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Reveal class="space-y-6 text-center lg:text-left" delay_ms=150>
                        {BIO_PARAGRAPHS
                            .iter()
                            .map(|text| {
                                view! {
                                    <p class="text-lg text-white/80 leading-relaxed">{*text}</p>
                                }
                            })
                            .collect_view()}
                    </Reveal>

                    <Reveal class="grid grid-cols-2 gap-6 justify-center" delay_ms=300>
                        {HIGHLIGHTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg transition-all duration-300 group">
                                        <div class="p-6 text-center">
                                            <div class=format!(
                                                "inline-block p-3 rounded-full {} {} border mb-4 font-mono {}",
                                                item.bg,
                                                item.border,
                                                item.color,
                                            )>{item.glyph}</div>
                                            <h3 class="text-lg font-semibold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                                                {item.title}
                                            </h3>
                                            <p class="text-white/60 text-sm">{item.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
