use leptos::prelude::*;

use super::reveal::Reveal;

struct Job {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    location: &'static str,
    bullets: &'static [&'static str],
}

static JOBS: [Job; 3] = [
    Job {
        title: "Android App Developer Intern",
        company: "Catalift",
        period: "June 2025 - Present",
        location: "Remote",
        bullets: &[
            "Built real-world Android applications using Kotlin, Firebase, and Jetpack Compose",
            "Specialized in creating intuitive and scalable apps with focus on performance and user experience",
            "Implemented full-stack features from UI/UX design to backend integration",
        ],
    },
    Job {
        title: "Graphic Designer",
        company: "Coach Vikram",
        period: "May 2024 - Present",
        location: "Remote",
        bullets: &[
            "Designed compelling visual content for business consultancy programs for CXOs and business heads",
            "Created social media graphics, promotional materials, and brand assets",
            "Collaborated with content team to develop consistent brand identity",
            "Produced high-quality designs for client engagement and marketing campaigns",
        ],
    },
    Job {
        title: "Tech Society Member",
        company: "IOT Lab, GDSC and GFG",
        period: "2023 - Present",
        location: "College Campus",
        bullets: &[
            "Part of the competitive programming club @IOTLab",
            "UI/UX designer @GDSC KIIT",
            "UI/UX designer @GFG KIIT",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 sm:px-6 lg:px-8 relative bg-black">
            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">"Experience"</h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "My journey in software development and competitive programming"
                    </p>
                </Reveal>

                <div class="space-y-8">
                    {JOBS
                        .iter()
                        .enumerate()
                        .map(|(i, job)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 150>
                                    <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg hover:bg-white/5 transition-all duration-300 group">
                                        <div class="p-8">
                                            <div class="flex flex-col md:flex-row md:items-center gap-6">
                                                <div class="flex-1">
                                                    <h3 class="text-2xl font-bold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                                                        {job.title}
                                                    </h3>
                                                    <div class="flex flex-wrap gap-4 mb-4 text-white/60">
                                                        <span>{job.company}</span>
                                                        <span>{job.period}</span>
                                                        <span>{job.location}</span>
                                                    </div>
                                                    <ul class="space-y-2">
                                                        {job
                                                            .bullets
                                                            .iter()
                                                            .map(|bullet| {
                                                                view! {
                                                                    <li class="text-white/80 flex items-start gap-2">
                                                                        <span class="text-cyan-400 mt-1">"•"</span>
                                                                        {*bullet}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                </div>
                                                <div class="w-1 h-24 bg-gradient-to-b from-transparent via-cyan-400/50 to-transparent hidden md:block"></div>
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
