use leptos::prelude::*;

use super::reveal::Reveal;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    technologies: &'static [&'static str],
    link: Option<&'static str>,
    link_label: &'static str,
    category: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with Kotlin, Jetpack Compose, and Firebase. Features include user authentication, payment integration, and admin dashboard.",
        image: "/placeholder.png",
        technologies: &["Kotlin", "Firebase", "Razorpay"],
        link: Some("https://github.com/Absar-ao4/Ecommerce-app"),
        link_label: "Code",
        category: "Full-Stack",
    },
    Project {
        title: "Portfolio Website",
        description: "Responsive portfolio website showcasing projects and skills with modern design and smooth animations.",
        image: "/portfoliolanding.png",
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        link: None,
        link_label: "Code",
        category: "Frontend",
    },
    Project {
        title: "Nike Landing Page",
        description: "A visually striking landing page designed entirely in Figma, showcasing Nike's signature branding and modern aesthetics.",
        image: "/placeholder1.png",
        technologies: &["Figma", "UI", "UX", "Responsive"],
        link: Some(
            "https://www.figma.com/design/1r4W4tPbt6t75O9IIDDeLA/NIKE--Community-?node-id=0-1",
        ),
        link_label: "Open",
        category: "Frontend",
    },
];

fn category_class(category: &str) -> &'static str {
    match category {
        "Full-Stack" => "bg-purple-500/20 text-purple-300 border-purple-500/30",
        "Frontend" => "bg-cyan-500/20 text-cyan-300 border-cyan-500/30",
        "Backend" => "bg-green-500/20 text-green-300 border-green-500/30",
        _ => "bg-gray-500/20 text-gray-300 border-gray-500/30",
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "A collection of projects showcasing my skills in full-stack development, algorithms, and modern web technologies."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 100>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="text-center mt-12" delay_ms=400>
                    <a
                        href="https://github.com/Absar-ao4"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 border-2 border-white/10 text-white/80 rounded-md px-8 py-3 bg-transparent hover:border-cyan-400/50 transition-all duration-300 hover:scale-105"
                    >
                        <i class="devicon-github-plain"></i>
                        <span>"View All Projects on GitHub"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg transition-all duration-300 group hover:shadow-lg overflow-hidden">
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent"></div>
                <span class=format!(
                    "absolute top-4 right-4 px-2.5 py-0.5 rounded-full text-xs font-semibold border {}",
                    category_class(project.category),
                )>{project.category}</span>
            </div>

            <div class="p-6">
                <h3 class="text-white text-lg font-semibold mb-3 group-hover:text-cyan-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-white/80 text-sm mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2.5 py-0.5 rounded-full text-xs bg-black/60 text-white/80 border-2 border-white/10 hover:border-cyan-400/50 transition-colors duration-200">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex w-full items-center justify-center gap-2 border-2 border-white/10 text-white/80 rounded-md px-4 py-2 text-sm bg-transparent hover:border-cyan-400/50 transition-all duration-200"
                            >
                                {project.link_label}
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
