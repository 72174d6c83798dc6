use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::Reveal;
use crate::contact::{
    deliver, ContactController, DeliveryConfig, Field, Phase, SUCCESS_RESET_MS,
};

struct ContactMethod {
    glyph: &'static str,
    label: &'static str,
    value: &'static str,
    note: &'static str,
    href: Option<&'static str>,
}

static CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        glyph: "✉",
        label: "Email",
        value: "absaralioff@gmail.com",
        note: "Feel free to reach out anytime",
        href: Some("mailto:absaralioff@gmail.com"),
    },
    ContactMethod {
        glyph: "📞",
        label: "Phone",
        value: "Available on request",
        note: "Best time to call: 9 AM - 6 PM IST",
        href: None,
    },
    ContactMethod {
        glyph: "📍",
        label: "Location",
        value: "Available for remote work",
        note: "Open to remote and relocation opportunities",
        href: None,
    },
];

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactController::default());

    // Success panel reverts to the empty form after a pause; tearing the
    // section down cancels the pending revert.
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| form.update(|f| f.reset()),
        SUCCESS_RESET_MS,
    );
    let start = StoredValue::new_local(start);
    on_cleanup(move || stop());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = form
            .try_update(|f| f.begin_submit(&DeliveryConfig::from_build_env()))
            .flatten();
        let Some(submission) = submission else {
            return;
        };
        spawn_local(async move {
            let result = deliver(&submission).await;
            if let Err(failure) = &result {
                log::error!("contact delivery failed: {}", failure.reason());
            }
            let sent = result.is_ok();
            form.update(|f| f.finish(result));
            if sent {
                start.with_value(|start| start(()));
            }
        });
    };

    let submitting = move || form.with(|f| f.phase == Phase::Submitting);
    let submitted = move || form.with(|f| f.phase == Phase::Submitted);
    let failure_reason = move || {
        form.with(|f| match &f.phase {
            Phase::Failed(reason) => Some(reason.clone()),
            _ => None,
        })
    };

    view! {
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8 relative bg-black">
            <div class="max-w-6xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">"Get In Touch"</h2>
                    <p class="text-xl text-white/80 max-w-3xl mx-auto">
                        "Have a project in mind or want to discuss opportunities? I'd love to hear from you!"
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Reveal class="space-y-8" delay_ms=100>
                        <h3 class="text-2xl font-bold text-white">"Let's Connect"</h3>
                        <div class="space-y-6">
                            {CONTACT_METHODS
                                .iter()
                                .map(|method| view! { <ContactMethodCard method /> })
                                .collect_view()}
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-white mb-4">"Connect with me"</h4>
                            <div class="flex gap-4">
                                <a
                                    href="https://github.com/Absar-ao4"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-3 rounded-lg bg-black/60 border-2 border-white/10 text-white/80 hover:border-cyan-400/50 hover:text-cyan-400 transition-all duration-300"
                                >
                                    <i class="devicon-github-plain text-xl"></i>
                                </a>
                                <a
                                    href="https://linkedin.com/in/watching-absar-ali"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-3 rounded-lg bg-black/60 border-2 border-white/10 text-white/80 hover:border-cyan-400/50 hover:text-cyan-400 transition-all duration-300"
                                >
                                    <i class="devicon-linkedin-plain text-xl"></i>
                                </a>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg p-8">
                            <Show
                                when=move || !submitted()
                                fallback=|| {
                                    view! {
                                        <div class="text-center py-12">
                                            <div class="text-5xl mb-4">"✓"</div>
                                            <h3 class="text-2xl font-bold text-green-400 mb-2">
                                                "Message Sent!"
                                            </h3>
                                            <p class="text-white/80">
                                                "Thanks for reaching out! I'll get back to you as soon as possible."
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <form on:submit=on_submit class="space-y-6">
                                    {move || {
                                        failure_reason()
                                            .map(|reason| {
                                                view! {
                                                    <div class="p-4 rounded-lg bg-red-500/10 border border-red-500/30 text-red-400 text-sm">
                                                        {reason}
                                                    </div>
                                                }
                                            })
                                    }}

                                    <div>
                                        <label
                                            for="contact-name"
                                            class="block text-sm font-medium text-white/80 mb-2"
                                        >
                                            "Name"
                                        </label>
                                        <input
                                            id="contact-name"
                                            type="text"
                                            placeholder="Your full name"
                                            class="w-full px-4 py-3 rounded-lg bg-black/60 border-2 border-white/10 text-white placeholder-white/40 focus:border-cyan-400/50 focus:outline-none transition-colors duration-300"
                                            prop:value=move || form.with(|f| f.fields.name.clone())
                                            on:input=move |ev| {
                                                form.update(|f| {
                                                    f.update_field(Field::Name, event_target_value(&ev))
                                                })
                                            }
                                        />
                                    </div>

                                    <div>
                                        <label
                                            for="contact-email"
                                            class="block text-sm font-medium text-white/80 mb-2"
                                        >
                                            "Email"
                                        </label>
                                        <input
                                            id="contact-email"
                                            type="email"
                                            placeholder="your.email@example.com"
                                            class="w-full px-4 py-3 rounded-lg bg-black/60 border-2 border-white/10 text-white placeholder-white/40 focus:border-cyan-400/50 focus:outline-none transition-colors duration-300"
                                            prop:value=move || form.with(|f| f.fields.email.clone())
                                            on:input=move |ev| {
                                                form.update(|f| {
                                                    f.update_field(Field::Email, event_target_value(&ev))
                                                })
                                            }
                                        />
                                    </div>

                                    <div>
                                        <label
                                            for="contact-message"
                                            class="block text-sm font-medium text-white/80 mb-2"
                                        >
                                            "Message"
                                        </label>
                                        <textarea
                                            id="contact-message"
                                            rows="5"
                                            placeholder="Tell me about your project or just say hello!"
                                            class="w-full px-4 py-3 rounded-lg bg-black/60 border-2 border-white/10 text-white placeholder-white/40 focus:border-cyan-400/50 focus:outline-none transition-colors duration-300 resize-none"
                                            prop:value=move || form.with(|f| f.fields.message.clone())
                                            on:input=move |ev| {
                                                form.update(|f| {
                                                    f.update_field(Field::Message, event_target_value(&ev))
                                                })
                                            }
                                        ></textarea>
                                    </div>

                                    <button
                                        type="submit"
                                        disabled=submitting
                                        class="w-full py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white font-semibold hover:opacity-90 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        <Show
                                            when=submitting
                                            fallback=|| view! { "Send Message" }
                                        >
                                            <span class="inline-flex items-center gap-2">
                                                <span class="spin-pulse inline-block">"◌"</span>
                                                "Sending..."
                                            </span>
                                        </Show>
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactMethodCard(method: &'static ContactMethod) -> impl IntoView {
    let body = view! {
        <div class="flex items-start gap-4">
            <div class="p-3 rounded-lg bg-cyan-500/10 border border-cyan-500/30 text-cyan-400 text-xl">
                {method.glyph}
            </div>
            <div>
                <h4 class="text-white font-semibold">{method.label}</h4>
                <p class="text-white/80">{method.value}</p>
                <p class="text-white/40 text-sm">{method.note}</p>
            </div>
        </div>
    };
    view! {
        <div class="bg-black/80 border-2 border-white/10 backdrop-blur-sm rounded-lg p-6 hover:border-cyan-400/30 transition-all duration-300">
            {match method.href {
                Some(href) => view! { <a href=href>{body}</a> }.into_any(),
                None => body.into_any(),
            }}
        </div>
    }
}
