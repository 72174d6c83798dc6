use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use leptos_use::use_intersection_observer;

/// Wraps a block and plays its entrance transition the first time it
/// scrolls into view. Server-rendered output stays visible without JS.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    let state_class = {
        let (visible, set_visible) = signal(false);
        use_intersection_observer(node_ref, move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible(true);
            }
        });
        move || {
            if visible() {
                "reveal reveal-visible"
            } else {
                "reveal"
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let state_class = || "reveal reveal-visible";

    view! {
        <div
            node_ref=node_ref
            class=move || format!("{} {class}", state_class())
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
