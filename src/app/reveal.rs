use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{Reveal, RevealOptions};

/// `true` once `target` has scrolled into view; never reverts.
///
/// The observer disconnects itself on the first hit and is torn down with
/// the owning component otherwise.
pub fn use_scroll_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Signal<bool> {
    let reveal = RwSignal::new(Reveal::default());
    let threshold = options.clamped_threshold();

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let hit = entries.iter().any(|entry| entry.is_intersecting());
            if reveal.try_update(|r| r.observe(hit)).unwrap_or(false) {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold])
            .root_margin(options.root_margin),
    );

    Signal::derive(move || reveal.get().is_visible())
}

/// Fades its children up into place the first time they become visible.
#[component]
pub fn RevealBlock(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_scroll_reveal(target, RevealOptions::default().threshold(0.2));

    view! {
        <div
            node_ref=target
            class=class
            style=move || {
                if visible.get() {
                    format!(
                        "opacity:1;transform:translateY(0);transition:opacity 0.6s ease-out {delay_ms}ms, transform 0.6s ease-out {delay_ms}ms;",
                    )
                } else {
                    "opacity:0;transform:translateY(20px);".to_string()
                }
            }
        >
            {children()}
        </div>
    }
}
