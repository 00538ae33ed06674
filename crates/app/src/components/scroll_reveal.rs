use dioxus::prelude::*;
use shared_types::FeatureFlags;

/// Observes `.reveal` elements until told to stop, then disconnects.
const OBSERVE_SCRIPT: &str = r#"
if ("IntersectionObserver" in window) {
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            if (entry.isIntersecting) {
                entry.target.classList.add("revealed");
                observer.unobserve(entry.target);
            }
        }
    }, { threshold: 0.1 });
    document.querySelectorAll(".reveal:not(.revealed)").forEach((el) => observer.observe(el));
    await dioxus.recv();
    observer.disconnect();
} else {
    document.querySelectorAll(".reveal").forEach((el) => el.classList.add("revealed"));
}
"#;

const SHOW_ALL_SCRIPT: &str =
    r#"document.querySelectorAll(".reveal").forEach((el) => el.classList.add("revealed"));"#;

/// Fade in `.reveal` elements of the calling page as they scroll into view.
///
/// Each element animates once. With the feature off everything is shown
/// immediately. The observer is disconnected when the page unmounts.
pub fn use_scroll_reveal() {
    let flags = use_context::<FeatureFlags>();
    let mut observer = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if flags.scroll_reveal {
            observer.set(Some(document::eval(OBSERVE_SCRIPT)));
        } else {
            let _ = document::eval(SHOW_ALL_SCRIPT);
        }
    });

    use_drop(move || {
        if let Some(eval) = observer.peek().clone() {
            // Scripts without an observer have already finished.
            let _ = eval.send(true);
        }
    });
}
