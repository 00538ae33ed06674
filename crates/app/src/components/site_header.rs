use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogIn, LdLogOut, LdMenu, LdMoon, LdSun, LdX};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, FeatureFlags, UserRole};
use shared_ui::{Avatar, AvatarSize, Button, ButtonSize, ButtonVariant, Switch, SwitchThumb, ThemeState};

use crate::auth::use_auth;
use crate::routes::{portal_route, Route};

/// Scroll offset past which the header compacts.
const SCROLL_THRESHOLD: f64 = 20.0;

fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

struct NavLink {
    label: &'static str,
    to: Route,
}

fn nav_links(role: Option<UserRole>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home",
            to: Route::Home {},
        },
        NavLink {
            label: "Student Portal",
            to: Route::StudentDashboard {},
        },
        NavLink {
            label: "Teacher Portal",
            to: Route::TeacherDashboard {},
        },
    ];
    if role == Some(UserRole::Student) {
        links.push(NavLink {
            label: "My Profile",
            to: Route::StudentProfile {},
        });
    }
    links
}

/// Reports `scrollY` at most once per frame until told to stop.
const SCROLL_SCRIPT: &str = r#"
let frame = null;
const report = () => {
    frame = null;
    dioxus.send(window.scrollY);
};
const onScroll = () => {
    if (frame === null) {
        frame = window.requestAnimationFrame(report);
    }
};
window.addEventListener("scroll", onScroll, { passive: true });
report();
await dioxus.recv();
window.removeEventListener("scroll", onScroll);
if (frame !== null) {
    window.cancelAnimationFrame(frame);
}
"#;

/// Report whether the window has scrolled past the threshold.
///
/// The window listener lives as long as the calling component.
fn use_scrolled() -> Signal<bool> {
    let mut scrolled = use_signal(|| false);
    let listener = use_hook(move || {
        let eval = document::eval(SCROLL_SCRIPT);
        let mut reports = eval.clone();
        spawn(async move {
            while let Ok(offset) = reports.recv::<f64>().await {
                let next = is_scrolled(offset);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            }
        });
        eval
    });
    use_drop(move || {
        if listener.send(true).is_err() {
            tracing::debug!("scroll listener already stopped");
        }
    });
    scrolled
}

#[component]
pub fn SiteHeader() -> Element {
    let config = use_context::<AppConfig>();
    let flags = use_context::<FeatureFlags>();
    let mut auth = use_auth();
    let mut theme = use_context::<ThemeState>();
    let route = use_route::<Route>();

    let mut menu_open = use_signal(|| false);
    let mut role_picker_open = use_signal(|| false);
    let scrolled = use_scrolled();

    use_effect(use_reactive((&route,), move |(_route,)| {
        menu_open.set(false);
        role_picker_open.set(false);
    }));

    let role = auth.role();
    let links = nav_links(role);
    let role_label = role.map(|r| r.display_name().to_string()).unwrap_or_default();
    let brand = config.app.name.clone();
    let is_dark = (theme.is_dark)();

    let mut sign_in = move |role: UserRole| {
        auth.sign_in(role);
        role_picker_open.set(false);
        navigator().push(portal_route(role));
    };

    rsx! {
        header {
            class: "site-header",
            "data-scrolled": "{scrolled}",
            div { class: "container site-header-bar",
                Link { to: Route::Home {}, class: "site-brand", "{brand}" }

                nav { class: "site-nav", "data-open": "{menu_open}",
                    ul { class: "site-nav-links",
                        for link in links {
                            li { key: "{link.label}",
                                Link {
                                    to: link.to.clone(),
                                    class: "site-nav-link",
                                    active_class: "active",
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }

                div { class: "site-header-actions",
                    if flags.dark_mode_toggle {
                        div { class: "theme-toggle",
                            if is_dark {
                                Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 }
                            } else {
                                Icon::<LdSun> { icon: LdSun, width: 16, height: 16 }
                            }
                            Switch {
                                checked: Some(is_dark),
                                aria_label: "Toggle dark mode",
                                on_checked_change: move |_: bool| theme.toggle(),
                                SwitchThumb {}
                            }
                        }
                    }

                    match role {
                        Some(_) => rsx! {
                            div { class: "site-user",
                                Avatar { name: role_label.clone(), size: AvatarSize::Sm }
                                span { class: "site-user-role", "{role_label}" }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Sm,
                                    onclick: move |_| {
                                        auth.sign_out();
                                        navigator().push(Route::Home {});
                                    },
                                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                    "Sign out"
                                }
                            }
                        },
                        None => rsx! {
                            div { class: "sign-in",
                                Button {
                                    size: ButtonSize::Sm,
                                    onclick: move |_| role_picker_open.toggle(),
                                    Icon::<LdLogIn> { icon: LdLogIn, width: 16, height: 16 }
                                    "Sign in"
                                }
                                if role_picker_open() {
                                    div { class: "sign-in-menu", role: "menu",
                                        p { class: "sign-in-menu-label", "Continue as" }
                                        button {
                                            class: "sign-in-option",
                                            role: "menuitem",
                                            onclick: move |_| sign_in(UserRole::Student),
                                            "Student"
                                        }
                                        button {
                                            class: "sign-in-option",
                                            role: "menuitem",
                                            onclick: move |_| sign_in(UserRole::Teacher),
                                            "Teacher"
                                        }
                                    }
                                }
                            }
                        },
                    }

                    button {
                        class: "site-menu-toggle",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon::<LdX> { icon: LdX, width: 22, height: 22 }
                        } else {
                            Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_compacts_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn scroll_listener_is_removed_when_stopped() {
        let added = SCROLL_SCRIPT.find(r#"addEventListener("scroll", onScroll"#);
        let stop = SCROLL_SCRIPT.find("await dioxus.recv()");
        let removed = SCROLL_SCRIPT.find(r#"removeEventListener("scroll", onScroll)"#);
        assert!(added.is_some() && stop.is_some() && removed.is_some());
        assert!(added < stop && stop < removed);
    }

    #[test]
    fn profile_link_only_for_students() {
        let labels = |role| nav_links(role).into_iter().map(|l| l.label).collect::<Vec<_>>();
        assert!(labels(Some(UserRole::Student)).contains(&"My Profile"));
        assert!(!labels(Some(UserRole::Teacher)).contains(&"My Profile"));
        assert!(!labels(None).contains(&"My Profile"));
    }
}
