use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdCalendar, LdMessageSquare, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{fixtures, AppConfig, Feature, FeatureIcon, UserRole};
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent};

use crate::auth::use_auth;
use crate::components::use_scroll_reveal;
use crate::routes::portal_route;

/// Landing page: hero, feature grid and call-to-action.
#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let mut auth = use_auth();
    use_scroll_reveal();

    let brand = config.app.clone();
    let features = fixtures::features();

    // Portal buttons sign the visitor in with that role before navigating.
    let mut enter_portal = move |role: UserRole| {
        if auth.role() != Some(role) {
            auth.sign_in(role);
        }
        navigator().push(portal_route(role));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "hero",
            div { class: "container hero-inner",
                span { class: "hero-eyebrow", "{brand.institution}" }
                h1 { class: "hero-title",
                    "AI-Powered "
                    span { class: "text-gradient", "Counselling Management" }
                    " for Academic Success"
                }
                p { class: "hero-lead",
                    "A comprehensive platform connecting students with faculty for personalized academic counseling and performance tracking."
                }
                div { class: "hero-actions",
                    Button {
                        size: ButtonSize::Lg,
                        onclick: move |_| enter_portal(UserRole::Student),
                        "Student Portal"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Lg,
                        onclick: move |_| enter_portal(UserRole::Teacher),
                        "Teacher Portal"
                    }
                }
            }
            div { class: "hero-glow", "aria-hidden": "true" }
        }

        section { class: "features",
            div { class: "container",
                div { class: "features-intro reveal",
                    h2 { "Streamlined Counselling Experience" }
                    p { class: "muted",
                        "Our platform offers innovative tools to enhance the academic counselling process for both students and faculty."
                    }
                }
                div { class: "features-grid",
                    for feature in features {
                        FeatureCard { key: "{feature.title}", feature }
                    }
                }
            }
        }

        section { class: "cta",
            div { class: "container",
                div { class: "cta-panel reveal",
                    div { class: "cta-text",
                        h2 { "Ready to transform academic counselling?" }
                        p {
                            "Join {brand.institution}'s innovative platform connecting students with faculty for personalized guidance."
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Lg,
                        onclick: move |_| enter_portal(UserRole::Student),
                        "Get Started"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        Card { class: "feature-card reveal", hover_effect: true,
            CardContent {
                div { class: "feature-icon",
                    {feature_icon(feature.icon)}
                }
                h3 { "{feature.title}" }
                p { class: "muted", "{feature.description}" }
            }
        }
    }
}

fn feature_icon(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 32, height: 32 } },
        FeatureIcon::Chart => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 32, height: 32 } },
        FeatureIcon::Message => {
            rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 32, height: 32 } }
        }
        FeatureIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
    }
}
