use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::AppConfig;

use crate::routes::Route;

fn copyright_line(year: i32, institution: &str) -> String {
    format!("© {year} {institution}. All rights reserved.")
}

#[component]
pub fn SiteFooter() -> Element {
    let config = use_context::<AppConfig>();
    let brand = config.app.clone();
    let copyright = copyright_line(Utc::now().year(), &brand.institution);
    let mailto = format!("mailto:{}", brand.contact_email);

    rsx! {
        footer { class: "site-footer",
            div { class: "container site-footer-grid",
                div { class: "site-footer-brand",
                    h3 { "{brand.name}" }
                    p { "{brand.tagline}" }
                }
                div { class: "site-footer-links",
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::StudentDashboard {}, "Student Portal" } }
                        li { Link { to: Route::TeacherDashboard {}, "Teacher Portal" } }
                    }
                }
                div { class: "site-footer-contact",
                    h4 { "Contact" }
                    a { href: "{mailto}", class: "site-footer-contact-line",
                        Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                        "{brand.contact_email}"
                    }
                    div { class: "site-footer-contact-line",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                        address {
                            for line in brand.address_lines.iter() {
                                span { key: "{line}", "{line}" }
                            }
                        }
                    }
                }
            }
            div { class: "container site-footer-bottom",
                p { "{copyright}" }
            }
        }
    }
}
