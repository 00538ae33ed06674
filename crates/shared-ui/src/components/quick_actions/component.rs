use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdChevronRight, LdDownload, LdLayers, LdLayoutDashboard,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::QuickAction;

fn action_icon(action: QuickAction) -> Element {
    match action {
        QuickAction::AcademicCalendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        QuickAction::CourseMaterials => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        QuickAction::AssignmentTracker => rsx! { Icon::<LdLayers> { icon: LdLayers, width: 18, height: 18 } },
        QuickAction::DetailedAnalytics => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        QuickAction::ScheduleGroupSession => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        QuickAction::FlagStudentConcerns => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        QuickAction::GenerateReports => rsx! { Icon::<LdDownload> { icon: LdDownload, width: 18, height: 18 } },
    }
}

/// Divided list of shortcut rows, each an icon, a label and a chevron.
#[component]
pub fn QuickActionList(actions: Vec<QuickAction>, on_select: EventHandler<QuickAction>) -> Element {
    let rows: Vec<(QuickAction, &'static str)> = actions.iter().map(|a| (*a, a.label())).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul { class: "quick-actions",
            for (action, label) in rows {
                li { key: "{label}",
                    button {
                        r#type: "button",
                        class: "quick-action",
                        onclick: move |_| on_select.call(action),
                        span { class: "quick-action-main",
                            span { class: "quick-action-icon", {action_icon(action)} }
                            span { "{label}" }
                        }
                        span { class: "quick-action-chevron",
                            Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}
