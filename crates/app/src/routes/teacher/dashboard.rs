use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowDownRight, LdArrowUpRight, LdCalendar, LdClock, LdFlag, LdSearch, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    filter_roster, fixtures, ChartKind, Notice, RosterEntry, RosterStatus, Trend,
    TEACHER_QUICK_ACTIONS,
};
use shared_ui::{
    Avatar, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, PageHeader, PerformanceChart, QuickActionList,
};

use crate::notify::use_notifier;
use crate::routes::student::status_tone;

fn roster_tone(status: RosterStatus) -> BadgeTone {
    match status {
        RosterStatus::Excellent => BadgeTone::Success,
        RosterStatus::Good => BadgeTone::Info,
        RosterStatus::AtRisk => BadgeTone::Warning,
        RosterStatus::Critical => BadgeTone::Danger,
    }
}

#[component]
pub fn TeacherDashboard() -> Element {
    let notifier = use_notifier();
    let roster = use_hook(fixtures::roster);
    let mut query = use_signal(String::new);

    let matches: Vec<RosterEntry> = filter_roster(&roster, &query.read())
        .into_iter()
        .cloned()
        .collect();
    let stats = fixtures::roster_stats();
    let sessions: Vec<_> = fixtures::teacher_sessions()
        .into_iter()
        .map(|s| {
            let tone = status_tone(s.status);
            let label = s.status.label();
            (s, tone, label)
        })
        .collect();

    use_effect(move || {
        let q = query();
        if !q.trim().is_empty() {
            tracing::debug!(query = %q, "roster search");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "container dashboard teacher-dashboard",
            PageHeader {
                title: "Teacher Dashboard",
                description: "Monitor student performance and manage counseling sessions",
            }

            div { class: "teacher-grid",
                div { class: "dashboard-main",
                    label { class: "roster-search",
                        Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                        input {
                            r#type: "search",
                            placeholder: "Search students by name or roll number...",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }

                    section {
                        h2 { class: "section-title", "Students" }
                        div { class: "roster",
                            if matches.is_empty() {
                                Card { class: "roster-empty",
                                    CardContent { p { class: "muted", "No students found." } }
                                }
                            }
                            for entry in matches {
                                RosterCard { key: "{entry.id}", entry }
                            }
                        }
                    }

                    PerformanceChart {
                        title: "Class Average Performance Trend",
                        points: fixtures::class_trend(),
                        kind: ChartKind::Line,
                    }
                }

                aside { class: "dashboard-side",
                    div { class: "roster-stats",
                        Card { class: "roster-stat",
                            span { class: "roster-stat-icon", "data-tone": "primary",
                                Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                            }
                            p { class: "roster-stat-value", "{stats.total_students}" }
                            p { class: "muted", "Total Students" }
                        }
                        Card { class: "roster-stat",
                            span { class: "roster-stat-icon", "data-tone": "warning",
                                Icon::<LdFlag> { icon: LdFlag, width: 20, height: 20 }
                            }
                            p { class: "roster-stat-value", "{stats.at_risk}" }
                            p { class: "muted", "At Risk" }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Your Sessions" }
                            CardDescription { "Upcoming counseling sessions" }
                        }
                        CardContent { class: "flush",
                            ul { class: "teacher-sessions",
                                for (session, tone, label) in sessions {
                                    li { key: "{session.id}", class: "teacher-session",
                                        div { class: "teacher-session-head",
                                            h4 { "{session.title}" }
                                            Badge { tone, "{label}" }
                                        }
                                        p { class: "muted",
                                            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                            "{session.date}"
                                        }
                                        p { class: "muted",
                                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                            "{session.time} ({session.duration})"
                                        }
                                    }
                                }
                            }
                            div { class: "card-footer-action",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Sm,
                                    onclick: move |_| notifier.notice(Notice::AllSessionsRequested),
                                    "View All Sessions"
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader { CardTitle { "Quick Actions" } }
                        CardContent { class: "flush",
                            QuickActionList {
                                actions: TEACHER_QUICK_ACTIONS.to_vec(),
                                on_select: move |action| notifier.notice(Notice::QuickAction(action)),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RosterCard(entry: RosterEntry) -> Element {
    let notifier = use_notifier();
    let profile_name = entry.name.clone();
    let tone = roster_tone(entry.status);
    let status = entry.status.as_str();
    let label = entry.status.label();
    let cgpa = format!("{:.1}", entry.cgpa);

    rsx! {
        Card { class: "roster-card", hover_effect: true,
            CardContent { class: "roster-card-body",
                div { class: "roster-identity",
                    span { class: "roster-avatar", "data-status": status,
                        Avatar { name: entry.name.clone() }
                    }
                    div {
                        h3 {
                            "{entry.name}"
                            Badge { tone, solid: true,
                                match entry.status.trend() {
                                    Trend::Up => rsx! { Icon::<LdArrowUpRight> { icon: LdArrowUpRight, width: 14, height: 14 } },
                                    Trend::Down => rsx! { Icon::<LdArrowDownRight> { icon: LdArrowDownRight, width: 14, height: 14 } },
                                }
                                "{label}"
                            }
                        }
                        p { class: "muted", "{entry.roll_number} • {entry.course}, {entry.year}" }
                    }
                }
                div { class: "roster-figures",
                    div {
                        p { class: "muted", "CGPA" }
                        p { class: "roster-figure", "{cgpa}" }
                    }
                    div {
                        p { class: "muted", "Attendance" }
                        p { class: "roster-figure", "{entry.attendance}%" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            notifier.notice(Notice::StudentProfileRequested(profile_name.clone()))
                        },
                        "View Profile"
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
    fn falling_statuses_use_warning_colours() {
        assert_eq!(roster_tone(RosterStatus::AtRisk), BadgeTone::Warning);
        assert_eq!(roster_tone(RosterStatus::Critical), BadgeTone::Danger);
        assert_eq!(roster_tone(RosterStatus::Good), BadgeTone::Info);
    }
}
