use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBookOpen, LdCalendar, LdMail, LdMapPin, LdPencil, LdPhone, LdSave, LdUser, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{fixtures, Notice, ProfileEditor, ProfileField, EDITABLE_FIELDS};
use shared_ui::{
    Avatar, AvatarSize, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, Input, PageHeader, Separator,
};

use crate::notify::use_notifier;
use crate::routes::Route;

fn credits_label(completed: u16, required: u16) -> String {
    format!("{completed}/{required}")
}

#[component]
pub fn StudentProfile() -> Element {
    let notifier = use_notifier();
    let mut editor = use_signal(|| ProfileEditor::new(fixtures::student_profile()));

    let begin_edit = move |_: MouseEvent| editor.write().begin_edit();
    let cancel_edit = move |_: MouseEvent| editor.write().cancel();
    let save = move |_: MouseEvent| {
        let dirty = editor.read().dirty_fields().len();
        let changed = editor.write().save();
        tracing::info!(changed, dirty_fields = dirty, "profile saved");
        notifier.notice(Notice::ProfileUpdated);
    };

    let snapshot = editor.read().clone();
    let student = snapshot.current().clone();
    let editing = snapshot.is_editing();
    let form_rows: Vec<(ProfileField, &'static str, String, bool)> = snapshot
        .draft()
        .map(|draft| {
            EDITABLE_FIELDS
                .iter()
                .map(|f| (*f, f.key(), f.get(draft).to_string(), *f == ProfileField::Address))
                .collect()
        })
        .unwrap_or_default();

    let cgpa = format!("{:.2}", student.cgpa);
    let credits = credits_label(student.credits_completed, student.credits_required);
    let appointments: Vec<_> = fixtures::student_sessions()
        .into_iter()
        .filter(|s| s.status.is_upcoming())
        .collect();
    let documents = fixtures::documents();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "container dashboard",
            PageHeader {
                title: "My Profile",
                description: "View and manage your personal and academic information",
            }

            div { class: "dashboard-grid",
                div { class: "dashboard-main",
                    Card {
                        CardHeader { class: "profile-card-header",
                            CardTitle { "Personal Information" }
                            if editing {
                                div { class: "profile-edit-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        onclick: cancel_edit,
                                        Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                                        "Cancel"
                                    }
                                    Button {
                                        size: ButtonSize::Sm,
                                        onclick: save,
                                        Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                                        "Save Changes"
                                    }
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Sm,
                                    onclick: begin_edit,
                                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                                    "Edit Profile"
                                }
                            }
                        }
                        CardContent {
                            div { class: "profile-identity",
                                Avatar { name: student.name.clone(), size: AvatarSize::Xl }
                                div {
                                    h2 { "{student.name}" }
                                    p { class: "muted", "{student.id}" }
                                    p { "{student.department}, {student.year}" }
                                }
                            }
                            Separator { class: "profile-separator" }

                            if editing {
                                div { class: "profile-form",
                                    for (field, key, value, wide) in form_rows {
                                        div { key: "{key}", class: "profile-field", "data-wide": wide,
                                            Input {
                                                id: key,
                                                label: field.label().to_string(),
                                                value,
                                                on_input: move |evt: FormEvent| {
                                                    editor.write().update(field, evt.value());
                                                },
                                            }
                                        }
                                    }
                                }
                            } else {
                                div { class: "profile-details",
                                    ProfileDetail { label: "Email", value: student.email.clone(),
                                        Icon::<LdMail> { icon: LdMail, width: 20, height: 20 }
                                    }
                                    ProfileDetail { label: "Phone", value: student.phone.clone(),
                                        Icon::<LdPhone> { icon: LdPhone, width: 20, height: 20 }
                                    }
                                    ProfileDetail { label: "Date of Birth", value: student.dob.clone(),
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                                    }
                                    ProfileDetail { label: "Faculty Advisor", value: student.advisor.clone(),
                                        Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                                    }
                                    ProfileDetail { label: "Address", value: student.address.clone(), wide: true,
                                        Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader { CardTitle { "Academic Information" } }
                        CardContent {
                            div { class: "academic-stats",
                                div { class: "academic-stat",
                                    p { class: "muted", "CGPA" }
                                    p { class: "academic-stat-value", "{cgpa}" }
                                }
                                div { class: "academic-stat",
                                    p { class: "muted", "Attendance" }
                                    p { class: "academic-stat-value", "{student.attendance}%" }
                                }
                                div { class: "academic-stat",
                                    p { class: "muted", "Credits Completed" }
                                    p { class: "academic-stat-value", "{credits}" }
                                }
                            }

                            h3 { class: "courses-heading", "Current Courses" }
                            div { class: "table-scroll",
                                table { class: "course-table",
                                    thead {
                                        tr {
                                            th { "Course Code" }
                                            th { "Course Name" }
                                            th { "Professor" }
                                            th { "Grade" }
                                        }
                                    }
                                    tbody {
                                        for course in student.courses.iter() {
                                            tr { key: "{course.code}",
                                                td { "{course.code}" }
                                                td { "{course.name}" }
                                                td { "{course.professor}" }
                                                td { "{course.grade}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                aside { class: "dashboard-side",
                    Card {
                        CardHeader {
                            CardTitle { class: "icon-title",
                                Icon::<LdAward> { icon: LdAward, width: 20, height: 20 }
                                "Achievements"
                            }
                        }
                        CardContent {
                            ul { class: "achievements",
                                for achievement in student.achievements.iter() {
                                    li { key: "{achievement}", "{achievement}" }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { class: "icon-title",
                                Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                                "Upcoming Appointments"
                            }
                        }
                        CardContent {
                            if appointments.is_empty() {
                                p { class: "muted", "No upcoming appointments." }
                            }
                            for session in appointments {
                                div { key: "{session.id}", class: "appointment",
                                    p { class: "appointment-title", "{session.title}" }
                                    p { class: "muted", "{session.date} • {session.time}" }
                                    p { class: "muted", "{session.counselor.name} • {session.location}" }
                                }
                            }
                        }
                        CardFooter {
                            Link { to: Route::StudentDashboard {}, class: "appointments-link",
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                                "View All Sessions"
                            }
                        }
                    }

                    Card {
                        CardHeader { CardTitle { "Important Documents" } }
                        CardContent {
                            ul { class: "documents",
                                for doc in documents {
                                    DocumentRow {
                                        key: "{doc.name}",
                                        name: doc.name,
                                        meta: doc.meta(),
                                        on_open: move |name: String| {
                                            notifier.notice(Notice::DocumentRequested(name))
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileDetail(
    label: String,
    value: String,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: "profile-detail", "data-wide": wide,
            span { class: "profile-detail-icon", {children} }
            div {
                p { class: "profile-detail-label", "{label}" }
                p { "{value}" }
            }
        }
    }
}

#[component]
fn DocumentRow(name: &'static str, meta: String, on_open: EventHandler<String>) -> Element {
    rsx! {
        li {
            button {
                r#type: "button",
                class: "document-row",
                onclick: move |_| on_open.call(name.to_string()),
                p { class: "document-name", "{name}" }
                p { class: "muted", "{meta}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_read_completed_over_required() {
        assert_eq!(credits_label(132, 160), "132/160");
    }
}
