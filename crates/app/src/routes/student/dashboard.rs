use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdPlus, LdX};
use dioxus_free_icons::Icon;
use shared_types::{
    fixtures, ChartKind, Notice, SessionBook, Urgency, ValidBooking, STUDENT_QUICK_ACTIONS,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader,
    PerformanceChart, QuickActionList,
};

use super::{BookingForm, SessionCard};
use crate::notify::use_notifier;

fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Urgent => "urgent",
        Urgency::Soon => "soon",
        Urgency::Later => "later",
    }
}

#[component]
pub fn StudentDashboard() -> Element {
    let notifier = use_notifier();
    let mut book = use_signal(|| SessionBook::new(fixtures::student_sessions()));
    let mut booking_open = use_signal(|| false);
    let counselors = use_hook(fixtures::counselors);

    let book_session = {
        let counselors = counselors.clone();
        move |booking: ValidBooking| {
            let now = Utc::now().timestamp_millis();
            let result = book
                .write()
                .book(&booking, &counselors, now)
                .map(|session| session.id.clone());
            match result {
                Ok(id) => {
                    tracing::info!(session_id = %id, counselor = %booking.counselor_id, "session booked");
                    booking_open.set(false);
                    notifier.notice(Notice::SessionBooked);
                }
                Err(err) => notifier.error(&err),
            }
        }
    };

    let cancel_session = move |id: String| {
        let result = book.write().cancel(&id);
        match result {
            Ok(()) => {
                tracing::info!(session_id = %id, "session cancelled");
                notifier.notice(Notice::SessionCancelled);
            }
            Err(err) => notifier.error(&err),
        }
    };

    let sessions: Vec<_> = book.read().iter().cloned().collect();
    let deadlines: Vec<_> = fixtures::deadlines()
        .into_iter()
        .map(|d| (d.title, d.due_label(), urgency_class(d.urgency)))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "container dashboard",
            PageHeader {
                title: "Student Dashboard",
                description: "Track your academic performance and manage counseling sessions",
            }

            div { class: "dashboard-grid",
                div { class: "dashboard-main",
                    PerformanceChart {
                        title: "Academic Performance Overview",
                        points: fixtures::semester_performance(),
                        kind: ChartKind::Area,
                    }

                    section { class: "sessions",
                        div { class: "sessions-heading",
                            h2 { "Counseling Sessions" }
                            if !booking_open() {
                                Button {
                                    size: ButtonSize::Sm,
                                    onclick: move |_| booking_open.set(true),
                                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                                    "Book Session"
                                }
                            }
                        }

                        if booking_open() {
                            Card { class: "booking-panel",
                                CardHeader { class: "booking-panel-header",
                                    CardTitle { "Schedule New Session" }
                                    button {
                                        class: "icon-button",
                                        "aria-label": "Close",
                                        onclick: move |_| booking_open.set(false),
                                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                                    }
                                }
                                CardContent {
                                    BookingForm {
                                        counselors: counselors.clone(),
                                        on_submit: book_session.clone(),
                                        on_cancel: move |_| booking_open.set(false),
                                    }
                                }
                            }
                        }

                        div { class: "session-list",
                            if sessions.is_empty() {
                                Card { class: "sessions-empty",
                                    CardContent {
                                        p { class: "muted", "No sessions scheduled yet." }
                                        Button {
                                            onclick: move |_| booking_open.set(true),
                                            "Book Your First Session"
                                        }
                                    }
                                }
                            }
                            for session in sessions {
                                SessionCard {
                                    key: "{session.id}",
                                    session: session.clone(),
                                    on_view_details: move |_| notifier.notice(Notice::SessionDetailsRequested),
                                    on_cancel: cancel_session,
                                    on_reschedule: move |_| notifier.notice(Notice::RescheduleRequested),
                                    on_message: move |_| notifier.notice(Notice::MessageRequested),
                                }
                            }
                        }
                    }
                }

                aside { class: "dashboard-side",
                    Card {
                        CardHeader { CardTitle { "Quick Actions" } }
                        CardContent { class: "flush",
                            QuickActionList {
                                actions: STUDENT_QUICK_ACTIONS.to_vec(),
                                on_select: move |action| notifier.notice(Notice::QuickAction(action)),
                            }
                        }
                    }

                    Card {
                        CardHeader { CardTitle { "Upcoming Deadlines" } }
                        CardContent { class: "flush",
                            ul { class: "deadline-list",
                                for (title, due, urgency) in deadlines {
                                    li { key: "{title}", class: "deadline",
                                        span { class: "deadline-icon", "data-urgency": urgency,
                                            Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                        }
                                        div {
                                            h4 { "{title}" }
                                            p { class: "muted", "{due}" }
                                        }
                                    }
                                }
                            }
                            div { class: "card-footer-action",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Sm,
                                    onclick: move |_| notifier.notice(Notice::AllDeadlinesRequested),
                                    "View All Deadlines"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
