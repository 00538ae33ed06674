use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdMessageSquare, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{Session, SessionStatus};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardTitle,
};

pub(crate) fn status_tone(status: SessionStatus) -> BadgeTone {
    match status {
        SessionStatus::Upcoming => BadgeTone::Info,
        SessionStatus::Completed => BadgeTone::Success,
        SessionStatus::Cancelled => BadgeTone::Danger,
    }
}

/// One counselling session with its actions.
///
/// Cancel and Reschedule are offered only while the session is upcoming.
/// Handlers left as `None` hide their button.
#[component]
pub fn SessionCard(
    session: Session,
    #[props(default)] on_view_details: Option<EventHandler<String>>,
    #[props(default)] on_cancel: Option<EventHandler<String>>,
    #[props(default)] on_reschedule: Option<EventHandler<String>>,
    #[props(default)] on_message: Option<EventHandler<String>>,
) -> Element {
    let upcoming = session.status.is_upcoming();
    let tone = status_tone(session.status);
    let status_label = session.status.label();
    let counselor = session.counselor.clone();

    let id = session.id.clone();
    let emit = move |handler: Option<EventHandler<String>>| {
        let id = id.clone();
        move |_: MouseEvent| {
            if let Some(handler) = handler {
                handler.call(id.clone());
            }
        }
    };

    rsx! {
        Card { class: "session-card",
            CardHeader { class: "session-card-header",
                CardTitle { "{session.title}" }
                Badge { tone, "{status_label}" }
            }
            CardContent {
                div { class: "session-counselor",
                    Avatar { name: counselor.name.clone(), size: AvatarSize::Lg }
                    div {
                        p { class: "session-counselor-name", "{counselor.name}" }
                        p { class: "muted", "{counselor.department}" }
                    }
                }
                if !session.description.is_empty() {
                    p { class: "session-description muted", "{session.description}" }
                }
                div { class: "session-meta",
                    span {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        "{session.date}"
                    }
                    span {
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        "{session.time} ({session.duration})"
                    }
                    span {
                        Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                        "{session.location}"
                    }
                    span {
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "One-on-one"
                    }
                }
            }
            CardFooter { class: "session-actions",
                if on_view_details.is_some() {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: emit(on_view_details),
                        "View Details"
                    }
                }
                if upcoming && on_cancel.is_some() {
                    Button {
                        class: "session-cancel",
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: emit(on_cancel),
                        "Cancel"
                    }
                }
                if upcoming && on_reschedule.is_some() {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: emit(on_reschedule),
                        "Reschedule"
                    }
                }
                if on_message.is_some() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        onclick: emit(on_message),
                        Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 }
                        "Message"
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
    fn every_status_has_its_own_tone() {
        assert_eq!(status_tone(SessionStatus::Upcoming), BadgeTone::Info);
        assert_eq!(status_tone(SessionStatus::Completed), BadgeTone::Success);
        assert_eq!(status_tone(SessionStatus::Cancelled), BadgeTone::Danger);
    }
}
