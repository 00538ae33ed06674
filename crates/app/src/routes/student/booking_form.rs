use dioxus::prelude::*;
use shared_types::{
    BookingDraft, BookingField, CounselorOption, ValidBooking, DURATION_OPTIONS, LOCATION_OPTIONS,
};
use shared_ui::{
    Button, ButtonVariant, Form, FormActions, FormRow, FormSelect, Input, Textarea,
};

/// Session booking form. Emits a [`ValidBooking`] only when the required
/// fields are filled; otherwise the messages are shown next to each field.
#[component]
pub fn BookingForm(
    counselors: Vec<CounselorOption>,
    on_submit: EventHandler<ValidBooking>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(BookingDraft::default);

    let mut set = move |field: BookingField, value: String| {
        draft.write().set(field, value);
    };

    let handle_submit = move |_: FormEvent| {
        let result = draft.write().submit();
        match result {
            Ok(valid) => on_submit.call(valid),
            Err(err) => {
                tracing::debug!(fields = err.field_errors.len(), "booking form rejected");
            }
        }
    };

    let current = draft.read().clone();
    let error = |field: BookingField| current.error(field).map(str::to_string);
    let counselor_rows: Vec<(String, String)> =
        counselors.iter().map(|c| (c.id.clone(), c.label())).collect();

    rsx! {
        Form { class: "booking-form", onsubmit: handle_submit,
            Input {
                label: "Session Title",
                id: BookingField::Title.key(),
                placeholder: "e.g., Academic Performance Review",
                value: current.title.clone(),
                error: error(BookingField::Title),
                on_input: move |evt: FormEvent| set(BookingField::Title, evt.value()),
            }

            FormSelect {
                label: "Select Counselor",
                name: BookingField::Counselor.key().to_string(),
                value: current.counselor_id.clone(),
                error: error(BookingField::Counselor),
                onchange: move |evt: FormEvent| set(BookingField::Counselor, evt.value()),
                option { value: "", "Select a counselor" }
                for (id, label) in counselor_rows {
                    option { key: "{id}", value: "{id}", "{label}" }
                }
            }

            FormRow {
                Input {
                    label: "Date",
                    id: BookingField::Date.key(),
                    input_type: "date",
                    value: current.date.clone(),
                    error: error(BookingField::Date),
                    on_input: move |evt: FormEvent| set(BookingField::Date, evt.value()),
                }
                Input {
                    label: "Time",
                    id: BookingField::Time.key(),
                    input_type: "time",
                    value: current.time.clone(),
                    error: error(BookingField::Time),
                    on_input: move |evt: FormEvent| set(BookingField::Time, evt.value()),
                }
            }

            FormRow {
                FormSelect {
                    label: "Duration",
                    name: BookingField::Duration.key().to_string(),
                    value: current.duration.clone(),
                    onchange: move |evt: FormEvent| set(BookingField::Duration, evt.value()),
                    for (value, label) in DURATION_OPTIONS.iter().copied() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
                FormSelect {
                    label: "Location",
                    name: BookingField::Location.key().to_string(),
                    value: current.location.clone(),
                    onchange: move |evt: FormEvent| set(BookingField::Location, evt.value()),
                    for (value, label) in LOCATION_OPTIONS.iter().copied() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }

            Textarea {
                label: "Description",
                id: BookingField::Description.key(),
                rows: 4,
                placeholder: "Briefly describe what you'd like to discuss",
                value: current.description.clone(),
                on_input: move |evt: FormEvent| set(BookingField::Description, evt.value()),
            }

            FormActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button { r#type: "submit", "Schedule Session" }
            }
        }
    }
}
