mod booking_form;
mod dashboard;
mod profile;
mod session_card;

pub use booking_form::BookingForm;
pub use dashboard::StudentDashboard;
pub use profile::StudentProfile;
pub use session_card::SessionCard;
pub(crate) use session_card::status_tone;
