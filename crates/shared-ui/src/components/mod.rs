// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod chart;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod quick_actions;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod separator;
pub mod switch;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use quick_actions::*;
pub use separator::*;
pub use skeleton::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
