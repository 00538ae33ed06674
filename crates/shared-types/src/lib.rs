pub mod error;
pub mod feature_flags;

pub mod auth;
pub mod booking;
pub mod config;
pub mod fixtures;
pub mod format;
pub mod notice;
pub mod performance;
pub mod profile;
pub mod roster;
pub mod session;

pub use error::*;
pub use feature_flags::*;

pub use auth::*;
pub use booking::*;
pub use config::*;
pub use format::*;
pub use notice::*;
pub use performance::*;
pub use profile::*;
pub use roster::*;
pub use session::*;
// Seed builders stay namespaced (shared_types::fixtures::roster()); their types are flat.
pub use fixtures::{Deadline, Document, Feature, FeatureIcon, RosterStats, Urgency};
