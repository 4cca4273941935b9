//! Domain types mirrored from the remote API
//!
//! - party: events and the create-event form
//! - guest: guests and RSVPs
//! - envelope: response wrappers

pub mod envelope;
pub mod guest;
pub mod party;

pub use envelope::*;
pub use guest::*;
pub use party::*;
