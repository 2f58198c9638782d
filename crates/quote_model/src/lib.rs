//! Quote Model - Literary quote records shared by the layout and render crates
//!
//! A quote record is owned by the external quote store and borrowed by the
//! layout engine for a single render call.

mod error;
mod quote;
mod rating;

pub use error::*;
pub use quote::*;
pub use rating::*;
