//! A product store that lives in the page address.
//!
//! The list is serialized to JSON, percent-encoded and base64-encoded into
//! a single query parameter. Nothing here returns an error: malformed input
//! is logged and replaced by the default list, an empty string, or the
//! input unchanged, so a tampered link can never break rendering.
//!
//! One address holds one copy of the list. Two tabs never see each other's
//! changes and the last write to an address wins.

mod codec;
pub use codec::*;

mod defaults;
pub use defaults::*;

mod commands;
pub use commands::*;

mod queries;
pub use queries::*;

mod address;
pub use address::*;

pub use crate::models::is_plausible_image_reference;
