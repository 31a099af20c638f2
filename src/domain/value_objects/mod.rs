//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Snowflake**: Discord-style unique ID with embedded timestamp
//! - **Permissions**: allowed/denied permission bitfields
//! - **Embed**, **AllowedMentions**: message decorations
//! - **ActionRow** and friends: interactive message components
//! - **SlashCommandOption** and friends: application command definitions

mod command;
mod component;
mod embed;
mod mentions;
mod permissions;
mod snowflake;

pub use command::*;
pub use component::*;
pub use embed::*;
pub use mentions::*;
pub use permissions::*;
pub use snowflake::*;
