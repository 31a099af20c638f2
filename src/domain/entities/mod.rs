//! # Domain Entities
//!
//! Snapshots of platform objects the client already knows about. Builders
//! and updaters receive them as construction context; the delegate layer
//! never mutates them.
//!
//! ## Core Entities
//!
//! - **Server/Guild**: A server/community that contains channels and members
//! - **Channel**: A communication space within a server (or DM), plus typed views
//! - **Message**: A message sent in a channel
//! - **Role**: A set of permissions assignable to server members
//!
//! ## Supporting Entities
//!
//! - **KnownCustomEmoji**: Custom emoji owned by a known server
//! - **Webhook**: Incoming webhook of a channel
//! - **ScheduledEvent**: Scheduled server event
//! - **ApiSession**: The logged-in session the client acts through

mod channel;
mod emoji;
mod message;
mod role;
mod scheduled_event;
mod server;
mod session;
mod webhook;

pub use channel::{
    Channel, ChannelCategory, ChannelConversionError, ChannelType, RegularServerChannel,
    ServerChannel, ServerForumChannel, ServerTextChannel, ServerThreadChannel,
    ServerVoiceChannel, ThreadMetadata,
};
pub use emoji::KnownCustomEmoji;
pub use message::Message;
pub use role::Role;
pub use scheduled_event::{ScheduledEvent, ScheduledEventEntityType, ScheduledEventStatus};
pub use server::{
    DefaultMessageNotificationLevel, ExplicitContentFilterLevel, Guild, Server, VerificationLevel,
};
pub use session::{intents, ApiSession, SessionConfig};
pub use webhook::Webhook;
