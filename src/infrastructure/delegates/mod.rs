//! REST implementation of the delegate contracts.
//!
//! Every delegate accumulates state locally and renders it into a
//! [`RestRequest`](crate::domain::rest::RestRequest) on demand. Nothing here
//! performs I/O; the facades hand rendered requests to a transport.

mod api;
mod audio;
mod channel;
mod common;
mod component;
mod emoji;
mod factory;
mod interaction;
mod message;
mod permission;
mod server;
mod util;
mod webhook;

pub use api::*;
pub use audio::*;
pub use channel::*;
pub use component::*;
pub use emoji::*;
pub use factory::RestDelegateFactory;
pub use interaction::*;
pub use message::*;
pub use permission::*;
pub use server::*;
pub use util::*;
pub use webhook::*;
