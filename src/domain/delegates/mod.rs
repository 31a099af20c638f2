//! # Delegates
//!
//! The seam between the public builder/updater API and the library that
//! actually talks to the platform. Facades never construct delegates
//! themselves: they hand a [`DelegateRequest`] to the active
//! [`DelegateFactory`] and drive whatever comes back through the contract
//! traits defined here.

mod api;
mod audio;
mod channel;
mod component;
mod delegate;
mod emoji;
mod factory;
mod interaction;
mod kind;
mod message;
mod permission;
mod request;
mod server;
mod util;
mod webhook;

pub use api::*;
pub use audio::*;
pub use channel::*;
pub use component::*;
pub use delegate::Delegate;
pub use emoji::*;
pub use factory::{DelegateFactory, DelegateFactoryExt};
pub use interaction::*;
pub use kind::DelegateKind;
pub use message::*;
pub use permission::*;
pub use request::*;
pub use server::*;
pub use util::*;
pub use webhook::*;
