//! Public builders and updaters.
//!
//! Every facade obtains its delegate from the context's factory when it is
//! constructed and forwards each call to it. Setters consume and return the
//! facade for chaining. Terminal operations either `build()` a value or
//! render a request and execute it through the context.

/// Generates chaining setters forwarding to the delegate.
macro_rules! forward {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) => $method:ident($($value:expr),*);)+) => {
        $(
            $(#[$meta])*
            pub fn $name(mut self, $($arg: $ty),*) -> Self {
                self.delegate.$method($($value),*);
                self
            }
        )+
    };
}

mod api;
mod audio;
mod channel;
mod component;
mod emoji;
mod interaction;
mod message;
mod permission;
mod server;
mod webhook;

pub use api::*;
pub use audio::*;
pub use channel::*;
pub use component::*;
pub use emoji::*;
pub use interaction::*;
pub use message::*;
pub use permission::*;
pub use server::*;
pub use webhook::*;
