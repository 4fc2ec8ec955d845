mod client;
mod error;
mod session;

pub mod domain;

pub use client::*;
pub use error::*;
pub use session::*;
