//! Session domain - who the current actor is.
//!
//! These types have no provider dependencies. The upstream garage API, a
//! mock gateway, or a test can all populate them the same way.

mod errors;
mod session;
mod user;

pub use errors::SessionError;
pub use session::Session;
pub use user::{Role, User};
