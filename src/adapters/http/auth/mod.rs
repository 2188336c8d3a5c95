//! Auth HTTP feature: sign-in, sign-up, sign-out and session probing.

mod dto;
mod handlers;
mod routes;

pub use dto::{SessionResponse, SignInRequest, SignUpRequest, UserDto};
pub use handlers::AuthHandlers;
pub use routes::router;
