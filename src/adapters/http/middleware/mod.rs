//! HTTP middleware.

mod route_guard;

pub use route_guard::{
    is_anonymous_path, route_guard, unmatched_path, CurrentUser, GuardRejection, GuardState,
};
