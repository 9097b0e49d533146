//! Reusable view building blocks for navi applications.

mod link;

pub use link::RouterLink;
