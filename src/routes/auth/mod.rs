pub mod dto;
pub mod route;

pub use route::{protected_route, public_route};
