//! # Eshop Module
//!
//! Internal marketplace of add-on features: credit packages, advertisement
//! extensions, branding and sourcing add-ons. The catalogue is static and
//! checkout is simulated.

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::eshop_routes;
