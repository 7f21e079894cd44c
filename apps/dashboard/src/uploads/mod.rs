// HR analytics dashboard: multi-strategy upload parsing and raw preview.

pub mod handlers;
pub mod strategies;
