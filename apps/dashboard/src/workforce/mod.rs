// Workforce dashboard: fixed-path CSV, keyword classification, filters,
// aggregate charts and CSV export.

pub mod aggregate;
pub mod classifier;
pub mod detect;
pub mod handlers;
pub mod insights;
pub mod pipeline;
pub mod source;
