//! Browser pages for both dashboards. The pages call the JSON API and draw
//! the chart specifications client-side.

pub mod pages;

use axum::response::Html;

use crate::ui::pages::{HR_PAGE, WORKFORCE_PAGE};

/// GET /
pub async fn workforce_page() -> Html<&'static str> {
    Html(WORKFORCE_PAGE)
}

/// GET /hr
pub async fn hr_page() -> Html<&'static str> {
    Html(HR_PAGE)
}
