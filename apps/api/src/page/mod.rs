// Form/display page: served HTML, markdown rendering of results, guided tour.

pub mod handlers;
pub mod markdown;
pub mod tour;
pub mod view;
