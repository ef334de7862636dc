//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    chart_data::get_chart_data,
    delete_expense::delete_expense_endpoint,
    endpoints,
    new_expense::create_expense_endpoint,
    not_found::get_404_not_found,
    overview::get_overview_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_overview_page))
        .route(endpoints::NEW_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, get(delete_expense_endpoint))
        .route(endpoints::CHART_DATA, get(get_chart_data))
        .fallback(get_404_not_found)
        .with_state(state)
}
