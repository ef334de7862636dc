//! The API endpoint URIs.
//!
//! For the endpoint that takes a parameter, use [format_endpoint].

/// The overview page with the balance summary, charts, and expense list.
pub const ROOT: &str = "/";
/// The route for submitting a new expense.
pub const NEW_EXPENSE: &str = "/new-expense";
/// The route for deleting an expense by its ID.
pub const DELETE_EXPENSE: &str = "/delete/{expense_id}";
/// The route returning chart data as JSON.
pub const CHART_DATA: &str = "/api/chart-data";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/delete/{expense_id}',
/// '{expense_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    #[test]
    fn endpoints_are_valid_uris() {
        for endpoint in [
            endpoints::ROOT,
            endpoints::NEW_EXPENSE,
            endpoints::DELETE_EXPENSE,
            endpoints::CHART_DATA,
        ] {
            assert!(endpoint.parse::<Uri>().is_ok());
        }
    }

    #[test]
    fn formats_delete_endpoint() {
        let formatted_path = format_endpoint(endpoints::DELETE_EXPENSE, 42);

        assert_eq!(formatted_path, "/delete/42");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }
}
