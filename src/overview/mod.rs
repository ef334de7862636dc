//! The overview page: settlement summary, charts, the new-expense form,
//! and the full expense list.

mod cards;
mod charts;
mod form;
mod handlers;
mod tables;

pub use handlers::{OverviewState, get_overview_page};
