//! Defines the JSON endpoint feeding external chart consumers.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    AppState,
    aggregation::{totals_by_category, totals_by_month},
    config::SplitConfig,
    expense::{Expense, store::load_expenses},
    settlement::settle,
};

/// The state needed to build the chart data.
#[derive(Debug, Clone)]
pub struct ChartDataState {
    /// The path to the JSON file holding the expense records.
    pub data_path: Arc<PathBuf>,
    /// How expenses are split between the two parties.
    pub config: SplitConfig,
}

impl FromRef<AppState> for ChartDataState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
            config: state.config.clone(),
        }
    }
}

/// The JSON body returned by the chart-data endpoint.
#[derive(Debug, Serialize)]
pub struct ChartData {
    /// Category label to summed amount.
    pub categories: Map<String, Value>,
    /// Month key (`YYYY-MM` for well-formed dates) to summed amount.
    pub months: Map<String, Value>,
    /// Party name to the total that party paid.
    pub paid_by: Map<String, Value>,
}

/// A route handler returning per-category totals, per-month totals, and
/// per-party paid totals as JSON.
pub async fn get_chart_data(State(state): State<ChartDataState>) -> Json<ChartData> {
    let expenses = load_expenses(&state.data_path);

    Json(build_chart_data(&expenses, &state.config))
}

fn build_chart_data(expenses: &[Expense], config: &SplitConfig) -> ChartData {
    let settlement = settle(expenses, config);

    let mut paid_by = Map::new();
    paid_by.insert(config.party_a.clone(), settlement.paid_a.into());
    paid_by.insert(config.party_b.clone(), settlement.paid_b.into());

    ChartData {
        categories: to_json_map(totals_by_category(expenses)),
        months: to_json_map(totals_by_month(expenses)),
        paid_by,
    }
}

fn to_json_map(totals: Vec<(String, f64)>) -> Map<String, Value> {
    totals
        .into_iter()
        .map(|(key, sum)| (key, sum.into()))
        .collect()
}
