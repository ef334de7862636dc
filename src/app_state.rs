//! Implements a struct that holds the state of the server.

use std::{path::PathBuf, sync::Arc};

use crate::config::SplitConfig;

/// The state of the server.
///
/// There is no database connection: every request loads the full
/// expense file and write paths overwrite it wholesale, so the state is
/// just the file path and the split configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The path to the JSON file holding the expense records.
    pub data_path: Arc<PathBuf>,

    /// How expenses are split between the two parties.
    pub config: SplitConfig,
}

impl AppState {
    /// Create a new [AppState] for the expense file at `data_path`.
    pub fn new(data_path: PathBuf, config: SplitConfig) -> Self {
        Self {
            data_path: Arc::new(data_path),
            config,
        }
    }
}
