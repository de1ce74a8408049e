pub mod ap;
pub mod info;
pub mod kp;

use anyhow::{Context, Result};
use kpap::IndexState;

pub use ap::ap;
pub use info::info;
pub use kp::kp;

use crate::{cli::create_progress_bar, config::Config};

/// Parses the configured files and builds the index table.
pub async fn load_index(config: &Config) -> Result<IndexState> {
    let pb = create_progress_bar(config.files.len() as u64, "Parsing WDC files".to_string());
    let state = IndexState::load(&config.files, pb)
        .await
        .with_context(|| format!("failed to load WDC files from `{}`", config.data_dir.display()))?;

    Ok(state)
}
