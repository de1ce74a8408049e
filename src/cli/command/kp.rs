use anyhow::Result;
use chrono::NaiveDateTime;

use super::load_index;
use crate::config::Config;

pub async fn kp(config: &Config, time: NaiveDateTime) -> Result<String> {
    let index = load_index(config).await?;
    let value = index.get_kp(time)?;

    Ok(format!("{:.1}", value))
}

// -- Tests -------------------------------------------------------------------
