use anyhow::Result;
use chrono::NaiveDateTime;
use kpap::ApQuery;

use super::load_index;
use crate::config::Config;

pub async fn ap(config: &Config, time: NaiveDateTime, query: ApQuery) -> Result<String> {
    let index = load_index(config).await?;
    let value = index.get_ap(time, query)?;

    let out = match query {
        ApQuery::Point => format!("{}", value),
        ApQuery::DailyMean | ApQuery::WindowMean { .. } => format!("{:.2}", value),
    };

    Ok(out)
}

// -- Tests -------------------------------------------------------------------
