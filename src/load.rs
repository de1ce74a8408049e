//! Parses a set of yearly WDC files concurrently.

use futures::future::join_all;
use indicatif::ProgressBar;
use tokio::task;

use crate::{
    error::Result,
    reading::{parse_file, DailyRecord, WdcFile},
};

/// Parses every file on its own blocking task. Any failing file fails the whole load.
pub async fn load_records(files: &[WdcFile], progress_bar: ProgressBar) -> Result<Vec<DailyRecord>> {
    progress_bar.set_length(files.len() as u64);

    let tasks: Vec<_> = files
        .iter()
        .cloned()
        .map(|file| {
            let pb = progress_bar.clone();
            task::spawn_blocking(move || {
                let result = parse_file(&file);
                pb.inc(1);
                result
            })
        })
        .collect();

    // join in file order so the first error reported belongs to the earliest file
    let mut records = Vec::new();
    for result in join_all(tasks).await {
        records.extend(result??);
    }
    progress_bar.finish_with_message("Parsing complete");

    Ok(records)
}

// -- Tests -------------------------------------------------------------------
