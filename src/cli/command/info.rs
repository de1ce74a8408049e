use anyhow::Result;

use super::load_index;
use crate::config::Config;

/// Lists the loaded files, the span of dates they cover and any days missing in between.
pub async fn info(config: &Config) -> Result<String> {
    let index = load_index(config).await?;
    let table = index.table()?;

    let mut lines: Vec<String> = config
        .files
        .iter()
        .map(|f| format!("{}  {}", f.year, f.path.display()))
        .collect();

    let first = table.first().date();
    let last = table.last().date();
    let missing = (last - first).num_days() + 1 - table.len() as i64;
    lines.push(format!(
        "{} daily records from {} to {} ({} missing)",
        table.len(),
        first,
        last,
        missing
    ));

    Ok(lines.join("\n"))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use std::fs;

    use kpap::WdcFile;

    use super::*;
    use crate::cli::command::fixture::{self, DAY_1};

    #[tokio::test]
    async fn should_summarise_coverage() {
        let (dir, mut config) = fixture::config();
        let path = dir.path().join("kp2021.wdc");
        fs::write(&path, format!("{DAY_1}\n")).unwrap();
        config.files.push(WdcFile::new(&path, 2021));

        let out = info(&config).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("2020  "));
        assert!(lines[1].ends_with("kp2021.wdc"));
        assert_eq!(
            lines[2],
            "3 daily records from 2020-01-01 to 2021-01-01 (364 missing)"
        );
    }
}
