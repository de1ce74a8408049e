//! Command line interface.

pub mod command;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use kpap::{ApQuery, WdcFile};

const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Looks up geomagnetic Kp and Ap indices in yearly WDC files
pub struct Cli {
    /// Directory holding kpYYYY.wdc files
    #[arg(long, env = "KPAP_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use this file for a year instead of searching the data directory
    #[arg(long = "file", value_name = "YEAR=PATH", value_parser = parse_file_arg, global = true)]
    pub files: Vec<WdcFile>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the Kp index at a time
    Kp {
        #[arg(value_parser = parse_time)]
        time: NaiveDateTime,
    },
    /// Get the Ap index at a time
    Ap {
        #[arg(value_parser = parse_time)]
        time: NaiveDateTime,
        /// Mean over the whole day
        #[arg(long, conflicts_with = "window")]
        daily: bool,
        /// Mean over the buckets START..=END hours before TIME, in steps of 3
        #[arg(
            long,
            num_args = 2,
            value_names = ["START", "END"],
            allow_negative_numbers = true
        )]
        window: Option<Vec<i32>>,
    },
    /// Show the loaded files and the dates they cover
    Info {},
}

/// Picks the Ap query mode from the `ap` flags. Clap guarantees at most one is set.
pub fn ap_query(daily: bool, window: Option<&[i32]>) -> ApQuery {
    match (daily, window) {
        (_, Some(&[start, end])) => ApQuery::WindowMean { start, end },
        (true, _) => ApQuery::DailyMean,
        _ => ApQuery::Point,
    }
}

/// Accepts ISO-like date-times, or a bare date meaning midnight.
pub fn parse_time(s: &str) -> Result<NaiveDateTime, String> {
    for format in TIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("`{}` is not a time like 2020-01-01T07:00", s))
}

/// Parses `YEAR=PATH`.
pub fn parse_file_arg(s: &str) -> Result<WdcFile, String> {
    let (year, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected YEAR=PATH, got `{}`", s))?;
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("`{}` is not a year", year))?;

    if path.is_empty() {
        return Err(format!("missing path for year {}", year));
    }

    Ok(WdcFile::new(path, year))
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let bar = ProgressBar::new(size).with_message(message);
    if let Ok(style) = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("##-"));
    }

    bar
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn should_parse_times() {
        assert_eq!(parse_time("2020-01-01T07:00").unwrap(), time("2020-01-01 07:00:00"));
        assert_eq!(parse_time("2020-01-01T07:30:15").unwrap(), time("2020-01-01 07:30:15"));
        assert_eq!(parse_time("2020-01-01 23:59").unwrap(), time("2020-01-01 23:59:00"));
        assert_eq!(parse_time("2020-02-29").unwrap(), time("2020-02-29 00:00:00"));
    }

    #[test]
    fn should_reject_bad_time() {
        assert!(parse_time("yesterday").is_err());
        assert!(parse_time("2021-02-29").is_err());
    }

    #[test]
    fn should_parse_file_arg() {
        let f = parse_file_arg("2020=/data/kp2020.wdc").unwrap();
        assert_eq!(f, WdcFile::new("/data/kp2020.wdc", 2020));

        assert!(parse_file_arg("/data/kp2020.wdc").is_err());
        assert!(parse_file_arg("twenty=/data/kp2020.wdc").is_err());
        assert!(parse_file_arg("2020=").is_err());
    }

    #[test]
    fn should_parse_ap_modes() {
        let cli = Cli::parse_from(["kpap", "ap", "2020-01-01T07:00", "--window", "-3", "21"]);
        match cli.command {
            Commands::Ap { daily, window, .. } => {
                assert_eq!(
                    ap_query(daily, window.as_deref()),
                    ApQuery::WindowMean { start: -3, end: 21 }
                );
            }
            _ => panic!("expected ap command"),
        }

        let cli = Cli::parse_from(["kpap", "ap", "2020-01-01", "--daily"]);
        match cli.command {
            Commands::Ap { daily, window, .. } => {
                assert_eq!(ap_query(daily, window.as_deref()), ApQuery::DailyMean);
            }
            _ => panic!("expected ap command"),
        }

        assert_eq!(ap_query(false, None), ApQuery::Point);
    }

    #[test]
    fn should_reject_daily_with_window() {
        let result = Cli::try_parse_from(["kpap", "ap", "2020-01-01", "--daily", "--window", "0", "21"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_collect_explicit_files() {
        let cli = Cli::try_parse_from([
            "kpap",
            "--file",
            "2019=a.wdc",
            "--file",
            "2020=b.wdc",
            "kp",
            "2019-06-01",
        ])
        .unwrap();

        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.files[1].year, 2020);
    }
}
