use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{domain::pagination::PageSize, utils::version};

/// Where letters are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// The hosted backend's REST endpoint
    #[default]
    Rest,
    /// A local JSON or JSON5 export of the letters table
    File,
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        value_parser = parse_rate,
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        value_parser = parse_rate,
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Show letters addressed to NAME (overrides the config file)"
    )]
    pub viewer: Option<String>,

    #[arg(
        short,
        long,
        value_enum,
        default_value_t = SourceKind::Rest,
        help = "Where to read letters from"
    )]
    pub source: SourceKind,

    #[arg(
        long,
        value_name = "PATH",
        required_if_eq("source", "file"),
        help = "Letters export to read when --source=file"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = parse_page_size,
        help = "Letters per page (overrides the config file)"
    )]
    pub page_size: Option<PageSize>,
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("`{s}` must be a positive number"))
    }
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    let size: usize = s
        .parse()
        .map_err(|e| format!("`{s}` is not a page size: {e}"))?;
    PageSize::new(size).ok_or_else(|| "page size must be at least 1".to_string())
}
