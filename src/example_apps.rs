use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, error::ErrorKind};

use crate::config::ExploreConfig;
use crate::constants::columns::{OUTCOME, PREGORDR, PRGLNGTH, TOTALWGT_KG};
use crate::constants::explore::{
    DEFAULT_PREG_PATHS, DEFAULT_RESP_PATHS, PREG_PATH_ENV, PREG_SOURCE_ID, RESP_PATH_ENV,
    RESP_SOURCE_ID,
};
use crate::conversions::{clean_pregnancy, total_weight_kg};
use crate::data::{FieldAccess, FieldValue, PregnancyRecord, RespondentRecord};
use crate::errors::SurveyError;
use crate::source::{JsonLinesSource, JsonLinesSourceConfig, materialize};
use crate::table::RecordTable;
use crate::types::CaseId;

#[derive(Debug, Parser)]
#[command(
    name = "nsfg_explore",
    disable_help_subcommand = true,
    about = "Explore NSFG pregnancy and respondent records",
    long_about = "Load the female pregnancy and respondent files, select columns and rows, and look up a respondent's pregnancies through the caseid index.",
    after_help = "Data paths are resolved in order by explicit arg, environment variables (NSFG_PREG_PATH, NSFG_RESP_PATH), then project defaults."
)]
struct ExploreCli {
    #[arg(
        long = "preg",
        value_name = "PATH",
        help = "Pregnancy records file (.jsonl)"
    )]
    pregnancy_path: Option<PathBuf>,
    #[arg(
        long = "resp",
        value_name = "PATH",
        help = "Respondent records file (.jsonl)"
    )]
    respondent_path: Option<PathBuf>,
    #[arg(long, help = "Respondent caseid to look up")]
    caseid: Option<CaseId>,
    #[arg(
        long = "head",
        value_parser = parse_positive_usize,
        help = "Number of rows shown in the preview"
    )]
    head_rows: Option<usize>,
    #[arg(
        long = "skip-invalid-lines",
        help = "Skip malformed lines instead of failing"
    )]
    skip_invalid_lines: bool,
    #[arg(long = "raw", help = "Keep raw NSFG codes (no cleaning pass)")]
    raw: bool,
}

/// Run the exploration walkthrough: column/row selection, the caseid index,
/// respondent filtering, and the kilogram birth weight column.
pub fn run_explore<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<ExploreCli, _>(std::iter::once("nsfg_explore".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let defaults = ExploreConfig::default();
    let pregnancy_path = resolve_data_path(
        cli.pregnancy_path,
        std::env::var(PREG_PATH_ENV).ok(),
        &DEFAULT_PREG_PATHS,
    )
    .ok_or("Could not locate the pregnancy file; pass --preg or set NSFG_PREG_PATH.")?;
    let respondent_path = resolve_data_path(
        cli.respondent_path,
        std::env::var(RESP_PATH_ENV).ok(),
        &DEFAULT_RESP_PATHS,
    );
    let config = ExploreConfig {
        pregnancy_path,
        respondent_path,
        caseid: cli.caseid.unwrap_or(defaults.caseid),
        head_rows: cli.head_rows.unwrap_or(defaults.head_rows),
        skip_invalid_lines: cli.skip_invalid_lines,
        clean: !cli.raw,
    };

    let preg = load_pregnancies(&config)?;
    println!(
        "Loaded {} pregnancy records from {}",
        preg.len(),
        config.pregnancy_path.display()
    );
    print_table_overview(&preg, config.head_rows)?;
    print_respondent_pregnancies(&preg, config.caseid)?;
    print_total_weight_kg(&preg, config.head_rows);

    match &config.respondent_path {
        Some(path) => {
            let resp = load_respondents(path, config.skip_invalid_lines)?;
            println!();
            println!(
                "Loaded {} respondent records from {}",
                resp.len(),
                path.display()
            );
            print_respondent(&resp, &preg, config.caseid);
        }
        None => println!("No respondent file found; skipping respondent queries."),
    }
    Ok(())
}

/// Load the pregnancy file named by `config`, cleaning records unless disabled.
pub fn load_pregnancies(
    config: &ExploreConfig,
) -> Result<RecordTable<PregnancyRecord>, SurveyError> {
    let mut source_config: JsonLinesSourceConfig<PregnancyRecord> =
        JsonLinesSourceConfig::new(PREG_SOURCE_ID, &config.pregnancy_path)
        .with_skip_invalid_lines(config.skip_invalid_lines);
    if config.clean {
        source_config = source_config.with_transform(Arc::new(clean_pregnancy));
    }
    materialize(&JsonLinesSource::open(source_config)?)
}

/// Load a respondent file.
pub fn load_respondents(
    path: &Path,
    skip_invalid_lines: bool,
) -> Result<RecordTable<RespondentRecord>, SurveyError> {
    let source_config: JsonLinesSourceConfig<RespondentRecord> =
        JsonLinesSourceConfig::new(RESP_SOURCE_ID, path)
        .with_skip_invalid_lines(skip_invalid_lines);
    materialize(&JsonLinesSource::open(source_config)?)
}

/// Pick the first usable data path: explicit arg, then environment, then the
/// first default candidate that exists on disk.
pub(crate) fn resolve_data_path(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    defaults: &[&str],
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(value));
    }
    defaults
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

fn print_table_overview(
    preg: &RecordTable<PregnancyRecord>,
    head_rows: usize,
) -> Result<(), SurveyError> {
    println!();
    println!("Columns: {}", preg.columns().join(", "));
    print_rows(preg.head(head_rows));

    if let Some(name) = preg.column_name_at(1) {
        println!("Column at position 1: {name}");
    }
    if preg.is_empty() {
        return Ok(());
    }
    println!("{PREGORDR}[0] = {}", preg.value(0, PREGORDR)?);
    let end = preg.len().min(5);
    let start = end.min(2);
    let slice: Vec<String> = preg
        .column_at_positions(PREGORDR, &(start..end).collect::<Vec<_>>())?
        .iter()
        .map(FieldValue::to_string)
        .collect();
    println!("{PREGORDR}[{start}:{end}] = [{}]", slice.join(", "));
    Ok(())
}

fn print_respondent_pregnancies(
    preg: &RecordTable<PregnancyRecord>,
    caseid: CaseId,
) -> Result<(), SurveyError> {
    let index = preg.record_index();
    println!();
    println!(
        "Indexed {} respondents across {} pregnancy records",
        index.len(),
        index.record_count()
    );
    if !index.contains_key(caseid) {
        println!("Respondent {caseid} has no pregnancy records.");
        return Ok(());
    }

    let positions = index.lookup(caseid)?;
    println!("Pregnancy rows for caseid {caseid}: {positions:?}");
    println!(
        "  {OUTCOME}: {}",
        join_values(&preg.column_at_positions(OUTCOME, positions)?)
    );
    println!(
        "  {PRGLNGTH}: {}",
        join_values(&preg.column_at_positions(PRGLNGTH, positions)?)
    );

    let first_birth = preg
        .resolve(&index, caseid)?
        .into_iter()
        .find(|record| record.birthord == Some(1));
    match first_birth.and_then(|record| record.totalwgt_lb) {
        Some(pounds) => println!("  first baby birth weight: {pounds:.4} lb"),
        None => println!("  first baby birth weight: unknown"),
    }
    Ok(())
}

fn print_total_weight_kg(preg: &RecordTable<PregnancyRecord>, head_rows: usize) {
    let derived = preg.derive(TOTALWGT_KG, total_weight_kg);
    let shown: Vec<String> = derived
        .values
        .iter()
        .take(head_rows)
        .map(|value| FieldValue::from(*value).to_string())
        .collect();
    println!();
    println!("{} (first {}): [{}]", derived.name, shown.len(), shown.join(", "));
}

fn print_respondent(
    resp: &RecordTable<RespondentRecord>,
    preg: &RecordTable<PregnancyRecord>,
    caseid: CaseId,
) {
    let rows = resp.filter_by_key(caseid);
    if rows.is_empty() {
        println!("No respondent row for caseid {caseid}.");
        return;
    }
    print_rows(rows.iter().copied());
    let ages: Vec<String> = rows
        .iter()
        .map(|row| FieldValue::from(row.age_r).to_string())
        .collect();
    println!("age_r for caseid {caseid}: {}", ages.join(", "));
    println!(
        "Matching pregnancy rows by filter: {}",
        preg.filter_by_key(caseid).len()
    );
}

fn print_rows<'a, R, It>(rows: It)
where
    R: FieldAccess + 'a,
    It: IntoIterator<Item = &'a R>,
{
    println!("  {}", R::COLUMNS.join("\t"));
    for row in rows {
        let cells: Vec<String> = R::COLUMNS
            .iter()
            .map(|name| row.field(name).unwrap_or(FieldValue::Missing).to_string())
            .collect();
        println!("  {}", cells.join("\t"));
    }
}

fn join_values(values: &[FieldValue]) -> String {
    values
        .iter()
        .map(FieldValue::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse --head value '{raw}' as a positive integer"))?;
    if parsed == 0 {
        return Err("--head must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
