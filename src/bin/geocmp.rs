use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use geocmp_rs::api::DEFAULT_BASE_URL;
use geocmp_rs::{
    Client, DataService, DateSpec, RetryPolicy, Scope, ServiceConfig, fallback, format,
    indicators, stats, storage,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "geocmp",
    version,
    about = "Fetch, cache & compare socioeconomic indicators across countries and regions"
)]
struct Cli {
    /// Seconds a cached response stays fresh.
    #[arg(long, default_value_t = 3600)]
    ttl_secs: u64,
    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// Override the API base URL (mainly for testing).
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch observations (and optionally save and print stats).
    Get(GetArgs),
    /// Compare entities on their latest values per indicator.
    Compare(CompareArgs),
    /// List selectable entities for a scope.
    Entities(EntitiesArgs),
    /// Print the curated indicator catalog.
    Indicators,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScopeArg {
    Countries,
    UsStates,
    IndiaStates,
    AustraliaStates,
    CanadaProvinces,
}

impl From<ScopeArg> for Scope {
    fn from(s: ScopeArg) -> Scope {
        match s {
            ScopeArg::Countries => Scope::Countries,
            ScopeArg::UsStates => Scope::UsStates,
            ScopeArg::IndiaStates => Scope::IndiaStates,
            ScopeArg::AustraliaStates => Scope::AustraliaStates,
            ScopeArg::CanadaProvinces => Scope::CanadaProvinces,
        }
    }
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Entity codes separated by comma or semicolon (e.g., USA,CHN or EUU)
    #[arg(short, long)]
    entities: String,
    /// Indicator codes or catalog names, comma/semicolon separated
    #[arg(short, long)]
    indicators: String,
    /// Year (YYYY) or range (YYYY:YYYY)
    #[arg(short = 'd', long)]
    date: Option<String>,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print grouped statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print a data-quality report to stdout.
    #[arg(long, default_value_t = false)]
    quality: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Entity codes separated by comma or semicolon
    #[arg(short, long)]
    entities: String,
    /// Indicator codes or catalog names, comma/semicolon separated
    #[arg(short, long)]
    indicators: String,
    /// Year (YYYY) or range (YYYY:YYYY); defaults to the recent window
    #[arg(short = 'd', long)]
    date: Option<String>,
}

#[derive(Args, Debug)]
struct EntitiesArgs {
    #[arg(long, value_enum, default_value = "countries")]
    scope: ScopeArg,
    /// Skip the API and print the built-in table only.
    #[arg(long, default_value_t = false)]
    offline: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Accept either World Bank codes or catalog display names.
fn resolve_indicators(raw: &str) -> Vec<String> {
    parse_list(raw)
        .into_iter()
        .map(|s| match indicators::code_for_name(&s) {
            Some(code) => code.to_string(),
            None => s,
        })
        .collect()
}

fn parse_date(s: &Option<String>) -> Result<Option<DateSpec>> {
    match s {
        None => Ok(None),
        Some(raw) => DateSpec::parse(raw)
            .map(Some)
            .with_context(|| format!("invalid date spec: {raw} (want YYYY or YYYY:YYYY)")),
    }
}

fn build_service(cli: &Cli) -> DataService {
    let client = Client::new(
        &cli.base_url,
        Duration::from_secs(cli.timeout_secs),
        RetryPolicy::default(),
    );
    DataService::new(
        client,
        ServiceConfig {
            ttl: Duration::from_secs(cli.ttl_secs),
            ..ServiceConfig::default()
        },
    )
}

fn run_get(cli: &Cli, args: &GetArgs) -> Result<()> {
    let svc = build_service(cli);
    let entities = parse_list(&args.entities);
    let codes = resolve_indicators(&args.indicators);
    let date = parse_date(&args.date)?;

    let records = svc.fetch_indicators(&entities, &codes, date)?;
    println!("fetched {} observations", records.len());

    if let Some(out) = &args.out {
        let fmt = match &args.format {
            Some(f) => f.clone(),
            None => match out.extension().and_then(|e| e.to_str()) {
                Some("json") => OutFormat::Json,
                _ => OutFormat::Csv,
            },
        };
        match fmt {
            OutFormat::Csv => storage::save_csv(&records, out)?,
            OutFormat::Json => storage::save_json(&records, out)?,
        }
        println!("saved to {}", out.display());
    }

    if args.stats {
        for s in stats::grouped_summary(&records) {
            println!(
                "{} {} n={} missing={} min={} max={} mean={} median={}",
                s.key.indicator_id,
                s.key.entity_code,
                s.count,
                s.missing,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median),
            );
        }
    }

    if args.quality {
        let q = stats::assess_quality(&records);
        println!(
            "quality: {:?} ({:.1}% complete, {}/{} values present)",
            q.quality, q.completeness, q.valid, q.total
        );
    }

    Ok(())
}

fn run_compare(cli: &Cli, args: &CompareArgs) -> Result<()> {
    let svc = build_service(cli);
    let entities = parse_list(&args.entities);
    let codes = resolve_indicators(&args.indicators);
    // Recent window mirrors the dashboard default when no date is given.
    let date = parse_date(&args.date)?.or(Some(DateSpec::Range {
        start: 2018,
        end: 2023,
    }));

    let latest = svc.latest_values(&entities, &codes, date)?;
    if latest.is_empty() {
        println!("no data for the requested combination");
        return Ok(());
    }
    for r in &latest {
        let display = if r.indicator_name.contains('%') {
            format::format_percentage(r.value, 2)
        } else {
            format::format_number(r.value)
        };
        println!(
            "{:<12} {:<50} {:>6} {:>12}",
            r.entity_code, r.indicator_name, r.year, display
        );
    }
    Ok(())
}

fn run_entities(cli: &Cli, args: &EntitiesArgs) -> Result<()> {
    let scope: Scope = args.scope.into();
    let list = if args.offline {
        fallback::list_entities(scope)
    } else {
        build_service(cli).list_entities(scope)
    };
    for e in list {
        println!("{:<6} {}", e.code, e.name);
    }
    Ok(())
}

fn run_indicators() -> Result<()> {
    for def in indicators::catalog() {
        match def.description {
            Some(d) => println!("{:<20} {}\n{:20} {}", def.code, def.name, "", d),
            None => println!("{:<20} {}", def.code, def.name),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match &cli.cmd {
        Command::Get(args) => run_get(&cli, args),
        Command::Compare(args) => run_compare(&cli, args),
        Command::Entities(args) => run_entities(&cli, args),
        Command::Indicators => run_indicators(),
    }
}
