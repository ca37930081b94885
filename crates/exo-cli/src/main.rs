mod export;
mod links;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use exo_catalog::{ExoConfig, load_catalog, load_missions};
use exo_core::{
    Catalog, ComparisonSet, ComparisonTable, DistanceBand, FilterPolicy, MetricCategory,
    NarrativeContext, OrbitBand, PlanetRecord, RankClass, SizeBand, TemperatureBand,
    earth_like_breakdown, earth_like_score, metrics_in, narrate, search, weirdness_breakdown,
    weirdness_score,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::export::ExportFormat;
use crate::links::learn_more_url;

#[derive(Parser)]
#[command(name = "exo", about = "Browse, compare and narrate the exoplanet catalog")]
struct Cli {
    /// Catalog file (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List planets under a filter, optionally narrowed by search text
    List {
        /// all, earthlike, weird or closest (defaults to config)
        #[arg(long)]
        filter: Option<FilterPolicy>,

        /// Match against name, host star, discovery method and facility
        #[arg(long)]
        search: Option<String>,

        /// Maximum planets to print (defaults to config page size)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the listed records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Surface a random planet
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show one planet in detail
    Show {
        /// Planet name
        name: String,

        /// Narrative framing: random, earthlike, weird or closest
        #[arg(long)]
        context: Option<NarrativeContext>,
    },

    /// Compare up to five planets side by side
    Compare {
        /// Planet names
        #[arg(required = true)]
        names: Vec<String>,

        /// Include Earth as a reference
        #[arg(long)]
        earth: bool,

        /// Restrict to one metric category
        #[arg(long)]
        category: Option<MetricCategory>,

        /// Export instead of printing a table
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Write the export to a file instead of stdout
        #[arg(long, requires = "export")]
        output: Option<PathBuf>,
    },

    /// Show the space mission timeline, newest first
    Timeline,

    /// Show catalog statistics
    Stats,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ExoConfig::load().context("failed to load config")?;

    match &cli.command {
        Commands::List {
            filter,
            search,
            limit,
            json,
        } => {
            let filter = filter.unwrap_or(config.default_filter);
            let limit = limit.unwrap_or(config.page_size());
            cmd_list(&cli, &config, filter, search.as_deref(), limit, *json)
        }
        Commands::Random { seed } => cmd_random(&cli, &config, *seed),
        Commands::Show { name, context } => {
            let context = context.unwrap_or(config.default_filter.narrative_context());
            cmd_show(&cli, &config, name, context)
        }
        Commands::Compare {
            names,
            earth,
            category,
            export,
            output,
        } => cmd_compare(
            &cli,
            &config,
            names,
            *earth,
            *category,
            *export,
            output.as_deref(),
        ),
        Commands::Timeline => cmd_timeline(&config),
        Commands::Stats => cmd_stats(&cli, &config),
    }
}

fn open_catalog(cli: &Cli, config: &ExoConfig) -> Result<Catalog> {
    let path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path());
    load_catalog(&path).with_context(|| format!("failed to load catalog {}", path.display()))
}

fn find_planet<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a PlanetRecord> {
    match catalog.find(name) {
        Some(p) => Ok(p),
        None => bail!("no planet named '{name}' in the catalog"),
    }
}

/// Result count line shown above a listing.
fn summary_line(shown: usize, total: usize, filter: FilterPolicy, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        if shown == total {
            format!("Showing all {total} planets")
        } else {
            format!("Found {shown} planets matching filter")
        }
    } else if filter == FilterPolicy::All {
        format!("Found {shown} planets matching \"{query}\"")
    } else {
        format!("Found {shown} planets matching \"{query}\" ({filter} filter applied)")
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "Unknown".to_string(), |v| format!("{v:.2}"))
}

fn cmd_list(
    cli: &Cli,
    config: &ExoConfig,
    filter: FilterPolicy,
    query: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let catalog = open_catalog(cli, config)?;
    let query = query.unwrap_or("");
    let selected = search(catalog.select(filter), query);
    tracing::debug!(
        "filter={filter}, query={query:?}: {} of {} planets",
        selected.len(),
        catalog.len()
    );

    if json {
        let page: Vec<&PlanetRecord> = selected.iter().take(limit).copied().collect();
        let json = serde_json::to_string_pretty(&page).context("failed to serialize")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", summary_line(selected.len(), catalog.len(), filter, query));
    for p in selected.iter().take(limit) {
        let host = p.host().unwrap_or("unknown host");
        match filter.badge(p) {
            Some(badge) => println!("  {}  ({host})  [{badge}]", p.name),
            None => println!("  {}  ({host})", p.name),
        }
    }
    if selected.len() > limit {
        println!("  ... and {} more", selected.len() - limit);
    }
    Ok(())
}

fn cmd_random(cli: &Cli, config: &ExoConfig, seed: Option<u64>) -> Result<()> {
    let catalog = open_catalog(cli, config)?;
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let Some(p) = catalog.pick_random(&mut rng) else {
        println!("(catalog is empty)");
        return Ok(());
    };
    println!("{}", p.name);
    println!();
    println!("{}", narrate(p, NarrativeContext::Random));
    println!();
    println!("Learn more: {}", learn_more_url(&p.name));
    Ok(())
}

fn cmd_show(cli: &Cli, config: &ExoConfig, name: &str, context: NarrativeContext) -> Result<()> {
    let catalog = open_catalog(cli, config)?;
    let p = find_planet(&catalog, name)?;

    println!("{}", p.name);
    println!("host:        {}", p.host().unwrap_or("Unknown"));
    println!("spectral:    {}", p.spectral_type().unwrap_or("Unknown"));
    println!("radius:      {} R⊕", format_optional(p.radius()));
    println!("mass:        {} M⊕", format_optional(p.mass()));
    println!("period:      {} days", format_optional(p.period()));
    println!("distance:    {} pc", format_optional(p.distance()));
    println!("temperature: {} K", format_optional(p.temperature()));
    println!("insolation:  {} S⊕", format_optional(p.insolation()));
    println!(
        "discovered:  {} ({}, {})",
        p.discovery_year
            .map_or_else(|| "Unknown".to_string(), |y| y.to_string()),
        p.method().unwrap_or("Unknown"),
        p.facility().unwrap_or("Unknown")
    );

    let bands = [
        p.radius().map(|r| SizeBand::from_earth_radii(r).label()),
        p.temperature().map(|t| TemperatureBand::from_kelvin(t).label()),
        p.period().map(|d| OrbitBand::from_days(d).label()),
        p.distance().map(|d| DistanceBand::from_parsecs(d).label()),
    ];
    let bands: Vec<&str> = bands.into_iter().flatten().collect();
    if !bands.is_empty() {
        println!("bands:       {}", bands.join(", "));
    }

    println!("Earth-like:  {}/100", earth_like_score(p));
    println!("Weirdness:   {}/100", weirdness_score(p));
    println!();
    println!("{}", narrate(p, context));
    println!();
    println!("Learn more: {}", learn_more_url(&p.name));

    if cli.verbose {
        for (label, breakdown) in [
            ("earth-like", earth_like_breakdown(p)),
            ("weirdness", weirdness_breakdown(p)),
        ] {
            let parts: Vec<String> = breakdown
                .parts
                .iter()
                .map(|c| format!("{}={:.1}", c.attribute, c.points))
                .collect();
            eprintln!("--- {label}: {} ---", parts.join(", "));
        }
    }
    Ok(())
}

fn rank_marker(rank: RankClass) -> &'static str {
    match rank {
        RankClass::Max => " ▲",
        RankClass::Min => " ▼",
        RankClass::Unknown => " ?",
        RankClass::Neutral => "",
    }
}

fn render_table(table: &ComparisonTable) -> String {
    let label_width = table
        .rows
        .iter()
        .map(|r| r.metric.header().chars().count())
        .max()
        .unwrap_or(0)
        .max("Metric".len());

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|c| format!("{}{}", c.text, rank_marker(c.rank)))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = table
        .planets
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    let mut header = format!("{:<label_width$}", "Metric");
    for (name, width) in table.planets.iter().zip(&widths) {
        header.push_str(&format!("  {name:<width$}"));
    }
    lines.push(header.trim_end().to_string());
    for (row, texts) in table.rows.iter().zip(&cells) {
        let mut line = format!("{:<label_width$}", row.metric.header());
        for (text, width) in texts.iter().zip(&widths) {
            line.push_str(&format!("  {text:<width$}"));
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn cmd_compare(
    cli: &Cli,
    config: &ExoConfig,
    names: &[String],
    earth: bool,
    category: Option<MetricCategory>,
    export: Option<ExportFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let catalog = open_catalog(cli, config)?;

    let mut set = ComparisonSet::new();
    if earth && let Err(e) = set.add_reference() {
        tracing::warn!("not adding Earth: {e}");
    }
    for name in names {
        let p = find_planet(&catalog, name)?;
        if let Err(e) = set.add(p.clone()) {
            tracing::warn!("skipping {}: {e}", p.name);
        }
    }

    let metrics = metrics_in(category);

    let Some(format) = export else {
        if let Some(category) = category {
            println!("{}", category.label());
        }
        println!("{}", render_table(&set.compare(&metrics)));
        return Ok(());
    };

    let rendered = format.render(&metrics, &set.records())?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("exported {} planets to {}", set.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_timeline(config: &ExoConfig) -> Result<()> {
    let path = config.missions_path();
    let missions = load_missions(&path)
        .with_context(|| format!("failed to load missions {}", path.display()))?;
    for mission in &missions {
        println!("{}  {}", mission.year, mission.name);
        if !mission.blurb.is_empty() {
            println!("      {}", mission.blurb);
        }
        if let Some(link) = &mission.link {
            println!("      {link}");
        }
    }
    Ok(())
}

fn cmd_stats(cli: &Cli, config: &ExoConfig) -> Result<()> {
    let catalog = open_catalog(cli, config)?;
    println!("planets:    {}", catalog.len());
    for policy in FilterPolicy::ALL {
        if policy == FilterPolicy::All {
            continue;
        }
        println!(
            "{:<12}{}",
            format!("{policy}:"),
            catalog.select(policy).len()
        );
    }
    Ok(())
}
