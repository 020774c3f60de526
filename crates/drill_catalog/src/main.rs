//! Drill Catalog CLI
//!
//! 코퍼스 추출 / 커리큘럼 생성 / 단일 페이지 / 리포트 / MsgPack+LZ4 팩

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use drill_catalog::{CatalogConfig, PackMetadata};
#[cfg(feature = "cli")]
use drill_core::{CatalogSummary, DrillPipeline, DrillRecord, PipelineConfig, TemplateTables};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "drill_catalog")]
#[command(about = "Build drill catalogs from session plans or the curriculum", long_about = None)]
struct Cli {
    /// Template table overrides (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Extract drills from a pre-extracted text corpus
    Extract {
        /// Corpus root (<root>/<AGE_GROUP>/<name>.txt)
        #[arg(long)]
        corpus: PathBuf,

        /// Output catalog JSON path [default: drills.json]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate the template-driven curriculum catalog
    Generate {
        /// Output catalog JSON path [default: drills.json]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Build one record from a drill web page's text
    Page {
        /// Page title
        #[arg(long)]
        title: String,

        /// Visible page text file
        #[arg(long)]
        text: PathBuf,

        /// Age group used when the page has none
        #[arg(long, default_value = "U12")]
        age_group: String,

        #[arg(long, default_value = "1")]
        week: u32,

        #[arg(long, default_value = "General Training")]
        theme: String,

        /// Page URL recorded as the source
        #[arg(long)]
        source: Option<String>,

        /// Output JSON path
        #[arg(long)]
        out: PathBuf,
    },

    /// Print catalog statistics
    Report {
        /// Catalog JSON path
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Pack a catalog into MsgPack+LZ4
    Pack {
        /// Catalog JSON path
        #[arg(long)]
        catalog: PathBuf,

        /// Output MsgPack+LZ4 file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify pack after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn pipeline_config(base: PipelineConfig, config: Option<&Path>) -> Result<PipelineConfig> {
    match config {
        Some(path) => {
            let templates = TemplateTables::from_yaml_file(path)
                .with_context(|| format!("Failed to load template config: {}", path.display()))?;
            Ok(base.with_templates(templates))
        }
        None => Ok(base),
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let catalog_config = CatalogConfig::default();

    match cli.command {
        Commands::Extract { corpus, out } => {
            let out = out.unwrap_or_else(|| catalog_config.output.clone());
            println!("🔨 Extracting drills from corpus...");
            println!("   Corpus: {}", corpus.display());
            println!("   Output: {}", out.display());

            let config = pipeline_config(PipelineConfig::extract(), cli.config.as_deref())?;
            let docs = drill_catalog::load_corpus(&corpus)?;
            let records = DrillPipeline::new(config).process_batch(&docs);
            println!("   Documents: {}", docs.len());

            save_catalog(records, &out, &catalog_config)?;
        }

        Commands::Generate { out } => {
            let out = out.unwrap_or_else(|| catalog_config.output.clone());
            println!("🔨 Generating curriculum catalog...");
            println!("   Output: {}", out.display());

            let config = pipeline_config(PipelineConfig::curriculum(), cli.config.as_deref())?;
            let records = drill_core::generate_catalog(&DrillPipeline::new(config));

            save_catalog(records, &out, &catalog_config)?;
        }

        Commands::Page { title, text, age_group, week, theme, source, out } => {
            println!("🔨 Building drill from page...");
            println!("   Title:  {}", title);
            println!("   Text:   {}", text.display());

            let page_text = std::fs::read_to_string(&text)
                .with_context(|| format!("Failed to read page text: {}", text.display()))?;
            let config = pipeline_config(PipelineConfig::extract(), cli.config.as_deref())?;
            let record = DrillPipeline::new(config).process_page(
                &title,
                &page_text,
                &age_group,
                week,
                &theme,
                source.as_deref(),
            );
            println!("   Drill:  {} ({}, {} players)", record.name, record.category, record.player_count);

            save_catalog(vec![record], &out, &catalog_config)?;
        }

        Commands::Report { catalog } => {
            let records = drill_core::read_catalog(&catalog)
                .with_context(|| format!("Failed to load catalog: {}", catalog.display()))?;
            let summary = CatalogSummary::from_records(&records, &catalog_config.age_order);
            println!("{}", drill_catalog::render_report(&summary));
        }

        Commands::Pack { catalog, out, schema_version, verify, metadata } => {
            println!("🔨 Packing drill catalog...");
            println!("   Input:  {}", catalog.display());
            println!("   Output: {}", out.display());
            println!("   Schema: {}", schema_version);

            let meta = drill_catalog::pack_catalog(&catalog, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_pack_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn save_catalog(mut records: Vec<DrillRecord>, out: &Path, config: &CatalogConfig) -> Result<()> {
    let renamed = drill_catalog::finalize_catalog(&mut records, config);
    drill_core::write_catalog(out, &records)
        .with_context(|| format!("Failed to write catalog: {}", out.display()))?;

    let summary = CatalogSummary::from_records(&records, &config.age_order);
    println!("\n✅ Saved {} drills to: {}", records.len(), out.display());
    if renamed > 0 {
        println!("   Renamed duplicate ids: {}", renamed);
    }
    for (age, count) in &summary.by_age {
        println!("   {}: {} drills", age, count);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &PackMetadata) {
    println!("\n✅ Pack built successfully!");
    println!("   Drills:          {}", meta.drill_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_pack_integrity(pack_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying pack integrity...");
    let is_valid = drill_catalog::verify_pack(pack_path, checksum)?;

    if is_valid {
        let drills = drill_catalog::load_pack(pack_path)?;
        println!("✅ Pack verification passed ({} drills)", drills.len());
        Ok(())
    } else {
        anyhow::bail!("❌ Pack verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &PackMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)
        .with_context(|| format!("Failed to write metadata: {}", path.display()))?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("drill_catalog CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
