use animerec::{save_schema, AnimeId, CsvSource, Recommender, RecommenderConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Content-based anime recommendations
#[derive(Parser, Debug)]
#[command(name = "animerec")]
#[command(about = "Content-based anime recommendations", long_about = None)]
struct Args {
    /// Path to the anime catalog CSV
    #[arg(short, long, default_value = "./dataset/anime.csv")]
    dataset: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Build single-threaded
    #[arg(long)]
    sequential: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries whose name contains QUERY
    List {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(short, long)]
        limit: Option<usize>,

        /// Match names case-sensitively
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Recommend the titles most similar to ID
    Recommend {
        id: AnimeId,

        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Write the fitted feature schema as JSON
    Schema {
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting animerec v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    let mut config = RecommenderConfig {
        parallel: !args.sequential,
        ..RecommenderConfig::default()
    };
    if let Command::List { case_sensitive: true, .. } = args.command {
        config.case_insensitive = false;
    }

    let mut source = CsvSource::from_path(&args.dataset)?;
    let recommender = Recommender::from_source(&mut source, config)?;

    let output = match args.command {
        Command::List { query, page, limit, .. } => {
            let limit = limit.unwrap_or(recommender.config().default_page_limit);
            serde_json::to_string_pretty(&recommender.list(&query, page, limit)?)?
        }
        Command::Recommend { id, top_n } => {
            let top_n = top_n.unwrap_or(recommender.config().default_top_n);
            serde_json::to_string_pretty(&recommender.recommend(id, top_n)?)?
        }
        Command::Schema { out } => {
            let schema = recommender.schema()?;
            save_schema(&schema, &out)?;
            serde_json::to_string_pretty(&serde_json::json!({
                "dimension": schema.dimension,
                "path": out.display().to_string(),
            }))?
        }
    };

    println!("{}", output);
    Ok(())
}
