use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tatu_core::{Environment, HttpClient, KvStore, ARTICLES_KV_BINDING};
use tatu_feeds::{init_logging, ArticlePipeline, FeedManager, FeedSource, PageSettings, ReqwestClient, Services};
use tatu_web::AppState;
use tracing::info;

const PROBE_KEY: &str = "tatu:storage-probe";

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarized Hacker News and The Verge feeds", long_about = None)]
pub struct Cli {
    /// Article cache backend: memory or sqlite
    #[arg(long, env = "TATU_STORAGE", default_value = "memory")]
    storage: String,
    /// SQLite database file, used with --storage sqlite
    #[arg(long, env = "TATU_DB_PATH", default_value = tatu_storage::DEFAULT_DB_PATH)]
    db_path: PathBuf,
    #[arg(long, env = "TATU_MODEL", default_value = "placeholder", help = "Summarizer to use. Available models: placeholder (default), deepseek")]
    model: String,
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Articles processed at once per page
    #[arg(long, env = "TATU_CONCURRENCY", default_value_t = tatu_feeds::DEFAULT_CONCURRENCY)]
    concurrency: usize,
    #[arg(long, env = "TATU_PAGE_SIZE", default_value_t = tatu_feeds::DEFAULT_PAGE_SIZE)]
    page_size: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTML site
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
    /// Render one page of a feed to stdout
    Feed {
        /// hacker-news or the-verge
        source: FeedSource,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Run the article pipeline once and print the result as JSON
    Article {
        url: String,
    },
}

async fn check_storage(store: &Arc<dyn KvStore>, storage_type: &str) -> tatu_core::Result<()> {
    store.put(PROBE_KEY, "ok").await?;
    if store.get(PROBE_KEY).await?.as_deref() != Some("ok") {
        return Err(tatu_core::Error::Storage("Failed to read back storage probe".to_string()));
    }
    if let Err(e) = store.delete(PROBE_KEY).await {
        info!("⚠️ Failed to clean up storage probe: {}", e);
    }

    info!("🏦 Storage backend initialized successfully (using {})", storage_type);
    Ok(())
}

fn print_page(source: FeedSource, page: &tatu_core::PageResult) {
    println!(
        "{} - page {} of {} ({} total articles)",
        source.heading(),
        page.current_page,
        page.total_pages,
        page.total_items
    );
    for (i, item) in page.results.iter().enumerate() {
        let status = match &item.result {
            tatu_core::ArticleProcessingResult::Success { data } if data.has_content() => "ok".to_string(),
            tatu_core::ArticleProcessingResult::Success { .. } => "no content".to_string(),
            tatu_core::ArticleProcessingResult::Failure { error } => format!("failed: {}", error),
        };
        println!("{:>3}. {} [{}]", i + 1, item.entry.title, status);
        println!("     {}", item.entry.link);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store = tatu_storage::create_storage(&cli.storage, Some(&cli.db_path)).await?;
    check_storage(&store, &cli.storage)
        .await
        .with_context(|| format!("storage backend '{}' is not usable", cli.storage))?;

    let model = tatu_inference::create_model(Some(tatu_inference::Config {
        api_key: cli.api_key.clone(),
        model_name: Some(cli.model.clone()),
    }))?;
    info!("🧠 Summarizer initialized successfully (using {})", model.name());

    let environment = Environment::new()
        .with_kv(ARTICLES_KV_BINDING, store)
        .with_ai(model);
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new()?);
    let settings = PageSettings::new(cli.page_size, cli.concurrency);

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState::new(environment, http, settings);
            tatu_web::serve(state, &format!("{}:{}", host, port)).await?;
        }
        Commands::Feed { source, page } => {
            let services = Services::from_environment(&environment, http)?;
            let manager = FeedManager::new(&services, settings);
            let result = manager.render(source, page).await?;
            print_page(source, &result);
        }
        Commands::Article { url } => {
            let services = Services::from_environment(&environment, http)?;
            let summary = ArticlePipeline::new(&services).process(&url).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
