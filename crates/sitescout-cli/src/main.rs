//! Sitescout CLI - query site content from the terminal

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sitescout_core::config::Config;
use sitescout_core::domain::content::{ContentCatalog, display_date, parse_date};
use sitescout_core::domain::listing::{
    BlogAdapter, BlogRepository, ListingController, ListingPage, LoadOutcome, Paginator,
};
use sitescout_core::domain::search::{SearchOutcome, SearchResults, SearchService, SortBy, Suggestion, Tab};
use sitescout_core::domain::state::SearchState;
use sitescout_core::infrastructure::blog::{BlogApiClient, InMemoryBlogRepository};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "sitescout")]
#[command(author, version, about = "Search and browse marketing site content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Content catalog JSON file (defaults to the bundled demo catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Autocomplete suggestions for a query
    Suggest {
        /// Search text
        query: String,
    },

    /// Full search results grouped by content type
    Search {
        /// Search text
        query: Option<String>,
        /// Result tab (all, services, portfolio, industries, case-studies, knowledge, blog)
        #[arg(short, long)]
        tab: Option<String>,
        /// Sort order (relevance, a-z, z-a, recent, oldest)
        #[arg(short, long)]
        sort: Option<String>,
        /// Search page query string, e.g. "?q=seo&tab=blog"
        #[arg(long, conflicts_with_all = ["query", "tab", "sort"])]
        url: Option<String>,
    },

    /// Paginated blog listing
    Blog {
        /// Listing query string, e.g. "?page=2&category=SEO"
        #[arg(long, conflicts_with_all = ["page", "category", "tag", "q"])]
        url: Option<String>,
        /// Page number
        #[arg(short, long)]
        page: Option<u32>,
        /// Category filter
        #[arg(short, long)]
        category: Option<String>,
        /// Tag filter
        #[arg(short = 'g', long)]
        tag: Option<String>,
        /// Text filter
        #[arg(long)]
        q: Option<String>,
    },

    /// Show the page-index list for a page
    Pages {
        /// Current page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Total number of pages
        #[arg(short, long)]
        total: u32,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitescout=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest { query } => {
            let (config, catalog) = load_context(cli.catalog.as_deref())?;
            cmd_suggest(&config, &catalog, &query, cli.format, cli.quiet)
        }

        Commands::Search {
            query,
            tab,
            sort,
            url,
        } => {
            let (config, catalog) = load_context(cli.catalog.as_deref())?;
            let state = search_state(query, tab.as_deref(), sort.as_deref(), url.as_deref())?;
            cmd_search(&config, &catalog, &state, cli.format, cli.quiet)
        }

        Commands::Blog {
            url,
            page,
            category,
            tag,
            q,
        } => {
            let (config, catalog) = load_context(cli.catalog.as_deref())?;
            let state = listing_state(url.as_deref(), page, category.as_deref(), tag.as_deref(), q);
            cmd_blog(&config, &catalog, &state, cli.format, cli.quiet).await
        }

        Commands::Pages { page, total } => {
            let config = Config::load()?;
            cmd_pages(&config, page, total, cli.format)
        }

        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

fn load_context(catalog_path: Option<&Path>) -> anyhow::Result<(Config, ContentCatalog)> {
    let config = Config::load()?;
    let catalog = match catalog_path {
        Some(path) => ContentCatalog::load(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => ContentCatalog::demo().context("Bundled demo catalog is invalid")?,
    };
    debug!(records = catalog.len(), "Content catalog ready");
    Ok((config, catalog))
}

fn search_state(
    query: Option<String>,
    tab: Option<&str>,
    sort: Option<&str>,
    url: Option<&str>,
) -> anyhow::Result<SearchState> {
    if let Some(url) = url {
        return Ok(SearchState::from_query_string(url));
    }

    let mut state = SearchState::new(query.unwrap_or_default());
    if let Some(tab) = tab {
        let tab = Tab::from_str(tab).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown tab '{}'. Expected one of: {}",
                tab,
                Tab::all().map(|t| t.as_str()).join(", ")
            )
        })?;
        state = state.with_tab(tab);
    }
    if let Some(sort) = sort {
        let sort = SortBy::from_str(sort).ok_or_else(|| {
            anyhow::anyhow!("Unknown sort '{}'. Expected relevance, a-z, z-a, recent, or oldest", sort)
        })?;
        state = state.with_sort(sort);
    }
    Ok(state)
}

fn listing_state(
    url: Option<&str>,
    page: Option<u32>,
    category: Option<&str>,
    tag: Option<&str>,
    q: Option<String>,
) -> SearchState {
    if let Some(url) = url {
        return SearchState::from_query_string(url);
    }
    let state = SearchState::default()
        .with_query(q.unwrap_or_default())
        .with_category(category)
        .with_tag(tag);
    state.with_page(page.unwrap_or(1))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_suggest(
    config: &Config,
    catalog: &ContentCatalog,
    query: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let service = SearchService::from_catalog(catalog, config.search.clone());
    let suggestions = service.suggest(query);

    if format == OutputFormat::Json {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        if !quiet {
            println!("No suggestions for \"{}\"", query.trim());
        }
        return Ok(());
    }
    for line in suggestion_lines(&suggestions) {
        println!("{}", line);
    }
    Ok(())
}

fn suggestion_lines(suggestions: &[Suggestion]) -> Vec<String> {
    suggestions
        .iter()
        .map(|s| format!("[{}] {} ({})\n    {}", s.kind, s.title, s.url, s.description))
        .collect()
}

fn cmd_search(
    config: &Config,
    catalog: &ContentCatalog,
    state: &SearchState,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let service = SearchService::from_catalog(catalog, config.search.clone());
    let outcome = service.search(state);

    if format == OutputFormat::Json {
        return print_json(&outcome);
    }

    match outcome {
        SearchOutcome::Browse { popular_categories } => {
            if !quiet {
                println!("Enter a search term, or browse a popular category:");
            }
            for category in popular_categories {
                println!("  - {}", category);
            }
        }
        SearchOutcome::Results(results) => print_search_results(&results, quiet),
    }
    Ok(())
}

fn print_search_results(results: &SearchResults, quiet: bool) {
    if !quiet {
        println!(
            "{} results for \"{}\" (sorted by {})",
            results.grand_total, results.query, results.sort_by
        );
        let tabs: Vec<String> = results
            .tab_counts
            .iter()
            .map(|c| {
                if c.tab == results.active_tab {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        println!("{}", tabs.join(" | "));
        println!();
    }

    if let Some(message) = &results.empty_message {
        println!("{}", message);
        return;
    }

    if results.active_tab == Tab::All {
        for preview in &results.previews {
            println!("{}", preview.tab.label());
            for item in &preview.items {
                println!("  {} ({})", item.title, item.url);
            }
            if let Some(view_all) = &preview.view_all {
                println!("  {} -> {}", view_all.label, view_all.href);
            }
            println!();
        }
        return;
    }

    if let Some(family) = results.active_tab.family() {
        for item in results.results.family(family) {
            println!("{} ({})", item.title, item.url);
            if !quiet {
                println!("    {}", item.description);
                if let Some(meta) = &item.meta {
                    println!("    {}", meta);
                }
            }
        }
    }
}

async fn cmd_blog(
    config: &Config,
    catalog: &ContentCatalog,
    state: &SearchState,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let repository: Arc<dyn BlogRepository> = match config.blog.resolved_api_base_url() {
        Some(_) => {
            let client = BlogApiClient::from_config(&config.blog)?;
            info!(base_url = client.base_url(), "Using blog API");
            Arc::new(client)
        }
        None => Arc::new(InMemoryBlogRepository::new(catalog.blog.clone())),
    };

    let adapter = BlogAdapter::new(repository, config.blog.fallback_categories.clone());
    let controller = ListingController::new(adapter, &config.listing);

    let page = match controller.load(state).await {
        LoadOutcome::Applied(page) => page,
        LoadOutcome::Superseded { token } => {
            anyhow::bail!("Listing load {} was superseded", token)
        }
    };
    controller.settle();

    if format == OutputFormat::Json {
        return print_json(&page);
    }
    print_listing(&page, quiet);
    Ok(())
}

fn print_listing(page: &ListingPage, quiet: bool) {
    if let Some(error) = &page.error {
        println!("Error {}: {} (retry available)", error.code, error.message);
    }
    if page.degraded.any() && !quiet {
        println!("Some blog data is unavailable; showing fallbacks.");
    }

    if !quiet {
        println!("Categories: {}", page.categories.join(", "));
        if !page.tags.is_empty() {
            let tags: Vec<String> = page
                .tags
                .iter()
                .map(|t| format!("{} ({})", t.name, t.count))
                .collect();
            println!("Tags: {}", tags.join(", "));
        }
        if !page.featured.is_empty() {
            let featured: Vec<&str> = page.featured.iter().map(|p| p.title.as_str()).collect();
            println!("Featured: {}", featured.join(", "));
        }
        println!();
    }

    if let Some(message) = &page.empty_state {
        println!("{}", message);
    }

    for post in &page.posts {
        let date = post
            .publish_date
            .as_deref()
            .and_then(parse_date)
            .map(display_date);
        match (post.author.as_deref(), date) {
            (Some(author), Some(date)) => println!("{} - {} • {}", post.title, author, date),
            (Some(author), None) => println!("{} - {}", post.title, author),
            (None, Some(date)) => println!("{} - {}", post.title, date),
            (None, None) => println!("{}", post.title),
        }
    }

    let info = &page.page_info;
    println!();
    println!(
        "Page {} of {} ({} posts)",
        info.current_page, info.total_pages, info.total_items
    );
    if !quiet {
        let labels: Vec<String> = page
            .links
            .iter()
            .map(|link| match (&link.href, link.current) {
                (_, true) => format!("[{}]", link.label),
                (Some(_), false) => link.label.clone(),
                (None, false) => format!("({})", link.label),
            })
            .collect();
        println!("{}", labels.join(" "));
    }
}

fn cmd_pages(config: &Config, page: u32, total: u32, format: OutputFormat) -> anyhow::Result<()> {
    if total == 0 {
        anyhow::bail!("--total must be at least 1");
    }
    let paginator = Paginator::from_config(&config.listing);
    let items = paginator.page_items(page, total);

    if format == OutputFormat::Json {
        return print_json(&items);
    }
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
