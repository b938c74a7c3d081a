//! bookconnect - Terminal Book Browser
//!
//! Browse a JSON book catalog interactively, or print one page of search results as JSON.

use anyhow::{Context, Result};
use bookconnect::config::{Config, ConfigFile, Overrides};
use bookconnect::report::PageReport;
use bookconnect::ui::{ColorTheme, TerminalUI, ThemeName};
use bookconnect::{Application, BookError, Catalog, FilterCriteria};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn cli() -> Command {
    Command::new("bookconnect")
        .version(bookconnect::VERSION)
        .about("Browse a book catalog in the terminal")
        .long_about(
            "bookconnect filters a static book catalog by title, author and genre, shows \
             the matches as a paginated grid of previews and opens details on demand.",
        )
        .arg(
            Arg::new("catalog")
                .help("Path to the catalog JSON file")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML config file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .help("Previews per page")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .help("Color theme: day or night"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .help("Print matching previews as JSON instead of starting the browser")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pages")
                .long("pages")
                .help("Number of pages to print with --print")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(Arg::new("title").long("title").help("Title substring filter"))
        .arg(Arg::new("genre").long("genre").help("Genre id filter, or \"any\""))
        .arg(Arg::new("author").long("author").help("Author id filter, or \"any\""))
}

fn criteria_from(matches: &ArgMatches) -> FilterCriteria {
    let pairs = ["title", "genre", "author"]
        .into_iter()
        .filter_map(|key| matches.get_one::<String>(key).map(|value| (key, value.as_str())));
    FilterCriteria::from_pairs(pairs)
}

fn load_failure_context(path: &Path, err: &BookError) -> String {
    if err.is_integrity_violation() {
        format!(
            "catalog {} is inconsistent; fix the document before browsing",
            path.display()
        )
    } else {
        format!("loading catalog {}", path.display())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = cli().get_matches();

    let theme = matches
        .get_one::<String>("theme")
        .map(|raw| raw.parse::<ThemeName>())
        .transpose()?;

    let file = ConfigFile::discover(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("loading configuration")?;
    let overrides = Overrides {
        page_size: matches.get_one::<usize>("page-size").copied(),
        theme,
        catalog: matches.get_one::<PathBuf>("catalog").cloned(),
    };
    let config = Config::resolve(file, overrides, ThemeName::detect())?;

    let catalog_path = config.catalog_path()?;
    let catalog = match Catalog::load(catalog_path).await {
        Ok(catalog) => catalog,
        Err(err) => {
            let context = load_failure_context(catalog_path, &err);
            return Err(anyhow::Error::new(err).context(context));
        }
    };
    let mut paginator = config.paginator()?;

    if matches.get_flag("print") {
        let pages = matches.get_one::<usize>("pages").copied().unwrap_or(1);
        let report = PageReport::build(&catalog, criteria_from(&matches), &mut paginator, pages)?;
        println!("{}", report.to_json()?);
        return Ok(());
    }

    // Initialize the Application and start the interactive event loop
    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from(config.theme))?);
    let mut app = Application::new(Arc::new(catalog), paginator, config.theme, ui_renderer)?;

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    let input_thread = bookconnect::app::runtime::spawn_input_thread(
        tx,
        Arc::clone(&shutdown),
        Duration::from_millis(50),
    );

    let outcome = app.run(rx).await;

    shutdown.store(true, Ordering::SeqCst);
    let _ = input_thread.join();

    outcome?;
    Ok(())
}
