use anyhow::Context;
use rigcheck::adapters::outbound::console::StderrProgressReporter;
use rigcheck::adapters::outbound::random::StdRandomSource;
use rigcheck::application::dto::{OutputFormat, SearchRequest};
use rigcheck::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use rigcheck::application::read_models::ListingsView;
use rigcheck::application::session::SearchSession;
use rigcheck::application::use_cases::{AnalyzePerformanceUseCase, SearchCatalogUseCase};
use rigcheck::catalog::domain::FilterCriteria;
use rigcheck::cli::{Args, Command, SearchArgs};
use rigcheck::config::{self, ConfigFile};
use rigcheck::logging::init_logging;
use rigcheck::shared::error::ExitCode;
use rigcheck::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let format = args.format.or(config.format).unwrap_or_default();
    let color = format == OutputFormat::Text
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    tracing::debug!(%format, color, "resolved output format");

    let formatter = FormatterFactory::create(format, color);

    let formatted_output = match args.command {
        Command::Analyze(analyze) => {
            let draft = analyze
                .to_draft()
                .or(config.profile.unwrap_or_default());
            let use_case = AnalyzePerformanceUseCase::new(StderrProgressReporter::new());
            let view = use_case.execute(draft)?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            formatter.format_assessment(&view)?
        }
        Command::Search(search) => {
            let view = run_search(search, &config)?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            formatter.format_listings(&view)?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn run_search(search: SearchArgs, config: &ConfigFile) -> Result<ListingsView> {
    let criteria = FilterCriteria::new()
        .with_platforms(search.platforms)
        .with_price_range(search.min_price, search.max_price)
        .with_sort(search.sort.or(config.sort).unwrap_or_default());
    let request = SearchRequest::new(search.query, criteria);
    let rng = StdRandomSource::new(search.seed.or(config.seed));
    let settings = config.session_settings();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let session = SearchSession::new(settings, rng);
        let use_case = SearchCatalogUseCase::new(session, StderrProgressReporter::new());
        use_case.execute(request).await
    })
}
