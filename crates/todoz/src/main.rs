use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use todozapp::config::TodozConfig;
use todozapp::engine::{TodoView, ViewOptions};
use todozapp::error::Result;
use todozapp::filter::StatusFilter;
use todozapp::source::{DataSource, RemoteSource, SampleSource};

mod args;
mod render;
mod shell;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);

    let source: Box<dyn DataSource> = match &config.remote_url {
        Some(url) => Box::new(RemoteSource::new(url)),
        None => Box::new(SampleSource),
    };

    // A failed fetch degrades to an empty collection rather than aborting:
    // the shell can still add records and `reload` later.
    let records = match source.fetch() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{}", format!("Could not load todos: {}", e).red());
            Vec::new()
        }
    };

    let options = ViewOptions {
        per_page: config.per_page,
        clamp_on_filter_change: config.clamp_on_filter_change,
    };
    let mut view = TodoView::with_records(records, options);

    match cli.command {
        Some(Commands::List {
            search,
            from,
            to,
            status,
            page,
            all_pages,
        }) => handle_list(&mut view, search, from, to, status, page, all_pages),
        Some(Commands::Stats) => {
            render::print_stats(&view.stats());
            Ok(())
        }
        None => shell::run(&mut view, source.as_ref()),
    }
}

fn load_config(cli: &Cli) -> TodozConfig {
    let mut config = ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| TodozConfig::load(dirs.config_dir()).unwrap_or_default())
        .unwrap_or_default();

    if let Some(url) = &cli.remote {
        config.remote_url = Some(url.clone());
    }
    if let Some(per_page) = cli.per_page {
        config.per_page = per_page.max(1);
    }
    config
}

fn handle_list(
    view: &mut TodoView,
    search: Option<String>,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
    status: StatusFilter,
    page: usize,
    all_pages: bool,
) -> Result<()> {
    if let Some(search) = search {
        view.set_search(search);
    }
    view.set_from(from);
    view.set_to(to);
    view.set_status(status);
    view.set_page(page);

    render::print_view(&view.view(), all_pages);
    Ok(())
}
