mod adapters;
mod alert_view;
mod application;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::{ConsoleRenderer, SpinnerIndicator};
use adapters::outbound::network::HttpAlertGateway;
use application::dto::FilterSelection;
use application::state::DEFAULT_PAGE_SIZE;
use application::use_cases::DashboardController;
use cli::{parse_command, Args, Command, HELP_TEXT};
use shared::error::ExitCode;
use shared::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration: explicit path, or auto-discovery in the cwd
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };

    // CLI flags override config values
    let server_url = args
        .server
        .or(config.server_url)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let page_size = args
        .page_size
        .or(config.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let initial_filters = FilterSelection {
        hours_back: config.hours_back,
        ..Default::default()
    };

    // Create adapters (Dependency Injection)
    let gateway = HttpAlertGateway::new(&server_url)?;
    let indicator = SpinnerIndicator::new();
    let renderer = ConsoleRenderer::with_animation(!args.no_animation);

    let mut dashboard =
        DashboardController::new(gateway, indicator, renderer, page_size).with_filters(initial_filters);

    println!("trailwatch - connected to {}", server_url);
    println!("Type 'help' for commands.");

    // Initial state: no scans run yet, everything zeroed. Deliberately no
    // alert fetch here, so historic data never shows before a scan.
    dashboard.show_initial();

    session_loop(&mut dashboard).await
}

/// Reads interactive commands until quit or end of input.
async fn session_loop<G, I, R>(dashboard: &mut DashboardController<G, I, R>) -> Result<()>
where
    G: ports::outbound::AlertGateway,
    I: ports::outbound::ScanIndicator,
    R: ports::outbound::RenderSurface,
{
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input: treat like quit
            return Ok(());
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Intent(intent)) => dashboard.dispatch(intent).await?,
            Err(message) => println!("{}", message),
        }
    }
}
