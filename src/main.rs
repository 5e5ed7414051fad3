use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cafe_route::commands::{print_map, report_error, run_nearby, run_route, RouteCommand, SolverKind};
use cafe_route::menu::{Menu, DEFAULT_NEARBY};
use cafe_route::utils::init_map::MapSource;
use cafe_route::utils::plot::RenderOptions;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Find the shortest route through a set of cafés
#[derive(Parser)]
#[command(name = "cafe_route", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Map to use: `reference`, `prachinburi` or a JSON map file
    #[arg(long, default_value = "reference")]
    map: MapSource,

    /// Directory plots are written to
    #[arg(long, default_value = "plots")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route from a start café through every destination
    Route {
        /// Start café
        #[arg(long)]
        start: String,

        /// Destinations, comma separated (e.g. C,E)
        #[arg(long, required = true)]
        to: String,

        #[arg(long, value_enum, default_value_t = SolverKind::BruteForce)]
        solver: SolverKind,

        /// Do not write a plot
        #[arg(long)]
        no_plot: bool,

        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cafés directly connected to a café, closest first
    Nearby {
        #[arg(long)]
        cafe: String,

        #[arg(long, default_value_t = DEFAULT_NEARBY)]
        max: usize,

        #[arg(long)]
        no_plot: bool,
    },
    /// List the cafés and roads of the map
    List,
    /// Interactive menu (default)
    Menu {
        #[arg(long)]
        no_plot: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing more can be reported if stderr itself is gone
            let _ = report_error(err.as_ref(), &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let network = cli.map.load()?;
    info!(cafes = network.len(), map = ?cli.map, "map ready");

    let render = RenderOptions::in_dir(cli.output_dir);
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Menu { no_plot: false }) {
        Commands::Route {
            start,
            to,
            solver,
            no_plot,
            json,
        } => {
            let command = RouteCommand {
                start,
                to,
                solver,
                json,
            };
            let render = (!no_plot).then_some(&render);
            run_route(&network, &command, render, &mut stdout.lock())?;
        }
        Commands::Nearby { cafe, max, no_plot } => {
            let render = (!no_plot).then_some(&render);
            run_nearby(&network, &cafe, max, render, &mut stdout.lock())?;
        }
        Commands::List => print_map(&network, &mut stdout.lock())?,
        Commands::Menu { no_plot } => {
            let stdin = io::stdin();
            let menu = Menu::new(&network, stdin.lock(), stdout.lock());
            let mut menu = if no_plot {
                menu
            } else {
                menu.with_rendering(render)
            };
            menu.run()?;
        }
    }

    io::stdout().flush()?;
    Ok(())
}
