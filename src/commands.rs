// Commands module - the non-interactive commands of the binary

use std::error::Error;
use std::io::{self, Write};

use clap::ValueEnum;
use tracing::info;

use crate::algorithms::{BruteForce, HeldKarp, RouteSolver};
use crate::models::Route;
use crate::utils::cafe_network::CafeNetwork;
use crate::utils::plot::{draw_nearby, draw_route, RenderOptions};
use crate::utils::text::{normalize_id, parse_cafe_list, route_summary};

/// Which solver answers a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    /// Exhaustive permutation search
    BruteForce,
    /// Bitmask dynamic programming
    HeldKarp,
}

impl SolverKind {
    pub fn solve<S: AsRef<str>>(
        self,
        network: &CafeNetwork,
        start: &str,
        destinations: &[S],
    ) -> Result<Route, Box<dyn Error>> {
        let route = match self {
            SolverKind::BruteForce => BruteForce.solve(network, start, destinations)?,
            SolverKind::HeldKarp => HeldKarp.solve(network, start, destinations)?,
        };
        Ok(route)
    }
}

/// Settings of the `route` command
#[derive(Debug, Clone)]
pub struct RouteCommand {
    pub start: String,
    /// Comma separated destinations, as typed by the user
    pub to: String,
    pub solver: SolverKind,
    pub json: bool,
}

/// Answer a route query and print the result to `out`
///
/// Identifiers are normalised the way the menu normalises them. When
/// `render` is given the route is also drawn and the plot path is reported
/// on `out`.
pub fn run_route<W: Write>(
    network: &CafeNetwork,
    command: &RouteCommand,
    render: Option<&RenderOptions>,
    out: &mut W,
) -> Result<Route, Box<dyn Error>> {
    let start = normalize_id(&command.start);
    let destinations = parse_cafe_list(&command.to);
    let route = command.solver.solve(network, &start, &destinations)?;
    info!(stops = route.stops.len(), total = route.total_distance, "route found");

    if command.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&route)?)?;
    } else {
        writeln!(out, "{}", route_summary(&route))?;
        for leg in network.legs(&route.stops)? {
            writeln!(out, "  {leg}")?;
        }
    }

    if let Some(options) = render {
        let file = draw_route(network, &route, &destinations, options)?;
        writeln!(out, "Plot saved to {}", file.display())?;
    }
    Ok(route)
}

/// List the cafés directly connected to `cafe`, closest first
pub fn run_nearby<W: Write>(
    network: &CafeNetwork,
    cafe: &str,
    max_results: usize,
    render: Option<&RenderOptions>,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let cafe = normalize_id(cafe);
    let nearby = network.nearby(&cafe, max_results)?;

    writeln!(out, "Nearby cafés from {} ({}):", cafe, network.display_name(&cafe))?;
    for (id, distance) in &nearby {
        writeln!(out, "  {} {} - {} km", id, network.display_name(id), distance)?;
    }

    if let Some(options) = render {
        let file = draw_nearby(network, &cafe, &nearby, options)?;
        writeln!(out, "Plot saved to {}", file.display())?;
    }
    Ok(())
}

pub fn print_map<W: Write>(network: &CafeNetwork, out: &mut W) -> io::Result<()> {
    if let Some(title) = network.title() {
        writeln!(out, "{title}")?;
    }
    writeln!(out, "Cafés:")?;
    for cafe in network.cafes() {
        writeln!(out, "  {:6} {}", cafe.id, cafe.display_name())?;
    }
    writeln!(out, "Roads:")?;
    for (from, to, distance) in network.roads() {
        writeln!(out, "  {from} - {to}: {distance} km")?;
    }
    Ok(())
}

/// Write the user-facing form of a failed command
pub fn report_error<W: Write>(err: &dyn Error, out: &mut W) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}
