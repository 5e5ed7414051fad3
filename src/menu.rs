// Interactive console menu

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::algorithms::find_best_route;
use crate::error::RouteError;
use crate::models::Route;
use crate::utils::cafe_network::CafeNetwork;
use crate::utils::plot::{draw_nearby, draw_route, RenderOptions};
use crate::utils::text::{normalize_id, parse_cafe_list, route_summary};

/// Number of nearby cafés listed by the menu
pub const DEFAULT_NEARBY: usize = 3;

/// Console loop offering route search and nearby cafés
///
/// Reads choices from `input` until `0` or end of input. Plots are written
/// only when rendering is enabled with [`Menu::with_rendering`].
pub struct Menu<'a, R, W> {
    network: &'a CafeNetwork,
    input: R,
    output: W,
    render: Option<RenderOptions>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(network: &'a CafeNetwork, input: R, output: W) -> Self {
        Self {
            network,
            input,
            output,
            render: None,
        }
    }

    pub fn with_rendering(mut self, options: RenderOptions) -> Self {
        self.render = Some(options);
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- Café Route Finder ---")?;
            writeln!(self.output, "1. Set Start & Destination")?;
            writeln!(self.output, "2. Nearby Destinations")?;
            writeln!(self.output, "0. Exit")?;

            let Some(choice) = self.prompt("Select menu: ")? else {
                return Ok(());
            };

            match choice.trim().parse::<u32>() {
                Ok(1) => self.route()?,
                Ok(2) => self.nearby()?,
                Ok(0) => {
                    writeln!(self.output, "Exit Program.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid selection. Please try again.")?,
            }
        }
    }

    fn route(&mut self) -> io::Result<()> {
        self.print_cafe_table()?;

        let Some(start) = self.prompt("Enter Start Café: ")? else {
            return Ok(());
        };
        let Some(destinations) = self.prompt("Enter Destinations (comma separated ex: A,B): ")?
        else {
            return Ok(());
        };
        let start = normalize_id(&start);
        let destinations = parse_cafe_list(&destinations);

        let route = match find_best_route(self.network, &start, &destinations) {
            Ok(route) => route,
            Err(err) => return self.report(err),
        };

        self.print_route(&route)?;

        if let Some(options) = &self.render {
            match draw_route(self.network, &route, &destinations, options) {
                Ok(file) => writeln!(self.output, "Plot saved to {}", file.display())?,
                Err(err) => {
                    warn!(error = %err, "failed to draw route");
                    writeln!(self.output, "Could not draw the route: {err}")?;
                }
            }
        }
        Ok(())
    }

    fn nearby(&mut self) -> io::Result<()> {
        self.print_cafe_table()?;

        let Some(start) = self.prompt("Enter Café to find nearby locations: ")? else {
            return Ok(());
        };
        let start = normalize_id(&start);

        let nearby = match self.network.nearby(&start, DEFAULT_NEARBY) {
            Ok(nearby) => nearby,
            Err(RouteError::UnknownNode(_)) => {
                return writeln!(self.output, "Invalid Café name.");
            }
            Err(err) => return self.report(err),
        };

        let listed: Vec<String> = nearby
            .iter()
            .map(|(id, distance)| format!("{id} ({distance} km)"))
            .collect();
        if listed.is_empty() {
            writeln!(self.output, "No cafés are directly connected to {start}.")?;
        } else {
            writeln!(self.output, "Nearby cafés from {start}: {}", listed.join(", "))?;
        }

        if let Some(options) = &self.render {
            match draw_nearby(self.network, &start, &nearby, options) {
                Ok(file) => writeln!(self.output, "Plot saved to {}", file.display())?,
                Err(err) => {
                    warn!(error = %err, "failed to draw nearby cafés");
                    writeln!(self.output, "Could not draw nearby cafés: {err}")?;
                }
            }
        }
        Ok(())
    }

    fn print_route(&mut self, route: &Route) -> io::Result<()> {
        writeln!(self.output, "{}", route_summary(route))?;
        match self.network.legs(&route.stops) {
            Ok(legs) => {
                for leg in legs {
                    writeln!(self.output, "  {leg}")?;
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: RouteError) -> io::Result<()> {
        match err {
            RouteError::UnknownNode(_) => {
                writeln!(self.output, "Invalid Café name(s). Try again.")
            }
            other => writeln!(self.output, "Error: {other}. Try again."),
        }
    }

    fn print_cafe_table(&mut self) -> io::Result<()> {
        let rule = "-".repeat(30);
        writeln!(self.output, "{rule}\n{:10} | {:15}\n{rule}", "Cafe", "Name")?;
        for cafe in self.network.cafes() {
            writeln!(
                self.output,
                "{:10} | {:20}\n{rule}",
                cafe.id,
                cafe.display_name()
            )?;
        }
        Ok(())
    }

    // None on end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::init_map::reference_map;

    fn run_session(input: &str) -> String {
        let network = reference_map().unwrap();
        let mut output = Vec::new();
        Menu::new(&network, input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit() {
        let transcript = run_session("0\n");
        assert!(transcript.contains("--- Café Route Finder ---"));
        assert!(transcript.ends_with("Exit Program.\n"));
    }

    #[test]
    fn test_invalid_selection_then_end_of_input() {
        let transcript = run_session("7\nabc\n");
        assert_eq!(
            transcript
                .matches("Invalid selection. Please try again.")
                .count(),
            2
        );
    }

    #[test]
    fn test_route_details_report_missing_road() {
        let network = reference_map().unwrap();
        let mut output = Vec::new();
        let mut menu = Menu::new(&network, "".as_bytes(), &mut output);

        let detour = Route::new(vec!["A".into(), "C".into()], 8.0);
        menu.print_route(&detour).unwrap();
        drop(menu);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Best Path: A → C (Total: 8 km)\n"));
        assert!(transcript.contains("Error: `A` and `C` are not directly connected. Try again."));
    }

    #[test]
    fn test_cafe_table_lists_names() {
        let transcript = run_session("1\n");
        assert!(transcript.contains("A          | Morning Brew"));
        assert!(transcript.contains("E          | Moonlight Coffee"));
    }
}
