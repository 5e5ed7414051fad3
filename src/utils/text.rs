// Text helpers shared by the console menu and plot captions

use crate::models::{CafeId, Route};
use crate::utils::cafe_network::CafeNetwork;

/// Normalise a café identifier typed by a user
pub fn normalize_id(raw: &str) -> CafeId {
    raw.trim().to_uppercase()
}

/// Split a comma separated list of café identifiers, dropping empty entries
pub fn parse_cafe_list(raw: &str) -> Vec<CafeId> {
    raw.split(',')
        .map(normalize_id)
        .filter(|id| !id.is_empty())
        .collect()
}

/// Greedy word wrap: lines of at most `max_length` characters, words are
/// never split
pub fn wrap_text(text: &str, max_length: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line.push_str(word);
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_length {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}

/// `A → D → C` using identifiers
pub fn format_stops(route: &Route) -> String {
    route.stops.join(" → ")
}

/// One line summary, e.g. `Best Path: A → D → E (Total: 10 km)`
pub fn route_summary(route: &Route) -> String {
    format!(
        "Best Path: {} (Total: {} km)",
        format_stops(route),
        route.total_distance
    )
}

/// `Start: <name> to <name>` using display names
pub fn start_end_caption(network: &CafeNetwork, route: &Route) -> String {
    let start = route.start().unwrap_or_default();
    let end = route.end().unwrap_or_default();
    format!(
        "Start: {} to {}",
        network.display_name(start),
        network.display_name(end)
    )
}

/// `Path: <name> → <name> (Total: N km)` using display names
pub fn path_caption(network: &CafeNetwork, route: &Route) -> String {
    let names: Vec<&str> = route
        .stops
        .iter()
        .map(|id| network.display_name(id))
        .collect();
    format!(
        "Path: {} (Total: {} km)",
        names.join(" → "),
        route.total_distance
    )
}
