// PNG rendering of café routes and nearby cafés

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::models::{Distance, Route};
use crate::utils::cafe_network::CafeNetwork;
use crate::utils::layout::{bounds, layout};
use crate::utils::text::{path_caption, start_end_caption, wrap_text};

const PINK: RGBColor = RGBColor(255, 192, 203);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);
const GRAY: RGBColor = RGBColor(128, 128, 128);
const DARK_BLUE: RGBColor = RGBColor(0, 0, 139);
const DARK_GREEN: RGBColor = RGBColor(0, 100, 0);

const NODE_RADIUS: i32 = 22;
const CAPTION_LINE_HEIGHT: i32 = 24;

/// Where and how large plots are written
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            width: 800,
            height: 800,
        }
    }
}

impl RenderOptions {
    pub fn in_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

// Everything that differs between the route plot and the nearby plot
struct Scene<'a> {
    title: String,
    title_color: RGBColor,
    node_colors: HashMap<&'a str, RGBColor>,
    highlighted: Vec<(&'a str, &'a str)>,
    highlight_color: RGBColor,
    captions: Vec<String>,
}

impl Scene<'_> {
    fn is_highlighted(&self, a: &str, b: &str) -> bool {
        self.highlighted
            .iter()
            .any(|&(from, to)| (from == a && to == b) || (from == b && to == a))
    }
}

/// Draw the network with `route` highlighted
///
/// The start café is pink, destinations sky blue, other cafés on the route
/// light green and the rest light gray. Returns the path of the PNG file.
pub fn draw_route<S: AsRef<str>>(
    network: &CafeNetwork,
    route: &Route,
    destinations: &[S],
    options: &RenderOptions,
) -> Result<PathBuf, Box<dyn Error>> {
    let start = route.start().unwrap_or_default();

    let node_colors = network
        .cafes()
        .map(|cafe| {
            let id = cafe.id.as_str();
            let color = if id == start {
                PINK
            } else if destinations.iter().any(|d| d.as_ref() == id) {
                SKY_BLUE
            } else if route.stops.iter().any(|stop| stop == id) {
                LIGHT_GREEN
            } else {
                LIGHT_GRAY
            };
            (id, color)
        })
        .collect();

    let details: Vec<String> = network
        .legs(&route.stops)?
        .iter()
        .map(|leg| leg.to_string())
        .collect();

    let mut captions = Vec::new();
    for (text, width) in [
        (start_end_caption(network, route), 70),
        (path_caption(network, route), 80),
        (format!("Route Details: {}", details.join(" | ")), 90),
    ] {
        captions.extend(wrap_text(&text, width).lines().map(str::to_string));
    }

    let scene = Scene {
        title: "Shortest Path Finder for Cafés".to_string(),
        title_color: DARK_BLUE,
        node_colors,
        highlighted: route.hops().collect(),
        highlight_color: RED,
        captions,
    };

    let file = options
        .output_dir
        .join(format!("route_{}.png", file_stem(&route.stops)));
    render(network, &scene, &file, options)?;
    Ok(file)
}

/// Draw the network with the roads from `start` to its nearby cafés
/// highlighted
pub fn draw_nearby(
    network: &CafeNetwork,
    start: &str,
    nearby: &[(String, Distance)],
    options: &RenderOptions,
) -> Result<PathBuf, Box<dyn Error>> {
    let node_colors = network
        .cafes()
        .map(|cafe| {
            let id = cafe.id.as_str();
            let color = if id == start {
                PINK
            } else if nearby.iter().any(|(other, _)| other == id) {
                LIGHT_GREEN
            } else {
                LIGHT_GRAY
            };
            (id, color)
        })
        .collect();

    let names: Vec<&str> = nearby
        .iter()
        .map(|(id, _)| network.display_name(id))
        .collect();
    let mut captions = vec![format!("Start: {}", network.display_name(start))];
    captions.extend(
        wrap_text(&format!("Nearby: {}", names.join(", ")), 80)
            .lines()
            .map(str::to_string),
    );

    let scene = Scene {
        title: format!("Nearby Cafés from {}", network.display_name(start)),
        title_color: DARK_GREEN,
        node_colors,
        highlighted: nearby.iter().map(|(id, _)| (start, id.as_str())).collect(),
        highlight_color: GREEN,
        captions,
    };

    let file = options
        .output_dir
        .join(format!("nearby_{}.png", file_stem(&[start])));
    render(network, &scene, &file, options)?;
    Ok(file)
}

fn render(
    network: &CafeNetwork,
    scene: &Scene<'_>,
    file: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&options.output_dir)?;

    let positions = layout(network);
    let (min_x, max_x, min_y, max_y) = bounds(&positions, 0.15);

    let root = BitMapBackend::new(file, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption_height =
        (CAPTION_LINE_HEIGHT * scene.captions.len() as i32 + 20).min(options.height as i32 / 2);
    let (upper, lower) = root.split_vertically(options.height as i32 - caption_height);

    let mut chart = ChartBuilder::on(&upper)
        .caption(
            &scene.title,
            ("sans-serif", 26).into_font().color(&scene.title_color),
        )
        .margin(20)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    let centered = Pos::new(HPos::Center, VPos::Center);

    // Roads first so cafés are drawn on top of them
    for (from, to, distance) in network.roads() {
        let (Some(a), Some(b)) = (positions.get(from), positions.get(to)) else {
            continue;
        };
        let style = if scene.is_highlighted(from, to) {
            scene.highlight_color.stroke_width(4)
        } else {
            LIGHT_GRAY.stroke_width(2)
        };
        chart.draw_series(LineSeries::new(vec![(a.x, a.y), (b.x, b.y)], style))?;
        chart.draw_series(std::iter::once(Text::new(
            distance.to_string(),
            ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
            ("sans-serif", 16).into_font().color(&BLACK).pos(centered),
        )))?;
    }

    for cafe in network.cafes() {
        let Some(position) = positions.get(&cafe.id) else {
            continue;
        };
        let fill = scene
            .node_colors
            .get(cafe.id.as_str())
            .copied()
            .unwrap_or(LIGHT_GRAY);

        chart.draw_series(std::iter::once(
            EmptyElement::at((position.x, position.y))
                + Circle::new((0, 0), NODE_RADIUS, fill.filled())
                + Text::new(
                    cafe.id.clone(),
                    (0, 0),
                    ("sans-serif", 18).into_font().color(&BLACK).pos(centered),
                )
                + Text::new(
                    cafe.name.clone().unwrap_or_default(),
                    (0, NODE_RADIUS + 4),
                    ("sans-serif", 13)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Top)),
                ),
        ))?;
    }

    let caption_style = ("sans-serif", 16)
        .into_font()
        .color(&GRAY)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in scene.captions.iter().enumerate() {
        lower.draw(&Text::new(
            line.as_str(),
            (options.width as i32 / 2, 10 + CAPTION_LINE_HEIGHT * i as i32),
            caption_style.clone(),
        ))?;
    }

    root.present()?;
    info!(file = %file.display(), "plot saved");
    Ok(())
}

// Identifiers may contain spaces or punctuation
fn file_stem<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| {
            id.as_ref()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(&["A", "D", "E"]), "A-D-E");
        assert_eq!(file_stem(&["Cafe A", "Café"]), "Cafe_A-Caf_");
    }

    #[test]
    fn test_scene_highlight_is_undirected() {
        let scene = Scene {
            title: String::new(),
            title_color: DARK_BLUE,
            node_colors: HashMap::new(),
            highlighted: vec![("A", "D")],
            highlight_color: RED,
            captions: Vec::new(),
        };
        assert!(scene.is_highlighted("D", "A"));
        assert!(!scene.is_highlighted("A", "B"));
    }
}
