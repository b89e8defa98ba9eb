use std::collections::BTreeSet;
use std::path::Path;

use plotters::prelude::*;
use tracing::{debug, info};

use crate::countries::centroid;
use crate::error::Result;
use crate::models::{GdpInfo, NameMapping, YearSnapshot};
use crate::plot::write_svg;
use crate::snapshot::{build_map_dict_by_name, summarize};

const MAP_SIZE: (u32, u32) = (1200, 640);
const MARKER_SIZE: i32 = 7;

const OCEAN: RGBColor = RGBColor(236, 243, 250);
const LOW_GDP: RGBColor = RGBColor(255, 237, 160);
const HIGH_GDP: RGBColor = RGBColor(189, 0, 38);
const MISSING_FROM_SOURCE: RGBColor = RGBColor(120, 120, 120);
const NO_DATA_FOR_YEAR: RGBColor = RGBColor(65, 105, 225);

/// Map the GDP of every country in `plot_countries` for `year` and save it as
/// SVG to `map_file`.
pub fn render_world_map<P: AsRef<Path>>(
    gdpinfo: &GdpInfo,
    plot_countries: &NameMapping,
    year: i32,
    map_file: P,
) -> Result<()> {
    let snapshot = build_map_dict_by_name(gdpinfo, plot_countries, year)?;
    render_snapshot(&snapshot, map_file.as_ref())
}

/// Draw an already built snapshot as a three-layer world map.
pub fn render_snapshot(snapshot: &YearSnapshot, map_file: &Path) -> Result<()> {
    let title = format!(
        "GDP by country for {} (log scale), unified by common country NAME",
        snapshot.year
    );
    write_svg(map_file, |svg| draw_world_map(svg, &title, snapshot))
}

fn draw_world_map(svg: &mut String, title: &str, snapshot: &YearSnapshot) -> Result<()> {
    let scale = match summarize(snapshot) {
        Some(stats) => {
            info!(
                "GDP {} (log10): {} countries, min {:.2}, max {:.2}, mean {:.2}, median {:.2}",
                snapshot.year, stats.count, stats.min, stats.max, stats.mean, stats.median
            );
            (stats.min, stats.max)
        }
        None => (0.0, 1.0),
    };

    let root = SVGBackend::with_string(svg, MAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_2d(-180f64..180f64, -60f64..85f64)?;
    chart.plotting_area().fill(&OCEAN)?;

    let values: Vec<((f64, f64), RGBColor)> = snapshot
        .values
        .iter()
        .filter_map(|(code, &value)| centroid(code).map(|pos| (pos, shade(value, scale))))
        .collect();
    chart
        .draw_series(values.iter().map(|&(pos, color)| Circle::new(pos, MARKER_SIZE, color.filled())))?
        .label(format!("GDP For {}", snapshot.year))
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], HIGH_GDP.filled()));

    chart
        .draw_series(
            positions(&snapshot.missing_from_source)
                .map(|pos| Circle::new(pos, MARKER_SIZE, MISSING_FROM_SOURCE.filled())),
        )?
        .label("Missing from World Bank Data")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], MISSING_FROM_SOURCE.filled()));

    chart
        .draw_series(
            positions(&snapshot.missing_for_year)
                .map(|pos| Circle::new(pos, MARKER_SIZE, NO_DATA_FOR_YEAR.filled())),
        )?
        .label("No GDP Data")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], NO_DATA_FOR_YEAR.filled()));

    let placed = values.len()
        + positions(&snapshot.missing_from_source).count()
        + positions(&snapshot.missing_for_year).count();
    let total = snapshot.values.len() + snapshot.missing_from_source.len() + snapshot.missing_for_year.len();
    if placed < total {
        debug!("{} codes have no known position and were not drawn", total - placed);
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn positions(codes: &BTreeSet<String>) -> impl Iterator<Item = (f64, f64)> + '_ {
    codes.iter().filter_map(|code| centroid(code))
}

/// Color of a log value on the gradient spanning `(min, max)`.
fn shade(value: f64, (min, max): (f64, f64)) -> RGBColor {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        mix(LOW_GDP.0, HIGH_GDP.0),
        mix(LOW_GDP.1, HIGH_GDP.1),
        mix(LOW_GDP.2, HIGH_GDP.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(9.0, (9.0, 12.0)), LOW_GDP);
        assert_eq!(shade(12.0, (9.0, 12.0)), HIGH_GDP);
        assert_eq!(shade(20.0, (9.0, 12.0)), HIGH_GDP);
        assert_eq!(shade(1.0, (9.0, 12.0)), LOW_GDP);
    }

    #[test]
    fn test_shade_single_value() {
        assert_eq!(shade(10.0, (10.0, 10.0)), HIGH_GDP);
    }

    #[test]
    fn test_shade_midpoint() {
        let RGBColor(r, g, b) = shade(10.5, (9.0, 12.0));
        assert!(r < LOW_GDP.0 && r > HIGH_GDP.0);
        assert!(g < LOW_GDP.1 && g > HIGH_GDP.1);
        assert!(b < LOW_GDP.2 && b > HIGH_GDP.2);
    }

    #[test]
    fn test_positions_skip_unknown_codes() {
        let codes: BTreeSet<String> = ["gb", "zz"].iter().map(|c| c.to_string()).collect();
        let found: Vec<(f64, f64)> = positions(&codes).collect();
        assert_eq!(found, vec![(-3.4, 55.4)]);
    }

    #[test]
    fn test_render_snapshot_unwritable_path() {
        let err = render_snapshot(&YearSnapshot::default(), Path::new("/nonexistent-dir/map.svg"))
            .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
