use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::ops::Range;
use std::path::Path;

use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{GdpInfo, Series};
use crate::series::build_plot_dict;

const PLOT_SIZE: (u32, u32) = (1024, 768);

/// Open `path`, let `draw` fill an SVG document, then write it out.
///
/// The file is created before drawing so an unwritable destination fails
/// fast; it is removed again if drawing or writing fails.
pub(crate) fn write_svg<F>(path: &Path, draw: F) -> Result<()>
where
    F: FnOnce(&mut String) -> Result<()>,
{
    let file = File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    save_or_remove(file, path, draw)?;

    info!("chart saved to {}", path.display());
    Ok(())
}

/// Draw into a buffer and write it to `out`; on any failure `out` is closed
/// and `path` removed so no partial chart is left behind.
fn save_or_remove<W, F>(mut out: W, path: &Path, draw: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut String) -> Result<()>,
{
    let mut svg = String::new();
    let result = draw(&mut svg).and_then(|()| {
        out.write_all(svg.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })
    });
    drop(out);

    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

/// Plot the GDP of each country in `country_list` across the configured
/// years and save it as SVG to `plot_file`.
pub fn render_xy_plot<S, P>(gdpinfo: &GdpInfo, country_list: &[S], plot_file: P) -> Result<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let plot_data = build_plot_dict(gdpinfo, country_list)?;
    render_series(gdpinfo, country_list, &plot_data, plot_file.as_ref())
}

/// Draw already built series, one line per entry of `country_list`.
pub fn render_series<S: AsRef<str>>(
    gdpinfo: &GdpInfo,
    country_list: &[S],
    plot_data: &HashMap<String, Series>,
    plot_file: &Path,
) -> Result<()> {
    gdpinfo.validate()?;
    let title = format!(
        "Plot of GDP for select countries spanning {} to {}",
        gdpinfo.min_year, gdpinfo.max_year
    );
    write_svg(plot_file, |svg| {
        draw_xy_plot(svg, &title, gdpinfo, country_list, plot_data)
    })
}

fn draw_xy_plot<S: AsRef<str>>(
    svg: &mut String,
    title: &str,
    gdpinfo: &GdpInfo,
    country_list: &[S],
    plot_data: &HashMap<String, Series>,
) -> Result<()> {
    let root = SVGBackend::with_string(svg, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = value_range(plot_data.values().flatten().map(|&(_, value)| value));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(year_range(gdpinfo), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("GDP in current US dollars")
        .y_label_formatter(&|v| format!("{:.2e}", v))
        .draw()?;

    for (idx, country) in country_list.iter().enumerate() {
        let country = country.as_ref();
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(i32, f64)> = plot_data
            .get(country)
            .map(|series| series.iter().copied().filter(|(_, v)| v.is_finite()).collect())
            .unwrap_or_default();

        // Countries without data still get a legend entry.
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(country)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(points.iter().map(|&point| Circle::new(point, 3, color.filled())))?;
    }

    if !country_list.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// X axis years; a one-year window is widened so the axis is never empty.
fn year_range(gdpinfo: &GdpInfo) -> Range<i32> {
    let (min, max) = (gdpinfo.min_year, gdpinfo.max_year);
    if max > min {
        min..max
    } else if min < i32::MAX {
        min..min + 1
    } else {
        min - 1..min
    }
}

/// Y axis bounds covering every finite value, anchored at zero for
/// non-negative data.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = match values.filter(|v| v.is_finite()).map(OrderedFloat).minmax() {
        MinMaxResult::NoElements => return (0.0, 1.0),
        MinMaxResult::OneElement(v) => (v.0, v.0),
        MinMaxResult::MinMax(lo, hi) => (lo.0, hi.0),
    };

    let lo = lo.min(0.0);
    let span = hi - lo;
    if span > 0.0 {
        (lo, hi + span * 0.05)
    } else {
        (lo, lo + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DuplicateKeyPolicy, NameMatching};
    use std::path::PathBuf;

    #[test]
    fn test_value_range_empty() {
        assert_eq!(value_range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_value_range_positive_values() {
        let (lo, hi) = value_range([100.0, 300.0, 200.0].into_iter());
        assert_eq!(lo, 0.0);
        assert!((hi - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_negative_and_nan() {
        let (lo, hi) = value_range([-10.0, f64::NAN, 10.0].into_iter());
        assert_eq!(lo, -10.0);
        assert!((hi - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_all_zero() {
        assert_eq!(value_range([0.0, 0.0].into_iter()), (0.0, 1.0));
    }

    fn gdpinfo(min_year: i32, max_year: i32) -> GdpInfo {
        GdpInfo {
            gdp_file: PathBuf::from("gdp.csv"),
            separator: ',',
            quote: '"',
            min_year,
            max_year,
            country_name: "Country Name".to_string(),
            country_code: "Country Code".to_string(),
            duplicate_keys: DuplicateKeyPolicy::LastWins,
            name_matching: NameMatching::Exact,
        }
    }

    #[test]
    fn test_year_range() {
        assert_eq!(year_range(&gdpinfo(1960, 2015)), 1960..2015);
        assert_eq!(year_range(&gdpinfo(2000, 2000)), 2000..2001);
        assert_eq!(year_range(&gdpinfo(i32::MAX, i32::MAX)), (i32::MAX - 1)..i32::MAX);
        assert_eq!(year_range(&gdpinfo(i32::MIN, i32::MIN)), i32::MIN..(i32::MIN + 1));
    }

    #[test]
    fn test_render_series_rejects_inverted_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let err = render_series::<&str>(&gdpinfo(2010, 2000), &[], &HashMap::new(), &path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_series_max_year_window_does_not_overflow() {
        let err = render_series::<&str>(
            &gdpinfo(i32::MAX, i32::MAX),
            &[],
            &HashMap::new(),
            Path::new("/nonexistent-dir/plot.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        fs::write(&path, "").unwrap();

        let err = save_or_remove(FailingWriter, &path, |svg| {
            svg.push_str("<svg></svg>");
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_draw_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");

        let err = write_svg(&path, |_| Err(Error::Render("no font".to_string()))).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_svg_saves_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");

        write_svg(&path, |svg| {
            svg.push_str("<svg></svg>");
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_render_series_unwritable_path() {
        let gdpinfo = gdpinfo(2000, 2001);
        let err = render_series::<&str>(
            &gdpinfo,
            &[],
            &HashMap::new(),
            Path::new("/nonexistent-dir/plot.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
