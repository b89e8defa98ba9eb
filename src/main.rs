use std::error::Error;
use std::path::PathBuf;

use gdp_reconcile::{
    plot_countries, render_world_map, render_xy_plot, DuplicateKeyPolicy, GdpInfo, NameMatching,
};
use tracing::{info, Level};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let gdpinfo = GdpInfo {
        gdp_file: PathBuf::from("isp_gdp.csv"),
        separator: ',',
        quote: '"',
        min_year: 1960,
        max_year: 2015,
        country_name: "Country Name".to_string(),
        country_code: "Country Code".to_string(),
        duplicate_keys: DuplicateKeyPolicy::LastWins,
        name_matching: NameMatching::Exact,
    };

    info!("generating XY plots from {}", gdpinfo.gdp_file.display());
    render_xy_plot::<&str, _>(&gdpinfo, &[], "isp_gdp_xy_none.svg")?;
    render_xy_plot(&gdpinfo, &["China"], "isp_gdp_xy_china.svg")?;
    render_xy_plot(&gdpinfo, &["United Kingdom", "United States"], "isp_gdp_xy_uk+usa.svg")?;

    let countries = plot_countries();
    info!("generating world maps for {} map countries", countries.len());
    for year in [1960, 1980, 2000, 2010] {
        render_world_map(&gdpinfo, &countries, year, format!("isp_gdp_world_name_{}.svg", year))?;
    }

    info!("plots generated");
    Ok(())
}
