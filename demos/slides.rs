//! Renders the demo slides to SVG files.
//!
//! cargo run --example slides --features plotters -- --resolution 8 --show-points

extern crate plotters;
use plotters::prelude::*;

extern crate strokeslide;
use strokeslide::{PlottersDrawer, RenderConfig, Renderer, Resolution, Slide};

use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Render the tessellation slides to SVG")]
struct Args {
    /// Segments per circle or Bezier curve
    #[arg(short, long, default_value_t = 20)]
    resolution: i64,

    /// Mark every sampled vertex
    #[arg(short, long)]
    show_points: bool,

    /// Only render this slide (0-3), all slides otherwise
    #[arg(long)]
    slide: Option<i64>,

    /// Output file prefix, slides are written to <out>_<index>.svg
    #[arg(short, long, default_value = "slide")]
    out: String,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = RenderConfig {
        resolution: Resolution::new(args.resolution)?,
        show_points: args.show_points,
        ..RenderConfig::default()
    };

    let slides: Vec<i64> = match args.slide {
        Some(index) => vec![index],
        None => Slide::ALL.iter().map(|s| s.index() as i64).collect(),
    };

    for index in slides {
        let file = format!("{}_{}.svg", args.out, index);
        let root = SVGBackend::new(&file, (args.width, args.height)).into_drawing_area();
        let mut renderer = Renderer::new(PlottersDrawer::new(root), config);
        renderer.select_slide(index)?;
        renderer.drawer_mut().present()?;
        info!("wrote {}", file);
    }

    Ok(())
}
