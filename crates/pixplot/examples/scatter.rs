//! Scatter two point classes over a tinted, gridded plot area.
//!
//! Run with: `cargo run -p pixplot --example scatter`

use pixplot::{save_chart, ChartSurface, ColorName, ColorSpec, FileSink, PlotError};

const CLASS_A: ColorSpec = ColorSpec::Rgb(0x636efa);
const CLASS_B: ColorSpec = ColorSpec::Rgb(0xef553b);

/// Deterministic pseudo-random values in `[0, 1)`.
fn jitter(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*seed >> 11) as f64 / (1_u64 << 53) as f64
}

fn main() -> Result<(), PlotError> {
    let mut chart = ChartSurface::new(240, 240, 8)?;
    chart.fill_plot_area(0xe5ecf6_u32);
    chart.draw_grid(4, 8, Some(ColorName::White.into()));

    let mut seed = 7;
    for _ in 0..60 {
        let (x, y) = (jitter(&mut seed), jitter(&mut seed));
        let class = if y > x { CLASS_A } else { CLASS_B };
        chart.plot_sample(x, y, Some(class));
    }
    chart.draw_axis();

    let mut sink = FileSink::new("charts");
    save_chart(&mut chart, &mut sink, "scatter.ppm")?;
    println!("wrote {}", sink.root().join("scatter.ppm").display());
    Ok(())
}
