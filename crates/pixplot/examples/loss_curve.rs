//! Plot a training loss curve and save it as `charts/loss_curve.ppm`.
//!
//! Run with: `cargo run -p pixplot --example loss_curve`

use pixplot::{save_chart, ChartSurface, FileSink, PlotError};

fn main() -> Result<(), PlotError> {
    // loss of a toy gradient descent run, one entry per epoch
    let mut losses = Vec::with_capacity(50);
    let mut weight = 4.0_f64;
    for _ in 0..50 {
        losses.push((weight - 1.0).powi(2));
        weight -= 0.1 * 2.0 * (weight - 1.0);
    }

    let max = losses.iter().copied().fold(f64::MIN, f64::max);
    let last = (losses.len() - 1) as f64;
    let points: Vec<(f64, f64)> = losses
        .iter()
        .enumerate()
        .map(|(epoch, loss)| (epoch as f64 / last, loss / max))
        .collect();

    let mut chart = ChartSurface::new(240, 240, 8)?;
    chart.draw_grid(5, 5, None);
    chart.plot_polyline(&points, None, None);
    chart.draw_axis();

    let mut sink = FileSink::new("charts");
    save_chart(&mut chart, &mut sink, "loss_curve.ppm")?;
    println!("wrote {}", sink.root().join("loss_curve.ppm").display());
    Ok(())
}
