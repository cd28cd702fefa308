use crate::logs::Measurement;
use anyhow::bail;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Per-implementation curve: points are (nodes, seconds), sorted by nodes.
type Series = Vec<(String, Vec<(u64, f64)>)>;

/// Render time-vs-nodes charts for every implementation in the table,
/// once with a linear y-axis (`performance_linear.png`) and once with a
/// logarithmic y-axis (`performance_log.png`).
///
/// Every row must carry a node count; the bare benchmark log format does
/// not provide one, so tables built from unannotated logs are rejected
/// here rather than failing somewhere inside the chart code.
pub fn plot_performance(table: &[Measurement], out_dir: &Path) -> anyhow::Result<()> {
    let series = build_series(table)?;
    draw_linear(&series, &out_dir.join("performance_linear.png"))?;
    draw_log(&series, &out_dir.join("performance_log.png"))?;
    Ok(())
}

/// Group rows by implementation in first-seen order.
fn build_series(table: &[Measurement]) -> anyhow::Result<Series> {
    let mut series: Series = Vec::new();
    for m in table {
        let Some(nodes) = m.nodes else {
            bail!(
                "measurement for {:?} ({}s) has no node count; cannot plot performance",
                m.implementation,
                m.time
            );
        };
        match series.iter_mut().find(|(name, _)| *name == m.implementation) {
            Some((_, points)) => points.push((nodes, m.time)),
            None => series.push((m.implementation.clone(), vec![(nodes, m.time)])),
        }
    }
    for (_, points) in &mut series {
        points.sort_by_key(|&(nodes, _)| nodes);
    }
    Ok(series)
}

fn axis_bounds(series: &Series) -> (u64, f64, f64) {
    let x_max = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|&(n, _)| n))
        .max()
        .unwrap_or(1);
    let times = series.iter().flat_map(|(_, pts)| pts.iter().map(|&(_, t)| t));
    let y_max = times.clone().fold(0.0f64, f64::max).max(1e-9);
    let y_min = times
        .filter(|&t| t > 0.0)
        .fold(f64::INFINITY, f64::min)
        .min(y_max);
    (x_max, y_min, y_max)
}

fn draw_linear(series: &Series, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_max, _, y_max) = axis_bounds(series);
    let mut chart = ChartBuilder::on(&root)
        .caption("Performance (Linear Scale)", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..x_max, 0f64..y_max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Number of Nodes")
        .y_desc("Time (s)")
        .draw()?;

    for (i, (name, points)) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(points.clone(), color))?
            .label(name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points.iter().map(|&p| Circle::new(p, 3, color.filled())),
        )?;
    }

    chart.configure_series_labels().border_style(BLACK).draw()?;
    root.present()?;
    Ok(())
}

fn draw_log(series: &Series, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_max, y_min, y_max) = axis_bounds(series);
    let mut chart = ChartBuilder::on(&root)
        .caption("Performance (Log Scale)", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..x_max, (y_min * 0.5..y_max * 2.0).log_scale())?;
    chart
        .configure_mesh()
        .x_desc("Number of Nodes")
        .y_desc("Time (s)")
        .draw()?;

    for (i, (name, points)) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(points.clone(), color))?
            .label(name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points.iter().map(|&p| Circle::new(p, 3, color.filled())),
        )?;
    }

    chart.configure_series_labels().border_style(BLACK).draw()?;
    root.present()?;
    Ok(())
}
