use crate::logs::Measurement;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Strong-scaling efficiency relative to the single-process run,
/// as a percentage.
fn efficiency(baseline: f64, procs: u32, time: f64) -> f64 {
    baseline / (procs as f64 * time) * 100.0
}

/// Render `scaling_efficiency.png`: one efficiency-vs-procs curve per
/// problem size that has a `procs == 1` baseline row.
///
/// Scaling analysis is optional; a table with no process counts at all
/// is a silent no-op. Sizes without a baseline row get no curve.
pub fn plot_scaling(table: &[Measurement], out_dir: &Path) -> anyhow::Result<()> {
    if !table.iter().any(|m| m.procs.is_some()) {
        return Ok(());
    }

    let curves = build_curves(table);

    let path = out_dir.join("scaling_efficiency.png");
    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = curves
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|&(p, _)| p))
        .max()
        .unwrap_or(1);
    let y_max = curves
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|&(_, e)| e))
        .fold(110.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Strong Scaling Efficiency", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..x_max + 1, 0f64..y_max * 1.05)?;
    chart
        .configure_mesh()
        .x_desc("Number of Processes")
        .y_desc("Scaling Efficiency (%)")
        .draw()?;

    for (i, (nodes, points)) in curves.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(points.clone(), color))?
            .label(format!("{nodes} nodes"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points.iter().map(|&p| Circle::new(p, 3, color.filled())),
        )?;
    }

    if !curves.is_empty() {
        chart.configure_series_labels().border_style(BLACK).draw()?;
    }
    root.present()?;
    Ok(())
}

/// Per problem size (first-seen order among baseline rows): efficiency
/// points across all process counts, sorted by procs. The baseline time
/// for a size is the first `procs == 1` row carrying that size.
fn build_curves(table: &[Measurement]) -> Vec<(u64, Vec<(u32, f64)>)> {
    let mut curves: Vec<(u64, Vec<(u32, f64)>)> = Vec::new();
    for m in table {
        let (Some(nodes), Some(1)) = (m.nodes, m.procs) else {
            continue;
        };
        if curves.iter().any(|&(n, _)| n == nodes) {
            continue;
        }

        let baseline = m.time;
        let mut points: Vec<(u32, f64)> = table
            .iter()
            .filter(|row| row.nodes == Some(nodes))
            .filter_map(|row| {
                row.procs
                    .map(|procs| (procs, efficiency(baseline, procs, row.time)))
            })
            .collect();
        points.sort_by_key(|&(procs, _)| procs);
        curves.push((nodes, points));
    }
    curves
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(nodes: Option<u64>, procs: Option<u32>, time: f64) -> Measurement {
        Measurement {
            implementation: "mpi".into(),
            time,
            nodes,
            procs,
        }
    }

    #[test]
    fn efficiency_matches_hand_computation() {
        // 10s on one process, 3s on four: 10 / 12 = 83.33%.
        let eff = efficiency(10.0, 4, 3.0);
        assert!((eff - 83.333333).abs() < 1e-4, "{eff}");
    }

    #[test]
    fn perfect_scaling_is_one_hundred_percent() {
        assert_eq!(efficiency(8.0, 8, 1.0), 100.0);
    }

    #[test]
    fn curves_use_first_baseline_and_cover_all_proc_counts() {
        let table = vec![
            m(Some(1000), Some(1), 10.0),
            m(Some(1000), Some(1), 12.0), // later baseline for same size is ignored
            m(Some(1000), Some(4), 3.0),
            m(Some(2000), Some(4), 9.0), // no baseline for 2000: no curve
        ];
        let curves = build_curves(&table);
        assert_eq!(curves.len(), 1);
        let (nodes, points) = &curves[0];
        assert_eq!(*nodes, 1000);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (1, 100.0));
        assert_eq!(points[1], (1, efficiency(10.0, 1, 12.0)));
        assert!((points[2].1 - 83.333333).abs() < 1e-4);
    }

    #[test]
    fn table_without_procs_is_a_silent_noop() {
        let dir = tempfile::tempdir().unwrap();
        let table = vec![m(Some(1000), None, 2.5)];
        plot_scaling(&table, dir.path()).unwrap();
        assert!(!dir.path().join("scaling_efficiency.png").exists());
    }
}
