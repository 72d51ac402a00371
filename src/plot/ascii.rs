//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - samples: `o`
//! - fitted curve: `-` line

use crate::domain::{CurveFile, QuadraticCurve};
use crate::models::predict;

/// Fallback x-range when none can be derived.
const DEFAULT_X_RANGE: (f64, f64) = (-100.0, 100.0);

/// Render samples with a fitted curve drawn underneath.
pub fn render_ascii_plot(xs: &[f64], ys: &[f64], curve: &QuadraticCurve, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    let (x_min, x_max) = x_range(points.iter().map(|p| p.0)).unwrap_or(DEFAULT_X_RANGE);
    let curve_points = sample_curve(curve, x_min, x_max, width.max(2));
    render_plot(&points, &curve_points, x_min, x_max, width, height)
}

/// Render the precomputed grid of a saved curve file (no sample overlay).
pub fn render_curve_file_plot(curve: &CurveFile, width: usize, height: usize) -> String {
    let curve_points: Vec<(f64, f64)> = curve
        .grid
        .x
        .iter()
        .copied()
        .zip(curve.grid.y.iter().copied())
        .collect();
    let (x_min, x_max) = x_range(curve.grid.x.iter().copied()).unwrap_or(DEFAULT_X_RANGE);
    render_plot(&[], &curve_points, x_min, x_max, width, height)
}

fn render_plot(
    points: &[(f64, f64)],
    curve_points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(points, curve_points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, curve_points, x_min, x_max, y_min, y_max);

    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(xs: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for x in xs.filter(|x| x.is_finite()) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn sample_curve(curve: &QuadraticCurve, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    crate::data::linspace(x_min, x_max, n.max(2))
        .into_iter()
        .map(|x| (x, predict(curve, x)))
        .collect()
}

fn y_range(points: &[(f64, f64)], curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in points.iter().chain(curve).filter(|(_, y)| y.is_finite()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurveGrid;

    #[test]
    fn plot_golden_snapshot_small() {
        let curve = QuadraticCurve::new(0.0, 0.0, 100.0);
        let txt = render_ascii_plot(&[1.0, 10.0], &[100.0, 110.0], &curve, 10, 5);
        let expected = concat!(
            "Plot: x=[1.000, 10.000] | y=[99.50, 110.50]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn curve_file_plot_has_requested_size() {
        let file = CurveFile {
            tool: "quadfit".to_string(),
            created: chrono::Utc::now(),
            curve: QuadraticCurve::new(1.0, 0.0, 0.0),
            quality: None,
            grid: CurveGrid {
                x: vec![-2.0, -1.0, 0.0, 1.0, 2.0],
                y: vec![4.0, 1.0, 0.0, 1.0, 4.0],
            },
        };
        let txt = render_curve_file_plot(&file, 20, 8);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 20));
        // Parabola opens upward: both ends on the top row, the vertex on the bottom row.
        assert!(lines[1].starts_with('-') && lines[1].ends_with('-'));
        assert!(lines[8].contains('-'));
    }

    #[test]
    fn non_finite_curve_draws_points_only() {
        let curve = QuadraticCurve::new(f64::NAN, 0.0, 0.0);
        let txt = render_ascii_plot(&[0.0, 1.0], &[0.0, 1.0], &curve, 10, 5);
        let body: String = txt.lines().skip(1).collect();
        assert!(!body.contains('-'));
        assert_eq!(body.matches('o').count(), 2);
    }
}
