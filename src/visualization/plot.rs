//! Static PNG rendering for trajectories, curves, and bar charts
//!
//! Rasterizes directly into an `image::RgbImage`: a white canvas with a
//! small set of primitives (polyline, filled disk, axis lines, bars). No
//! contract on the output beyond "renders the supplied points"; the library
//! has no interactive viewer.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::errors::SimulationError;
use crate::simulation::states::NVec2;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRAY: Rgb<u8> = Rgb([170, 170, 170]);
const BLACK: Rgb<u8> = Rgb([20, 20, 20]);
const SKYBLUE: Rgb<u8> = Rgb([135, 206, 235]);
const ORANGE: Rgb<u8> = Rgb([255, 140, 0]);
const GREEN: Rgb<u8> = Rgb([0, 140, 0]);
const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
const RED: Rgb<u8> = Rgb([214, 39, 40]);

/// White raster canvas with pixel-space drawing primitives.
/// Coordinates are f64 pixels; anything outside the image is clipped.
pub struct Canvas {
    img: RgbImage,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, WHITE),
            width,
            height,
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Straight segment sampled one pixel at a time.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 + t * (x1 - x0);
            let y = y0 + t * (y1 - y0);
            self.put(x.round() as i64, y.round() as i64, color);
        }
    }

    /// Filled disk centered at (cx, cy).
    pub fn disk(&mut self, cx: f64, cy: f64, r: f64, color: Rgb<u8>) {
        let r = r.max(0.0);
        let (x_lo, x_hi) = ((cx - r).floor() as i64, (cx + r).ceil() as i64);
        let (y_lo, y_hi) = ((cy - r).floor() as i64, (cy + r).ceil() as i64);
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Axis-aligned filled rectangle.
    pub fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (x_lo, x_hi) = (x0.min(x1).round() as i64, x0.max(x1).round() as i64);
        let (y_lo, y_hi) = (y0.min(y1).round() as i64, y0.max(y1).round() as i64);
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                self.put(x, y, color);
            }
        }
    }

    /// Encode as PNG, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), SimulationError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        self.img.save(path)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

/// Equal-aspect top-down view of a trajectory around the central body.
/// The origin sits at the image center with the body drawn to scale as a
/// disk; the trajectory is a polyline with its start point marked.
pub fn trajectory_plot(
    positions: &[NVec2],
    body_radius: f64,
    path: &Path,
) -> Result<(), SimulationError> {
    const SIZE: u32 = 800;

    if positions.is_empty() {
        return Err(SimulationError::Config(
            "trajectory plot needs at least one position".to_string(),
        ));
    }

    // Symmetric extent covering the body and every trajectory point.
    let mut extent = body_radius;
    for p in positions {
        extent = extent.max(p.x.abs()).max(p.y.abs());
    }
    if !(extent > 0.0) || !extent.is_finite() {
        return Err(SimulationError::Config(
            "trajectory plot has no finite extent".to_string(),
        ));
    }
    let extent = extent * 1.05;

    let center = SIZE as f64 / 2.0;
    let scale = center / extent;
    // World y up, image y down.
    let to_px = |p: &NVec2| (center + p.x * scale, center - p.y * scale);

    let mut canvas = Canvas::new(SIZE, SIZE);

    // Axes through the origin
    canvas.line(0.0, center, SIZE as f64, center, GRAY);
    canvas.line(center, 0.0, center, SIZE as f64, GRAY);

    // Central body to scale
    canvas.disk(center, center, body_radius * scale, SKYBLUE);

    // Trajectory polyline
    for pair in positions.windows(2) {
        let (x0, y0) = to_px(&pair[0]);
        let (x1, y1) = to_px(&pair[1]);
        canvas.line(x0, y0, x1, y1, ORANGE);
    }

    // Start marker
    let (sx, sy) = to_px(&positions[0]);
    canvas.disk(sx, sy, 4.0, GREEN);

    canvas.save(path)
}

/// Plain x-y line plot with left/bottom axes and a fixed margin.
pub fn line_plot(xs: &[f64], ys: &[f64], path: &Path) -> Result<(), SimulationError> {
    const WIDTH: u32 = 1000;
    const HEIGHT: u32 = 600;
    const MARGIN: f64 = 50.0;

    if xs.len() != ys.len() || xs.len() < 2 {
        return Err(SimulationError::Config(format!(
            "line plot needs two equally long series of at least 2 points, got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
        return Err(SimulationError::Config(
            "line plot given non-finite values".to_string(),
        ));
    }

    let (x_lo, x_hi) = span(xs);
    let (y_lo, y_hi) = span(ys);

    let plot_w = WIDTH as f64 - 2.0 * MARGIN;
    let plot_h = HEIGHT as f64 - 2.0 * MARGIN;
    let to_px = |x: f64, y: f64| {
        (
            MARGIN + (x - x_lo) / (x_hi - x_lo) * plot_w,
            HEIGHT as f64 - MARGIN - (y - y_lo) / (y_hi - y_lo) * plot_h,
        )
    };

    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    // Left and bottom axes
    canvas.line(MARGIN, MARGIN, MARGIN, HEIGHT as f64 - MARGIN, BLACK);
    canvas.line(
        MARGIN,
        HEIGHT as f64 - MARGIN,
        WIDTH as f64 - MARGIN,
        HEIGHT as f64 - MARGIN,
        BLACK,
    );

    for i in 1..xs.len() {
        let (x0, y0) = to_px(xs[i - 1], ys[i - 1]);
        let (x1, y1) = to_px(xs[i], ys[i]);
        canvas.line(x0, y0, x1, y1, BLUE);
    }

    canvas.save(path)
}

/// Grouped bar chart: one [v1, v2] pair of bars per group, baseline at zero.
pub fn bar_plot(groups: &[[f64; 2]], path: &Path) -> Result<(), SimulationError> {
    const WIDTH: u32 = 1000;
    const HEIGHT: u32 = 600;
    const MARGIN: f64 = 50.0;

    if groups.is_empty() {
        return Err(SimulationError::Config(
            "bar plot needs at least one group".to_string(),
        ));
    }
    let max = groups
        .iter()
        .flat_map(|g| g.iter())
        .fold(0.0_f64, |acc, &v| acc.max(v));
    if !(max > 0.0) || !max.is_finite() {
        return Err(SimulationError::Config(
            "bar plot needs positive finite values".to_string(),
        ));
    }
    let y_hi = max * 1.1;

    let plot_w = WIDTH as f64 - 2.0 * MARGIN;
    let plot_h = HEIGHT as f64 - 2.0 * MARGIN;
    let baseline = HEIGHT as f64 - MARGIN;

    let slot = plot_w / groups.len() as f64;
    let bar_w = slot * 0.35;

    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    canvas.line(MARGIN, MARGIN, MARGIN, baseline, BLACK);
    canvas.line(MARGIN, baseline, WIDTH as f64 - MARGIN, baseline, BLACK);

    for (i, [v1, v2]) in groups.iter().enumerate() {
        let mid = MARGIN + slot * (i as f64 + 0.5);
        let h1 = v1 / y_hi * plot_h;
        let h2 = v2 / y_hi * plot_h;
        canvas.rect(mid - bar_w, baseline - h1, mid - bar_w * 0.05, baseline, BLUE);
        canvas.rect(mid + bar_w * 0.05, baseline - h2, mid + bar_w, baseline, RED);
    }

    canvas.save(path)
}

// Value span with padding so a flat series still has a drawable range.
fn span(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}
