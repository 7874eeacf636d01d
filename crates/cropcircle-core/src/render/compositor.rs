use image::{RgbImage, RgbaImage};
use rayon::prelude::*;

use crate::consts::{
    MAX_OUTPUT_SIZE, MAX_SUPERSAMPLE_TAPS, PARALLEL_PIXEL_THRESHOLD, SUPERSAMPLE_FOOTPRINT,
};
use crate::error::{AvatarError, Result};
use crate::geometry::SourceRect;

type Rgb = [f64; 3];

/// Render `rect` of `source` into an `output_size` square with a circular clip.
///
/// Everything outside the inscribed circle, and every sample that falls
/// outside the source image, takes the `fill` colour. Source alpha is blended
/// over `fill`. The circle edge is anti-aliased over one pixel.
pub fn composite(
    source: &RgbaImage,
    rect: &SourceRect,
    output_size: u32,
    fill: [u8; 3],
) -> Result<RgbImage> {
    if output_size == 0 || output_size > MAX_OUTPUT_SIZE {
        return Err(AvatarError::Export(format!(
            "cannot allocate a {output_size}x{output_size} surface (limit {MAX_OUTPUT_SIZE})"
        )));
    }
    if !(rect.size.is_finite() && rect.size > 0.0) {
        return Err(AvatarError::Export(format!(
            "degenerate source region (size {})",
            rect.size
        )));
    }

    let side = output_size as usize;
    let sampler = Sampler::new(source, rect, output_size, fill);
    let row_len = side * 3;
    let mut buf = vec![0u8; side * row_len];

    tracing::debug!(
        x = rect.x(),
        y = rect.y(),
        size = rect.size,
        output_size,
        taps = sampler.taps,
        "Compositing avatar"
    );

    if side * side >= PARALLEL_PIXEL_THRESHOLD {
        buf.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, out)| sampler.render_row(row, out));
    } else {
        buf.chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, out)| sampler.render_row(row, out));
    }

    RgbImage::from_raw(output_size, output_size, buf)
        .ok_or_else(|| AvatarError::Export("output buffer size mismatch".into()))
}

struct Sampler<'a> {
    source: &'a RgbaImage,
    origin_x: f64,
    origin_y: f64,
    /// Source pixels per output pixel.
    scale: f64,
    /// Supersampling taps per axis.
    taps: u32,
    radius: f64,
    fill: Rgb,
}

impl<'a> Sampler<'a> {
    fn new(source: &'a RgbaImage, rect: &SourceRect, output_size: u32, fill: [u8; 3]) -> Self {
        let scale = rect.size / output_size as f64;
        let taps = if scale <= SUPERSAMPLE_FOOTPRINT {
            1
        } else {
            (scale.ceil() as u32).min(MAX_SUPERSAMPLE_TAPS)
        };
        Self {
            source,
            origin_x: rect.x(),
            origin_y: rect.y(),
            scale,
            taps,
            radius: output_size as f64 / 2.0,
            fill: fill.map(f64::from),
        }
    }

    fn render_row(&self, row: usize, out: &mut [u8]) {
        for (col, px) in out.chunks_exact_mut(3).enumerate() {
            let coverage = self.circle_coverage(col as f64 + 0.5, row as f64 + 0.5);
            let color = if coverage > 0.0 {
                let sampled = self.sample_pixel(col as f64, row as f64);
                lerp(self.fill, sampled, coverage)
            } else {
                self.fill
            };
            for (dst, v) in px.iter_mut().zip(color) {
                *dst = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Fraction of the pixel centred at (cx, cy) inside the clip circle.
    fn circle_coverage(&self, cx: f64, cy: f64) -> f64 {
        let d = (cx - self.radius).hypot(cy - self.radius);
        (self.radius - d + 0.5).clamp(0.0, 1.0)
    }

    /// Average colour over the footprint of output pixel (col, row).
    fn sample_pixel(&self, col: f64, row: f64) -> Rgb {
        let n = self.taps as f64;
        let mut acc = [0.0; 3];
        for j in 0..self.taps {
            let v = self.origin_y + (row + (j as f64 + 0.5) / n) * self.scale;
            for i in 0..self.taps {
                let u = self.origin_x + (col + (i as f64 + 0.5) / n) * self.scale;
                let c = self.bilinear(u, v);
                for (a, s) in acc.iter_mut().zip(c) {
                    *a += s;
                }
            }
        }
        let count = n * n;
        acc.map(|a| a / count)
    }

    /// Bilinear sample at continuous source position (u, v).
    fn bilinear(&self, u: f64, v: f64) -> Rgb {
        let px = u - 0.5;
        let py = v - 0.5;
        // No neighbour lies inside the source; also rejects NaN and infinities.
        let (w, h) = self.source.dimensions();
        if !(px >= -1.0 && px < w as f64 && py >= -1.0 && py < h as f64) {
            return self.fill;
        }
        let x0 = px.floor();
        let y0 = py.floor();
        let fx = px - x0;
        let fy = py - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = lerp(self.texel(x0, y0), self.texel(x0 + 1, y0), fx);
        let bottom = lerp(self.texel(x0, y0 + 1), self.texel(x0 + 1, y0 + 1), fx);
        lerp(top, bottom, fy)
    }

    /// Source pixel composited over the fill; out-of-range reads yield the fill.
    fn texel(&self, x: i64, y: i64) -> Rgb {
        let (w, h) = self.source.dimensions();
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return self.fill;
        }
        let p = self.source.get_pixel(x as u32, y as u32).0;
        let alpha = p[3] as f64 / 255.0;
        lerp(self.fill, [p[0], p[1], p[2]].map(f64::from), alpha)
    }
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
