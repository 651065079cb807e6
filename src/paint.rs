//! Raster paint primitives for the layer compositor.
//!
//! Everything here mutates an RGBA buffer in place. Blend arithmetic runs
//! in linear light (via `palette` conversions) and the result is
//! alpha-composited over the backdrop, matching canvas `globalAlpha` +
//! `globalCompositeOperation` semantics. The base photo is opaque, so the
//! destination alpha channel is left untouched.

use crate::color::Rgb8;
use crate::frame::{Frame, PointF};
use crate::geometry::point_in_polygon;
use image::Rgba;
use palette::LinSrgb;

/// Pixel-combination function for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Plain alpha compositing of the source color.
    SourceOver,
    /// Darkens naturally; used for base and shadow passes.
    Multiply,
    /// Brightens without flattening underlying texture; highlight passes.
    Overlay,
    /// Additive-style brightening; gloss and shine passes.
    Screen,
}

impl BlendMode {
    fn combine(self, backdrop: LinSrgb<f32>, source: LinSrgb<f32>) -> LinSrgb<f32> {
        let per_channel = |cb: f32, cs: f32| match self {
            BlendMode::SourceOver => cs,
            BlendMode::Multiply => cb * cs,
            BlendMode::Screen => cb + cs - cb * cs,
            BlendMode::Overlay => {
                if cb <= 0.5 {
                    2.0 * cb * cs
                } else {
                    1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
                }
            }
        };
        LinSrgb::new(
            per_channel(backdrop.red, source.red),
            per_channel(backdrop.green, source.green),
            per_channel(backdrop.blue, source.blue),
        )
    }
}

/// A gradient stop: (offset in [0, 1], opacity multiplier in [0, 1]).
pub type GradientStop = (f32, f32);

/// Blends `color` at `alpha` into one destination pixel.
pub(crate) fn blend_px(px: &mut Rgba<u8>, color: Rgb8, alpha: f32, mode: BlendMode) {
    if alpha <= 0.0 {
        return;
    }
    let alpha = alpha.min(1.0);
    let backdrop = Rgb8::new(px.0[0], px.0[1], px.0[2]).to_linear();
    let blended = mode.combine(backdrop, color.to_linear());
    let out = Rgb8::from_linear(LinSrgb::new(
        backdrop.red + (blended.red - backdrop.red) * alpha,
        backdrop.green + (blended.green - backdrop.green) * alpha,
        backdrop.blue + (blended.blue - backdrop.blue) * alpha,
    ));
    px.0[0] = out.r;
    px.0[1] = out.g;
    px.0[2] = out.b;
}

/// Interpolates the opacity of a stop list at normalized distance `t`.
fn gradient_opacity(stops: &[GradientStop], t: f32) -> f32 {
    match stops {
        [] => 0.0,
        [(_, o)] => *o,
        _ => {
            if t <= stops[0].0 {
                return stops[0].1;
            }
            for pair in stops.windows(2) {
                let (o0, a0) = pair[0];
                let (o1, a1) = pair[1];
                if t <= o1 {
                    let span = (o1 - o0).max(f32::EPSILON);
                    return a0 + (a1 - a0) * (t - o0) / span;
                }
            }
            stops[stops.len() - 1].1
        }
    }
}

/// Paints a soft-edged elliptical radial gradient.
///
/// The gradient's opacity is `alpha × stop opacity` at normalized radial
/// distance t, and zero outside the ellipse. `clip`, when given, restricts
/// painting to the interior of the polygon.
#[allow(clippy::too_many_arguments)]
pub(crate) fn fill_radial_gradient(
    frame: &mut Frame,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    color: Rgb8,
    stops: &[GradientStop],
    alpha: f32,
    mode: BlendMode,
    clip: Option<&[PointF]>,
) {
    if alpha <= 0.0 || rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (w, h) = (frame.width() as i64, frame.height() as i64);
    let x0 = ((cx - rx).floor() as i64).clamp(0, w);
    let x1 = ((cx + rx).ceil() as i64).clamp(0, w);
    let y0 = ((cy - ry).floor() as i64).clamp(0, h);
    let y1 = ((cy + ry).ceil() as i64).clamp(0, h);

    for y in y0..y1 {
        for x in x0..x1 {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let dx = (fx - cx) / rx;
            let dy = (fy - cy) / ry;
            let t = (dx * dx + dy * dy).sqrt();
            if t >= 1.0 {
                continue;
            }
            if let Some(poly) = clip {
                if !point_in_polygon(fx, fy, poly) {
                    continue;
                }
            }
            let opacity = alpha * gradient_opacity(stops, t);
            blend_px(frame.data.get_pixel_mut(x as u32, y as u32), color, opacity, mode);
        }
    }
}

/// Fills an ellipse with a solid color.
pub(crate) fn fill_ellipse(
    frame: &mut Frame,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    color: Rgb8,
    alpha: f32,
    mode: BlendMode,
) {
    fill_radial_gradient(frame, cx, cy, rx, ry, color, &[(0.0, 1.0), (1.0, 1.0)], alpha, mode, None);
}

/// Fills the interior of a closed polygon with a solid color.
///
/// Nonzero winding rule; pixels are tested at their centers, so nothing
/// strictly outside the contour is touched.
pub(crate) fn fill_polygon(
    frame: &mut Frame,
    polygon: &[PointF],
    color: Rgb8,
    alpha: f32,
    mode: BlendMode,
) {
    if alpha <= 0.0 || polygon.len() < 3 {
        return;
    }
    let (w, h) = (frame.width() as i64, frame.height() as i64);
    let x0 = (min_of(polygon, |p| p.x).floor() as i64).clamp(0, w);
    let x1 = (max_of(polygon, |p| p.x).ceil() as i64).clamp(0, w);
    let y0 = (min_of(polygon, |p| p.y).floor() as i64).clamp(0, h);
    let y1 = (max_of(polygon, |p| p.y).ceil() as i64).clamp(0, h);

    for y in y0..y1 {
        for x in x0..x1 {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            if point_in_polygon(fx, fy, polygon) {
                blend_px(frame.data.get_pixel_mut(x as u32, y as u32), color, alpha, mode);
            }
        }
    }
}

/// Strokes an open polyline with round caps/joins.
///
/// Edge opacity feathers over the last pixel so the stroke does not read
/// as a hard-edged sticker.
pub(crate) fn stroke_polyline(
    frame: &mut Frame,
    points: &[PointF],
    width: f32,
    color: Rgb8,
    alpha: f32,
    mode: BlendMode,
) {
    if alpha <= 0.0 || points.len() < 2 || width <= 0.0 {
        return;
    }
    let half = width / 2.0;
    let (w, h) = (frame.width() as i64, frame.height() as i64);
    let x0 = ((min_of(points, |p| p.x) - half).floor() as i64).clamp(0, w);
    let x1 = ((max_of(points, |p| p.x) + half).ceil() as i64).clamp(0, w);
    let y0 = ((min_of(points, |p| p.y) - half).floor() as i64).clamp(0, h);
    let y1 = ((max_of(points, |p| p.y) + half).ceil() as i64).clamp(0, h);

    for y in y0..y1 {
        for x in x0..x1 {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let dist = points
                .windows(2)
                .map(|seg| dist_to_segment(fx, fy, seg[0], seg[1]))
                .fold(f32::INFINITY, f32::min);
            if dist >= half {
                continue;
            }
            // 1px feather at the stroke edge.
            let coverage = ((half - dist).min(1.0)).max(0.0);
            blend_px(
                frame.data.get_pixel_mut(x as u32, y as u32),
                color,
                alpha * coverage,
                mode,
            );
        }
    }
}

fn dist_to_segment(px: f32, py: f32, a: PointF, b: PointF) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((px - a.x) * dx + (py - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

fn min_of(points: &[PointF], f: impl Fn(&PointF) -> f32) -> f32 {
    points.iter().map(&f).fold(f32::INFINITY, f32::min)
}

fn max_of(points: &[PointF], f: impl Fn(&PointF) -> f32) -> f32 {
    points.iter().map(&f).fold(f32::NEG_INFINITY, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn gray_frame(size: u32, level: u8) -> Frame {
        let mut img = RgbaImage::new(size, size);
        for px in img.pixels_mut() {
            px.0 = [level, level, level, 255];
        }
        Frame::new(img)
    }

    #[test]
    fn multiply_darkens() {
        let mut px = Rgba([200u8, 200, 200, 255]);
        blend_px(&mut px, Rgb8::new(100, 100, 100), 1.0, BlendMode::Multiply);
        assert!(px.0[0] < 200);
    }

    #[test]
    fn screen_lightens() {
        let mut px = Rgba([100u8, 100, 100, 255]);
        blend_px(&mut px, Rgb8::new(200, 200, 200), 1.0, BlendMode::Screen);
        assert!(px.0[0] > 100);
    }

    #[test]
    fn zero_alpha_is_a_noop() {
        let mut px = Rgba([42u8, 43, 44, 255]);
        for mode in [
            BlendMode::SourceOver,
            BlendMode::Multiply,
            BlendMode::Overlay,
            BlendMode::Screen,
        ] {
            blend_px(&mut px, Rgb8::new(255, 0, 0), 0.0, mode);
        }
        assert_eq!(px.0, [42, 43, 44, 255]);
    }

    #[test]
    fn gradient_opacity_interpolates_stops() {
        let stops = [(0.0, 1.0), (0.6, 0.5), (1.0, 0.0)];
        assert_eq!(gradient_opacity(&stops, 0.0), 1.0);
        assert!((gradient_opacity(&stops, 0.3) - 0.75).abs() < 1e-5);
        assert!((gradient_opacity(&stops, 0.6) - 0.5).abs() < 1e-5);
        assert!(gradient_opacity(&stops, 1.0) < 1e-5);
    }

    #[test]
    fn radial_gradient_fades_outward_and_stays_inside() {
        let mut frame = gray_frame(64, 128);
        fill_radial_gradient(
            &mut frame,
            32.0,
            32.0,
            20.0,
            20.0,
            Rgb8::new(255, 0, 0),
            &[(0.0, 1.0), (1.0, 0.0)],
            1.0,
            BlendMode::SourceOver,
            None,
        );
        let center = frame.data.get_pixel(32, 32).0;
        let mid = frame.data.get_pixel(42, 32).0;
        let outside = frame.data.get_pixel(60, 32).0;

        assert!(center[0] > mid[0], "red should fade with distance");
        assert_eq!(outside, [128, 128, 128, 255], "outside the radius untouched");
    }

    #[test]
    fn polygon_fill_respects_contour() {
        let mut frame = gray_frame(32, 128);
        let poly = vec![
            PointF::new(8.0, 8.0),
            PointF::new(24.0, 8.0),
            PointF::new(24.0, 24.0),
            PointF::new(8.0, 24.0),
        ];
        fill_polygon(&mut frame, &poly, Rgb8::new(255, 0, 0), 1.0, BlendMode::SourceOver);

        assert_eq!(frame.data.get_pixel(16, 16).0[0], 255);
        assert_eq!(frame.data.get_pixel(4, 16).0, [128, 128, 128, 255]);
        assert_eq!(frame.data.get_pixel(16, 28).0, [128, 128, 128, 255]);
    }

    #[test]
    fn gradient_clip_confines_paint() {
        let mut frame = gray_frame(32, 128);
        let clip = vec![
            PointF::new(0.0, 0.0),
            PointF::new(16.0, 0.0),
            PointF::new(16.0, 32.0),
            PointF::new(0.0, 32.0),
        ];
        fill_radial_gradient(
            &mut frame,
            16.0,
            16.0,
            12.0,
            12.0,
            Rgb8::new(255, 0, 0),
            &[(0.0, 1.0), (1.0, 0.0)],
            1.0,
            BlendMode::SourceOver,
            Some(&clip),
        );
        // Left of x=16 painted, right of it untouched.
        assert!(frame.data.get_pixel(12, 16).0[0] > 128);
        assert_eq!(frame.data.get_pixel(20, 16).0, [128, 128, 128, 255]);
    }

    #[test]
    fn stroke_covers_line_not_bbox() {
        let mut frame = gray_frame(32, 128);
        let line = vec![PointF::new(4.0, 16.0), PointF::new(28.0, 16.0)];
        stroke_polyline(&mut frame, &line, 4.0, Rgb8::new(0, 0, 255), 1.0, BlendMode::SourceOver);

        assert!(frame.data.get_pixel(16, 16).0[2] > 128, "on the line");
        assert_eq!(
            frame.data.get_pixel(16, 24).0,
            [128, 128, 128, 255],
            "off the line"
        );
    }
}
