//! Freehand drawing surface and its PNG export.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};

pub const MAX_WIDTH: f32 = 800.0;
pub const ASPECT_RATIO: f32 = 16.0 / 10.0;
pub const STROKE_WIDTH: f32 = 2.0;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Canvas size for the available width, keeping 16:10.
pub fn fit_size(available_width: f32) -> [f32; 2] {
    let width = available_width.clamp(1.0, MAX_WIDTH);
    [width, width / ASPECT_RATIO]
}

/// Strokes in canvas-local coordinates.
#[derive(Clone, Debug, Default)]
pub struct DrawingCanvas {
    pub strokes: Vec<Vec<[f32; 2]>>,
    drawing: bool,
}

impl DrawingCanvas {
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.is_empty())
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn start_stroke(&mut self, point: [f32; 2]) {
        self.strokes.push(vec![point]);
        self.drawing = true;
    }

    pub fn extend_stroke(&mut self, point: [f32; 2]) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            if stroke.last() != Some(&point) {
                stroke.push(point);
            }
        }
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Renders the strokes black on white at `width` x `height`.
    pub fn rasterize(&self, width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width.max(1), height.max(1), BACKGROUND);
        let radius = STROKE_WIDTH / 2.0;

        for stroke in &self.strokes {
            match stroke.as_slice() {
                [] => {}
                [only] => stamp(&mut img, *only, radius),
                points => {
                    for pair in points.windows(2) {
                        draw_segment(&mut img, pair[0], pair[1], radius);
                    }
                }
            }
        }
        img
    }

    /// PNG bytes wrapped as a `data:image/png;base64,` URL.
    pub fn to_data_url(&self, width: u32, height: u32) -> Result<String, image::ImageError> {
        let img = self.rasterize(width, height);
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png.into_inner())))
    }
}

fn draw_segment(img: &mut RgbaImage, from: [f32; 2], to: [f32; 2], radius: f32) {
    let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
    let steps = (dx.hypot(dy) * 2.0).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(img, [from[0] + dx * t, from[1] + dy * t], radius);
    }
}

fn stamp(img: &mut RgbaImage, center: [f32; 2], radius: f32) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let x0 = (center[0] - radius).floor() as i64;
    let x1 = (center[0] + radius).ceil() as i64;
    let y0 = (center[1] - radius).floor() as i64;
    let y1 = (center[1] + radius).ceil() as i64;

    for y in y0.max(0)..y1.min(h) {
        for x in x0.max(0)..x1.min(w) {
            let (px, py) = (x as f32 + 0.5 - center[0], y as f32 + 0.5 - center[1]);
            if px * px + py * py <= radius * radius {
                img.put_pixel(x as u32, y as u32, INK);
            }
        }
    }
}
