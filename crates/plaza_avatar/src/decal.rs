//! Text decals.
//!
//! Shirts and similar items print a short string on the chest. The text is
//! laid out and rasterized on the CPU from TrueType outlines into an RGBA8
//! surface that the host uploads as a texture for one double-sided quad.
//! It is the only non-voxel geometry a character carries.
//!
//! The font is loaded once per [`crate::Assembler`]. Without one, decals
//! keep their size and background but carry no ink.

use ab_glyph::{point, Font, FontArc, GlyphId, ScaleFont};
use tracing::{debug, warn};

use crate::color::Rgb;

/// Glyph height in font pixels, before `pixel_scale`.
pub const DECAL_GLYPH_PX: f32 = 12.0;
/// Empty font pixels around the text.
const PADDING: u32 = 1;
/// Longer strings are truncated.
pub const MAX_DECAL_CHARS: usize = 24;
/// Overrides the font search when set.
pub const DECAL_FONT_ENV: &str = "PLAZA_DECAL_FONT";

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the decal font.
///
/// Tries `configured`, then [`DECAL_FONT_ENV`], then common system fonts.
#[must_use]
pub fn load_decal_font(configured: Option<&str>) -> Option<FontArc> {
    let env_path = std::env::var(DECAL_FONT_ENV).ok();
    let candidates = configured
        .into_iter()
        .chain(env_path.as_deref())
        .chain(FONT_CANDIDATES.iter().copied());

    for path in candidates {
        let Ok(data) = std::fs::read(path) else { continue };
        match FontArc::try_from_vec(data) {
            Ok(font) => {
                debug!(path, "loaded decal font");
                return Some(font);
            }
            Err(_) => warn!(path, "not a usable font file"),
        }
    }
    warn!("no decal font found; text decals will be blank");
    None
}

/// Static decal declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextDecalSpec {
    /// Text to print.
    pub text: &'static str,
    /// Ink color literal.
    pub color: &'static str,
    /// Background literal; `None` leaves it transparent.
    pub background: Option<&'static str>,
    /// Quad offset from the part origin, in voxel units.
    pub offset: [f32; 3],
    /// Quad width in voxel units; height follows the texture aspect.
    pub width: f32,
}

/// A rasterized decal ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDecal {
    /// The text that was drawn.
    pub text: String,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Row-major RGBA8, top row first.
    pub rgba: Vec<u8>,
    /// Quad size in world units.
    pub quad_size: [f32; 2],
    /// Always rendered from both sides.
    pub double_sided: bool,
}

impl TextDecal {
    /// RGBA at pixel `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterizes `text` at `pixel_scale` texture pixels per font pixel.
///
/// `quad_width` is in world units. Characters the font lacks draw as its
/// missing-glyph box.
#[must_use]
pub fn rasterize(
    text: &str,
    font: Option<&FontArc>,
    ink: Rgb,
    background: Option<Rgb>,
    pixel_scale: u32,
    quad_width: f32,
) -> TextDecal {
    let scale = pixel_scale.max(1);
    let text: String = text.chars().take(MAX_DECAL_CHARS).collect();
    let px = DECAL_GLYPH_PX * scale as f32;
    let pad = PADDING * scale;

    let (width, height, coverage) = match font {
        Some(font) => draw_coverage(font, &text, px, pad),
        None => {
            let chars = text.chars().count().max(1) as f32;
            let width = (chars * px * 0.6).ceil() as u32 + 2 * pad;
            let height = px.ceil() as u32 + 2 * pad;
            (width, height, vec![0.0; (width * height) as usize])
        }
    };

    let rgba = coverage
        .iter()
        .flat_map(|&c| shade(ink, background, c))
        .collect();

    let quad_width = if quad_width.is_finite() && quad_width > 0.0 { quad_width } else { 1.0 };
    TextDecal {
        text,
        width,
        height,
        rgba,
        quad_size: [quad_width, quad_width * height as f32 / width as f32],
        double_sided: true,
    }
}

/// Lays `text` out on one baseline and returns per-pixel coverage.
fn draw_coverage(font: &FontArc, text: &str, px: f32, pad: u32) -> (u32, u32, Vec<f32>) {
    let scaled = font.as_scaled(px);

    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    let mut placed = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        placed.push((id, caret));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let width = (caret.ceil().max(1.0) as u32) + 2 * pad;
    let height = ((scaled.ascent() - scaled.descent()).ceil().max(1.0) as u32) + 2 * pad;
    let mut coverage = vec![0.0f32; (width * height) as usize];
    let baseline = pad as f32 + scaled.ascent();

    for (id, x) in placed {
        let glyph = id.with_scale_and_position(px, point(pad as f32 + x, baseline));
        let Some(outline) = font.outline_glyph(glyph) else { continue };
        let bounds = outline.px_bounds();
        outline.draw(|gx, gy, c| {
            let x = bounds.min.x as i64 + i64::from(gx);
            let y = bounds.min.y as i64 + i64::from(gy);
            if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                return;
            }
            let i = (y as u32 * width + x as u32) as usize;
            if c > coverage[i] {
                coverage[i] = c;
            }
        });
    }
    (width, height, coverage)
}

/// Blends ink over the background by glyph coverage.
fn shade(ink: Rgb, background: Option<Rgb>, coverage: f32) -> [u8; 4] {
    let c = coverage.clamp(0.0, 1.0);
    match background {
        Some(bg) => {
            let mixed = bg.lerp(ink, c);
            [mixed.r, mixed.g, mixed.b, 0xFF]
        }
        None if c > 0.0 => [ink.r, ink.g, ink.b, (c * 255.0).round() as u8],
        None => [0, 0, 0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> FontArc {
        load_decal_font(None).expect("decal tests need a system TrueType font such as DejaVu Sans")
    }

    fn inked(decal: &TextDecal) -> usize {
        decal.rgba.chunks_exact(4).filter(|px| px[3] > 0).count()
    }

    #[test]
    fn test_texture_dimensions() {
        let font = font();
        let decal = rasterize("HI", Some(&font), Rgb::BLACK, Some(Rgb::WHITE), 2, 1.0);
        assert_eq!(decal.rgba.len(), (decal.width * decal.height * 4) as usize);
        assert!(decal.height >= (DECAL_GLYPH_PX * 2.0) as u32);
        assert!(decal.double_sided);
        assert!((decal.quad_size[1] - decal.height as f32 / decal.width as f32).abs() < 1e-6);

        let wider = rasterize("HIHI", Some(&font), Rgb::BLACK, None, 2, 1.0);
        assert!(wider.width > decal.width);
        assert_eq!(wider.height, decal.height);
    }

    #[test]
    fn test_ink_and_background() {
        let font = font();
        let red = Rgb::new(0xFF, 0, 0);
        let decal = rasterize("I", Some(&font), red, None, 4, 1.0);
        // padding corner stays transparent
        assert_eq!(decal.pixel(0, 0), Some([0, 0, 0, 0]));
        assert!(decal.rgba.chunks_exact(4).any(|px| px == [0xFF, 0, 0, 0xFF]));

        let boxed = rasterize("I", Some(&font), red, Some(Rgb::WHITE), 1, 1.0);
        assert_eq!(boxed.pixel(0, 0), Some([0xFF, 0xFF, 0xFF, 0xFF]));
        assert!(boxed.rgba.chunks_exact(4).all(|px| px[3] == 0xFF));
    }

    #[test]
    fn test_case_is_preserved() {
        let font = font();
        let lower = rasterize("plaza", Some(&font), Rgb::BLACK, None, 1, 1.0);
        let upper = rasterize("PLAZA", Some(&font), Rgb::BLACK, None, 1, 1.0);
        assert_ne!(lower.rgba, upper.rgba);
    }

    #[test]
    fn test_non_ascii_text_draws_its_own_glyphs() {
        let font = font();
        let draw = |text: &str| rasterize(text, Some(&font), Rgb::BLACK, None, 2, 1.0);

        let accented = draw("É~");
        assert!(inked(&accented) > 0);
        assert_ne!(accented.rgba, draw("??").rgba);
        assert_ne!(accented.rgba, draw("E~").rgba);

        let heart = draw("I ♥ PLAZA");
        assert!(inked(&heart) > inked(&draw("I   PLAZA")));
    }

    #[test]
    fn test_truncates_long_text() {
        let long = "X".repeat(100);
        let decal = rasterize(&long, Some(&font()), Rgb::BLACK, None, 1, 1.0);
        assert_eq!(decal.text.chars().count(), MAX_DECAL_CHARS);
    }

    #[test]
    fn test_empty_text_still_valid() {
        let decal = rasterize("", Some(&font()), Rgb::BLACK, None, 1, 0.0);
        assert!(decal.width > 0 && decal.height > 0);
        assert_eq!(decal.quad_size[0], 1.0);
    }

    #[test]
    fn test_missing_font_keeps_surface_blank() {
        let decal = rasterize("PLAZA", None, Rgb::BLACK, Some(Rgb::WHITE), 1, 1.0);
        assert!(decal.width > 0 && decal.height > 0);
        assert!(decal.rgba.chunks_exact(4).all(|px| px == [0xFF, 0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_bad_font_path_falls_through() {
        assert!(load_decal_font(Some("/nonexistent/plaza.ttf")).is_some());
    }
}
