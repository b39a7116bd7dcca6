//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::*;

/// Texture slot holding the font atlas.
pub const FONT_TEXTURE_SLOT: u32 = 0;

#[derive(Copy, Clone, Debug, PartialEq)]
/// Unscaled metrics and atlas coordinates of a glyph.
pub struct Glyph {
    /// Horizontal pen advance.
    pub advance: f32,
    /// Offset of the bitmap from the pen position: `x` to the right, `y` down from the top of the glyph cell.
    pub offset: [f32; 2],
    /// Bitmap size in pixels.
    pub size: [f32; 2],
    /// Atlas coordinates `[s0, t0, s1, t1]`, `t0` on the top row of the bitmap.
    pub uv: [f32; 4],
}

/// Glyph source behind the text engine; usually an [`AtlasFont`].
///
/// Glyph cells share one height so every line of text aligns on the same grid,
/// while advances vary per glyph.
pub trait Font {
    /// Name the font is registered under.
    fn name(&self) -> &str;
    /// Height of a glyph cell.
    fn glyph_height(&self) -> f32;
    /// Distance from the top of the cell to the baseline.
    fn ascent(&self) -> f32;
    /// Looks up a glyph.
    fn glyph(&self, ch: char) -> Option<Glyph>;
    /// UV rectangle of a solid white texel, used for untextured fills.
    fn white_pixel_uv(&self) -> [f32; 4];
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
/// Size of a rendered string.
pub struct TextMetrics {
    /// Sum of advances.
    pub width: f32,
    /// Glyph cell height.
    pub height: f32,
    /// Cell top to baseline distance.
    pub ascent: f32,
}

#[derive(Clone, Debug, Default)]
/// Renderable quads for a string.
pub struct TextRenderData {
    /// Four vertices per glyph.
    pub vertices: Vec<Vertex>,
    /// Six indices per glyph.
    pub indices: Vec<u32>,
    /// Two faces per glyph.
    pub face_count: u32,
    /// Width of the emitted text.
    pub width: f32,
    /// Glyph cell height.
    pub height: f32,
    /// Vertical pen advance.
    pub advance_height: f32,
}

/// Scaled text measurement and quad generation over a [`Font`].
pub struct TextEngine<'a> {
    font: &'a dyn Font,
    scale: f32,
}

impl<'a> TextEngine<'a> {
    /// Wraps `font`, scaling all metrics by `scale`.
    pub fn new(font: &'a dyn Font, scale: f32) -> Self { Self { font, scale } }

    /// The wrapped font.
    pub fn font(&self) -> &dyn Font { self.font }

    /// Current scale.
    pub fn scale(&self) -> f32 { self.scale }

    /// Scaled glyph cell height.
    pub fn glyph_height(&self) -> f32 { self.font.glyph_height() * self.scale }

    fn glyph(&self, ch: char) -> Option<Glyph> { self.font.glyph(ch).or_else(|| self.font.glyph('?')) }

    fn advance(&self, ch: char) -> f32 { self.glyph(ch).map(|g| g.advance).unwrap_or(0.0) * self.scale }

    /// Width, cell height and ascent of `text`.
    pub fn measure(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().map(|ch| self.advance(ch)).sum(),
            height: self.glyph_height(),
            ascent: self.font.ascent() * self.scale,
        }
    }

    /// Pixel offset of the caret placed before character `index`.
    pub fn offset_for_index(&self, text: &str, index: usize) -> f32 { text.chars().take(index).map(|ch| self.advance(ch)).sum() }

    /// Character index closest to pixel offset `x`.
    pub fn index_at_offset(&self, text: &str, x: f32) -> usize {
        let mut w = 0.0;
        for (idx, ch) in text.chars().enumerate() {
            let adv = self.advance(ch);
            if x < w + adv * 0.5 {
                return idx;
            }
            w += adv;
        }
        text.chars().count()
    }

    /// Quads for `text` with its top-left corner at `pos`.
    pub fn create_text(&self, pos: Vec2f, color: Color, text: &str) -> TextRenderData { self.create_text_clipped(pos, color, None, 0, text) }

    /// Quads for `text` starting at character `char_offset`, stopping before the glyph that would cross
    /// `max_width`.
    pub fn create_text_clipped(&self, pos: Vec2f, color: Color, max_width: Option<f32>, char_offset: usize, text: &str) -> TextRenderData {
        let metrics = self.measure("");
        let mut data = TextRenderData {
            height: metrics.height,
            advance_height: metrics.ascent,
            ..TextRenderData::default()
        };
        let mut pen_x = pos.x;
        for ch in text.chars().skip(char_offset) {
            let glyph = match self.glyph(ch) {
                Some(glyph) => glyph,
                None => continue,
            };
            let adv = glyph.advance * self.scale;
            if let Some(max) = max_width {
                if data.width + adv > max {
                    break;
                }
            }
            let r = rectf(
                pen_x + glyph.offset[0] * self.scale,
                pos.y - glyph.offset[1] * self.scale,
                glyph.size[0] * self.scale,
                glyph.size[1] * self.scale,
            );
            if r.width > 0.0 && r.height > 0.0 {
                let (vertices, indices) = rect_faces(r, color, FONT_TEXTURE_SLOT, glyph.uv);
                let base = data.vertices.len() as u32;
                data.vertices.extend_from_slice(&vertices);
                data.indices.extend(indices.iter().map(|idx| idx + base));
                data.face_count += 2;
            }
            pen_x += adv;
            data.width += adv;
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_font;

    #[test]
    fn measure_sums_advances() {
        let font = test_font();
        let text = TextEngine::new(&font, 1.0);
        let m = text.measure("abc");
        assert_eq!((m.width, m.height, m.ascent), (30.0, 16.0, 12.0));
        assert_eq!(text.measure("").height, 16.0);
    }

    #[test]
    fn scale_applies_to_all_metrics() {
        let font = test_font();
        let text = TextEngine::new(&font, 2.0);
        let m = text.measure("ab");
        assert_eq!((m.width, m.height), (40.0, 32.0));
        assert_eq!(text.offset_for_index("ab", 1), 20.0);
    }

    #[test]
    fn offsets_and_indices() {
        let font = test_font();
        let text = TextEngine::new(&font, 1.0);
        assert_eq!(text.offset_for_index("hello", 0), 0.0);
        assert_eq!(text.offset_for_index("hello", 3), 30.0);
        assert_eq!(text.offset_for_index("hello", 99), 50.0);
        assert_eq!(text.index_at_offset("hello", 14.0), 1);
        assert_eq!(text.index_at_offset("hello", 16.0), 2);
        assert_eq!(text.index_at_offset("hello", 500.0), 5);
    }

    #[test]
    fn create_text_emits_two_faces_per_glyph() {
        let font = test_font();
        let text = TextEngine::new(&font, 1.0);
        let data = text.create_text(vec2f(100.0, 200.0), color(255, 255, 255, 255), "hi");
        assert_eq!(data.face_count, 4);
        assert_eq!(data.vertices.len(), 8);
        assert_eq!(data.indices[6..], [4, 5, 6, 5, 7, 6]);
        assert_eq!(data.width, 20.0);
        assert_eq!(data.vertices[2].position, [101.0, 198.0]);
        assert!(data.vertices.iter().all(|v| v.texture_index == 0.0));
    }

    #[test]
    fn clipped_text_skips_shifted_glyphs_and_stops_at_width() {
        let font = test_font();
        let text = TextEngine::new(&font, 1.0);
        let data = text.create_text_clipped(vec2f(0.0, 0.0), color(255, 255, 255, 255), Some(25.0), 1, "abcdef");
        assert_eq!(data.width, 20.0);
        assert_eq!(data.face_count, 4);
        assert_eq!(data.vertices[0].uv, font.glyph('b').map_or([0.0; 2], |g| [g.uv[0], g.uv[3]]));
    }
}
