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
#[cfg(any(feature = "builder", feature = "png_source"))]
use png::{BitDepth, ColorType, Decoder, Transformations};
use std::collections::HashMap;
#[cfg(any(feature = "builder", feature = "png_source"))]
use std::io::Cursor;

use crate::*;

/// Describes image bytes that can be uploaded to a texture.
#[derive(Copy, Clone)]
pub enum ImageSource<'a> {
    /// Raw RGBA pixels laid out as width × height × 4 bytes.
    Raw {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Pixel buffer in RGBA8888 format.
        pixels: &'a [u8],
    },
    #[cfg(any(feature = "builder", feature = "png_source"))]
    /// PNG-compressed byte slice (requires the `builder` or `png_source` feature).
    /// Grayscale and RGB images are expanded to opaque RGBA (alpha = 255).
    Png {
        /// Compressed PNG payload.
        bytes: &'a [u8],
    },
}

/// Decodes image data into 32-bit pixels according to `source`.
pub fn load_image_bytes(source: ImageSource) -> UiResult<(usize, usize, Vec<Color4b>)> {
    match source {
        ImageSource::Raw { width, height, pixels } => {
            if width <= 0 || height <= 0 {
                return Err(UiError::Image("image dimensions must be positive".to_string()));
            }
            let (width, height) = (width as usize, height as usize);
            let expected = width * height * 4;
            if pixels.len() != expected {
                return Err(UiError::Image(format!("expected {} RGBA bytes, found {}", expected, pixels.len())));
            }
            let colors = pixels.chunks_exact(4).map(|c| color4b(c[0], c[1], c[2], c[3])).collect();
            Ok((width, height, colors))
        }
        #[cfg(any(feature = "builder", feature = "png_source"))]
        ImageSource::Png { bytes } => decode_png_to_colors(bytes),
    }
}

#[cfg(any(feature = "builder", feature = "png_source"))]
fn decode_png_to_colors(bytes: &[u8]) -> UiResult<(usize, usize, Vec<Color4b>)> {
    let mut cursor = Cursor::new(bytes);
    let mut decoder = Decoder::new(&mut cursor);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(|e| UiError::Image(format!("PNG decode error: {}", e)))?;
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| UiError::Image("PNG decoder did not report output size".to_string()))?;
    let mut img_data = vec![0; buf_size];
    let info = reader.next_frame(&mut img_data).map_err(|e| UiError::Image(format!("PNG decode error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(UiError::Image(format!("unsupported PNG bit depth: {:?}", info.bit_depth)));
    }

    let pixel_size = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => return Err(UiError::Image("indexed PNGs are not supported".to_string())),
    };

    let (width, height) = (info.width as usize, info.height as usize);
    let mut pixels = Vec::with_capacity(width * height);
    for line in img_data.chunks(info.line_size).take(height) {
        for px in line.chunks(pixel_size).take(width) {
            pixels.push(match px {
                [v] => color4b(*v, *v, *v, 0xFF),
                [v, a] => color4b(*v, *v, *v, *a),
                [r, g, b] => color4b(*r, *g, *b, 0xFF),
                [r, g, b, a, ..] => color4b(*r, *g, *b, *a),
                _ => Color4b::default(),
            });
        }
    }
    Ok((width, height, pixels))
}

#[derive(Clone, Debug)]
/// Glyph-table [`Font`] backed by a baked texture atlas.
pub struct AtlasFont {
    name: String,
    glyph_height: f32,
    ascent: f32,
    white_uv: [f32; 4],
    glyphs: HashMap<char, Glyph>,
}

impl AtlasFont {
    /// Creates a font without glyphs. `white_uv` locates a solid white texel in the atlas.
    pub fn new(name: &str, glyph_height: f32, ascent: f32, white_uv: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            glyph_height,
            ascent,
            white_uv,
            glyphs: HashMap::new(),
        }
    }

    /// Adds or replaces a glyph.
    pub fn insert_glyph(&mut self, ch: char, glyph: Glyph) { self.glyphs.insert(ch, glyph); }

    /// Number of glyphs in the table.
    pub fn glyph_count(&self) -> usize { self.glyphs.len() }
}

impl Font for AtlasFont {
    fn name(&self) -> &str { &self.name }

    fn glyph_height(&self) -> f32 { self.glyph_height }

    fn ascent(&self) -> f32 { self.ascent }

    fn glyph(&self, ch: char) -> Option<Glyph> { self.glyphs.get(&ch).copied() }

    fn white_pixel_uv(&self) -> [f32; 4] { self.white_uv }
}

#[cfg(feature = "builder")]
/// Font atlas rasterization (requires the `builder` feature).
pub mod builder {
    use std::fs::File;
    use std::io::Read;

    use super::*;
    use fontdue::FontSettings;

    #[derive(Clone, Debug)]
    /// Parameters for baking a font into an atlas.
    pub struct Config {
        /// Name the font will be registered under.
        pub name: String,
        /// Pixel size to rasterize at.
        pub size: f32,
        /// Atlas texture width.
        pub texture_width: usize,
        /// Atlas texture height.
        pub texture_height: usize,
        /// Characters to bake.
        pub glyphs: Vec<char>,
    }

    impl Config {
        /// Printable ASCII at `size` into a 512x512 texture.
        pub fn ascii(name: &str, size: f32) -> Self {
            Self {
                name: name.to_string(),
                size,
                texture_width: 512,
                texture_height: 512,
                glyphs: (32u8..127).map(|c| c as char).collect(),
            }
        }
    }

    /// Baked RGBA atlas plus the matching glyph table.
    pub struct FontAtlas {
        /// Texture width.
        pub width: usize,
        /// Texture height.
        pub height: usize,
        /// RGBA pixels, row 0 at the top.
        pub pixels: Vec<Color4b>,
        /// Glyph table addressing `pixels`.
        pub font: AtlasFont,
    }

    /// Row-based rectangle packer with a one pixel gutter.
    pub(crate) struct ShelfPacker {
        width: usize,
        height: usize,
        x: usize,
        y: usize,
        row_height: usize,
    }

    impl ShelfPacker {
        const PADDING: usize = 1;

        pub(crate) fn new(width: usize, height: usize) -> Self {
            Self { width, height, x: Self::PADDING, y: Self::PADDING, row_height: 0 }
        }

        pub(crate) fn pack(&mut self, w: usize, h: usize) -> Option<(usize, usize)> {
            if self.x + w + Self::PADDING > self.width {
                self.x = Self::PADDING;
                self.y += self.row_height + Self::PADDING;
                self.row_height = 0;
            }
            if self.x + w + Self::PADDING > self.width || self.y + h + Self::PADDING > self.height {
                return None;
            }
            let pos = (self.x, self.y);
            self.x += w + Self::PADDING;
            self.row_height = self.row_height.max(h);
            Some(pos)
        }
    }

    /// Rasterizes the font file at `path`.
    pub fn build_from_file(config: &Config, path: &str) -> UiResult<FontAtlas> {
        let mut data = Vec::new();
        File::open(path)
            .map_err(|e| UiError::Atlas(format!("cannot open font file '{}': {}", path, e)))?
            .read_to_end(&mut data)
            .map_err(|e| UiError::Atlas(format!("cannot read font file '{}': {}", path, e)))?;
        build_from_bytes(config, &data)
    }

    /// Rasterizes a TTF/OTF payload.
    pub fn build_from_bytes(config: &Config, bytes: &[u8]) -> UiResult<FontAtlas> {
        let font = fontdue::Font::from_bytes(bytes, FontSettings::default()).map_err(|e| UiError::Atlas(e.to_string()))?;
        let (tw, th) = (config.texture_width, config.texture_height);
        if tw < 2 || th < 2 {
            return Err(UiError::Atlas(format!("atlas of {}x{} is too small", tw, th)));
        }
        let line = font.horizontal_line_metrics(config.size);
        let ascent = line.as_ref().map(|m| m.ascent.ceil()).unwrap_or(config.size);
        let descent = line.as_ref().map(|m| m.descent.floor()).unwrap_or(0.0);
        let glyph_height = ascent - descent;

        let mut pixels = vec![Color4b::default(); tw * th];
        // the bottom-right texel is reserved for solid fills
        pixels[tw * th - 1] = color4b(0xFF, 0xFF, 0xFF, 0xFF);
        let ws = (tw as f32 - 0.5) / tw as f32;
        let wt = (th as f32 - 0.5) / th as f32;
        let mut atlas_font = AtlasFont::new(&config.name, glyph_height, ascent, [ws, wt, ws, wt]);

        let mut packer = ShelfPacker::new(tw - 1, th - 1);
        for &ch in &config.glyphs {
            let (metrics, bitmap) = font.rasterize(ch, config.size);
            let (x, y) = match packer.pack(metrics.width, metrics.height) {
                Some(pos) => pos,
                None => {
                    return Err(UiError::Atlas(format!("bitmap size of {}x{} is not enough to hold the atlas, please resize", tw, th)));
                }
            };
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    pixels[x + col + (y + row) * tw] = color4b(0xFF, 0xFF, 0xFF, bitmap[col + row * metrics.width]);
                }
            }
            let top = metrics.ymin as f32 + metrics.height as f32;
            atlas_font.insert_glyph(
                ch,
                Glyph {
                    advance: metrics.advance_width.round(),
                    offset: [metrics.xmin as f32, ascent - top],
                    size: [metrics.width as f32, metrics.height as f32],
                    uv: [
                        x as f32 / tw as f32,
                        y as f32 / th as f32,
                        (x + metrics.width) as f32 / tw as f32,
                        (y + metrics.height) as f32 / th as f32,
                    ],
                },
            );
        }
        tracing::debug!(target: "ewey_redux::atlas", "baked {} glyphs of '{}' into {}x{}", atlas_font.glyph_count(), config.name, tw, th);
        Ok(FontAtlas { width: tw, height: th, pixels, font: atlas_font })
    }

    /// Serializes the atlas texture into PNG bytes.
    pub fn png_image_bytes(atlas: &FontAtlas) -> UiResult<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, atlas.width as u32, atlas.height as u32);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().map_err(|e| UiError::Atlas(e.to_string()))?;
            let data: Vec<u8> = atlas.pixels.iter().flat_map(|c| [c.x, c.y, c.z, c.w]).collect();
            writer.write_image_data(&data).map_err(|e| UiError::Atlas(e.to_string()))?;
            writer.finish().map_err(|e| UiError::Atlas(e.to_string()))?;
        }
        Ok(bytes)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn shelf_packer_wraps_rows() {
            let mut packer = ShelfPacker::new(20, 20);
            assert_eq!(packer.pack(8, 4), Some((1, 1)));
            assert_eq!(packer.pack(8, 6), Some((10, 1)));
            assert_eq!(packer.pack(8, 4), Some((1, 8)));
            assert_eq!(packer.pack(30, 4), None);
        }

        #[test]
        fn atlas_png_decodes_back() {
            let mut font = AtlasFont::new("t", 1.0, 1.0, [0.0; 4]);
            font.insert_glyph('a', Glyph { advance: 1.0, offset: [0.0, 0.0], size: [1.0, 1.0], uv: [0.0; 4] });
            let atlas = FontAtlas {
                width: 2,
                height: 1,
                pixels: vec![color4b(1, 2, 3, 4), color4b(255, 255, 255, 255)],
                font,
            };
            let bytes = png_image_bytes(&atlas).expect("encode");
            let (w, h, pixels) = load_image_bytes(ImageSource::Png { bytes: &bytes }).expect("decode");
            assert_eq!((w, h), (2, 1));
            let rgba = |c: &Color4b| (c.x, c.y, c.z, c.w);
            assert_eq!(pixels.iter().map(rgba).collect::<Vec<_>>(), atlas.pixels.iter().map(rgba).collect::<Vec<_>>());
        }

        #[test]
        fn garbage_font_bytes_are_an_atlas_error() {
            let config = Config::ascii("Default", 16.0);
            assert!(matches!(build_from_bytes(&config, &[0, 1, 2, 3]), Err(UiError::Atlas(_))));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_images_are_validated() {
        let pixels = [10u8, 20, 30, 40, 50, 60, 70, 80];
        let (w, h, colors) = load_image_bytes(ImageSource::Raw { width: 2, height: 1, pixels: &pixels }).expect("raw");
        assert_eq!((w, h), (2, 1));
        let c = colors[1];
        assert_eq!((c.x, c.y, c.z, c.w), (50, 60, 70, 80));

        let short = load_image_bytes(ImageSource::Raw { width: 2, height: 2, pixels: &pixels });
        assert!(matches!(short, Err(UiError::Image(_))));
        let empty = load_image_bytes(ImageSource::Raw { width: 0, height: 1, pixels: &[] });
        assert!(matches!(empty, Err(UiError::Image(_))));
    }

    #[test]
    fn atlas_font_looks_up_glyphs() {
        let mut font = AtlasFont::new("Mono", 16.0, 12.0, [0.5, 0.5, 0.5, 0.5]);
        let glyph = Glyph { advance: 9.0, offset: [1.0, 2.0], size: [7.0, 10.0], uv: [0.0, 0.0, 0.1, 0.1] };
        font.insert_glyph('x', glyph);
        assert_eq!(font.name(), "Mono");
        assert_eq!(font.glyph('x'), Some(glyph));
        assert_eq!(font.glyph('y'), None);
        assert_eq!(font.white_pixel_uv(), [0.5; 4]);
    }
}
