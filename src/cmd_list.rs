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

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
/// Vertex layout shared by every batch: position, UV, texture slot and RGBA color (9 floats).
pub struct Vertex {
    /// Device-space position.
    pub position: [f32; 2],
    /// Texture coordinates.
    pub uv: [f32; 2],
    /// Index into the bound texture slots, 0 being the font atlas.
    pub texture_index: f32,
    /// Normalized RGBA color.
    pub color: [f32; 4],
}

impl Vertex {
    /// Number of `f32` values making up one vertex.
    pub const FLOATS: usize = 9;

    /// Creates a vertex.
    pub fn new(x: f32, y: f32, u: f32, v: f32, texture_index: u32, color: Color) -> Self {
        Self { position: [x, y], uv: [u, v], texture_index: texture_index as f32, color: color.to_array() }
    }
}

/// Arguments handed to custom draw callbacks.
#[derive(Copy, Clone)]
pub struct CustomDrawArgs {
    /// Widget bounds in device pixels, bottom-left anchored; viewport and scissor are both set to it.
    pub viewport: Recti,
}

/// Host callback rendering arbitrary content inside a widget's bounds.
pub type CustomDrawFn = Box<dyn FnMut(&CustomDrawArgs)>;

/// Geometry for one scissor region of a window, rebuilt every frame.
pub struct CommandList {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    face_count: u32,
    index_tracker: u32,
    clip_rect: Rect<f32>,
    on_custom_draw: Option<CustomDrawFn>,
}

impl CommandList {
    const DEFAULT_CAPACITY: usize = 1024;

    /// Creates an empty list clipped to `clip_rect` (top-left anchored).
    pub fn new(clip_rect: Rect<f32>) -> Self {
        Self {
            vertices: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            indices: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            face_count: 0,
            index_tracker: 0,
            clip_rect,
            on_custom_draw: None,
        }
    }

    /// Creates a list that renders through `draw` instead of geometry.
    pub fn new_custom(clip_rect: Rect<f32>, draw: CustomDrawFn) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            face_count: 0,
            index_tracker: 0,
            clip_rect,
            on_custom_draw: Some(draw),
        }
    }

    /// Returns `true` for custom draw regions.
    pub fn is_custom(&self) -> bool { self.on_custom_draw.is_some() }

    /// Accumulated vertices.
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Accumulated triangle indices, relative to this list's vertices.
    pub fn indices(&self) -> &[u32] { &self.indices }

    /// Number of triangles.
    pub fn face_count(&self) -> u32 { self.face_count }

    /// Clip rectangle, top-left anchored.
    pub fn clip_rect(&self) -> Rect<f32> { self.clip_rect }

    /// Clip rectangle converted to a bottom-left anchored scissor box.
    pub fn scissor(&self) -> Recti { rect_to_scissor(&self.clip_rect) }

    fn rebase(&mut self, vertices: &[Vertex], indices: &[u32]) -> Vec<u32> {
        let base = self.index_tracker;
        self.vertices.extend_from_slice(vertices);
        self.index_tracker += vertices.len() as u32;
        indices.iter().map(|i| i + base).collect()
    }

    /// Appends faces; `indices` refer to `vertices` starting at zero.
    pub fn add_faces(&mut self, vertices: &[Vertex], indices: &[u32], face_count: u32) {
        if face_count < 1 || vertices.is_empty() || indices.is_empty() {
            return;
        }
        let rebased = self.rebase(vertices, indices);
        self.indices.extend(rebased);
        self.face_count += face_count;
    }

    /// Like [`CommandList::add_faces`] but the faces are drawn before everything already in the list.
    pub fn prefix_faces(&mut self, vertices: &[Vertex], indices: &[u32], face_count: u32) {
        if face_count < 1 || vertices.is_empty() || indices.is_empty() {
            return;
        }
        let mut rebased = self.rebase(vertices, indices);
        rebased.extend_from_slice(&self.indices);
        self.indices = rebased;
        self.face_count += face_count;
    }

    /// Appends a rendered string.
    pub fn add_text(&mut self, text: &TextRenderData) { self.add_faces(&text.vertices, &text.indices, text.face_count) }

    /// Prepends a rendered string.
    pub fn prefix_text(&mut self, text: &TextRenderData) { self.prefix_faces(&text.vertices, &text.indices, text.face_count) }

    /// Appends a filled rectangle.
    pub fn draw_rect_filled(&mut self, r: Rect<f32>, color: Color, texture_index: u32, uv: [f32; 4]) {
        let (vertices, indices) = rect_faces(r, color, texture_index, uv);
        self.add_faces(&vertices, &indices, 2);
    }

    /// Prepends a filled rectangle.
    pub fn prefix_rect_filled(&mut self, r: Rect<f32>, color: Color, texture_index: u32, uv: [f32; 4]) {
        let (vertices, indices) = rect_faces(r, color, texture_index, uv);
        self.prefix_faces(&vertices, &indices, 2);
    }

    /// Appends the tree node triangle: pointing down when open, right when closed.
    pub fn draw_tree_node_icon(&mut self, is_open: bool, r: Rect<f32>, color: Color, uv: [f32; 4]) {
        let w2 = r.width * 0.5;
        let h2 = r.height * 0.5;
        let cx = r.x + w2;
        let cy = r.y - h2;
        let corners = if is_open {
            [(cx - w2, cy + h2), (cx, cy - h2), (cx + w2, cy + h2)]
        } else {
            [(cx - w2, cy + h2), (cx - w2, cy - h2), (cx + w2, cy)]
        };
        let vertices = corners.map(|(x, y)| Vertex::new(x, y, uv[0], uv[1], 0, color));
        self.add_faces(&vertices, &[0, 1, 2], 1);
    }

    /// Runs the custom callback, if any.
    pub fn invoke_custom(&mut self, args: &CustomDrawArgs) {
        if let Some(draw) = self.on_custom_draw.as_mut() {
            draw(args);
        }
    }
}

/// Two triangles covering `r`. `uv` is `[s0, t0, s1, t1]` with `t0` on the top edge.
pub fn rect_faces(r: Rect<f32>, color: Color, texture_index: u32, uv: [f32; 4]) -> ([Vertex; 4], [u32; 6]) {
    let (left, top, right, bottom) = (r.x, r.y, r.x + r.width, r.y - r.height);
    let vertices = [
        Vertex::new(left, bottom, uv[0], uv[3], texture_index, color),
        Vertex::new(right, bottom, uv[2], uv[3], texture_index, color),
        Vertex::new(left, top, uv[0], uv[1], texture_index, color),
        Vertex::new(right, top, uv[2], uv[1], texture_index, color),
    ];
    (vertices, [0, 1, 2, 1, 3, 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn make_list() -> CommandList { CommandList::new(rectf(10.0, 300.0, 200.0, 100.0)) }

    #[test]
    fn add_faces_rebases_indices() {
        let mut list = make_list();
        list.draw_rect_filled(rectf(0.0, 10.0, 10.0, 10.0), color(255, 0, 0, 255), 0, WHITE);
        list.draw_rect_filled(rectf(20.0, 10.0, 10.0, 10.0), color(0, 255, 0, 255), 0, WHITE);
        assert_eq!(list.face_count(), 4);
        assert_eq!(list.vertices().len(), 8);
        assert_eq!(list.indices(), &[0, 1, 2, 1, 3, 2, 4, 5, 6, 5, 7, 6]);
    }

    #[test]
    fn prefix_faces_draw_first() {
        let mut list = make_list();
        list.draw_rect_filled(rectf(0.0, 10.0, 10.0, 10.0), color(255, 0, 0, 255), 0, WHITE);
        list.prefix_rect_filled(rectf(0.0, 10.0, 10.0, 10.0), color(0, 0, 255, 255), 0, WHITE);
        assert_eq!(list.indices()[..6], [4, 5, 6, 5, 7, 6]);
        assert_eq!(list.indices()[6..], [0, 1, 2, 1, 3, 2]);
        assert_eq!(list.vertices()[4].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_batches_are_ignored() {
        let mut list = make_list();
        list.add_faces(&[], &[], 0);
        list.add_faces(&[Vertex::default()], &[0, 0, 0], 0);
        assert_eq!(list.face_count(), 0);
        assert!(list.vertices().is_empty());
    }

    #[test]
    fn rect_corners_follow_bottom_left_space() {
        let (v, _) = rect_faces(rectf(5.0, 50.0, 20.0, 10.0), color(0, 0, 0, 255), 2, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(v[0].position, [5.0, 40.0]);
        assert_eq!(v[3].position, [25.0, 50.0]);
        assert_eq!(v[3].uv, [1.0, 0.0]);
        assert_eq!(v[0].texture_index, 2.0);
    }

    #[test]
    fn tree_icon_is_one_triangle() {
        let mut list = make_list();
        list.draw_tree_node_icon(false, rectf(0.0, 10.0, 10.0, 10.0), color(255, 255, 255, 255), WHITE);
        assert_eq!(list.face_count(), 1);
        assert_eq!(list.vertices()[2].position, [10.0, 5.0]);
        list.draw_tree_node_icon(true, rectf(0.0, 10.0, 10.0, 10.0), color(255, 255, 255, 255), WHITE);
        assert_eq!(list.vertices()[4].position, [5.0, 0.0]);
        assert_eq!(list.indices()[3..], [3, 4, 5]);
    }

    #[test]
    fn custom_lists_invoke_their_callback() {
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        let mut list = CommandList::new_custom(rectf(10.0, 300.0, 200.0, 100.0), Box::new(move |args: &CustomDrawArgs| {
            assert_eq!((args.viewport.x, args.viewport.y), (10, 200));
            seen.set(seen.get() + 1);
        }));
        assert!(list.is_custom());
        let args = CustomDrawArgs { viewport: list.scissor() };
        list.invoke_custom(&args);
        assert_eq!(hits.get(), 1);
    }
}
