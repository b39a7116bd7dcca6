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
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::*;

struct ScriptedState {
    cursor: Vec2f,
    buttons: HashSet<usize>,
    clipboard: Option<String>,
}

/// Input backend driven by the test between frames. Clones share state.
#[derive(Clone)]
pub(crate) struct ScriptedBackend {
    state: Rc<RefCell<ScriptedState>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        let state = ScriptedState { cursor: vec2f(0.0, 0.0), buttons: HashSet::new(), clipboard: None };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// Moves the cursor; host coordinates, origin top-left.
    pub(crate) fn move_to(&self, x: f32, y: f32) { self.state.borrow_mut().cursor = vec2f(x, y); }

    pub(crate) fn press(&self, button: usize) { self.state.borrow_mut().buttons.insert(button); }

    pub(crate) fn release(&self, button: usize) { self.state.borrow_mut().buttons.remove(&button); }

    pub(crate) fn set_clipboard(&self, text: &str) { self.state.borrow_mut().clipboard = Some(text.to_string()); }
}

impl InputBackend for ScriptedBackend {
    fn cursor_position(&self) -> Vec2f { self.state.borrow().cursor }

    fn mouse_button_down(&self, button: usize) -> bool { self.state.borrow().buttons.contains(&button) }

    fn clipboard_text(&mut self) -> UiResult<String> { self.state.borrow().clipboard.clone().ok_or_else(|| UiError::Clipboard("empty".to_string())) }

    fn set_clipboard_text(&mut self, text: &str) { self.set_clipboard(text); }
}

/// Fixed-advance font: every printable ASCII glyph advances 10 px in a 16 px cell.
pub(crate) fn test_font() -> AtlasFont {
    let mut font = AtlasFont::new("Default", 16.0, 12.0, [0.5; 4]);
    for code in 32u8..127 {
        let col = (code % 16) as f32;
        let row = (code / 16) as f32;
        font.insert_glyph(
            code as char,
            Glyph { advance: 10.0, offset: [1.0, 2.0], size: [8.0, 12.0], uv: [col / 16.0, row / 8.0, (col + 1.0) / 16.0, (row + 1.0) / 8.0] },
        );
    }
    font
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Begin(i32, i32),
    Upload { vertices: usize, indices: usize, max_index: u32 },
    BindState { font_texture: Option<TextureId>, textures: usize },
    Viewport((i32, i32, i32, i32)),
    Draw { scissor: (i32, i32, i32, i32), first: u32, count: u32 },
    End,
}

impl Call {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Call::Begin(..) => "begin",
            Call::Upload { .. } => "upload",
            Call::BindState { .. } => "bind",
            Call::Viewport(_) => "viewport",
            Call::Draw { .. } => "draw",
            Call::End => "end",
        }
    }
}

fn rect_tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

/// Renderer that only records what it was asked to do.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Vec<Call>,
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, width: i32, height: i32) {
        self.calls.clear();
        self.calls.push(Call::Begin(width, height));
    }

    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]) {
        let max_index = indices.iter().copied().max().unwrap_or(0);
        self.calls.push(Call::Upload { vertices: vertices.len(), indices: indices.len(), max_index });
    }

    fn bind_state(&mut self, _viewport: Recti, font_texture: Option<TextureId>, textures: &[TextureId]) {
        self.calls.push(Call::BindState { font_texture, textures: textures.len() });
    }

    fn set_viewport(&mut self, viewport: Recti) { self.calls.push(Call::Viewport(rect_tuple(viewport))); }

    fn draw_indexed(&mut self, scissor: Recti, first_index: u32, index_count: u32) {
        self.calls.push(Call::Draw { scissor: rect_tuple(scissor), first: first_index, count: index_count });
    }

    fn end(&mut self) { self.calls.push(Call::End); }
}

/// UI state for an 800x600 viewport designed at 600 px, with [`test_font`] registered.
pub(crate) fn make_state() -> (UiState, ScriptedBackend) {
    let backend = ScriptedBackend::new();
    let mut state = UiState::new(Input::new(Box::new(backend.clone()), KeyTable::glfw()), 800.0, 600.0, 600.0);
    state.fonts.insert("Default".to_string(), Rc::new(test_font()));
    (state, backend)
}

/// Manager with the same setup as [`make_state`].
pub(crate) fn make_manager() -> (Manager<RecordingRenderer>, ScriptedBackend) {
    let backend = ScriptedBackend::new();
    let mut manager = Manager::new(
        RendererHandle::new(RecordingRenderer::default()),
        Input::new(Box::new(backend.clone()), KeyTable::glfw()),
        800.0,
        600.0,
        600.0,
    );
    manager.add_font(test_font());
    (manager, backend)
}
