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

impl<'a> Frame<'a> {
    /// Draws a line of text.
    pub fn text(&mut self, msg: &str) -> UiResult<()> {
        let font = self.font()?;
        let (margin, text_color) = {
            let style = self.style();
            (style.text_margin, style.text_color)
        };
        let engine = TextEngine::new(&*font, self.text_scale());
        let metrics = engine.measure(msg);

        let cursor = self.cursor_dc();
        let pos = vec2f(cursor.x + margin.left, cursor.y - margin.top);
        let render = engine.create_text(pos, text_color, msg);
        self.active_cmd().add_text(&render);

        let outer_w = self.resolve_width(metrics.width + margin.horizontal());
        self.advance(outer_w, metrics.height + margin.vertical());
        Ok(())
    }

    /// Draws a button; returns `true` on the frame a click completes on it.
    pub fn button(&mut self, id: &str, label: &str) -> UiResult<bool> {
        let font = self.font()?;
        let id = Id::from_str(id);
        let style = self.style().clone();
        let engine = TextEngine::new(&*font, self.text_scale());
        let metrics = engine.measure(label);

        let (margin, padding) = (style.button_margin, style.button_padding);
        let outer_w = self.resolve_width(metrics.width + padding.horizontal() + margin.horizontal());
        let w = outer_w - margin.horizontal();
        let h = metrics.height + padding.vertical();
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, w, h);

        let action = self.button_behavior(id, &r);
        let bg = match action {
            ButtonAction::Pressed => style.button_active_color,
            ButtonAction::Hover if self.ui.focus.is_active(id) => style.button_active_color,
            ButtonAction::Hover => style.button_hover_color,
            ButtonAction::NoAction => style.button_color,
        };

        let white = self.white_uv();
        let text_pos = vec2f(r.x + (w - metrics.width) * 0.5, r.y - padding.top);
        let render = engine.create_text(text_pos, style.button_text_color, label);
        let cmd = self.active_cmd();
        cmd.draw_rect_filled(r, bg, FONT_TEXTURE_SLOT, white);
        cmd.add_text(&render);

        self.advance(outer_w, h + margin.vertical());
        Ok(action == ButtonAction::Pressed)
    }

    /// Draws a checkbox bound to `value`; returns the new value and whether it changed.
    pub fn checkbox(&mut self, id: &str, value: bool) -> (bool, ResourceState) {
        let id = Id::from_str(id);
        let (margin, side, frame_color, check_color) = {
            let style = self.style();
            (style.checkbox_margin, style.checkbox_cursor_width, style.checkbox_color, style.checkbox_checked_color)
        };
        let outer_w = self.resolve_width(side + margin.horizontal());
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, side, side);

        let mut value = value;
        let mut state = ResourceState::NONE;
        if self.button_behavior(id, &r) == ButtonAction::Pressed {
            value = !value;
            state |= ResourceState::CHANGE;
        }

        let white = self.white_uv();
        let cmd = self.active_cmd();
        cmd.draw_rect_filled(r, frame_color, FONT_TEXTURE_SLOT, white);
        if value {
            let inset = (side * 0.2).floor();
            let inner = rectf(r.x + inset, r.y - inset, side - inset * 2.0, side - inset * 2.0);
            cmd.draw_rect_filled(inner, check_color, FONT_TEXTURE_SLOT, white);
        }

        self.advance(outer_w, side + margin.vertical());
        (value, state)
    }

    /// Draws a textured rectangle sized in screen-normalized units; returns `true` when clicked.
    ///
    /// `texture_index` is a slot returned by [`Frame::add_texture_to_stack`]; `uv` is `[s0, t0, s1, t1]`.
    pub fn image(&mut self, id: &str, width: f32, height: f32, tint: Color, texture_index: u32, uv: [f32; 4]) -> bool {
        let id = Id::from_str(id);
        let margin = self.style().image_margin;
        let size = self.ui.screen_to_display(width, height);
        let outer_w = self.resolve_width(size.x + margin.horizontal());
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, outer_w - margin.horizontal(), size.y);

        let pressed = self.button_behavior(id, &r) == ButtonAction::Pressed;
        self.active_cmd().draw_rect_filled(r, tint, texture_index, uv);

        self.advance(outer_w, size.y + margin.vertical());
        pressed
    }

    /// Draws a horizontal rule across the window on a row of its own.
    pub fn separator(&mut self) {
        let (margin, thickness, rule_color) = {
            let style = self.style();
            (style.separator_margin, style.separator_height, style.separator_color)
        };
        self.start_row();
        let outer_w = self.remaining_width();
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, (outer_w - margin.horizontal()).max(0.0), thickness);
        let white = self.white_uv();
        self.active_cmd().draw_rect_filled(r, rule_color, FONT_TEXTURE_SLOT, white);
        self.advance(outer_w, thickness + margin.vertical());
        self.start_row();
    }

    /// Leaves `width` pixels of empty space on the current row.
    pub fn space(&mut self, width: f32) { self.advance(width, 0.0); }

    /// Reserves a screen-normalized area rendered by `draw` during [`Manager::draw`].
    ///
    /// The callback runs with the viewport and scissor set to the area, so it can render
    /// arbitrary content, such as a 3D scene, inside the layout flow.
    pub fn custom<F: FnMut(&CustomDrawArgs) + 'static>(&mut self, width: f32, height: f32, margin: Spacing, draw: F) {
        let size = self.ui.screen_to_display(width, height);
        let outer_w = self.resolve_width(size.x + margin.horizontal());
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, outer_w - margin.horizontal(), size.y);
        self.push_custom(r, Box::new(draw));
        self.advance(outer_w, size.y + margin.vertical());
    }
}
