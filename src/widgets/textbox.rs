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

use super::text_edit::{char_len, delete_next, delete_prev, insert_text, move_left, move_right, scroll_shift};

impl<'a> Frame<'a> {
    /// Single-line text field spanning the rest of the row.
    ///
    /// Pressing inside the box takes the keyboard; while it holds it, queued key events edit
    /// the text. Enter or Escape hands the keyboard back and sets [`ResourceState::SUBMIT`].
    /// Returns the possibly edited text; the caller stores it for the next frame.
    pub fn editbox(&mut self, id: &str, value: &str) -> UiResult<(String, ResourceState)> {
        let font = self.font()?;
        let id = Id::from_str(id);
        let style = self.style().clone();
        let engine = TextEngine::new(&*font, self.text_scale());

        let (margin, padding) = (style.editbox_margin, style.editbox_padding);
        let natural = self.remaining_width();
        let outer_w = self.resolve_width(natural);
        let w = (outer_w - margin.horizontal()).max(0.0);
        let h = engine.glyph_height() + padding.vertical();
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, w, h);
        let text_origin = vec2f(r.x + padding.left, r.y - padding.top);
        let text_w = (w - padding.horizontal()).max(0.0);

        let mut buf = value.to_string();
        let mut state = ResourceState::NONE;

        if self.drag_behavior(id, &r) {
            let mouse = self.ui.input.mouse_position();
            let shift = self.ui.focus.text_edit().filter(|edit| edit.id == id).map_or(0, |edit| edit.character_shift);
            let at = engine.index_at_offset(&buf, mouse.x - text_origin.x + engine.offset_for_index(&buf, shift));
            if let Some(edit) = self.ui.focus.text_edit_mut().filter(|edit| edit.id == id) {
                edit.cursor_offset = at;
                edit.cursor_timer = 0.0;
            } else if self.ui.focus.claim_text_edit(id, at) {
                // the press must not replay keys typed before it
                self.ui.input.clear_key_events();
            }
        }

        let mut caret = None;
        if let Some(mut edit) = self.ui.focus.text_edit().copied().filter(|edit| edit.id == id) {
            state |= ResourceState::ACTIVE;
            let mut pos = edit.cursor_offset.min(char_len(&buf));
            let mut changed = false;
            let mut keyed = false;
            let mut submit = false;
            for event in self.ui.input.key_events() {
                keyed = true;
                if event.is_paste() {
                    match self.ui.input.clipboard_get() {
                        Ok(text) => changed |= insert_text(&mut buf, &mut pos, &text),
                        Err(err) => tracing::warn!(target: "ewey_redux::widgets", "paste into editbox failed: {}", err),
                    }
                    continue;
                }
                match event.input {
                    KeyInput::Key(KeyCode::Left) => pos = move_left(pos),
                    KeyInput::Key(KeyCode::Right) => pos = move_right(&buf, pos),
                    KeyInput::Key(KeyCode::Home) => pos = 0,
                    KeyInput::Key(KeyCode::End) => pos = char_len(&buf),
                    KeyInput::Key(KeyCode::Backspace) => changed |= delete_prev(&mut buf, &mut pos),
                    KeyInput::Key(KeyCode::Delete) => changed |= delete_next(&mut buf, pos),
                    KeyInput::Key(KeyCode::Enter) | KeyInput::Key(KeyCode::Escape) => {
                        submit = true;
                        break;
                    }
                    KeyInput::Rune(ch) if !event.mods.is_ctrl() => {
                        let mut utf8 = [0u8; 4];
                        changed |= insert_text(&mut buf, &mut pos, ch.encode_utf8(&mut utf8));
                    }
                    _ => {}
                }
            }

            edit.cursor_offset = pos;
            edit.cursor_timer = if keyed {
                0.0
            } else if style.editbox_blink_interval > 0.0 {
                (edit.cursor_timer + self.ui.frame_delta) % style.editbox_blink_interval
            } else {
                0.0
            };
            edit.character_shift = scroll_shift(edit.character_shift, pos, text_w, |i| engine.offset_for_index(&buf, i));
            if changed {
                state |= ResourceState::CHANGE;
            }

            if submit {
                state |= ResourceState::SUBMIT;
                self.ui.focus.release_text_edit();
                self.ui.focus.release();
            } else if let Some(slot) = self.ui.focus.text_edit_mut() {
                *slot = edit;
            }
            caret = Some(edit);
        }

        let editing = caret.is_some() && !state.is_submitted();
        let shift = caret.filter(|_| editing).map_or(0, |edit| edit.character_shift);
        let render = engine.create_text_clipped(text_origin, style.editbox_text_color, Some(text_w), shift, &buf);
        let white = self.white_uv();
        let cmd = self.active_cmd();
        cmd.draw_rect_filled(r, if editing { style.editbox_active_color } else { style.editbox_bg_color }, FONT_TEXTURE_SLOT, white);
        cmd.add_text(&render);
        if let Some(edit) = caret.filter(|edit| editing && edit.cursor_timer < style.editbox_blink_duration) {
            let x = text_origin.x + engine.offset_for_index(&buf, edit.cursor_offset) - engine.offset_for_index(&buf, shift);
            let bar = rectf(x, text_origin.y, style.editbox_cursor_width, engine.glyph_height());
            cmd.draw_rect_filled(bar, style.editbox_cursor_color, FONT_TEXTURE_SLOT, white);
        }

        self.advance(outer_w, h + margin.vertical());
        Ok((buf, state))
    }
}
