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
mod core_widgets;
mod nodes;
mod slider;
mod text_edit;
mod textbox;

pub use nodes::*;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Outcome of the shared button hit test.
pub enum ButtonAction {
    /// The mouse is elsewhere or the gesture belongs to another widget.
    NoAction,
    /// A full click completed inside the widget this frame.
    Pressed,
    /// The mouse is over the widget, or holding a press that started on it.
    Hover,
}

impl<'a> Frame<'a> {
    /// Hit test shared by clickable widgets.
    ///
    /// A press only counts when the click completes on the widget it started on, and the
    /// first widget to report `Pressed` consumes the click for the rest of the frame.
    pub fn button_behavior(&mut self, id: Id, r: &Rect<f32>) -> ButtonAction {
        let input = &mut self.ui.input;
        let mouse = input.mouse_position();
        if !rect_contains(r, mouse) {
            return ButtonAction::NoAction;
        }
        match input.mouse_button_action(PRIMARY_BUTTON) {
            MouseAction::Up | MouseAction::DoubleClick => ButtonAction::Hover,
            MouseAction::Click => {
                let down = input.mouse_down_position(PRIMARY_BUTTON);
                if rect_contains(r, down) && !self.ui.focus.is_claimed_by_other(id) {
                    self.ui.input.clear_mouse_button_action(PRIMARY_BUTTON);
                    self.ui.focus.claim(id, false);
                    ButtonAction::Pressed
                } else {
                    ButtonAction::NoAction
                }
            }
            MouseAction::Down => {
                let down = input.mouse_down_position(PRIMARY_BUTTON);
                if rect_contains(r, down) {
                    self.ui.focus.claim(id, true);
                    ButtonAction::Hover
                } else {
                    ButtonAction::NoAction
                }
            }
        }
    }

    /// Returns `true` while `id` holds a press that started inside `r`, claiming the gesture on its first frame.
    pub(crate) fn drag_behavior(&mut self, id: Id, r: &Rect<f32>) -> bool {
        if self.ui.input.mouse_button_action(PRIMARY_BUTTON) != MouseAction::Down {
            return false;
        }
        if self.ui.focus.is_active(id) {
            return true;
        }
        let down = self.ui.input.mouse_down_position(PRIMARY_BUTTON);
        rect_contains(r, down) && self.ui.focus.claim(id, true)
    }
}
