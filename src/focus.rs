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
use crate::Id;

#[derive(Copy, Clone, Debug, PartialEq)]
/// Keyboard editing state owned by the active editbox.
pub struct TextEditState {
    /// Widget that owns the keyboard.
    pub id: Id,
    /// Caret position as a character index into the edited string.
    pub cursor_offset: usize,
    /// Seconds elapsed within the current caret blink cycle.
    pub cursor_timer: f32,
    /// First visible character when the text is wider than the box.
    pub character_shift: usize,
}

impl TextEditState {
    /// Creates an editing state with the caret at `cursor_offset`.
    pub fn new(id: Id, cursor_offset: usize) -> Self { Self { id, cursor_offset, cursor_timer: 0.0, character_shift: 0 } }
}

/// The two single-owner tokens arbitrating mouse gestures and keyboard text entry.
///
/// `claim` succeeds when nobody owns the gesture or the primary button is not held, so ownership
/// lasts exactly as long as the press that started it. Moving input ownership to a different widget
/// drops the text editor.
#[derive(Clone, Debug, Default)]
pub struct FocusState {
    active_input: Option<Id>,
    text_edit: Option<TextEditState>,
}

impl FocusState {
    /// Creates an unclaimed state.
    pub fn new() -> Self { Self::default() }

    /// Current owner of the mouse gesture.
    pub fn active_input(&self) -> Option<Id> { self.active_input }

    /// Returns `true` if `id` owns the mouse gesture.
    pub fn is_active(&self, id: Id) -> bool { self.active_input == Some(id) }

    /// Returns `true` if a widget other than `id` owns the mouse gesture.
    pub fn is_claimed_by_other(&self, id: Id) -> bool { matches!(self.active_input, Some(owner) if owner != id) }

    /// Tries to take the mouse gesture for `id`.
    pub fn claim(&mut self, id: Id, primary_down: bool) -> bool {
        if self.active_input.is_some() && primary_down {
            return false;
        }
        if self.active_input != Some(id) {
            tracing::trace!(target: "ewey_redux::focus", "input focus {:?} -> {:?}", self.active_input, id);
        }
        self.active_input = Some(id);
        if matches!(self.text_edit, Some(edit) if edit.id != id) {
            tracing::trace!(target: "ewey_redux::focus", "text edit released by focus change");
            self.text_edit = None;
        }
        true
    }

    /// Releases the mouse gesture without touching the text editor.
    pub fn release(&mut self) { self.active_input = None; }

    /// Current keyboard editing state.
    pub fn text_edit(&self) -> Option<&TextEditState> { self.text_edit.as_ref() }

    /// Mutable keyboard editing state.
    pub fn text_edit_mut(&mut self) -> Option<&mut TextEditState> { self.text_edit.as_mut() }

    /// Returns `true` if `id` owns the keyboard.
    pub fn is_editing(&self, id: Id) -> bool { matches!(self.text_edit, Some(edit) if edit.id == id) }

    /// Gives the keyboard to `id`; fails while another editor is active.
    pub fn claim_text_edit(&mut self, id: Id, cursor_offset: usize) -> bool {
        if self.text_edit.is_some() {
            return false;
        }
        tracing::trace!(target: "ewey_redux::focus", "text edit claimed by {:?}", id);
        self.text_edit = Some(TextEditState::new(id, cursor_offset));
        true
    }

    /// Drops the keyboard owner.
    pub fn release_text_edit(&mut self) { self.text_edit = None; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claimant_holds_while_button_down() {
        let (a, b) = (Id::from_str("a"), Id::from_str("b"));
        let mut focus = FocusState::new();
        assert!(focus.claim(a, true));
        assert!(!focus.claim(b, true));
        assert!(focus.is_active(a));
        assert!(focus.is_claimed_by_other(b));
        assert!(!focus.is_claimed_by_other(a));
    }

    #[test]
    fn anyone_claims_once_button_is_up() {
        let (a, b) = (Id::from_str("a"), Id::from_str("b"));
        let mut focus = FocusState::new();
        focus.claim(a, true);
        assert!(focus.claim(b, false));
        assert!(focus.is_active(b));
        focus.release();
        assert_eq!(focus.active_input(), None);
    }

    #[test]
    fn text_edit_is_single_owner() {
        let (a, b) = (Id::from_str("a"), Id::from_str("b"));
        let mut focus = FocusState::new();
        focus.claim(a, true);
        assert!(focus.claim_text_edit(a, 3));
        assert!(!focus.claim_text_edit(b, 0));
        assert_eq!(focus.text_edit().map(|e| e.cursor_offset), Some(3));
    }

    #[test]
    fn focus_moving_elsewhere_drops_the_editor() {
        let (a, b) = (Id::from_str("a"), Id::from_str("b"));
        let mut focus = FocusState::new();
        focus.claim(a, true);
        focus.claim_text_edit(a, 0);

        focus.release();
        assert!(focus.is_editing(a));

        assert!(focus.claim(a, false));
        assert!(focus.is_editing(a));

        assert!(focus.claim(b, false));
        assert!(focus.text_edit().is_none());
    }
}
