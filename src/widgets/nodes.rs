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

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Expansion state of a tree node, kept in the window's [`WidgetStore`].
pub enum NodeStateValue {
    /// Child content is visible.
    Expanded,
    /// Child content is hidden.
    Closed,
}

impl NodeStateValue {
    /// Returns `true` when the node is expanded.
    pub fn is_expanded(&self) -> bool { matches!(self, Self::Expanded) }

    fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Closed,
            Self::Closed => Self::Expanded,
        }
    }
}

impl<'a> Frame<'a> {
    /// Draws a collapsible tree node; returns `true` while it is open.
    ///
    /// The node starts closed. Children are the caller's business: indent and
    /// emit them only when this returns `true`.
    pub fn tree_node(&mut self, id: &str, label: &str) -> UiResult<bool> {
        let font = self.font()?;
        let id = Id::from_str(id);
        let (margin, padding, text_color) = {
            let style = self.style();
            (style.tree_node_margin, style.tree_node_padding, style.tree_node_text_color)
        };
        let engine = TextEngine::new(&*font, self.text_scale());
        let metrics = engine.measure(label);
        let icon = engine.glyph_height();

        let w = padding.left + icon + padding.left + metrics.width + padding.right;
        let h = metrics.height + padding.vertical();
        let outer_w = self.resolve_width(w + margin.horizontal());
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, outer_w - margin.horizontal(), h);

        let mut state = self.window.store().get::<NodeStateValue>(id).copied().unwrap_or(NodeStateValue::Closed);
        if self.button_behavior(id, &r) == ButtonAction::Pressed {
            state = state.toggled();
            self.window.store_mut().insert(id, state);
        }
        let open = state.is_expanded();

        let white = self.white_uv();
        let icon_r = rectf(r.x + padding.left, r.y - padding.top, icon, icon);
        let render = engine.create_text(vec2f(icon_r.x + icon + padding.left, r.y - padding.top), text_color, label);
        let cmd = self.active_cmd();
        cmd.draw_tree_node_icon(open, icon_r, text_color, white);
        cmd.add_text(&render);

        self.advance(outer_w, h + margin.vertical());
        Ok(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn click_toggles_and_state_persists() {
        let (mut manager, backend) = make_manager();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, move |frame| {
            let open = frame.tree_node("node", "Node")?;
            log.borrow_mut().push(open);
            if open {
                frame.indent();
                frame.start_row();
                frame.text("child")?;
                frame.unindent();
            }
            Ok(())
        });

        // node spans x 6..68, y 550..570
        backend.move_to(30.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.release(0);
        manager.construct(0.016);
        // wait out the double-click window so the second click is a plain click
        manager.construct(0.6);
        backend.press(0);
        manager.construct(0.016);
        backend.release(0);
        manager.construct(0.016);

        assert_eq!(*seen.borrow(), vec![false, false, true, true, true, false]);
        let stored = manager.window("w").and_then(|w| w.store().get::<NodeStateValue>(Id::from_str("node")).copied());
        assert_eq!(stored, Some(NodeStateValue::Closed));
    }

    #[test]
    fn icon_flips_with_state() {
        let (mut manager, _backend) = make_manager();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, |frame| {
            frame.store_mut().insert(Id::from_str("open"), NodeStateValue::Expanded);
            assert!(frame.tree_node("open", "A")?);
            assert!(!frame.tree_node("closed", "B")?);
            Ok(())
        });
        manager.construct(0.016);
        let faces = manager.window("w").map(|w| w.cmds()[0].face_count());
        // chrome (body + title bar) and per node: 1 icon triangle + 2 glyph triangles
        assert_eq!(faces, Some(2 + 2 + 3 + 3));
    }
}
