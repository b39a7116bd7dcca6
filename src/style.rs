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
/// Edge spacing in unscaled pixels, used for margins and paddings.
pub struct Spacing {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
    /// Top edge.
    pub top: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Spacing {
    /// Creates a spacing from its four edges.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self { Self { left, right, top, bottom } }

    /// Same value on every edge.
    pub fn all(v: f32) -> Self { Self::new(v, v, v, v) }

    /// Left plus right.
    pub fn horizontal(&self) -> f32 { self.left + self.right }

    /// Top plus bottom.
    pub fn vertical(&self) -> f32 { self.top + self.bottom }
}

#[derive(Clone, Debug, PartialEq)]
/// Visual constants shared by windows and widgets.
///
/// The manager owns one `Style`; windows may carry their own override.
pub struct Style {
    /// Font registered with the manager used for every label.
    pub font_name: String,

    /// Button background while pressed.
    pub button_active_color: Color,
    /// Button background.
    pub button_color: Color,
    /// Button background under the mouse.
    pub button_hover_color: Color,
    /// Button label color.
    pub button_text_color: Color,
    /// Space around buttons.
    pub button_margin: Spacing,
    /// Space between a button's edge and its label.
    pub button_padding: Spacing,

    /// Checkbox frame color.
    pub checkbox_color: Color,
    /// Checkbox inner mark color.
    pub checkbox_checked_color: Color,
    /// Side length of the checkbox.
    pub checkbox_cursor_width: f32,
    /// Space around checkboxes.
    pub checkbox_margin: Spacing,

    /// Editbox background.
    pub editbox_bg_color: Color,
    /// Editbox background while editing.
    pub editbox_active_color: Color,
    /// Caret color.
    pub editbox_cursor_color: Color,
    /// Caret width.
    pub editbox_cursor_width: f32,
    /// Seconds the caret stays visible within a blink cycle.
    pub editbox_blink_duration: f32,
    /// Length of one caret blink cycle in seconds.
    pub editbox_blink_interval: f32,
    /// Editbox text color.
    pub editbox_text_color: Color,
    /// Space around editboxes.
    pub editbox_margin: Spacing,
    /// Space between an editbox's edge and its text.
    pub editbox_padding: Spacing,

    /// Space around images.
    pub image_margin: Spacing,

    /// Horizontal offset added per indent level.
    pub indent_spacing: f32,

    /// Scrollbar thumb color.
    pub scrollbar_cursor_color: Color,
    /// Scrollbar track color.
    pub scrollbar_bg_color: Color,
    /// Scrollbar track width.
    pub scrollbar_width: f32,
    /// Scrollbar thumb width.
    pub scrollbar_cursor_width: f32,

    /// Separator color.
    pub separator_color: Color,
    /// Separator thickness.
    pub separator_height: f32,
    /// Space around separators.
    pub separator_margin: Spacing,

    /// Slider track color.
    pub slider_bg_color: Color,
    /// Slider cursor color.
    pub slider_cursor_color: Color,
    /// Slider value text color.
    pub slider_text_color: Color,
    /// Decimal places shown by float sliders.
    pub slider_float_precision: usize,
    /// Space around sliders.
    pub slider_margin: Spacing,
    /// Space between a slider's edge and its contents.
    pub slider_padding: Spacing,
    /// Slider cursor width.
    pub slider_cursor_width: f32,

    /// Space around text labels.
    pub text_margin: Spacing,
    /// Text label color.
    pub text_color: Color,

    /// Space between the title bar's edge and the title.
    pub title_bar_padding: Spacing,
    /// Title text color.
    pub title_bar_text_color: Color,
    /// Title bar background.
    pub title_bar_bg_color: Color,

    /// Space around tree nodes.
    pub tree_node_margin: Spacing,
    /// Space between a tree node's edge and its icon.
    pub tree_node_padding: Spacing,
    /// Tree node label and icon color.
    pub tree_node_text_color: Color,

    /// Window body background.
    pub window_bg_color: Color,
    /// Space between the window frame and its content.
    pub window_padding: Spacing,
}

impl Default for Style {
    fn default() -> Self {
        let light = color(230, 230, 230, 255);
        let accent = color(204, 128, 120, 255);
        let well = color(128, 128, 128, 179);
        Self {
            font_name: "Default".to_string(),

            button_active_color: accent,
            button_color: color(171, 102, 102, 153),
            button_hover_color: color(171, 102, 102, 255),
            button_text_color: light,
            button_margin: Spacing::all(2.0),
            button_padding: Spacing::all(2.0),

            checkbox_color: well,
            checkbox_checked_color: accent,
            checkbox_cursor_width: 15.0,
            checkbox_margin: Spacing::all(2.0),

            editbox_bg_color: well,
            editbox_active_color: accent,
            editbox_cursor_color: light,
            editbox_cursor_width: 3.0,
            editbox_blink_duration: 0.25,
            editbox_blink_interval: 1.0,
            editbox_text_color: light,
            editbox_margin: Spacing::all(2.0),
            editbox_padding: Spacing::all(2.0),

            image_margin: Spacing::all(0.0),

            indent_spacing: 26.0,

            scrollbar_cursor_color: color(102, 102, 204, 77),
            scrollbar_bg_color: color(51, 64, 77, 153),
            scrollbar_width: 16.0,
            scrollbar_cursor_width: 10.0,

            separator_color: light,
            separator_height: 1.0,
            separator_margin: Spacing::all(4.0),

            slider_bg_color: well,
            slider_cursor_color: color(179, 179, 179, 179),
            slider_text_color: light,
            slider_float_precision: 3,
            slider_margin: Spacing::all(2.0),
            slider_padding: Spacing::all(2.0),
            slider_cursor_width: 15.0,

            text_margin: Spacing::all(2.0),
            text_color: light,

            title_bar_padding: Spacing::new(2.0, 2.0, 4.0, 4.0),
            title_bar_text_color: light,
            title_bar_bg_color: color(69, 69, 138, 255),

            tree_node_margin: Spacing::all(2.0),
            tree_node_padding: Spacing::all(2.0),
            tree_node_text_color: light,

            window_bg_color: color(0, 0, 0, 179),
            window_padding: Spacing::all(4.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_sums() {
        let s = Spacing::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.horizontal(), 3.0);
        assert_eq!(s.vertical(), 7.0);
        assert_eq!(Spacing::all(2.0), Spacing::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn default_blink_cycle_is_mostly_off() {
        let style = Style::default();
        assert!(style.editbox_blink_duration < style.editbox_blink_interval);
        assert_eq!(style.font_name, "Default");
    }
}
