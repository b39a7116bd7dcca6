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
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use crate::*;

/// Host callback describing a window's widgets for the current frame.
pub type BuildCallback = Box<dyn FnMut(&mut Frame<'_>) -> UiResult<()>>;

/// Per-window storage for widget state that must outlive a frame, keyed by widget ID.
///
/// Entries live as long as the window and are addressed by the caller-chosen widget label,
/// never by memory location. Reading a key with a different type than it was written with
/// yields `None`.
#[derive(Default)]
pub struct WidgetStore {
    values: HashMap<Id, Box<dyn Any>>,
}

impl WidgetStore {
    /// Reads an entry.
    pub fn get<T: 'static>(&self, id: Id) -> Option<&T> { self.values.get(&id).and_then(|v| v.downcast_ref::<T>()) }

    /// Mutably reads an entry.
    pub fn get_mut<T: 'static>(&mut self, id: Id) -> Option<&mut T> { self.values.get_mut(&id).and_then(|v| v.downcast_mut::<T>()) }

    /// Writes an entry, replacing any previous value.
    pub fn insert<T: 'static>(&mut self, id: Id, value: T) { self.values.insert(id, Box::new(value)); }

    /// Drops an entry.
    pub fn remove(&mut self, id: Id) { self.values.remove(&id); }

    /// Number of entries.
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

#[derive(Copy, Clone)]
struct LayoutCursor {
    // x: advance along the current row; y: top of the current row relative to the frame top
    cursor: Vec2f,
    next_row: f32,
    indent: u32,
    width_min: Option<f32>,
    width_max: Option<f32>,
}

impl LayoutCursor {
    fn at(y: f32) -> Self { Self { cursor: vec2f(0.0, y), next_row: 0.0, indent: 0, width_min: None, width_max: None } }
}

/// A movable, optionally scrollable panel of widgets.
///
/// Placement and size are screen-normalized: `location` is the top-left corner of the frame,
/// with `y` measured from the bottom of the screen.
pub struct Window {
    id: String,
    hash: Id,
    /// Title bar text.
    pub title: String,
    /// Top-left corner of the frame in screen-normalized units.
    pub location: Vec2f,
    /// Content width in screen-normalized units.
    pub width: f32,
    /// Content height in screen-normalized units, excluding the title bar.
    pub height: f32,
    /// Scroll position in pixels.
    pub scroll_offset: f32,
    /// Left button drags move the window.
    pub is_movable: bool,
    /// The scroll wheel moves the content.
    pub is_scrollable: bool,
    /// Draws the title bar above the content.
    pub show_title_bar: bool,
    /// Draws a scrollbar to the right of the content.
    pub show_scroll_bar: bool,
    /// Resizes the window to its content every frame.
    pub auto_adjust_height: bool,
    style: Option<Style>,
    on_build: Option<BuildCallback>,
    layout: LayoutCursor,
    cmds: Vec<CommandList>,
    store: WidgetStore,
}

impl Window {
    pub(crate) fn new(id: &str, x: f32, y: f32, width: f32, height: f32, on_build: Option<BuildCallback>) -> Self {
        Self {
            id: id.to_string(),
            hash: Id::from_str(id),
            title: String::new(),
            location: vec2f(x, y),
            width,
            height,
            scroll_offset: 0.0,
            is_movable: true,
            is_scrollable: false,
            show_title_bar: true,
            show_scroll_bar: false,
            auto_adjust_height: false,
            style: None,
            on_build,
            layout: LayoutCursor::at(0.0),
            cmds: Vec::new(),
            store: WidgetStore::default(),
        }
    }

    /// Caller-supplied identifier.
    pub fn id(&self) -> &str { &self.id }

    /// Hashed identifier, used as the window's focus token.
    pub fn id_hash(&self) -> Id { self.hash }

    /// Window-specific style, if any.
    pub fn style(&self) -> Option<&Style> { self.style.as_ref() }

    /// Overrides the manager style for this window; `None` restores it.
    pub fn set_style(&mut self, style: Option<Style>) { self.style = style; }

    /// Replaces the build callback.
    pub fn set_on_build<F: FnMut(&mut Frame<'_>) -> UiResult<()> + 'static>(&mut self, on_build: F) { self.on_build = Some(Box::new(on_build)); }

    /// Command lists produced by the last construct pass.
    pub fn cmds(&self) -> &[CommandList] { &self.cmds }

    pub(crate) fn cmds_mut(&mut self) -> &mut [CommandList] { &mut self.cmds }

    /// Persistent widget state.
    pub fn store(&self) -> &WidgetStore { &self.store }

    /// Mutable persistent widget state.
    pub fn store_mut(&mut self) -> &mut WidgetStore { &mut self.store }

    /// Current indent level.
    pub fn indent_level(&self) -> u32 { self.layout.indent }

    pub(crate) fn effective_style<'s>(&'s self, ui: &'s UiState) -> &'s Style { self.style.as_ref().unwrap_or(&ui.style) }

    fn title_string(&self) -> &str { if self.title.is_empty() { " " } else { &self.title } }

    /// Content rectangle in device pixels: the frame's corner with the content size.
    pub(crate) fn display_rect(&self, ui: &UiState) -> Rect<f32> {
        let pos = ui.screen_to_display(self.location.x, self.location.y);
        let size = ui.screen_to_display(self.width, self.height);
        rectf(pos.x, pos.y, size.x, size.y)
    }

    pub(crate) fn title_bar_height(&self, ui: &UiState) -> f32 {
        if !self.show_title_bar {
            return 0.0;
        }
        let style = self.effective_style(ui);
        match ui.font(&style.font_name) {
            Ok(font) => TextEngine::new(&*font, ui.text_scale()).measure(self.title_string()).height + style.title_bar_padding.vertical(),
            Err(_) => 0.0,
        }
    }

    /// Whole window in device pixels including the title bar and scrollbar.
    pub(crate) fn frame_rect(&self, ui: &UiState) -> Rect<f32> {
        let mut r = self.display_rect(ui);
        if self.show_scroll_bar {
            r.width += self.effective_style(ui).scrollbar_width;
        }
        r.height += self.title_bar_height(ui);
        r
    }

    pub(crate) fn contains_position(&self, ui: &UiState, p: Vec2f) -> bool { rect_contains(&self.frame_rect(ui), p) }

    pub(crate) fn construct(&mut self, ui: &mut UiState) {
        self.cmds.clear();

        let mouse = ui.input.mouse_position();
        let delta = ui.input.mouse_position_delta();
        let lmb_down = ui.input.mouse_button_action(PRIMARY_BUTTON) == MouseAction::Down;

        if self.is_scrollable && self.contains_position(ui, mouse) {
            self.scroll_offset = (self.scroll_offset - ui.input.scroll_wheel_delta(true)).max(0.0);
        }

        let title_h = self.title_bar_height(ui);
        let padding = self.effective_style(ui).window_padding;
        self.layout = LayoutCursor::at(self.scroll_offset - title_h - padding.top);

        if let Some(mut build) = self.on_build.take() {
            let result = build(&mut Frame { window: &mut *self, ui: &mut *ui });
            if self.on_build.is_none() {
                self.on_build = Some(build);
            }
            if let Err(err) = result {
                tracing::warn!(target: "ewey_redux::window", "build callback of window '{}' failed: {}", self.id, err);
            }
        }

        let content_h = (self.scroll_offset - title_h - self.layout.cursor.y) + self.layout.next_row + padding.bottom;
        if self.auto_adjust_height && ui.height > 0.0 {
            self.height = content_h / ui.height;
        }
        if self.is_scrollable {
            let viewport_h = self.display_rect(ui).height;
            let max_scroll = (content_h - viewport_h).max(0.0);
            self.scroll_offset = self.scroll_offset.clamp(0.0, max_scroll);
        }

        self.build_frame(ui, title_h, content_h);

        if self.is_movable && lmb_down {
            let down = ui.input.mouse_down_position(PRIMARY_BUTTON);
            let owns = ui.focus.is_active(self.hash) || (self.contains_position(ui, down) && ui.focus.claim(self.hash, true));
            if owns && ui.width > 0.0 && ui.height > 0.0 {
                let moved = ui.display_to_screen(delta.x, delta.y);
                self.location.x += moved.x;
                self.location.y += moved.y;
            }
        }
    }

    fn build_frame(&mut self, ui: &UiState, title_h: f32, content_h: f32) {
        let frame = self.frame_rect(ui);
        match self.cmds.first() {
            Some(first) if !first.is_custom() => {}
            _ => self.cmds.insert(0, CommandList::new(frame)),
        }

        let style = self.effective_style(ui).clone();
        let white = ui.white_uv(&style);
        let first = &mut self.cmds[0];

        // prefixed in reverse draw order: body, title bar, title text
        if title_h > 0.0 && !self.title.is_empty() {
            if let Ok(font) = ui.font(&style.font_name) {
                let text = TextEngine::new(&*font, ui.text_scale());
                let pos = vec2f(frame.x + style.title_bar_padding.left, frame.y - style.title_bar_padding.top);
                first.prefix_text(&text.create_text(pos, style.title_bar_text_color, &self.title));
            }
        }
        if title_h > 0.0 {
            first.prefix_rect_filled(rectf(frame.x, frame.y, frame.width, title_h), style.title_bar_bg_color, FONT_TEXTURE_SLOT, white);
        }
        first.prefix_rect_filled(
            rectf(frame.x, frame.y - title_h, frame.width, frame.height - title_h),
            style.window_bg_color,
            FONT_TEXTURE_SLOT,
            white,
        );

        if self.show_scroll_bar {
            let sb_w = style.scrollbar_width;
            let sb_x = frame.x + frame.width - sb_w;
            let sb_y = frame.y - title_h;
            let usable_h = frame.height - title_h;
            first.draw_rect_filled(rectf(sb_x, sb_y, sb_w, usable_h), style.scrollbar_bg_color, FONT_TEXTURE_SLOT, white);

            let cursor_w = style.scrollbar_cursor_width.min(sb_w);
            let inset = (sb_w - cursor_w) * 0.5;
            let ratio = if content_h > 0.0 { (usable_h / content_h).min(1.0) } else { 1.0 };
            let cursor_h = usable_h * ratio;
            let offset = self.scroll_offset * ratio;
            first.draw_rect_filled(rectf(sb_x + inset, sb_y - offset, cursor_w, cursor_h), style.scrollbar_cursor_color, FONT_TEXTURE_SLOT, white);
        }
    }
}

/// Build-time view of one window, handed to its [`BuildCallback`].
///
/// Widget calls lay out left to right on the current row; [`Frame::start_row`] moves the cursor
/// below the tallest widget of the row.
pub struct Frame<'a> {
    pub(crate) window: &'a mut Window,
    pub(crate) ui: &'a mut UiState,
}

impl<'a> Frame<'a> {
    /// The window being built.
    pub fn window(&self) -> &Window { &*self.window }

    /// Mutable access to the window's public attributes.
    pub fn window_mut(&mut self) -> &mut Window { &mut *self.window }

    /// The input adapter.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.ui.input }

    /// Focus tokens.
    pub fn focus(&self) -> &FocusState { &self.ui.focus }

    /// Style in effect for this window.
    pub fn style(&self) -> &Style { self.window.effective_style(&*self.ui) }

    /// Persistent widget state of this window.
    pub fn store_mut(&mut self) -> &mut WidgetStore { &mut self.window.store }

    /// Seconds elapsed since the previous frame.
    pub fn frame_delta(&self) -> f32 { self.ui.frame_delta }

    /// Pushes a texture for this frame; returns its slot for image widgets (1-based).
    pub fn add_texture_to_stack(&mut self, texture: TextureId) -> u32 { self.ui.add_texture_to_stack(texture) }

    /// Layout cursor: advance along the row and row top relative to the frame top.
    pub fn cursor(&self) -> Vec2f { self.window.layout.cursor }

    /// Starts a new row below the tallest widget of the current one.
    pub fn start_row(&mut self) {
        let layout = &mut self.window.layout;
        layout.cursor.x = 0.0;
        layout.cursor.y -= layout.next_row;
        layout.next_row = 0.0;
    }

    /// Adds an indent level to subsequent rows.
    pub fn indent(&mut self) { self.window.layout.indent += 1; }

    /// Removes an indent level.
    pub fn unindent(&mut self) { self.window.layout.indent = self.window.layout.indent.saturating_sub(1); }

    /// Width left on the current row, in pixels.
    pub fn remaining_width(&self) -> f32 {
        let style = self.style();
        let display = self.window.display_rect(self.ui);
        let used = style.window_padding.horizontal() + self.window.layout.indent as f32 * style.indent_spacing + self.window.layout.cursor.x;
        (display.width - used).max(0.0)
    }

    /// Makes the next widget at least `fraction` of the window width wide.
    pub fn request_item_width_min(&mut self, fraction: f32) {
        let px = (fraction * self.window.display_rect(self.ui).width).min(self.remaining_width());
        self.window.layout.width_min = Some(px);
    }

    /// Makes the next widget at most `fraction` of the window width wide.
    pub fn request_item_width_max(&mut self, fraction: f32) {
        let px = (fraction * self.window.display_rect(self.ui).width).min(self.remaining_width());
        self.window.layout.width_max = Some(px);
    }

    /// Insertion point of the next widget in device pixels.
    pub fn cursor_dc(&self) -> Vec2f {
        let style = self.style();
        let frame = self.window.display_rect(self.ui);
        let layout = &self.window.layout;
        vec2f(
            frame.x + style.window_padding.left + layout.indent as f32 * style.indent_spacing + layout.cursor.x,
            frame.y + layout.cursor.y,
        )
    }

    /// Applies and clears the pending width requests to a widget's natural outer width.
    pub(crate) fn resolve_width(&mut self, natural: f32) -> f32 {
        let layout = &mut self.window.layout;
        let mut w = natural;
        if let Some(min) = layout.width_min.take() {
            w = w.max(min);
        }
        if let Some(max) = layout.width_max.take() {
            w = w.min(max);
        }
        w
    }

    /// Moves the cursor past a widget of the given outer size.
    pub(crate) fn advance(&mut self, outer_w: f32, outer_h: f32) {
        let layout = &mut self.window.layout;
        layout.cursor.x += outer_w;
        layout.next_row = layout.next_row.max(outer_h);
    }

    pub(crate) fn font(&self) -> UiResult<Rc<dyn Font>> { self.ui.font(&self.style().font_name) }

    pub(crate) fn text_scale(&self) -> f32 { self.ui.text_scale() }

    pub(crate) fn white_uv(&self) -> [f32; 4] { self.ui.white_uv(self.style()) }

    /// Current regular command list, opening one after a custom region.
    pub(crate) fn active_cmd(&mut self) -> &mut CommandList {
        if self.window.cmds.last().map_or(true, |c| c.is_custom()) {
            let clip = self.window.frame_rect(self.ui);
            self.window.cmds.push(CommandList::new(clip));
        }
        let last = self.window.cmds.len() - 1;
        &mut self.window.cmds[last]
    }

    pub(crate) fn push_custom(&mut self, clip: Rect<f32>, draw: CustomDrawFn) { self.window.cmds.push(CommandList::new_custom(clip, draw)); }

    /// Fills a screen-normalized rectangle; `texture_index` 0 draws a solid color.
    pub fn draw_rect_filled(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, texture_index: u32) {
        let pos = self.ui.screen_to_display(x, y);
        let size = self.ui.screen_to_display(w, h);
        let uv = if texture_index == FONT_TEXTURE_SLOT { self.white_uv() } else { [0.0, 0.0, 1.0, 1.0] };
        self.active_cmd().draw_rect_filled(rectf(pos.x, pos.y, size.x, size.y), color, texture_index, uv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::cell::Cell;

    #[test]
    fn widget_store_is_typed() {
        let mut store = WidgetStore::default();
        let id = Id::from_str("node");
        store.insert(id, true);
        assert_eq!(store.get::<bool>(id), Some(&true));
        assert_eq!(store.get::<f32>(id), None);
        if let Some(v) = store.get_mut::<bool>(id) {
            *v = false;
        }
        assert_eq!(store.get::<bool>(id), Some(&false));
        store.remove(id);
        assert!(store.is_empty());
    }

    #[test]
    fn rows_align_on_tallest_widget() {
        let (mut ui, _backend) = make_state();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        let mut frame = Frame { window: &mut window, ui: &mut ui };
        frame.advance(30.0, 10.0);
        frame.advance(20.0, 25.0);
        assert_eq!(frame.cursor().x, 50.0);
        frame.start_row();
        assert_eq!((frame.cursor().x, frame.cursor().y), (0.0, -25.0));
        frame.start_row();
        assert_eq!(frame.cursor().y, -25.0);
    }

    #[test]
    fn width_requests_apply_once() {
        let (mut ui, _backend) = make_state();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        let mut frame = Frame { window: &mut window, ui: &mut ui };
        frame.request_item_width_min(0.5);
        assert_eq!(frame.resolve_width(54.0), 200.0);
        assert_eq!(frame.resolve_width(54.0), 54.0);

        frame.request_item_width_min(0.1);
        frame.request_item_width_max(0.05);
        assert_eq!(frame.resolve_width(54.0), 20.0);

        frame.advance(350.0, 10.0);
        frame.request_item_width_min(0.5);
        assert_eq!(frame.resolve_width(10.0), 42.0);
    }

    #[test]
    fn indent_shifts_cursor_and_saturates() {
        let (mut ui, _backend) = make_state();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        let mut frame = Frame { window: &mut window, ui: &mut ui };
        let x0 = frame.cursor_dc().x;
        frame.indent();
        assert_eq!(frame.cursor_dc().x, x0 + 26.0);
        frame.unindent();
        frame.unindent();
        assert_eq!(frame.cursor_dc().x, x0);
    }

    #[test]
    fn frame_includes_title_bar_and_scrollbar() {
        let (ui, _backend) = make_state();
        let mut window = Window::new("w", 0.25, 0.5, 0.5, 0.5, None);
        let display = window.display_rect(&ui);
        assert_eq!((display.x, display.y, display.width, display.height), (200.0, 300.0, 400.0, 300.0));
        assert_eq!(window.title_bar_height(&ui), 24.0);
        window.show_scroll_bar = true;
        let frame = window.frame_rect(&ui);
        assert_eq!((frame.width, frame.height), (416.0, 324.0));
        assert!(window.contains_position(&ui, vec2f(300.0, 100.0)));
        assert!(!window.contains_position(&ui, vec2f(300.0, -30.0)));
    }

    #[test]
    fn chrome_is_prefixed_under_widgets() {
        let (mut ui, _backend) = make_state();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        window.title = "T".to_string();
        window.set_on_build(|frame| {
            frame.draw_rect_filled(0.1, 0.9, 0.1, 0.1, color(1, 2, 3, 255), 0);
            Ok(())
        });
        ui.input.begin_frame(0.0, ui.height);
        window.construct(&mut ui);
        let first = &window.cmds()[0];
        // body, title bar, title glyph, then the widget rectangle
        assert_eq!(first.face_count(), 8);
        let draw_order: Vec<[f32; 4]> = first.indices().chunks(6).map(|q| first.vertices()[q[0] as usize].color).collect();
        assert_eq!(draw_order[0], Style::default().window_bg_color.to_array());
        assert_eq!(draw_order[1], Style::default().title_bar_bg_color.to_array());
        assert_eq!(draw_order[3], color(1, 2, 3, 255).to_array());
    }

    #[test]
    fn failing_build_callback_keeps_window_alive() {
        let (mut ui, _backend) = make_state();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        window.set_on_build(move |_frame| {
            seen.set(seen.get() + 1);
            Err(UiError::FontNotFound("missing".to_string()))
        });
        for _ in 0..2 {
            ui.input.begin_frame(0.0, ui.height);
            window.construct(&mut ui);
        }
        assert_eq!(calls.get(), 2);
        assert_eq!(window.cmds().len(), 1);
    }

    #[test]
    fn scrollbar_cursor_tracks_scroll_position() {
        let (mut ui, _backend) = make_state();
        let mut window = Window::new("w", 0.0, 1.0, 0.5, 0.5, None);
        window.show_title_bar = false;
        window.show_scroll_bar = true;
        window.is_scrollable = true;
        window.set_on_build(|frame| {
            frame.advance(10.0, 592.0);
            Ok(())
        });
        window.scroll_offset = 150.0;
        ui.input.begin_frame(0.0, ui.height);
        window.construct(&mut ui);
        // content 600 in a 300 viewport
        assert_eq!(window.scroll_offset, 150.0);
        let first = &window.cmds()[0];
        let thumb = &first.vertices()[first.vertices().len() - 4..];
        assert_eq!(thumb[2].position, [403.0, 600.0 - 75.0]);
        assert_eq!(thumb[0].position[1], 600.0 - 75.0 - 150.0);
    }
}
