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
use std::collections::HashMap;
use std::rc::Rc;

use crate::*;

/// Per-instance state shared by every window during construction.
pub(crate) struct UiState {
    pub(crate) input: Input,
    pub(crate) focus: FocusState,
    pub(crate) style: Style,
    pub(crate) fonts: HashMap<String, Rc<dyn Font>>,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) design_height: f32,
    pub(crate) frame_time: f64,
    pub(crate) frame_delta: f32,
    pub(crate) texture_stack: Vec<TextureId>,
}

impl UiState {
    pub(crate) fn new(input: Input, width: f32, height: f32, design_height: f32) -> Self {
        Self {
            input,
            focus: FocusState::new(),
            style: Style::default(),
            fonts: HashMap::new(),
            width,
            height,
            design_height,
            frame_time: 0.0,
            frame_delta: 0.0,
            texture_stack: Vec::new(),
        }
    }

    pub(crate) fn screen_to_display(&self, x: f32, y: f32) -> Vec2f { vec2f(x * self.width, y * self.height) }

    pub(crate) fn display_to_screen(&self, x: f32, y: f32) -> Vec2f {
        if self.width <= 0.0 || self.height <= 0.0 {
            return vec2f(0.0, 0.0);
        }
        vec2f(x / self.width, y / self.height)
    }

    /// Ratio applied to font metrics so text keeps its proportion of the viewport.
    pub(crate) fn text_scale(&self) -> f32 {
        if self.design_height <= 0.0 {
            1.0
        } else {
            self.height / self.design_height
        }
    }

    pub(crate) fn font(&self, name: &str) -> UiResult<Rc<dyn Font>> { self.fonts.get(name).cloned().ok_or_else(|| UiError::FontNotFound(name.to_string())) }

    pub(crate) fn white_uv(&self, style: &Style) -> [f32; 4] { self.fonts.get(&style.font_name).map_or([0.0; 4], |font| font.white_pixel_uv()) }

    pub(crate) fn add_texture_to_stack(&mut self, texture: TextureId) -> u32 {
        self.texture_stack.push(texture);
        self.texture_stack.len() as u32
    }
}

/// One draw call of the merged frame batch.
enum DrawRegion {
    Geometry { scissor: Recti, first_index: u32, index_count: u32 },
    Custom { window: usize, list: usize, viewport: Recti },
}

/// Owns the windows of one UI and runs the two-phase frame: [`Manager::construct`] lays out and
/// hit-tests every window, [`Manager::draw`] submits the result to the renderer.
///
/// Window order is draw order: later windows draw over earlier ones.
pub struct Manager<R: Renderer> {
    renderer: RendererHandle<R>,
    state: UiState,
    windows: Vec<Window>,
    frame_start_callbacks: Vec<Box<dyn FnMut(f64)>>,
    font_texture: Option<TextureId>,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl<R: Renderer> Manager<R> {
    /// Creates a manager for a `width` x `height` viewport.
    ///
    /// Text is scaled by `height / design_height`, so fonts baked for `design_height` keep their
    /// proportion of the screen at any resolution.
    pub fn new(renderer: RendererHandle<R>, input: Input, width: f32, height: f32, design_height: f32) -> Self {
        Self {
            renderer,
            state: UiState::new(input, width, height, design_height),
            windows: Vec::new(),
            frame_start_callbacks: Vec::new(),
            font_texture: None,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns a handle to the underlying renderer.
    pub fn renderer_handle(&self) -> RendererHandle<R> { self.renderer.clone() }

    /// Style shared by windows without an override.
    pub fn style(&self) -> &Style { &self.state.style }

    /// Mutable shared style.
    pub fn style_mut(&mut self) -> &mut Style { &mut self.state.style }

    /// Replaces the shared style.
    pub fn set_style(&mut self, style: Style) { self.state.style = style; }

    /// The input adapter; hosts forward scroll, key and character events through it.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.state.input }

    /// Focus tokens.
    pub fn focus(&self) -> &FocusState { &self.state.focus }

    /// Registers a font under its own name, replacing any font of the same name.
    pub fn add_font<F: Font + 'static>(&mut self, font: F) {
        tracing::debug!(target: "ewey_redux::manager", "font '{}' registered", font.name());
        self.state.fonts.insert(font.name().to_string(), Rc::new(font));
    }

    /// Looks up a registered font.
    pub fn font(&self, name: &str) -> UiResult<Rc<dyn Font>> { self.state.font(name) }

    /// Sets the texture bound to slot 0, the font atlas.
    pub fn set_font_texture(&mut self, texture: TextureId) { self.font_texture = Some(texture); }

    /// Updates the viewport size in device pixels.
    pub fn advise_resolution(&mut self, width: f32, height: f32) {
        tracing::debug!(target: "ewey_redux::manager", "resolution {}x{}", width, height);
        self.state.width = width;
        self.state.height = height;
    }

    /// Current viewport size in device pixels.
    pub fn resolution(&self) -> (f32, f32) { (self.state.width, self.state.height) }

    /// Height the fonts were designed for.
    pub fn design_height(&self) -> f32 { self.state.design_height }

    /// Converts screen-normalized units into device pixels.
    pub fn screen_to_display(&self, x: f32, y: f32) -> Vec2f { self.state.screen_to_display(x, y) }

    /// Converts device pixels into screen-normalized units.
    pub fn display_to_screen(&self, x: f32, y: f32) -> Vec2f { self.state.display_to_screen(x, y) }

    /// Sets the multiplier applied to raw scroll wheel events.
    pub fn set_scroll_speed(&mut self, speed: f32) { self.state.input.set_scroll_speed(speed); }

    /// Adds a window on top of the existing ones. `x`, `y`, `width` and `height` are screen-normalized,
    /// `(x, y)` being the top-left corner.
    pub fn new_window<F: FnMut(&mut Frame<'_>) -> UiResult<()> + 'static>(&mut self, id: &str, x: f32, y: f32, width: f32, height: f32, on_build: F) -> &mut Window {
        tracing::debug!(target: "ewey_redux::manager", "window '{}' added", id);
        self.windows.push(Window::new(id, x, y, width, height, Some(Box::new(on_build))));
        let last = self.windows.len() - 1;
        &mut self.windows[last]
    }

    /// Finds a window by ID.
    pub fn window(&self, id: &str) -> Option<&Window> { self.windows.iter().find(|w| w.id() == id) }

    /// Finds a window by ID for modification.
    pub fn window_mut(&mut self, id: &str) -> Option<&mut Window> { self.windows.iter_mut().find(|w| w.id() == id) }

    /// Windows accepted by `filter`, in draw order.
    pub fn windows_by_filter<F: Fn(&Window) -> bool>(&self, filter: F) -> Vec<&Window> { self.windows.iter().filter(|w| filter(w)).collect() }

    /// Drops every window with the given ID.
    pub fn remove_window(&mut self, id: &str) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id() != id);
        if self.windows.len() != before {
            tracing::debug!(target: "ewey_redux::manager", "window '{}' removed", id);
        }
    }

    /// Moves a window to the end of the draw order; returns `false` if no such window exists.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        match self.windows.iter().position(|w| w.id() == id) {
            Some(index) => {
                let window = self.windows.remove(index);
                self.windows.push(window);
                tracing::debug!(target: "ewey_redux::manager", "window '{}' brought to front", id);
                true
            }
            None => false,
        }
    }

    /// Moves a window to the start of the draw order; returns `false` if no such window exists.
    pub fn send_to_back(&mut self, id: &str) -> bool {
        match self.windows.iter().position(|w| w.id() == id) {
            Some(index) => {
                let window = self.windows.remove(index);
                self.windows.insert(0, window);
                tracing::debug!(target: "ewey_redux::manager", "window '{}' sent to back", id);
                true
            }
            None => false,
        }
    }

    /// Registers a hook run at the start of every [`Manager::construct`] with the frame time.
    pub fn add_frame_start_callback<F: FnMut(f64) + 'static>(&mut self, callback: F) { self.frame_start_callbacks.push(Box::new(callback)); }

    /// Pushes a texture for the current frame; returns its 1-based slot.
    pub fn add_texture_to_stack(&mut self, texture: TextureId) -> u32 { self.state.add_texture_to_stack(texture) }

    /// Textures pushed during the current frame, slot 1 first.
    pub fn texture_stack(&self) -> &[TextureId] { &self.state.texture_stack }

    /// Seconds accumulated over all constructed frames.
    pub fn frame_time(&self) -> f64 { self.state.frame_time }

    /// Lays out every window for a frame that lasted `frame_delta` seconds.
    pub fn construct(&mut self, frame_delta: f64) {
        let state = &mut self.state;
        state.frame_time += frame_delta;
        state.frame_delta = frame_delta as f32;
        state.texture_stack.clear();
        state.input.begin_frame(state.frame_time, state.height);
        for callback in self.frame_start_callbacks.iter_mut() {
            callback(state.frame_time);
        }

        state.input.mouse_position();
        state.input.scroll_wheel_delta(false);
        if state.input.mouse_button_action(PRIMARY_BUTTON) != MouseAction::Down {
            if let Some(owner) = state.focus.active_input() {
                tracing::trace!(target: "ewey_redux::manager", "input focus {:?} released", owner);
            }
            state.focus.release();
        }

        for window in self.windows.iter_mut() {
            window.construct(state);
        }
        // keys no editor consumed this frame are dropped
        state.input.clear_key_events();
    }

    /// Submits the last constructed frame: one upload, then one scissored draw per command list
    /// in window order. Custom regions set the viewport and run their callback.
    pub fn draw(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        let mut regions = Vec::new();
        for (w, window) in self.windows.iter().enumerate() {
            for (l, list) in window.cmds().iter().enumerate() {
                if list.is_custom() {
                    regions.push(DrawRegion::Custom { window: w, list: l, viewport: list.scissor() });
                    continue;
                }
                if list.face_count() == 0 {
                    continue;
                }
                let base = self.vertices.len() as u32;
                let first_index = self.indices.len() as u32;
                self.vertices.extend_from_slice(list.vertices());
                self.indices.extend(list.indices().iter().map(|i| i + base));
                regions.push(DrawRegion::Geometry { scissor: list.scissor(), first_index, index_count: list.indices().len() as u32 });
            }
        }

        let (width, height) = (self.state.width as i32, self.state.height as i32);
        let (vertices, indices) = (&self.vertices, &self.indices);
        self.renderer.scope_mut(|r| {
            r.begin(width, height);
            r.upload(vertices, indices);
        });

        let viewport = Recti::new(0, 0, width, height);
        let font_texture = self.font_texture;
        let textures = &self.state.texture_stack;
        let mut needs_bind = true;
        for region in regions {
            match region {
                DrawRegion::Geometry { scissor, first_index, index_count } => {
                    let rebind = needs_bind;
                    self.renderer.scope_mut(|r| {
                        if rebind {
                            r.bind_state(viewport, font_texture, textures);
                        }
                        r.draw_indexed(scissor, first_index, index_count);
                    });
                    needs_bind = false;
                }
                DrawRegion::Custom { window, list, viewport: region_viewport } => {
                    self.renderer.scope_mut(|r| r.set_viewport(region_viewport));
                    // the renderer lock is not held here so the callback may use its own handle
                    if let Some(cmd) = self.windows.get_mut(window).and_then(|w| w.cmds_mut().get_mut(list)) {
                        cmd.invoke_custom(&CustomDrawArgs { viewport: region_viewport });
                    }
                    needs_bind = true;
                }
            }
        }

        self.renderer.scope_mut(|r| r.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn scroll_resets_when_content_shrinks() {
        let (mut manager, _backend) = make_manager();
        let rows = Rc::new(Cell::new(25usize));
        let count = rows.clone();
        let window = manager.new_window("w", 0.0, 1.0, 0.5, 1.0 / 3.0, move |frame| {
            for _ in 0..count.get() {
                frame.text("row")?;
                frame.start_row();
            }
            Ok(())
        });
        window.is_scrollable = true;
        window.show_title_bar = false;

        // 25 rows of 20 px: content 508 px in a 200 px viewport
        if let Some(w) = manager.window_mut("w") {
            w.scroll_offset = 450.0;
        }
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| w.scroll_offset), Some(308.0));

        // 7 rows: 148 px fit without scrolling
        rows.set(7);
        if let Some(w) = manager.window_mut("w") {
            w.scroll_offset = 450.0;
        }
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| w.scroll_offset), Some(0.0));
    }

    #[test]
    fn wheel_scrolls_window_under_mouse() {
        let (mut manager, backend) = make_manager();
        let window = manager.new_window("w", 0.0, 1.0, 0.5, 1.0 / 3.0, |frame| {
            for _ in 0..25 {
                frame.text("row")?;
                frame.start_row();
            }
            Ok(())
        });
        window.is_scrollable = true;
        backend.move_to(100.0, 100.0);
        manager.input_mut().push_scroll(-3.0);
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| w.scroll_offset), Some(30.0));

        backend.move_to(700.0, 100.0);
        manager.input_mut().push_scroll(-3.0);
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| w.scroll_offset), Some(30.0));
    }

    #[test]
    fn auto_height_tracks_content() {
        let (mut manager, _backend) = make_manager();
        let window = manager.new_window("w", 0.0, 1.0, 0.5, 0.9, |frame| {
            frame.text("a")?;
            frame.start_row();
            frame.text("b")
        });
        window.auto_adjust_height = true;
        manager.construct(0.016);
        // padding 4 + two rows of 20 + padding 4
        let height = manager.window("w").map_or(0.0, |w| w.height * 600.0);
        assert!((height - 48.0).abs() < 1e-3);
    }

    #[test]
    fn draw_merges_lists_with_rebased_indices() {
        let (mut manager, _backend) = make_manager();
        manager.set_font_texture(TextureId::new(7));
        manager.new_window("a", 0.0, 1.0, 0.25, 0.25, |frame| frame.text("x"));
        manager.new_window("b", 0.5, 1.0, 0.25, 0.25, |frame| frame.text("y"));
        manager.construct(0.016);
        manager.draw();

        let calls = manager.renderer_handle().scope(|r| r.calls.clone());
        // per window: body, title bar and one glyph, 12 vertices and 18 indices
        assert_eq!(calls[0], Call::Begin(800, 600));
        assert_eq!(calls[1], Call::Upload { vertices: 24, indices: 36, max_index: 23 });
        assert_eq!(calls[2], Call::BindState { font_texture: Some(TextureId::new(7)), textures: 0 });
        assert_eq!(calls[3], Call::Draw { scissor: (0, 426, 200, 174), first: 0, count: 18 });
        assert_eq!(calls[4], Call::Draw { scissor: (400, 426, 200, 174), first: 18, count: 18 });
        assert_eq!(calls[5], Call::End);
    }

    #[test]
    fn custom_region_sets_viewport_and_forces_rebind() {
        let (mut manager, _backend) = make_manager();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let seen = hits.clone();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, move |frame| {
            frame.text("a")?;
            let seen = seen.clone();
            frame.custom(0.1, 0.1, Spacing::all(0.0), move |args| seen.borrow_mut().push(args.viewport));
            frame.text("b")
        });
        manager.construct(0.016);
        manager.draw();

        assert_eq!(hits.borrow().len(), 1);
        let calls = manager.renderer_handle().scope(|r| r.calls.clone());
        let kinds: Vec<&str> = calls.iter().map(Call::kind).collect();
        assert_eq!(kinds, vec!["begin", "upload", "bind", "draw", "viewport", "bind", "draw", "end"]);
        // custom area at x 18, 60 px below the first row top at 572
        assert_eq!(calls[4], Call::Viewport((18, 512, 80, 60)));
    }

    #[test]
    fn z_order_follows_window_order() {
        let (mut manager, _backend) = make_manager();
        for id in ["a", "b", "c"] {
            manager.new_window(id, 0.0, 1.0, 0.1, 0.1, |_| Ok(()));
        }
        let order = |m: &Manager<RecordingRenderer>| m.windows_by_filter(|_| true).iter().map(|w| w.id().to_string()).collect::<Vec<_>>();
        assert_eq!(order(&manager), ["a", "b", "c"]);
        assert!(manager.bring_to_front("a"));
        assert_eq!(order(&manager), ["b", "c", "a"]);
        assert!(manager.send_to_back("c"));
        assert_eq!(order(&manager), ["c", "b", "a"]);
        assert!(!manager.bring_to_front("missing"));
        manager.remove_window("b");
        assert_eq!(order(&manager), ["c", "a"]);
        assert_eq!(manager.windows_by_filter(|w| w.id() == "a").len(), 1);
    }

    #[test]
    fn texture_stack_is_one_based_and_per_frame() {
        let (mut manager, _backend) = make_manager();
        let slots = Rc::new(RefCell::new(Vec::new()));
        let seen = slots.clone();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, move |frame| {
            seen.borrow_mut().push(frame.add_texture_to_stack(TextureId::new(3)));
            seen.borrow_mut().push(frame.add_texture_to_stack(TextureId::new(4)));
            Ok(())
        });
        manager.construct(0.016);
        assert_eq!(manager.texture_stack(), [TextureId::new(3), TextureId::new(4)]);
        manager.construct(0.016);
        assert_eq!(*slots.borrow(), vec![1, 2, 1, 2]);
        assert_eq!(manager.texture_stack().len(), 2);
    }

    #[test]
    fn frame_start_hooks_see_accumulated_time() {
        let (mut manager, _backend) = make_manager();
        let times = Rc::new(RefCell::new(Vec::new()));
        let seen = times.clone();
        manager.add_frame_start_callback(move |t| seen.borrow_mut().push(t));
        manager.construct(0.25);
        manager.construct(0.5);
        assert_eq!(*times.borrow(), vec![0.25, 0.75]);
        assert_eq!(manager.frame_time(), 0.75);
    }

    #[test]
    fn dragging_the_body_moves_the_window() {
        let (mut manager, backend) = make_manager();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, |_| Ok(()));
        backend.move_to(100.0, 100.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(180.0, 160.0);
        manager.construct(0.016);
        let loc = manager.window("w").map(|w| (w.location.x, w.location.y));
        assert_eq!(loc, Some((0.1, 0.9)));

        // release: the next drag must start inside again
        backend.release(0);
        manager.construct(0.016);
        backend.move_to(780.0, 560.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(700.0, 500.0);
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| (w.location.x, w.location.y)), Some((0.1, 0.9)));
    }

    #[test]
    fn immovable_windows_stay_put() {
        let (mut manager, backend) = make_manager();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, |_| Ok(())).is_movable = false;
        backend.move_to(100.0, 100.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(180.0, 160.0);
        manager.construct(0.016);
        assert_eq!(manager.window("w").map(|w| (w.location.x, w.location.y)), Some((0.0, 1.0)));
    }

    #[test]
    fn text_scales_with_resolution() {
        let (mut manager, _backend) = make_manager();
        manager.advise_resolution(1600.0, 1200.0);
        assert_eq!(manager.resolution(), (1600.0, 1200.0));
        assert_eq!(manager.state.text_scale(), 2.0);
        let p = manager.screen_to_display(0.5, 0.25);
        assert_eq!((p.x, p.y), (800.0, 300.0));
        let back = manager.display_to_screen(800.0, 300.0);
        assert_eq!((back.x, back.y), (0.5, 0.25));
    }

    #[test]
    fn missing_font_is_reported() {
        let (manager, _backend) = make_manager();
        assert_eq!(manager.font("Nope").err(), Some(UiError::FontNotFound("Nope".to_string())));
        assert!(manager.font("Default").is_ok());
    }

    #[test]
    fn unread_key_events_do_not_pile_up() {
        let (mut manager, _backend) = make_manager();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, |frame| frame.text("idle"));
        for _ in 0..100 {
            manager.input_mut().push_char('a', KeyMods::NONE);
            manager.construct(0.016);
        }
        assert!(manager.input_mut().key_events().is_empty());
    }
}
