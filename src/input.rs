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

use crate::*;

/// Seconds between two presses of the same button that still count as a double click.
pub const DOUBLE_CLICK_THRESHOLD: f64 = 0.5;

/// Default multiplier applied to raw scroll wheel events.
pub const DEFAULT_SCROLL_SPEED: f32 = 10.0;

/// Index of the primary (left) mouse button.
pub const PRIMARY_BUTTON: usize = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Per-frame state of a mouse button.
pub enum MouseAction {
    /// Not pressed.
    Up,
    /// Held down.
    Down,
    /// Released this frame after a single press.
    Click,
    /// Released this frame completing a double click.
    DoubleClick,
}

/// Raw platform polling consumed by [`Input`].
///
/// Scroll, key and character events are callback driven on most platforms; the host forwards those
/// through [`Input::push_scroll`], [`Input::push_key`] and [`Input::push_char`].
pub trait InputBackend {
    /// Cursor position in host pixels, origin top-left.
    fn cursor_position(&self) -> Vec2f;
    /// Returns `true` while the given button is held.
    fn mouse_button_down(&self, button: usize) -> bool;
    /// Reads the clipboard.
    fn clipboard_text(&mut self) -> UiResult<String>;
    /// Replaces the clipboard contents.
    fn set_clipboard_text(&mut self, text: &str);
}

#[derive(Copy, Clone, Debug)]
struct ButtonTracker {
    last_action: MouseAction,
    last_press_time: Option<f64>,
    last_press_location: Vec2f,
    double_click_pending: bool,
    last_checked_frame: Option<u64>,
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self {
            last_action: MouseAction::Up,
            last_press_time: None,
            last_press_location: vec2f(-1.0, -1.0),
            double_click_pending: false,
            last_checked_frame: None,
        }
    }
}

/// Frame-stable view over the platform input.
///
/// Every query is memoized for the current frame: polling the mouse twice in one frame returns the same
/// position, and a button's action is computed once. [`Input::begin_frame`] invalidates the memoization.
pub struct Input {
    backend: Box<dyn InputBackend>,
    key_table: KeyTable,
    frame: u64,
    frame_time: f64,
    viewport_height: f32,
    mouse_pos: Vec2f,
    last_mouse_pos: Option<Vec2f>,
    mouse_delta: Vec2f,
    mouse_checked: bool,
    buttons: HashMap<usize, ButtonTracker>,
    scroll_speed: f32,
    scroll_pending: f32,
    scroll_cached: f32,
    key_events: Vec<KeyPressEvent>,
}

impl Input {
    /// Wraps a backend, translating keys through `key_table`.
    pub fn new(backend: Box<dyn InputBackend>, key_table: KeyTable) -> Self {
        Self {
            backend,
            key_table,
            frame: 0,
            frame_time: 0.0,
            viewport_height: 0.0,
            mouse_pos: vec2f(0.0, 0.0),
            last_mouse_pos: None,
            mouse_delta: vec2f(0.0, 0.0),
            mouse_checked: false,
            buttons: HashMap::new(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            scroll_pending: 0.0,
            scroll_cached: 0.0,
            key_events: Vec::new(),
        }
    }

    /// Starts a new frame: `frame_time` is the running clock in seconds and `viewport_height`
    /// is used to flip the backend's top-left cursor into bottom-left device space.
    pub fn begin_frame(&mut self, frame_time: f64, viewport_height: f32) {
        self.frame = self.frame.wrapping_add(1);
        self.frame_time = frame_time;
        self.viewport_height = viewport_height;
        self.mouse_checked = false;
    }

    /// Returns the clock value passed to the last [`Input::begin_frame`].
    pub fn frame_time(&self) -> f64 { self.frame_time }

    /// Sets the multiplier applied to raw scroll events.
    pub fn set_scroll_speed(&mut self, speed: f32) { self.scroll_speed = speed; }

    /// Returns the multiplier applied to raw scroll events.
    pub fn scroll_speed(&self) -> f32 { self.scroll_speed }

    /// Mouse position in device pixels, origin bottom-left.
    pub fn mouse_position(&mut self) -> Vec2f {
        if !self.mouse_checked {
            let raw = self.backend.cursor_position();
            let pos = vec2f(raw.x, self.viewport_height - raw.y);
            self.mouse_delta = match self.last_mouse_pos {
                Some(last) => vec2f(pos.x - last.x, pos.y - last.y),
                None => vec2f(0.0, 0.0),
            };
            self.last_mouse_pos = Some(pos);
            self.mouse_pos = pos;
            self.mouse_checked = true;
        }
        self.mouse_pos
    }

    /// Mouse movement since the previous frame; zero on the first frame.
    pub fn mouse_position_delta(&mut self) -> Vec2f {
        self.mouse_position();
        self.mouse_delta
    }

    /// Returns the action of `button` for this frame.
    pub fn mouse_button_action(&mut self, button: usize) -> MouseAction {
        let down = self.backend.mouse_button_down(button);
        let pos = self.mouse_position();
        let frame = self.frame;
        let now = self.frame_time;
        let tracker = self.buttons.entry(button).or_default();
        if tracker.last_checked_frame == Some(frame) {
            return tracker.last_action;
        }
        tracker.last_checked_frame = Some(frame);

        let action = if down {
            if tracker.last_action != MouseAction::Down {
                if let Some(prev) = tracker.last_press_time {
                    tracker.double_click_pending = now - prev < DOUBLE_CLICK_THRESHOLD;
                }
                tracker.last_press_time = Some(now);
                tracker.last_press_location = pos;
                tracing::trace!(target: "ewey_redux::input", "button {} pressed at ({}, {})", button, pos.x, pos.y);
            }
            MouseAction::Down
        } else if tracker.last_action == MouseAction::Down {
            if tracker.double_click_pending {
                tracker.double_click_pending = false;
                MouseAction::DoubleClick
            } else {
                MouseAction::Click
            }
        } else {
            MouseAction::Up
        };
        tracker.last_action = action;
        action
    }

    /// Location of the last press of `button`, or `(-1, -1)` when it is not down.
    pub fn mouse_down_position(&mut self, button: usize) -> Vec2f {
        match self.mouse_button_action(button) {
            MouseAction::Up => vec2f(-1.0, -1.0),
            _ => self.buttons.get(&button).map(|t| t.last_press_location).unwrap_or(vec2f(-1.0, -1.0)),
        }
    }

    /// Forgets the current action of `button` so widgets processed later this frame see `Up`.
    pub fn clear_mouse_button_action(&mut self, button: usize) {
        if let Some(tracker) = self.buttons.get_mut(&button) {
            tracker.last_action = MouseAction::Up;
            tracker.double_click_pending = false;
        }
    }

    /// Accumulates a raw scroll event.
    pub fn push_scroll(&mut self, delta: f32) { self.scroll_pending += delta * self.scroll_speed; }

    /// Scroll movement. With `use_cached == false` the pending scroll is drained into the cache;
    /// with `use_cached == true` the last drained value is returned again.
    pub fn scroll_wheel_delta(&mut self, use_cached: bool) -> f32 {
        if !use_cached {
            self.scroll_cached = self.scroll_pending;
            self.scroll_pending = 0.0;
        }
        self.scroll_cached
    }

    /// Forwards a raw platform key press. Unmapped keys are dropped, except the paste key with Control
    /// held which becomes a synthetic `'v'` rune.
    pub fn push_key(&mut self, platform_key: i32, mods: KeyMods) {
        match self.key_table.get(platform_key) {
            Some(code) => self.key_events.push(KeyPressEvent::key(code, mods)),
            None if mods.is_ctrl() && self.key_table.is_paste_key(platform_key) => self.key_events.push(KeyPressEvent::rune('v', mods)),
            None => {}
        }
    }

    /// Forwards a decoded character.
    pub fn push_char(&mut self, ch: char, mods: KeyMods) {
        if !ch.is_control() {
            self.key_events.push(KeyPressEvent::rune(ch, mods));
        }
    }

    /// Drains the queued key events.
    pub fn key_events(&mut self) -> Vec<KeyPressEvent> { std::mem::take(&mut self.key_events) }

    /// Discards queued key events.
    pub fn clear_key_events(&mut self) { self.key_events.clear(); }

    /// Reads the clipboard.
    pub fn clipboard_get(&mut self) -> UiResult<String> { self.backend.clipboard_text() }

    /// Writes the clipboard.
    pub fn clipboard_set(&mut self, text: &str) { self.backend.set_clipboard_text(text) }
}
