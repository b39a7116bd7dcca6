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
#![deny(missing_docs)]
//! `ewey-redux` is an immediate-mode GUI toolkit meant to be embedded inside a real-time render loop.
//! Every frame the host describes its UI through widget calls issued from per-window build callbacks;
//! the [`Manager`] lays the widgets out, hit-tests them against the current input snapshot and emits
//! textured triangles that a [`Renderer`] backend submits to the GPU.
//!
//! Coordinates follow the OpenGL convention: device pixels with the origin at the bottom-left corner
//! of the viewport. Window placement is expressed in screen-normalized units (`0..1`) so a layout
//! survives resolution changes.

use std::sync::{Arc, RwLock};

mod atlas;
mod cmd_list;
mod error;
mod focus;
mod input;
mod keys;
mod manager;
mod style;
mod text;
mod widgets;
mod window;

#[cfg(test)]
mod testing;

pub use atlas::*;
pub use cmd_list::*;
pub use error::*;
pub use focus::*;
pub use input::*;
pub use keys::*;
pub use manager::*;
pub use style::*;
pub use text::*;
pub use widgets::*;
pub use window::*;

use manager::UiState;

pub use rs_math3d::{color4b, Color4b, Rect, Recti, Vec2f};

use bitflags::*;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Stable widget or window identifier derived from a caller-chosen string.
pub struct Id(u64);

impl Id {
    /// Creates an ID from a caller-supplied numeric value.
    pub fn new(value: u64) -> Self { Self(value) }

    /// Creates a stable ID from a string label using FNV-1a hashing.
    pub fn from_str(label: &str) -> Self {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;
        let mut hash = FNV_OFFSET_BASIS;
        for byte in label.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self::new(hash)
    }

    /// Returns the raw numeric value wrapped by this ID.
    pub fn raw(self) -> u64 { self.0 }
}

impl From<&str> for Id {
    fn from(label: &str) -> Self { Self::from_str(label) }
}

/// Trait implemented by graphics backends consuming the merged frame batch.
///
/// The manager calls [`Renderer::begin`], uploads the whole frame once through [`Renderer::upload`] and then
/// issues one scissored [`Renderer::draw_indexed`] per command list. Custom regions switch the viewport and
/// hand control to the host; the manager calls [`Renderer::bind_state`] again before the next regular draw.
pub trait Renderer {
    /// Begins a new frame for a viewport of the given size.
    fn begin(&mut self, width: i32, height: i32);
    /// Uploads the shared vertex and index buffers for the frame.
    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]);
    /// Binds program state, the viewport and the texture slots (slot 0 is the font atlas).
    fn bind_state(&mut self, viewport: Recti, font_texture: Option<TextureId>, textures: &[TextureId]);
    /// Restricts the viewport to the provided rectangle, used ahead of custom draw callbacks.
    fn set_viewport(&mut self, viewport: Recti);
    /// Draws `index_count` indices starting at `first_index` clipped by `scissor`.
    fn draw_indexed(&mut self, scissor: Recti, first_index: u32, index_count: u32);
    /// Ends the frame.
    fn end(&mut self);
}

/// Thread-safe handle that shares ownership of a [`Renderer`].
pub struct RendererHandle<R: Renderer> {
    handle: Arc<RwLock<R>>,
}

// seems there's a bug in #[derive(Clone)] as it's unable to induce that Arc is sufficient
impl<R: Renderer> Clone for RendererHandle<R> {
    fn clone(&self) -> Self { Self { handle: self.handle.clone() } }
}

impl<R: Renderer> RendererHandle<R> {
    /// Wraps a renderer inside an [`Arc<RwLock<...>>`] so custom draw callbacks can share it.
    pub fn new(renderer: R) -> Self { Self { handle: Arc::new(RwLock::new(renderer)) } }

    /// Executes the provided closure with a shared reference to the renderer.
    pub fn scope<Res, F: Fn(&R) -> Res>(&self, f: F) -> Res {
        match self.handle.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Executes the provided closure with a mutable reference to the renderer.
    pub fn scope_mut<Res, F: FnMut(&mut R) -> Res>(&mut self, mut f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// State bits returned by widgets alongside their updated value.
    pub struct ResourceState : u32 {
        /// Indicates that the widget's data changed.
        const CHANGE = 4;
        /// Indicates that the widget was submitted (e.g. editing finished with Enter).
        const SUBMIT = 2;
        /// Indicates that the widget currently owns the mouse gesture or keyboard.
        const ACTIVE = 1;
        /// Indicates no interaction.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns `true` if the widget changed its bound value.
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }
    /// Returns `true` if the widget signaled submission.
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }
    /// Returns `true` if the widget is active.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if the state contains no flags.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Returns the color as normalized `[r, g, b, a]` floats, the layout stored in vertices.
    pub fn to_array(self) -> [f32; 4] { [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0, self.a as f32 / 255.0] }

    /// Converts to the math library's packed color.
    pub fn to_color4b(self) -> Color4b { color4b(self.r, self.g, self.b, self.a) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a renderer-owned texture.
pub struct TextureId(u32);

impl TextureId {
    /// Wraps a backend texture name.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: f32, y: f32) -> Vec2f { Vec2f { x, y } }

/// Builds a device-space rectangle from its top-left corner; it extends `height` pixels downward.
pub fn rectf(x: f32, y: f32, width: f32, height: f32) -> Rect<f32> { Rect { x, y, width, height } }

/// Strict containment test for a top-left anchored rectangle in bottom-left origin space.
pub fn rect_contains(r: &Rect<f32>, p: Vec2f) -> bool { p.x > r.x && p.x < r.x + r.width && p.y < r.y && p.y > r.y - r.height }

/// Converts a top-left anchored rectangle into the bottom-left anchored integer rectangle used for scissoring.
pub fn rect_to_scissor(r: &Rect<f32>) -> Recti { Recti::new(r.x as i32, (r.y - r.height) as i32, r.width as i32, r.height as i32) }
