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

#[derive(Copy, Clone)]
enum SliderText {
    Int,
    Float(usize),
}

impl SliderText {
    fn format(self, value: f64) -> String {
        match self {
            SliderText::Int => format!("{}", value as i64),
            SliderText::Float(precision) => format!("{:.*}", precision, value),
        }
    }
}

// Drag anchor of a range slider: the value when the press started.
#[derive(Copy, Clone)]
struct RangeDrag(f64);

// Sub-step movement carried between frames by integer drag sliders.
#[derive(Copy, Clone)]
struct DragRemainder(f64);

impl<'a> Frame<'a> {
    /// Slider over `[min, max]` for floats.
    pub fn slider_float(&mut self, id: &str, value: f32, min: f32, max: f32) -> UiResult<(f32, ResourceState)> {
        let precision = self.style().slider_float_precision;
        let (v, state) = self.range_slider(id, value as f64, min as f64, max as f64, SliderText::Float(precision))?;
        Ok((v as f32, state))
    }

    /// Slider over `[min, max]` for integers.
    pub fn slider_int(&mut self, id: &str, value: i32, min: i32, max: i32) -> UiResult<(i32, ResourceState)> {
        let (v, state) = self.range_slider(id, value as f64, min as f64, max as f64, SliderText::Int)?;
        Ok((v as i32, state))
    }

    /// Unbounded float edited by horizontal mouse movement scaled by `speed`.
    pub fn drag_slider_float(&mut self, id: &str, speed: f32, value: f32) -> UiResult<(f32, ResourceState)> {
        let precision = self.style().slider_float_precision;
        let (v, state) = self.drag_slider(id, speed, value as f64, false, SliderText::Float(precision))?;
        Ok((v as f32, state))
    }

    /// Like [`Frame::drag_slider_float`] but never below zero.
    pub fn drag_slider_ufloat(&mut self, id: &str, speed: f32, value: f32) -> UiResult<(f32, ResourceState)> {
        let precision = self.style().slider_float_precision;
        let (v, state) = self.drag_slider(id, speed, value as f64, true, SliderText::Float(precision))?;
        Ok((v as f32, state))
    }

    /// Unbounded integer edited by horizontal mouse movement scaled by `speed`.
    pub fn drag_slider_int(&mut self, id: &str, speed: f32, value: i32) -> UiResult<(i32, ResourceState)> {
        let (v, state) = self.drag_slider(id, speed, value as f64, false, SliderText::Int)?;
        Ok((v.clamp(i32::MIN as f64, i32::MAX as f64) as i32, state))
    }

    /// Like [`Frame::drag_slider_int`] for unsigned values.
    pub fn drag_slider_uint(&mut self, id: &str, speed: f32, value: u32) -> UiResult<(u32, ResourceState)> {
        let (v, state) = self.drag_slider(id, speed, value as f64, true, SliderText::Int)?;
        Ok((v.min(u32::MAX as f64) as u32, state))
    }

    fn slider_rect(&mut self, font: &dyn Font) -> (Rect<f32>, f32, f32) {
        let (margin, padding) = {
            let style = self.style();
            (style.slider_margin, style.slider_padding)
        };
        let h = font.glyph_height() * self.text_scale() + padding.vertical();
        let natural = self.remaining_width();
        let outer_w = self.resolve_width(natural);
        let cursor = self.cursor_dc();
        let r = rectf(cursor.x + margin.left, cursor.y - margin.top, (outer_w - margin.horizontal()).max(0.0), h);
        (r, outer_w, h + margin.vertical())
    }

    fn range_slider(&mut self, id: &str, value: f64, min: f64, max: f64, text: SliderText) -> UiResult<(f64, ResourceState)> {
        let font = self.font()?;
        let id = Id::from_str(id);
        let (r, outer_w, outer_h) = self.slider_rect(&*font);
        let (cursor_w, padding) = {
            let style = self.style();
            (style.slider_cursor_width, style.slider_padding)
        };
        let track_w = r.width - cursor_w - padding.horizontal();
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };

        let mut next = value;
        let pressed = self.drag_behavior(id, &r);
        if pressed {
            let start = match self.window.store().get::<RangeDrag>(id).map(|drag| drag.0) {
                Some(start) => start,
                None => {
                    self.window.store_mut().insert(id, RangeDrag(value));
                    value
                }
            };
            if track_w > 0.0 {
                let mouse = self.ui.input.mouse_position();
                let down = self.ui.input.mouse_down_position(PRIMARY_BUTTON);
                let raw = start + ((mouse.x - down.x) / track_w) as f64 * (hi - lo);
                let raw = match text {
                    SliderText::Int => raw.round(),
                    SliderText::Float(_) => raw,
                };
                next = raw.clamp(lo, hi);
            }
        } else {
            self.window.store_mut().remove(id);
        }

        let ratio = if max != min { ((next - min) / (max - min)).clamp(0.0, 1.0) as f32 } else { 0.0 };
        self.slider_render(&*font, &r, &text.format(next), Some(ratio * track_w.max(0.0)));
        self.advance(outer_w, outer_h);
        Ok((next, slider_state(pressed, next != value)))
    }

    fn drag_slider(&mut self, id: &str, speed: f32, value: f64, non_negative: bool, text: SliderText) -> UiResult<(f64, ResourceState)> {
        let font = self.font()?;
        let id = Id::from_str(id);
        let (r, outer_w, outer_h) = self.slider_rect(&*font);

        let mut next = value;
        let pressed = self.drag_behavior(id, &r);
        if pressed {
            let delta = (self.ui.input.mouse_position_delta().x * speed) as f64;
            next = match text {
                SliderText::Int => {
                    let carried = self.window.store_mut().get::<DragRemainder>(id).map_or(0.0, |rem| rem.0) + delta;
                    let step = carried.trunc();
                    self.window.store_mut().insert(id, DragRemainder(carried - step));
                    value + step
                }
                SliderText::Float(_) => value + delta,
            };
            if non_negative {
                next = next.max(0.0);
            }
        } else {
            self.window.store_mut().remove(id);
        }

        self.slider_render(&*font, &r, &text.format(next), None);
        self.advance(outer_w, outer_h);
        Ok((next, slider_state(pressed, next != value)))
    }

    fn slider_render(&mut self, font: &dyn Font, r: &Rect<f32>, label: &str, cursor_x: Option<f32>) {
        let style = self.style().clone();
        let engine = TextEngine::new(font, self.text_scale());
        let padding = style.slider_padding;
        let white = self.white_uv();
        let text_w = engine.measure(label).width;
        let render = engine.create_text(vec2f(r.x + (r.width - text_w) * 0.5, r.y - padding.top), style.slider_text_color, label);

        let cmd = self.active_cmd();
        cmd.draw_rect_filled(*r, style.slider_bg_color, FONT_TEXTURE_SLOT, white);
        if let Some(x) = cursor_x {
            let thumb = rectf(r.x + padding.left + x, r.y - padding.top, style.slider_cursor_width, r.height - padding.vertical());
            cmd.draw_rect_filled(thumb, style.slider_cursor_color, FONT_TEXTURE_SLOT, white);
        }
        cmd.add_text(&render);
    }
}

fn slider_state(pressed: bool, changed: bool) -> ResourceState {
    let mut state = ResourceState::NONE;
    if pressed {
        state |= ResourceState::ACTIVE;
    }
    if changed {
        state |= ResourceState::CHANGE;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // the slider track spans x 6..394, y 550..570; 369 px of cursor travel
    fn slider_window<T: Copy + 'static>(
        manager: &mut Manager<RecordingRenderer>,
        initial: T,
        mut widget: impl FnMut(&mut Frame<'_>, T) -> UiResult<(T, ResourceState)> + 'static,
    ) -> Rc<Cell<T>> {
        let value = Rc::new(Cell::new(initial));
        let bound = value.clone();
        manager.new_window("w", 0.0, 1.0, 0.5, 0.5, move |frame| {
            let (next, _) = widget(frame, bound.get())?;
            bound.set(next);
            Ok(())
        });
        value
    }

    #[test]
    fn range_slider_follows_drag_and_stays_in_range() {
        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 100.0f32, |frame, v| frame.slider_float("s", v, 0.0, 369.0));

        backend.move_to(100.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        assert_eq!(value.get(), 100.0);

        backend.move_to(150.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 150.0);

        // dragging outside the track keeps control
        backend.move_to(5000.0, 300.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 369.0);

        backend.move_to(-5000.0, 300.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 0.0);

        backend.release(0);
        manager.construct(0.016);
        backend.move_to(300.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn int_slider_rounds_and_reports_change() {
        let (mut manager, backend) = make_manager();
        let states = Rc::new(Cell::new(ResourceState::NONE));
        let seen = states.clone();
        let value = slider_window(&mut manager, 0i32, move |frame, v| {
            let out = frame.slider_int("s", v, 0, 3)?;
            seen.set(out.1);
            Ok(out)
        });
        backend.move_to(20.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        assert_eq!(states.get(), ResourceState::ACTIVE);
        backend.move_to(20.0 + 369.0 / 3.0 * 1.6, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 2);
        assert_eq!(states.get(), ResourceState::ACTIVE | ResourceState::CHANGE);
    }

    #[test]
    fn press_outside_track_is_ignored() {
        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 5.0f32, |frame, v| frame.slider_float("s", v, 0.0, 10.0));
        backend.move_to(100.0, 200.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(300.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 5.0);
    }

    #[test]
    fn drag_int_carries_sub_step_movement() {
        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 0i32, |frame, v| frame.drag_slider_int("d", 0.5, v));
        backend.move_to(100.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(103.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 1);
        backend.move_to(104.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn unsigned_drag_floors_at_zero() {
        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 1u32, |frame, v| frame.drag_slider_uint("d", 1.0, v));
        backend.move_to(100.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(95.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 0);

        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 0.5f32, |frame, v| frame.drag_slider_ufloat("d", 0.25, v));
        backend.move_to(100.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(90.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn drag_float_is_unbounded() {
        let (mut manager, backend) = make_manager();
        let value = slider_window(&mut manager, 0.0f32, |frame, v| frame.drag_slider_float("d", 2.0, v));
        backend.move_to(100.0, 40.0);
        manager.construct(0.016);
        backend.press(0);
        manager.construct(0.016);
        backend.move_to(60.0, 40.0);
        manager.construct(0.016);
        assert_eq!(value.get(), -80.0);
    }
}
