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
// Caret positions are character (rune) indices, not byte offsets.

fn byte_index(buf: &str, index: usize) -> usize { buf.char_indices().nth(index).map_or(buf.len(), |(at, _)| at) }

pub(crate) fn char_len(buf: &str) -> usize { buf.chars().count() }

/// Inserts `text` at `cursor`, skipping control characters; returns `true` if anything was inserted.
pub(crate) fn insert_text(buf: &mut String, cursor: &mut usize, text: &str) -> bool {
    let filtered: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if filtered.is_empty() {
        return false;
    }
    let at = (*cursor).min(char_len(buf));
    buf.insert_str(byte_index(buf, at), &filtered);
    *cursor = at + char_len(&filtered);
    true
}

pub(crate) fn delete_prev(buf: &mut String, cursor: &mut usize) -> bool {
    let at = (*cursor).min(char_len(buf));
    if at == 0 {
        return false;
    }
    let start = byte_index(buf, at - 1);
    let end = byte_index(buf, at);
    buf.replace_range(start..end, "");
    *cursor = at - 1;
    true
}

pub(crate) fn delete_next(buf: &mut String, cursor: usize) -> bool {
    if cursor >= char_len(buf) {
        return false;
    }
    let start = byte_index(buf, cursor);
    let end = byte_index(buf, cursor + 1);
    buf.replace_range(start..end, "");
    true
}

pub(crate) fn move_left(cursor: usize) -> usize { cursor.saturating_sub(1) }

pub(crate) fn move_right(buf: &str, cursor: usize) -> usize { (cursor + 1).min(char_len(buf)) }

/// First visible character keeping the caret inside a box `width` pixels wide.
///
/// `offset_of(i)` is the pixel offset of character `i` from the start of the string.
pub(crate) fn scroll_shift(shift: usize, cursor: usize, width: f32, offset_of: impl Fn(usize) -> f32) -> usize {
    if cursor < shift {
        return cursor;
    }
    let mut shift = shift;
    while shift < cursor && offset_of(cursor) - offset_of(shift) > width {
        shift += 1;
    }
    shift
}
