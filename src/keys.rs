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

use bitflags::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Symbolic navigation and control keys delivered to widgets.
pub enum KeyCode {
    /// A key the platform reported but the table could not name.
    Unknown,
    /// Non-US key 1.
    World1,
    /// Non-US key 2.
    World2,
    /// Escape.
    Escape,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Insert.
    Insert,
    /// Delete.
    Delete,
    /// Right arrow.
    Right,
    /// Left arrow.
    Left,
    /// Down arrow.
    Down,
    /// Up arrow.
    Up,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Caps lock.
    CapsLock,
    /// Scroll lock.
    ScrollLock,
    /// Num lock.
    NumLock,
    /// Print screen.
    PrintScreen,
    /// Pause.
    Pause,
    /// Function key `F1`..`F25`, storing the key number.
    F(u8),
    /// Left shift.
    LeftShift,
    /// Left control.
    LeftControl,
    /// Left alt.
    LeftAlt,
    /// Left super / command.
    LeftSuper,
    /// Right shift.
    RightShift,
    /// Right control.
    RightControl,
    /// Right alt.
    RightAlt,
    /// Right super / command.
    RightSuper,
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    /// Modifier keys held while a key event was produced.
    pub struct KeyMods : u32 {
        /// Super / command held.
        const SUPER = 8;
        /// Alt held.
        const ALT = 4;
        /// Control held.
        const CTRL = 2;
        /// Shift held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl KeyMods {
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if Super is held.
    pub fn is_super(&self) -> bool { self.intersects(Self::SUPER) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Payload of a key event: decoded text or a symbolic key.
pub enum KeyInput {
    /// Text entry.
    Rune(char),
    /// Navigation or control key.
    Key(KeyCode),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// One entry of the drained key-event queue.
pub struct KeyPressEvent {
    /// What was pressed.
    pub input: KeyInput,
    /// Modifiers held at the time.
    pub mods: KeyMods,
}

impl KeyPressEvent {
    /// Creates a text event.
    pub fn rune(ch: char, mods: KeyMods) -> Self { Self { input: KeyInput::Rune(ch), mods } }

    /// Creates a symbolic key event.
    pub fn key(code: KeyCode, mods: KeyMods) -> Self { Self { input: KeyInput::Key(code), mods } }

    /// Returns `true` for the paste shortcuts (Ctrl+V and Shift+Insert).
    pub fn is_paste(&self) -> bool {
        match self.input {
            KeyInput::Rune(ch) => self.mods.is_ctrl() && (ch == 'v' || ch == 'V'),
            KeyInput::Key(KeyCode::Insert) => self.mods.is_shift(),
            KeyInput::Key(_) => false,
        }
    }
}

/// Translation table from platform key codes to [`KeyCode`].
///
/// Printable keys are intentionally absent: their text arrives through the character callback.
/// The `paste_key` entry names the platform code of `V` so Ctrl+V can be synthesized even when
/// the platform suppresses text delivery while Control is held.
#[derive(Clone, Debug, Default)]
pub struct KeyTable {
    codes: HashMap<i32, KeyCode>,
    paste_key: Option<i32>,
}

impl KeyTable {
    /// Creates an empty table.
    pub fn new() -> Self { Self::default() }

    /// Maps a platform code to a symbolic key.
    pub fn insert(&mut self, platform: i32, code: KeyCode) { self.codes.insert(platform, code); }

    /// Sets the platform code of the `V` key used for Ctrl+V paste synthesis.
    pub fn set_paste_key(&mut self, platform: i32) { self.paste_key = Some(platform); }

    /// Looks up a platform code.
    pub fn get(&self, platform: i32) -> Option<KeyCode> { self.codes.get(&platform).copied() }

    /// Returns `true` if `platform` is the paste key.
    pub fn is_paste_key(&self, platform: i32) -> bool { self.paste_key == Some(platform) }

    /// Key table for GLFW key codes.
    pub fn glfw() -> Self {
        let mut table = Self::new();
        let fixed = [
            (161, KeyCode::World1),
            (162, KeyCode::World2),
            (256, KeyCode::Escape),
            (257, KeyCode::Enter),
            (258, KeyCode::Tab),
            (259, KeyCode::Backspace),
            (260, KeyCode::Insert),
            (261, KeyCode::Delete),
            (262, KeyCode::Right),
            (263, KeyCode::Left),
            (264, KeyCode::Down),
            (265, KeyCode::Up),
            (266, KeyCode::PageUp),
            (267, KeyCode::PageDown),
            (268, KeyCode::Home),
            (269, KeyCode::End),
            (280, KeyCode::CapsLock),
            (281, KeyCode::ScrollLock),
            (282, KeyCode::NumLock),
            (283, KeyCode::PrintScreen),
            (284, KeyCode::Pause),
            (340, KeyCode::LeftShift),
            (341, KeyCode::LeftControl),
            (342, KeyCode::LeftAlt),
            (343, KeyCode::LeftSuper),
            (344, KeyCode::RightShift),
            (345, KeyCode::RightControl),
            (346, KeyCode::RightAlt),
            (347, KeyCode::RightSuper),
        ];
        for (platform, code) in fixed {
            table.insert(platform, code);
        }
        // F1 = 290 .. F25 = 314
        for n in 1..=25u8 {
            table.insert(289 + n as i32, KeyCode::F(n));
        }
        table.set_paste_key(86);
        table
    }
}
