//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// Escape introducer that starts every SGR sequence (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Terminator of a Select Graphic Rendition sequence.
pub const SGR_END: char = 'm';

/// Offset added to a color index to produce a regular foreground code (`30`-`37`).
pub const FOREGROUND_OFFSET: u8 = 30;

/// Offset added to a color index to produce a bright foreground code (`90`-`97`).
pub const BRIGHT_FOREGROUND_OFFSET: u8 = 90;

/// Offset added to a color index to produce a regular background code (`40`-`47`).
pub const BACKGROUND_OFFSET: u8 = 40;

/// Offset added to a color index to produce a bright background code (`100`-`107`).
pub const BRIGHT_BACKGROUND_OFFSET: u8 = 100;

/// Resets the foreground color. Shared by regular and bright variants.
pub const RESET_FOREGROUND: u8 = 39;

/// Resets the background color. Shared by regular and bright variants.
pub const RESET_BACKGROUND: u8 = 49;

/// Reset code for each style, indexed by style index.
///
/// | Index | Style         | Reset |
/// |-------|---------------|-------|
/// | `0`   | Reset         | `0`   |
/// | `1`   | Bold          | `22`  |
/// | `2`   | Dim           | `22`  |
/// | `3`   | Italic        | `23`  |
/// | `4`   | Underline     | `24`  |
/// | `5`   | Blink         | `25`  |
/// | `6`   | FlashBlink    | `25`  |
/// | `7`   | Reverse       | `27`  |
/// | `8`   | Hidden        | `28`  |
/// | `9`   | Strikethrough | `29`  |
pub const RESET_STYLE: [u8; 10] = [0, 22, 22, 23, 24, 25, 25, 27, 28, 29];
