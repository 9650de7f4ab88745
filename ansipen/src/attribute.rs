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

//! The attribute table: color and style enumerations and the numeric codes
//! derived from them.

use crate::consts::{
    BACKGROUND_OFFSET, BRIGHT_BACKGROUND_OFFSET, BRIGHT_FOREGROUND_OFFSET, FOREGROUND_OFFSET,
    RESET_BACKGROUND, RESET_FOREGROUND, RESET_STYLE,
};
use crate::{PenError, PenResult};
use std::fmt;
use std::str::FromStr;

/// One of the eight basic ANSI colors.
///
/// The discriminant is the color index. Adding the index to an axis offset
/// yields the SGR parameter for that axis.
///
/// | Index | Color   | FG   | Bright FG | BG   | Bright BG |
/// |-------|---------|------|-----------|------|-----------|
/// | `0`   | Black   | `30` | `90`      | `40` | `100`     |
/// | `1`   | Red     | `31` | `91`      | `41` | `101`     |
/// | `2`   | Green   | `32` | `92`      | `42` | `102`     |
/// | `3`   | Yellow  | `33` | `93`      | `43` | `103`     |
/// | `4`   | Blue    | `34` | `94`      | `44` | `104`     |
/// | `5`   | Magenta | `35` | `95`      | `45` | `105`     |
/// | `6`   | Cyan    | `36` | `96`      | `46` | `106`     |
/// | `7`   | White   | `37` | `97`      | `47` | `107`     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Black - Color #0.
    Black = 0,
    /// Red - Color #1.
    Red = 1,
    /// Green - Color #2.
    Green = 2,
    /// Yellow - Color #3.
    Yellow = 3,
    /// Blue - Color #4.
    Blue = 4,
    /// Magenta - Color #5.
    Magenta = 5,
    /// Cyan - Color #6.
    Cyan = 6,
    /// White - Color #7.
    White = 7,
}

impl Color {
    /// Every color in table order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Returns the 0-based index of this color within the color table.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Converts a color index back into a `Color`.
    ///
    /// ```
    /// use ansipen::Color;
    ///
    /// assert_eq!(Color::from_u8(1), Some(Color::Red));
    /// assert_eq!(Color::from_u8(8), None);
    /// ```
    pub const fn from_u8(index: u8) -> Option<Color> {
        match index {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// Canonical lowercase name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// SGR parameter that selects this color as the foreground.
    ///
    /// ```
    /// use ansipen::{Brightness, Color};
    ///
    /// assert_eq!(Color::Red.foreground_code(Brightness::Regular), 31);
    /// assert_eq!(Color::Red.foreground_code(Brightness::Bright), 91);
    /// ```
    pub const fn foreground_code(self, brightness: Brightness) -> u8 {
        brightness.foreground_offset() + self.to_u8()
    }

    /// SGR parameter that selects this color as the background.
    pub const fn background_code(self, brightness: Brightness) -> u8 {
        brightness.background_offset() + self.to_u8()
    }

    /// Looks a color up by name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for empty or unknown names.
    pub fn lookup(name: &str) -> Option<Color> {
        let name = name.trim();
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = PenError;

    fn from_str(s: &str) -> PenResult<Color> {
        Color::lookup(s).ok_or_else(|| PenError::UnknownColor(s.to_string()))
    }
}

/// A text style. The discriminant is the style index, which is also the SGR
/// parameter that enables the style.
///
/// Each style has a dedicated reset parameter. Styles that share a terminal
/// attribute share the reset: `Bold` and `Dim` both reset with `22`, `Blink`
/// and `FlashBlink` both reset with `25`. `Reset` is terminated by `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    /// Reset all attributes (`0`, reset `0`).
    Reset = 0,
    /// Bold or increased intensity (`1`, reset `22`).
    Bold = 1,
    /// Faint or decreased intensity (`2`, reset `22`).
    Dim = 2,
    /// Italic (`3`, reset `23`).
    Italic = 3,
    /// Single underline (`4`, reset `24`).
    Underline = 4,
    /// Slow blink (`5`, reset `25`).
    Blink = 5,
    /// Rapid blink (`6`, reset `25`).
    FlashBlink = 6,
    /// Swap foreground and background (`7`, reset `27`).
    Reverse = 7,
    /// Concealed text (`8`, reset `28`).
    Hidden = 8,
    /// Crossed-out text (`9`, reset `29`).
    Strikethrough = 9,
}

impl Style {
    /// Every style in table order.
    pub const ALL: [Style; 10] = [
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::FlashBlink,
        Style::Reverse,
        Style::Hidden,
        Style::Strikethrough,
    ];

    /// Returns the 0-based index of this style, which doubles as its SGR code.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Converts a style index back into a `Style`.
    pub const fn from_u8(index: u8) -> Option<Style> {
        match index {
            0 => Some(Style::Reset),
            1 => Some(Style::Bold),
            2 => Some(Style::Dim),
            3 => Some(Style::Italic),
            4 => Some(Style::Underline),
            5 => Some(Style::Blink),
            6 => Some(Style::FlashBlink),
            7 => Some(Style::Reverse),
            8 => Some(Style::Hidden),
            9 => Some(Style::Strikethrough),
            _ => None,
        }
    }

    /// Canonical name of the style.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Reset => "reset",
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::FlashBlink => "flashBlink",
            Style::Reverse => "reverse",
            Style::Hidden => "hidden",
            Style::Strikethrough => "strikethrough",
        }
    }

    /// SGR parameter that terminates this style.
    ///
    /// ```
    /// use ansipen::Style;
    ///
    /// assert_eq!(Style::Bold.reset_code(), 22);
    /// assert_eq!(Style::Dim.reset_code(), 22);
    /// assert_eq!(Style::Reset.reset_code(), 0);
    /// ```
    pub const fn reset_code(self) -> u8 {
        RESET_STYLE[self as usize]
    }

    /// Looks a style up by name, ignoring ASCII case and surrounding whitespace.
    ///
    /// `flash_blink` and `flash-blink` are accepted for [`Style::FlashBlink`].
    pub fn lookup(name: &str) -> Option<Style> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("flash_blink") || name.eq_ignore_ascii_case("flash-blink") {
            return Some(Style::FlashBlink);
        }
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = PenError;

    fn from_str(s: &str) -> PenResult<Style> {
        Style::lookup(s).ok_or_else(|| PenError::UnknownStyle(s.to_string()))
    }
}

/// Regular or high-intensity variant of a color axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Brightness {
    /// Standard palette (`30`-`37`, `40`-`47`).
    #[default]
    Regular,
    /// High-intensity palette (`90`-`97`, `100`-`107`).
    Bright,
}

impl Brightness {
    /// Base offset for foreground codes.
    pub const fn foreground_offset(self) -> u8 {
        match self {
            Brightness::Regular => FOREGROUND_OFFSET,
            Brightness::Bright => BRIGHT_FOREGROUND_OFFSET,
        }
    }

    /// Base offset for background codes.
    pub const fn background_offset(self) -> u8 {
        match self {
            Brightness::Regular => BACKGROUND_OFFSET,
            Brightness::Bright => BRIGHT_BACKGROUND_OFFSET,
        }
    }
}

/// One of the three independent attribute dimensions.
///
/// The declaration order is the emission order of escape sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// Text style (bold, underline, ...).
    Style,
    /// Foreground (text) color.
    Foreground,
    /// Background color.
    Background,
}

impl Axis {
    /// Reset parameter for a code set on this axis.
    ///
    /// Foreground and background resets do not depend on the code. Style codes
    /// without an entry in the reset table return `None`.
    pub const fn reset_code(self, code: u8) -> Option<u8> {
        match self {
            Axis::Style => match Style::from_u8(code) {
                Some(style) => Some(style.reset_code()),
                None => None,
            },
            Axis::Foreground => Some(RESET_FOREGROUND),
            Axis::Background => Some(RESET_BACKGROUND),
        }
    }
}
