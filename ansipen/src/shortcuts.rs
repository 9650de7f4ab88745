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

//! One free function per color, bright color, background, bright background
//! and style.
//!
//! ```
//! use ansipen::shortcuts::{bold, red, red_bright_bg};
//!
//! println!("{}", red("error"));
//! println!("{}", bold(red_bright_bg("alert")));
//! ```

use crate::attribute::{Brightness, Color, Style};
use crate::pen::{Payload, Pen};
use crate::selection::AttributeSelection;

const fn foreground(color: Color, brightness: Brightness) -> Pen {
    Pen::new(AttributeSelection::EMPTY.pick_foreground(color, brightness))
}

const fn background(color: Color, brightness: Brightness) -> Pen {
    Pen::new(AttributeSelection::EMPTY.pick_background(color, brightness))
}

macro_rules! color_shortcuts {
    ($($color:ident => $fg:ident, $bright:ident, $bg:ident, $bright_bg:ident;)*) => {
        $(
            #[doc = concat!("Writes `payload` with a ", stringify!($fg), " foreground.")]
            pub fn $fg<'a, P: Into<Payload<'a>>>(payload: P) -> String {
                foreground(Color::$color, Brightness::Regular).write(payload)
            }

            #[doc = concat!("Writes `payload` with a bright ", stringify!($fg), " foreground.")]
            pub fn $bright<'a, P: Into<Payload<'a>>>(payload: P) -> String {
                foreground(Color::$color, Brightness::Bright).write(payload)
            }

            #[doc = concat!("Writes `payload` on a ", stringify!($fg), " background.")]
            pub fn $bg<'a, P: Into<Payload<'a>>>(payload: P) -> String {
                background(Color::$color, Brightness::Regular).write(payload)
            }

            #[doc = concat!("Writes `payload` on a bright ", stringify!($fg), " background.")]
            pub fn $bright_bg<'a, P: Into<Payload<'a>>>(payload: P) -> String {
                background(Color::$color, Brightness::Bright).write(payload)
            }
        )*
    };
}

color_shortcuts! {
    Black => black, black_bright, black_bg, black_bright_bg;
    Red => red, red_bright, red_bg, red_bright_bg;
    Green => green, green_bright, green_bg, green_bright_bg;
    Yellow => yellow, yellow_bright, yellow_bg, yellow_bright_bg;
    Blue => blue, blue_bright, blue_bg, blue_bright_bg;
    Magenta => magenta, magenta_bright, magenta_bg, magenta_bright_bg;
    Cyan => cyan, cyan_bright, cyan_bg, cyan_bright_bg;
    White => white, white_bright, white_bg, white_bright_bg;
}

macro_rules! style_shortcuts {
    ($($style:ident => $name:ident;)*) => {
        $(
            #[doc = concat!("Writes `payload` with the ", stringify!($name), " style.")]
            pub fn $name<'a, P: Into<Payload<'a>>>(payload: P) -> String {
                Pen::new(AttributeSelection::EMPTY.pick_style(Style::$style)).write(payload)
            }
        )*
    };
}

style_shortcuts! {
    Reset => reset;
    Bold => bold;
    Dim => dim;
    Italic => italic;
    Underline => underline;
    Blink => blink;
    FlashBlink => flash_blink;
    Reverse => reverse;
    Hidden => hidden;
    Strikethrough => strikethrough;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_shortcuts() {
        assert_eq!(red("hi"), "\x1b[31mhi\x1b[39m");
        assert_eq!(red_bright("hi"), "\x1b[91mhi\x1b[39m");
        assert_eq!(red_bg("hi"), "\x1b[41mhi\x1b[49m");
        assert_eq!(yellow_bright_bg("hi"), "\x1b[103mhi\x1b[49m");
        assert_eq!(white(7), "\x1b[37m7\x1b[39m");
    }

    #[test]
    fn test_style_shortcuts() {
        assert_eq!(bold("hi"), "\x1b[1mhi\x1b[22m");
        assert_eq!(flash_blink("hi"), "\x1b[6mhi\x1b[25m");
        assert_eq!(reset("hi"), "\x1b[0mhi\x1b[0m");
    }

    #[test]
    fn test_nesting_by_text_and_by_callback_agree() {
        let by_text = red(blue("text"));
        let by_callback = red(Payload::callback(|parent| {
            let inner = blue(Payload::callback(|child| {
                format!("{}text{}", child.prefix, child.suffix)
            }));
            format!("{}{}{}", parent.prefix, inner, parent.suffix)
        }));
        assert_eq!(by_text, by_callback);
    }

    #[test]
    fn test_reverse_wraps_nested_output() {
        let nested = reverse(italic(red("x")));
        assert_eq!(
            nested,
            "\x1b[7m\x1b[3m\x1b[31mx\x1b[39m\x1b[23m\x1b[27m"
        );
    }
}
