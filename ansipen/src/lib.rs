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

//! # AnsiPen
//!
//! Chainable ANSI text styling. A selection of style, foreground color and
//! background color is built up by navigating a graph of small `Copy` nodes,
//! then written around text as SGR escape sequences:
//!
//! ```
//! use ansipen::prelude::*;
//!
//! let out = clx().bold().red().write("hi");
//! assert_eq!(out, "\x1b[1m\x1b[31mhi\x1b[22m\x1b[39m");
//!
//! let out = clx().br_bg().yellow().write("hi");
//! assert_eq!(out, "\x1b[103mhi\x1b[49m");
//! ```
//!
//! Each set attribute contributes one `ESC[<code>m` to the prefix and its own
//! reset to the suffix, in style, foreground, background order, so nested
//! compositions only undo what they enabled.
//!
//! ## Entry points
//!
//! - [`clx`]: the [`Root`] with every axis at its top level.
//! - [`fg`], [`bright_fg`], [`bg`], [`bright_bg`], [`st`]: single-axis roots.
//! - [`by_name`]: lenient lookups that fall back to plain output.
//! - [`shortcuts`]: one function per color, background and style.

mod attribute;
pub mod by_name;
mod config;
mod consts;
mod facade;
mod logger;
mod pen;
mod resolver;
mod result;
mod selection;
pub mod shortcuts;
pub mod utility;

pub use self::attribute::{Axis, Brightness, Color, Style};
pub use self::config::{ColorMode, LogConfig};
pub use self::consts::{
    BACKGROUND_OFFSET, BRIGHT_BACKGROUND_OFFSET, BRIGHT_FOREGROUND_OFFSET, FOREGROUND_OFFSET,
    RESET_BACKGROUND, RESET_FOREGROUND, RESET_STYLE,
};
pub use self::facade::{Root, bg, bright_bg, bright_fg, clx, fg, st};
pub use self::logger::{LogArg, log_to, render_line};
pub use self::pen::{Decoration, Painted, Payload, Pen};
pub use self::resolver::{
    BackgroundAxis, BackgroundLeaf, ColorAxis, ColorPicker, Compose, StyleAxis, StyleBright,
    StyleLeaf, StylePicker,
};
pub use self::result::{PenError, PenResult};
pub use self::selection::AttributeSelection;
pub use self::utility::strip_sgr;

/// Traits and entry points needed to navigate the chaining API.
pub mod prelude {
    pub use crate::{
        Brightness, Color, ColorPicker, Compose, Payload, Pen, Style, StylePicker, bg, bright_bg,
        bright_fg, clx, fg, st,
    };
}
