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

//! The attribute resolver graph.
//!
//! Every node is a small `Copy` value holding the selection inherited from its
//! parent. Stepping to a child copies that selection and overwrites exactly one
//! slot, so any node can be branched from repeatedly without the branches
//! affecting each other.
//!
//! Children are reached through three traits:
//!
//! - [`Compose`] for nodes that can write (they carry a complete selection),
//! - [`ColorPicker`] for nodes keyed by color name,
//! - [`StylePicker`] for nodes keyed by style name.
//!
//! ```
//! use ansipen::prelude::*;
//!
//! let out = clx().underline().bg().red().br().yellow().write("text");
//! assert_eq!(out, "\x1b[4m\x1b[93m\x1b[41mtext\x1b[24m\x1b[39m\x1b[49m");
//! ```

use crate::PenResult;
use crate::attribute::{Brightness, Color, Style};
use crate::config::LogConfig;
use crate::logger::{self, LogArg};
use crate::pen::{Decoration, Painted, Payload, Pen};
use crate::selection::AttributeSelection;
use std::fmt;
use std::io;

/// A node that can produce styled output.
pub trait Compose {
    /// The selection this node renders.
    fn selection(&self) -> AttributeSelection;

    /// Detaches a [`Pen`] carrying this node's selection.
    fn pen(&self) -> Pen {
        Pen::new(self.selection())
    }

    /// See [`Pen::prefix`].
    fn prefix(&self) -> String {
        self.pen().prefix()
    }

    /// See [`Pen::suffix`].
    fn suffix(&self) -> String {
        self.pen().suffix()
    }

    /// See [`Pen::compose`].
    fn compose<T: fmt::Display>(&self, text: T) -> String {
        self.pen().compose(text)
    }

    /// See [`Pen::write`].
    fn write<'a, P: Into<Payload<'a>>>(&self, payload: P) -> String {
        self.pen().write(payload)
    }

    /// See [`Pen::write_with`].
    fn write_with<F>(&self, callback: F) -> String
    where
        F: FnOnce(&Decoration) -> String,
    {
        self.pen().write_with(callback)
    }

    /// See [`Pen::paint`].
    fn paint<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.pen().paint(text)
    }

    /// Styles every text argument and prints the line to stdout.
    fn log<'a, I, A>(&self, args: I) -> PenResult<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg<'a>>,
    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        logger::log_to(self.pen(), &mut lock, &LogConfig::default(), args)
    }

    /// Styles every text argument and writes the line to `writer`.
    fn log_to<'a, W, I, A>(&self, writer: &mut W, config: &LogConfig, args: I) -> PenResult<()>
    where
        W: io::Write,
        I: IntoIterator<Item = A>,
        A: Into<LogArg<'a>>,
    {
        logger::log_to(self.pen(), writer, config, args)
    }
}

impl Compose for Pen {
    fn selection(&self) -> AttributeSelection {
        Pen::selection(self)
    }
}

/// A node with one child per color.
pub trait ColorPicker {
    /// Node reached by selecting a color.
    type Output;

    /// Selects `color` on the axis this node specializes.
    fn pick(&self, color: Color) -> Self::Output;

    /// Selects a color by name. Unknown names yield `None`.
    fn pick_named(&self, name: &str) -> Option<Self::Output> {
        Color::lookup(name).map(|color| self.pick(color))
    }

    /// Selects [`Color::Black`].
    fn black(&self) -> Self::Output {
        self.pick(Color::Black)
    }

    /// Selects [`Color::Red`].
    fn red(&self) -> Self::Output {
        self.pick(Color::Red)
    }

    /// Selects [`Color::Green`].
    fn green(&self) -> Self::Output {
        self.pick(Color::Green)
    }

    /// Selects [`Color::Yellow`].
    fn yellow(&self) -> Self::Output {
        self.pick(Color::Yellow)
    }

    /// Selects [`Color::Blue`].
    fn blue(&self) -> Self::Output {
        self.pick(Color::Blue)
    }

    /// Selects [`Color::Magenta`].
    fn magenta(&self) -> Self::Output {
        self.pick(Color::Magenta)
    }

    /// Selects [`Color::Cyan`].
    fn cyan(&self) -> Self::Output {
        self.pick(Color::Cyan)
    }

    /// Selects [`Color::White`].
    fn white(&self) -> Self::Output {
        self.pick(Color::White)
    }
}

/// A node with one child per style.
pub trait StylePicker {
    /// Node reached by selecting a style.
    type Output;

    /// Selects `style`.
    fn pick_style(&self, style: Style) -> Self::Output;

    /// Selects a style by name. Unknown names yield `None`.
    fn pick_style_named(&self, name: &str) -> Option<Self::Output> {
        Style::lookup(name).map(|style| self.pick_style(style))
    }

    /// Selects [`Style::Reset`].
    fn reset(&self) -> Self::Output {
        self.pick_style(Style::Reset)
    }

    /// Selects [`Style::Bold`].
    fn bold(&self) -> Self::Output {
        self.pick_style(Style::Bold)
    }

    /// Selects [`Style::Dim`].
    fn dim(&self) -> Self::Output {
        self.pick_style(Style::Dim)
    }

    /// Selects [`Style::Italic`].
    fn italic(&self) -> Self::Output {
        self.pick_style(Style::Italic)
    }

    /// Selects [`Style::Underline`].
    fn underline(&self) -> Self::Output {
        self.pick_style(Style::Underline)
    }

    /// Selects [`Style::Blink`].
    fn blink(&self) -> Self::Output {
        self.pick_style(Style::Blink)
    }

    /// Selects [`Style::FlashBlink`].
    fn flash_blink(&self) -> Self::Output {
        self.pick_style(Style::FlashBlink)
    }

    /// Selects [`Style::Reverse`].
    fn reverse(&self) -> Self::Output {
        self.pick_style(Style::Reverse)
    }

    /// Selects [`Style::Hidden`].
    fn hidden(&self) -> Self::Output {
        self.pick_style(Style::Hidden)
    }

    /// Selects [`Style::Strikethrough`].
    fn strikethrough(&self) -> Self::Output {
        self.pick_style(Style::Strikethrough)
    }
}

/// Foreground colors, regular or bright. Every child is a terminal [`Pen`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorAxis {
    selection: AttributeSelection,
    brightness: Brightness,
}

impl ColorAxis {
    /// Creates a foreground axis seeded with `selection`.
    pub const fn new(selection: AttributeSelection, brightness: Brightness) -> ColorAxis {
        ColorAxis {
            selection,
            brightness,
        }
    }

    /// Selection inherited from the parent.
    pub const fn selection(&self) -> AttributeSelection {
        self.selection
    }

    /// Palette this axis picks from.
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }
}

impl ColorPicker for ColorAxis {
    type Output = Pen;

    fn pick(&self, color: Color) -> Pen {
        Pen::new(self.selection.pick_foreground(color, self.brightness))
    }
}

/// Background colors, regular or bright. Every child is a [`BackgroundLeaf`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BackgroundAxis {
    selection: AttributeSelection,
    brightness: Brightness,
}

impl BackgroundAxis {
    /// Creates a background axis seeded with `selection`.
    pub const fn new(selection: AttributeSelection, brightness: Brightness) -> BackgroundAxis {
        BackgroundAxis {
            selection,
            brightness,
        }
    }

    /// Selection inherited from the parent.
    pub const fn selection(&self) -> AttributeSelection {
        self.selection
    }

    /// Palette this axis picks from.
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }
}

impl ColorPicker for BackgroundAxis {
    type Output = BackgroundLeaf;

    fn pick(&self, color: Color) -> BackgroundLeaf {
        BackgroundLeaf::new(self.selection.pick_background(color, self.brightness))
    }
}

/// A selected background. Writes on its own, or continues with a foreground
/// color, regular through its color children or bright through [`BackgroundLeaf::bright`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BackgroundLeaf {
    selection: AttributeSelection,
}

impl BackgroundLeaf {
    /// Wraps a selection that already carries a background.
    pub const fn new(selection: AttributeSelection) -> BackgroundLeaf {
        BackgroundLeaf { selection }
    }

    /// Bright foreground colors on top of this background.
    pub const fn bright(&self) -> ColorAxis {
        ColorAxis::new(self.selection, Brightness::Bright)
    }

    /// Alias of [`BackgroundLeaf::bright`].
    pub const fn br(&self) -> ColorAxis {
        self.bright()
    }
}

impl Compose for BackgroundLeaf {
    fn selection(&self) -> AttributeSelection {
        self.selection
    }
}

impl ColorPicker for BackgroundLeaf {
    type Output = Pen;

    fn pick(&self, color: Color) -> Pen {
        Pen::new(self.selection.pick_foreground(color, Brightness::Regular))
    }
}

/// One child per style name. Has no `write` of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleAxis {
    selection: AttributeSelection,
}

impl StyleAxis {
    /// Creates a style axis seeded with `selection`.
    pub const fn new(selection: AttributeSelection) -> StyleAxis {
        StyleAxis { selection }
    }

    /// Selection inherited from the parent.
    pub const fn selection(&self) -> AttributeSelection {
        self.selection
    }
}

impl StylePicker for StyleAxis {
    type Output = StyleLeaf;

    fn pick_style(&self, style: Style) -> StyleLeaf {
        StyleLeaf::new(self.selection.pick_style(style))
    }
}

/// A selected style.
///
/// Writes on its own and allows every further chain:
///
/// | Chain                              | Result                              |
/// |------------------------------------|-------------------------------------|
/// | `.blue()`                          | style + foreground                  |
/// | `.bg().red()`                      | style + background                  |
/// | `.bg().red().blue()`               | style + background + foreground     |
/// | `.bg().red().br().blue()`          | style + background + bright fg      |
/// | `.br().blue()`                     | style + bright foreground           |
/// | `.br().bg().red()` / `.br_bg().red()` | style + bright background        |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleLeaf {
    selection: AttributeSelection,
}

impl StyleLeaf {
    /// Wraps a selection, usually one that carries a style.
    pub const fn new(selection: AttributeSelection) -> StyleLeaf {
        StyleLeaf { selection }
    }

    /// Regular background colors.
    pub const fn background(&self) -> BackgroundAxis {
        BackgroundAxis::new(self.selection, Brightness::Regular)
    }

    /// Alias of [`StyleLeaf::background`].
    pub const fn bg(&self) -> BackgroundAxis {
        self.background()
    }

    /// Bright background colors.
    pub const fn bright_background(&self) -> BackgroundAxis {
        BackgroundAxis::new(self.selection, Brightness::Bright)
    }

    /// Alias of [`StyleLeaf::bright_background`].
    pub const fn br_bg(&self) -> BackgroundAxis {
        self.bright_background()
    }

    /// Bright foreground colors, with a further bright background branch.
    pub const fn bright(&self) -> StyleBright {
        StyleBright::new(self.selection)
    }

    /// Alias of [`StyleLeaf::bright`].
    pub const fn br(&self) -> StyleBright {
        self.bright()
    }
}

impl Compose for StyleLeaf {
    fn selection(&self) -> AttributeSelection {
        self.selection
    }
}

impl ColorPicker for StyleLeaf {
    type Output = Pen;

    fn pick(&self, color: Color) -> Pen {
        Pen::new(self.selection.pick_foreground(color, Brightness::Regular))
    }
}

/// Bright branch under a style: bright foreground colors, or bright
/// backgrounds through [`StyleBright::background`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleBright {
    selection: AttributeSelection,
}

impl StyleBright {
    /// Creates the bright branch seeded with `selection`.
    pub const fn new(selection: AttributeSelection) -> StyleBright {
        StyleBright { selection }
    }

    /// Selection inherited from the parent.
    pub const fn selection(&self) -> AttributeSelection {
        self.selection
    }

    /// Bright background colors.
    pub const fn background(&self) -> BackgroundAxis {
        BackgroundAxis::new(self.selection, Brightness::Bright)
    }

    /// Alias of [`StyleBright::background`].
    pub const fn bg(&self) -> BackgroundAxis {
        self.background()
    }
}

impl ColorPicker for StyleBright {
    type Output = Pen;

    fn pick(&self, color: Color) -> Pen {
        Pen::new(self.selection.pick_foreground(color, Brightness::Bright))
    }
}
