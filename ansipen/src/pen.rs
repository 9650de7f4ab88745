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

//! The composition object: turns an [`AttributeSelection`] into escape
//! sequences and wraps text with them.

use crate::attribute::{Brightness, Color, Style};
use crate::consts::{CSI, SGR_END};
use crate::selection::AttributeSelection;
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::time::SystemTime;

/// Arguments handed to a [`Payload::Callback`].
///
/// The callback owns the final layout: it decides where `prefix` and `suffix`
/// go, which lets it nest other compositions without them being wrapped twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    /// Escape sequences that enable the selected attributes.
    pub prefix: String,
    /// Escape sequences that reset the selected attributes.
    pub suffix: String,
    /// Moment the callback was invoked.
    pub timestamp: SystemTime,
}

/// Input accepted by [`Pen::write`].
///
/// Text (including numbers, which are rendered in decimal) is wrapped with the
/// pen's prefix and suffix. A callback receives a [`Decoration`] and its return
/// value is passed through unchanged.
pub enum Payload<'a> {
    /// Text to wrap.
    Text(Cow<'a, str>),
    /// Formatting callback.
    Callback(Box<dyn FnOnce(&Decoration) -> String + 'a>),
}

impl<'a> Payload<'a> {
    /// Wraps a closure as a callback payload.
    pub fn callback<F>(callback: F) -> Payload<'a>
    where
        F: FnOnce(&Decoration) -> String + 'a,
    {
        Payload::Callback(Box::new(callback))
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Payload::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Payload<'_> {
    fn from(text: String) -> Self {
        Payload::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Payload<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Payload::Text(text)
    }
}

impl From<char> for Payload<'_> {
    fn from(ch: char) -> Self {
        Payload::Text(Cow::Owned(ch.to_string()))
    }
}

macro_rules! numeric_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Payload<'_> {
                fn from(value: $ty) -> Self {
                    Payload::Text(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

numeric_payload!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// A composition object.
///
/// `Pen` holds an [`AttributeSelection`] by value and derives the escape
/// sequence pair from it on demand. It is `Copy` and carries no reference to
/// the node it came from, so a pen can be stored, passed around or converted
/// into a closure with [`Pen::into_writer`] and still produce the same output.
///
/// ```
/// use ansipen::{AttributeSelection, Pen};
///
/// let pen = Pen::new(AttributeSelection::new(Some(1), Some(31), None));
/// assert_eq!(pen.prefix(), "\x1b[1m\x1b[31m");
/// assert_eq!(pen.suffix(), "\x1b[22m\x1b[39m");
/// assert_eq!(pen.compose("hi"), "\x1b[1m\x1b[31mhi\x1b[22m\x1b[39m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Pen {
    selection: AttributeSelection,
}

impl Pen {
    /// Pen that applies no styling.
    pub const PLAIN: Pen = Pen::new(AttributeSelection::EMPTY);

    /// Creates a pen for `selection`.
    pub const fn new(selection: AttributeSelection) -> Pen {
        Pen { selection }
    }

    /// The selection this pen renders.
    pub const fn selection(&self) -> AttributeSelection {
        self.selection
    }

    /// Returns a pen with `style` selected.
    pub const fn pick_style(self, style: Style) -> Pen {
        Pen::new(self.selection.pick_style(style))
    }

    /// Returns a pen with `color` selected as the foreground.
    pub const fn pick_foreground(self, color: Color, brightness: Brightness) -> Pen {
        Pen::new(self.selection.pick_foreground(color, brightness))
    }

    /// Returns a pen with `color` selected as the background.
    pub const fn pick_background(self, color: Color, brightness: Brightness) -> Pen {
        Pen::new(self.selection.pick_background(color, brightness))
    }

    /// Writes the enabling escape sequences into `writer`.
    pub fn write_prefix<W: Write>(&self, writer: &mut W) -> fmt::Result {
        for (code, _) in self.selection.codes() {
            write!(writer, "{}{}{}", CSI, code, SGR_END)?;
        }
        Ok(())
    }

    /// Writes the resetting escape sequences into `writer`.
    pub fn write_suffix<W: Write>(&self, writer: &mut W) -> fmt::Result {
        for (_, reset) in self.selection.codes() {
            write!(writer, "{}{}{}", CSI, reset, SGR_END)?;
        }
        Ok(())
    }

    /// One `ESC[<code>m` per set slot, in style, foreground, background order.
    pub fn prefix(&self) -> String {
        let mut prefix = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_prefix(&mut prefix);
        prefix
    }

    /// One `ESC[<reset>m` per set slot, in the same order as [`Pen::prefix`].
    pub fn suffix(&self) -> String {
        let mut suffix = String::new();
        let _ = self.write_suffix(&mut suffix);
        suffix
    }

    /// Returns `prefix + text + suffix`.
    ///
    /// Numbers and anything else implementing `Display` are formatted first.
    pub fn compose<T: fmt::Display>(&self, text: T) -> String {
        self.paint(text).to_string()
    }

    /// Wraps `text` for lazy rendering inside `format!` and friends.
    pub const fn paint<T: fmt::Display>(&self, text: T) -> Painted<T> {
        Painted { pen: *self, text }
    }

    /// Decorates text, or hands the decoration to a callback.
    ///
    /// ```
    /// use ansipen::{Payload, Pen, AttributeSelection};
    ///
    /// let pen = Pen::new(AttributeSelection::EMPTY.with_background(103));
    /// assert_eq!(pen.write("hi"), "\x1b[103mhi\x1b[49m");
    /// assert_eq!(pen.write(7), "\x1b[103m7\x1b[49m");
    ///
    /// let out = pen.write(Payload::callback(|d| format!("{}[{}]{}", d.prefix, "x", d.suffix)));
    /// assert_eq!(out, "\x1b[103m[x]\x1b[49m");
    /// ```
    pub fn write<'a, P: Into<Payload<'a>>>(&self, payload: P) -> String {
        match payload.into() {
            Payload::Text(text) => self.compose(text),
            Payload::Callback(callback) => callback(&self.decoration()),
        }
    }

    /// Invokes `callback` with this pen's decoration and returns its output as is.
    pub fn write_with<F>(&self, callback: F) -> String
    where
        F: FnOnce(&Decoration) -> String,
    {
        callback(&self.decoration())
    }

    /// Builds the argument passed to callbacks.
    pub fn decoration(&self) -> Decoration {
        Decoration {
            prefix: self.prefix(),
            suffix: self.suffix(),
            timestamp: SystemTime::now(),
        }
    }

    /// Detaches `write` into a closure that owns a copy of the selection.
    ///
    /// ```
    /// use ansipen::{AttributeSelection, Pen, Payload};
    ///
    /// let write = Pen::new(AttributeSelection::EMPTY.with_foreground(32)).into_writer();
    /// assert_eq!(write(Payload::from("ok")), "\x1b[32mok\x1b[39m");
    /// ```
    pub fn into_writer(self) -> impl for<'a> Fn(Payload<'a>) -> String + Copy {
        move |payload: Payload<'_>| self.write(payload)
    }
}

impl From<AttributeSelection> for Pen {
    fn from(selection: AttributeSelection) -> Self {
        Pen::new(selection)
    }
}

/// Text paired with a [`Pen`], rendered when displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painted<T> {
    pen: Pen,
    text: T,
}

impl<T> Painted<T> {
    /// The pen used for rendering.
    pub const fn pen(&self) -> Pen {
        self.pen
    }

    /// Unwraps the text.
    pub fn into_inner(self) -> T {
        self.text
    }
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pen.write_prefix(f)?;
        write!(f, "{}", self.text)?;
        self.pen.write_suffix(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold_red() -> Pen {
        Pen::PLAIN
            .pick_style(Style::Bold)
            .pick_foreground(Color::Red, Brightness::Regular)
    }

    #[test]
    fn test_bold_red_scenario() {
        let pen = bold_red();
        assert_eq!(pen.prefix(), "\x1b[1m\x1b[31m");
        assert_eq!(pen.suffix(), "\x1b[22m\x1b[39m");
        assert_eq!(pen.compose("hi"), "\x1b[1m\x1b[31mhi\x1b[22m\x1b[39m");
    }

    #[test]
    fn test_bright_yellow_background_scenario() {
        let pen = Pen::PLAIN.pick_background(Color::Yellow, Brightness::Bright);
        assert_eq!(pen.compose("hi"), "\x1b[103mhi\x1b[49m");
    }

    #[test]
    fn test_full_selection_order() {
        let pen = Pen::PLAIN
            .pick_background(Color::Cyan, Brightness::Regular)
            .pick_foreground(Color::White, Brightness::Bright)
            .pick_style(Style::Underline);
        assert_eq!(pen.prefix(), "\x1b[4m\x1b[97m\x1b[46m");
        assert_eq!(pen.suffix(), "\x1b[24m\x1b[39m\x1b[49m");
    }

    #[test]
    fn test_reset_style_is_emitted_literally() {
        let pen = Pen::PLAIN.pick_style(Style::Reset);
        assert_eq!(pen.compose("x"), "\x1b[0mx\x1b[0m");
    }

    #[test]
    fn test_plain_pen_passes_through() {
        let pen = Pen::PLAIN;
        assert_eq!(pen.prefix(), "");
        assert_eq!(pen.suffix(), "");
        assert_eq!(pen.compose("text"), "text");
        assert_eq!(pen.write(42), "42");
        assert_eq!(pen.write(-1.5), "-1.5");
        assert_eq!(
            pen.write_with(|_| "from callback".to_string()),
            "from callback"
        );
    }

    #[test]
    fn test_numbers_are_rendered_in_decimal() {
        let pen = bold_red();
        assert_eq!(pen.write(123456), "\x1b[1m\x1b[31m123456\x1b[22m\x1b[39m");
        assert_eq!(pen.write(7u8), pen.compose(7));
    }

    #[test]
    fn test_callback_output_is_not_wrapped() {
        let pen = bold_red();
        let out = pen.write(Payload::callback(|_: &Decoration| "raw".to_string()));
        assert_eq!(out, "raw");

        let out = pen.write_with(|d| format!("{}hi{}", d.prefix, d.suffix));
        assert_eq!(out, pen.compose("hi"));
    }

    #[test]
    fn test_callback_nesting_matches_text_nesting() {
        let outer = Pen::PLAIN.pick_foreground(Color::Red, Brightness::Regular);
        let inner = Pen::PLAIN.pick_foreground(Color::Blue, Brightness::Regular);

        let by_text = outer.write(inner.write("text"));
        let by_callback = outer.write_with(|parent| {
            let nested = inner.write_with(|child| format!("{}text{}", child.prefix, child.suffix));
            format!("{}{}{}", parent.prefix, nested, parent.suffix)
        });
        assert_eq!(by_text, by_callback);
    }

    #[test]
    fn test_paint_matches_compose() {
        let pen = bold_red();
        assert_eq!(format!("{}", pen.paint("hi")), pen.compose("hi"));
        assert_eq!(pen.paint(5).into_inner(), 5);
    }

    #[test]
    fn test_detached_writer() {
        let write = bold_red().into_writer();
        let again = write;
        assert_eq!(write(Payload::from("a")), again(Payload::from("a")));
        assert_eq!(write(Payload::from("a")), bold_red().compose("a"));
    }

    #[test]
    fn test_decoration_fields() {
        let before = SystemTime::now();
        let decoration = bold_red().decoration();
        assert_eq!(decoration.prefix, "\x1b[1m\x1b[31m");
        assert_eq!(decoration.suffix, "\x1b[22m\x1b[39m");
        assert!(decoration.timestamp >= before);
    }
}
