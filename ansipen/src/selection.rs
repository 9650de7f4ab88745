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

use crate::attribute::{Axis, Brightness, Color, Style};

/// The three-slot accumulator behind every resolver node.
///
/// Each slot holds a raw SGR parameter or nothing. Updates are functional:
/// every `with_*`/`pick_*` call returns a new selection and leaves `self`
/// untouched, so sibling branches of a chain never observe each other.
///
/// ```
/// use ansipen::{AttributeSelection, Brightness, Color, Style};
///
/// let base = AttributeSelection::EMPTY.pick_background(Color::Red, Brightness::Regular);
/// let blue = base.pick_foreground(Color::Blue, Brightness::Regular);
/// let bold = base.pick_style(Style::Bold);
///
/// assert_eq!(blue.background(), Some(41));
/// assert_eq!(blue.foreground(), Some(34));
/// assert_eq!(bold.foreground(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSelection {
    style: Option<u8>,
    foreground: Option<u8>,
    background: Option<u8>,
}

impl AttributeSelection {
    /// Selection with no slot set. Renders as plain text.
    pub const EMPTY: AttributeSelection = AttributeSelection {
        style: None,
        foreground: None,
        background: None,
    };

    /// Builds a selection from raw SGR parameters.
    pub const fn new(style: Option<u8>, foreground: Option<u8>, background: Option<u8>) -> Self {
        AttributeSelection {
            style,
            foreground,
            background,
        }
    }

    /// Style code, if one was selected.
    pub const fn style(&self) -> Option<u8> {
        self.style
    }

    /// Foreground code, if one was selected.
    pub const fn foreground(&self) -> Option<u8> {
        self.foreground
    }

    /// Background code, if one was selected.
    pub const fn background(&self) -> Option<u8> {
        self.background
    }

    /// Code held for `axis`.
    pub const fn get(&self, axis: Axis) -> Option<u8> {
        match axis {
            Axis::Style => self.style,
            Axis::Foreground => self.foreground,
            Axis::Background => self.background,
        }
    }

    /// `true` when no slot is set.
    pub const fn is_empty(&self) -> bool {
        self.style.is_none() && self.foreground.is_none() && self.background.is_none()
    }

    /// Replaces the style slot with a raw code.
    #[must_use]
    pub const fn with_style(mut self, code: u8) -> Self {
        self.style = Some(code);
        self
    }

    /// Replaces the foreground slot with a raw code.
    #[must_use]
    pub const fn with_foreground(mut self, code: u8) -> Self {
        self.foreground = Some(code);
        self
    }

    /// Replaces the background slot with a raw code.
    #[must_use]
    pub const fn with_background(mut self, code: u8) -> Self {
        self.background = Some(code);
        self
    }

    /// Replaces the slot for `axis` with a raw code.
    #[must_use]
    pub const fn with(self, axis: Axis, code: u8) -> Self {
        match axis {
            Axis::Style => self.with_style(code),
            Axis::Foreground => self.with_foreground(code),
            Axis::Background => self.with_background(code),
        }
    }

    /// Selects a style, replacing any previous one.
    #[must_use]
    pub const fn pick_style(self, style: Style) -> Self {
        self.with_style(style.to_u8())
    }

    /// Selects a foreground color, replacing any previous one.
    #[must_use]
    pub const fn pick_foreground(self, color: Color, brightness: Brightness) -> Self {
        self.with_foreground(color.foreground_code(brightness))
    }

    /// Selects a background color, replacing any previous one.
    #[must_use]
    pub const fn pick_background(self, color: Color, brightness: Brightness) -> Self {
        self.with_background(color.background_code(brightness))
    }

    /// Overlays every slot that is set in `other` on top of `self`.
    #[must_use]
    pub const fn merge(self, other: AttributeSelection) -> Self {
        AttributeSelection {
            style: match other.style {
                Some(code) => Some(code),
                None => self.style,
            },
            foreground: match other.foreground {
                Some(code) => Some(code),
                None => self.foreground,
            },
            background: match other.background {
                Some(code) => Some(code),
                None => self.background,
            },
        }
    }

    /// Set slots paired with their reset code, in emission order
    /// (style, foreground, background).
    ///
    /// A style code with no reset entry is skipped, so it contributes to
    /// neither prefix nor suffix.
    pub fn codes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        [Axis::Style, Axis::Foreground, Axis::Background]
            .into_iter()
            .filter_map(move |axis| {
                let code = self.get(axis)?;
                let reset = axis.reset_code(code)?;
                Some((code, reset))
            })
    }
}
