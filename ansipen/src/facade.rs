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

//! The unified root: every axis reachable from one value.
//!
//! ```
//! use ansipen::prelude::*;
//!
//! // style first, background first or bright first all reach the same selection
//! let a = clx().bold().bg().red().br().blue();
//! let b = clx().bg().red().br().blue().pick_style(Style::Bold);
//! assert_eq!(a, b);
//! ```

use crate::attribute::{Brightness, Color, Style};
use crate::pen::Pen;
use crate::resolver::{
    BackgroundAxis, ColorAxis, ColorPicker, Compose, StyleAxis, StyleBright, StyleLeaf, StylePicker,
};
use crate::selection::AttributeSelection;

/// Entry object exposing styles, foreground colors, bright foreground colors,
/// backgrounds and bright backgrounds at its top level.
///
/// `Root` is built from the resolver nodes: its top level behaves like a
/// [`StyleLeaf`] with nothing selected, plus one [`StyleLeaf`] child per style.
/// Writing from the root itself applies no styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Root {
    selection: AttributeSelection,
}

impl Root {
    /// Root with nothing selected.
    pub const fn new() -> Root {
        Root {
            selection: AttributeSelection::EMPTY,
        }
    }

    const fn leaf(&self) -> StyleLeaf {
        StyleLeaf::new(self.selection)
    }

    /// Style children.
    pub const fn styles(&self) -> StyleAxis {
        StyleAxis::new(self.selection)
    }

    /// Bright foreground colors, with a bright background branch.
    pub const fn bright(&self) -> StyleBright {
        self.leaf().bright()
    }

    /// Alias of [`Root::bright`].
    pub const fn br(&self) -> StyleBright {
        self.bright()
    }

    /// Regular background colors.
    pub const fn background(&self) -> BackgroundAxis {
        self.leaf().background()
    }

    /// Alias of [`Root::background`].
    pub const fn bg(&self) -> BackgroundAxis {
        self.background()
    }

    /// Bright background colors.
    pub const fn bright_background(&self) -> BackgroundAxis {
        self.leaf().bright_background()
    }

    /// Alias of [`Root::bright_background`].
    pub const fn br_bg(&self) -> BackgroundAxis {
        self.bright_background()
    }
}

impl Compose for Root {
    fn selection(&self) -> AttributeSelection {
        self.selection
    }
}

impl StylePicker for Root {
    type Output = StyleLeaf;

    fn pick_style(&self, style: Style) -> StyleLeaf {
        self.styles().pick_style(style)
    }
}

impl ColorPicker for Root {
    type Output = Pen;

    fn pick(&self, color: Color) -> Pen {
        self.leaf().pick(color)
    }
}

/// The root of the chaining API.
///
/// ```
/// use ansipen::prelude::*;
///
/// assert_eq!(clx().red().write("hi"), "\x1b[31mhi\x1b[39m");
/// assert_eq!(clx().write("hi"), "hi");
/// ```
pub const fn clx() -> Root {
    Root::new()
}

/// Regular foreground colors.
pub const fn fg() -> ColorAxis {
    ColorAxis::new(AttributeSelection::EMPTY, Brightness::Regular)
}

/// Bright foreground colors.
pub const fn bright_fg() -> ColorAxis {
    ColorAxis::new(AttributeSelection::EMPTY, Brightness::Bright)
}

/// Regular background colors.
pub const fn bg() -> BackgroundAxis {
    BackgroundAxis::new(AttributeSelection::EMPTY, Brightness::Regular)
}

/// Bright background colors.
pub const fn bright_bg() -> BackgroundAxis {
    BackgroundAxis::new(AttributeSelection::EMPTY, Brightness::Bright)
}

/// Styles.
pub const fn st() -> StyleAxis {
    StyleAxis::new(AttributeSelection::EMPTY)
}
