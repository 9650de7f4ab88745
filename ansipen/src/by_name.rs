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

//! Lookup-by-name entry points.
//!
//! The lenient functions never fail: an empty or unknown name yields
//! [`Pen::PLAIN`], which writes its input unchanged. The rejection is reported
//! as a `debug` event so it can still be diagnosed. [`lookup`] is the strict
//! variant used underneath.
//!
//! Every shim returns a [`Pen`]. For a single-argument function instead, call
//! [`Pen::into_writer`] on it, e.g. `by_name::foreground(name).into_writer()`.
//!
//! ```
//! use ansipen::by_name;
//!
//! assert_eq!(by_name::foreground("ReD   ").write("x"), by_name::foreground("red").write("x"));
//! assert_eq!(by_name::foreground(" YI0").write("x"), "x");
//! ```

use crate::PenResult;
use crate::attribute::{Axis, Brightness, Color, Style};
use crate::pen::Pen;
use crate::selection::AttributeSelection;
use tracing::debug;

/// Resolves `name` on `axis` or reports why it could not be resolved.
///
/// `brightness` is ignored for [`Axis::Style`].
pub fn lookup(axis: Axis, brightness: Brightness, name: &str) -> PenResult<Pen> {
    let selection = match axis {
        Axis::Style => AttributeSelection::EMPTY.pick_style(name.parse::<Style>()?),
        Axis::Foreground => {
            AttributeSelection::EMPTY.pick_foreground(name.parse::<Color>()?, brightness)
        }
        Axis::Background => {
            AttributeSelection::EMPTY.pick_background(name.parse::<Color>()?, brightness)
        }
    };
    Ok(Pen::new(selection))
}

fn lenient(axis: Axis, brightness: Brightness, name: &str) -> Pen {
    match lookup(axis, brightness, name) {
        Ok(pen) => pen,
        Err(error) => {
            debug!(?axis, ?brightness, %error, "unresolved name, writing without styling");
            Pen::PLAIN
        }
    }
}

/// Regular foreground color by name.
pub fn foreground(name: &str) -> Pen {
    lenient(Axis::Foreground, Brightness::Regular, name)
}

/// Bright foreground color by name.
pub fn bright_foreground(name: &str) -> Pen {
    lenient(Axis::Foreground, Brightness::Bright, name)
}

/// Regular background color by name.
pub fn background(name: &str) -> Pen {
    lenient(Axis::Background, Brightness::Regular, name)
}

/// Bright background color by name.
pub fn bright_background(name: &str) -> Pen {
    lenient(Axis::Background, Brightness::Bright, name)
}

/// Style by name.
pub fn style(name: &str) -> Pen {
    lenient(Axis::Style, Brightness::Regular, name)
}

#[derive(Clone, Copy, Debug, Default)]
struct Pending {
    bright: bool,
    background: bool,
}

impl Pending {
    fn brightness(self) -> Brightness {
        if self.bright {
            Brightness::Bright
        } else {
            Brightness::Regular
        }
    }
}

/// Folds a chain such as `"bold bg.red br.yellow"` into one pen.
///
/// Tokens are separated by whitespace or `.` and read left to right, the same
/// way the chaining API is navigated:
///
/// - a style name selects that style,
/// - `br`/`bright` makes the next color bright,
/// - `bg`/`background` makes the next color a background,
/// - `brbg`/`br_bg`/`bright_background` does both,
/// - a color name selects a foreground or background color and clears the
///   modifiers.
///
/// Later selections replace earlier ones on the same axis. A chain with an
/// unknown token, or one ending in a modifier with no color after it, is
/// rejected as a whole and yields [`Pen::PLAIN`], the same as an unknown name
/// passed to [`foreground`].
///
/// ```
/// use ansipen::Pen;
/// use ansipen::by_name::resolve;
///
/// let pen = resolve("underline.br.bg.red.br.blue");
/// assert_eq!(pen.prefix(), "\x1b[4m\x1b[94m\x1b[101m");
/// assert_eq!(resolve("bold sparkly"), Pen::PLAIN);
/// ```
pub fn resolve(chain: &str) -> Pen {
    match fold_chain(chain) {
        Ok(selection) => Pen::new(selection),
        Err(token) => {
            debug!(token, chain, "unresolved chain, writing without styling");
            Pen::PLAIN
        }
    }
}

/// Returns the offending token when the chain cannot be resolved.
fn fold_chain(chain: &str) -> Result<AttributeSelection, &str> {
    let mut selection = AttributeSelection::EMPTY;
    let mut pending = Pending::default();
    let mut last_modifier = "";

    for token in chain
        .split(|ch: char| ch == '.' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        if let Some(style) = Style::lookup(token) {
            selection = selection.pick_style(style);
        } else if let Some(color) = Color::lookup(token) {
            selection = if pending.background {
                selection.pick_background(color, pending.brightness())
            } else {
                selection.pick_foreground(color, pending.brightness())
            };
            pending = Pending::default();
        } else if is_any(token, &["br", "bright"]) {
            pending.bright = true;
            last_modifier = token;
        } else if is_any(token, &["bg", "background"]) {
            pending.background = true;
            last_modifier = token;
        } else if is_any(
            token,
            &["brbg", "br_bg", "brightbackground", "bright_background"],
        ) {
            pending = Pending {
                bright: true,
                background: true,
            };
            last_modifier = token;
        } else {
            return Err(token);
        }
    }

    if pending.bright || pending.background {
        return Err(last_modifier);
    }
    Ok(selection)
}

fn is_any(token: &str, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(token))
}
