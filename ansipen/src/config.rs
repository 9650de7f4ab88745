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

/// Settings for the logging pass-through shim.
///
/// Only the logging shim reads this. Composition objects always emit the
/// escape sequences for their selection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogConfig {
    /// Inserted between consecutive arguments.
    pub separator: String,
    /// Appended after the last argument.
    pub terminator: String,
    /// Whether text arguments are decorated.
    pub color_mode: ColorMode,
}

impl LogConfig {
    /// Decorate text arguments, space separated, one line per call.
    pub fn enabled() -> LogConfig {
        LogConfig {
            separator: String::from(" "),
            terminator: String::from("\n"),
            color_mode: ColorMode::Basic,
        }
    }

    /// Same layout as [`LogConfig::enabled`] without escape sequences.
    pub fn plain() -> LogConfig {
        LogConfig {
            color_mode: ColorMode::None,
            ..LogConfig::enabled()
        }
    }

    /// Replaces the separator.
    #[must_use]
    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> LogConfig {
        self.separator = separator.into();
        self
    }

    /// Replaces the terminator.
    #[must_use]
    pub fn with_terminator<S: Into<String>>(mut self, terminator: S) -> LogConfig {
        self.terminator = terminator.into();
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

/// Whether escape sequences are written.
///
/// The mode is chosen by the caller. Nothing here probes the terminal; a
/// program that honours `NO_COLOR` picks [`ColorMode::None`] itself.
///
/// ```
/// use ansipen::{ColorMode, LogConfig};
///
/// let config = if std::env::var_os("NO_COLOR").is_some() {
///     LogConfig::plain()
/// } else {
///     LogConfig::enabled()
/// };
/// assert!(matches!(config.color_mode, ColorMode::None | ColorMode::Basic));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorMode {
    /// Plain text, no escape sequences.
    None,
    /// 16-color SGR sequences.
    #[default]
    Basic,
}

impl ColorMode {
    /// `true` if escape sequences should be written.
    pub fn is_ansi(&self) -> bool {
        matches!(self, ColorMode::Basic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let enabled = LogConfig::enabled();
        assert_eq!(enabled.separator, " ");
        assert_eq!(enabled.terminator, "\n");
        assert!(enabled.color_mode.is_ansi());
        assert_eq!(LogConfig::default(), enabled);

        let plain = LogConfig::plain();
        assert!(!plain.color_mode.is_ansi());
        assert_eq!(plain.separator, enabled.separator);
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::plain().with_separator(", ").with_terminator("");
        assert_eq!(config.separator, ", ");
        assert_eq!(config.terminator, "");
        assert_eq!(config.color_mode, ColorMode::None);
    }
}
