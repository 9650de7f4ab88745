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

//! Error types for the ansipen crate.
//!
//! The styling core is total and never fails. Errors only surface from the
//! strict name lookups and from the logging shim when its sink rejects a write.

/// Result type alias for operations that may fail with a [`PenError`].
pub type PenResult<T> = Result<T, PenError>;

/// Errors that can occur when resolving names or writing styled output.
#[derive(Debug, thiserror::Error)]
pub enum PenError {
    /// The name does not match any of the eight ANSI colors.
    ///
    /// The rejected input is kept verbatim, before trimming.
    #[error("Unknown color name: {0:?}")]
    UnknownColor(String),

    /// The name does not match any known text style.
    #[error("Unknown style name: {0:?}")]
    UnknownStyle(String),

    /// The log sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
