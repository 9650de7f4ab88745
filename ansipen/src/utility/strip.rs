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

use std::borrow::Cow;

/// Removes Select Graphic Rendition sequences (`ESC [ <digits and ;> m`).
///
/// Anything else, including escape bytes that do not start a complete SGR
/// sequence, is kept. Input without an escape byte is returned borrowed.
///
/// ```
/// use std::borrow::Cow;
/// use ansipen::strip_sgr;
///
/// assert_eq!(strip_sgr("\x1b[1m\x1b[31mhi\x1b[22m\x1b[39m"), "hi");
/// assert!(matches!(strip_sgr("plain"), Cow::Borrowed("plain")));
/// assert_eq!(strip_sgr("\x1b[2Jkeep"), "\x1b[2Jkeep");
/// ```
pub fn strip_sgr(str: &str) -> Cow<'_, str> {
    if !str.contains('\x1b') {
        return Cow::Borrowed(str);
    }

    let bytes = str.as_bytes();
    let mut result = String::with_capacity(str.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(len) = sgr_len(&bytes[i..]) {
            result.push_str(&str[copied..i]);
            i += len;
            copied = i;
        } else {
            i += 1;
        }
    }
    result.push_str(&str[copied..]);

    Cow::Owned(result)
}

/// Length of the SGR sequence at the start of `bytes`, if there is one.
fn sgr_len(bytes: &[u8]) -> Option<usize> {
    let rest = bytes.strip_prefix(b"\x1b[")?;
    let params = rest
        .iter()
        .take_while(|byte| byte.is_ascii_digit() || **byte == b';')
        .count();
    match rest.get(params).copied() {
        Some(b'm') => Some(2 + params + 1),
        _ => None,
    }
}
