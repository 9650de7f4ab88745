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

//! Logging pass-through: decorate the text arguments of a variadic call and
//! forward the whole line to an output stream.

use crate::PenResult;
use crate::config::LogConfig;
use crate::pen::Pen;
use std::borrow::Cow;
use std::fmt;
use std::io;
use tracing::trace;

/// One argument of a log call.
///
/// Text and numbers are decorated by the pen. Anything else is formatted with
/// `Debug` and forwarded untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum LogArg<'a> {
    /// Decorated with the pen.
    Text(Cow<'a, str>),
    /// Forwarded as is.
    Raw(String),
}

impl LogArg<'static> {
    /// Formats `value` with `Debug` into a pass-through argument.
    pub fn raw<T: fmt::Debug + ?Sized>(value: &T) -> LogArg<'static> {
        LogArg::Raw(format!("{:?}", value))
    }
}

impl<'a> From<&'a str> for LogArg<'a> {
    fn from(text: &'a str) -> Self {
        LogArg::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for LogArg<'a> {
    fn from(text: &'a String) -> Self {
        LogArg::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for LogArg<'_> {
    fn from(text: String) -> Self {
        LogArg::Text(Cow::Owned(text))
    }
}

macro_rules! numeric_log_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg<'_> {
                fn from(value: $ty) -> Self {
                    LogArg::Text(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

numeric_log_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Renders a log line without writing it.
pub fn render_line<'a, I, A>(pen: Pen, config: &LogConfig, args: I) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<LogArg<'a>>,
{
    let mut line = String::new();
    for (index, arg) in args.into_iter().enumerate() {
        if index > 0 {
            line.push_str(&config.separator);
        }
        let arg: LogArg<'a> = arg.into();
        match arg {
            LogArg::Text(text) if config.color_mode.is_ansi() => line.push_str(&pen.compose(text)),
            LogArg::Text(text) => line.push_str(&text),
            LogArg::Raw(raw) => line.push_str(&raw),
        }
    }
    line.push_str(&config.terminator);
    line
}

/// Decorates the text arguments with `pen` and writes one line to `writer`.
///
/// An empty argument list writes only the terminator.
pub fn log_to<'a, W, I, A>(pen: Pen, writer: &mut W, config: &LogConfig, args: I) -> PenResult<()>
where
    W: io::Write,
    I: IntoIterator<Item = A>,
    A: Into<LogArg<'a>>,
{
    let line = render_line(pen, config, args);
    trace!(bytes = line.len(), "writing log line");
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
