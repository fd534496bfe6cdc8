//! Character stream plumbing.
//!
//! Anything that can take one character at a time implements [`CharSink`]; [`TextWriter`]
//! layers `core::fmt::Write` on top so `write!` works without losing the sink's error.

use core::fmt;

pub trait CharSink {
    type Error;

    /// Consumes one character.
    fn put_char(&mut self, c: u8) -> Result<(), Self::Error>;

    fn put_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.put_char(byte)?;
        }
        Ok(())
    }
}

/// `core::fmt::Write` adapter over a [`CharSink`].
///
/// `fmt::Write` can only report `fmt::Error`, so the first sink error is stashed and can be
/// taken back with [`TextWriter::finish`].
pub struct TextWriter<'a, S: CharSink> {
    sink: &'a mut S,
    error: Option<S::Error>,
}

impl<'a, S: CharSink> TextWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, error: None }
    }

    /// Returns the sink error that aborted formatting, if any.
    pub fn finish(self) -> Result<(), S::Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<S: CharSink> fmt::Write for TextWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.sink.put_str(s).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Formats `args` into `sink`.
///
/// A sink error wins over the `fmt::Error` it caused; a failure with no sink error comes from
/// a `Display` impl and is converted with `From<fmt::Error>`.
pub fn write_fmt<S>(sink: &mut S, args: fmt::Arguments<'_>) -> Result<(), S::Error>
where
    S: CharSink,
    S::Error: From<fmt::Error>,
{
    let mut writer = TextWriter::new(sink);
    let result = fmt::Write::write_fmt(&mut writer, args);
    writer.finish()?;
    result.map_err(From::from)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use core::fmt::Write;
    use std::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum SinkError {
        Full(usize),
        Format,
    }

    impl From<fmt::Error> for SinkError {
        fn from(_: fmt::Error) -> Self {
            SinkError::Format
        }
    }

    #[derive(Default)]
    struct Recorder {
        chars: Vec<u8>,
        fail_after: Option<usize>,
    }

    impl CharSink for Recorder {
        type Error = SinkError;

        fn put_char(&mut self, c: u8) -> Result<(), SinkError> {
            if self.fail_after == Some(self.chars.len()) {
                return Err(SinkError::Full(self.chars.len()));
            }
            self.chars.push(c);
            Ok(())
        }
    }

    #[test]
    fn formats_into_sink() {
        let mut sink = Recorder::default();
        assert_eq!(write_fmt(&mut sink, format_args!("t={}C\n", 21)), Ok(()));
        assert_eq!(sink.chars, b"t=21C\n");
    }

    #[test]
    fn keeps_first_sink_error() {
        let mut sink = Recorder {
            fail_after: Some(3),
            ..Default::default()
        };
        assert_eq!(
            write_fmt(&mut sink, format_args!("{}{}", "ab", "cdef")),
            Err(SinkError::Full(3))
        );
        assert_eq!(sink.chars, b"abc");
    }

    #[test]
    fn writer_refuses_after_error() {
        let mut sink = Recorder {
            fail_after: Some(0),
            ..Default::default()
        };
        let mut writer = TextWriter::new(&mut sink);
        assert!(writer.write_str("x").is_err());
        assert!(writer.write_str("y").is_err());
        assert_eq!(writer.finish(), Err(SinkError::Full(0)));
    }

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn display_failure_is_reported() {
        let mut sink = Recorder::default();
        assert_eq!(
            write_fmt(&mut sink, format_args!("a{}b", Broken)),
            Err(SinkError::Format)
        );
        assert_eq!(sink.chars, b"a");
    }
}
