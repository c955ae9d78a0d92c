//! StringBuilder: UTF-8 text accumulated in a `DynArray<u8>`.
//!
//! Shares the array's growth policy. Formatted appends measure the output
//! first and reserve once, so a single `append_fmt` never reallocates more
//! than one time for well-behaved `Display` impls.

use crate::dyn_array::DynArray;
use crate::error::Error;
use core::fmt;

/// Appends formatted text to a `StringBuilder`, returning the number of
/// bytes written.
///
/// ```
/// use simple_collections::{appendf, StringBuilder};
///
/// let mut sb = StringBuilder::new();
/// appendf!(sb, "{}-{}", 1, "two").unwrap();
/// assert_eq!(sb.as_str(), "1-two");
/// ```
#[macro_export]
macro_rules! appendf {
    ($sb:expr, $($arg:tt)*) => {
        $sb.append_fmt(::core::format_args!($($arg)*))
    };
}

#[derive(Debug, Clone, Default)]
pub struct StringBuilder {
    buf: DynArray<u8>,
}

/// Sink that only counts the bytes it is given.
struct ByteCounter(usize);

impl fmt::Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = self.0.saturating_add(s.len());
        Ok(())
    }
}

impl StringBuilder {
    pub const fn new() -> Self {
        Self {
            buf: DynArray::new(),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: the buffer only ever receives whole `&str`s and is only
        // truncated back to lengths it had between appends, so it is UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.buf.as_slice()) }
    }

    /// Appends `s`, returning the number of bytes appended.
    pub fn append_str(&mut self, s: &str) -> Result<usize, Error> {
        self.buf.extend_from_slice(s.as_bytes())?;
        Ok(s.len())
    }

    /// Appends formatted `args`, returning the number of bytes appended.
    ///
    /// On error nothing is appended.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        if let Some(s) = args.as_str() {
            return self.append_str(s);
        }

        let mut counter = ByteCounter(0);
        fmt::write(&mut counter, args).map_err(|_| Error::Format)?;
        let start = self.len();
        let needed = start.checked_add(counter.0).ok_or(Error::CapacityOverflow)?;
        self.buf.reserve(needed)?;

        let mut sink = Sink {
            sb: self,
            error: None,
        };
        if fmt::write(&mut sink, args).is_err() {
            let error = sink.error.take().unwrap_or(Error::Format);
            self.buf.truncate(start);
            return Err(error);
        }
        Ok(self.len() - start)
    }

    /// Empties the builder, keeping its allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Empties the builder and releases its allocation.
    pub fn clear_and_release(&mut self) {
        self.buf.clear_and_release();
    }
}

/// `fmt::Write` adapter that keeps the crate error `fmt::Error` would lose.
struct Sink<'a> {
    sb: &'a mut StringBuilder,
    error: Option<Error>,
}

impl fmt::Write for Sink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sb.append_str(s).map(|_| ()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
