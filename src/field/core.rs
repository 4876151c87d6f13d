/// Field lexing for tab-separated input.
///
/// Works over the whole input held in one buffer (stdin is read up front),
/// using memchr to find the next tab/newline instead of a byte-at-a-time loop.
/// Carriage returns are dropped wherever they appear, so PC-style `\r\n`
/// and Unix-style `\n` line endings read identically.
use memchr::{memchr, memchr2};

pub const TAB: u8 = b'\t';
pub const NEWLINE: u8 = b'\n';
pub const CR: u8 = b'\r';

/// What ended a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A tab: more fields follow on this line.
    FieldEnd,
    /// A newline.
    LineEnd,
    /// End of input.
    StreamEnd,
}

impl Terminator {
    /// True for newline and end of input.
    #[inline]
    pub fn ends_record(self) -> bool {
        matches!(self, Terminator::LineEnd | Terminator::StreamEnd)
    }
}

/// One field as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRead {
    pub value: Vec<u8>,
    pub terminator: Terminator,
    /// Bytes past the length limit were dropped.
    pub truncated: bool,
}

/// Sequential field reader over an in-memory input buffer.
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
    max_len: usize,
}

impl<'a> FieldReader<'a> {
    /// `max_len` is the longest field value kept; longer values are truncated.
    pub fn new(data: &'a [u8], max_len: usize) -> Self {
        FieldReader {
            data,
            pos: 0,
            max_len,
        }
    }

    /// True once every byte of the input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read the next field.
    ///
    /// The terminating tab or newline is consumed but not stored. At end of
    /// input every further call returns an empty value with `StreamEnd`.
    pub fn next_field(&mut self) -> FieldRead {
        let rest = &self.data[self.pos.min(self.data.len())..];
        let (end, terminator) = match memchr2(TAB, NEWLINE, rest) {
            Some(i) if rest[i] == TAB => (i, Terminator::FieldEnd),
            Some(i) => (i, Terminator::LineEnd),
            None => (rest.len(), Terminator::StreamEnd),
        };
        let raw = &rest[..end];
        self.pos += match terminator {
            Terminator::StreamEnd => end,
            _ => end + 1,
        };

        let (value, truncated) = self.collect(raw);
        FieldRead {
            value,
            terminator,
            truncated,
        }
    }

    /// Copy field bytes, skipping CR and stopping storage at `max_len`.
    #[inline]
    fn collect(&self, raw: &[u8]) -> (Vec<u8>, bool) {
        if memchr(CR, raw).is_none() {
            let kept = raw.len().min(self.max_len);
            return (raw[..kept].to_vec(), raw.len() > kept);
        }
        let mut value = Vec::with_capacity(raw.len().min(self.max_len));
        let mut truncated = false;
        for &b in raw.iter().filter(|&&b| b != CR) {
            if value.len() < self.max_len {
                value.push(b);
            } else {
                truncated = true;
            }
        }
        (value, truncated)
    }
}
