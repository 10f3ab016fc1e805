//! The streaming writer engine: turns parse events back into UTF-8 text
//! fragments, each tagged with the structural delimiter that should precede
//! it. The writer never decides on whitespace or indentation; that is a
//! caller policy (see the `sajs-pipe` binary for one such policy).

use crate::event::{EventKind, Flags, ValueKind};
use crate::reset::Reset;
use crate::status::Status;

/// What should precede a [`TextOutput`] fragment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextPrefix {
    None,
    ObjectStart,
    ArrayStart,
    ObjectEnd,
    ArrayEnd,
    MemberColon,
    MemberComma,
    ArrayComma,
}

/// One fragment of output text, with the structural prefix that should
/// precede it and the container depth at the time it was emitted.
///
/// `bytes` is valid until the next call to [`Writer::write_result`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextOutput<'a> {
    pub status: Status,
    pub prefix: TextPrefix,
    pub depth: u32,
    pub bytes: &'a [u8],
}

/// A streaming JSON writer: the symmetric counterpart of [`crate::lexer::Lexer`].
///
/// Like the lexer, the writer never allocates: fragments it constructs
/// itself (delimiters, escape sequences) are written into a small inline
/// buffer and returned as a borrow of `self`.
pub struct Writer {
    depth: u32,
    top_kind: Option<ValueKind>,
    top_flags: Flags,
    top_bytes: [u8; 8],
}

impl Writer {
    /// Create a writer with no containers open.
    pub fn new() -> Writer {
        Writer {
            depth: 0,
            top_kind: None,
            top_flags: Flags::NONE,
            top_bytes: [0; 8],
        }
    }

    fn nothing(&self) -> TextOutput<'static> {
        TextOutput {
            status: Status::Success,
            prefix: TextPrefix::None,
            depth: 0,
            bytes: &[],
        }
    }

    fn emit_byte(&mut self, byte: u8) -> TextOutput<'_> {
        self.top_bytes[0] = byte;
        TextOutput {
            status: Status::Success,
            prefix: TextPrefix::None,
            depth: 0,
            bytes: &self.top_bytes[..1],
        }
    }

    fn emit_sep(&mut self, prefix: TextPrefix, depth: u32, byte: u8) -> TextOutput<'_> {
        self.top_bytes[0] = byte;
        TextOutput {
            status: Status::Success,
            prefix,
            depth,
            bytes: &self.top_bytes[..1],
        }
    }

    fn emit_pair(&mut self, a: u8, b: u8) -> TextOutput<'_> {
        self.top_bytes[0] = a;
        self.top_bytes[1] = b;
        TextOutput {
            status: Status::Success,
            prefix: TextPrefix::None,
            depth: 0,
            bytes: &self.top_bytes[..2],
        }
    }

    fn on_start(&mut self, kind: ValueKind, flags: Flags, head: u8) -> TextOutput<'_> {
        self.top_kind = Some(kind);
        self.top_flags = flags;

        let is_first = flags.contains(Flags::IS_FIRST);
        let prefix = if flags.contains(Flags::IS_MEMBER_VALUE) {
            TextPrefix::MemberColon
        } else if flags.contains(Flags::IS_MEMBER_NAME) {
            if is_first {
                TextPrefix::ObjectStart
            } else {
                TextPrefix::MemberComma
            }
        } else if flags.contains(Flags::IS_ELEMENT) {
            if is_first {
                TextPrefix::ArrayStart
            } else {
                TextPrefix::ArrayComma
            }
        } else {
            TextPrefix::None
        };

        match kind {
            ValueKind::Object => {
                let depth = self.depth;
                self.depth += 1;
                self.emit_sep(prefix, depth, b'{')
            }
            ValueKind::Array => {
                let depth = self.depth;
                self.depth += 1;
                self.emit_sep(prefix, depth, b'[')
            }
            ValueKind::String => self.emit_sep(prefix, self.depth, b'"'),
            ValueKind::Number | ValueKind::Literal => self.emit_sep(prefix, self.depth, head),
        }
    }

    fn on_byte(&mut self, byte: u8) -> TextOutput<'_> {
        if self.top_kind != Some(ValueKind::String) {
            return self.emit_byte(byte);
        }

        match byte {
            b'"' | b'\\' => self.emit_pair(b'\\', byte),
            0x08 => self.emit_pair(b'\\', b'b'),
            0x0C => self.emit_pair(b'\\', b'f'),
            b'\n' => self.emit_pair(b'\\', b'n'),
            b'\r' => self.emit_pair(b'\\', b'r'),
            b'\t' => self.emit_pair(b'\\', b't'),
            _ if byte >= 0x20 => self.emit_byte(byte),
            _ => {
                // Generic control character escape. The upstream C writer
                // computes these hex digits as `'0' + nibble`, which breaks
                // for nibbles 10-15; this emits proper hex digits instead.
                const HEX: &[u8; 16] = b"0123456789ABCDEF";
                let depth = self.depth;
                self.top_bytes[0] = b'\\';
                self.top_bytes[1] = b'u';
                self.top_bytes[2] = b'0';
                self.top_bytes[3] = b'0';
                self.top_bytes[4] = HEX[((byte & 0xF0) >> 4) as usize];
                self.top_bytes[5] = HEX[(byte & 0x0F) as usize];
                TextOutput {
                    status: Status::Success,
                    prefix: TextPrefix::None,
                    depth,
                    bytes: &self.top_bytes[..6],
                }
            }
        }
    }

    fn on_end(&mut self, kind: ValueKind, tail: u8) -> TextOutput<'_> {
        self.top_flags = Flags::NONE;

        match kind {
            ValueKind::Object => {
                self.depth -= 1;
                let depth = self.depth;
                self.emit_sep(TextPrefix::ObjectEnd, depth, b'}')
            }
            ValueKind::Array => {
                self.depth -= 1;
                let depth = self.depth;
                self.emit_sep(TextPrefix::ArrayEnd, depth, b']')
            }
            ValueKind::String => self.emit_byte(b'"'),
            ValueKind::Number | ValueKind::Literal => {
                if tail != 0 {
                    self.emit_byte(tail)
                } else {
                    self.nothing()
                }
            }
        }
    }

    /// Consume one parse event (as produced by [`crate::lexer::Lexer::read_byte`])
    /// and the bytes it carries, returning the text fragment to emit.
    pub fn write_result<'a>(&'a mut self, event: EventKind, bytes: &'a [u8]) -> TextOutput<'a> {
        match event {
            EventKind::Start(kind, flags) => self.on_start(kind, flags, head_byte(flags, bytes)),
            EventKind::End(kind, flags) => self.on_end(kind, head_byte(flags, bytes)),
            EventKind::DoubleEnd(outer_kind) => {
                let inner_kind = self.top_kind.expect("DoubleEnd requires a tracked top kind");
                self.on_end(inner_kind, 0);
                self.on_end(outer_kind, 0)
            }
            EventKind::Bytes => {
                if bytes.len() == 1 {
                    self.on_byte(bytes[0])
                } else {
                    TextOutput {
                        status: Status::Success,
                        prefix: TextPrefix::None,
                        depth: 0,
                        bytes,
                    }
                }
            }
            EventKind::Nothing => self.nothing(),
        }
    }
}

fn head_byte(flags: Flags, bytes: &[u8]) -> u8 {
    if flags.contains(Flags::HAS_BYTES) && !bytes.is_empty() {
        bytes[0]
    } else {
        0
    }
}

impl Default for Writer {
    fn default() -> Self {
        Writer::new()
    }
}

impl Reset for Writer {
    fn reset(&mut self) {
        self.depth = 0;
        self.top_kind = None;
        self.top_flags = Flags::NONE;
        self.top_bytes = [0; 8];
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::Flags;

    #[test]
    fn object_start_with_no_flags_has_no_prefix() {
        let mut w = Writer::new();
        let out = w.write_result(EventKind::start(ValueKind::Object, Flags::NONE), &[]);
        assert_eq!(out.prefix, TextPrefix::None);
        assert_eq!(out.bytes, b"{");
    }

    #[test]
    fn first_member_name_gets_object_start_prefix() {
        let mut w = Writer::new();
        w.write_result(EventKind::start(ValueKind::Object, Flags::NONE), &[]);
        let out = w.write_result(
            EventKind::start(ValueKind::String, Flags::IS_MEMBER_NAME | Flags::IS_FIRST),
            &[],
        );
        assert_eq!(out.prefix, TextPrefix::ObjectStart);
    }

    #[test]
    fn member_value_gets_colon_prefix() {
        let mut w = Writer::new();
        let out = w.write_result(
            EventKind::start(ValueKind::Literal, Flags::IS_MEMBER_VALUE),
            &[b't'],
        );
        assert_eq!(out.prefix, TextPrefix::MemberColon);
        assert_eq!(out.bytes, &[b't']);
    }

    #[test]
    fn control_character_is_escaped_with_correct_hex_digits() {
        let mut w = Writer::new();
        w.write_result(EventKind::start(ValueKind::String, Flags::NONE), &[]);
        let out = w.write_result(EventKind::bytes(), &[0x1F]);
        assert_eq!(out.bytes, b"\\u001F");
    }

    #[test]
    fn quote_and_backslash_are_escaped() {
        let mut w = Writer::new();
        w.write_result(EventKind::start(ValueKind::String, Flags::NONE), &[]);
        assert_eq!(w.write_result(EventKind::bytes(), &[b'"']).bytes, b"\\\"");
        assert_eq!(w.write_result(EventKind::bytes(), &[b'\\']).bytes, b"\\\\");
    }

    #[test]
    fn double_end_emits_outer_close_last() {
        let mut w = Writer::new();
        w.write_result(EventKind::start(ValueKind::Array, Flags::IS_FIRST), &[]);
        w.write_result(
            EventKind::start(ValueKind::Number, Flags::IS_ELEMENT | Flags::IS_FIRST),
            &[b'1'],
        );
        let out = w.write_result(EventKind::double_end(ValueKind::Array), &[]);
        assert_eq!(out.prefix, TextPrefix::ArrayEnd);
        assert_eq!(out.bytes, b"]");
    }

    #[test]
    fn reset_clears_tracked_state() {
        let mut w = Writer::new();
        w.write_result(EventKind::start(ValueKind::Array, Flags::NONE), &[]);
        w.reset();
        let out = w.write_result(EventKind::start(ValueKind::Array, Flags::NONE), &[]);
        assert_eq!(out.depth, 0);
    }
}
