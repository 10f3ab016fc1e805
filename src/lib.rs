//! # sajs
//!
//! A streaming, allocation-free, SAX-style JSON lexer and writer.
//!
//! The lexer consumes one input byte at a time and produces [`event::EventKind`]s;
//! the [`writer::Writer`] consumes those events (from this lexer or any other
//! producer) and turns them back into UTF-8 text fragments tagged with
//! structural prefixes. Neither side ever builds a document object model or
//! parses numbers into native types: numbers and string content pass through
//! as raw bytes, leaving accumulation, number formatting, and indentation
//! policy to the caller.
//!
//! ## Examples
//!
//! ### Reading events from a byte slice
//!
//! ```
//! use sajs::lexer::Lexer;
//! use sajs::event::EventKind;
//!
//! let json = br#"{"name": "Elvis"}"#;
//!
//! let mut stack = [Default::default(); 64];
//! let mut lexer = Lexer::new(&mut stack).unwrap();
//!
//! let mut depth = 0i32;
//! for &b in json {
//!     let r = lexer.read_byte(Some(b));
//!     match r.event {
//!         EventKind::Start(_, _) => depth += 1,
//!         EventKind::End(_, _) => depth -= 1,
//!         EventKind::DoubleEnd(_) => depth -= 2,
//!         _ => {}
//!     }
//! }
//! assert_eq!(depth, 0);
//! ```
//!
//! ### Reformatting a document with the writer
//!
//! ```
//! use sajs::lexer::Lexer;
//! use sajs::writer::{TextPrefix, Writer};
//!
//! let json = br#"[1,2,3]"#;
//! let mut stack = [Default::default(); 64];
//! let mut lexer = Lexer::new(&mut stack).unwrap();
//! let mut writer = Writer::new();
//! let mut out = Vec::new();
//!
//! for &b in json {
//!     let r = lexer.read_byte(Some(b));
//!     let text = writer.write_result(r.event, lexer.last_bytes());
//!     // The writer only tags fragments with a separator kind; turning
//!     // that into literal punctuation is the caller's job.
//!     if text.prefix == TextPrefix::ArrayComma {
//!         out.push(b',');
//!     }
//!     out.extend_from_slice(text.bytes);
//! }
//!
//! assert_eq!(out, b"[1,2,3]");
//! ```
pub mod event;
pub mod lexer;
mod reset;
pub mod status;
pub mod writer;

pub use event::{EventKind, Flags, ValueKind};
pub use lexer::Lexer;
pub use reset::Reset;
pub use status::Status;
pub use writer::Writer;
