use thiserror::Error;

/// Status of a single lexer or writer step.
///
/// Every step of [`Lexer::read_byte`](crate::lexer::Lexer::read_byte) or
/// [`Writer::write_result`](crate::writer::Writer::write_result) returns one
/// of these alongside its event. Only [`Status::Success`] and
/// [`Status::Failure`] are non-erroneous; [`Status::Retry`] is an internal
/// signal that must never escape `read_byte`.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// The step completed normally.
    #[error("Success")]
    Success = 0,

    /// Input ended cleanly after a complete top-level value.
    #[error("Non-fatal failure")]
    Failure = 1,

    /// Internal: a number or literal was delimited but the delimiter byte
    /// itself has not yet been consumed. Never observed outside the lexer.
    #[error("Reached end of value")]
    Retry = 2,

    /// Input ended in the middle of a value.
    #[error("Unexpected end of input")]
    NoData = 3,

    /// The nesting stack is full.
    #[error("Stack overflow")]
    Overflow = 4,

    /// The nesting stack underflowed (internal invariant violation).
    #[error("Stack underflow")]
    Underflow = 5,

    /// Writing an output fragment failed.
    #[error("Failed write")]
    BadWrite = 6,

    /// Expected ':'.
    #[error("Expected ':'")]
    ExpectedColon = 7,

    /// Expected ','.
    #[error("Expected ','")]
    ExpectedComma = 8,

    /// Expected a UTF-8 continuation byte.
    #[error("Expected continuation byte")]
    ExpectedContinuation = 9,

    /// Expected '.'.
    #[error("Expected '.'")]
    ExpectedDecimal = 10,

    /// Expected a digit.
    #[error("Expected digit")]
    ExpectedDigit = 11,

    /// Expected '+', '-', or a digit.
    #[error("Expected '+', '-', or digit")]
    ExpectedExponent = 12,

    /// Expected 0-9, A-F, or a-f.
    #[error("Expected 0-9 or A-F or a-f")]
    ExpectedHex = 13,

    /// Expected "false", "null", or "true".
    #[error("Expected false, null, or true")]
    ExpectedLiteral = 14,

    /// Expected a printable character.
    #[error("Expected printable character")]
    ExpectedPrintable = 15,

    /// Expected '"'.
    #[error("Expected '\"'")]
    ExpectedQuote = 16,

    /// Expected a recognized string escape.
    #[error("Expected string escape")]
    ExpectedStringEscape = 17,

    /// Expected a UTF-16 high surrogate escape.
    #[error("Expected high surrogate escape")]
    ExpectedUtf16Hi = 18,

    /// Expected a UTF-16 low surrogate escape.
    #[error("Expected low surrogate escape")]
    ExpectedUtf16Lo = 19,

    /// Expected a valid UTF-8 byte.
    #[error("Expected valid UTF-8 byte")]
    ExpectedUtf8 = 20,

    /// Expected a value.
    #[error("Expected value")]
    ExpectedValue = 21,
}

impl Status {
    /// True if this status represents a syntactic rejection (an `ExpectedX`
    /// variant), as opposed to a structural or successful status.
    pub fn is_syntax_error(self) -> bool {
        matches!(
            self,
            Status::ExpectedColon
                | Status::ExpectedComma
                | Status::ExpectedContinuation
                | Status::ExpectedDecimal
                | Status::ExpectedDigit
                | Status::ExpectedExponent
                | Status::ExpectedHex
                | Status::ExpectedLiteral
                | Status::ExpectedPrintable
                | Status::ExpectedQuote
                | Status::ExpectedStringEscape
                | Status::ExpectedUtf16Hi
                | Status::ExpectedUtf16Lo
                | Status::ExpectedUtf8
                | Status::ExpectedValue
        )
    }
}
