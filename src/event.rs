/// Kind of JSON value.
///
/// A JSON value is an object, array, string, number, or one of the three
/// special literals `false`, `null`, and `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueKind {
    Object = 1,
    Array = 2,
    String = 3,
    Number = 4,
    Literal = 5,
}

/// Flags describing an event and/or a value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const IS_MEMBER_NAME: Flags = Flags(1 << 0);
    pub const IS_MEMBER_VALUE: Flags = Flags(1 << 1);
    pub const IS_ELEMENT: Flags = Flags(1 << 2);
    pub const IS_FIRST: Flags = Flags(1 << 3);
    pub const HAS_BYTES: Flags = Flags(1 << 4);

    pub const fn contains(self, other: Flags) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

/// The event produced by a single lexer step.
///
/// `Start`, `End`, and `DoubleEnd` carry the [`ValueKind`] of the value they
/// open or close directly in the variant, so a [`crate::writer::Writer`] can
/// never be handed a start or end event with no kind to act on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The input byte was consumed with no observable effect, e.g.
    /// whitespace or an intermediate escape character.
    Nothing,

    /// A value has begun.
    Start(ValueKind, Flags),

    /// The current value has ended.
    End(ValueKind, Flags),

    /// A single input byte ended both the innermost value (a number or
    /// literal) and its containing array or object. The carried kind is the
    /// container's; the kind of the value it closed is implicit.
    DoubleEnd(ValueKind),

    /// One UTF-8 character (1-4 bytes) of a string, number, or literal body.
    Bytes,
}

impl EventKind {
    pub const NOTHING: EventKind = EventKind::Nothing;

    pub const fn start(kind: ValueKind, flags: Flags) -> EventKind {
        EventKind::Start(kind, flags)
    }

    pub const fn end(kind: ValueKind, flags: Flags) -> EventKind {
        EventKind::End(kind, flags)
    }

    pub const fn double_end(outer_kind: ValueKind) -> EventKind {
        EventKind::DoubleEnd(outer_kind)
    }

    pub const fn bytes() -> EventKind {
        EventKind::Bytes
    }
}
