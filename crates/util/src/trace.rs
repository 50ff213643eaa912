//! Operation traces replayed against a tree and a reference model.

/// One step of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Remove(i64),
    Find(i64),
    PopFirst,
    PopLast,
}

impl Op {
    /// The operand, for operations that take one.
    pub fn value(&self) -> Option<i64> {
        match *self {
            Op::Insert(v) | Op::Remove(v) | Op::Find(v) => Some(v),
            Op::PopFirst | Op::PopLast => None,
        }
    }
}

/// Shape of a generated trace.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceConfig {
    /// Number of operations.
    pub len: usize,
    /// Smallest operand (inclusive).
    pub min: i64,
    /// Largest operand (inclusive).
    pub max: i64,
    /// Chance that an operation is an insert. Everything else is split
    /// between removes, finds and pops.
    pub insert_probability: f64,
}

impl Default for TraceConfig {
    /// A small value domain so that inserts and removes keep colliding.
    fn default() -> Self {
        Self {
            len: 1_000,
            min: 0,
            max: 255,
            insert_probability: 0.6,
        }
    }
}
