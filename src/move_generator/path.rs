use std::fmt;

use common::coordinates::Square;

/// One cell along a path, with the cell jumped to reach it (if any).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Step {
    pub square: Square,
    pub captured: Option<Square>,
}

impl Step {
    pub const fn new(square: Square, captured: Option<Square>) -> Self {
        Self { square, captured }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// A complete root-to-leaf route for one piece in one turn. The first step
/// is always the piece's origin and never carries a capture.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Path(Vec<Step>);

impl Path {
    pub fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "a path starts at its origin");
        Self(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn origin(&self) -> Square {
        self.0[0].square
    }

    pub fn destination(&self) -> Square {
        self.0[self.0.len() - 1].square
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.0.get(index)
    }

    pub fn has_capture(&self) -> bool {
        self.0.iter().any(Step::is_capture)
    }

    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.0.iter().filter_map(|step| step.captured)
    }

    pub(crate) fn from_reversed(mut steps: Vec<Step>) -> Self {
        steps.reverse();
        Self::new(steps)
    }
}

impl fmt::Display for Path {
    /// Quiet steps are joined with `-`, jumps with `x`: `c3-d4`, `c3xe5xc7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin())?;
        for step in self.0.iter().skip(1) {
            let separator = if step.is_capture() { 'x' } else { '-' };
            write!(f, "{}{}", separator, step.square)?;
        }
        Ok(())
    }
}
