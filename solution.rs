/// Largest index whose Fibonacci number still fits in a `u128`.
pub const MAX_INDEX: i64 = 186;

#[derive(thiserror::Error, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FibonacciError {
    #[error("Fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i64),
    #[error("Fibonacci({0}) does not fit in 128 bits (max index is {})", MAX_INDEX)]
    Overflow(i64),
}

/// Returns the `n`-th Fibonacci number, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// Negative indices are rejected rather than extended backwards, and
/// anything past [`MAX_INDEX`] is reported as an overflow instead of
/// wrapping.
pub fn fibonacci(n: i64) -> Result<u128, FibonacciError> {
    if n < 0 {
        return Err(FibonacciError::NegativeIndex(n));
    }
    if n == 0 {
        return Ok(0);
    }

    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev
            .checked_add(curr)
            .ok_or(FibonacciError::Overflow(n))?;
        prev = curr;
        curr = next;
    }
    log::trace!("fibonacci({}) = {}", n, curr);
    Ok(curr)
}

/// Iterator over F(0), F(1), ... that stops after F(MAX_INDEX).
#[derive(Clone, Debug)]
pub struct Sequence {
    current: Option<u128>,
    next: Option<u128>,
}

pub fn sequence() -> Sequence {
    Sequence {
        current: Some(0),
        next: Some(1),
    }
}

impl Iterator for Sequence {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|n| value.checked_add(n));
        Some(value)
    }
}

impl std::iter::FusedIterator for Sequence {}
