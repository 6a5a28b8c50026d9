/// Per-frame counter pushed to the active program as its time input.
///
/// Starts at 0 and advances by one per completed frame. The value is an `i32`
/// because it is uploaded with a single-integer uniform; overflow wraps.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TickCounter {
    value: i32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Advances the counter and returns the new value.
    pub fn advance(&mut self) -> i32 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}
