/// Directive returned by a frame-loop iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    /// Leave the loop; teardown runs normally.
    Quit,
    /// Terminate the process now, skipping teardown.
    ForceExit,
}

/// What the quit key does.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum QuitKeyPolicy {
    /// Same as closing the window: the loop ends and teardown runs.
    #[default]
    Graceful,
    /// Exit the process with status 0 immediately. Native resources are left
    /// for the OS to reclaim.
    Abrupt,
}

/// Presents the back buffer.
pub trait Present {
    fn present(&self);
}
