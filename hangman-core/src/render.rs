use hangman_types::SessionState;

/// Presentation callbacks. The controller calls these after every change it
/// commits.
pub trait Renderer {
    fn on_progress_changed(&mut self, revealed: &[char]);
    fn on_miss_changed(&mut self, miss_count: u32);
    /// `state` is always `Won` or `Lost`; the word is only passed on a loss.
    fn on_outcome(&mut self, state: SessionState, revealed_word: Option<&str>);
}

/// Discards everything. Handy for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_progress_changed(&mut self, _revealed: &[char]) {}

    fn on_miss_changed(&mut self, _miss_count: u32) {}

    fn on_outcome(&mut self, _state: SessionState, _revealed_word: Option<&str>) {}
}
