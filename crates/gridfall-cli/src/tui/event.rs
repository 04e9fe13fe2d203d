use crossterm::event::Event;

/// Events produced by the [`EventLoop`](super::event_loop::EventLoop).
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Time to advance application logic.
    Tick,
    /// Time to redraw the screen.
    Render,
    /// A terminal event from crossterm.
    Crossterm(Event),
}
