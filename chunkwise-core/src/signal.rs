//! Visitor control signals

use core::ops::ControlFlow;

/// What a chunk visitor wants to happen next.
///
/// `Stop` ends iteration successfully; `Fail` ends it and hands the payload
/// back to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signal<E> {
    /// Visit the next chunk
    #[default]
    Continue,
    /// Stop iterating; the overall outcome is success
    Stop,
    /// Stop iterating and report this failure
    Fail(E),
}

impl<E> From<ControlFlow<()>> for Signal<E> {
    fn from(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => Signal::Continue,
            ControlFlow::Break(()) => Signal::Stop,
        }
    }
}

/// `Ok(())` continues, `Err` fails.
impl<E> From<Result<(), E>> for Signal<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Signal::Continue,
            Err(err) => Signal::Fail(err),
        }
    }
}
