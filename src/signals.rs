//! In-process UI signals.
//!
//! A small broadcast channel for requests that cross component boundaries.
//! Any component holding a [`SignalSender`] may raise a signal; listeners
//! drain their receiver once per loop iteration.

use tokio::sync::broadcast;

/// Capacity of the signal channel. Signals are rare and drained every frame.
pub const SIGNAL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    /// Leave the resume view for the editor.
    SwitchToEditor,
}

/// Type alias for the signal sender.
pub type SignalSender = broadcast::Sender<UiSignal>;

/// Create a new signal channel.
pub fn create_signal_channel() -> (SignalSender, broadcast::Receiver<UiSignal>) {
    broadcast::channel(SIGNAL_CAPACITY)
}

/// Raise `signal`. Having no listener is not an error.
pub fn raise(tx: &SignalSender, signal: UiSignal) {
    if tx.send(signal).is_err() {
        tracing::debug!(?signal, "signal raised with no listeners");
    }
}

/// Take every signal currently queued on `rx` without waiting.
pub fn drain(rx: &mut broadcast::Receiver<UiSignal>) -> Vec<UiSignal> {
    let mut signals = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(signal) => signals.push(signal),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                tracing::warn!("signal listener lagged, missed {} signals", n);
            }
            Err(broadcast::error::TryRecvError::Empty)
            | Err(broadcast::error::TryRecvError::Closed) => break,
        }
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_collects_in_order() {
        let (tx, mut rx) = create_signal_channel();
        raise(&tx, UiSignal::SwitchToEditor);
        raise(&tx, UiSignal::SwitchToEditor);
        assert_eq!(drain(&mut rx).len(), 2);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_raise_without_listener_is_quiet() {
        let (tx, rx) = create_signal_channel();
        drop(rx);
        raise(&tx, UiSignal::SwitchToEditor);
    }

    #[test]
    fn test_every_subscriber_sees_signal() {
        let (tx, mut first) = create_signal_channel();
        let mut second = tx.subscribe();
        raise(&tx, UiSignal::SwitchToEditor);
        assert_eq!(drain(&mut first), vec![UiSignal::SwitchToEditor]);
        assert_eq!(drain(&mut second), vec![UiSignal::SwitchToEditor]);
    }
}
