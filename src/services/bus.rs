//! Refresh signal: payload-less, single consumer.
//!
//! Producers (file watcher, actions) send a unit signal; the consumer drops
//! its tree and re-pulls the root listing. Signals are not coalesced.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

#[derive(Clone)]
pub struct RefreshSender {
    tx: Sender<()>,
}

pub struct RefreshReceiver {
    rx: Receiver<()>,
}

pub fn refresh_channel() -> (RefreshSender, RefreshReceiver) {
    let (tx, rx) = mpsc::channel();
    (RefreshSender { tx }, RefreshReceiver { rx })
}

impl RefreshSender {
    /// Returns false once the consumer is gone.
    pub fn send(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl RefreshReceiver {
    pub fn try_recv(&self) -> Result<(), TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> bool {
        self.rx.recv_timeout(timeout).is_ok()
    }

    /// Consumes every pending signal and returns how many there were.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}
