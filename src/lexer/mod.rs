//! The SDL lexer: a state machine that turns source bytes into a stream of
//! [`Item`]s, handed to a consumer (the parser) over a bounded, blocking
//! queue.
//!
//! [`spawn`] runs the actual [`Scanner`] state machine on a dedicated
//! producer thread via [`std::thread::scope`], which lets the producer
//! borrow the registry and the zero-copy source text directly instead of
//! requiring `'static` + `Arc`/cloning. The scope guarantees the producer
//! thread is joined before the borrowed data goes out of scope, so this is
//! exactly as safe as running the scanner inline while still giving the
//! parser a genuinely concurrent producer.

mod scanner;

pub use scanner::Scanner;

use crate::registry::{Document, Registry};
use crate::token::Item;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::Scope;

/// Queue capacity between producer and consumer. Bounded so the producer
/// applies back-pressure once the parser falls behind by more than one
/// buffered item.
const QUEUE_CAPACITY: usize = 2;

/// The consumer-side handle to a running (or already finished) lexer.
///
/// `next_item` blocks until an item is available. Once the parser aborts, it
/// must call [`Handle::drain`] exactly once so the producer thread is never
/// left blocked on a full queue after the consumer stops reading.
pub struct Handle<'src> {
    receiver: Receiver<Item<'src>>,
}

impl<'src> Handle<'src> {
    /// Blocks until the next item is available. Returns `None` only if the
    /// producer thread terminated without sending a final `EOF`/`ERR` item,
    /// which does not happen in practice but is handled rather than panicking.
    pub fn next_item(&self) -> Option<Item<'src>> {
        self.receiver.recv().ok()
    }

    /// Consumes and discards every remaining item until the channel closes.
    /// Must be called exactly once, and only when aborting a parse early.
    pub fn drain(&self) {
        while self.receiver.recv().is_ok() {}
    }
}

/// Spawns the producer thread for `src` and returns the consumer-side
/// [`Handle`]. `scope` ties the producer's lifetime to the calling function's
/// stack frame (see [`std::thread::scope`]); the parser is expected to run
/// in the same scope as the consumer.
pub fn spawn<'scope, 'src>(
    scope: &'scope Scope<'scope, '_>,
    registry: &'src Registry,
    doc: Document,
    src: &'src str,
) -> Handle<'src>
where
    'src: 'scope,
{
    let (tx, rx) = sync_channel(QUEUE_CAPACITY);
    scope.spawn(move || {
        let mut scanner = Scanner::new(doc, registry, src);
        loop {
            let item = scanner.next_item();
            let terminal = item.is_eof() || item.is_err();
            if tx.send(item).is_err() {
                // Consumer dropped the handle without draining; nothing left
                // to do but stop producing.
                break;
            }
            if terminal {
                break;
            }
        }
        // `tx` drops here regardless of exit path, closing the channel.
    });
    Handle { receiver: rx }
}

/// Spawns a producer thread that replays an already-built `items` sequence
/// instead of scanning source text, giving the parser the identical
/// consumer-side [`Handle`] API regardless of which side built the tokens.
/// Used by [`crate::introspection`], whose tokens have no source text to
/// lex from.
pub fn spawn_items<'scope, 'src>(scope: &'scope Scope<'scope, '_>, items: Vec<Item<'src>>) -> Handle<'src>
where
    'src: 'scope,
{
    let (tx, rx) = sync_channel(QUEUE_CAPACITY);
    scope.spawn(move || {
        for item in items {
            let terminal = item.is_eof() || item.is_err();
            if tx.send(item).is_err() {
                break;
            }
            if terminal {
                break;
            }
        }
    });
    Handle { receiver: rx }
}
