use futures::Stream;
use log::debug;
use termion::{event::Key, input::TermRead};
use tokio::{sync::mpsc::unbounded_channel, task::spawn_blocking};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Key events from stdin (put the terminal in raw mode first).
///
/// Reading stdin blocks, so it happens on a blocking thread that forwards keys
/// until stdin closes or nobody is listening anymore.
pub fn user_input() -> impl Stream<Item = Key> + Unpin {
  let (key_tx, key_rx) = unbounded_channel();

  spawn_blocking(move || {
    for key in std::io::stdin().keys() {
      match key {
        Ok(key) => if key_tx.send(key).is_err() { return },
        Err(e) => debug!("unreadable key event: {}", e)
      }
    }
  });

  UnboundedReceiverStream::new(key_rx)
}
