use std::ops::{Deref, DerefMut};
use log::{debug, warn};
use crate::types::*;

pub mod alsa;

#[cfg(test)] pub mod dummy;

pub use self::alsa::AlsaOutput;
pub use crate::types::Output;

/// An open output that is swept silent and then released when dropped.
///
/// Dropping happens on every way out of a run, including an interrupt or an
/// error halfway through a chord, so no note is left hanging.
pub struct Held<O: Output> {
  output  : Option<O>,
  channel : Channel,
}

impl<O: Output> Held<O> {
  pub fn new(output: O, channel: Channel) -> Self {
    Held { output: Some(output), channel }
  }
}

impl<O: Output> Deref for Held<O> {
  type Target = O;

  fn deref(&self) -> &O {
    self.output.as_ref().expect("output is only taken on drop")
  }
}

impl<O: Output> DerefMut for Held<O> {
  fn deref_mut(&mut self) -> &mut O {
    self.output.as_mut().expect("output is only taken on drop")
  }
}

impl<O: Output> Drop for Held<O> {
  fn drop(&mut self) {
    if let Some(mut output) = self.output.take() {
      debug!("silencing channel {}", self.channel);
      if let Err(error) = output.silence(self.channel) {
        warn!("could not silence channel {}: {:?}", self.channel, error);
      }
      // the output releases its device as it goes out of scope here
    }
  }
}
