use std::cell::RefCell;
use std::rc::Rc;
use crate::types::*;
use crate::outputs::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
  On(Note, Channel, Velocity),
  Off(Note, Channel),
  Released,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// An output that writes down everything sent to it.
pub struct Recorder {
  log   : Log,
  limit : Option<usize>,
}

impl Recorder {
  pub fn new() -> (Recorder, Log) {
    let log = Log::default();
    (Recorder { log: log.clone(), limit: None }, log)
  }

  /// Accept `limit` events, then fail every send after that.
  pub fn failing_after(limit: usize) -> (Recorder, Log) {
    let log = Log::default();
    (Recorder { log: log.clone(), limit: Some(limit) }, log)
  }

  fn record(&mut self, event: Event) -> Result<(), ()> {
    let mut log = self.log.borrow_mut();
    if self.limit.map_or(false, |limit| log.len() >= limit) {
      return Err(());
    }
    log.push(event);
    Ok(())
  }
}

impl Output for Recorder
{
  type Error = ();

  fn on(&mut self, note: Note, channel: Channel, velocity: Velocity)
      -> Result<(), Self::Error>
  {
    self.record(Event::On(note, channel, velocity))
  }

  fn off(&mut self, note: Note, channel: Channel)
      -> Result<(), Self::Error>
  {
    self.record(Event::Off(note, channel))
  }
}

impl Drop for Recorder {
  fn drop(&mut self) {
    self.log.borrow_mut().push(Event::Released);
  }
}
