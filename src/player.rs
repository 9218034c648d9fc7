//! The scale, then the chord progression, until interrupted.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use log::{debug, info};
use crate::types::*;

/// C4 up to C5.
pub const SCALE: RangeInclusive<Note> = 60..=72;

pub const C_MAJOR     : [Note; 3] = [60, 64, 67];
pub const A_MINOR     : [Note; 3] = [57, 60, 64];
pub const F_MAJOR     : [Note; 3] = [53, 57, 60];
pub const G_DOMINANT7 : [Note; 4] = [55, 59, 62, 65];

pub const PROGRESSION: [&[Note]; 4] = [&C_MAJOR, &A_MINOR, &F_MAJOR, &G_DOMINANT7];

pub const NOTE_HOLD  : Duration = Duration::from_millis(200);
pub const NOTE_GAP   : Duration = Duration::from_millis(50);
pub const CHORD_HOLD : Duration = Duration::from_millis(1000);
pub const CHORD_GAP  : Duration = Duration::from_millis(200);
pub const PASS_GAP   : Duration = Duration::from_millis(500);

/// Why playback ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
  Interrupted,
}

/// Whether to keep going after a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
  Continue,
  Stop,
}

/// Plays on a borrowed output, blocking in `wait` between events.
pub struct Player<'a, O: Output, W: FnMut(Duration)> {
  output    : &'a mut O,
  channel   : Channel,
  velocity  : Velocity,
  interrupt : &'a AtomicBool,
  wait      : W,
}

impl<'a, O: Output, W: FnMut(Duration)> Player<'a, O, W> {
  pub fn new(output: &'a mut O, channel: Channel, velocity: Velocity,
             interrupt: &'a AtomicBool, wait: W)
      -> Self
  {
    Player { output, channel, velocity, interrupt, wait }
  }

  /// Play the scale once, then the progression forever. Returns only once
  /// `interrupt` is seen set, or on the first failed send.
  ///
  /// Notes still sounding at that point are left for the caller's sweep.
  pub fn play(&mut self)
      -> Result<Stopped, O::Error>
  {
    if self.interrupted() {
      return Ok(Stopped::Interrupted);
    }

    info!("playing scale");
    if self.scale()? == Step::Stop {
      return Ok(Stopped::Interrupted);
    }

    let mut passes = 0usize;
    loop {
      debug!("progression pass {}", passes);
      if self.progression()? == Step::Stop {
        return Ok(Stopped::Interrupted);
      }
      passes += 1;
    }
  }

  fn scale(&mut self)
      -> Result<Step, O::Error>
  {
    for note in SCALE {
      self.output.on(note, self.channel, self.velocity)?;
      if self.pause(NOTE_HOLD) == Step::Stop {
        return Ok(Step::Stop);
      }
      self.output.off(note, self.channel)?;
      if self.pause(NOTE_GAP) == Step::Stop {
        return Ok(Step::Stop);
      }
    }
    Ok(Step::Continue)
  }

  fn progression(&mut self)
      -> Result<Step, O::Error>
  {
    for chord in PROGRESSION.iter() {
      if self.chord(chord)? == Step::Stop {
        return Ok(Step::Stop);
      }
    }
    Ok(self.pause(PASS_GAP))
  }

  fn chord(&mut self, chord: &[Note])
      -> Result<Step, O::Error>
  {
    for &note in chord {
      self.output.on(note, self.channel, self.velocity)?;
    }
    if self.pause(CHORD_HOLD) == Step::Stop {
      return Ok(Step::Stop);
    }
    for &note in chord {
      self.output.off(note, self.channel)?;
    }
    Ok(self.pause(CHORD_GAP))
  }

  fn pause(&mut self, duration: Duration) -> Step {
    (self.wait)(duration);
    if self.interrupted() { Step::Stop } else { Step::Continue }
  }

  fn interrupted(&self) -> bool {
    self.interrupt.load(Ordering::SeqCst)
  }
}
