use std::fmt::Debug;

pub type Note     = u8;
pub type Channel  = u8;
pub type Velocity = u8;

/// Every pitch a MIDI note message can address.
pub const PITCHES: std::ops::RangeInclusive<Note> = 0..=127;

pub trait Output
{
  type Error: Debug;

  fn on(&mut self, note: Note, channel: Channel, velocity: Velocity)
      -> Result<(), Self::Error>;

  fn off(&mut self, note: Note, channel: Channel)
      -> Result<(), Self::Error>;

  /// Turn off every pitch on `channel`, whether or not it is sounding.
  fn silence(&mut self, channel: Channel)
      -> Result<(), Self::Error>
  {
    for note in PITCHES {
      self.off(note, channel)?;
    }
    Ok(())
  }
}
