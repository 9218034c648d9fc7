use alsa::seq::{Seq, Event, Addr, PortCap, PortType, PortSubscribe};
use alsa::seq::{EvNote, EventType};
use log::{debug, warn};
use crate::devices::Device;
use crate::error::{Error, Result};
use crate::types::*;
use crate::outputs::Output;

/// An output backed by an ALSA source port subscribed to one destination.
///
/// The sequencer handle is owned, so dropping the output unsubscribes,
/// deletes the source port and closes the client.
pub struct AlsaOutput {
  pub port      : i32,
  pub dest      : Addr,
  pub sequencer : Seq,
}

impl AlsaOutput {
  /// Connect a fresh source port on `sequencer` to `device`.
  pub fn open(sequencer: Seq, device: &Device)
      -> Result<AlsaOutput>
  {
    let opening = |source: alsa::Error| Error::DeviceOpen { name: device.name.clone(), source };

    let port =
      sequencer.create_simple_port(
          c"output",
          PortCap::READ | PortCap::SUBS_READ,
          PortType::MIDI_GENERIC | PortType::APPLICATION)
        .map_err(opening)?;

    let sender = Addr { client: sequencer.client_id().map_err(opening)?, port };
    let mut subscription = PortSubscribe::empty().map_err(opening)?;
    subscription.set_sender(sender);
    subscription.set_dest(device.addr);

    if let Err(error) = sequencer.subscribe_port(&subscription) {
      let _ = sequencer.delete_port(port);
      return Err(opening(error));
    }
    debug!("subscribed {}:{} to {}:{}",
      sender.client, sender.port, device.addr.client, device.addr.port);

    Ok(AlsaOutput { port, dest: device.addr, sequencer })
  }

  fn send(&mut self, event_type: EventType, note: EvNote)
      -> std::result::Result<(), alsa::Error>
  {
    let mut event = Event::new(event_type, &note);
    event.set_source(self.port);
    event.set_subs();
    event.set_direct();
    self.sequencer.event_output_direct(&mut event)?;
    Ok(())
  }
}

impl Output for AlsaOutput
{
  type Error = alsa::Error;

  fn on(&mut self, note: Note, channel: Channel, velocity: Velocity)
      -> std::result::Result<(), Self::Error>
  {
    self.send(EventType::Noteon,
      EvNote { note, channel, velocity, ..Default::default() })
  }

  fn off(&mut self, note: Note, channel: Channel)
      -> std::result::Result<(), Self::Error>
  {
    self.send(EventType::Noteoff,
      EvNote { note, channel, ..Default::default() })
  }
}

impl Drop for AlsaOutput {
  fn drop(&mut self) {
    let release = self.sequencer.client_id()
      .and_then(|client| {
        self.sequencer.unsubscribe_port(Addr { client, port: self.port }, self.dest)
      })
      .and_then(|_| self.sequencer.delete_port(self.port));
    match release {
      Ok(()) => debug!("released port {}", self.port),
      Err(error) => warn!("could not release port {}: {}", self.port, error),
    }
  }
}
