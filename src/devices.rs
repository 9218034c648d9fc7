//! Finding the sequencer port to play on.

use alsa::seq::{Seq, Addr, ClientIter, PortIter, PortCap};
use indexmap::IndexMap;
use crate::error::{Error, Result};

/// A sequencer port as seen during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
  /// `"<client>:<port>"`
  pub name   : String,
  pub client : String,
  pub addr   : Addr,
  /// accepts subscribed writes, i.e. we can send notes to it
  pub output : bool,
  pub input  : bool,
}

/// The outcome of picking a device out of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
  pub index     : usize,
  /// whether the preference marker matched, as opposed to a fallback
  pub preferred : bool,
}

/// Walk every port of every client but our own, in enumeration order.
pub fn enumerate(sequencer: &Seq)
    -> Result<Vec<Device>>
{
  let own = sequencer.client_id()?;
  let mut devices = Vec::new();

  for client in ClientIter::new(sequencer) {
    let id = client.get_client();
    if id == own {
      continue;
    }
    let client_name = client.get_name()?.to_owned();

    for port in PortIter::new(sequencer, id) {
      let capability = port.get_capability();
      devices.push(Device {
        name   : format!("{}:{}", client_name, port.get_name()?),
        client : client_name.clone(),
        addr   : port.addr(),
        output : capability.contains(PortCap::WRITE | PortCap::SUBS_WRITE),
        input  : capability.contains(PortCap::READ | PortCap::SUBS_READ),
      });
    }
  }

  Ok(devices)
}

/// Pick the first output whose name contains `marker`, else the first
/// output at all. `None` if nothing can be played on.
pub fn select(devices: &[Device], marker: &str)
    -> Option<Selection>
{
  let mut fallback = None;
  for (index, device) in devices.iter().enumerate().filter(|(_, d)| d.output) {
    if device.name.contains(marker) {
      return Some(Selection { index, preferred: true });
    }
    fallback = fallback.or(Some(index));
  }
  fallback.map(|index| Selection { index, preferred: false })
}

/// Take the device at `index` as asked for on the command line.
pub fn pick(devices: &[Device], index: usize)
    -> Result<Selection>
{
  match devices.get(index) {
    Some(device) if device.output =>
      Ok(Selection { index, preferred: true }),
    Some(device) =>
      Err(Error::InvalidArgument(
        format!("device {} ({}) does not accept output", index, device.name))),
    None =>
      Err(Error::InvalidArgument(
        format!("no device {}; {} found", index, devices.len()))),
  }
}

/// Group devices under their client, keeping enumeration order.
pub fn by_client(devices: &[Device])
    -> IndexMap<&str, Vec<(usize, &Device)>>
{
  let mut clients: IndexMap<&str, Vec<(usize, &Device)>> = IndexMap::new();
  for (index, device) in devices.iter().enumerate() {
    clients.entry(device.client.as_str()).or_default().push((index, device));
  }
  clients
}
