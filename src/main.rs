use std::thread;
use alsa::seq::Seq;
use alsa::Direction;
use clap::AppSettings;
use log::info;
use structopt::StructOpt;

mod devices;
mod error;
mod interrupt;
mod outputs;
mod player;
mod types;

use error::{Error, Result};
use outputs::{AlsaOutput, Held};
use player::Player;
use types::*;


#[derive(StructOpt)]
#[structopt(global_settings = &[AppSettings::ColoredHelp])]
struct Options {
  /// prefer the first output whose name contains this (case-sensitive)
  #[structopt(short = "p", long = "prefer", default_value = "IAC")]
  prefer: String,
  /// play on the device with this index instead
  #[structopt(short = "d", long = "device")]
  device: Option<usize>,
  /// MIDI channel to play on (0-15)
  #[structopt(short = "c", long = "channel", default_value = "0",
              parse(try_from_str = parse_channel))]
  channel: Channel,
  /// note-on velocity (0-127)
  #[structopt(short = "v", long = "velocity", default_value = "80",
              parse(try_from_str = parse_velocity))]
  velocity: Velocity,
  /// list devices and exit
  #[structopt(short = "l", long = "list")]
  list: bool,
}


fn parse_channel(value: &str) -> std::result::Result<Channel, String> {
  match value.parse::<Channel>() {
    Ok(channel) if channel < 16 => Ok(channel),
    _ => Err(format!("channel must be 0-15, got {:?}", value)),
  }
}

fn parse_velocity(value: &str) -> std::result::Result<Velocity, String> {
  match value.parse::<Velocity>() {
    Ok(velocity) if velocity < 128 => Ok(velocity),
    _ => Err(format!("velocity must be 0-127, got {:?}", value)),
  }
}


/// open an ALSA sequencer client named after this program
fn sequencer() -> Result<Seq> {
  let sequencer = Seq::open(None, Some(Direction::Playback), false)?;
  sequencer.set_client_name(c"midichords")?;
  Ok(sequencer)
}


fn run(options: &Options) -> Result<()> {
  let interrupt = interrupt::install()?;
  let sequencer = sequencer()?;

  let devices = devices::enumerate(&sequencer)?;
  println!("Available MIDI devices:");
  for (client, ports) in devices::by_client(&devices) {
    println!("  {}", client);
    for (index, device) in ports {
      let direction =
        match (device.output, device.input) {
          (true, true)   => "output, input",
          (true, false)  => "output",
          (false, true)  => "input",
          (false, false) => "-",
        };
      println!("    {}: {} ({})", index, device.name, direction);
    }
  }
  if options.list {
    return Ok(());
  }

  let selection =
    match options.device {
      Some(index) => devices::pick(&devices, index)?,
      None => devices::select(&devices, &options.prefer).ok_or(Error::NoDeviceAvailable)?,
    };
  let device = &devices[selection.index];
  if selection.preferred {
    println!("Selected {}: {}", selection.index, device.name);
  } else {
    println!("No device matching {:?}. Using first available output: {}",
      options.prefer, device.name);
  }

  // one device at a time; the sequencer handle moves into the output
  let output = AlsaOutput::open(sequencer, device)?;
  println!("Successfully opened MIDI device {}", selection.index);
  let mut held = Held::new(output, options.channel);

  println!("Playing MIDI notes continuously. Press Ctrl+C to stop.");
  let stopped =
    Player::new(&mut *held, options.channel, options.velocity, interrupt, thread::sleep)
      .play()?;
  info!("playback ended: {:?}", stopped);
  println!("\nStopped by user");
  Ok(())
}


fn main() {
  env_logger::init();
  let options = Options::from_args();
  // run and, if necessary, print error message to stderr
  if let Err(error) = run(&options) {
    eprintln!("Error: {}", error);
    std::process::exit(1);
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn channel_bounds() {
    assert_eq!(parse_channel("0"), Ok(0));
    assert_eq!(parse_channel("15"), Ok(15));
    assert!(parse_channel("16").is_err());
    assert!(parse_channel("-1").is_err());
  }

  #[test]
  fn velocity_bounds() {
    assert_eq!(parse_velocity("127"), Ok(127));
    assert!(parse_velocity("128").is_err());
    assert!(parse_velocity("loud").is_err());
  }

  #[test]
  fn defaults() {
    let options = Options::from_iter_safe(&["midichords"]).unwrap();
    assert_eq!(options.prefer, "IAC");
    assert_eq!(options.device, None);
    assert_eq!(options.channel, 0);
    assert_eq!(options.velocity, 80);
    assert!(!options.list);
  }

  #[test]
  fn rejects_out_of_range_channel() {
    assert!(Options::from_iter_safe(&["midichords", "--channel", "16"]).is_err());
  }
}
