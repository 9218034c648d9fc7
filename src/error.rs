//! Failures that end a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("no output devices available")]
  NoDeviceAvailable,

  #[error("could not open device {name}: {source}")]
  DeviceOpen { name: String, source: alsa::Error },

  #[error("ALSA sequencer error: {0}")]
  Alsa(#[from] alsa::Error),

  #[error("could not install signal handler: {0}")]
  Signal(#[from] nix::Error),

  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
