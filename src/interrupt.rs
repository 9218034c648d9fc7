//! Ctrl+C and friends, turned into a flag the player polls between waits.

use std::sync::atomic::{AtomicBool, Ordering};
use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use crate::error::Result;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn interrupted(_: c_int) {
  INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Route SIGINT and SIGTERM to the returned flag instead of killing the
/// process.
pub fn install()
    -> Result<&'static AtomicBool>
{
  let action =
    SigAction::new(SigHandler::Handler(interrupted), SaFlags::empty(), SigSet::empty());
  for signal in [Signal::SIGINT, Signal::SIGTERM] {
    // the handler only touches an atomic
    unsafe { sigaction(signal, &action)?; }
  }
  Ok(&INTERRUPTED)
}
