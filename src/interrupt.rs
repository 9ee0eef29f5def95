use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

/// Raised when the process is asked to terminate by a signal, so the
/// dashboard can stop the worker and restore the terminal itself. A second
/// signal while the first is pending terminates immediately.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn install() -> io::Result<Interrupt> {
        let interrupt = Interrupt::default();

        #[cfg(unix)]
        let signals = TERM_SIGNALS.iter().chain(&[signal_hook::consts::SIGHUP]);
        #[cfg(not(unix))]
        let signals = TERM_SIGNALS.iter();

        for &signal in signals {
            flag::register_conditional_shutdown(signal, 1, Arc::clone(&interrupt.requested))?;
            flag::register(signal, Arc::clone(&interrupt.requested))?;
        }
        Ok(interrupt)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}
