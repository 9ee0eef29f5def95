#[macro_use]
extern crate log;

use std::io;

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use f1_dash::config::Config;
use f1_dash::dispatcher::{Context, Dispatcher};
use f1_dash::f1::data_collector::UdpSource;
use f1_dash::f1::data_producer::{Controller, POLL_INTERVAL};
use f1_dash::interrupt::Interrupt;
use f1_dash::logging;
use f1_dash::terminal::{self, TerminalSurface};

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Blocks until the user quits, a termination signal arrives, or the worker
/// ends on its own.
fn wait_for_quit(
    controller: &Controller<TerminalSurface, UdpSource>,
    interrupt: &Interrupt,
) -> anyhow::Result<()> {
    while !controller.has_exited() {
        if interrupt.is_requested() {
            info!("Termination signal received");
            return Ok(());
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                if let Event::Key(key) = event::read()? {
                    if is_quit(&key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
            }
            Ok(false) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    logging::init(&config).context("opening log file")?;
    info!("Starting with {:?}", config);

    let interrupt = Interrupt::install().context("installing signal handlers")?;
    terminal::install_panic_hook();

    let context = Context::new(config)?;
    let source = UdpSource::bind(context.config.port)
        .with_context(|| format!("binding UDP port {}", context.config.port))?;

    let mut controller = Controller::new(Dispatcher::new(&context, TerminalSurface::new()), source);
    controller.start()?;

    let waited = wait_for_quit(&controller, &interrupt);
    let packets = controller.stop()?;
    waited?;

    info!("Shut down after {} packets", packets);
    Ok(())
}
