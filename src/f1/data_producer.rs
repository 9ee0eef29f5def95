use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_std::task;
use async_std::task::JoinHandle;

use crate::dispatcher::Dispatcher;
use crate::error::{DashError, LifecycleError};
use crate::f1::data_collector::{PacketSource, SourceError};
use crate::surface::Surface;

/// How long the worker sleeps when no datagram is waiting.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

const PACKET_LOG_INTERVAL: u64 = 600;

/// Owns the source, the dispatcher and, through it, the surface while a
/// session is running.
pub struct Worker<S: Surface + 'static, P: PacketSource> {
    source: P,
    dispatcher: Dispatcher<S>,
    running: Arc<AtomicBool>,
}

impl<S: Surface + 'static, P: PacketSource> Worker<S, P> {
    /// Polls until the running flag drops or a dispatch fails. Hands itself
    /// back so the controller can release the surface.
    pub async fn execute(mut self) -> (Self, Result<u64, DashError>) {
        let mut packets: u64 = 0;

        while self.running.load(Ordering::SeqCst) {
            match self.source.poll_packet() {
                Ok(Some(packet)) => {
                    if let Err(err) = self.dispatcher.dispatch(&packet) {
                        error!("Dispatch failed, stopping worker: {}", err);
                        self.running.store(false, Ordering::SeqCst);
                        return (self, Err(err));
                    }

                    packets += 1;
                    if packets % PACKET_LOG_INTERVAL == 0 {
                        debug!("Packet count: {}", packets);
                    }
                }
                Ok(None) => task::sleep(POLL_INTERVAL).await,
                Err(SourceError::Decode(err)) => warn!("Dropping datagram: {}", err),
                Err(SourceError::Io(err)) => {
                    warn!("Receive failed: {}", err);
                    task::sleep(POLL_INTERVAL).await;
                }
            }
        }

        info!("Worker stopped after {} packets", packets);
        (self, Ok(packets))
    }
}

enum WorkerSlot<S: Surface + 'static, P: PacketSource> {
    Idle(Worker<S, P>),
    Running(JoinHandle<(Worker<S, P>, Result<u64, DashError>)>),
    Vacant,
}

/// Starts and stops the background worker. Between sessions the worker,
/// and with it the dispatcher, sits idle inside the controller.
pub struct Controller<S: Surface + 'static, P: PacketSource> {
    slot: WorkerSlot<S, P>,
    running: Arc<AtomicBool>,
}

impl<S: Surface + 'static, P: PacketSource> Controller<S, P> {
    pub fn new(dispatcher: Dispatcher<S>, source: P) -> Controller<S, P> {
        let running = Arc::new(AtomicBool::new(false));
        let worker = Worker { source, dispatcher, running: running.clone() };

        Controller { slot: WorkerSlot::Idle(worker), running }
    }

    /// Prepares the surface and spawns the worker.
    pub fn start(&mut self) -> Result<(), DashError> {
        let mut worker = match mem::replace(&mut self.slot, WorkerSlot::Vacant) {
            WorkerSlot::Idle(worker) => worker,
            other => {
                self.slot = other;
                return Err(LifecycleError::AlreadyRunning.into());
            }
        };

        if let Err(err) = worker.dispatcher.prepare() {
            if let Err(release_err) = worker.dispatcher.release() {
                warn!("Failed to release surface after setup error: {}", release_err);
            }
            self.slot = WorkerSlot::Idle(worker);
            return Err(err.into());
        }

        self.running.store(true, Ordering::SeqCst);
        self.slot = WorkerSlot::Running(task::spawn(async move { worker.execute().await }));
        info!("Worker started");
        Ok(())
    }

    /// Signals the worker, waits for it to finish its current packet, then
    /// releases the surface. Returns how many packets were dispatched, or
    /// the error that ended the worker early.
    pub fn stop(&mut self) -> Result<u64, DashError> {
        let handle = match mem::replace(&mut self.slot, WorkerSlot::Vacant) {
            WorkerSlot::Running(handle) => handle,
            other => {
                self.slot = other;
                return Err(LifecycleError::NotRunning.into());
            }
        };

        self.running.store(false, Ordering::SeqCst);
        let (mut worker, result) = task::block_on(handle);
        let released = worker.dispatcher.release();
        self.slot = WorkerSlot::Idle(worker);

        let packets = result?;
        released?;
        Ok(packets)
    }

    /// True between a successful `start` and the matching `stop`, even if
    /// the worker has already ended on its own.
    pub fn is_running(&self) -> bool {
        matches!(self.slot, WorkerSlot::Running(_))
    }

    /// The worker ended without being asked to; `stop` reports why.
    pub fn has_exited(&self) -> bool {
        self.is_running() && !self.running.load(Ordering::SeqCst)
    }

    pub fn dispatcher(&self) -> Option<&Dispatcher<S>> {
        match &self.slot {
            WorkerSlot::Idle(worker) => Some(&worker.dispatcher),
            _ => None,
        }
    }
}

impl<S: Surface + 'static, P: PacketSource> Drop for Controller<S, P> {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(err) = self.stop() {
                error!("Worker failed during shutdown: {}", err);
            }
        }
    }
}
