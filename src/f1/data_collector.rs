use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::net::UdpSocket;

use crate::f1::decoder::{self, DecodeError};
use crate::f1::Packet;

/// Largest F1 2019 datagram is the 1347 byte car telemetry packet.
const RECV_BUFFER_SIZE: usize = 2048;

#[derive(Debug)]
pub enum SourceError {
    Decode(DecodeError),
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Decode(err) => write!(f, "undecodable datagram: {}", err),
            SourceError::Io(err) => write!(f, "socket error: {}", err),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<DecodeError> for SourceError {
    fn from(err: DecodeError) -> Self {
        SourceError::Decode(err)
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

/// Where the worker gets its packets from. `poll_packet` must not block;
/// `Ok(None)` means nothing is waiting right now.
pub trait PacketSource: Send + 'static {
    fn poll_packet(&mut self) -> Result<Option<Packet>, SourceError>;
}

/// Listens for game telemetry on a non-blocking UDP socket.
pub struct UdpSource {
    socket: UdpSocket,
    buffer: Vec<u8>,
}

impl UdpSource {
    pub fn bind(port: u16) -> io::Result<UdpSource> {
        let socket = UdpSocket::bind(("0.0.0.0", port))?;
        socket.set_nonblocking(true)?;
        info!("Listening for telemetry on {}", socket.local_addr()?);

        Ok(UdpSource { socket, buffer: vec![0; RECV_BUFFER_SIZE] })
    }

    pub fn local_port(&self) -> io::Result<u16> {
        Ok(self.socket.local_addr()?.port())
    }
}

impl PacketSource for UdpSource {
    fn poll_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        match self.socket.recv_from(&mut self.buffer) {
            Ok((len, _)) => Ok(Some(decoder::decode(&self.buffer[..len])?)),
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Replays a fixed list of receive results, then reports nothing pending.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    results: VecDeque<Result<Packet, SourceError>>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = Packet>>(packets: I) -> ScriptedSource {
        ScriptedSource::from_results(packets.into_iter().map(Ok))
    }

    /// Like `new`, but failed receives can be interleaved with packets.
    pub fn from_results<I>(results: I) -> ScriptedSource
    where
        I: IntoIterator<Item = Result<Packet, SourceError>>,
    {
        ScriptedSource { results: results.into_iter().collect() }
    }
}

impl PacketSource for ScriptedSource {
    fn poll_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        self.results.pop_front().transpose()
    }
}
