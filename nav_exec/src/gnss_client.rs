//! # GNSS Client
//!
//! Subscribes to the position fix, velocity and waypoint streams and keeps the latest sample of
//! each in an [`InputLatch`]. Each stream is received on its own background thread, which is the
//! only writer of that stream's latch.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;

use comms_if::net::{
    msg::{self, TOPIC_GPS_FIX, TOPIC_GPS_VEL_NED, TOPIC_WAYPOINT},
    zmq, MonitoredSocket, MonitoredSocketError, NetParams, NetParamsError, SocketOptions,
};

use crate::input_latch::{InputLatch, Latch};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Receive timeout of the subscriber sockets, bounding how long a thread takes to notice it
/// should stop.
const RECV_TIMEOUT_MS: i32 = 100;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Client for the GNSS streams. Dropping the client stops the background threads.
pub struct GnssClient {
    bg_run: Arc<AtomicBool>,
    bg_jhs: Vec<JoinHandle<()>>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum GnssClientError {
    #[error("Socket error on the {0} stream: {1}")]
    SocketError(&'static str, MonitoredSocketError),

    #[error("Could not subscribe to the {0} stream: {1}")]
    SubscribeError(&'static str, zmq::Error),

    #[error(transparent)]
    ConfigurationMissing(#[from] NetParamsError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl GnssClient {
    /// Connect to every stream and start receiving into `latch`.
    ///
    /// This function will not block until the publishers are available.
    pub fn new(
        ctx: &zmq::Context,
        params: &NetParams,
        latch: &InputLatch
    ) -> Result<Self, GnssClientError> {
        let bg_run = Arc::new(AtomicBool::new(true));

        let fix_socket = subscribe(ctx, params.gps_fix_endpoint()?, TOPIC_GPS_FIX)?;
        let vel_socket = subscribe(ctx, params.gps_vel_ned_endpoint()?, TOPIC_GPS_VEL_NED)?;
        let target_socket = subscribe(ctx, &params.waypoint_endpoint, TOPIC_WAYPOINT)?;

        let bg_jhs = vec![
            spawn(fix_socket, TOPIC_GPS_FIX, bg_run.clone(), latch.fix.clone()),
            spawn(vel_socket, TOPIC_GPS_VEL_NED, bg_run.clone(), latch.vel.clone()),
            spawn(target_socket, TOPIC_WAYPOINT, bg_run.clone(), latch.target.clone()),
        ];

        Ok(Self {
            bg_run,
            bg_jhs,
        })
    }

    /// Stop the background threads, waiting for them to exit.
    pub fn stop(&mut self) {
        self.bg_run.store(false, Ordering::Relaxed);

        for jh in self.bg_jhs.drain(..) {
            if jh.join().is_err() {
                warn!("GnssClient background thread panicked");
            }
        }
    }
}

impl Drop for GnssClient {
    fn drop(&mut self) {
        self.stop();
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Create a subscriber to the given topic on the given endpoint.
fn subscribe(
    ctx: &zmq::Context,
    endpoint: &str,
    topic: &'static str
) -> Result<MonitoredSocket, GnssClientError> {
    let socket_options = SocketOptions {
        connect_timeout: 1000,
        heartbeat_ivl: 500,
        heartbeat_ttl: 1000,
        heartbeat_timeout: 1000,
        linger: 1,
        recv_timeout: RECV_TIMEOUT_MS,
        conflate: true,
        ..Default::default()
    };

    let socket = MonitoredSocket::new(ctx, zmq::SUB, socket_options, endpoint)
        .map_err(|e| GnssClientError::SocketError(topic, e))?;

    socket.set_subscribe(topic.as_bytes())
        .map_err(|e| GnssClientError::SubscribeError(topic, e))?;

    debug!("Subscribed to {} on {}", topic, endpoint);

    Ok(socket)
}

fn spawn<T>(
    socket: MonitoredSocket,
    topic: &'static str,
    run: Arc<AtomicBool>,
    latch: Latch<T>
) -> JoinHandle<()>
where
    T: DeserializeOwned + Copy + Send + 'static
{
    thread::spawn(move || bg_thread(socket, topic, run, latch))
}

/// Background thread, latches each sample received on the socket.
fn bg_thread<T>(
    socket: MonitoredSocket,
    topic: &'static str,
    run: Arc<AtomicBool>,
    latch: Latch<T>
)
where
    T: DeserializeOwned + Copy
{
    while run.load(Ordering::Relaxed) {
        let msg = match socket.recv_string(0) {
            Ok(Ok(s)) => s,
            Ok(Err(_)) => {
                warn!("Non UTF-8 message on the {} stream", topic);
                continue
            },
            Err(zmq::Error::EAGAIN) => continue,
            Err(e) => {
                error!("Error receiving from the {} stream: {:?}", topic, e);
                break
            }
        };

        match msg::unpack(topic, &msg) {
            Ok(sample) => latch.set(sample),
            Err(e) => warn!("Dropping message on the {} stream: {}", topic, e)
        }
    }
}
