//! # Command Server
//!
//! Publishes the output of waypoint control: the steering command on the `cmd` topic and the
//! heading error on the `debug_angle` topic.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;

use comms_if::net::{
    msg::{self, MsgError, TOPIC_CMD, TOPIC_DEBUG_ANGLE},
    zmq, MonitoredSocket, MonitoredSocketError, NetParams, SocketOptions,
};

use crate::wpt_ctrl::OutputData;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Command server
pub struct CmdServer {
    /// `None` if commands are not to be published
    cmd_socket: Option<MonitoredSocket>,

    debug_angle_socket: MonitoredSocket,

    /// Whether the command stream had subscribers on the last send
    cmd_subscribed: bool,

    num_cmds_sent: u64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CmdServerError {
    #[error("Socket error: {0}")]
    SocketError(MonitoredSocketError),

    #[error("Could not send the {0} message: {1}")]
    SendError(&'static str, zmq::Error),

    #[error("Could not pack the {0} message: {1}")]
    PackError(&'static str, MsgError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl CmdServer {
    /// Create a new instance of the command server.
    ///
    /// If `publish_cmd` is false no command socket is bound and commands are silently dropped.
    /// This function will not block until subscribers connect.
    pub fn new(
        ctx: &zmq::Context,
        params: &NetParams,
        publish_cmd: bool
    ) -> Result<Self, CmdServerError> {
        let cmd_socket = match publish_cmd {
            true => Some(publisher(ctx, &params.cmd_endpoint)?),
            false => {
                info!("Steering command publishing is disabled");
                None
            }
        };

        let debug_angle_socket = publisher(ctx, &params.debug_angle_endpoint)?;

        Ok(Self {
            cmd_socket,
            debug_angle_socket,
            cmd_subscribed: false,
            num_cmds_sent: 0,
        })
    }

    /// Publish whichever outputs are present.
    ///
    /// Commands are only published while the command stream has a subscriber.
    pub fn send(&mut self, output: &OutputData) -> Result<(), CmdServerError> {
        if let Some(ref cmd) = output.cmd {
            if let Some(ref socket) = self.cmd_socket {
                // Log when the consumer comes and goes so missing commands can be explained
                let subscribed = socket.connected();
                if subscribed != self.cmd_subscribed {
                    info!(
                        "Command stream {}",
                        if subscribed { "has a subscriber" } else { "has no subscribers" }
                    );
                    self.cmd_subscribed = subscribed;
                }

                if subscribed {
                    publish(socket, TOPIC_CMD, cmd)?;
                    self.num_cmds_sent += 1;
                }
            }
        }

        if let Some(ref angle) = output.debug_angle {
            publish(&self.debug_angle_socket, TOPIC_DEBUG_ANGLE, angle)?;
        }

        Ok(())
    }

    /// True if commands are being published.
    pub fn publishing_cmd(&self) -> bool {
        self.cmd_socket.is_some()
    }

    /// Number of commands actually sent to a subscriber.
    pub fn num_cmds_sent(&self) -> u64 {
        self.num_cmds_sent
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn publisher(ctx: &zmq::Context, endpoint: &str) -> Result<MonitoredSocket, CmdServerError> {
    let socket_options = SocketOptions {
        bind: true,
        heartbeat_ivl: 500,
        heartbeat_ttl: 1000,
        heartbeat_timeout: 1000,
        linger: 1,
        send_timeout: 10,
        ..Default::default()
    };

    MonitoredSocket::new(ctx, zmq::PUB, socket_options, endpoint)
        .map_err(CmdServerError::SocketError)
}

fn publish<T: serde::Serialize>(
    socket: &MonitoredSocket,
    topic: &'static str,
    payload: &T
) -> Result<(), CmdServerError> {
    let msg = msg::pack(topic, payload)
        .map_err(|e| CmdServerError::PackError(topic, e))?;

    socket.send(&msg, 0)
        .map_err(|e| CmdServerError::SendError(topic, e))
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    use comms_if::{tc::loco_ctrl::SteerCmd, tm::DebugAngle};

    fn local_params() -> NetParams {
        NetParams {
            gps_fix_endpoint: None,
            gps_vel_ned_endpoint: None,
            waypoint_endpoint: String::new(),
            cmd_endpoint: "tcp://127.0.0.1:*".into(),
            debug_angle_endpoint: "tcp://127.0.0.1:*".into(),
        }
    }

    fn output() -> OutputData {
        OutputData {
            cmd: Some(SteerCmd {
                speed_ms: 1.5,
                ang_rate_rads: 0.1,
            }),
            debug_angle: Some(DebugAngle { angle_rad: 0.2 }),
        }
    }

    #[test]
    fn test_cmd_needs_subscriber() {
        let ctx = zmq::Context::new();
        let mut server = CmdServer::new(&ctx, &local_params(), true).unwrap();

        // Nobody listening
        server.send(&output()).unwrap();
        assert_eq!(server.num_cmds_sent(), 0);

        let endpoint = server.cmd_socket.as_ref().unwrap()
            .get_last_endpoint().unwrap().unwrap();
        let sub = ctx.socket(zmq::SUB).unwrap();
        sub.set_subscribe(TOPIC_CMD.as_bytes()).unwrap();
        sub.set_rcvtimeo(1000).unwrap();
        sub.connect(&endpoint).unwrap();

        let start = Instant::now();
        while server.num_cmds_sent() == 0 && start.elapsed() < Duration::from_secs(5) {
            server.send(&output()).unwrap();
            thread::sleep(Duration::from_millis(10));
        }

        assert!(server.num_cmds_sent() > 0);

        let msg = sub.recv_string(0).unwrap().unwrap();
        let cmd: SteerCmd = msg::unpack(TOPIC_CMD, &msg).unwrap();
        assert_eq!(cmd, output().cmd.unwrap());
    }

    #[test]
    fn test_cmd_disabled() {
        let ctx = zmq::Context::new();
        let mut server = CmdServer::new(&ctx, &local_params(), false).unwrap();

        assert!(!server.publishing_cmd());
        server.send(&output()).unwrap();
        assert_eq!(server.num_cmds_sent(), 0);
    }
}
