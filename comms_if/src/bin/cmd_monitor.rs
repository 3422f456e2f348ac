//! Prints the steering commands and debug angles published by nav_exec.

use comms_if::{
    net::{
        msg::{self, TOPIC_CMD, TOPIC_DEBUG_ANGLE},
        MonitoredSocket, SocketOptions,
    },
    tc::loco_ctrl::SteerCmd,
    tm::DebugAngle,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Create context
    let ctx = zmq::Context::new();

    // Create socket options
    let socket_options = SocketOptions {
        ..Default::default()
    };

    // Create sockets
    let cmd_socket = MonitoredSocket::new(
        &ctx, zmq::SUB, socket_options.clone(), "tcp://localhost:5040"
    )?;
    let angle_socket = MonitoredSocket::new(
        &ctx, zmq::SUB, socket_options, "tcp://localhost:5041"
    )?;

    cmd_socket.set_subscribe(TOPIC_CMD.as_bytes())?;
    angle_socket.set_subscribe(TOPIC_DEBUG_ANGLE.as_bytes())?;

    // Commands may not be published at all, so wait on either socket
    loop {
        let mut items = [
            cmd_socket.as_poll_item(zmq::POLLIN),
            angle_socket.as_poll_item(zmq::POLLIN),
        ];
        zmq::poll(&mut items, -1)?;

        if items[0].is_readable() {
            let cmd = cmd_socket.recv_string(0)?
                .map_err(|_| "Non UTF-8 command")?;
            let cmd: SteerCmd = msg::unpack(TOPIC_CMD, &cmd)?;

            println!(
                "cmd: speed {:.2} m/s, ang rate {:+.4} rad/s",
                cmd.speed_ms,
                cmd.ang_rate_rads
            );
        }

        if items[1].is_readable() {
            let angle = angle_socket.recv_string(0)?
                .map_err(|_| "Non UTF-8 debug angle")?;
            let angle: DebugAngle = msg::unpack(TOPIC_DEBUG_ANGLE, &angle)?;

            println!("debug_angle: heading error {:+.4} rad", angle.angle_rad);
        }
    }
}
