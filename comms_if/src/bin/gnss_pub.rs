//! Fake GNSS publisher, for bringing up nav_exec without a receiver.
//!
//! Publishes a fixed position, a northward velocity and a waypoint on the endpoints given in the
//! example `net.toml`. An optional pair of arguments sets the waypoint latitude and longitude.

use comms_if::{
    eqpt::gnss::{GeoPosition, VelNed, VelSample},
    net::{
        msg::{self, TOPIC_GPS_FIX, TOPIC_GPS_VEL_NED, TOPIC_WAYPOINT},
        MonitoredSocket, SocketOptions,
    },
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Waypoint from the command line, or just north east of the fix
    let args: Vec<String> = std::env::args().collect();
    let target = match args.len() {
        3 => GeoPosition::new(args[1].parse()?, args[2].parse()?),
        1 => GeoPosition::new(0.001, 0.001),
        _ => return Err("Expected either no arguments or a latitude and longitude".into())
    };

    // Create zmq context
    let ctx = zmq::Context::new();

    // Create socket options
    let socket_options = SocketOptions {
        bind: true,
        block_on_first_connect: false,
        ..Default::default()
    };

    // Create the sockets
    let fix_socket = MonitoredSocket::new(
        &ctx, zmq::PUB, socket_options.clone(), "tcp://*:5010"
    )?;
    let vel_socket = MonitoredSocket::new(
        &ctx, zmq::PUB, socket_options.clone(), "tcp://*:5011"
    )?;
    let wpt_socket = MonitoredSocket::new(
        &ctx, zmq::PUB, socket_options, "tcp://*:5030"
    )?;

    println!("Publishing fix on 5010, velocity on 5011 and waypoint {:?} on 5030", target);

    let fix = GeoPosition::new(0.0, 0.0);
    let vel = VelSample::VelNed(VelNed {
        n_mms: 1500,
        e_mms: 0,
        d_mms: 0,
        n_sats: 10,
    });

    loop {
        fix_socket.send(&msg::pack(TOPIC_GPS_FIX, &fix)?, 0)?;
        vel_socket.send(&msg::pack(TOPIC_GPS_VEL_NED, &vel)?, 0)?;
        wpt_socket.send(&msg::pack(TOPIC_WAYPOINT, &target)?, 0)?;

        std::thread::sleep(std::time::Duration::from_millis(200));
    }
}
