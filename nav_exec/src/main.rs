//! Main navigation executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules
//!     - Main loop:
//!         - Input acquisition: snapshot the latest fix, velocity and waypoint
//!         - Waypoint control processing
//!         - Archiving
//!         - Command and debug angle publishing
//!
//! The inputs are received by background threads in the `GnssClient`, the main loop never
//! blocks on the network.
//!
//! # Modules
//!
//! All modules (e.g. `wpt_ctrl`) shall meet the following requirements:
//!     1. Provide a public struct implementing the `util::module::State` trait.
//!

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::{WrapErr, eyre}};
use log::{debug, info, warn};
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use std::thread;
use std::time::Instant;
use structopt::StructOpt;

// Internal
use comms_if::net::{NetParams, zmq};
use nav_lib::{
    cmd_server::CmdServer,
    data_store::DataStore,
    gnss_client::GnssClient,
    input_latch::InputLatch,
    params::NavExecParams,
    wpt_ctrl,
};
use util::{
    archive::Archived,
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
    time::period_from_seconds,
};

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

/// Steer the vehicle toward the waypoint published on the waypoint stream.
#[derive(Debug, StructOpt)]
#[structopt(name = "nav_exec")]
struct Opt {
    /// Stop after running for this many seconds, otherwise run until killed.
    #[structopt(long = "duration-s")]
    duration_s: Option<f64>,

    /// Minimum level of log messages, at least `info`.
    #[structopt(long = "log-level", default_value = "debug")]
    log_level: LevelFilter,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "nav_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(opt.log_level, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Waypoint Navigation Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI arguments: {:?}", opt);

    // ---- LOAD PARAMETERS ----

    let net_params: NetParams = util::params::load(
        "net.toml"
    ).wrap_err("Could not load net params")?;

    net_params.validate()
        .wrap_err("The GNSS streams are not configured")?;

    let exec_params: NavExecParams = util::params::load(
        "nav_exec.toml"
    ).wrap_err("Could not load exec params")?;

    let cycle_period = period_from_seconds(exec_params.cycle_period_s)
        .ok_or_else(|| eyre!(
            "Invalid cycle period: {} s", exec_params.cycle_period_s
        ))?;

    session.save("nav_exec/net_params.json", net_params.clone());
    session.save("nav_exec/exec_params.json", exec_params.clone());

    info!("Exec parameters loaded");

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    // ---- INITIALISE MODULES ----

    ds.wpt_ctrl.init(
        wpt_ctrl::InitData {
            params_file: "wpt_ctrl.toml",
            cycle_period,
        },
        &session
    ).wrap_err("Failed to initialise WptCtrl")?;
    info!("WptCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- INITIALISE NETWORK ----

    info!("Initialising network");

    let zmq_ctx = zmq::Context::new();
    let input_latch = InputLatch::default();

    let mut gnss_client = GnssClient::new(&zmq_ctx, &net_params, &input_latch)
        .wrap_err("Failed to initialise the GnssClient")?;
    info!("GnssClient initialised");

    let mut cmd_server = CmdServer::new(&zmq_ctx, &net_params, exec_params.publish_cmd)
        .wrap_err("Failed to initialise the CmdServer")?;
    info!(
        "CmdServer initialised (publishing commands: {})",
        cmd_server.publishing_cmd()
    );

    info!("Network initialisation complete");

    // ---- SHUTDOWN TIMER ----

    let run = Arc::new(AtomicBool::new(true));

    if let Some(duration_s) = opt.duration_s {
        let duration = period_from_seconds(duration_s)
            .ok_or_else(|| eyre!("Invalid run duration: {} s", duration_s))?;
        let run_clone = run.clone();

        info!("Execution will stop after {:.01} s", duration_s);

        thread::spawn(move || {
            thread::sleep(duration);
            run_clone.store(false, Ordering::Relaxed);
        });
    }

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    while run.load(Ordering::Relaxed) {

        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start();

        // ---- DATA INPUT ----

        ds.wpt_ctrl_input = input_latch.snapshot();

        // ---- CONTROL ALGORITHM PROCESSING ----

        match ds.wpt_ctrl.proc(&ds.wpt_ctrl_input) {
            Ok((o, r)) => {
                ds.wpt_ctrl_output = o;
                ds.wpt_ctrl_status_rpt = r;
            },
            Err(e) => match e {}
        }

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.wpt_ctrl.write() {
            warn!("Could not archive WptCtrl: {}", e);
        }

        // ---- OUTPUT ----

        if let Err(e) = cmd_server.send(&ds.wpt_ctrl_output) {
            warn!("CmdServer error: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            },
            None => {
                ds.num_consec_cycle_overruns += 1;
                warn!(
                    "Cycle overran by {:.06} s ({} consecutive)",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64(),
                    ds.num_consec_cycle_overruns
                );
            }
        }

        ds.cycle_end();
    }

    // ---- SHUTDOWN ----

    info!(
        "Stopping after {} cycles, {} steering commands sent",
        ds.num_cycles,
        cmd_server.num_cmds_sent()
    );

    gnss_client.stop();
    drop(cmd_server);

    session.exit();

    info!("End of execution");

    Ok(())
}
