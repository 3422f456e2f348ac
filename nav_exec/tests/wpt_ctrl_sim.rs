//! Closed loop test of waypoint control.
//!
//! A simple unicycle vehicle is simulated, its position and velocity are written into an
//! `InputLatch` from another thread each step and the controller's commands are fed back into
//! the vehicle.

use std::thread;
use std::time::Duration;

use comms_if::eqpt::gnss::{GeoPosition, VelNed, VelSample};
use nav_lib::{
    input_latch::InputLatch,
    wpt_ctrl::{NavGate, OutputData, Params, StatusReport, WptCtrl},
};
use util::module::State;

/// Meters per degree of latitude
const M_PER_DEG: f64 = 111_320.0;

const DT_S: f64 = 0.1;

struct Vehicle {
    lat_deg: f64,
    lon_deg: f64,

    /// Heading clockwise from north
    heading_rad: f64,
}

impl Vehicle {
    fn vel(&self, speed_ms: f64) -> VelSample {
        let speed_mms = speed_ms * 1000.0;

        VelSample::VelNed(VelNed {
            n_mms: (speed_mms * self.heading_rad.cos()).round() as i32,
            e_mms: (speed_mms * self.heading_rad.sin()).round() as i32,
            d_mms: 0,
            n_sats: 12,
        })
    }

    /// Advance by one step. A positive angular rate turns left, i.e. anticlockwise.
    fn step(&mut self, speed_ms: f64, ang_rate_rads: f64) {
        self.heading_rad -= ang_rate_rads * DT_S;

        let north_m = speed_ms * self.heading_rad.cos() * DT_S;
        let east_m = speed_ms * self.heading_rad.sin() * DT_S;

        self.lat_deg += north_m / M_PER_DEG;
        self.lon_deg += east_m / (M_PER_DEG * self.lat_deg.to_radians().cos());
    }

    fn dist_m(&self, target: &GeoPosition) -> f64 {
        let n = (target.latitude_deg - self.lat_deg) * M_PER_DEG;
        let e = (target.longitude_deg - self.lon_deg)
            * M_PER_DEG
            * target.latitude_deg.to_radians().cos();

        n.hypot(e)
    }
}

fn proc(ctrl: &mut WptCtrl, latch: &InputLatch) -> (OutputData, StatusReport) {
    match ctrl.proc(&latch.snapshot()) {
        Ok(r) => r,
        Err(e) => match e {},
    }
}

#[test]
fn test_turns_onto_bearing() {
    let params = Params {
        k_i: 0.05,
        ..Params::default()
    };
    let speed_ms = params.speed_ms;
    let mut ctrl = WptCtrl::new(params, Duration::from_secs_f64(DT_S)).unwrap();

    let latch = InputLatch::default();

    // Roughly 157 m to the north east, heading north
    let target = GeoPosition::new(0.001, 0.001);
    let mut vehicle = Vehicle {
        lat_deg: 0.0,
        lon_deg: 0.0,
        heading_rad: 0.0,
    };

    let start_dist_m = vehicle.dist_m(&target);

    // Nothing until every input has arrived
    let (output, report) = proc(&mut ctrl, &latch);
    assert!(output.cmd.is_none());
    assert_eq!(report.gate, NavGate::NoFix);

    latch.target.set(target);

    let mut last_angle = f64::NAN;

    for i in 0..300 {
        // Publish from another thread, as the GNSS client does
        {
            let writer = latch.clone();
            let fix = GeoPosition::new(vehicle.lat_deg, vehicle.lon_deg);
            let vel = vehicle.vel(speed_ms);

            thread::spawn(move || {
                writer.fix.set(fix);
                writer.vel.set(vel);
            })
            .join()
            .unwrap();
        }

        let (output, report) = proc(&mut ctrl, &latch);

        assert_eq!(report.gate, NavGate::Navigating);
        assert!(ctrl.integral_rad().abs() <= 0.1);

        let cmd = output.cmd.unwrap();
        assert!(cmd.ang_rate_rads.is_finite());
        assert_eq!(cmd.speed_ms, speed_ms);

        // The target starts off to the right
        if i == 0 {
            assert!(cmd.ang_rate_rads < 0.0);
        }

        last_angle = output.debug_angle.unwrap().angle_rad;

        vehicle.step(cmd.speed_ms, cmd.ang_rate_rads);
    }

    // Pointing at the target and closer to it
    assert!(last_angle.abs() < 0.05, "final heading error {}", last_angle);
    assert!((vehicle.heading_rad - std::f64::consts::FRAC_PI_4).abs() < 0.1);
    assert!(vehicle.dist_m(&target) < start_dist_m - 30.0);
}

#[test]
fn test_loses_fix() {
    let mut ctrl = WptCtrl::new(Params::default(), Duration::from_millis(100)).unwrap();
    let latch = InputLatch::default();

    latch.fix.set(GeoPosition::new(0.0, 0.0));
    latch.vel.set(VelSample::VelNed(VelNed {
        n_mms: 1500,
        e_mms: 0,
        d_mms: 0,
        n_sats: 8,
    }));
    latch.target.set(GeoPosition::new(0.0, 0.001));

    let (output, _) = proc(&mut ctrl, &latch);
    assert!(output.cmd.is_some());

    latch.fix.set(GeoPosition::no_fix());

    let (output, report) = proc(&mut ctrl, &latch);
    assert_eq!(output, OutputData::default());
    assert_eq!(report.gate, NavGate::NoFix);
    assert!(report.warn_issued);

    // The warning is throttled while the fix stays lost
    let (_, report) = proc(&mut ctrl, &latch);
    assert!(!report.warn_issued);
}
