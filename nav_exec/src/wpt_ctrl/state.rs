//! Implementations for the WptCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace, warn};
use serde::Serialize;
use std::time::Duration;

// Internal
use super::{calc, Course, Params, VelSource, WptCtrlError};
use comms_if::{
    eqpt::gnss::{GeoPosition, VelSample},
    tc::loco_ctrl::SteerCmd,
    tm::DebugAngle,
};
use util::{
    archive::{ArchiveError, Archived, Archiver},
    maths::{clamp, saturate_abs},
    module::State,
    params,
    session::Session,
    throttle::Throttle,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Cycle period assumed by a default constructed WptCtrl.
const DEFAULT_CYCLE_PERIOD_S: f64 = 0.1;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Waypoint control module state
pub struct WptCtrl {
    pub(crate) params: Params,

    vel_source: Box<dyn VelSource>,

    /// Period between calls to `proc`, used to integrate the heading error.
    ///
    /// Units: seconds
    cycle_period_s: f64,

    /// Accumulated integral term, always within the integral limit.
    ///
    /// Units: radians/second
    integral_rad: f64,

    warn_throttle: Throttle<NavGate>,
    last_gate: Option<NavGate>,
    num_cycles: u64,

    pub(crate) report: StatusReport,
    arch_report: Archiver,
}

/// Initialisation data for WptCtrl.
#[derive(Debug, Clone, Copy)]
pub struct InitData {
    /// Path to the parameter file, relative to the parameters directory
    pub params_file: &'static str,

    /// Period at which `proc` will be called
    pub cycle_period: Duration,
}

/// Input data to Waypoint Control, the latest sample of each input or `None` if there hasn't
/// been one yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputData {
    pub fix: Option<GeoPosition>,
    pub vel: Option<VelSample>,
    pub target: Option<GeoPosition>,
}

/// Output from WptCtrl. Both items are `Some` when navigating and `None` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutputData {
    /// Steering command for the vehicle
    pub cmd: Option<SteerCmd>,

    /// Heading error for this cycle, for tuning
    pub debug_angle: Option<DebugAngle>,
}

/// Status report for WptCtrl processing.
///
/// Quantities which are only computed while navigating are NaN otherwise.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusReport {
    /// Number of the cycle this report is for
    pub cycle: u64,

    /// Result of the input checks
    pub gate: NavGate,

    /// True if a warning about the gate was logged this cycle
    pub warn_issued: bool,

    /// True if a velocity sample was available but of the wrong shape for the configured source
    pub vel_shape_mismatch: bool,

    /// Satellites in the velocity solution, if known
    pub n_sats: Option<u8>,

    /// Distance to the target
    ///
    /// Units: degrees
    pub dist_deg: f64,

    /// Measured ground speed
    ///
    /// Units: course units
    pub course_speed: f64,

    /// Heading error used this cycle (zero if either direction is degenerate)
    ///
    /// Units: radians
    pub angle_rad: f64,

    /// Proportional term
    ///
    /// Units: radians/second
    pub prop_rads: f64,

    /// Integral term after this cycle's update
    ///
    /// Units: radians/second
    pub integral_rad: f64,

    /// Angular rate limit for the current distance
    ///
    /// Units: radians/second
    pub rate_limit_rads: f64,

    /// Demanded angular rate, after limiting and reversal
    ///
    /// Units: radians/second
    pub ang_rate_rads: f64,

    /// True if the angular rate was limited
    pub rate_limited: bool,

    /// True if the target is at the current position (or its direction is unknown)
    pub degenerate_bearing: bool,

    /// True if the vehicle is stationary (or its direction is unknown)
    pub degenerate_course: bool,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Outcome of the checks made on the inputs at the start of each cycle, in the order they are
/// made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavGate {
    /// No fix has been received or the receiver has no position solution
    NoFix,

    /// No velocity sample has been received, or it couldn't be used
    NoVelocity,

    /// Too few satellites in the velocity solution
    InsufficientSats,

    /// No target waypoint has been received
    NoTarget,

    /// All inputs are usable, a command is produced
    Navigating,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for WptCtrl {
    type InitData = InitData;
    type InitError = WptCtrlError;

    type InputData = InputData;
    type OutputData = OutputData;
    type StatusReport = StatusReport;
    type ProcError = std::convert::Infallible;

    /// Initialise the WptCtrl module.
    ///
    /// Loads the parameters, saves a copy of them into the session and creates the status
    /// report archive.
    fn init(&mut self, init_data: Self::InitData, session: &Session)
        -> Result<(), Self::InitError>
    {
        let params: Params = params::load(init_data.params_file)
            .map_err(WptCtrlError::ParamLoadError)?;

        *self = Self::new(params, init_data.cycle_period)?;

        session.save("wpt_ctrl/params.json", self.params.clone());

        self.arch_report = Archiver::from_path(session, "wpt_ctrl/status_report.csv")
            .map_err(WptCtrlError::ArchiveError)?;

        info!(
            "WptCtrl: {:?} velocity source, k_p = {}, k_i = {}, speed = {} m/s{}",
            self.params.vel_source,
            self.params.k_p,
            self.params.k_i,
            self.params.speed_ms,
            if self.params.reverse { ", reversed" } else { "" }
        );

        Ok(())
    }

    /// Perform cyclic processing of Waypoint Control.
    ///
    /// Never fails. If the inputs aren't good enough to navigate on no output is produced and
    /// the reason is given in the status report.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport {
            cycle: self.num_cycles,
            integral_rad: self.integral_rad,
            ..StatusReport::default()
        };
        self.num_cycles = self.num_cycles.wrapping_add(1);

        let output = match self.gate(input_data) {
            Ok((fix, course, target)) => {
                self.report.gate = NavGate::Navigating;
                self.warn_throttle.clear();

                if self.last_gate != Some(NavGate::Navigating) {
                    info!(
                        "Navigating to ({:.7}, {:.7})",
                        target.latitude_deg,
                        target.longitude_deg
                    );
                }

                self.navigate(&fix, &course, &target)
            }
            Err(gate) => {
                self.report.gate = gate;

                if self.warn_throttle.pass(gate) {
                    self.report.warn_issued = true;
                    self.warn_gate();
                }

                OutputData::default()
            }
        };

        self.last_gate = Some(self.report.gate);

        trace!(
            "WptCtrl: gate {:?}, angle {:.4} rad, ang rate {:.4} rad/s (limit {:.4}{})",
            self.report.gate,
            self.report.angle_rad,
            self.report.ang_rate_rads,
            self.report.rate_limit_rads,
            if self.report.rate_limited { ", limited" } else { "" }
        );

        Ok((output, self.report))
    }
}

impl Archived for WptCtrl {
    fn write(&mut self) -> Result<(), ArchiveError> {
        self.arch_report.serialise(self.report)
    }
}

impl WptCtrl {
    /// Create a new instance with the given parameters, expecting `proc` to be called once every
    /// `cycle_period`.
    ///
    /// The status report is not archived, use [`State::init`] for that.
    pub fn new(params: Params, cycle_period: Duration) -> Result<Self, WptCtrlError> {
        params.validate()?;

        if cycle_period.as_nanos() == 0 {
            return Err(WptCtrlError::InvalidCyclePeriod)
        }

        Ok(Self::new_unchecked(params, cycle_period.as_secs_f64()))
    }

    /// Current value of the integral term.
    ///
    /// Units: radians/second
    pub fn integral_rad(&self) -> f64 {
        self.integral_rad
    }

    fn new_unchecked(params: Params, cycle_period_s: f64) -> Self {
        let integral_rad = clamp(
            params.initial_integral_rad,
            -params.integral_limit_rad,
            params.integral_limit_rad
        );

        Self {
            vel_source: params.vel_source.build(params.vel_scale),
            warn_throttle: Throttle::new(params.warn_period_cycles),
            params,
            cycle_period_s,
            integral_rad,
            last_gate: None,
            num_cycles: 0,
            report: StatusReport::default(),
            arch_report: Archiver::default(),
        }
    }

    /// Check the inputs, returning those needed for navigation or the reason they can't be used.
    fn gate(&mut self, input: &InputData) -> Result<(GeoPosition, Course, GeoPosition), NavGate> {
        let fix = match input.fix {
            Some(f) if f.fix_valid => f,
            _ => return Err(NavGate::NoFix)
        };

        let sample = input.vel.ok_or(NavGate::NoVelocity)?;
        let course = match self.vel_source.course(&sample) {
            Some(c) => c,
            None => {
                self.report.vel_shape_mismatch = true;
                return Err(NavGate::NoVelocity)
            }
        };

        self.report.n_sats = course.n_sats;
        if let Some(n) = course.n_sats {
            if n < self.params.min_num_sats {
                return Err(NavGate::InsufficientSats)
            }
        }

        let target = input.target.ok_or(NavGate::NoTarget)?;

        Ok((fix, course, target))
    }

    /// Compute the steering command.
    fn navigate(
        &mut self,
        fix: &GeoPosition,
        course: &Course,
        target: &GeoPosition
    ) -> OutputData {
        let bearing = calc::bearing(fix, target);

        self.report.dist_deg = bearing.dist_deg;
        self.report.course_speed = course.speed;
        self.report.degenerate_bearing = bearing.dir.is_none();
        self.report.degenerate_course = course.dir.is_none();

        // An unknown heading error contributes nothing and leaves the integral alone
        let angle = calc::heading_error(course.dir, bearing.dir);
        let angle_rad = angle.unwrap_or(0.0);

        if let Some(a) = angle {
            if course.speed > self.params.moving_speed_threshold {
                self.accumulate(a * self.cycle_period_s * self.params.k_i);
            }
        }
        else {
            debug!(
                "Heading error unknown (bearing degenerate: {}, course degenerate: {})",
                self.report.degenerate_bearing,
                self.report.degenerate_course
            );
        }

        let prop_rads = match course.speed > self.params.valid_speed_threshold {
            true => angle_rad * self.params.k_p,
            false => 0.0
        };

        let mut ang_rate_rads = prop_rads;
        if !self.integral_rad.is_nan() {
            ang_rate_rads += self.integral_rad;
        }

        let rate_limit_rads = calc::rate_limit(bearing.dist_deg, self.params.dist_gain);
        let (mut ang_rate_rads, rate_limited) = saturate_abs(ang_rate_rads, rate_limit_rads);

        if self.params.reverse {
            ang_rate_rads = -ang_rate_rads;
        }

        self.report.angle_rad = angle_rad;
        self.report.prop_rads = prop_rads;
        self.report.integral_rad = self.integral_rad;
        self.report.rate_limit_rads = rate_limit_rads;
        self.report.ang_rate_rads = ang_rate_rads;
        self.report.rate_limited = rate_limited;

        OutputData {
            cmd: Some(SteerCmd {
                speed_ms: self.params.speed_ms,
                ang_rate_rads,
            }),
            debug_angle: Some(DebugAngle { angle_rad }),
        }
    }

    /// Add `delta` to the integral term, keeping it within the limit. A NaN result is dropped.
    fn accumulate(&mut self, delta: f64) {
        let integral = self.integral_rad + delta;

        if integral.is_nan() {
            warn!("Discarding NaN integral update");
            return
        }

        self.integral_rad = clamp(
            integral,
            -self.params.integral_limit_rad,
            self.params.integral_limit_rad
        );
    }

    /// Log a warning explaining why the vehicle isn't navigating.
    fn warn_gate(&self) {
        match self.report.gate {
            NavGate::NoFix => warn!("No valid GNSS fix, not navigating"),
            NavGate::NoVelocity if self.report.vel_shape_mismatch => warn!(
                "Velocity sample doesn't match the {:?} source, not navigating",
                self.params.vel_source
            ),
            NavGate::NoVelocity => warn!("No velocity sample, not navigating"),
            NavGate::InsufficientSats => warn!(
                "Only {} satellites in the velocity solution (need {}), not navigating",
                self.report.n_sats.unwrap_or(0),
                self.params.min_num_sats
            ),
            NavGate::NoTarget => warn!("No target waypoint, not navigating"),
            NavGate::Navigating => ()
        }
    }
}

impl Default for WptCtrl {
    fn default() -> Self {
        Self::new_unchecked(Params::default(), DEFAULT_CYCLE_PERIOD_S)
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self {
            cycle: 0,
            gate: NavGate::NoFix,
            warn_issued: false,
            vel_shape_mismatch: false,
            n_sats: None,
            dist_deg: f64::NAN,
            course_speed: f64::NAN,
            angle_rad: f64::NAN,
            prop_rads: f64::NAN,
            integral_rad: f64::NAN,
            rate_limit_rads: f64::NAN,
            ang_rate_rads: f64::NAN,
            rate_limited: false,
            degenerate_bearing: false,
            degenerate_course: false,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use comms_if::eqpt::gnss::{VelNed, VelVector};
    use std::f64::consts::FRAC_PI_2;

    fn period() -> Duration {
        Duration::from_millis(100)
    }

    fn vel_ned(n_mms: i32, e_mms: i32, n_sats: u8) -> VelSample {
        VelSample::VelNed(VelNed {
            n_mms,
            e_mms,
            d_mms: 0,
            n_sats,
        })
    }

    /// Heading north at 1.5 m/s from (0, 0) toward a target due east.
    fn east_input() -> InputData {
        InputData {
            fix: Some(GeoPosition::new(0.0, 0.0)),
            vel: Some(vel_ned(1500, 0, 10)),
            target: Some(GeoPosition::new(0.0, 0.001)),
        }
    }

    fn run(ctrl: &mut WptCtrl, input: &InputData) -> (OutputData, StatusReport) {
        match ctrl.proc(input) {
            Ok(r) => r,
            Err(e) => match e {}
        }
    }

    #[test]
    fn test_end_to_end_east() {
        let mut ctrl = WptCtrl::new(Params::default(), period()).unwrap();

        let (output, report) = run(&mut ctrl, &east_input());

        assert_eq!(report.gate, NavGate::Navigating);
        assert_relative_eq!(report.dist_deg, 0.001, epsilon = 1e-12);
        assert_relative_eq!(report.angle_rad, -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(report.prop_rads, -FRAC_PI_2 * 0.5, epsilon = 1e-12);
        assert!(!report.rate_limited);

        let cmd = output.cmd.unwrap();
        assert_eq!(cmd.speed_ms, 1.5);
        assert_relative_eq!(cmd.ang_rate_rads, -FRAC_PI_2 * 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            output.debug_angle.unwrap().angle_rad,
            -FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gating() {
        let mut ctrl = WptCtrl::new(Params::default(), period()).unwrap();

        // Nothing received
        let (output, report) = run(&mut ctrl, &InputData::default());
        assert_eq!(output, OutputData::default());
        assert_eq!(report.gate, NavGate::NoFix);

        // Fix without a solution
        let mut input = east_input();
        input.fix = Some(GeoPosition::no_fix());
        let (output, report) = run(&mut ctrl, &input);
        assert!(output.cmd.is_none());
        assert!(output.debug_angle.is_none());
        assert_eq!(report.gate, NavGate::NoFix);

        // No velocity
        let mut input = east_input();
        input.vel = None;
        let (output, report) = run(&mut ctrl, &input);
        assert!(output.cmd.is_none());
        assert_eq!(report.gate, NavGate::NoVelocity);

        // Too few satellites with a valid fix
        let mut input = east_input();
        input.vel = Some(vel_ned(1500, 0, 1));
        let (output, report) = run(&mut ctrl, &input);
        assert!(output.cmd.is_none());
        assert_eq!(report.gate, NavGate::InsufficientSats);
        assert_eq!(report.n_sats, Some(1));

        // Exactly the minimum is enough
        let mut input = east_input();
        input.vel = Some(vel_ned(1500, 0, 2));
        let (output, _) = run(&mut ctrl, &input);
        assert!(output.cmd.is_some());

        // No target
        let mut input = east_input();
        input.target = None;
        let (output, report) = run(&mut ctrl, &input);
        assert!(output.cmd.is_none());
        assert_eq!(report.gate, NavGate::NoTarget);
    }

    #[test]
    fn test_vel_shape_mismatch() {
        let mut ctrl = WptCtrl::new(Params::default(), period()).unwrap();

        let mut input = east_input();
        input.vel = Some(VelSample::Vector(VelVector { x: 1.5, y: 0.0, z: 0.0 }));

        let (output, report) = run(&mut ctrl, &input);
        assert!(output.cmd.is_none());
        assert_eq!(report.gate, NavGate::NoVelocity);
        assert!(report.vel_shape_mismatch);

        // The same sample works with the vector source, which has no satellite count
        let params = Params {
            vel_source: crate::wpt_ctrl::VelSourceKind::Vector,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();
        let (output, report) = run(&mut ctrl, &input);
        assert_eq!(report.gate, NavGate::Navigating);
        assert_relative_eq!(report.course_speed, 1500.0, epsilon = 1e-9);
        assert_relative_eq!(
            output.cmd.unwrap().ang_rate_rads,
            -FRAC_PI_2 * 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_warning_throttle() {
        let params = Params {
            warn_period_cycles: 3,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        let warned: Vec<bool> = (0..7)
            .map(|_| run(&mut ctrl, &InputData::default()).1.warn_issued)
            .collect();
        assert_eq!(warned, vec![true, false, false, true, false, false, true]);

        // Navigating then losing the fix again warns straight away
        run(&mut ctrl, &east_input());
        assert!(run(&mut ctrl, &InputData::default()).1.warn_issued);
    }

    #[test]
    fn test_integral_clamp() {
        let params = Params {
            k_i: 10.0,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        let mut input = east_input();
        for i in 0..500 {
            // Alternate the side the target is on in long runs
            let east = if (i / 100) % 2 == 0 { 0.001 } else { -0.001 };
            input.target = Some(GeoPosition::new(0.0, east));

            let (_, report) = run(&mut ctrl, &input);

            assert!(ctrl.integral_rad().abs() <= 0.1);
            assert!(report.integral_rad.abs() <= 0.1);
        }

        // Last run was to the east, so the integral is pinned at the negative limit
        assert_relative_eq!(ctrl.integral_rad(), -0.1);
    }

    #[test]
    fn test_integral_speed_threshold() {
        let params = Params {
            k_i: 0.5,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        // Fast enough to be trusted but not moving enough to integrate
        let mut input = east_input();
        input.vel = Some(vel_ned(550, 0, 10));
        let (output, report) = run(&mut ctrl, &input);
        assert_eq!(ctrl.integral_rad(), 0.0);
        assert_relative_eq!(report.prop_rads, -FRAC_PI_2 * 0.5, epsilon = 1e-12);
        assert!(output.cmd.is_some());

        // Too slow for either
        input.vel = Some(vel_ned(400, 0, 10));
        let (output, report) = run(&mut ctrl, &input);
        assert_eq!(report.prop_rads, 0.0);
        assert_eq!(output.cmd.unwrap().ang_rate_rads, 0.0);

        // Moving
        input.vel = Some(vel_ned(1500, 0, 10));
        run(&mut ctrl, &input);
        assert_relative_eq!(ctrl.integral_rad(), -FRAC_PI_2 * 0.1 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_initial_integral() {
        let params = Params {
            initial_integral_rad: 0.05,
            ..Params::default()
        };
        let ctrl = WptCtrl::new(params, period()).unwrap();
        assert_eq!(ctrl.integral_rad(), 0.05);

        let params = Params {
            initial_integral_rad: -3.0,
            ..Params::default()
        };
        let ctrl = WptCtrl::new(params, period()).unwrap();
        assert_eq!(ctrl.integral_rad(), -0.1);
    }

    #[test]
    fn test_saturation() {
        let params = Params {
            initial_integral_rad: 0.1,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        for &dist in &[0.0, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2] {
            let mut input = east_input();
            input.target = Some(GeoPosition::new(0.0, dist));

            let (output, report) = run(&mut ctrl, &input);
            let limit = calc::rate_limit(dist, 4503.0);

            assert!(output.cmd.unwrap().ang_rate_rads.abs() <= limit);
            assert_eq!(report.rate_limited, dist <= 1e-4);
        }
    }

    #[test]
    fn test_non_finite_position_stops_turning() {
        let params = Params {
            initial_integral_rad: 0.1,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        let mut input = east_input();
        input.fix = Some(GeoPosition::new(f64::NAN, 0.0));
        let (output, report) = run(&mut ctrl, &input);

        assert_eq!(report.gate, NavGate::Navigating);
        assert!(report.dist_deg.is_nan());
        assert_eq!(report.rate_limit_rads, 0.0);
        assert!(report.rate_limited);
        assert_eq!(output.cmd.unwrap().ang_rate_rads, 0.0);

        let mut input = east_input();
        input.target = Some(GeoPosition::new(0.0, f64::INFINITY));
        let (output, report) = run(&mut ctrl, &input);

        assert_eq!(report.rate_limit_rads, 0.0);
        assert_eq!(output.cmd.unwrap().ang_rate_rads, 0.0);
        assert_eq!(ctrl.integral_rad(), 0.1);
    }

    #[test]
    fn test_degenerate_vectors() {
        let params = Params {
            initial_integral_rad: 0.05,
            k_i: 1.0,
            ..Params::default()
        };
        let mut ctrl = WptCtrl::new(params, period()).unwrap();

        // At the target
        let mut input = east_input();
        input.target = input.fix;
        let (output, report) = run(&mut ctrl, &input);
        let cmd = output.cmd.unwrap();
        assert!(report.degenerate_bearing);
        assert_eq!(report.angle_rad, 0.0);
        assert_eq!(cmd.ang_rate_rads, 0.0);
        assert_eq!(ctrl.integral_rad(), 0.05);

        // Stationary, only the integral contributes
        let mut input = east_input();
        input.vel = Some(vel_ned(0, 0, 10));
        let (output, report) = run(&mut ctrl, &input);
        assert!(report.degenerate_course);
        assert_eq!(output.debug_angle.unwrap().angle_rad, 0.0);
        assert_relative_eq!(output.cmd.unwrap().ang_rate_rads, 0.05);
        assert_eq!(ctrl.integral_rad(), 0.05);

        // Nonsense position
        let mut input = east_input();
        input.fix = Some(GeoPosition::new(f64::NAN, 0.0));
        let (output, _) = run(&mut ctrl, &input);
        assert_eq!(output.cmd.unwrap().ang_rate_rads, 0.0);
        assert_eq!(ctrl.integral_rad(), 0.05);
    }

    #[test]
    fn test_reverse() {
        let mut fwd = WptCtrl::new(Params::default(), period()).unwrap();
        let mut rev = WptCtrl::new(
            Params {
                reverse: true,
                ..Params::default()
            },
            period()
        ).unwrap();

        for &(n, e) in &[(1500, 0), (1000, 1000), (-700, 300), (0, -1500)] {
            let mut input = east_input();
            input.vel = Some(vel_ned(n, e, 10));

            let f = run(&mut fwd, &input).0.cmd.unwrap().ang_rate_rads;
            let r = run(&mut rev, &input).0.cmd.unwrap().ang_rate_rads;

            assert!(f != 0.0);
            assert_eq!(f, -r);
        }
    }

    #[test]
    fn test_invalid_cycle_period() {
        assert!(matches!(
            WptCtrl::new(Params::default(), Duration::from_secs(0)),
            Err(WptCtrlError::InvalidCyclePeriod)
        ));
    }
}
