//! Velocity sources
//!
//! The velocity stream carries different sample shapes depending on the receiver driver. A
//! [`VelSource`] turns whichever shape is configured into a [`Course`], so the rest of the
//! controller doesn't care where the velocity came from.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use comms_if::eqpt::gnss::VelSample;

use super::calc;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The vehicle's motion over the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    /// Unit vector in the direction of travel, `None` when stationary.
    pub dir: Option<Vector2<f64>>,

    /// Measured ground speed, not to be confused with the demanded speed.
    ///
    /// Units: course units (millimeters/second with the default scales)
    pub speed: f64,

    /// Number of satellites in the velocity solution, if the source reports it.
    pub n_sats: Option<u8>,
}

/// Source for [`VelSample::VelNed`] samples, which are already in millimeters/second.
#[derive(Debug, Clone, Copy)]
pub struct VelNedSource {
    pub scale: f64,
}

/// Source for [`VelSample::Vector`] samples, which are in meters/second.
#[derive(Debug, Clone, Copy)]
pub struct VelVectorSource {
    pub scale: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Which velocity source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelSourceKind {
    VelNed,
    Vector,
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Something which can produce a course from a velocity sample.
pub trait VelSource: Send {
    /// Compute the course from a sample.
    ///
    /// Returns `None` if the sample is not of the shape this source handles.
    fn course(&self, sample: &VelSample) -> Option<Course>;
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Course {
    /// Build a course from north and east velocity components.
    pub fn from_ne(north: f64, east: f64, n_sats: Option<u8>) -> Self {
        let (dir, speed) = calc::unit(Vector2::new(north, east));

        Self { dir, speed, n_sats }
    }
}

impl VelSourceKind {
    /// Scale which brings samples of this kind into millimeters/second.
    pub fn default_scale(&self) -> f64 {
        match self {
            VelSourceKind::VelNed => 1.0,
            VelSourceKind::Vector => 1000.0,
        }
    }

    /// Build the source, using `scale` if given or the default scale otherwise.
    pub fn build(&self, scale: Option<f64>) -> Box<dyn VelSource> {
        let scale = scale.unwrap_or_else(|| self.default_scale());

        match self {
            VelSourceKind::VelNed => Box::new(VelNedSource { scale }),
            VelSourceKind::Vector => Box::new(VelVectorSource { scale }),
        }
    }
}

impl VelSource for VelNedSource {
    fn course(&self, sample: &VelSample) -> Option<Course> {
        match sample {
            VelSample::VelNed(v) => Some(Course::from_ne(
                v.n_mms as f64 * self.scale,
                v.e_mms as f64 * self.scale,
                Some(v.n_sats),
            )),
            _ => None,
        }
    }
}

impl VelSource for VelVectorSource {
    fn course(&self, sample: &VelSample) -> Option<Course> {
        match sample {
            VelSample::Vector(v) => Some(Course::from_ne(
                v.x * self.scale,
                v.y * self.scale,
                None,
            )),
            _ => None,
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

    #[test]
    fn test_vel_ned_source() {
        let source = VelSourceKind::VelNed.build(None);

        let course = source
            .course(&VelSample::VelNed(VelNed {
                n_mms: 0,
                e_mms: -1500,
                d_mms: 20,
                n_sats: 7,
            }))
            .unwrap();

        assert_relative_eq!(course.speed, 1500.0);
        assert_eq!(course.dir, Some(Vector2::new(0.0, -1.0)));
        assert_eq!(course.n_sats, Some(7));

        assert!(source
            .course(&VelSample::Vector(VelVector::default()))
            .is_none());
    }

    #[test]
    fn test_vector_source_scale() {
        let source = VelSourceKind::Vector.build(None);

        let course = source
            .course(&VelSample::Vector(VelVector {
                x: 0.6,
                y: 0.8,
                z: 0.0,
            }))
            .unwrap();

        assert_relative_eq!(course.speed, 1000.0, epsilon = 1e-9);
        assert_eq!(course.n_sats, None);

        // Scale override
        let source = VelSourceKind::Vector.build(Some(1.0));
        let course = source
            .course(&VelSample::Vector(VelVector {
                x: 0.6,
                y: 0.8,
                z: 0.0,
            }))
            .unwrap();
        assert_relative_eq!(course.speed, 1.0, epsilon = 1e-12);

        assert!(source
            .course(&VelSample::VelNed(VelNed::default()))
            .is_none());
    }

    #[test]
    fn test_stationary_course() {
        let course = Course::from_ne(0.0, 0.0, Some(9));

        assert_eq!(course.dir, None);
        assert_eq!(course.speed, 0.0);
    }
}
