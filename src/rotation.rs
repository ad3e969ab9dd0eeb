//! Incremental rotation about the z-axis
//!
//! A [`Rotation`] holds the per-frame rotation increment together with its
//! cosine and sine, recomputed on every [`Rotation::set_rotation_angle`]. Each
//! [`Rotation::rotate`] call applies that increment once, in place.

use glam::Vec2;

use crate::error::{ensure_len, KernelError, KernelResult};

// Leading Taylor coefficients of cos(z) and sin(z).
const C0: f32 = 1.0;
const C1: f32 = -1.0 / 2.0;
const C2: f32 = 1.0 / 24.0;
const S0: f32 = 1.0;
const S1: f32 = -1.0 / 6.0;

/// How cosine and sine of the rotation angle are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrigMode {
    /// `f32::sin_cos`.
    #[default]
    Exact,
    /// Truncated Taylor series evaluated with Horner's method.
    ///
    /// Only accurate for angles of a few tenths of a radian. Repeated
    /// application drifts away from the exact rotation, and large angles
    /// do not produce a rotation at all.
    SmallAngle,
}

/// Cosine for small `z`, given `z^2`.
#[inline(always)]
fn small_angle_cos(z_sq: f32) -> f32 {
    C0 + z_sq * (C1 + z_sq * C2)
}

/// Sine for small `z`, given `z` and `z^2`.
#[inline(always)]
fn small_angle_sin(z: f32, z_sq: f32) -> f32 {
    z * (S0 + z_sq * S1)
}

/// Current rotation increment and its precomputed cosine and sine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    angle: f32,
    cos_angle: f32,
    sin_angle: f32,
    mode: TrigMode,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity(TrigMode::default())
    }
}

impl Rotation {
    pub fn new(angle: f32, mode: TrigMode) -> Self {
        let mut rotation = Self::identity(mode);
        rotation.set_rotation_angle(angle);
        rotation
    }

    /// Zero rotation: `cos = 1`, `sin = 0`.
    pub fn identity(mode: TrigMode) -> Self {
        Self {
            angle: 0.0,
            cos_angle: 1.0,
            sin_angle: 0.0,
            mode,
        }
    }

    /// Store a new increment (radians) and recompute cosine and sine.
    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.angle = angle;
        match self.mode {
            TrigMode::Exact => {
                let (sin_angle, cos_angle) = angle.sin_cos();
                self.cos_angle = cos_angle;
                self.sin_angle = sin_angle;
            }
            TrigMode::SmallAngle => {
                let angle_squared = angle * angle;
                self.cos_angle = small_angle_cos(angle_squared);
                self.sin_angle = small_angle_sin(angle, angle_squared);
            }
        }
    }

    /// Switch evaluation mode, keeping the current angle.
    pub fn set_mode(&mut self, mode: TrigMode) {
        self.mode = mode;
        self.set_rotation_angle(self.angle);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn cos_angle(&self) -> f32 {
        self.cos_angle
    }

    pub fn sin_angle(&self) -> f32 {
        self.sin_angle
    }

    pub fn mode(&self) -> TrigMode {
        self.mode
    }

    /// Rotate a single point in the xy-plane.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.cos_angle * point.x - self.sin_angle * point.y,
            self.cos_angle * point.y + self.sin_angle * point.x,
        )
    }

    /// Rotate the first `n_pts` vertices of an xyz vertex buffer in place.
    ///
    /// Only the x and y components change; z and everything past
    /// `3 * n_pts` are left as they are.
    pub fn rotate(&self, buffer: &mut [f32], n_pts: usize) -> KernelResult<()> {
        let required = n_pts.checked_mul(3).ok_or(KernelError::BufferTooSmall {
            required: usize::MAX,
            actual: buffer.len(),
        })?;
        ensure_len(buffer.len(), required)?;

        for vertex in buffer[..required].chunks_exact_mut(3) {
            let rotated = self.apply(Vec2::new(vertex[0], vertex[1]));
            vertex[0] = rotated.x;
            vertex[1] = rotated.y;
        }
        Ok(())
    }
}
