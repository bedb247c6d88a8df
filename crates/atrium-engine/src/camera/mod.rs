//! Orbit camera.
//!
//! Yaw/pitch orbit around a fixed target with zoom expressed as field of view.

mod orbit;

pub use orbit::{
    Camera, aspect_ratio, clamp_fov, clamp_pitch, orbit_eye, projection_matrix, view_matrix,
    BASE_OFFSET, DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_YAW, FOV_MAX, FOV_MIN, INPUT_SCALE,
    PITCH_LIMIT, TARGET, Z_FAR, Z_NEAR,
};
