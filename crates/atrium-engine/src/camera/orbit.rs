use glam::{EulerRot, Mat4, Quat, Vec3};

/// Eye offset before rotation; its length is the orbit radius.
pub const BASE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -8.0);

/// Point the camera always looks at.
pub const TARGET: Vec3 = Vec3::ZERO;

pub const DEFAULT_PITCH: f32 = 30.0;
pub const DEFAULT_YAW: f32 = 0.0;
pub const DEFAULT_FOV: f32 = 50.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const FOV_MIN: f32 = 1.0;
pub const FOV_MAX: f32 = 180.0;

pub const Z_NEAR: f32 = 0.01;
pub const Z_FAR: f32 = 100.0;

/// Raw input is scaled by this factor before being accumulated.
pub const INPUT_SCALE: f32 = 0.25;

/// Orbit camera around [`TARGET`].
///
/// Angles are stored in degrees. The eye position is never stored; it is
/// derived from (yaw, pitch) whenever it is needed, so it cannot drift from
/// the rotation that defines it. View and projection are rebuilt only through
/// the methods below.
///
/// Conventions are left-handed with a [0, 1] depth range, which is what wgpu
/// clip space expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    yaw: f32,
    pitch: f32,
    fov: f32,

    width: u32,
    height: u32,

    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Creates a camera for a `width` x `height` viewport.
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            fov: DEFAULT_FOV,
            width,
            height,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update(0.0, 0.0);
        camera.resize(width, height);
        camera
    }

    /// Accumulates scaled yaw/pitch deltas and rebuilds the view matrix.
    pub fn update(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta * INPUT_SCALE;
        self.pitch = clamp_pitch(self.pitch + pitch_delta * INPUT_SCALE);

        self.view = view_matrix(self.yaw, self.pitch);
    }

    /// Rebuilds the projection for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.projection = projection_matrix(self.fov, width, height);
    }

    /// Zooms by narrowing the field of view; positive `delta` zooms in.
    pub fn update_fov(&mut self, delta: f32) {
        self.fov = clamp_fov(self.fov - delta);
        self.resize(self.width, self.height);
    }

    /// Current eye position, derived from yaw and pitch.
    pub fn position(&self) -> Vec3 {
        orbit_eye(self.yaw, self.pitch)
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Viewport size the projection was last built for.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Aspect ratio the projection was last built for.
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

#[inline]
pub fn clamp_fov(fov: f32) -> f32 {
    fov.clamp(FOV_MIN, FOV_MAX)
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}

/// Rotates [`BASE_OFFSET`] by yaw (about Y) and pitch (about X), roll fixed at zero.
pub fn orbit_eye(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let rotation = Quat::from_euler(
        EulerRot::YXZ,
        yaw_deg.to_radians(),
        pitch_deg.to_radians(),
        0.0,
    );
    rotation * BASE_OFFSET
}

pub fn view_matrix(yaw_deg: f32, pitch_deg: f32) -> Mat4 {
    Mat4::look_at_lh(orbit_eye(yaw_deg, pitch_deg), TARGET, Vec3::Y)
}

pub fn projection_matrix(fov_deg: f32, width: u32, height: u32) -> Mat4 {
    Mat4::perspective_lh(
        fov_deg.to_radians(),
        aspect_ratio(width, height),
        Z_NEAR,
        Z_FAR,
    )
}
