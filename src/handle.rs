use crate::types::{Capabilities, ImuReading};
use crate::view::{Covariance, Quaternion, Vector3};
use std::cell::Cell;

/// Registration record for an IMU sensor.
///
/// Holds borrows of the driver's buffers. Absent fields stay `None`; each
/// field is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct ImuSensorData<'a> {
    pub name: String,
    /// Reference frame the sensor is attached to.
    pub frame_id: String,
    /// Quaternion storage (x, y, z, w).
    pub orientation: Option<&'a [Cell<f64>; 4]>,
    /// Row-major 3x3 covariance about (x, y, z).
    pub orientation_covariance: Option<&'a [Cell<f64>; 9]>,
    /// Angular velocity storage (x, y, z).
    pub angular_velocity: Option<&'a [Cell<f64>; 3]>,
    pub angular_velocity_covariance: Option<&'a [Cell<f64>; 9]>,
    /// Linear acceleration storage (x, y, z).
    pub linear_acceleration: Option<&'a [Cell<f64>; 3]>,
    pub linear_acceleration_covariance: Option<&'a [Cell<f64>; 9]>,
}

impl<'a> ImuSensorData<'a> {
    /// Descriptor with a name and frame but no buffers.
    pub fn new(name: impl Into<String>, frame_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_id: frame_id.into(),
            ..Default::default()
        }
    }
}

/// Read-only handle to an IMU sensor's state.
///
/// Cloning a handle is cheap: clones read from the same driver buffers.
#[derive(Debug, Clone)]
pub struct ImuSensorHandle<'a> {
    name: String,
    frame_id: String,
    orientation: Option<Quaternion<'a>>,
    orientation_covariance: Option<Covariance<'a>>,
    angular_velocity: Option<Vector3<'a>>,
    angular_velocity_covariance: Option<Covariance<'a>>,
    linear_acceleration: Option<Vector3<'a>>,
    linear_acceleration_covariance: Option<Covariance<'a>>,
    capabilities: Capabilities,
}

impl<'a> ImuSensorHandle<'a> {
    pub fn new(data: ImuSensorData<'a>) -> Self {
        let mut handle = ImuSensorHandle {
            name: data.name,
            frame_id: data.frame_id,
            orientation: data.orientation.map(Quaternion::new),
            orientation_covariance: data.orientation_covariance.map(Covariance::new),
            angular_velocity: data.angular_velocity.map(Vector3::new),
            angular_velocity_covariance: data.angular_velocity_covariance.map(Covariance::new),
            linear_acceleration: data.linear_acceleration.map(Vector3::new),
            linear_acceleration_covariance: data
                .linear_acceleration_covariance
                .map(Covariance::new),
            capabilities: Capabilities::empty(),
        };
        handle.capabilities = handle.present_fields();
        handle
    }

    fn present_fields(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::ORIENTATION, self.orientation.is_some());
        caps.set(
            Capabilities::ORIENTATION_COVARIANCE,
            self.orientation_covariance.is_some(),
        );
        caps.set(Capabilities::ANGULAR_VELOCITY, self.angular_velocity.is_some());
        caps.set(
            Capabilities::ANGULAR_VELOCITY_COVARIANCE,
            self.angular_velocity_covariance.is_some(),
        );
        caps.set(
            Capabilities::LINEAR_ACCELERATION,
            self.linear_acceleration.is_some(),
        );
        caps.set(
            Capabilities::LINEAR_ACCELERATION_COVARIANCE,
            self.linear_acceleration_covariance.is_some(),
        );
        caps
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// Fields readable through this handle, fixed at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether every field in `caps` is readable.
    pub fn has(&self, caps: Capabilities) -> bool {
        self.capabilities.contains(caps)
    }

    pub fn orientation(&self) -> Option<Quaternion<'a>> {
        self.orientation
    }

    pub fn orientation_covariance(&self) -> Option<Covariance<'a>> {
        self.orientation_covariance
    }

    pub fn angular_velocity(&self) -> Option<Vector3<'a>> {
        self.angular_velocity
    }

    pub fn angular_velocity_covariance(&self) -> Option<Covariance<'a>> {
        self.angular_velocity_covariance
    }

    pub fn linear_acceleration(&self) -> Option<Vector3<'a>> {
        self.linear_acceleration
    }

    pub fn linear_acceleration_covariance(&self) -> Option<Covariance<'a>> {
        self.linear_acceleration_covariance
    }

    /// Copy the current values of every present field.
    pub fn read(&self) -> ImuReading {
        ImuReading {
            orientation: self.orientation.map(|q| q.coords()),
            orientation_covariance: self.orientation_covariance.map(|c| c.values()),
            angular_velocity: self.angular_velocity.map(|v| v.get()),
            angular_velocity_covariance: self.angular_velocity_covariance.map(|c| c.values()),
            linear_acceleration: self.linear_acceleration.map(|v| v.get()),
            linear_acceleration_covariance: self
                .linear_acceleration_covariance
                .map(|c| c.values()),
        }
    }
}

impl<'a> From<ImuSensorData<'a>> for ImuSensorHandle<'a> {
    fn from(data: ImuSensorData<'a>) -> Self {
        ImuSensorHandle::new(data)
    }
}
