use crate::handle::ImuSensorData;
use crate::view::{cells, store};
use std::cell::Cell;

/// Driver-side storage for one IMU.
///
/// The driver keeps this alive for as long as the sensor stays registered and
/// writes new samples through `&self`; every handle built from [`data`]
/// observes them on its next read.
///
/// [`data`]: ImuStorage::data
#[derive(Debug)]
pub struct ImuStorage {
    pub orientation: [Cell<f64>; 4],
    pub orientation_covariance: [Cell<f64>; 9],
    pub angular_velocity: [Cell<f64>; 3],
    pub angular_velocity_covariance: [Cell<f64>; 9],
    pub linear_acceleration: [Cell<f64>; 3],
    pub linear_acceleration_covariance: [Cell<f64>; 9],
}

impl ImuStorage {
    /// Identity orientation, zero everywhere else.
    pub fn new() -> Self {
        Self {
            orientation: cells([0.0, 0.0, 0.0, 1.0]),
            orientation_covariance: cells([0.0; 9]),
            angular_velocity: cells([0.0; 3]),
            angular_velocity_covariance: cells([0.0; 9]),
            linear_acceleration: cells([0.0; 3]),
            linear_acceleration_covariance: cells([0.0; 9]),
        }
    }

    /// Descriptor exposing all six buffers.
    pub fn data(&self, name: impl Into<String>, frame_id: impl Into<String>) -> ImuSensorData<'_> {
        ImuSensorData {
            name: name.into(),
            frame_id: frame_id.into(),
            orientation: Some(&self.orientation),
            orientation_covariance: Some(&self.orientation_covariance),
            angular_velocity: Some(&self.angular_velocity),
            angular_velocity_covariance: Some(&self.angular_velocity_covariance),
            linear_acceleration: Some(&self.linear_acceleration),
            linear_acceleration_covariance: Some(&self.linear_acceleration_covariance),
        }
    }

    /// Quaternion [qx, qy, qz, qw].
    pub fn set_orientation(&self, q: [f64; 4]) {
        store(&self.orientation, q);
    }

    pub fn set_orientation_covariance(&self, cov: [f64; 9]) {
        store(&self.orientation_covariance, cov);
    }

    pub fn set_angular_velocity(&self, v: [f64; 3]) {
        store(&self.angular_velocity, v);
    }

    pub fn set_angular_velocity_covariance(&self, cov: [f64; 9]) {
        store(&self.angular_velocity_covariance, cov);
    }

    pub fn set_linear_acceleration(&self, a: [f64; 3]) {
        store(&self.linear_acceleration, a);
    }

    pub fn set_linear_acceleration_covariance(&self, cov: [f64; 9]) {
        store(&self.linear_acceleration_covariance, cov);
    }
}

impl Default for ImuStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, ImuSensorRegistry};

    #[test]
    fn test_default_is_identity() {
        let storage = ImuStorage::default();
        let handle = crate::ImuSensorHandle::new(storage.data("imu", "imu_link"));
        assert_eq!(handle.orientation().unwrap().coords(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(handle.angular_velocity().unwrap().get(), [0.0; 3]);
    }

    #[test]
    fn test_registered_storage_tracks_updates() {
        let storage = ImuStorage::new();
        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(storage.data("imu", "imu_link"));

        let handle = registry.sensor_handle("imu").unwrap();
        assert_eq!(handle.capabilities(), Capabilities::all());

        storage.set_linear_acceleration([0.1, 0.2, 9.8]);
        storage.set_angular_velocity_covariance([0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0]);

        let reading = handle.read();
        assert_eq!(reading.linear_acceleration, Some([0.1, 0.2, 9.8]));
        assert_eq!(handle.angular_velocity_covariance().unwrap().get(1, 1), 0.04);

        storage.set_orientation([0.0, 1.0, 0.0, 0.0]);
        storage.set_orientation_covariance([0.01; 9]);
        storage.set_angular_velocity([0.3, 0.0, 0.0]);
        storage.set_linear_acceleration_covariance([0.02; 9]);

        let reading = handle.read();
        assert_eq!(reading.orientation, Some([0.0, 1.0, 0.0, 0.0]));
        assert_eq!(reading.orientation_covariance, Some([0.01; 9]));
        assert_eq!(reading.angular_velocity, Some([0.3, 0.0, 0.0]));
        assert_eq!(reading.linear_acceleration_covariance, Some([0.02; 9]));
    }
}
