bitflags::bitflags! {
    /// Which fields of an IMU sensor are readable through a handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(C)]
    pub struct Capabilities: u16 {
        const ORIENTATION                    = 0x01;
        const ORIENTATION_COVARIANCE         = 0x02;
        const ANGULAR_VELOCITY               = 0x04;
        const ANGULAR_VELOCITY_COVARIANCE    = 0x08;
        const LINEAR_ACCELERATION            = 0x10;
        const LINEAR_ACCELERATION_COVARIANCE = 0x20;
    }
}

/// Owned snapshot of an IMU sensor's state, taken through a handle.
///
/// Fields the sensor does not provide are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImuReading {
    /// Quaternion [qx, qy, qz, qw].
    pub orientation: Option<[f64; 4]>,
    /// Row-major 3x3 covariance about (x, y, z).
    pub orientation_covariance: Option<[f64; 9]>,
    /// Angular velocity [x, y, z] in sensor-frame axes.
    pub angular_velocity: Option<[f64; 3]>,
    pub angular_velocity_covariance: Option<[f64; 9]>,
    /// Linear acceleration [x, y, z] in sensor-frame axes.
    pub linear_acceleration: Option<[f64; 3]>,
    pub linear_acceleration_covariance: Option<[f64; 9]>,
}

impl ImuReading {
    /// Capability mask describing which fields of this snapshot are populated.
    pub fn capabilities(&self) -> Capabilities {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_bits_match_header_layout() {
        assert_eq!(Capabilities::ORIENTATION.bits(), 0x01);
        assert_eq!(Capabilities::ORIENTATION_COVARIANCE.bits(), 0x02);
        assert_eq!(Capabilities::ANGULAR_VELOCITY.bits(), 0x04);
        assert_eq!(Capabilities::ANGULAR_VELOCITY_COVARIANCE.bits(), 0x08);
        assert_eq!(Capabilities::LINEAR_ACCELERATION.bits(), 0x10);
        assert_eq!(Capabilities::LINEAR_ACCELERATION_COVARIANCE.bits(), 0x20);
        assert_eq!(Capabilities::all().bits(), 0x3F);
    }

    #[test]
    fn test_reading_capabilities() {
        let reading = ImuReading {
            angular_velocity: Some([0.0; 3]),
            linear_acceleration_covariance: Some([0.0; 9]),
            ..Default::default()
        };
        assert_eq!(
            reading.capabilities(),
            Capabilities::ANGULAR_VELOCITY | Capabilities::LINEAR_ACCELERATION_COVARIANCE
        );
        assert!(ImuReading::default().capabilities().is_empty());
    }
}
