use crate::handle::{ImuSensorData, ImuSensorHandle};
use crate::{ImuSensorError, Result};
use std::collections::BTreeMap;

/// Name-keyed store of IMU sensor handles.
///
/// Drivers register sensors during setup; consumers then look handles up by
/// name. The registry never owns the buffers its handles read from.
///
/// Registration needs `&mut self` and lookups `&self`, so a registry cannot be
/// mutated while another borrow is reading from it.
///
/// Handles read through `Cell`, so neither the registry nor its handles are
/// `Send` or `Sync`: every reader shares the driver's thread. Consumers on
/// other threads need their own copies, e.g. an [`ImuReading`] taken with
/// [`ImuSensorHandle::read`] and sent over, or the C API in [`crate::ffi`]
/// with the caller serializing reads against driver writes.
///
/// [`ImuReading`]: crate::ImuReading
#[derive(Debug, Clone, Default)]
pub struct ImuSensorRegistry<'a> {
    handles: BTreeMap<String, ImuSensorHandle<'a>>,
}

impl<'a> ImuSensorRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name used in lookup errors: the bare type name, without module
    /// path or lifetime parameters.
    pub fn interface_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Register a sensor under `data.name`.
    ///
    /// A sensor already registered under the same name is replaced. Handles
    /// previously obtained for that name keep reading from the old buffers.
    /// Names are not validated: the empty string is an ordinary key.
    pub fn register_sensor(&mut self, data: ImuSensorData<'a>) {
        let handle = ImuSensorHandle::new(data);
        let name = handle.name().to_string();
        log::debug!(
            "Registering IMU sensor '{}' (frame={}, capabilities={:?})",
            name,
            handle.frame_id(),
            handle.capabilities()
        );
        if let Some(previous) = self.handles.insert(name, handle) {
            log::warn!(
                "IMU sensor '{}' was already registered; replacing it",
                previous.name()
            );
        }
    }

    /// Names of all registered sensors, in lexicographic order.
    pub fn sensor_names(&self) -> Vec<String> {
        self.handles.keys().cloned().collect()
    }

    /// Get a handle for the sensor registered as `name`.
    pub fn sensor_handle(&self, name: &str) -> Result<ImuSensorHandle<'a>> {
        match self.handles.get(name) {
            Some(handle) => {
                log::trace!("Lookup of IMU sensor '{}'", name);
                Ok(handle.clone())
            }
            None => {
                log::debug!("IMU sensor '{}' is not registered", name);
                Err(ImuSensorError::NotFound {
                    name: name.to_string(),
                    interface: Self::interface_name(),
                })
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Remove a sensor, returning its handle if it was registered.
    pub fn unregister_sensor(&mut self, name: &str) -> Option<ImuSensorHandle<'a>> {
        let removed = self.handles.remove(name);
        if removed.is_some() {
            log::debug!("Unregistered IMU sensor '{}'", name);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Registered handles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ImuSensorHandle<'a>> {
        self.handles.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capabilities;
    use crate::view::cells;

    #[test]
    fn test_missing_sensor() {
        let registry = ImuSensorRegistry::new();
        let err = registry.sensor_handle("missing").unwrap_err();
        assert!(matches!(err, ImuSensorError::NotFound { .. }));
        assert!(err.to_string().contains("'missing'"));
        assert_eq!(
            err.to_string(),
            "Could not find IMU sensor 'missing' in ImuSensorRegistry"
        );
        assert_eq!(err.sensor_name(), "missing");
    }

    #[test]
    fn test_interface_name_is_bare_type_name() {
        assert_eq!(ImuSensorRegistry::interface_name(), "ImuSensorRegistry");
    }

    #[test]
    fn test_missing_sensor_in_populated_registry() {
        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(ImuSensorData::new("imu_a", "a"));
        let err = registry.sensor_handle("imu_b").unwrap_err();
        assert!(err.to_string().contains("imu_b"));
    }

    #[test]
    fn test_register_and_lookup() {
        let accel = cells([0.0, 0.0, 9.81]);
        let mut data = ImuSensorData::new("imu", "imu_link");
        data.linear_acceleration = Some(&accel);

        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(data);

        let handle = registry.sensor_handle("imu").unwrap();
        assert_eq!(handle.name(), "imu");
        assert_eq!(handle.frame_id(), "imu_link");
        assert_eq!(handle.capabilities(), Capabilities::LINEAR_ACCELERATION);
        assert!(handle.linear_acceleration().unwrap().aliases(&accel));
    }

    #[test]
    fn test_handle_sees_driver_writes() {
        let orientation = cells([0.0, 0.0, 0.0, 1.0]);
        let mut data = ImuSensorData::new("imu", "imu_link");
        data.orientation = Some(&orientation);

        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(data);
        let handle = registry.sensor_handle("imu").unwrap();

        orientation[2].set(0.7071);
        orientation[3].set(0.7071);
        assert_eq!(handle.orientation().unwrap().coords(), [0.0, 0.0, 0.7071, 0.7071]);
    }

    #[test]
    fn test_duplicate_name_overwrites() {
        let first = cells([1.0, 1.0, 1.0]);
        let second = cells([2.0, 2.0, 2.0]);

        let mut a = ImuSensorData::new("imu", "frame_a");
        a.angular_velocity = Some(&first);
        let mut b = ImuSensorData::new("imu", "frame_b");
        b.linear_acceleration = Some(&second);

        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(a);
        let old = registry.sensor_handle("imu").unwrap();
        registry.register_sensor(b);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.sensor_names(), vec!["imu".to_string()]);

        let current = registry.sensor_handle("imu").unwrap();
        assert_eq!(current.frame_id(), "frame_b");
        assert_eq!(current.capabilities(), Capabilities::LINEAR_ACCELERATION);
        assert!(current.linear_acceleration().unwrap().aliases(&second));

        // Handles taken before the overwrite are untouched.
        assert_eq!(old.frame_id(), "frame_a");
        assert!(old.angular_velocity().unwrap().aliases(&first));
    }

    #[test]
    fn test_sensor_names() {
        let mut registry = ImuSensorRegistry::new();
        for name in ["wrist", "base", "head", "base"] {
            registry.register_sensor(ImuSensorData::new(name, "world"));
        }
        assert_eq!(registry.sensor_names(), vec!["base", "head", "wrist"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("head"));
        assert!(!registry.contains("tail"));

        let names: Vec<&str> = registry.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["base", "head", "wrist"]);
    }

    #[test]
    fn test_empty_name_is_a_key() {
        let mut registry = ImuSensorRegistry::new();
        registry.register_sensor(ImuSensorData::new("", "world"));
        assert!(registry.sensor_handle("").is_ok());
        assert_eq!(registry.sensor_names(), vec![String::new()]);
    }

    #[test]
    fn test_unregister() {
        let mut registry = ImuSensorRegistry::new();
        assert!(registry.is_empty());
        registry.register_sensor(ImuSensorData::new("a", "world"));
        registry.register_sensor(ImuSensorData::new("b", "world"));

        let removed = registry.unregister_sensor("a").unwrap();
        assert_eq!(removed.name(), "a");
        assert!(registry.unregister_sensor("a").is_none());
        assert_eq!(registry.sensor_names(), vec!["b"]);
        assert!(registry.sensor_handle("a").is_err());
    }
}
