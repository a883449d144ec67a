//! # imu-sensor - zero-copy IMU handles and a name-keyed registry
//!
//! A hardware driver owns the storage for an IMU's orientation, angular
//! velocity, linear acceleration and their covariances. It registers that
//! storage once; consumers then look sensors up by name and read live values
//! through typed views, with no copying.
//!
//! - [`ImuSensorHandle`]: cloneable read-only view with a [`Capabilities`] mask
//! - [`ImuSensorRegistry`]: name-keyed store, overwrite on duplicate names
//! - [`ImuStorage`]: ready-made driver-side storage
//! - C FFI for drivers and consumers outside Rust
//!
//! ## Quick Start
//! ```
//! use imu_sensor::{Capabilities, ImuSensorRegistry, ImuStorage};
//!
//! let storage = ImuStorage::new();
//! let mut registry = ImuSensorRegistry::new();
//! registry.register_sensor(storage.data("imu", "imu_link"));
//!
//! let handle = registry.sensor_handle("imu").unwrap();
//! assert!(handle.has(Capabilities::LINEAR_ACCELERATION));
//!
//! storage.set_linear_acceleration([0.0, 0.0, 9.81]);
//! let accel = handle.linear_acceleration().unwrap();
//! assert_eq!(accel.z(), 9.81);
//! ```
//!
//! All state lives in `Cell`s, so handles and registries stay on the thread
//! that owns the driver storage.

pub mod error;
pub mod types;
pub mod view;
pub mod handle;
pub mod registry;
pub mod storage;
pub mod config;
pub mod ffi;

pub use error::ImuSensorError;
pub use types::*;
pub use view::{Covariance, Quaternion, Vector3};
pub use handle::{ImuSensorData, ImuSensorHandle};
pub use registry::ImuSensorRegistry;
pub use storage::ImuStorage;

/// Result type alias for imu-sensor operations.
pub type Result<T> = std::result::Result<T, ImuSensorError>;
