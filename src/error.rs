use std::fmt;

/// Errors returned by the sensor registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImuSensorError {
    /// No handle is registered under the requested name.
    #[error("Could not find IMU sensor '{name}' in {interface}")]
    NotFound {
        /// The missing sensor name.
        name: String,
        /// Display name of the interface the lookup went through.
        interface: &'static str,
    },
}

impl ImuSensorError {
    /// The sensor name this error refers to.
    pub fn sensor_name(&self) -> &str {
        match self {
            ImuSensorError::NotFound { name, .. } => name,
        }
    }
}

/// Thread-safe last-error storage for the C FFI layer.
pub(crate) struct LastError {
    message: std::sync::Mutex<String>,
}

impl LastError {
    pub const fn new() -> Self {
        Self {
            message: std::sync::Mutex::new(String::new()),
        }
    }

    pub fn set(&self, err: &ImuSensorError) {
        if let Ok(mut msg) = self.message.lock() {
            *msg = fmt::format(format_args!("{}\0", err));
        }
    }

    /// Record a failure that has no `ImuSensorError` (bad FFI arguments).
    pub fn set_message(&self, message: &str) {
        if let Ok(mut msg) = self.message.lock() {
            *msg = fmt::format(format_args!("{}\0", message));
        }
    }

    pub fn as_ptr(&self) -> *const std::ffi::c_char {
        match self.message.lock() {
            Ok(msg) if !msg.is_empty() => msg.as_ptr() as *const std::ffi::c_char,
            _ => std::ptr::null(),
        }
    }
}
