//! C FFI layer for imu-sensor.
//!
//! Lets C/C++ drivers register raw `double` buffers and C consumers read them
//! back through an opaque registry pointer.
//! The generated C header is written to `include/imu_sensor.h` by cbindgen.
//!
//! Buffers passed to `imu_register_sensor` are aliased, not copied: they must
//! stay valid until the registry is freed, and must not be written while a
//! read call is in progress on another thread.

use crate::error::LastError;
use crate::handle::{ImuSensorData, ImuSensorHandle};
use crate::registry::ImuSensorRegistry;
use std::cell::Cell;
use std::ffi::{c_char, c_int, CStr};

static LAST_ERROR: LastError = LastError::new();

/// Opaque registry handle for C consumers.
pub struct ImuRegistry(ImuSensorRegistry<'static>);

/// Sensor registration record in C-compatible layout.
///
/// Any buffer pointer may be null to mark the field as absent.
#[repr(C)]
pub struct ImuSensorDesc {
    /// Null-terminated sensor name.
    pub name: *const c_char,
    /// Null-terminated frame id (null is treated as empty).
    pub frame_id: *const c_char,
    /// 4 doubles: quaternion [qx, qy, qz, qw].
    pub orientation: *const f64,
    /// 9 doubles, row-major.
    pub orientation_covariance: *const f64,
    /// 3 doubles: [x, y, z].
    pub angular_velocity: *const f64,
    /// 9 doubles, row-major.
    pub angular_velocity_covariance: *const f64,
    /// 3 doubles: [x, y, z].
    pub linear_acceleration: *const f64,
    /// 9 doubles, row-major.
    pub linear_acceleration_covariance: *const f64,
}

/// Snapshot of a sensor in C-compatible layout.
///
/// Fields whose capability bit is clear are zero-filled.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ImuSample {
    /// Capability bitmap (see `Capabilities`).
    pub capabilities: u16,
    pub orientation: [f64; 4],
    pub orientation_covariance: [f64; 9],
    pub angular_velocity: [f64; 3],
    pub angular_velocity_covariance: [f64; 9],
    pub linear_acceleration: [f64; 3],
    pub linear_acceleration_covariance: [f64; 9],
}

impl From<&ImuSensorHandle<'_>> for ImuSample {
    fn from(handle: &ImuSensorHandle<'_>) -> Self {
        let reading = handle.read();
        ImuSample {
            capabilities: handle.capabilities().bits(),
            orientation: reading.orientation.unwrap_or_default(),
            orientation_covariance: reading.orientation_covariance.unwrap_or_default(),
            angular_velocity: reading.angular_velocity.unwrap_or_default(),
            angular_velocity_covariance: reading.angular_velocity_covariance.unwrap_or_default(),
            linear_acceleration: reading.linear_acceleration.unwrap_or_default(),
            linear_acceleration_covariance: reading
                .linear_acceleration_covariance
                .unwrap_or_default(),
        }
    }
}

/// Reinterpret a C buffer as cells. `Cell<f64>` has the same layout as `f64`.
unsafe fn cell_buffer<const N: usize>(ptr: *const f64) -> Option<&'static [Cell<f64>; N]> {
    (ptr as *const [Cell<f64>; N]).as_ref()
}

unsafe fn c_str_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Record an argument error and return the C failure code.
fn invalid_argument(what: &str) -> c_int {
    LAST_ERROR.set_message(&format!("Invalid argument: {} is null", what));
    -1
}

unsafe fn lookup(reg: *const ImuRegistry, name: *const c_char) -> Option<ImuSensorHandle<'static>> {
    if reg.is_null() {
        invalid_argument("registry");
        return None;
    }
    let Some(name) = c_str_to_string(name) else {
        invalid_argument("sensor name");
        return None;
    };
    match (*reg).0.sensor_handle(&name) {
        Ok(handle) => Some(handle),
        Err(e) => {
            LAST_ERROR.set(&e);
            None
        }
    }
}

/// Create an empty registry. Free it with `imu_registry_free`.
#[no_mangle]
pub extern "C" fn imu_registry_new() -> *mut ImuRegistry {
    Box::into_raw(Box::new(ImuRegistry(ImuSensorRegistry::new())))
}

/// Free a registry and every handle it holds. Registered buffers are not touched.
///
/// # Safety
/// `reg` must be a pointer returned by `imu_registry_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn imu_registry_free(reg: *mut ImuRegistry) {
    if !reg.is_null() {
        drop(Box::from_raw(reg));
    }
}

/// Register a sensor, replacing any sensor with the same name.
/// Returns 0 on success, -1 if `reg`, `desc` or `desc->name` is null
/// (check `imu_last_error()`).
///
/// # Safety
/// `reg` must be a valid registry pointer, or null. `desc` must point to a valid
/// `ImuSensorDesc`, or be null. Every non-null buffer in `desc` must hold the
/// documented number of doubles and outlive the registry.
#[no_mangle]
pub unsafe extern "C" fn imu_register_sensor(
    reg: *mut ImuRegistry,
    desc: *const ImuSensorDesc,
) -> c_int {
    if reg.is_null() {
        return invalid_argument("registry");
    }
    if desc.is_null() {
        return invalid_argument("sensor descriptor");
    }
    let desc = &*desc;
    let Some(name) = c_str_to_string(desc.name) else {
        return invalid_argument("sensor name");
    };

    let data = ImuSensorData {
        name,
        frame_id: c_str_to_string(desc.frame_id).unwrap_or_default(),
        orientation: cell_buffer(desc.orientation),
        orientation_covariance: cell_buffer(desc.orientation_covariance),
        angular_velocity: cell_buffer(desc.angular_velocity),
        angular_velocity_covariance: cell_buffer(desc.angular_velocity_covariance),
        linear_acceleration: cell_buffer(desc.linear_acceleration),
        linear_acceleration_covariance: cell_buffer(desc.linear_acceleration_covariance),
    };

    (*reg).0.register_sensor(data);
    0
}

/// Number of registered sensors, or -1 if `reg` is null.
/// Saturates at `INT_MAX`.
///
/// # Safety
/// `reg` must be a valid registry pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn imu_registry_len(reg: *const ImuRegistry) -> c_int {
    if reg.is_null() {
        return invalid_argument("registry");
    }
    len_to_c_int((*reg).0.len())
}

fn len_to_c_int(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

/// Capability bitmap of sensor `name`, or -1 if it is not registered.
///
/// # Safety
/// `reg` must be a valid registry pointer, or null. `name` must be a
/// null-terminated string, or null.
#[no_mangle]
pub unsafe extern "C" fn imu_sensor_capabilities(
    reg: *const ImuRegistry,
    name: *const c_char,
) -> c_int {
    match lookup(reg, name) {
        Some(handle) => c_int::from(handle.capabilities().bits()),
        None => -1,
    }
}

/// Read the current state of sensor `name` into `out`.
/// Returns 0 on success, -1 on error (check `imu_last_error()`).
///
/// # Safety
/// `reg` must be a valid registry pointer, or null. `name` must be a
/// null-terminated string, or null. `out` must be valid for writes, or null.
#[no_mangle]
pub unsafe extern "C" fn imu_sensor_read(
    reg: *const ImuRegistry,
    name: *const c_char,
    out: *mut ImuSample,
) -> c_int {
    if out.is_null() {
        return invalid_argument("output sample");
    }
    match lookup(reg, name) {
        Some(handle) => {
            out.write(ImuSample::from(&handle));
            0
        }
        None => -1,
    }
}

/// Get the last error message. Returns NULL if no call has failed yet.
/// Every call returning -1 replaces the message; the returned pointer is
/// valid until the next failing call.
#[no_mangle]
pub extern "C" fn imu_last_error() -> *const c_char {
    LAST_ERROR.as_ptr()
}
