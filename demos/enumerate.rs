//! Register a few simulated IMUs with different capabilities and list them.
//!
//! Usage: cargo run --example enumerate

use imu_sensor::view::cells;
use imu_sensor::{ImuSensorData, ImuSensorRegistry, ImuStorage};

fn main() {
    env_logger::init();

    // Full 9-axis style unit
    let base = ImuStorage::new();
    // Gyro + accelerometer only, no orientation estimate
    let gyro = cells([0.0; 3]);
    let accel = cells([0.0, 0.0, 9.81]);

    let mut wrist = ImuSensorData::new("wrist_imu", "wrist_link");
    wrist.angular_velocity = Some(&gyro);
    wrist.linear_acceleration = Some(&accel);

    let mut registry = ImuSensorRegistry::new();
    registry.register_sensor(base.data("base_imu", "base_link"));
    registry.register_sensor(wrist);
    registry.register_sensor(ImuSensorData::new("placeholder_imu", "world"));

    println!("Found {} IMU sensor(s):", registry.len());
    for (i, handle) in registry.iter().enumerate() {
        println!(
            "  [{}] name={}  frame={}  capabilities={:?} (0x{:02x})",
            i,
            handle.name(),
            handle.frame_id(),
            handle.capabilities(),
            handle.capabilities().bits()
        );
    }

    if let Err(e) = registry.sensor_handle("head_imu") {
        println!("Lookup of an unregistered sensor: {}", e);
    }
}
