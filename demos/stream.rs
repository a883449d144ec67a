//! Simulated driver updating IMU storage while a consumer reads through a handle.
//!
//! The handle is looked up once; every sample afterwards is read straight from
//! the driver's buffers.
//!
//! Usage: cargo run --example stream
//! Env: IMU_DEMO_SAMPLES (default 500), IMU_DEMO_INTERVAL_MS (default 2),
//!      IMU_DEMO_FRAME (default imu_link), IMU_DEMO_VERBOSE (default false)

use imu_sensor::config::{env_bool, env_string, env_u64};
use imu_sensor::{ImuSensorRegistry, ImuStorage};
use std::time::{Duration, Instant};

/// Spin about Z at a constant rate with gravity on the Z axis.
fn simulate(storage: &ImuStorage, t: f64) {
    let rate = 0.5; // rad/s
    let half = 0.5 * rate * t;
    storage.set_orientation([0.0, 0.0, half.sin(), half.cos()]);
    storage.set_angular_velocity([0.0, 0.0, rate]);
    storage.set_linear_acceleration([0.02 * (7.0 * t).sin(), 0.0, 9.81]);
}

fn main() {
    env_logger::init();

    let samples = env_u64("IMU_DEMO_SAMPLES", 500);
    let interval = Duration::from_millis(env_u64("IMU_DEMO_INTERVAL_MS", 2));
    let frame = env_string("IMU_DEMO_FRAME", "imu_link");
    let verbose = env_bool("IMU_DEMO_VERBOSE", false);

    let storage = ImuStorage::new();
    storage.set_orientation_covariance([0.01, 0.0, 0.0, 0.0, 0.01, 0.0, 0.0, 0.0, 0.01]);
    storage.set_angular_velocity_covariance([0.001, 0.0, 0.0, 0.0, 0.001, 0.0, 0.0, 0.0, 0.001]);

    let mut registry = ImuSensorRegistry::new();
    registry.register_sensor(storage.data("imu", frame));

    let handle = match registry.sensor_handle("imu") {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to get sensor handle: {}", e);
            std::process::exit(1);
        }
    };

    println!("Name:         {}", handle.name());
    println!("Frame:        {}", handle.frame_id());
    println!("Capabilities: {:?}", handle.capabilities());
    println!();

    let (Some(orientation), Some(gyro), Some(accel)) = (
        handle.orientation(),
        handle.angular_velocity(),
        handle.linear_acceleration(),
    ) else {
        eprintln!("Sensor lacks orientation, angular velocity or linear acceleration");
        std::process::exit(1);
    };

    let start = Instant::now();
    for count in 0..samples {
        simulate(&storage, start.elapsed().as_secs_f64());

        // Print every ~100th sample to avoid flooding the terminal
        if verbose || count % 100 == 0 {
            let q = orientation.coords();
            let [roll, pitch, yaw] = orientation.to_euler_deg();
            println!(
                "n={:<6} quat=[{:+.3}, {:+.3}, {:+.3}, {:+.3}]  rpy=[{:+.1}, {:+.1}, {:+.1}]  gyro_z={:+.3}  |a|={:.3}",
                count, q[0], q[1], q[2], q[3], roll, pitch, yaw, gyro.z(), accel.norm(),
            );
        }

        std::thread::sleep(interval);
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "\nTotal: {} samples in {:.1}s ({:.1} Hz)",
        samples,
        elapsed,
        samples as f64 / elapsed
    );
}
