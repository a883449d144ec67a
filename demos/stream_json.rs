//! Stream simulated IMU readings as JSON lines.
//!
//! {"name":"imu","qx":0.000,"qy":0.000,"qz":0.050,"qw":0.999,"wz":0.500,"az":null,"caps":5}
//!
//! Fields the sensor does not provide are emitted as null.
//!
//! Usage: cargo run --example stream_json
//! Env: IMU_DEMO_SAMPLES (default 100), IMU_DEMO_INTERVAL_MS (default 10)

use imu_sensor::config::env_u64;
use imu_sensor::view::cells;
use imu_sensor::{ImuReading, ImuSensorData, ImuSensorRegistry};
use std::io::{self, Write};
use std::time::Duration;

fn json_num(v: Option<f64>) -> String {
    match v {
        Some(v) if v.is_finite() => format!("{:.3}", v),
        _ => "null".to_string(),
    }
}

fn main() {
    env_logger::init();

    let samples = env_u64("IMU_DEMO_SAMPLES", 100);
    let interval = Duration::from_millis(env_u64("IMU_DEMO_INTERVAL_MS", 10));

    // Orientation and gyro only; no accelerometer on this unit.
    let orientation = cells([0.0, 0.0, 0.0, 1.0]);
    let gyro = cells([0.0, 0.0, 0.5]);

    let mut data = ImuSensorData::new("imu", "imu_link");
    data.orientation = Some(&orientation);
    data.angular_velocity = Some(&gyro);

    let mut registry = ImuSensorRegistry::new();
    registry.register_sensor(data);

    let handle = match registry.sensor_handle("imu") {
        Ok(h) => h,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for n in 0..samples {
        let half = 0.25 * n as f64 * interval.as_secs_f64();
        orientation[2].set(half.sin());
        orientation[3].set(half.cos());

        let ImuReading {
            orientation: q,
            angular_velocity: w,
            linear_acceleration: a,
            ..
        } = handle.read();

        let _ = writeln!(
            out,
            "{{\"name\":\"{}\",\"qx\":{},\"qy\":{},\"qz\":{},\"qw\":{},\"wz\":{},\"az\":{},\"caps\":{}}}",
            handle.name(),
            json_num(q.map(|q| q[0])),
            json_num(q.map(|q| q[1])),
            json_num(q.map(|q| q[2])),
            json_num(q.map(|q| q[3])),
            json_num(w.map(|w| w[2])),
            json_num(a.map(|a| a[2])),
            handle.capabilities().bits(),
        );
        let _ = out.flush();

        std::thread::sleep(interval);
    }
}
