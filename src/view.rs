//! Zero-copy structured views over driver-owned numeric buffers.
//!
//! Every view borrows a `[Cell<f64>; N]` owned by the hardware driver. Reads go
//! straight to that storage, so a value written by the driver is visible
//! through every view on its next read. `Cell` keeps the driver free to write
//! while views are alive and restricts all of it to a single thread.

use std::cell::Cell;
use std::fmt;

/// Build a buffer of cells from plain values.
pub fn cells<const N: usize>(values: [f64; N]) -> [Cell<f64>; N] {
    values.map(Cell::new)
}

/// Overwrite every cell of `buf` with `values`.
pub fn store<const N: usize>(buf: &[Cell<f64>; N], values: [f64; N]) {
    for (cell, value) in buf.iter().zip(values) {
        cell.set(value);
    }
}

fn load<const N: usize>(buf: &[Cell<f64>; N]) -> [f64; N] {
    std::array::from_fn(|i| buf[i].get())
}

/// Unit quaternion view in (x, y, z, w) order.
#[derive(Clone, Copy)]
pub struct Quaternion<'a> {
    data: &'a [Cell<f64>; 4],
}

impl<'a> Quaternion<'a> {
    pub fn new(data: &'a [Cell<f64>; 4]) -> Self {
        Self { data }
    }

    pub fn x(&self) -> f64 {
        self.data[0].get()
    }

    pub fn y(&self) -> f64 {
        self.data[1].get()
    }

    pub fn z(&self) -> f64 {
        self.data[2].get()
    }

    pub fn w(&self) -> f64 {
        self.data[3].get()
    }

    /// Current components as [qx, qy, qz, qw].
    pub fn coords(&self) -> [f64; 4] {
        load(self.data)
    }

    pub fn norm(&self) -> f64 {
        self.coords().iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Rotation matrix (row-major) for the current orientation.
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        let [x, y, z, w] = self.coords();
        [
            [1.0 - 2.0*(y*y + z*z), 2.0*(x*y - z*w),       2.0*(x*z + y*w)],
            [2.0*(x*y + z*w),       1.0 - 2.0*(x*x + z*z), 2.0*(y*z - x*w)],
            [2.0*(x*z - y*w),       2.0*(y*z + x*w),       1.0 - 2.0*(x*x + y*y)],
        ]
    }

    /// Euler angles [roll, pitch, yaw] in degrees, intrinsic Z-Y-X order.
    ///
    /// Pitch is clamped to ±90° when the quaternion is slightly off unit length.
    pub fn to_euler_deg(&self) -> [f64; 3] {
        let [x, y, z, w] = self.coords();
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
    }

    /// The aliased driver buffer.
    pub fn as_cells(&self) -> &'a [Cell<f64>; 4] {
        self.data
    }

    /// Whether this view reads from `buf`.
    pub fn aliases(&self, buf: &[Cell<f64>; 4]) -> bool {
        std::ptr::eq(self.data, buf)
    }
}

impl fmt::Debug for Quaternion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quaternion").field(&self.coords()).finish()
    }
}

/// 3-vector view in (x, y, z) order.
#[derive(Clone, Copy)]
pub struct Vector3<'a> {
    data: &'a [Cell<f64>; 3],
}

impl<'a> Vector3<'a> {
    pub fn new(data: &'a [Cell<f64>; 3]) -> Self {
        Self { data }
    }

    pub fn x(&self) -> f64 {
        self.data[0].get()
    }

    pub fn y(&self) -> f64 {
        self.data[1].get()
    }

    pub fn z(&self) -> f64 {
        self.data[2].get()
    }

    pub fn get(&self) -> [f64; 3] {
        load(self.data)
    }

    pub fn norm(&self) -> f64 {
        let [x, y, z] = self.get();
        (x * x + y * y + z * z).sqrt()
    }

    pub fn as_cells(&self) -> &'a [Cell<f64>; 3] {
        self.data
    }

    pub fn aliases(&self, buf: &[Cell<f64>; 3]) -> bool {
        std::ptr::eq(self.data, buf)
    }
}

impl fmt::Debug for Vector3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector3").field(&self.get()).finish()
    }
}

/// Row-major 3x3 covariance matrix view.
#[derive(Clone, Copy)]
pub struct Covariance<'a> {
    data: &'a [Cell<f64>; 9],
}

impl<'a> Covariance<'a> {
    pub fn new(data: &'a [Cell<f64>; 9]) -> Self {
        Self { data }
    }

    /// Element at (`row`, `col`).
    ///
    /// # Panics
    /// If `row` or `col` is not in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 3 && col < 3, "covariance index ({row}, {col}) out of range");
        self.data[row * 3 + col].get()
    }

    pub fn row(&self, row: usize) -> [f64; 3] {
        [self.get(row, 0), self.get(row, 1), self.get(row, 2)]
    }

    pub fn diagonal(&self) -> [f64; 3] {
        [self.get(0, 0), self.get(1, 1), self.get(2, 2)]
    }

    /// All nine values in row-major order.
    pub fn values(&self) -> [f64; 9] {
        load(self.data)
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    pub fn as_cells(&self) -> &'a [Cell<f64>; 9] {
        self.data
    }

    pub fn aliases(&self, buf: &[Cell<f64>; 9]) -> bool {
        std::ptr::eq(self.data, buf)
    }
}

impl fmt::Debug for Covariance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Covariance").field(&self.to_array()).finish()
    }
}
