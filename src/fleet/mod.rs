pub mod generator;
pub mod reading;

pub use generator::{
    generate_reading, generate_reading_with, generate_snapshot, generate_snapshot_with,
};
pub use reading::{device_id, device_index, Reading, DEVICE_ID_PREFIX, FLEET_SIZE};
