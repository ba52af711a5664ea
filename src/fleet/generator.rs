//! Snapshot generation for the virtual device fleet.
//!
//! Every call produces fresh values; nothing is cached between snapshots.

use std::ops::RangeInclusive;

use rand::Rng;

use super::reading::{device_id, label, Reading, FLEET_SIZE};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 20.0..=35.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 40.0..=60.0;

/// Generate one reading per fleet device, in ascending index order.
pub fn generate_snapshot() -> Vec<Reading> {
    generate_snapshot_with(&mut rand::thread_rng())
}

/// Same as [`generate_snapshot`] but drawing values from the given generator.
pub fn generate_snapshot_with<R: Rng>(rng: &mut R) -> Vec<Reading> {
    let ts = now_millis();
    (1..=FLEET_SIZE).map(|n| sample_reading(rng, n, ts)).collect()
}

/// Generate a reading for a single device.
pub fn generate_reading(n: u32) -> Reading {
    generate_reading_with(&mut rand::thread_rng(), n)
}

pub fn generate_reading_with<R: Rng>(rng: &mut R, n: u32) -> Reading {
    sample_reading(rng, n, now_millis())
}

fn sample_reading<R: Rng>(rng: &mut R, n: u32, ts: i64) -> Reading {
    let device_id = device_id(n);
    Reading {
        label: label(n, &device_id),
        device_id,
        ts,
        temperature: round_tenth(rng.gen_range(TEMPERATURE_RANGE)),
        humidity: round_tenth(rng.gen_range(HUMIDITY_RANGE)),
        packet: n,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn has_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-9
    }

    #[test]
    fn snapshot_covers_every_device_once_in_order() {
        let snapshot = generate_snapshot();
        assert_eq!(snapshot.len(), FLEET_SIZE as usize);
        let packets: Vec<u32> = snapshot.iter().map(|r| r.packet).collect();
        let expected: Vec<u32> = (1..=FLEET_SIZE).collect();
        assert_eq!(packets, expected);
    }

    #[test]
    fn snapshot_values_stay_in_range() {
        // several passes so a single lucky draw does not hide a range bug
        for _ in 0..20 {
            for reading in generate_snapshot() {
                assert!(TEMPERATURE_RANGE.contains(&reading.temperature), "temperature {}", reading.temperature);
                assert!(HUMIDITY_RANGE.contains(&reading.humidity), "humidity {}", reading.humidity);
                assert!(has_one_decimal(reading.temperature));
                assert!(has_one_decimal(reading.humidity));
            }
        }
    }

    #[test]
    fn snapshot_shares_one_timestamp() {
        let snapshot = generate_snapshot();
        let ts = snapshot[0].ts;
        assert!(ts > 0);
        assert!(snapshot.iter().all(|r| r.ts == ts));
    }

    #[test]
    fn reading_identity_follows_index() {
        let reading = generate_reading(55);
        assert_eq!(reading.device_id, "uno-r4-055");
        assert_eq!(reading.packet, 55);
        assert_eq!(reading.label, "Paket 55 (uno-r4-055)");
    }

    #[test]
    fn seeded_generators_repeat_values() {
        let a = generate_snapshot_with(&mut StdRng::seed_from_u64(7));
        let b = generate_snapshot_with(&mut StdRng::seed_from_u64(7));
        let values = |s: &[Reading]| s.iter().map(|r| (r.temperature, r.humidity)).collect::<Vec<_>>();
        assert_eq!(values(&a), values(&b));
    }

    #[test]
    fn round_tenth_keeps_range_edges() {
        assert_eq!(round_tenth(34.96), 35.0);
        assert_eq!(round_tenth(20.04), 20.0);
        assert_eq!(round_tenth(47.25), 47.3);
    }
}
