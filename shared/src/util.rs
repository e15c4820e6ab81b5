use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// 获取当前 UTC 时间戳（秒）
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Per-process random component of generated ObjectIds.
fn process_unique() -> &'static [u8; 5] {
    static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
    PROCESS_UNIQUE.get_or_init(rand::random)
}

/// Generate the 12 raw bytes of a new ObjectId.
///
/// Layout (same as MongoDB, so ids sort by creation time):
///   - 4 bytes: big-endian Unix seconds
///   - 5 bytes: random, fixed for the process
///   - 3 bytes: big-endian counter, seeded randomly
pub fn object_id_bytes() -> [u8; 12] {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| AtomicU32::new(rand::random::<u32>() & 0x00FF_FFFF));

    let secs = now_secs() as u32;
    let count = counter.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;

    let mut bytes = [0u8; 12];
    bytes[0..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(process_unique());
    bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
    bytes
}
