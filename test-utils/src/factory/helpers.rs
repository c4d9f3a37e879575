use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Next value of a process-wide sequence, unique across concurrent tests.
pub fn next_id() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Well-formed 24 character hex object id built from the sequence.
pub fn next_object_id() -> String {
    format!("{:024x}", next_id())
}
