use core::sync::atomic::AtomicBool;
use core::time;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::SystemTime;

static TIMEOUT: AtomicBool = AtomicBool::new(false);

/// Spawns a watcher thread that raises the timeout flag once `max_duration`
/// seconds have passed.
pub fn initialize_timeout(max_duration: u64) {
    let start_time = SystemTime::now();
    thread::Builder::new()
        .name("timeout".into())
        .spawn(move || loop {
            thread::sleep(time::Duration::from_millis(10));
            let elapsed = start_time
                .elapsed()
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or(0);
            if elapsed >= max_duration {
                TIMEOUT.store(true, Ordering::SeqCst);
                break;
            }
        })
        .expect("failed to spawn timeout thread");
}

pub fn timeout() -> bool {
    TIMEOUT.load(Ordering::SeqCst)
}
