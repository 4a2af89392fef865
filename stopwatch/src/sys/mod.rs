#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use self::unix::monotonic;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::monotonic;

#[cfg(not(any(unix, windows)))]
pub mod monotonic {
    use std::sync::OnceLock;

    static ORIGIN: OnceLock<std::time::Instant> = OnceLock::new();

    pub fn now() -> crate::Instant {
        let origin = ORIGIN.get_or_init(std::time::Instant::now);

        crate::Instant {
            ns: origin.elapsed().as_nanos() as u64,
        }
    }
}
