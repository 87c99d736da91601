//! Thread pinning for stable measurements.
//!
//! On Linux the measuring thread is pinned with `sched_setaffinity` and the
//! original mask is restored afterwards. Other platforms get a no-op guard.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask saved before pinning.
    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn core_count() -> Option<usize> {
        // SAFETY: sysconf has no preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        usize::try_from(n).ok().filter(|&n| n > 0)
    }

    pub fn save() -> Option<Saved> {
        // SAFETY: cpu_set_t is plain data; the kernel fills it on success.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(Saved(set))
        }
    }

    pub fn pin(core_id: usize) -> bool {
        // SAFETY: the set is zeroed before CPU_SET touches it.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        // SAFETY: saved holds a mask previously returned by the kernel.
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn core_count() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }
    pub fn save() -> Option<Saved> {
        Some(Saved)
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// Number of online cores, if the platform reports it.
pub fn core_count() -> Option<usize> {
    platform::core_count()
}

/// RAII guard for CPU pinning - pins on creation, restores on drop.
///
/// The thread is pinned to the core it is already running on (or core 0 if
/// that is unknown) so pinning never forces a migration.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self::with_core(core)
    }

    pub fn with_core(core_id: usize) -> Self {
        let saved = platform::save();
        let pinned = saved.is_some() && platform::pin(core_id);
        if !pinned {
            tracing::trace!(core_id, "thread pinning unavailable");
        }
        Self {
            pinned_core: pinned.then_some(core_id),
            saved,
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(saved) = &self.saved {
            if !platform::restore(saved) {
                tracing::warn!("failed to restore original CPU affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
