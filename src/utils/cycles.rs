//! CPU cycle counter for precise micro-benchmarking.
//!
//! x86/x86_64 read the time-stamp counter, aarch64 reads the virtual timer.

/// Read the current CPU cycle counter / timer.
///
/// On x86 and x86_64: RDTSC fenced on both sides with LFENCE.
/// On aarch64: CNTVCT_EL0, a fixed-frequency counter readable from userspace.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        #[cfg(target_arch = "x86")]
        use core::arch::x86::{_mm_lfence, _rdtsc};
        #[cfg(target_arch = "x86_64")]
        use core::arch::x86_64::{_mm_lfence, _rdtsc};

        // SAFETY: LFENCE and RDTSC are available on every x86_64 CPU and on
        // any x86 CPU with SSE2.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let val: u64;
        // SAFETY: CNTVCT_EL0 is readable at EL0 on Linux and macOS.
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64 architecture");
    }
}

/// Cycles elapsed since `start`, saturating at zero if the counter moved back.
#[inline(always)]
pub fn cycles_since(start: u64) -> u64 {
    read_cycles().saturating_sub(start)
}
