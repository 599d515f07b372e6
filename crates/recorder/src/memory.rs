//! Heap usage sampling

/// Source of the heap figure stamped onto each sample.
///
/// Implementations can only produce a number; a probe that cannot read the
/// host's memory state reports zero rather than failing.
pub trait HeapProbe: Send {
    /// Current memory in use, in megabytes. Zero when unknown.
    fn heap_used_mb(&self) -> f64;
}

/// Probe backed by `/proc/self/status` (Linux).
///
/// Reads the `VmRSS` line and converts kilobytes to megabytes. Any read or
/// parse failure degrades to zero.
#[derive(Debug, Default)]
pub struct ProcStatusProbe;

impl HeapProbe for ProcStatusProbe {
    fn heap_used_mb(&self) -> f64 {
        read_vm_rss_kb().map(|kb| kb / 1024.0).unwrap_or(0.0)
    }
}

fn read_vm_rss_kb() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

/// Probe for hosts without memory introspection; always reports zero.
#[derive(Debug, Default)]
pub struct NoopProbe;

impl HeapProbe for NoopProbe {
    fn heap_used_mb(&self) -> f64 {
        0.0
    }
}

/// Probe that reports a fixed figure.
///
/// Useful in tests and for hosts that compute their own number out of band.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub f64);

impl HeapProbe for FixedProbe {
    fn heap_used_mb(&self) -> f64 {
        self.0
    }
}

/// Best probe available for the current target.
pub fn platform_probe() -> Box<dyn HeapProbe> {
    #[cfg(target_os = "linux")]
    {
        Box::new(ProcStatusProbe)
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(NoopProbe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_probe_reports_zero() {
        assert_eq!(NoopProbe.heap_used_mb(), 0.0);
    }

    #[test]
    fn test_fixed_probe_reports_value() {
        assert_eq!(FixedProbe(42.5).heap_used_mb(), 42.5);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_proc_status_probe_reports_nonzero() {
        assert!(ProcStatusProbe.heap_used_mb() > 0.0);
    }

    #[test]
    fn test_platform_probe_never_negative() {
        assert!(platform_probe().heap_used_mb() >= 0.0);
    }
}
