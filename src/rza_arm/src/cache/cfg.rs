//! The public interface of the cache maintenance layer.

/// The line size of the Cortex-A9 L1 data cache and the PL310 L2 cache.
pub const DCACHE_LINE_SIZE: usize = 32;

/// An abstract interface to the data cache hierarchy.
///
/// All operations are complete (including the barriers they need) when they
/// return.
pub trait CacheMaintenance {
    /// Clean and invalidate the whole L1 data cache down to the level of
    /// coherency.
    fn clean_invalidate_dcache_all(&self);

    /// Clean the whole L1 data cache down to the level of coherency.
    fn clean_dcache_all(&self);

    /// Clean and invalidate the whole outer (L2) cache. Does nothing if the
    /// target has no outer cache.
    fn clean_invalidate_l2_all(&self) {}

    /// Clean the line containing `addr`.
    fn clean_dcache_line(&self, addr: usize);

    /// Invalidate the line containing `addr` without writing it back.
    fn invalidate_dcache_line(&self, addr: usize);

    /// Clean and invalidate the line containing `addr`.
    fn clean_invalidate_dcache_line(&self, addr: usize);
}

impl<T: CacheMaintenance + ?Sized> CacheMaintenance for &T {
    #[inline]
    fn clean_invalidate_dcache_all(&self) {
        (**self).clean_invalidate_dcache_all()
    }

    #[inline]
    fn clean_dcache_all(&self) {
        (**self).clean_dcache_all()
    }

    #[inline]
    fn clean_invalidate_l2_all(&self) {
        (**self).clean_invalidate_l2_all()
    }

    #[inline]
    fn clean_dcache_line(&self, addr: usize) {
        (**self).clean_dcache_line(addr)
    }

    #[inline]
    fn invalidate_dcache_line(&self, addr: usize) {
        (**self).invalidate_dcache_line(addr)
    }

    #[inline]
    fn clean_invalidate_dcache_line(&self, addr: usize) {
        (**self).clean_invalidate_dcache_line(addr)
    }
}

/// Iterate over the start addresses of the cache lines overlapping
/// `start..start + len`.
fn lines(start: usize, len: usize) -> impl Iterator<Item = usize> {
    let first = start & !(DCACHE_LINE_SIZE - 1);
    let end = if len == 0 {
        first
    } else {
        start.saturating_add(len)
    };
    (first..end).step_by(DCACHE_LINE_SIZE)
}

/// Write back every line overlapping `start..start + len`.
///
/// Use before handing a buffer to a bus master (e.g., DMA) that reads from
/// memory.
pub fn clean_dcache_range(cache: &impl CacheMaintenance, start: usize, len: usize) {
    for line in lines(start, len) {
        cache.clean_dcache_line(line);
    }
}

/// Discard every line overlapping `start..start + len`.
///
/// The partial lines at both ends are discarded too, so the range should be
/// line-aligned unless the neighboring data is known to be clean.
pub fn invalidate_dcache_range(cache: &impl CacheMaintenance, start: usize, len: usize) {
    for line in lines(start, len) {
        cache.invalidate_dcache_line(line);
    }
}

/// Write back and discard every line overlapping `start..start + len`.
pub fn clean_invalidate_dcache_range(cache: &impl CacheMaintenance, start: usize, len: usize) {
    for line in lines(start, len) {
        cache.clean_invalidate_dcache_line(line);
    }
}
