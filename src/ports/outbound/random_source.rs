/// RandomSource port for the mock catalog backend
///
/// Listing generation draws every random value through this port, so tests
/// can pin values with a seed or a scripted mock.
pub trait RandomSource: Send {
    /// Returns a uniformly distributed integer in `[low, high]`
    ///
    /// Implementations may assume `low <= high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}
