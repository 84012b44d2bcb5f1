/// Trait alias for comparison functions.
pub trait Cmp<T>: FnMut(&T, &T) -> bool {}
impl<T, F: FnMut(&T, &T) -> bool> Cmp<T> for F {}

/// Helper function for the compiler to infer a closure as Cmp<T>.
#[inline]
pub fn cmp_from_closure<T, F>(f: F) -> F
where
    F: FnMut(&T, &T) -> bool,
{
    f
}

#[inline]
#[cold]
pub fn abort() -> ! {
    std::process::abort();
}

#[inline(always)]
pub fn assert_abort(b: bool) {
    if !b {
        abort();
    }
}
