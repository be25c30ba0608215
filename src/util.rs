/// Marks states which only a corrupted forest or storage could reach.
///
/// Debug builds report the message and stop; release builds assume the state is unreachable.
#[inline]
pub unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    if cfg!(debug_assertions) {
        corruption_detected(msg)
    }
    core::hint::unreachable_unchecked()
}

/// Panics with the message. With `unwind_safety`, the process is aborted right after the panic message is printed, so that no unwinder gets to observe the corrupted data.
#[cold]
#[inline(never)]
fn corruption_detected(msg: &str) -> ! {
    #[cfg(feature = "unwind_safety")]
    {
        let _ = std::panic::catch_unwind(|| unreachable!("{}", msg));
        std::process::abort()
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        unreachable!("{}", msg)
    }
}
