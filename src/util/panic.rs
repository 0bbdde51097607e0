/// Asserts that the block panics. The optional second form also checks that the panic message
/// contains the given text, which works for the `String` payloads produced by `throw`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $needle:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($needle),
                    "panic message `{}` should mention `{}`",
                    message,
                    $needle
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
