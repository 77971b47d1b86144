//! Assertions that only become hard checks with the `strict_assertions` feature.

/// Use `debug_assert!` by default. Use `assert!` when feature "strict_assertions" is enabled.
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert!($($arg)*);
        } else {
            debug_assert!($($arg)*);
        }
    };
}

/// Use `debug_assert_eq!` by default. Use `assert_eq!` when feature "strict_assertions" is enabled.
macro_rules! strict_assert_eq {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert_eq!($($arg)*);
        } else {
            debug_assert_eq!($($arg)*);
        }
    };
}
