/// This assertion is always enabled but only verbose (formatting when
/// debug assertions are enabled).
#[cfg(debug_assertions)]
macro_rules! ndassert {
    ($e:expr, $($t:tt)*) => { assert!($e, $($t)*) }
}

#[cfg(not(debug_assertions))]
macro_rules! ndassert {
    ($e:expr, $($_ignore:tt)*) => { assert!($e) }
}

/// Number of elements of a shape, panicking if it overflows `usize`.
macro_rules! size_of_shape_checked_unwrap {
    ($shape:expr) => {
        match crate::dimension::size_of_shape_checked($shape) {
            Ok(sz) => sz,
            Err(_) => {
                panic!("ndlayout: Shape too large, product of axis lengths overflows usize")
            }
        }
    };
}
