// count_array_items
/// Number of elements in an array, whatever the element type.
///
/// Usable in const context.
#[macro_export]
macro_rules! count_array_items {
    ($array:expr) => {
        <[_]>::len(&$array)
    };
}

// tostring
/// Literal source text of the tokens, as a `&'static str`.
#[macro_export]
macro_rules! tostring {
    ($($tokens:tt)*) => {
        ::core::stringify!($($tokens)*)
    };
}

// failure
/// Non-zero failure code identifying the call site (its line number).
#[cfg(not(feature = "optimize-return-codes"))]
#[macro_export]
macro_rules! failure {
    () => {
        ::core::line!()
    };
}

// failure
/// Non-zero failure code; call sites are not distinguished in this build.
#[cfg(feature = "optimize-return-codes")]
#[macro_export]
macro_rules! failure {
    () => {
        1u32
    };
}
