pub use folio_utils_derive::trace_instrument;

/// Returns the version of the folio crates, as reported by `--version`.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn assert_matches_with_predicate() {
        let value: Result<u32, ()> = Ok(42);
        assert_matches!(value, Ok(x) if *x == 42);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_panics_on_mismatch() {
        let value: Option<u32> = None;
        assert_matches!(value, Some(_));
    }
}
