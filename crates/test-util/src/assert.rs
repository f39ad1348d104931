/// Evaluates to the `Ok` payload of a field operation, or panics with the
/// rendered error chain.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}

/// Evaluates to the error of a failed operation, or panics with the
/// unexpected `Ok` payload.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; got Ok({:?})", v),
        }
    };
}

/// Asserts an `Option` is `None`, printing the payload otherwise.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        if let Some(v) = $e {
            panic!("expected `None`; got Some({:?})", v);
        }
    };
}

/// Writes `$value` into `$field`, asserts the write was rejected as a type
/// coercion failure, and asserts the field's head record is the very same
/// record as before the write. Evaluates to the error.
#[macro_export]
macro_rules! assert_rejected {
    ($field:expr, $value:expr) => {{
        let field = &mut $field;
        let before = field.value().cloned();

        let err = $crate::assert_err!(field.set($value).map(|_| ()));
        assert!(
            err.is_type_coercion(),
            "expected type coercion error; actual={}",
            err
        );

        match (&before, field.value()) {
            (Some(before), Some(after)) => assert!(
                std::sync::Arc::ptr_eq(before, after),
                "head record replaced by a rejected write"
            ),
            (None, None) => {}
            (before, after) => panic!(
                "head record changed by a rejected write; before={:?}; after={:?}",
                before, after
            ),
        }

        err
    }};
}
