/// Constructs a [Value](crate::Value) from a literal.
///
/// # Example
///
/// ```
/// # use jsondoc::json;
/// #
/// let val = json!({
///     "image": {
///         "width": 800,
///         "height": 600,
///         "title": "View from 15th Floor"
///     }
/// });
/// ```
///
/// Intended for programmatic document construction and test data. It performs
/// no escape handling: a backslash sequence in a literal stays verbatim
/// instead of decoding, and an invalid one will not produce an error. For
/// untrusted input use [`from_str`](crate::from_str) or
/// [`from_slice`](crate::from_slice) instead.
#[macro_export]
macro_rules! json {
    ([]) => { $crate::Value::Array(Vec::new()) };
    ({}) => { $crate::Value::Object(Default::default()) };
    (null) => { $crate::Value::Null };
    (true) => { $crate::Value::Boolean(true) };
    (false) => { $crate::Value::Boolean(false) };
    ([ $($elem:tt),+ $(,)? ]) => { $crate::Value::Array(vec![$($crate::json!($elem)),+]) };
    ({ $($key:tt: $val:tt),+ $(,)? }) => {
        // collecting through the variant's field type keeps the map crate out
        // of the caller's namespace
        $crate::Value::Object(
            [$(($key.to_string(), $crate::json!($val))),+].into_iter().collect(),
        )
    };
    // can only be &str or some numeric type
    ($other:expr) => { $crate::Value::from($other) };
}
