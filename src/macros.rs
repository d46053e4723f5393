/// Builds a [`Node`](crate::Node) from a JSON-like literal.
///
/// Scalars are written as string (or any `Display`) literals, arrays as
/// bracketed lists, objects as braced key/value pairs, and the absent
/// array-slot marker as the bare word `absent`. Handy for stating expected
/// trees in tests.
///
/// # Examples
///
/// ```rust
/// use unflatten::tree;
///
/// let expected = tree!({
///     "a": { "b": "x", "c": "y" },
///     "d": ["p", absent, "q"]
/// });
///
/// assert!(expected.get("a").is_some());
/// assert!(expected.get("d").unwrap().get_index(1).unwrap().is_absent());
/// ```
#[macro_export]
macro_rules! tree {
    // The absent array-slot marker
    (absent) => {
        $crate::Node::Absent
    };

    // Arrays, empty included
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::Array(vec![$($crate::tree!($elem)),*])
    };

    // Objects, empty included
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::NodeMap::new();
        $(
            object.insert($key.to_string(), $crate::tree!($value));
        )*
        $crate::Node::Object(object)
    }};

    // Anything else is a scalar, stored through its Display form
    ($scalar:expr) => {
        $crate::Node::Scalar($scalar.to_string())
    };
}
