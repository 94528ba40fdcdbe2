/// Build a plain [`Row`](crate::row::Row) from `column => value` pairs.
///
/// ```
/// use relq_core::row;
///
/// let r = row! { "id" => 1, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::row::Row::new()
    };
    ($($col:expr => $val:expr),+ $(,)?) => {{
        let mut r = $crate::row::Row::new();
        $(r.insert($col, $val);)+
        r
    }};
}
