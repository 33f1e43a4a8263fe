pub(crate) struct Scope;

macro_rules! trace {
    ($($tt:tt)*) => {{
        // still type-check the format arguments
        let _ = format_args!($($tt)*);
    }};
}

macro_rules! scope {
    ($($tt:tt)*) => {{
        let _ = format_args!($($tt)*);
        $crate::logging::Scope
    }};
}
