// Macros to instrument (non-future) spans.

#[doc(hidden)]
#[macro_export]
macro_rules! __introspection_span_internal {
    ($trace_type:ident; $($element:tt)*) => {
        #[cfg(feature = "tracing")]
        let myspan = $crate::tracing::span!($crate::tracing::Level::$trace_type, $($element)*);
        #[cfg(feature = "tracing")]
        let _enter = myspan.enter();
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __introspection_span_trace {
    ($($element:tt)*) => {
        $crate::__introspection_span_internal!(TRACE; $($element)*);
    }
}

// Macros to instrument events.

#[doc(hidden)]
#[macro_export]
macro_rules! __introspection_trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$trace_type!($($element)*);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __introspection_trace {
    ($($element:tt)*) => {{
        $crate::__introspection_trace_internal!(trace; $($element)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __introspection_trace_debug {
    ($($element:tt)*) => {{
        $crate::__introspection_trace_internal!(debug; $($element)*)
    }};
}
