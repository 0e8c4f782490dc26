#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {}", $msg, why);
            }
        }
    };
}

// Log wrappers so call sites don't need the log crate in scope

#[macro_export]
macro_rules! tracer_error {
    ($($arg:tt)+) => {
        $crate::log::error!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! tracer_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! tracer_info {
    ($($arg:tt)+) => {
        $crate::log::info!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! tracer_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! tracer_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!(target: module_path!(), $($arg)+)
    };
}
