// Log macros that compile to nothing unless the 'logging' feature is on.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    }
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    }
}
