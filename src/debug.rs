//! Macros for last-resort debugging.
//!
//! Error reporting of the decoder is limited to an error kind and the
//! position in the input, which can make it hard to figure out which code
//! path rejected a given piece of data. To remedy this somewhat, this module
//! contains a macro `xerr!()` that will print out a backtrace if the
//! `extra-debug` feature is enabled during build before resolving into
//! whatever the expression it encloses resolves to otherwise. Use it
//! whenever you initially produce an error, i.e.:
//!
//! ```rust,ignore
//! if len > source.remaining() {
//!     xerr!(Err(source.err(ErrorKind::LengthExceedsBuffer)))
//! }
//! ```
//!
//! or, with an early return:
//!
//! ```rust,ignore
//! if depth > options.max_depth() {
//!     xerr!(return Err(source.err(ErrorKind::NestingTooDeep)));
//! }
//! ```

#[cfg(feature = "extra-debug")]
pub use backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG ---\n{:?}\n--- EXTRA DEBUG ---",
            $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
