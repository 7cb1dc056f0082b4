//! Deciding whether an invocation compiles or links anything.
//!
//! Queries such as `g++ --version` or `g++ -dumpmachine` must reach the
//! compiler untouched, so include flags are only injected for invocations
//! that look like real work.

/// Source-file markers. Matched anywhere in an argument, not only as a
/// suffix, so `.c` alone already covers the longer extensions.
const SOURCE_MARKERS: &[&str] = &[".cpp", ".cc", ".cxx", ".c"];

/// Flags that mean compile-only or name an output.
const BUILD_FLAGS: &[&str] = &["-c", "-o"];

/// Check whether the arguments describe a compile or link step.
///
/// True when any argument contains a source marker or is exactly `-c` or
/// `-o`. This is a coarse heuristic: `-I./src.common` also matches.
pub fn is_compilation<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter().any(|arg| {
        let arg: &str = arg.as_ref();
        SOURCE_MARKERS.iter().any(|marker| arg.contains(marker)) || BUILD_FLAGS.contains(&arg)
    })
}
