//! Embedded word list
//!
//! Fallback words compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/fallback.rs"));
