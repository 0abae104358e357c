//! Embedded sample dictionary
//!
//! Entries compiled into the binary at build time.

// Include generated entries from build script
include!(concat!(env!("OUT_DIR"), "/sample_dictionary.rs"));
