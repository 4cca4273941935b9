//! Generated foreign types live in `generated/`; see `build.rs`.
