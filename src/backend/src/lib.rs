pub mod api;
pub mod config;
pub mod page;
pub mod shell;
pub mod transport;

pub mod assets {
    // Include the generated static files from build.rs
    include!(concat!(env!("OUT_DIR"), "/generated.rs"));

    /// Embedded stylesheet and other assets, keyed by path
    pub fn static_files() -> std::collections::HashMap<&'static str, static_files::Resource> {
        generate()
    }
}
