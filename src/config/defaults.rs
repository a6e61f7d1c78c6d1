//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn input() -> PathBuf {
        "pages".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn tab_size() -> usize {
        2
    }

    pub mod recent {
        pub fn max_length() -> usize {
            10
        }
    }
}
