//! Preset labels offered alongside free-text label editing.
//!
//! Presets are plain label strings shown in the sidebar; picking one writes
//! it to the selected annotation exactly like typing it would.

/// Default preset labels for new sessions.
pub fn default_presets() -> Vec<String> {
    [
        "Stub Shaft in U Joint",
        "Cross Pinch Bolt",
        "U Joint",
        "Steering Column",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
