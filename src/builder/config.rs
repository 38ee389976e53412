//! Run configuration for machines.

use serde::{Deserialize, Serialize};

/// Machine id used when none is configured.
pub const DEFAULT_MACHINE_ID: &str = "DEFAULT";

/// Settings that control how a machine runs.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use transit::builder::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{"exe_exit": true}"#).unwrap();
/// assert!(config.exe_exit);
/// assert!(!config.exe_initial);
/// assert_eq!(config.machine_id, "DEFAULT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Identifier used in logs and run history
    pub machine_id: String,

    /// Run the initial state's action on the first step
    pub exe_initial: bool,

    /// Run the exit state's action when the machine stops there
    pub exe_exit: bool,

    /// Record every visit in the run history. Off by default, since the
    /// history grows by one entry per step.
    pub record_history: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            machine_id: DEFAULT_MACHINE_ID.to_string(),
            exe_initial: false,
            exe_exit: false,
            record_history: false,
        }
    }
}
