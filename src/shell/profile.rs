//! Mock-data profile for the simulated terminal
//!
//! Everything the grammar prints (banner, system specs, process and network
//! tables, the themed status blocks, the directory tree) is configuration
//! data, not logic. The resolver takes a [`Profile`] by reference and never
//! computes any of it. The built-in profile is the CYBER2070 theme; a custom
//! profile can be loaded from TOML via the user config.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::vfs::VirtualFs;

/// Errors raised while loading a custom profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("profile tree has no root directory \"/\"")]
    MissingRoot,
}

/// Static system-information strings shown by `systeminfo` and `uptime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub kernel: String,
    pub cpu: String,
    pub memory: String,
    pub storage: String,
    pub network: String,
    pub security: String,
    pub uptime: String,
}

/// Complete mock-data set for one themed terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Window title shown in the TUI chrome.
    pub title: String,
    /// Multi-line welcome banner seeded into a fresh session.
    pub banner: Vec<String>,
    /// Identity string printed by `whoami`.
    pub whoami: String,
    /// Verbatim `ps` table lines.
    pub processes: Vec<String>,
    /// Verbatim `netstat` table lines.
    pub connections: Vec<String>,
    /// Themed status block for `matrix`.
    pub matrix: Vec<String>,
    /// Themed status block for `quantum`.
    pub quantum: Vec<String>,
    // Tables last so the TOML serializer emits plain values first.
    pub system_info: SystemInfo,
    /// Directory tree: absolute path -> ordered child names.
    pub tree: BTreeMap<String, Vec<String>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::cyber2070()
    }
}

impl Profile {
    /// The built-in CYBER2070 profile.
    pub fn cyber2070() -> Self {
        Self {
            title: "QUANTUM_TERMINAL".to_string(),
            banner: lines(&[
                "╔═══════════════════════════════════════════════════════╗",
                "║               CYBER2070 TERMINAL v3.14               ║",
                "║          Quantum Neural Interface Activated          ║",
                "╚═══════════════════════════════════════════════════════╝",
                "",
                "Welcome to the Quantum Terminal Interface",
                "Neural pathways synchronized... ✓",
                "Quantum entanglement established... ✓",
                "Cybersecurity protocols active... ✓",
                "",
                "Type \"help\" for available commands",
                "",
            ]),
            whoami: "cyber_user@quantum-terminal".to_string(),
            system_info: SystemInfo {
                os: "CYBER_OS v2070.3.1".to_string(),
                kernel: "QuantumKernel 7.4.2-neural".to_string(),
                cpu: "Intel Quantum Core i9-2070K @ 8.5GHz".to_string(),
                memory: "128GB Neural RAM".to_string(),
                storage: "2TB Quantum SSD".to_string(),
                network: "Quantum Entanglement Protocol".to_string(),
                security: "BioCypher Authentication Active".to_string(),
                uptime: "47 days, 12:34:56".to_string(),
            },
            processes: lines(&[
                "PID    USER      CPU%  MEM%  COMMAND",
                "1      root      0.1   0.2   /sbin/init",
                "247    neural    2.3   4.1   neural-interface",
                "1337   quantum   1.8   3.7   quantum-entangler",
                "2070   cyber     0.5   1.2   hologram-renderer",
                "3141   ai        5.2   8.9   consciousness-sync",
                "4096   user      0.3   0.8   terminal-emulator",
                "",
            ]),
            connections: lines(&[
                "Active Network Connections:",
                "Proto  Local Address     Foreign Address     State",
                "TCP    192.168.1.100:80  quantum.net:443     ESTABLISHED",
                "TCP    10.0.0.1:22       neural.sys:2222     ESTABLISHED",
                "UDP    127.0.0.1:53      dns.cyber:53        CONNECTED",
                "QEP    0.0.0.0:∞         multiverse:∞        ENTANGLED",
                "",
            ]),
            matrix: lines(&[
                "Initializing digital rain protocol...",
                "",
                "  01001101 01000001 01010100 01010010 01001001 01011000",
                "",
                "Wake up...",
                "The Matrix has you.",
                "Follow the white rabbit.",
                "",
                "Rain stream: ACTIVE",
                "",
            ]),
            quantum: lines(&[
                "Quantum Core Status",
                "===================",
                "Qubits online:         1024/1024",
                "Entanglement fidelity: 99.97%",
                "Decoherence shield:    STABLE",
                "Superposition states:  ACTIVE",
                "Tunneling channels:    7 open",
                "",
            ]),
            tree: default_tree(),
        }
    }

    /// Parse a profile from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ProfileError> {
        let profile: Profile = toml::from_str(input)?;
        if !VirtualFs::new(&profile.tree).contains("/") {
            return Err(ProfileError::MissingRoot);
        }
        Ok(profile)
    }

    /// Load a profile from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build the navigable filesystem view of this profile's tree.
    pub fn vfs(&self) -> VirtualFs {
        VirtualFs::new(&self.tree)
    }
}

/// The CYBER2070 directory tree.
fn default_tree() -> BTreeMap<String, Vec<String>> {
    let mut tree = BTreeMap::new();
    tree.insert("/".into(), lines(&["home", "sys", "quantum", "neural", "projects"]));
    tree.insert("/home".into(), lines(&["user", "admin", "guest"]));
    tree.insert("/sys".into(), lines(&["config", "logs", "drivers"]));
    tree.insert(
        "/quantum".into(),
        lines(&["entanglement", "superposition", "decoherence"]),
    );
    tree.insert("/neural".into(), lines(&["cortex", "synapses", "memory"]));
    tree.insert(
        "/projects".into(),
        lines(&[
            "neural-os",
            "hologram-commerce",
            "cyber-defense",
            "time-sync",
            "bio-enhance",
            "quantum-web",
        ]),
    );
    tree
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
