//! Tool configuration.
//!
//! [`ToolConfig`] names the executables podpin drives. The defaults match a
//! stock Ruby setup; the CLI lets `--gem`/`--pod` (or `PODPIN_GEM` /
//! `PODPIN_POD`) point at other binaries, e.g. a bundler shim.

/// Executables and gem name used by the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Package manager used to install and uninstall the tool.
    pub gem: String,
    /// Tool executable queried for its version.
    pub pod: String,
    /// Name of the gem that provides the tool.
    pub gem_name: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            gem: "gem".to_string(),
            pod: "pod".to_string(),
            gem_name: "cocoapods".to_string(),
        }
    }
}

impl ToolConfig {
    /// Override the package manager executable.
    pub fn with_gem(mut self, gem: impl Into<String>) -> Self {
        self.gem = gem.into();
        self
    }

    /// Override the tool executable.
    pub fn with_pod(mut self, pod: impl Into<String>) -> Self {
        self.pod = pod.into();
        self
    }

    /// Arguments for the version query.
    pub fn version_args(&self) -> Vec<String> {
        vec!["--version".to_string()]
    }

    /// Arguments that remove every installed version and its executables.
    pub fn uninstall_args(&self) -> Vec<String> {
        vec![
            "uninstall".to_string(),
            self.gem_name.clone(),
            "--all".to_string(),
            "--executables".to_string(),
        ]
    }

    /// Arguments that install exactly `version`.
    pub fn install_args(&self, version: &str) -> Vec<String> {
        vec![
            "install".to_string(),
            self.gem_name.clone(),
            "-v".to_string(),
            version.to_string(),
        ]
    }
}
