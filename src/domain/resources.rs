use serde::{Deserialize, Serialize};

/// Minimum compute requirements for the provisioned workspace.
///
/// Unsigned fields make negative values unrepresentable; the external
/// provisioning tool treats each as a floor, with 0 meaning "no request".
/// Memory values are in MiB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Minimum CPU core count.
    #[serde(default)]
    pub min_cpu: u32,
    /// Minimum GPU device count.
    #[serde(default)]
    pub min_gpu: u32,
    /// Minimum system memory (MiB).
    #[serde(default)]
    pub min_mem: u64,
    /// Minimum GPU memory (MiB).
    #[serde(default)]
    pub min_gpu_mem: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let limits: ResourceLimits = serde_yaml::from_str("min_cpu: 4").unwrap();
        assert_eq!(limits, ResourceLimits { min_cpu: 4, min_gpu: 0, min_mem: 0, min_gpu_mem: 0 });
    }

    #[test]
    fn negative_values_are_rejected_by_type() {
        let result: Result<ResourceLimits, _> = serde_yaml::from_str("min_cpu: -1");
        assert!(result.is_err());
    }
}
