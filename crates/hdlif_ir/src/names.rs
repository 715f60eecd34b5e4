//! Instance label allocation.

use std::collections::BTreeMap;

/// Tracks instance labels already used for each instantiated interface.
///
/// Callers register the labels found in the surrounding design, then ask for
/// fresh ones when generating instances.
#[derive(Debug, Clone, Default)]
pub struct InstanceNames {
    labels: BTreeMap<String, Vec<String>>,
}

impl InstanceNames {
    /// Creates an allocator with no known labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an existing `label` instantiating `interface`.
    pub fn register(&mut self, interface: &str, label: &str) {
        let labels = self.labels.entry(interface.to_string()).or_default();
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }

    /// Returns a fresh `<interface>_<n>` label and records it.
    ///
    /// `n` starts one past the number of labels already known for the
    /// interface and counts up until the label is unused.
    pub fn allocate(&mut self, interface: &str) -> String {
        let labels = self.labels.entry(interface.to_string()).or_default();
        let mut count = labels.len() + 1;
        let mut label = format!("{interface}_{count}");
        while labels.contains(&label) {
            count += 1;
            label = format!("{interface}_{count}");
        }
        labels.push(label.clone());
        label
    }

    /// Labels known for `interface`, in registration order.
    pub fn labels(&self, interface: &str) -> &[String] {
        self.labels.get(interface).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_label_is_one() {
        let mut names = InstanceNames::new();
        assert_eq!(names.allocate("fifo"), "fifo_1");
        assert_eq!(names.allocate("fifo"), "fifo_2");
        assert_eq!(names.allocate("uart"), "uart_1");
    }

    #[test]
    fn skips_taken_labels() {
        let mut names = InstanceNames::new();
        names.register("fifo", "fifo_2");
        // one label known, so counting starts at 2, which is taken
        assert_eq!(names.allocate("fifo"), "fifo_3");
        assert_eq!(names.labels("fifo"), &["fifo_2", "fifo_3"]);
    }

    #[test]
    fn register_deduplicates() {
        let mut names = InstanceNames::new();
        names.register("ram", "u_ram");
        names.register("ram", "u_ram");
        assert_eq!(names.labels("ram").len(), 1);
        assert!(names.labels("rom").is_empty());
    }
}
