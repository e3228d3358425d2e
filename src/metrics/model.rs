use serde::ser::{Serialize, SerializeMap, Serializer};

/// Metric name to value, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricGroup {
    entries: Vec<(&'static str, Option<f64>)>,
}

impl MetricGroup {
    pub(crate) fn push(&mut self, name: &'static str, value: Option<f64>) {
        self.entries.push((name, value));
    }

    /// `None` if the metric is not part of the group, `Some(None)` if it is null.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for MetricGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Groups of provider-computed ratios. The empty bundle serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsBundle {
    groups: Vec<(&'static str, MetricGroup)>,
}

impl MetricsBundle {
    pub(crate) fn push(&mut self, name: &'static str, group: MetricGroup) {
        self.groups.push((name, group));
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&MetricGroup> {
        self.groups.iter().find(|(n, _)| *n == name).map(|(_, g)| g)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for MetricsBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}
