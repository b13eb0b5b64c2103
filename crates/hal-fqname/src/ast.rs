use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface definition scheme a HAL is declared with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolKind {
    Hidl,
    Aidl,
}

impl ProtocolKind {
    /// Value of the `format` attribute in the compatibility matrix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolKind::Hidl => "hidl",
            ProtocolKind::Aidl => "aidl",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolKind::Hidl => f.write_str("HIDL"),
            ProtocolKind::Aidl => f.write_str("AIDL"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    pub major: u32,
    pub minor: u32,
}

impl VersionRecord {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

/// An interface together with the instances declared for it, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub instances: Vec<String>,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: vec![instance.into()],
        }
    }

    pub fn contains(&self, instance: &str) -> bool {
        self.instances.iter().any(|i| i == instance)
    }
}

/// One HAL of the compatibility matrix.
///
/// `versions` and `interfaces` behave as insertion-ordered maps keyed by
/// major version and interface name respectively; the lookup helpers below
/// are the only way the rest of the workspace addresses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: ProtocolKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionRecord>,
    pub interfaces: Vec<InterfaceRecord>,
}

impl Entry {
    pub fn hidl(
        name: impl Into<String>,
        version: VersionRecord,
        interface: InterfaceRecord,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ProtocolKind::Hidl,
            versions: vec![version],
            interfaces: vec![interface],
        }
    }

    pub fn aidl(name: impl Into<String>, interface: InterfaceRecord) -> Self {
        Self {
            name: name.into(),
            kind: ProtocolKind::Aidl,
            versions: Vec::new(),
            interfaces: vec![interface],
        }
    }

    pub fn version(&self, major: u32) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.major == major)
    }

    pub fn version_mut(&mut self, major: u32) -> Option<&mut VersionRecord> {
        self.versions.iter_mut().find(|v| v.major == major)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceRecord> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn interface_mut(&mut self, name: &str) -> Option<&mut InterfaceRecord> {
        self.interfaces.iter_mut().find(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_and_format() {
        assert_eq!(ProtocolKind::Hidl.to_string(), "HIDL");
        assert_eq!(ProtocolKind::Aidl.as_str(), "aidl");
    }

    #[test]
    fn test_lookup_helpers() {
        let mut entry = Entry::hidl(
            "android.hardware.foo",
            VersionRecord::new(1, 0),
            InterfaceRecord::new("IFoo", "default"),
        );

        assert_eq!(entry.version(1), Some(&VersionRecord::new(1, 0)));
        assert!(entry.version(2).is_none());
        assert!(entry.interface("IFoo").unwrap().contains("default"));

        entry.version_mut(1).unwrap().minor = 3;
        assert_eq!(entry.version(1).unwrap().minor, 3);
    }

    #[test]
    fn test_aidl_serializes_without_versions() {
        let entry = Entry::aidl("android.hardware.foo", InterfaceRecord::new("IFoo", "default"));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["kind"], "aidl");
        assert!(json.get("versions").is_none());
    }
}
