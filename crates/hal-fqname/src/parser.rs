use crate::ast::{Entry, InterfaceRecord, ProtocolKind, VersionRecord};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    /// Versioned AIDL marker, e.g. `android.hardware.foo.IFoo/default (@2)`
    static ref VERSIONED_AIDL_SUFFIX: Regex = Regex::new(r" \(@[0-9]+\)$").unwrap();
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("missing `::` between package and interface")]
    MissingInterfaceSeparator,
    #[error("missing `@` between package and version")]
    MissingVersion,
    #[error("invalid version `{0}`, expected MAJOR.MINOR")]
    InvalidVersion(String),
    #[error("missing package before interface name")]
    MissingPackage,
    #[error("missing `/` before instance name")]
    MissingInstance,
    #[error("invalid instance `{0}`")]
    InvalidInstance(String),
    #[error("empty {0}")]
    EmptyComponent(&'static str),
}

/// Drops a trailing ` (@N)` versioned AIDL marker. The number is not kept.
pub fn strip_versioned_suffix(line: &str) -> &str {
    match VERSIONED_AIDL_SUFFIX.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}

/// HIDL fqnames always carry `@MAJOR.MINOR`; anything else is AIDL.
pub fn classify(fqname: &str) -> ProtocolKind {
    if fqname.contains('@') {
        ProtocolKind::Hidl
    } else {
        ProtocolKind::Aidl
    }
}

/// Parses one fqname line into a single-interface, single-instance [`Entry`].
pub fn parse_fqname(input: &str) -> Result<Entry, ParseError> {
    let fqname = strip_versioned_suffix(input.trim());
    if fqname.is_empty() {
        return Err(ParseError::Empty);
    }

    match classify(fqname) {
        ProtocolKind::Hidl => parse_hidl(fqname),
        ProtocolKind::Aidl => parse_aidl(fqname),
    }
}

/// `<name>@<major>.<minor>::<Interface>/<instance>`
fn parse_hidl(fqname: &str) -> Result<Entry, ParseError> {
    let (package, interface) = fqname
        .split_once("::")
        .ok_or(ParseError::MissingInterfaceSeparator)?;
    let (name, version) = package.split_once('@').ok_or(ParseError::MissingVersion)?;
    let version = parse_version(version)?;
    let interface = parse_interface(interface)?;

    Ok(Entry::hidl(non_empty(name, "package name")?, version, interface))
}

/// `<name>.<Interface>/<instance>`, the last `.` of the line separates the
/// package from the interface class. AIDL instances cannot contain `/`.
fn parse_aidl(fqname: &str) -> Result<Entry, ParseError> {
    let (name, interface) = fqname.rsplit_once('.').ok_or(ParseError::MissingPackage)?;
    let (interface, instance) = interface.split_once('/').ok_or(ParseError::MissingInstance)?;
    if instance.contains('/') {
        return Err(ParseError::InvalidInstance(instance.to_string()));
    }
    let interface = InterfaceRecord::new(
        non_empty(interface, "interface name")?,
        non_empty(instance, "instance name")?,
    );

    Ok(Entry::aidl(non_empty(name, "package name")?, interface))
}

fn parse_version(raw: &str) -> Result<VersionRecord, ParseError> {
    let invalid = || ParseError::InvalidVersion(raw.to_string());
    let (major, minor) = raw.split_once('.').ok_or_else(invalid)?;
    let major = major.parse().map_err(|_| invalid())?;
    let minor = minor.parse().map_err(|_| invalid())?;
    Ok(VersionRecord::new(major, minor))
}

/// Only the first `/` is a delimiter; instance names may contain more.
fn parse_interface(raw: &str) -> Result<InterfaceRecord, ParseError> {
    let (name, instance) = raw.split_once('/').ok_or(ParseError::MissingInstance)?;
    Ok(InterfaceRecord::new(
        non_empty(name, "interface name")?,
        non_empty(instance, "instance name")?,
    ))
}

fn non_empty<'a>(value: &'a str, what: &'static str) -> Result<&'a str, ParseError> {
    if value.is_empty() {
        Err(ParseError::EmptyComponent(what))
    } else {
        Ok(value)
    }
}

impl FromStr for Entry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fqname(s)
    }
}
