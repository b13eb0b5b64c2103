use fcm_registry::{CompatMatrix, Diagnostics};
use hal_fqname::{Entry, InterfaceRecord, VersionRecord};

const HAL_INDENT: &str = "    ";
const HAL_NAME_INDENT: &str = "       ";
const CHILD_INDENT: &str = "        ";
const INTERFACE_CHILD_INDENT: &str = "           ";

/// `M.0` for minor 0, otherwise the range `M.0-N`.
pub fn format_version(version: &VersionRecord) -> String {
    if version.minor > 0 {
        format!("{}.0-{}", version.major, version.minor)
    } else {
        format!("{}.{}", version.major, version.minor)
    }
}

/// Renders the whole document, one `hal` block per entry in registry order.
pub fn render_matrix(matrix: &CompatMatrix, diagnostics: &mut dyn Diagnostics) -> String {
    let mut out = String::from("<compatibility-matrix>\n");
    for entry in matrix.entries() {
        out.push_str(&render_entry(entry));
    }
    out.push_str("</compatibility-matrix>\n");

    diagnostics.notice(&format!("Rendered {} HAL entries", matrix.len()));
    out
}

pub fn render_entry(entry: &Entry) -> String {
    let mut out = format!(
        "{}<hal format=\"{}\" optional=\"true\">\n",
        HAL_INDENT,
        entry.kind.as_str()
    );
    out.push_str(&format!("{}<name>{}</name>\n", HAL_NAME_INDENT, entry.name));

    for version in &entry.versions {
        out.push_str(&format!(
            "{}<version>{}</version>\n",
            CHILD_INDENT,
            format_version(version)
        ));
    }

    for interface in &entry.interfaces {
        out.push_str(&render_interface(interface));
    }

    out.push_str(HAL_INDENT);
    out.push_str("</hal>\n");
    out
}

fn render_interface(interface: &InterfaceRecord) -> String {
    let mut out = format!("{}<interface>\n", CHILD_INDENT);
    out.push_str(&format!(
        "{}<name>{}</name>\n",
        INTERFACE_CHILD_INDENT, interface.name
    ));
    for instance in &interface.instances {
        out.push_str(&format!(
            "{}<instance>{}</instance>\n",
            INTERFACE_CHILD_INDENT, instance
        ));
    }
    out.push_str(CHILD_INDENT);
    out.push_str("</interface>\n");
    out
}
