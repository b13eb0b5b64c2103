//! Integration tests for fcm-out: fqname lines through the registry to the
//! rendered compatibility matrix.

use fcm_out::render_matrix;
use fcm_registry::{CollectedDiagnostics, CompatMatrix};
use hal_fqname::parse_fqname;
use pretty_assertions::assert_eq;

fn render(lines: &[&str]) -> (String, CollectedDiagnostics) {
    let mut diagnostics = CollectedDiagnostics::new();
    let matrix = CompatMatrix::from_entries(
        lines.iter().map(|l| parse_fqname(l).unwrap()),
        &mut diagnostics,
    );
    let out = render_matrix(&matrix, &mut diagnostics);
    (out, diagnostics)
}

// =============================================================================
// HIDL
// =============================================================================

#[test]
fn test_hidl_versions_and_instances_merge() {
    let (out, _) = render(&[
        "android.hardware.foo@1.0::IFoo/default",
        "android.hardware.foo@1.1::IFoo/default",
        "android.hardware.foo@1.0::IFoo/other",
    ]);

    assert_eq!(
        out,
        "<compatibility-matrix>
    <hal format=\"hidl\" optional=\"true\">
       <name>android.hardware.foo</name>
        <version>1.0-1</version>
        <interface>
           <name>IFoo</name>
           <instance>default</instance>
           <instance>other</instance>
        </interface>
    </hal>
</compatibility-matrix>
"
    );
}

#[test]
fn test_hidl_multiple_majors_and_interfaces() {
    let (out, _) = render(&[
        "android.hardware.camera.provider@2.4::ICameraProvider/legacy/0",
        "android.hardware.camera.provider@2.7::ICameraProvider/internal/0",
        "android.hardware.camera.provider@3.0::ICameraProvider/legacy/0",
    ]);

    assert_eq!(
        out,
        "<compatibility-matrix>
    <hal format=\"hidl\" optional=\"true\">
       <name>android.hardware.camera.provider</name>
        <version>2.0-7</version>
        <version>3.0</version>
        <interface>
           <name>ICameraProvider</name>
           <instance>legacy/0</instance>
           <instance>internal/0</instance>
        </interface>
    </hal>
</compatibility-matrix>
"
    );
}

// =============================================================================
// AIDL and mixed input
// =============================================================================

#[test]
fn test_mixed_document_keeps_first_seen_order() {
    let (out, diagnostics) = render(&[
        "android.hardware.power.IPower/default (@4)",
        "android.hardware.foo@1.0::IFoo/default",
        "android.hardware.power.IPowerStats/default",
        "android.hardware.foo.IFoo/default",
    ]);

    assert_eq!(
        out,
        "<compatibility-matrix>
    <hal format=\"aidl\" optional=\"true\">
       <name>android.hardware.power</name>
        <interface>
           <name>IPower</name>
           <instance>default</instance>
        </interface>
        <interface>
           <name>IPowerStats</name>
           <instance>default</instance>
        </interface>
    </hal>
    <hal format=\"hidl\" optional=\"true\">
       <name>android.hardware.foo</name>
        <version>1.0</version>
        <interface>
           <name>IFoo</name>
           <instance>default</instance>
        </interface>
    </hal>
</compatibility-matrix>
"
    );
    assert_eq!(diagnostics.conflicts.len(), 1);
    assert_eq!(diagnostics.conflicts[0].name, "android.hardware.foo");
}

#[test]
fn test_render_posts_notice() {
    let (_, diagnostics) = render(&["a.IA/default", "b.IB/default"]);
    assert_eq!(diagnostics.notices, vec!["Rendered 2 HAL entries".to_string()]);
}
