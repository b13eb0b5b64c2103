//! Order-independence and idempotence of registry merges.

use fcm_registry::{CollectedDiagnostics, CompatMatrix};
use hal_fqname::{parse_fqname, Entry};
use proptest::prelude::*;

type Decl = (u32, u32, &'static str, String);

fn decls() -> impl Strategy<Value = Vec<Decl>> {
    prop::collection::vec(
        (
            1u32..3,
            0u32..12,
            prop::sample::select(vec!["IFoo", "IBar"]),
            "[a-d]",
        ),
        1..10,
    )
}

fn to_entry((major, minor, iface, instance): &Decl) -> Entry {
    parse_fqname(&format!("android.hardware.foo@{major}.{minor}::{iface}/{instance}")).unwrap()
}

fn build(decls: &[Decl]) -> Entry {
    let mut diagnostics = CollectedDiagnostics::new();
    let matrix = CompatMatrix::from_entries(decls.iter().map(to_entry), &mut diagnostics);
    assert!(diagnostics.conflicts.is_empty());
    matrix.into_entries().remove(0)
}

/// Order of majors, interfaces and instances follows registration order, so
/// compare the sorted content.
fn normalized(mut entry: Entry) -> Entry {
    entry.versions.sort_by_key(|v| v.major);
    entry.interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    for iface in &mut entry.interfaces {
        iface.instances.sort();
    }
    entry
}

proptest! {
    #[test]
    fn proptest_merge_is_commutative(
        (original, shuffled) in decls().prop_flat_map(|d| (Just(d.clone()), Just(d).prop_shuffle()))
    ) {
        prop_assert_eq!(normalized(build(&original)), normalized(build(&shuffled)));
    }

    #[test]
    fn proptest_merge_keeps_max_minor_per_major(decls in decls()) {
        let entry = build(&decls);
        for version in &entry.versions {
            let expected = decls
                .iter()
                .filter(|d| d.0 == version.major)
                .map(|d| d.1)
                .max()
                .unwrap();
            prop_assert_eq!(version.minor, expected);
        }
    }

    #[test]
    fn proptest_reregistering_is_idempotent(decls in decls()) {
        let merged = build(&decls);
        let mut diagnostics = CollectedDiagnostics::new();
        let mut matrix = CompatMatrix::from_entries(decls.iter().map(to_entry), &mut diagnostics);

        matrix.register(merged.clone(), &mut diagnostics);
        prop_assert_eq!(matrix.get(&merged.name), Some(&merged));
    }
}
