//! Property-based tests for the remapping list operations.
//!
//! 1. APPEND: add keeps every existing entry and appends one blank entry
//! 2. REMOVE: survivors keep their relative order
//! 3. UPDATE: only the addressed field of the addressed entry changes
//! 4. RETYPE: any real source type change leaves an empty source value

use proptest::prelude::*;
use xavyo_claim_remapping::{
    ClaimRemapping, ClaimRemappingEditor, ClaimRemappingList, ClaimSource, FieldUpdate,
    SharedRemappings, SourceType,
};

fn source_type() -> impl Strategy<Value = SourceType> {
    prop_oneof![
        Just(SourceType::UserField),
        Just(SourceType::CustomClaim),
        Just(SourceType::Static),
    ]
}

fn remapping() -> impl Strategy<Value = ClaimRemapping> {
    ("[a-z_]{0,12}", source_type(), "[a-z0-9_\"{}:]{0,16}").prop_map(
        |(claim_name, source_type, value)| {
            ClaimRemapping::new(claim_name, ClaimSource::new(source_type, value))
        },
    )
}

fn remappings(max: usize) -> impl Strategy<Value = Vec<ClaimRemapping>> {
    prop::collection::vec(remapping(), 0..max)
}

fn field_update() -> impl Strategy<Value = FieldUpdate> {
    prop_oneof![
        "[a-z_]{0,12}".prop_map(FieldUpdate::ClaimName),
        source_type().prop_map(FieldUpdate::SourceType),
        "[a-z0-9_]{0,12}".prop_map(FieldUpdate::SourceValue),
    ]
}

fn editor_over(
    entries: &[ClaimRemapping],
) -> (SharedRemappings, ClaimRemappingEditor<SharedRemappings>) {
    let owner = SharedRemappings::new(ClaimRemappingList::from(entries.to_vec()));
    let editor = ClaimRemappingEditor::new(owner.clone());
    (owner, editor)
}

proptest! {
    #[test]
    fn prop_add_appends_blank(entries in remappings(8)) {
        let (owner, mut editor) = editor_over(&entries);

        editor.add_remapping();

        let after = owner.get().to_vec();
        prop_assert_eq!(after.len(), entries.len() + 1);
        prop_assert_eq!(&after[..entries.len()], &entries[..]);
        prop_assert_eq!(&after[entries.len()], &ClaimRemapping::blank());
    }

    #[test]
    fn prop_remove_preserves_survivor_order(
        entries in remappings(8).prop_filter("non-empty", |e| !e.is_empty()),
        seed in any::<prop::sample::Index>(),
    ) {
        let index = seed.index(entries.len());
        let (owner, mut editor) = editor_over(&entries);

        prop_assert!(editor.remove_remapping(index));

        let mut expected = entries.clone();
        expected.remove(index);
        prop_assert_eq!(owner.get().to_vec(), expected);
    }

    #[test]
    fn prop_out_of_range_is_noop(entries in remappings(6), extra in 0usize..4) {
        let index = entries.len() + extra;
        let (owner, mut editor) = editor_over(&entries);

        prop_assert!(!editor.remove_remapping(index));
        prop_assert!(!editor.update_field(index, FieldUpdate::ClaimName("x".to_string())));

        prop_assert_eq!(owner.get().to_vec(), entries);
        prop_assert_eq!(owner.revision(), 0);
    }

    #[test]
    fn prop_update_isolation(
        entries in remappings(8).prop_filter("non-empty", |e| !e.is_empty()),
        seed in any::<prop::sample::Index>(),
        update in field_update(),
    ) {
        let index = seed.index(entries.len());
        let (owner, mut editor) = editor_over(&entries);
        let before_list = owner.get();
        let before = entries[index].clone();

        prop_assert!(editor.update_field(index, update.clone()));

        let after_list = owner.get();
        let after = after_list.get(index).cloned().unwrap();
        match update {
            FieldUpdate::ClaimName(name) => {
                prop_assert_eq!(&after.claim_name, &name);
                prop_assert_eq!(&after.source, &before.source);
            }
            FieldUpdate::SourceValue(value) => {
                prop_assert_eq!(&after.claim_name, &before.claim_name);
                prop_assert_eq!(after.source_type(), before.source_type());
                prop_assert_eq!(after.source_value(), value.as_str());
            }
            FieldUpdate::SourceType(source_type) => {
                prop_assert_eq!(&after.claim_name, &before.claim_name);
                prop_assert_eq!(after.source_type(), Some(source_type));
            }
        }

        for (i, entry) in entries.iter().enumerate() {
            if i != index {
                prop_assert_eq!(after_list.get(i), Some(entry));
                prop_assert!(after_list.same_entry(&before_list, i));
            }
        }
        prop_assert!(!after_list.same_entry(&before_list, index));
    }

    #[test]
    fn prop_type_change_clears_value(
        entry in remapping(),
        target in source_type(),
    ) {
        prop_assume!(entry.source_type() != Some(target));
        let (owner, mut editor) = editor_over(std::slice::from_ref(&entry));

        editor.change_source_type(0, target);

        let after = owner.get().get(0).cloned().unwrap();
        prop_assert_eq!(after.source_type(), Some(target));
        prop_assert_eq!(after.source_value(), "");
    }
}
