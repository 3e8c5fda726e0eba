//! Property tests for question list mutations.

use proptest::prelude::*;

use exam_model::{QuestionDraft, QuestionKind};
use exam_store::{QuestionStore, StoreError};

fn draft_strategy() -> impl Strategy<Value = QuestionDraft> {
    let text = "[a-zA-Z0-9 ?]{0,12}";
    let option = "[a-z ]{0,4}";
    (
        text,
        any::<bool>(),
        [option, option, option, option],
    )
        .prop_map(|(text, essay, options)| {
            if essay {
                QuestionDraft::essay(text)
            } else {
                let [a, b, c, d] = options;
                QuestionDraft::multiple_choice(text, [a.as_str(), b.as_str(), c.as_str(), d.as_str()])
            }
        })
}

fn is_valid(draft: &QuestionDraft) -> bool {
    if draft.text.trim().is_empty() {
        return false;
    }
    match draft.kind {
        QuestionKind::Essay => true,
        QuestionKind::MultipleChoice => draft.options.iter().all(|o| !o.trim().is_empty()),
    }
}

proptest! {
    #[test]
    fn snapshot_holds_every_accepted_draft_in_order(
        drafts in prop::collection::vec(draft_strategy(), 0..24)
    ) {
        let mut store = QuestionStore::new();
        let mut expected = Vec::new();
        for draft in &drafts {
            let before = store.len();
            match store.add_question(draft) {
                Ok(_) => {
                    prop_assert!(is_valid(draft));
                    expected.push(draft.text.trim().to_string());
                }
                Err(error) => {
                    prop_assert!(!is_valid(draft));
                    prop_assert!(matches!(error, StoreError::Validation(_)));
                    prop_assert_eq!(store.len(), before);
                }
            }
        }
        let snapshot = store.snapshot();
        let actual: Vec<String> = snapshot.iter().map(|q| q.text().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn remove_drops_exactly_one_and_keeps_relative_order(
        count in 1usize..16,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = QuestionStore::new();
        for n in 0..count {
            store.add_question(&QuestionDraft::essay(format!("Q{n}"))).unwrap();
        }
        let before: Vec<_> = store.iter().map(|q| q.id()).collect();
        let index = pick.index(count);

        let removed = store.remove_question(index).unwrap();

        let after: Vec<_> = store.snapshot().iter().map(|q| q.id()).collect();
        prop_assert_eq!(after.len(), count - 1);
        prop_assert!(!after.contains(&removed.id()));
        let mut expected = before.clone();
        expected.remove(index);
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn out_of_bounds_index_never_mutates(
        count in 0usize..8,
        extra in 0usize..8,
    ) {
        let mut store = QuestionStore::new();
        for n in 0..count {
            store.add_question(&QuestionDraft::essay(format!("Q{n}"))).unwrap();
        }
        let index = count + extra;
        prop_assert_eq!(
            store.remove_question(index).unwrap_err(),
            StoreError::IndexOutOfBounds { index, len: count }
        );
        prop_assert_eq!(
            store.replace_question(index, &QuestionDraft::essay("X")).unwrap_err(),
            StoreError::IndexOutOfBounds { index, len: count }
        );
        prop_assert_eq!(store.len(), count);
    }
}
