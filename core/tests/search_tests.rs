use zearch_core::{top_k, KeywordIndex, Occurrence, RESULT_LIMIT};

fn index_with(lists: &[(&str, &[(&str, u32)])]) -> KeywordIndex {
    let mut index = KeywordIndex::new();
    for (kw, occs) in lists {
        let occs = occs
            .iter()
            .map(|(document, frequency)| Occurrence {
                document: document.to_string(),
                frequency: *frequency,
            })
            .collect();
        index.keywords.insert(kw.to_string(), occs);
    }
    index
}

#[test]
fn both_keywords_unknown_is_absent_not_empty() {
    let index = index_with(&[("cat", &[("d1", 3)])]);
    assert_eq!(top_k(&index, "unknown1", "unknown2", RESULT_LIMIT), None);
}

#[test]
fn a_known_keyword_with_an_empty_list_is_present_but_empty() {
    let index = index_with(&[("cat", &[])]);
    assert_eq!(
        top_k(&index, "cat", "unknown", RESULT_LIMIT),
        Some(Vec::new())
    );
}

#[test]
fn single_known_keyword_emits_its_list_in_order() {
    let index = index_with(&[("cat", &[("d1", 9), ("d2", 4), ("d3", 1)])]);
    let expected = Some(vec!["d1".to_string(), "d2".to_string(), "d3".to_string()]);
    assert_eq!(top_k(&index, "cat", "unknown", RESULT_LIMIT), expected);
    assert_eq!(top_k(&index, "unknown", "cat", RESULT_LIMIT), expected);
}

#[test]
fn result_is_capped_at_the_limit() {
    let index = index_with(&[(
        "cat",
        &[
            ("d1", 9),
            ("d2", 8),
            ("d3", 7),
            ("d4", 6),
            ("d5", 5),
            ("d6", 4),
            ("d7", 3),
        ],
    )]);
    let result = top_k(&index, "cat", "unknown", RESULT_LIMIT).unwrap();
    assert_eq!(result.len(), RESULT_LIMIT);
    assert_eq!(result, ["d1", "d2", "d3", "d4", "d5"]);
}

#[test]
fn merged_result_is_capped_too() {
    let index = index_with(&[
        ("cat", &[("a", 9), ("b", 7), ("c", 5), ("d", 3)]),
        ("dog", &[("e", 8), ("f", 6), ("g", 4), ("h", 2)]),
    ]);
    let result = top_k(&index, "cat", "dog", RESULT_LIMIT).unwrap();
    assert_eq!(result, ["a", "e", "b", "f", "c"]);
}

#[test]
fn exact_frequency_tie_prefers_the_first_keyword() {
    let index = index_with(&[("cat", &[("a", 3)]), ("dog", &[("b", 3)])]);
    assert_eq!(
        top_k(&index, "cat", "dog", RESULT_LIMIT).unwrap(),
        ["a", "b"]
    );
    assert_eq!(
        top_k(&index, "dog", "cat", RESULT_LIMIT).unwrap(),
        ["b", "a"]
    );
}

#[test]
fn a_document_matching_both_keywords_appears_once() {
    let index = index_with(&[
        ("cat", &[("x", 4), ("y", 2)]),
        ("dog", &[("x", 4), ("z", 1)]),
    ]);
    assert_eq!(
        top_k(&index, "cat", "dog", RESULT_LIMIT).unwrap(),
        ["x", "y", "z"]
    );
}

#[test]
fn duplicate_on_the_losing_side_is_skipped_without_emitting() {
    // "x" wins early via dog's frequency 5, then cat reaches its own x entry
    let index = index_with(&[
        ("cat", &[("y", 4), ("x", 2), ("w", 1)]),
        ("dog", &[("x", 5), ("z", 3)]),
    ]);
    assert_eq!(
        top_k(&index, "cat", "dog", RESULT_LIMIT).unwrap(),
        ["x", "y", "z", "w"]
    );
}

#[test]
fn disjunctive_scenario_ranks_by_frequency_across_keywords() {
    let index = index_with(&[
        ("cat", &[("d1", 3), ("d2", 1)]),
        ("dog", &[("d2", 5), ("d3", 5)]),
    ]);
    assert_eq!(
        top_k(&index, "cat", "dog", RESULT_LIMIT).unwrap(),
        ["d2", "d3", "d1"]
    );
}
