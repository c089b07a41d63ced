use pretty_assertions::assert_eq;

use crate::search::{search, SearchResult};
use crate::vocab::{BaseVocabulary, Registry, RegistryBuilder};

fn descriptions(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(SearchResult::description).collect()
}

fn hermetic() -> RegistryBuilder {
    RegistryBuilder::with_base(BaseVocabulary::empty())
}

fn assert_ranked(results: &[SearchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score() > b.score()
                || (a.score() == b.score()
                    && a.description().to_lowercase() <= b.description().to_lowercase()),
            "{:?} ({}) ranked before {:?} ({})",
            a.description(),
            a.score(),
            b.description(),
            b.score()
        );
    }
}

// -----------------------------------------------------------------------------
// Requirement 1: Invalid input yields no results
// -----------------------------------------------------------------------------
#[test]
fn test_empty_query() {
    assert!(Registry::shared().search("", 10).is_empty());
}

#[test]
fn test_zero_max() {
    assert!(Registry::shared().search("hap", 0).is_empty());
}

#[test]
fn test_no_match() {
    assert!(Registry::shared().search("xyzzy", 10).is_empty());
}

// -----------------------------------------------------------------------------
// Requirement 2: Name facet ranking (exact > prefix > substring)
// -----------------------------------------------------------------------------
#[test]
fn test_mouse() {
    let results = Registry::shared().search("mouse", 10);

    assert_eq!(descriptions(&results), vec!["mouse face", "mouse", "computer mouse"]);
    assert_eq!(
        results.iter().map(SearchResult::score).collect::<Vec<_>>(),
        vec![3500, 3009, 2996]
    );
}

#[test]
fn test_horse() {
    let results = Registry::shared().search("horse", 10);

    assert_eq!(descriptions(&results), vec!["horse face", "horse racing", "horse"]);
    assert_eq!(
        results.iter().map(SearchResult::score).collect::<Vec<_>>(),
        vec![3500, 3003, 3001]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let results = Registry::shared().search("TopHat", 5);
    assert_eq!(results[0].description(), "top hat");
    assert_eq!(results[0].score(), 3500);
}

#[test]
fn test_search_result_accessors() {
    let results = search("minidisc", 1);
    assert_eq!(results.len(), 1);

    let disk = &results[0];
    assert_eq!(disk.aliases(), ["minidisc".to_string()]);
    assert_eq!(disk.description(), "computer disk");
    assert_eq!(disk.glyph(), Some("💽"));
    assert_eq!(disk.image_url(), None);
    assert_eq!(disk.category(), Some("Objects"));
    assert_eq!(disk.score(), 3500);
}

// -----------------------------------------------------------------------------
// Requirement 3: Later facets and deduplication
// -----------------------------------------------------------------------------
#[test]
fn test_description_then_tag() {
    // "party popper" matches by description; "balloon" only through the
    // shared "party" tag, whose representative is the party popper.
    let results = Registry::shared().search("party", 10);

    assert_eq!(descriptions(&results), vec!["party popper", "balloon"]);
    assert_eq!(results[0].score(), 2003);
    assert_eq!(results[1].score(), 1500);
}

#[test]
fn test_first_pass_fixes_score() {
    // The musical note is found by name, description and tag; only the name
    // score counts.
    let results = Registry::shared().search("music", 10);

    assert_eq!(descriptions(&results), vec!["musical note", "musical notes"]);
    assert_eq!(results[0].score(), 3003);
    assert_eq!(results[1].score(), 2002);
}

#[test]
fn test_category_facet_with_tie_break() {
    let results = Registry::shared().search("objects", 3);

    assert_eq!(
        descriptions(&results),
        vec!["computer disk", "computer mouse", "left-pointing magnifying glass"]
    );
    assert!(results.iter().all(|r| r.score() == 500));
}

#[test]
fn test_local_category_group() {
    let mut builder = hermetic();
    builder
        .add_image("/trollface.png", "trollface", &["trollface"], Some("GitHub"), &[])
        .unwrap()
        .add_image("/shipit.png", "ship it!", &["shipit", "squirrel"], Some("GitHub"), &[])
        .unwrap()
        .add_image("/octocat.png", "octocat", &["cat"], Some("GitHub"), &[])
        .unwrap();
    let registry = builder.build();

    let results = registry.search("github", 10);
    assert_eq!(descriptions(&results), vec!["octocat", "ship it!", "trollface"]);
    assert_eq!(results[1].image_url(), Some("/shipit.png"));
}

// -----------------------------------------------------------------------------
// Requirement 4: Score ordering across facets
// -----------------------------------------------------------------------------
#[test]
fn test_exact_name_outranks_exact_description() {
    let mut builder = hermetic();
    builder
        .add_glyph("a", "a very long description that does not say it", &["q"], None, &[])
        .unwrap()
        .add_glyph("b", "q", &["other"], None, &[])
        .unwrap();
    let registry = builder.build();

    let results = registry.search("q", 10);
    assert_eq!(descriptions(&results), vec!["a very long description that does not say it", "q"]);
    assert_eq!(results[0].score(), 3500);
    assert_eq!(results[1].score(), 2500);
}

#[test]
fn test_single_local_entry_prefix() {
    let mut builder = hermetic();
    builder
        .add_glyph("🐎", "horse racing", &["horse_racing"], None, &[])
        .unwrap();
    let registry = builder.build();

    let results = registry.search("horse", 5);
    assert_eq!(descriptions(&results), vec!["horse racing"]);
    assert_eq!(results[0].score(), 3003);
}

// -----------------------------------------------------------------------------
// Requirement 5: Overrides hide base facet contributions
// -----------------------------------------------------------------------------
#[test]
fn test_override_hides_base_entry() {
    let mut builder = RegistryBuilder::new();
    builder.add_glyph("🐴", "pony", &["pony"], None, &[]).unwrap();
    let registry = builder.build();

    let results = registry.search("horse", 10);
    assert_eq!(descriptions(&results), vec!["horse racing", "horse"]);

    let pony = registry.search("pony", 10);
    assert_eq!(descriptions(&pony), vec!["pony"]);
    assert_eq!(pony[0].glyph(), Some("🐴"));
}

#[test]
fn test_override_hides_base_tag_representative() {
    let mut base = hermetic();
    base.add_glyph("🍊", "tangerine", &[], None, &["fruit"])
        .unwrap()
        .add_glyph("🍎", "red apple", &[], None, &["fruit"])
        .unwrap();

    let mut builder = RegistryBuilder::with_base(base.build_base());
    builder.add_glyph("🍊", "orange", &[], None, &[]).unwrap();
    let registry = builder.build();

    assert_eq!(descriptions(&registry.search("fruit", 10)), vec!["red apple"]);
    assert_eq!(descriptions(&registry.search("orange", 10)), vec!["orange"]);
    assert!(registry.search("tangerine", 10).is_empty());
}

// -----------------------------------------------------------------------------
// Requirement 6: Output is bounded and ranked
// -----------------------------------------------------------------------------
#[test]
fn test_bounded_and_ranked() {
    let registry = Registry::shared();
    for query in ["a", "e", "o", "face", "cl", "ing", "s"] {
        for max in [1, 2, 3, 10, 100] {
            let results = registry.search(query, max);
            assert!(results.len() <= max, "{query:?} returned {} > {max}", results.len());
            assert_ranked(&results);
        }
    }
}

#[test]
fn test_results_are_distinct_entries() {
    let results = Registry::shared().search("e", 100);
    for (i, a) in results.iter().enumerate() {
        for b in &results[i + 1..] {
            assert!(!std::sync::Arc::ptr_eq(a.entry(), b.entry()));
        }
    }
}
