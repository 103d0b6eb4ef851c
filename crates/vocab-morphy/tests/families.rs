use vocab_morphy::{IRREGULAR_VERBS, Morphy, SPELLING_VARIANTS};
use vocab_types::Pos;

#[test]
fn every_irregular_form_maps_back_to_a_base() {
    let morph = Morphy::new();
    for forms in IRREGULAR_VERBS {
        assert_eq!(morph.base_verb(forms.base), Some(forms.base));
        for form in forms.inflections() {
            let base = morph.base_verb(form).expect("form is indexed");
            let family = morph.family(form, Pos::Verb);
            assert!(family.contains(base), "{form} family lacks {base}");
            assert!(family.contains(form));
        }
    }
}

#[test]
fn every_spelling_pair_resolves_both_ways() {
    let morph = Morphy::new();
    for &(american, british) in SPELLING_VARIANTS {
        let from_us = morph.variants(american);
        assert!(from_us.american.iter().any(|w| w == american));
        assert!(from_us.british.iter().any(|w| w == british));

        let from_uk = morph.variants(british);
        assert!(from_uk.british.iter().any(|w| w == british));
        assert!(
            from_uk.american.iter().any(|w| w == american),
            "{british} should map to {american}"
        );
    }
}

#[test]
fn short_closed_syllables_double_the_final_consonant() {
    let morph = Morphy::new();
    for (verb, past, ing) in [
        ("jog", "jogged", "jogging"),
        ("stop", "stopped", "stopping"),
        ("plan", "planned", "planning"),
        ("rob", "robbed", "robbing"),
    ] {
        let family = morph.family(verb, Pos::Verb);
        assert!(family.contains(past), "{verb} -> {past}");
        assert!(family.contains(ing), "{verb} -> {ing}");
        assert!(family.contains(&format!("{verb}s")));
    }
}

#[test]
fn families_are_lowercase_and_contain_the_word() {
    let morph = Morphy::new();
    for (word, pos) in [
        ("Colour", Pos::Noun),
        ("Theatre", Pos::Noun),
        ("BUY", Pos::Verb),
        ("Busy", Pos::Adjective),
        ("Often", Pos::Other),
    ] {
        let family = morph.family(word, pos);
        assert!(family.contains(&word.to_lowercase()));
        assert!(family.iter().all(|w| !w.is_empty() && *w == w.to_lowercase()));
    }
}
