use crate::{check_shape, fixed_generator};
use regex::Regex;
use test_log::test;
use testgen::to_upper_first;

const FIRST: &str = r"^[A-Z][a-z]+(-[A-Z][a-z]+)?$";
const LAST: &str = r"^[A-Z]['a-zA-Z]+$";

#[test]
fn upper_first() {
    assert_eq!(to_upper_first("yadda"), "Yadda");
    assert_eq!(to_upper_first("Yadda"), "Yadda");
    assert_eq!(to_upper_first("yADDA yadda"), "YADDA yadda");
    assert_eq!(to_upper_first("x"), "X");
    assert_eq!(to_upper_first(""), "");
    assert_eq!(to_upper_first("ßtraße"), "SStraße");
}

#[test]
fn name_shapes() {
    let gen = fixed_generator();
    let first_re = Regex::new(FIRST).unwrap();
    let last_re = Regex::new(LAST).unwrap();

    for _ in 0..10_000 {
        for (first, middle, last) in [gen.name(), gen.male_name(), gen.female_name()] {
            assert!(first_re.is_match(first), "{:?}", first);
            assert!(first_re.is_match(middle), "{:?}", middle);
            assert!(last_re.is_match(last), "{:?}", last);
            assert_ne!(first, middle);
        }
    }
}

#[test]
fn names_have_requested_count() {
    let gen = fixed_generator();
    for _ in 0..1000 {
        let count = gen.int(0, 5) as usize;
        assert_eq!(gen.names(count).len(), count);
    }
}

#[test]
fn full_name_shapes() {
    let gen = fixed_generator();
    let mut names = Vec::new();
    check_shape(r"^[A-Z][a-z]+(-[A-Z][a-z]+)?\s([A-Z]\.\s)?[A-Z]['a-zA-Z]+$", 10_000, || {
        if names.is_empty() {
            names = gen.names(10);
        }
        names.pop().unwrap()
    });
}

#[test]
fn names_use_middle_initials_sometimes() {
    let gen = fixed_generator();
    let names = gen.names(1000);
    let with_initial = names.iter().filter(|name| name.contains(". ")).count();
    assert!(with_initial > 0 && with_initial < names.len());
}
