use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::names::NameGenerator;

#[test]
fn test_names_are_reproducible() {
    let names = NameGenerator::new();
    let mut a = ChaChaRng::seed_from_u64(3);
    let mut b = ChaChaRng::seed_from_u64(3);

    for _ in 0..20 {
        assert_eq!(names.generate(&mut a), names.generate(&mut b));
    }
}

#[test]
fn test_names_start_with_a_known_syllable() {
    let names = NameGenerator::new();
    let mut rng = ChaChaRng::seed_from_u64(11);
    let prefixes = ["Zor", "Xan", "Vel", "Kor", "Lun", "Sol", "Aeg", "Neb", "Gal", "Or"];

    for _ in 0..200 {
        let name = names.generate(&mut rng);
        let bare = ["New ", "Alpha ", "Beta ", "Omega ", "Great ", "The "]
            .iter()
            .find_map(|s| name.strip_prefix(s))
            .unwrap_or(&name);
        assert!(
            prefixes.iter().any(|p| bare.starts_with(p)),
            "unexpected name {name:?}"
        );
    }
}

#[test]
fn test_most_names_are_bare() {
    let names = NameGenerator::new();
    let mut rng = ChaChaRng::seed_from_u64(5);

    let bare = (0..1000)
        .map(|_| names.generate(&mut rng))
        .filter(|n| !n.contains(' '))
        .count();

    // 18/24 without starter × 41/53 without tag ≈ 0.58
    assert!((480..=680).contains(&bare), "bare names: {bare}");
}
