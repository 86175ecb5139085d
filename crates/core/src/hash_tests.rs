use super::*;

#[test]
fn next_prime_returns_input_when_already_prime() {
    assert_eq!(next_prime(7), 7);
    assert_eq!(next_prime(1000003), 1000003);
}

#[test]
fn next_prime_rounds_up() {
    assert_eq!(next_prime(4), 5);
    assert_eq!(next_prime(8), 11);
    assert_eq!(next_prime(1000), 1009);
}

#[test]
fn next_prime_never_undershoots() {
    for n in 0..500 {
        assert!(next_prime(n) >= n.max(2));
    }
}

#[test]
fn hash_docno_is_deterministic() {
    assert_eq!(hash_docno("docA"), hash_docno("docA"));
    assert_ne!(hash_docno("docA"), hash_docno("docB"));
}

#[test]
fn hash_qid_is_deterministic() {
    assert_eq!(hash_qid(1), hash_qid(1));
    assert_ne!(hash_qid(1), hash_qid(2));
}
