#![cfg(test)]

extern crate std;

use crate::merkle::{build_proof, build_root, hash_pair, leaf_hash, process_proof, verify, MAX_PROOF_LEN};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, BytesN, Env, Vec};

fn leaves_for(env: &Env, payees: &[Address], base_amount: i128) -> Vec<BytesN<32>> {
    let mut leaves = Vec::new(env);
    for (i, payee) in payees.iter().enumerate() {
        leaves.push_back(leaf_hash(env, i as u32, payee, base_amount + i as i128));
    }
    leaves
}

#[test]
fn two_leaf_tree_proves_both_members() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let user1 = Address::generate(&env);
    let leaves = leaves_for(&env, &[user0.clone(), user1.clone()], 100);
    let root = build_root(&env, &leaves).unwrap();

    let proof0 = build_proof(&env, &leaves, 0).unwrap();
    let proof1 = build_proof(&env, &leaves, 1).unwrap();
    assert_eq!(proof0.len(), 1);
    assert!(verify(&env, &root, &leaf_hash(&env, 0, &user0, 100), &proof0));
    assert!(verify(&env, &root, &leaf_hash(&env, 1, &user1, 101), &proof1));
}

#[test]
fn altered_leaf_fields_do_not_verify() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let user1 = Address::generate(&env);
    let leaves = leaves_for(&env, &[user0.clone(), user1.clone()], 100);
    let root = build_root(&env, &leaves).unwrap();
    let proof0 = build_proof(&env, &leaves, 0).unwrap();

    assert!(!verify(&env, &root, &leaf_hash(&env, 0, &user0, 101), &proof0));
    assert!(!verify(&env, &root, &leaf_hash(&env, 1, &user0, 100), &proof0));
    assert!(!verify(&env, &root, &leaf_hash(&env, 0, &user1, 100), &proof0));
}

#[test]
fn empty_proof_never_verifies() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let leaf = leaf_hash(&env, 0, &user0, 100);

    // Even a root equal to the leaf itself is refused without a proof.
    assert!(!verify(&env, &leaf, &leaf, &Vec::new(&env)));
}

#[test]
fn single_leaf_tree_pairs_leaf_with_itself() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let leaves = leaves_for(&env, &[user0.clone()], 7);
    let root = build_root(&env, &leaves).unwrap();
    let leaf = leaves.get_unchecked(0);

    assert_eq!(root, hash_pair(&env, &leaf, &leaf));
    let proof = build_proof(&env, &leaves, 0).unwrap();
    assert_eq!(proof, vec![&env, leaf.clone()]);
    assert!(verify(&env, &root, &leaf, &proof));
}

#[test]
fn odd_sized_trees_prove_every_leaf() {
    let env = Env::default();
    for size in [3usize, 5, 7, 9] {
        let mut payees = std::vec::Vec::new();
        for _ in 0..size {
            payees.push(Address::generate(&env));
        }
        let leaves = leaves_for(&env, &payees, 1_000);
        let root = build_root(&env, &leaves).unwrap();

        for (i, payee) in payees.iter().enumerate() {
            let proof = build_proof(&env, &leaves, i as u32).unwrap();
            let leaf = leaf_hash(&env, i as u32, payee, 1_000 + i as i128);
            assert!(verify(&env, &root, &leaf, &proof), "size {size} index {i}");
        }
    }
}

#[test]
fn pair_hash_is_order_independent() {
    let env = Env::default();
    let a = BytesN::from_array(&env, &[1u8; 32]);
    let b = BytesN::from_array(&env, &[2u8; 32]);
    assert_eq!(hash_pair(&env, &a, &b), hash_pair(&env, &b, &a));
}

#[test]
fn proof_longer_than_index_space_is_rejected() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let leaf = leaf_hash(&env, 0, &user0, 1);
    let filler = BytesN::from_array(&env, &[9u8; 32]);

    let mut proof = Vec::new(&env);
    for _ in 0..=MAX_PROOF_LEN {
        proof.push_back(filler.clone());
    }
    let root = process_proof(&env, &leaf, &proof);
    assert!(!verify(&env, &root, &leaf, &proof));
}

#[test]
fn out_of_range_position_has_no_proof() {
    let env = Env::default();
    let user0 = Address::generate(&env);
    let leaves = leaves_for(&env, &[user0], 1);
    assert!(build_proof(&env, &leaves, 1).is_none());
    assert!(build_root(&env, &Vec::new(&env)).is_none());
}
