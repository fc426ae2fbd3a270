mod proptest_invariants;
