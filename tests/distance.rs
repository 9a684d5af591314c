use evodist::{assert_fp_eq, prelude::*};

#[test]
fn reference_values() {
    assert_fp_eq!(jukes_cantor(b"ATGC", b"ATGG"), Ok(0.304_098_831), 1e-8);
    assert_fp_eq!(kimura_two_parameter(b"ATGC", b"ATGG"), Ok(0.317_127_831), 1e-8);
}

#[test]
fn text_input() {
    let reference = "ATGGC-TAG";
    let distant = "ATG-CTTAT";

    // Two gap positions leave seven comparable sites with one G/T transversion
    let tally = tally_sites(reference.as_bytes(), distant.as_bytes());
    assert_eq!(tally.comparable_sites(), 7);
    assert_eq!(tally.transversions, 1);

    assert_fp_eq!(reference.distance_p(distant), Ok(1.0 / 7.0));
    assert_fp_eq!(
        reference.distance_jc69(distant),
        Ok(-0.75 * (1.0 - 4.0 / 21.0_f64).ln())
    );
    assert_fp_eq!(
        reference.distance_k2p(distant),
        Ok(-0.5 * ((1.0 - 1.0 / 7.0_f64) * (1.0 - 2.0 / 7.0_f64).sqrt()).ln())
    );
}

#[test]
fn shared_tally_matches_each_model() {
    let pair = AlignedPair::new(b"GATTACAGGCTTAC-GATAGCTAG", b"GATCACAGACTTACCGATTGCTAG");
    let tally = pair.tally();

    assert_eq!(tally.jc69_distance(), pair.jukes_cantor());
    assert_eq!(tally.k2p_distance(), pair.kimura_two_parameter());
    assert_eq!(tally.p_distance(), p_distance(pair.reference(), pair.distant()));
}

#[test]
fn errors_are_distinguishable() {
    assert_eq!(jukes_cantor(b"---", b"ACG"), Err(DistanceError::NoComparableSites));
    assert_eq!(
        jukes_cantor(b"AAAA", b"CCCC"),
        Err(DistanceError::Saturated(DistanceModel::Jc69))
    );
    assert_eq!(
        kimura_two_parameter(b"AAAA", b"CCCC"),
        Err(DistanceError::Saturated(DistanceModel::K2p))
    );
}

#[test]
fn hamming_counts_raw_differences() {
    assert_eq!(hamming(b"ATGC-", b"ATGGA"), 2);
}

#[cfg(feature = "rand")]
#[test]
fn random_alignments_with_gaps() {
    for seed in 0..10 {
        let reference = rand_sequence(b"ACGT-", 1_000, seed);
        let distant = mutate_sequence(&reference, 0.05, seed + 1);
        let tally = tally_sites(&reference, &distant);

        assert!(tally.gaps > 0);
        assert_eq!(tally.overlap, 1_000);

        // Stripping the shared gap columns leaves the distances unchanged
        let (stripped_ref, stripped_dist): (Vec<u8>, Vec<u8>) = reference
            .iter()
            .zip(&distant)
            .filter(|(r, _)| **r != b'-')
            .map(|(r, d)| (*r, *d))
            .unzip();

        assert_eq!(jukes_cantor(&reference, &distant), jukes_cantor(&stripped_ref, &stripped_dist));
        assert_eq!(
            kimura_two_parameter(&reference, &distant),
            kimura_two_parameter(&stripped_ref, &stripped_dist)
        );
    }
}
