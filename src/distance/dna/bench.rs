use test::Bencher;
extern crate test;
use super::{
    test::{LONG_READ_1, LONG_READ_2},
    *,
};

#[bench]
fn tally_benchmark(b: &mut Bencher) {
    b.iter(|| tally_sites(LONG_READ_1, LONG_READ_2));
}

#[bench]
fn jukes_cantor_benchmark(b: &mut Bencher) {
    b.iter(|| jukes_cantor(LONG_READ_1, LONG_READ_2));
}

#[bench]
fn k2p_benchmark(b: &mut Bencher) {
    b.iter(|| kimura_two_parameter(LONG_READ_1, LONG_READ_2));
}

#[bench]
fn shared_tally_benchmark(b: &mut Bencher) {
    b.iter(|| {
        let tally = tally_sites(LONG_READ_1, LONG_READ_2);
        (tally.jc69_distance(), tally.k2p_distance())
    });
}
