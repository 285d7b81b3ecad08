// The first value below matches the reference xoroshiro128++ output for seed 12345 after the
// standard 64 to 128 bit seed upgrade, truncated to its low 32 bits.

use procnoise::{
    random::{util::seed_to_u128_seed, XoroshiroRandom},
    ScalarNoise,
};
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn xoroshiro_test() {
    let mut rand = XoroshiroRandom::new(12345);
    assert_eq!(rand.next_u64() as u32 as i32, 57184507);

    let mut rand = XoroshiroRandom::new(0);
    assert_eq!(rand.next_u64(), 3038984756725240190);
    assert_eq!(rand.next_u64(), 14752704786953913202);
    assert_eq!(rand.next_u64(), 4633751808701151732);

    let mut rand = XoroshiroRandom::new(42);
    assert_eq!(rand.next_u32(), 3201606612);
    assert_eq!(rand.next_u32(), 1709375947);
    assert_eq!(rand.next_u32(), 2538787796);
}

#[test]
fn seeding_paths_agree() {
    let mut a = XoroshiroRandom::new(777);
    let mut b = XoroshiroRandom::seed_from_u64(777);

    let (low, high) = seed_to_u128_seed(777);
    let mut bytes = [0u8; 16];
    bytes[.. 8].copy_from_slice(&low.to_le_bytes());
    bytes[8 ..].copy_from_slice(&high.to_le_bytes());
    let mut c = XoroshiroRandom::from_seed(bytes);

    for _ in 0 .. 16 {
        let expected = a.next_u64();
        assert_eq!(b.next_u64(), expected);
        assert_eq!(c.next_u64(), expected);
    }
}

#[test]
fn uniform_mean() {
    let mut rand = XoroshiroRandom::new(31);
    let count = 100_000;

    let mean = (0 .. count).map(|_| rand.uniform_in(0.0, 1.0) as f64).sum::<f64>() / count as f64;
    assert!((mean - 0.5).abs() < 0.01, "Mean of uniform(0, 1) drifted to {}", mean);
}

#[test]
fn gaussian_is_bounded_by_construction() {
    let mut rand = XoroshiroRandom::new(6);
    let bound = 300f32.sqrt();

    for _ in 0 .. 1000 {
        let g = rand.gaussian_noise();
        assert!(g.abs() <= bound, "{} exceeds the CLT bound", g);
    }
}

#[test]
fn scalar_noise_works_on_any_rng() {
    // Borrowed and boxed generators get the helpers too
    let mut rand = XoroshiroRandom::new(1);
    let dynamic: &mut dyn RngCore = &mut rand;
    let v = dynamic.uniform();
    assert!((-1.0 ..= 1.0).contains(&v));

    let mut std_rand = rand::rngs::mock::StepRng::new(0, 1 << 40);
    let w: f32 = std_rand.gen();
    assert!((0.0 .. 1.0).contains(&w));
    assert!(std_rand.gaussian_noise().is_finite());
}
