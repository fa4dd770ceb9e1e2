use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uint128::Uint128;

const ROUNDS: usize = 2_000;

/// Draws a halfword, biased towards the values where carries and borrows
/// change behavior.
fn halfword(prng: &mut ChaCha20Rng) -> u64 {
    match prng.gen_range(0..8u32) {
        0 => 0,
        1 => 1,
        2 => u64::MAX,
        3 => 1 << 63,
        _ => prng.next_u64(),
    }
}

fn value(prng: &mut ChaCha20Rng) -> Uint128 {
    let high = halfword(prng);
    let low = halfword(prng);

    Uint128::new(high, low)
}

#[test]
fn arithmetic_matches_native_u128() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let y = value(&mut prng);
        let (a, b) = (x.to_u128(), y.to_u128());

        assert_eq!((x + y).to_u128(), a.wrapping_add(b));
        assert_eq!((x - y).to_u128(), a.wrapping_sub(b));
        assert_eq!(x.increment().to_u128(), a.wrapping_add(1));
        assert_eq!(x.decrement().to_u128(), a.wrapping_sub(1));
        assert_eq!(x.checked_add(y).map(u128::from), a.checked_add(b));
        assert_eq!(x.checked_sub(y).map(u128::from), a.checked_sub(b));

        let carry = prng.gen_range(0..2u32) == 1;
        let (sum, carry_out) = x.add_with_carry(y, carry);
        let (expected, c0) = a.overflowing_add(b);
        let (expected, c1) = expected.overflowing_add(carry as u128);

        assert_eq!(sum.to_u128(), expected);
        assert_eq!(carry_out, c0 || c1);

        let (diff, borrow_out) = x.sub_with_borrow(y, carry);
        let (expected, b0) = a.overflowing_sub(b);
        let (expected, b1) = expected.overflowing_sub(carry as u128);

        assert_eq!(diff.to_u128(), expected);
        assert_eq!(borrow_out, b0 || b1);
    }
}

#[test]
fn logic_and_bit_counts_match_native_u128() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let y = value(&mut prng);
        let (a, b) = (x.to_u128(), y.to_u128());

        assert_eq!((x & y).to_u128(), a & b);
        assert_eq!((x | y).to_u128(), a | b);
        assert_eq!((x ^ y).to_u128(), a ^ b);
        assert_eq!((!x).to_u128(), !a);
        assert_eq!(x.and_not(y).to_u128(), a & !b);

        assert_eq!(x.leading_zeros(), a.leading_zeros());
        assert_eq!(x.trailing_zeros(), a.trailing_zeros());
        assert_eq!(x.count_ones(), a.count_ones());
        assert_eq!(x.bit_len(), 128 - a.leading_zeros());
        assert_eq!(x.reverse_bits().to_u128(), a.reverse_bits());
        assert_eq!(x.reverse_bytes().to_u128(), a.swap_bytes());

        assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}

#[test]
fn shifts_match_native_u128() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let a = x.to_u128();
        let n = prng.gen_range(0..256u32);

        let (left, right) = if n >= 128 {
            (0, 0)
        } else {
            (a << n, a >> n)
        };

        assert_eq!((x << n).to_u128(), left, "shift left by {n}");
        assert_eq!((x >> n).to_u128(), right, "shift right by {n}");
    }
}

#[test]
fn every_shift_amount_at_the_boundaries() {
    let x = Uint128::new(0x8000_0000_0000_0001, 0x8000_0000_0000_0001);
    let a = x.to_u128();

    for n in 0..128u32 {
        assert_eq!((x << n).to_u128(), a << n, "shift left by {n}");
        assert_eq!((x >> n).to_u128(), a >> n, "shift right by {n}");
    }
}

#[test]
fn compare_is_a_total_order() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let y = value(&mut prng);
        let z = value(&mut prng);

        assert_eq!(x.compare(x), 0);
        assert_eq!(x.compare(y), -y.compare(x));

        if x.compare(y) <= 0 && y.compare(z) <= 0 {
            assert!(x.compare(z) <= 0);
        }
    }
}

#[test]
fn algebraic_identities() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let y = value(&mut prng);
        let z = value(&mut prng);

        assert_eq!(x + y, y + x);
        assert_eq!((x + y) + z, x + (y + z));
        assert_eq!(x + Uint128::ZERO, x);
        assert_eq!(x - x, Uint128::ZERO);
        assert_eq!(x.increment().decrement(), x);
        assert_eq!((x + y) - y, x);

        assert_eq!(x.leading_zeros() + x.bit_len(), 128);
        assert_eq!(x.count_ones() + (!x).count_ones(), 128);
        assert_eq!(x.reverse_bits().reverse_bits(), x);
        assert_eq!(x.reverse_bytes().reverse_bytes(), x);

        assert_eq!(x << 128, Uint128::ZERO);
        assert_eq!(x >> 128, Uint128::ZERO);
    }
}

#[test]
fn shift_round_trip_clears_low_bits_only() {
    let mut prng = ChaCha20Rng::seed_from_u64(5);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let n = prng.gen_range(0..128u32);

        let round_trip = (x >> n) << n;
        let low_mask = if n == 0 {
            Uint128::ZERO
        } else {
            Uint128::MAX >> (128 - n)
        };

        assert_eq!(round_trip, x.and_not(low_mask));

        if x.trailing_zeros() >= n {
            assert_eq!(round_trip, x);
        }
    }
}

#[test]
fn hex_text_round_trips() {
    let mut prng = ChaCha20Rng::seed_from_u64(6);

    for _ in 0..ROUNDS {
        let x = value(&mut prng);
        let text = x.to_hex_string();

        assert_eq!(text, format!("{:x}", x.to_u128()));
        assert_eq!(Uint128::parse_hex(&text), Ok(x));
        assert_eq!(Uint128::parse_hex(&text.to_uppercase()), Ok(x));
        assert_eq!(format!("{:b}", x), format!("{:b}", x.to_u128()));
    }
}
