#[macro_export]
macro_rules! test_field_arithmetic {
    ($field:ty) => {
        mod field_arithmetic {
            use alloc::vec::Vec;

            use num::bigint::BigUint;
            use rand::rngs::OsRng;
            use rand::{Rng, RngCore};
            use $crate::types::{Field, Sample};

            #[test]
            fn modular_reduction() {
                let mut rng = OsRng;
                for _ in 0..10 {
                    let x_lo = rng.next_u64();
                    let x_hi = rng.next_u64();
                    let x = (x_lo as u128) + ((x_hi as u128) << 64);
                    let a = <$field>::from_noncanonical_u128(x);
                    let b = <$field>::from_noncanonical_biguint(BigUint::from(x));
                    assert_eq!(a, b);
                }
            }

            #[test]
            fn primitive_root_order() {
                let max_power = 8.min(<$field>::TWO_ADICITY);
                for n_power in 0..max_power {
                    let root = <$field>::primitive_root_of_unity(n_power);
                    let order = <$field>::generator_order(root);
                    assert_eq!(order, 1 << n_power, "2^{}'th primitive root", n_power);
                }
            }

            #[test]
            fn two_adic_subgroup_is_closed() {
                type F = $field;

                let subgroup = F::two_adic_subgroup(4);
                assert_eq!(subgroup.len(), 16);
                let generator = subgroup[1];
                assert_eq!(generator * subgroup[15], F::ONE);
                let distinct = subgroup.iter().collect::<std::collections::HashSet<_>>();
                assert_eq!(distinct.len(), 16);
            }

            #[test]
            fn negation() {
                type F = $field;

                for x in [F::ZERO, F::ONE, F::TWO, F::NEG_ONE, F::rand()] {
                    assert_eq!(x + -x, F::ZERO);
                    assert_eq!(-x, F::ZERO - x);
                }
            }

            #[test]
            fn exponentiation() {
                type F = $field;

                assert_eq!(F::ZERO.exp_u64(0), <F>::ONE);
                assert_eq!(F::ONE.exp_u64(0), <F>::ONE);
                assert_eq!(F::TWO.exp_u64(0), <F>::ONE);

                assert_eq!(F::ZERO.exp_u64(1), <F>::ZERO);
                assert_eq!(F::ONE.exp_u64(1), <F>::ONE);
                assert_eq!(F::TWO.exp_u64(1), <F>::TWO);

                assert_eq!(F::TWO.exp_u64(10), F::from_canonical_u64(1024));
                assert_eq!(F::TWO.exp_power_of_2(3), F::from_canonical_u64(256));
            }

            #[test]
            fn exponentiation_large() {
                type F = $field;

                let mut rng = OsRng;

                let base = F::rand();
                let pow = BigUint::from(rng.gen::<u64>());
                let cycles = rng.gen::<u32>();
                let mul_group_order = F::order() - 1u32;
                let big_pow = &pow + &mul_group_order * cycles;
                let big_pow_wrong = &pow + &mul_group_order * cycles + 1u32;

                assert_eq!(base.exp_biguint(&pow), base.exp_biguint(&big_pow));
                assert_ne!(base.exp_biguint(&pow), base.exp_biguint(&big_pow_wrong));
            }

            #[test]
            fn inverses() {
                type F = $field;

                assert_eq!(F::ZERO.try_inverse(), None);

                let x = F::rand();
                let x1 = x.inverse();
                let x2 = x1.inverse();
                let x3 = x2.inverse();

                assert_eq!(x, x2);
                assert_eq!(x1, x3);
                assert_eq!(x * x1, F::ONE);
            }

            #[test]
            #[allow(clippy::eq_op)]
            fn add_neg_sub_mul() {
                type F = $field;

                let x = F::rand();
                let y = F::rand();
                let z = F::rand();
                assert_eq!(x + x, x * F::TWO);
                assert_eq!(x + x, x.double());
                assert_eq!(x * (-x), -x.square());
                assert_eq!(x + y, y + x);
                assert_eq!(x * y, y * x);
                assert_eq!(x * (y * z), (x * y) * z);
                assert_eq!(x - (y + z), (x - y) - z);
                assert_eq!((x + y) - z, x + (y - z));
                assert_eq!(x * (y + z), x * y + x * z);
            }

            #[test]
            fn inv_div() {
                type F = $field;

                let x = F::rand();
                let y = F::rand();
                let z = F::rand();
                assert_eq!(x.square().inverse(), x.inverse().square());
                assert_eq!((x / y) * y, x);
                assert_eq!(x / (y * z), (x / y) / z);
                assert_eq!((x * y) / z, x * (y / z));
            }

            #[test]
            fn sum_and_product() {
                type F = $field;

                let xs: Vec<F> = (1..=5u64).map(F::from_canonical_u64).collect();
                assert_eq!(xs.iter().copied().sum::<F>(), F::from_canonical_u64(15));
                assert_eq!(xs.iter().copied().product::<F>(), F::from_canonical_u64(120));
            }
        }
    };
}
