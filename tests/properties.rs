use proptest::prelude::*;
use ras_field::{
    evaluate, evaluate_parallel, evaluate_unrolled, update, Gf16, Gf8, MulMatrix, UNROLL,
};

/// Distinct points plus a wanted point that is not among them.
fn points_and_wanted(max: usize) -> impl Strategy<Value = (Vec<u16>, u16)> {
    proptest::collection::hash_set(any::<u16>(), 2..=max).prop_map(|set| {
        let mut points: Vec<u16> = set.into_iter().collect();
        let wanted = points.pop().expect("at least two points");
        (points, wanted)
    })
}

fn blocks(count: usize, len: usize) -> impl Strategy<Value = Vec<Vec<u16>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u16>(), len), count)
}

proptest! {
    #[test]
    fn interpolation_recovers_any_known_value(
        (points, wanted) in points_and_wanted(12),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let field = Gf16::shared();
        let values: Vec<u16> = (0..points.len())
            .map(|i| (seed.rotate_left(i as u32 * 7) as u16) ^ i as u16)
            .collect();
        let y_wanted = field.interpolate(&points, &values, wanted).expect("points are distinct");

        let i = pick.index(points.len());
        let mut swapped_points = points.clone();
        let mut swapped_values = values.clone();
        swapped_points[i] = wanted;
        swapped_values[i] = y_wanted;
        let recovered = field
            .interpolate(&swapped_points, &swapped_values, points[i])
            .expect("points are distinct");
        prop_assert_eq!(recovered, values[i]);
    }

    #[test]
    fn coefficients_sum_to_one(points in proptest::collection::hash_set(any::<u8>(), 2..=40)) {
        let field = Gf8::shared();
        let mut points: Vec<u8> = points.into_iter().collect();
        let wanted = points.pop().expect("at least two points");
        let coefficients = field.lagrange_coefficients(&points, wanted).expect("points are distinct");
        let sum = coefficients.iter().fold(0u8, |acc, &c| acc ^ c);
        prop_assert_eq!(sum, 1, "constant data must interpolate to itself");
    }

    #[test]
    fn division_inverts_multiplication(a in any::<u16>(), b in 1..=u16::MAX) {
        let field = Gf16::shared();
        let product = field.mul(a, b);
        prop_assert_eq!(field.div(product, b).expect("nonzero divisor"), a);
    }

    #[test]
    fn unrolled_and_parallel_match_scalar(
        (points, wanted) in points_and_wanted(6),
        groups in 0usize..40,
        chunk_len in 1usize..100,
        seed in any::<u16>(),
    ) {
        let field = Gf16::shared();
        let len = groups * UNROLL;
        let data: Vec<Vec<u16>> = (0..points.len())
            .map(|i| (0..len).map(|k| (k as u16).wrapping_mul(seed | 1) ^ (i as u16).wrapping_mul(0x3141)).collect())
            .collect();
        let sources: Vec<&[u16]> = data.iter().map(|b| b.as_slice()).collect();
        let matrix = MulMatrix::build(field, &points, wanted).expect("points are distinct");

        let mut scalar = vec![0u16; len];
        evaluate(&matrix, &sources, &mut scalar).expect("lengths agree");

        let mut unrolled = vec![0xFFFFu16; len];
        evaluate_unrolled(&matrix, &sources, &mut unrolled).expect("length is aligned");
        prop_assert_eq!(&unrolled, &scalar);

        let mut parallel = vec![0xFFFFu16; len];
        evaluate_parallel(&matrix, &sources, &mut parallel, chunk_len).expect("lengths agree");
        prop_assert_eq!(&parallel, &scalar);
    }

    #[test]
    fn update_matches_full_evaluation(
        data in blocks(5, 24),
        replacement in proptest::collection::vec(any::<u16>(), 24),
        row in 0usize..5,
    ) {
        let field = Gf16::shared();
        let matrix = MulMatrix::build(field, &[10, 20, 30, 40, 50], 60).expect("points are distinct");
        let sources: Vec<&[u16]> = data.iter().map(|b| b.as_slice()).collect();

        let mut result = vec![0u16; 24];
        evaluate(&matrix, &sources, &mut result).expect("lengths agree");
        update(&matrix, row, &mut result, &data[row], &replacement).expect("row in range");

        let mut updated = sources.clone();
        updated[row] = replacement.as_slice();
        let mut expected = vec![0u16; 24];
        evaluate(&matrix, &updated, &mut expected).expect("lengths agree");
        prop_assert_eq!(result, expected);
    }
}
