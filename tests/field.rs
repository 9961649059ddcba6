//! Field table and axiom tests
//!
//! Verifies log/exp round trips and field axioms for both symbol widths

use ras_field::{FieldConfig, FieldError, Gf16, Gf8};
use test_case::test_case;

#[test_case(0x169 ; "shipped generator")]
#[test_case(0x11D ; "reed solomon generator")]
#[test_case(0x12B ; "alternate generator 0x12b")]
#[test_case(0x1F5 ; "alternate generator 0x1f5")]
fn test_gf8_tables_round_trip(generator: u32) {
    let field = Gf8::with_generator(generator).expect("primitive generator");

    for a in 1..=255u8 {
        let log = field.log(a).expect("nonzero element has a log");
        assert!(log < 255);
        assert_eq!(field.exp(log), a, "exp(log({}))", a);
    }
    for i in 0..(2 * 255) {
        assert_eq!(field.log(field.exp(i)), Some(i % 255), "log(exp({}))", i);
    }
}

#[test_case(0x17F0B ; "shipped generator")]
#[test_case(0x1100B ; "par2 generator")]
#[test_case(0x1002D ; "alternate generator")]
fn test_gf16_tables_round_trip(generator: u32) {
    let field = Gf16::with_generator(generator).expect("primitive generator");

    for a in 1..=u16::MAX {
        let log = field.log(a).expect("nonzero element has a log");
        assert_eq!(field.exp(log), a);
    }
    for i in (0..65535).step_by(97) {
        assert_eq!(field.log(field.exp(i)), Some(i));
    }
}

#[test_case(0x11B, 51 ; "aes polynomial")]
#[test_case(0x101, 8 ; "reducible polynomial")]
fn test_gf8_rejects_non_primitive(generator: u32, period: usize) {
    assert_eq!(
        Gf8::with_generator(generator).unwrap_err(),
        FieldError::GeneratorNotPrimitive { generator, period }
    );
}

#[test_case(0x168 ; "even")]
#[test_case(0x69 ; "degree too low")]
#[test_case(0x269 ; "degree too high")]
fn test_gf8_rejects_malformed(generator: u32) {
    assert_eq!(
        Gf8::with_generator(generator).unwrap_err(),
        FieldError::InvalidGenerator { generator, bits: 8 }
    );
}

#[test]
fn test_gf8_axioms_exhaustive() {
    let field = Gf8::new().unwrap();

    for a in 0..=255u8 {
        // Addition is its own inverse
        assert_eq!(field.add(a, a), 0);
        assert_eq!(field.sub(field.add(a, 77), 77), a);
        // Identities
        assert_eq!(field.mul(a, 1), a);
        assert_eq!(field.mul(a, 0), 0);
        assert_eq!(field.mul(0, a), 0);

        for b in 0..=255u8 {
            assert_eq!(field.mul(a, b), field.mul(b, a), "{} * {}", a, b);
        }
    }
}

#[test]
fn test_gf8_associative_and_distributive() {
    let field = Gf8::new().unwrap();
    let samples = [0u8, 1, 2, 3, 29, 64, 127, 128, 200, 254, 255];

    for &a in &samples {
        for &b in &samples {
            for &c in &samples {
                assert_eq!(
                    field.mul(field.mul(a, b), c),
                    field.mul(a, field.mul(b, c))
                );
                assert_eq!(
                    field.mul(a, field.add(b, c)),
                    field.add(field.mul(a, b), field.mul(a, c))
                );
            }
        }
    }
}

#[test]
fn test_gf16_axioms_sampled() {
    let field = Gf16::new().unwrap();
    let samples = [0u16, 1, 2, 3, 0x00FF, 0x0100, 0x8000, 0xABCD, 0xFFFE, 0xFFFF];

    for &a in &samples {
        assert_eq!(field.add(a, a), 0);
        assert_eq!(field.mul(a, 1), a);
        assert_eq!(field.mul(a, 0), 0);
        for &b in &samples {
            assert_eq!(field.mul(a, b), field.mul(b, a));
            for &c in &samples {
                assert_eq!(
                    field.mul(field.mul(a, b), c),
                    field.mul(a, field.mul(b, c))
                );
            }
        }
    }
}

#[test]
fn test_fields_from_config() {
    let config = FieldConfig::gf8().with_generator(0x11D);
    let field = Gf8::from_config(&config).unwrap();
    assert_eq!(field.generator(), 0x11D);
    assert_eq!(field.size(), 256);
    assert_eq!(field.order(), 255);
    assert_eq!(field.bits(), 8);

    let field = Gf16::from_config(&FieldConfig::default()).unwrap();
    assert_eq!(field.size(), 65536);
}

#[test]
fn test_shared_fields_are_usable_across_threads() {
    let handles: Vec<_> = (0..4u16)
        .map(|t| {
            std::thread::spawn(move || {
                let field = Gf16::shared();
                field.mul(t + 2, field.inv(t + 2).unwrap())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
