use proptest::prelude::*;
use vic_cipher::alphabet::Alphabet;
use vic_cipher::pipeline::{
    chain_addition, straddle, transpose, untranspose, Direction, NumericKey, TranspositionKey,
};
use vic_cipher::{build_checkerboard, decrypt, encrypt, KeySet, Language, MonoParams, SquareType, VicConfig};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Multipliers coprime with 36
const AFFINE_MULTIPLIERS: [i64; 12] = [1, 5, 7, 11, 13, 17, 19, 23, 25, 29, 31, 35];

fn key_set() -> impl Strategy<Value = KeySet> {
    ("[A-Z]{1,8}", "[A-Z]{1,8}", "[A-Z]{1,8}", "[0-9]{1,8}")
        .prop_map(|(p, c, t, n)| KeySet::new(p, c, t, n))
}

fn square() -> impl Strategy<Value = (SquareType, Option<MonoParams>)> {
    prop_oneof![
        Just((SquareType::Standard, None)),
        Just((SquareType::Keyword, None)),
        Just((SquareType::Atbash, None)),
        (-100i64..100).prop_map(|shift| (SquareType::Caesar, Some(MonoParams::Shift { shift }))),
        (proptest::sample::select(AFFINE_MULTIPLIERS.to_vec()), 0i64..36)
            .prop_map(|(a, b)| (SquareType::Affine, Some(MonoParams::Affine { a, b }))),
    ]
}

fn config() -> impl Strategy<Value = VicConfig> {
    (square(), 1u8..=3, any::<bool>()).prop_map(|((square_type, mono_params), passes, chain)| {
        VicConfig {
            square_type,
            alphabet: Some(UPPER.into()),
            mono_params,
            passes,
            chain_addition: chain,
            ..Default::default()
        }
    })
}

proptest! {
    #[test]
    fn roundtrip_any_keys_and_config(
        plain in "[A-Z0-9]{0,40}",
        keys in key_set(),
        config in config(),
    ) {
        let cipher = encrypt(&plain, &keys, &config).unwrap();
        prop_assert_eq!(decrypt(&cipher, &keys, &config).unwrap(), plain);
    }

    #[test]
    fn encryption_is_deterministic(
        plain in "[A-Z0-9]{1,30}",
        keys in key_set(),
        config in config(),
    ) {
        prop_assert_eq!(
            encrypt(&plain, &keys, &config).unwrap(),
            encrypt(&plain, &keys, &config).unwrap()
        );
    }

    #[test]
    fn roundtrip_turkish_default_alphabet(
        plain in "[abcçdefgğhıijklmnoöprsştuüvyz0-6]{0,25}",
        keys in key_set(),
        passes in 1u8..=3,
        chain in any::<bool>(),
    ) {
        let config = VicConfig {
            square_type: SquareType::Keyword,
            language: Language::Turkish,
            passes,
            chain_addition: chain,
            ..Default::default()
        };
        let cipher = encrypt(&plain, &keys, &config).unwrap();
        prop_assert_eq!(decrypt(&cipher, &keys, &config).unwrap(), plain);
    }

    #[test]
    fn numeric_key_change_changes_ciphertext(
        plain in "[A-Z0-9]{2,30}",
        keys in key_set(),
        config in config(),
        bump in 1u32..10,
    ) {
        let mut digits: Vec<char> = keys.numeric.chars().collect();
        let first = digits[0].to_digit(10).unwrap();
        digits[0] = char::from_digit((first + bump) % 10, 10).unwrap();
        let altered = KeySet { numeric: digits.into_iter().collect(), ..keys.clone() };

        prop_assert_ne!(
            encrypt(&plain, &keys, &config).unwrap(),
            encrypt(&plain, &altered, &config).unwrap()
        );
    }

    #[test]
    fn transposition_passes_compose(
        text in proptest::collection::vec(proptest::char::range('A', 'Z'), 0..50),
        key in "[A-Za-z]{1,10}",
        passes in 1u8..=3,
    ) {
        let key = TranspositionKey::new(&key).unwrap();
        let mut stepwise = text.clone();
        for _ in 0..passes {
            stepwise = transpose(&stepwise, &key, 1);
        }
        let direct = transpose(&text, &key, passes);
        prop_assert_eq!(&direct, &stepwise);
        prop_assert_eq!(untranspose(&direct, &key, passes), text);
    }

    #[test]
    fn chain_change_feeds_forward_one_key_length(
        indices in proptest::collection::vec(0usize..36, 2..40),
        key in "[0-9]{1,6}",
        pos in any::<proptest::sample::Index>(),
    ) {
        let alphabet = Alphabet::new(UPPER).unwrap();
        let key = NumericKey::new(&key).unwrap();
        let m = key.len();
        let i = pos.index(indices.len());

        let plain: Vec<char> = indices.iter().map(|&k| alphabet.char_at(k)).collect();
        let mut bumped = plain.clone();
        bumped[i] = alphabet.char_at(indices[i] + 1);

        let a = chain_addition(&plain, &key, &alphabet, Direction::Encrypt).unwrap();
        let b = chain_addition(&bumped, &key, &alphabet, Direction::Encrypt).unwrap();

        prop_assert_eq!(&a[..i], &b[..i]);
        prop_assert_ne!(a[i], b[i]);
        if i + m < a.len() {
            prop_assert_ne!(a[i + m], b[i + m]);
        }
    }

    #[test]
    fn transposition_key_order_changes_output(
        (first, second) in (2usize..8).prop_flat_map(|width| (
            proptest::collection::vec(proptest::char::range('A', 'Z'), width),
            proptest::collection::vec(proptest::char::range('A', 'Z'), width),
        )),
        text in Just(UPPER.chars().collect::<Vec<char>>()).prop_shuffle(),
        len in 8usize..=36,
    ) {
        let first = TranspositionKey::new(&first.into_iter().collect::<String>()).unwrap();
        let second = TranspositionKey::new(&second.into_iter().collect::<String>()).unwrap();
        prop_assume!(first.order() != second.order());

        // Distinct characters and every column non-empty
        let text = &text[..len];
        prop_assert_ne!(transpose(text, &first, 1), transpose(text, &second, 1));
    }

    #[test]
    fn checkerboard_keyword_changes_letters(
        first in "[A-Z]{1,8}",
        second in "[A-Z]{1,8}",
    ) {
        let a = build_checkerboard(&first, Some(UPPER), Language::English).unwrap();
        let b = build_checkerboard(&second, Some(UPPER), Language::English).unwrap();
        prop_assume!(a.rows() != b.rows());

        // Every code on the board, row 0 first
        let mut digits: Vec<u8> = vec![0, 3, 4, 5, 6, 7, 8, 9];
        for prefix in [1u8, 2] {
            for col in 0..10 {
                digits.extend([prefix, col]);
            }
        }
        prop_assert_ne!(straddle(&digits, &a).unwrap(), straddle(&digits, &b).unwrap());
    }
}
