//! Round-trip and degeneration properties across random inputs

#[cfg(test)]
mod tests {
    use crate::radix::{from_string, to_string};
    use crate::tests::test_utils::{assert_roundtrip, random_alphabet, random_salt, salted};
    use crate::*;
    use rand::Rng;

    const BOUNDARY_IDS: [i64; 8] = [0, 1, 9, 10, 61, 62, 1_000_000, i64::MAX];

    #[test]
    fn test_radix_roundtrip_random_alphabets() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let alphabet = random_alphabet(&mut rng);
            for _ in 0..20 {
                let n: u128 = rng.random();
                let encoded = to_string(n, &alphabet);
                assert_eq!(from_string(&encoded, &alphabet), Ok(n), "alphabet {:?}", alphabet);
            }
        }
    }

    #[test]
    fn test_radix_boundaries_random_alphabets() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let alphabet = random_alphabet(&mut rng);
            let chars: Vec<char> = alphabet.as_str().chars().collect();
            let base = alphabet.base() as u128;

            assert_eq!(to_string(0, &alphabet), chars[0].to_string());
            assert_eq!(
                to_string(base - 1, &alphabet),
                chars[chars.len() - 1].to_string()
            );
            assert_eq!(
                to_string(base, &alphabet),
                format!("{}{}", chars[1], chars[0])
            );
        }
    }

    #[test]
    fn test_no_leading_zero_digit() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let alphabet = random_alphabet(&mut rng);
            let zero = alphabet.as_str().chars().next().unwrap();
            let n = rng.random_range(1..u64::MAX) as u128;
            assert!(!to_string(n, &alphabet).starts_with(zero));
        }
    }

    #[test]
    fn test_padded_roundtrip_random_configs() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let alphabet = random_alphabet(&mut rng);
            let salt = random_salt(&mut rng);
            let padding = rng.random_range(1..=MAX_PADDING);
            let config = salted(alphabet, &salt, padding);

            let random_ids: Vec<i64> = (0..10).map(|_| rng.random_range(0..=i64::MAX)).collect();
            assert_roundtrip(&config, BOUNDARY_IDS);
            assert_roundtrip(&config, random_ids);
        }
    }

    #[test]
    fn test_sequential_ids_with_every_padding() {
        for padding in 1..=MAX_PADDING {
            let config = salted(Alphabet::default(), "sequential", padding);
            assert_roundtrip(&config, 0..500);
        }
    }

    #[test]
    fn test_unpadded_degeneration() {
        let no_padding = salted(Alphabet::default(), "pepper", 0);
        let no_salt = salted(Alphabet::default(), "", 6);
        assert!(!no_padding.is_salted());
        assert!(!no_salt.is_salted());

        let mut rng = rand::rng();
        let ids = BOUNDARY_IDS
            .into_iter()
            .chain((0..100).map(|_| rng.random_range(0..=i64::MAX)));

        for id in ids {
            let plain = to_string(id as u128, &Alphabet::default());
            assert_eq!(encode(id, &no_padding).unwrap(), plain);
            assert_eq!(encode(id, &no_salt).unwrap(), plain);
            assert_eq!(decode(&plain, &no_padding), Ok(id));
            assert_eq!(decode(&plain, &no_salt), Ok(id));
        }
    }

    #[test]
    fn test_sequential_ids_do_not_give_sequential_tokens() {
        let config = salted(Alphabet::new(BASE62_ALPHABET).unwrap(), "pepper", 3);
        let plain = salted(Alphabet::new(BASE62_ALPHABET).unwrap(), "", 3);

        let salted_tokens: Vec<String> = (100..110).map(|id| encode(id, &config).unwrap()).collect();
        let plain_tokens: Vec<String> = (100..110).map(|id| encode(id, &plain).unwrap()).collect();

        // Plain tokens share every character but the last
        assert!(plain_tokens.windows(2).all(|w| w[0][..1] == w[1][..1]));
        assert_ne!(salted_tokens, plain_tokens);
    }

    #[test]
    fn test_salt_changes_tokens() {
        let alphabet = Alphabet::new(BASE62_ALPHABET).unwrap();
        let xyz = salted(alphabet.clone(), "xyz", 2);
        let abc = salted(alphabet, "abc", 2);

        let token = encode(5, &xyz).unwrap();
        assert_eq!(encode(5, &xyz).unwrap(), token);
        assert_eq!(decode(&token, &xyz), Ok(5));
        assert_ne!(encode(5, &abc).unwrap(), token);
    }

    #[test]
    fn test_foreign_tokens_decode_to_something() {
        let config = salted(Alphabet::new(BASE62_ALPHABET).unwrap(), "xyz", 2);
        // Not produced by encode, but well formed
        assert!(decode("abcdef", &config).is_ok());
    }
}
