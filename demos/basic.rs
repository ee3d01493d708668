use shortcode::{Codec, CodecConfig, BASE62_ALPHABET};

fn main() {
    // Plain base62, no salt
    let config = CodecConfig::builder()
        .alphabet(BASE62_ALPHABET)
        .unwrap()
        .padding(0)
        .unwrap()
        .build();
    let codec = Codec::new(config);

    for id in [0, 61, 62, 1_000_000] {
        let token = codec.encode(id).unwrap();
        println!("{} -> {}", id, token); // 0 -> 0, 61 -> Z, 62 -> 10, ...
        assert_eq!(codec.decode(&token).unwrap(), id);
    }
}
