use shortcode::{Codec, CodecConfig, CodecError};

fn main() {
    let codec = Codec::new(
        CodecConfig::builder()
            .salt("change-me")
            .padding(3)
            .unwrap()
            .build(),
    );

    // Neighbouring ids give unrelated tokens
    for id in 100..105 {
        let token = codec.encode(id).unwrap();
        println!("{} -> {}", id, token);
        assert_eq!(codec.decode(&token).unwrap(), id);
    }

    match codec.decode("not-a-token") {
        Err(CodecError::InvalidCharacter { character, position }) => {
            println!("rejected {:?} at position {}", character, position)
        }
        other => println!("unexpected: {:?}", other),
    }
}
