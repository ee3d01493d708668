use shortcode::{Codec, CodecConfig};

fn main() {
    // SHORTCODE_ALPHABET, SHORTCODE_SALT and SHORTCODE_PADDING are optional
    let config = match CodecConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    println!("{:?}", config);

    let codec = Codec::new(config);
    for arg in std::env::args().skip(1) {
        match arg.parse::<i64>() {
            Ok(id) => match codec.encode(id) {
                Ok(token) => println!("{} -> {}", id, token),
                Err(e) => println!("{}: {}", id, e),
            },
            Err(_) => match codec.decode(&arg) {
                Ok(id) => println!("{} -> {}", arg, id),
                Err(e) => println!("{}: {}", arg, e),
            },
        }
    }
}
