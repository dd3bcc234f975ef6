use criterion::{criterion_group, criterion_main, Criterion};
use stego_core::scrambler::LinearScrambler;
use stego_core::{decode, encode, PixelFormat, PixelImage};

pub fn image_decoding(c: &mut Criterion) {
    let mut image_with_secret = PixelImage::new(512, 512, PixelFormat::Rgba8);
    encode(&[0x5a; 4096], &mut image_with_secret, &mut LinearScrambler::new())
        .expect("Cannot write secret message");

    c.bench_function("Image Decoding", |b| {
        b.iter(|| {
            decode(&image_with_secret, &mut LinearScrambler::new())
                .expect("Cannot read secret message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
