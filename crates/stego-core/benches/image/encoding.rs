use criterion::{criterion_group, criterion_main, Criterion};
use stego_core::scrambler::{KeyedScrambler, LinearScrambler};
use stego_core::{encode, PixelFormat, PixelImage};

pub fn image_encoding(c: &mut Criterion) {
    let secret_message = [0x5a; 4096];

    c.bench_function("Image Encoding", |b| {
        let mut plain_image = PixelImage::new(512, 512, PixelFormat::Rgba8);

        b.iter(|| {
            encode(&secret_message, &mut plain_image, &mut LinearScrambler::new())
                .expect("Cannot write secret message");
        })
    });

    c.bench_function("Image Encoding keyed", |b| {
        let mut plain_image = PixelImage::new(512, 512, PixelFormat::Rgba8);

        b.iter(|| {
            encode(
                &secret_message,
                &mut plain_image,
                &mut KeyedScrambler::new("Secret42"),
            )
            .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
