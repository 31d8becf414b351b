// In benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

use htf_int::{HtfCodec, HtfConfig, Script, VersionId};

// --- Bench input ---

const SENTENCE: &str =
    "îskô fos sûn hûwu sûn bôlfêlê sûît sûn îskô hôktun sûn îskô nexê kôs, fos hoî sîkîn Kulismus îskô";

/// A few kilobytes of fixture text, with a capitalized run every sentence.
fn generate_paragraph(sentences: usize) -> String {
    let mut text = String::new();
    for i in 0..sentences {
        if i > 0 {
            text.push_str(". ");
        }
        text.push_str(if i % 2 == 0 { SENTENCE } else { "Kon li mônbili Bônmili yê sûît" });
    }
    text
}

fn fixture_codec() -> HtfCodec {
    let config = HtfConfig {
        encodings_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/encodings"),
        ..Default::default()
    };
    HtfCodec::from_config(config).unwrap()
}

// --- Benchmark Suite ---

fn bench_codec(c: &mut Criterion) {
    let codec = fixture_codec();
    let paragraph = generate_paragraph(64);
    let current = codec.encode_with(&paragraph, VersionId::V3).unwrap();
    let legacy = codec.encode_with(&paragraph, VersionId::V2).unwrap();

    let mut group = c.benchmark_group("HTF-INT Codec");
    group.throughput(criterion::Throughput::Bytes(paragraph.len() as u64));

    group.bench_function("Encode [v3] Letter Run", |b| {
        b.iter(|| black_box(codec.encode_with(black_box(&paragraph), VersionId::V3)))
    });
    group.bench_function("Encode [v2] Longest Match", |b| {
        b.iter(|| black_box(codec.encode_with(black_box(&paragraph), VersionId::V2)))
    });

    for script in [Script::Latin, Script::Abugida, Script::Syllabary] {
        group.bench_function(format!("Decode [v3] {}", script), |b| {
            b.iter(|| black_box(codec.decode_as(black_box(&current), script)))
        });
    }
    group.bench_function("Decode [v2] latin", |b| {
        b.iter(|| black_box(codec.decode_as(black_box(&legacy), Script::Latin)))
    });

    group.bench_function("Canonical ID [v3]", |b| {
        b.iter(|| black_box(codec.canonical_id(black_box(&current))))
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
