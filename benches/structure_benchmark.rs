//! Benchmarks for the heuristic hot paths.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uncv::{reconstruct_page_text, ResumeStructurer, TextFragment, DEFAULT_LINE_TOLERANCE};

/// Synthetic resume text with the usual section shape.
fn synthetic_resume(experience_lines: usize) -> String {
    let mut text = String::from(
        "Jane Q. Public\njane.public@example.com\n(415) 555-0199\n\nSUMMARY\n\
         Backend engineer focused on billing and settlement systems at scale.\n\nEXPERIENCE\n",
    );
    for i in 0..experience_lines {
        text.push_str(&format!(
            "Built and operated service number {} for several years\n",
            i
        ));
    }
    text.push_str(
        "\nEDUCATION\nBS Computer Science, State University 2014\n\nSKILLS\n\
         Rust, Go, SQL, Kubernetes, Terraform, Postgres, Kafka, gRPC\n",
    );
    text
}

/// Synthetic page: `lines` rows of `cols` fragments each.
fn synthetic_fragments(lines: usize, cols: usize) -> Vec<TextFragment> {
    let mut fragments = Vec::with_capacity(lines * cols);
    for row in 0..lines {
        for col in 0..cols {
            fragments.push(TextFragment::new(
                format!("w{}x{}", row, col),
                40.0 + 60.0 * col as f32,
                760.0 - 14.0 * row as f32,
            ));
        }
    }
    fragments
}

fn bench_structure(c: &mut Criterion) {
    let structurer = ResumeStructurer::new();
    let small = synthetic_resume(5);
    let large = synthetic_resume(200);

    c.bench_function("structure_small_resume", |b| {
        b.iter(|| structurer.structure(black_box(&small)))
    });
    c.bench_function("structure_large_resume", |b| {
        b.iter(|| structurer.structure(black_box(&large)))
    });
}

fn bench_line_reconstruction(c: &mut Criterion) {
    let page = synthetic_fragments(50, 8);

    c.bench_function("reconstruct_page_50_lines", |b| {
        b.iter(|| reconstruct_page_text(black_box(&page), DEFAULT_LINE_TOLERANCE))
    });
}

criterion_group!(benches, bench_structure, bench_line_reconstruction);
criterion_main!(benches);
