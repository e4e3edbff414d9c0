// benches/frequency.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordchart::{
    analysis::{filter, frequency, segment, SegmenterKind, TokenFilter},
    core::{html, sanitize},
};

/// Synthetic article: mixed Latin/CJK paragraphs, scripts and styles to skip.
fn sample_page() -> String {
    let para = "<p>Rust 是一种系统编程语言，专注于安全、速度和并发。\
                Rust is a systems programming language focused on safety, speed, and concurrency. \
                我们学习 Rust，我们喜欢 Rust！Ownership, borrowing & lifetimes (2015–2024).</p>";
    let mut s = String::from("<html><head><title>Bench</title><style>p{margin:0}</style></head><body>");
    for i in 0..400 {
        s.push_str(para);
        if i % 25 == 0 {
            s.push_str("<script>var tracking = 'ignored ignored ignored';</script>");
        }
    }
    s.push_str("</body></html>");
    s
}

fn bench_frequency(c: &mut Criterion) {
    let page = sample_page();
    let text = sanitize::clean(&html::extract_text(&page));

    c.bench_function("extract_and_clean", |b| {
        b.iter(|| {
            let t = sanitize::clean(&html::extract_text(black_box(&page)));
            black_box(t.len())
        })
    });

    for kind in [SegmenterKind::Unicode, SegmenterKind::Whitespace, SegmenterKind::Jieba] {
        let seg = segment::build(kind);
        c.bench_function(&format!("frequency_{}", kind.key()), |b| {
            b.iter(|| {
                let t = frequency(black_box(&text), seg.as_ref(), TokenFilter::default(), 20);
                black_box(filter(&t, 2).len())
            })
        });
    }
}

criterion_group!(benches, bench_frequency);
criterion_main!(benches);
