use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tomesplit_core::Segmenter;

fn generate_document(books: usize, chapters_per_book: usize, paragraph_repeats: usize) -> String {
    let paragraph = "It was in July, 1805, and the speaker was the well-known Anna Pavlovna \
                     Scherer, maid of honor and favorite of the Empress Marya Fedorovna. ";
    let mut doc = String::from("Contents\n\n");

    for book in 0..books {
        doc.push_str(&format!("BOOK B{book}: 1805\n\n"));
        for chapter in 0..chapters_per_book {
            doc.push_str(&format!("CHAPTER C{chapter}\n\n"));
            doc.push_str(&paragraph.repeat(paragraph_repeats));
            doc.push_str("\n\n");
        }
    }

    doc.push_str("*** END OF THE PROJECT GUTENBERG EBOOK WAR AND PEACE ***\nlicense text\n");
    doc
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    let segmenter = Segmenter::default();

    for (books, chapters, repeats) in [(2, 10, 5), (17, 22, 20), (17, 22, 100)] {
        let doc = generate_document(books, chapters, repeats);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("default_patterns", doc.len()),
            &doc,
            |b, doc| b.iter(|| segmenter.segment(black_box(doc)).unwrap()),
        );
    }

    group.finish();
}

fn bench_clean(c: &mut Criterion) {
    let segmenter = Segmenter::default();
    let doc = generate_document(17, 22, 50);

    c.bench_function("clean/gutenberg_trailer", |b| {
        b.iter(|| segmenter.clean(black_box(&doc)).unwrap().len())
    });
}

criterion_group!(benches, bench_segment, bench_clean);
criterion_main!(benches);
