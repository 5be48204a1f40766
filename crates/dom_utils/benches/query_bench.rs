use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dom::Document;
use dom_utils::{by_class_name, by_id, by_tag_name, query_all};

const SMALL_ROWS: usize = 64;
const LARGE_ROWS: usize = 20_000;

fn make_table(rows: usize) -> Document {
    let mut markup = String::with_capacity(rows * 96 + 64);
    markup.push_str("<body><table id=\"grid\"><tbody>");
    for i in 0..rows {
        let parity = if i % 2 == 0 { "even" } else { "odd" };
        markup.push_str(&format!(
            "<tr class=\"row {parity}\"><td class=\"cell\">{i}</td><td class=\"cell last\">x</td></tr>",
        ));
    }
    markup.push_str("</tbody></table></body>");
    Document::from_markup(&markup)
}

fn bench_parse_large(c: &mut Criterion) {
    c.bench_function("bench_parse_large", |b| {
        b.iter(|| {
            let doc = make_table(black_box(LARGE_ROWS));
            black_box(doc.descendants(doc.root()).len());
        });
    });
}

fn bench_by_id(c: &mut Criterion) {
    let doc = make_table(LARGE_ROWS);
    c.bench_function("bench_by_id", |b| {
        b.iter(|| black_box(by_id(black_box(&doc), "grid")));
    });
}

fn bench_by_tag_name_large(c: &mut Criterion) {
    let doc = make_table(LARGE_ROWS);
    c.bench_function("bench_by_tag_name_large", |b| {
        b.iter(|| black_box(by_tag_name(black_box(&doc), "td").len()));
    });
}

fn bench_by_class_name_large(c: &mut Criterion) {
    let doc = make_table(LARGE_ROWS);
    c.bench_function("bench_by_class_name_large", |b| {
        b.iter(|| black_box(by_class_name(black_box(&doc), "odd").len()));
    });
}

fn bench_query_all_small(c: &mut Criterion) {
    let doc = make_table(SMALL_ROWS);
    c.bench_function("bench_query_all_small", |b| {
        b.iter(|| black_box(query_all(black_box(&doc), "#grid tr.odd > td.last").len()));
    });
}

fn bench_query_all_large(c: &mut Criterion) {
    let doc = make_table(LARGE_ROWS);
    c.bench_function("bench_query_all_large", |b| {
        b.iter(|| black_box(query_all(black_box(&doc), "#grid tr.odd > td.last").len()));
    });
}

criterion_group!(
    benches,
    bench_parse_large,
    bench_by_id,
    bench_by_tag_name_large,
    bench_by_class_name_large,
    bench_query_all_small,
    bench_query_all_large
);
criterion_main!(benches);
